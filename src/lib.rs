pub mod cli;
pub mod config;
pub mod container;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod telemetry;
pub mod ui;

#[cfg(test)]
mod tests;
