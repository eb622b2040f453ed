pub mod account;
pub mod client;
pub mod operation;
pub mod session;
