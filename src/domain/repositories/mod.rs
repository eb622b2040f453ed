pub mod account;
pub mod auth;
pub mod client;
pub mod operation;
pub mod repository;
pub mod session;
pub mod storage;
