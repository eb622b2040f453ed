pub mod account;
pub mod client;
pub mod login;
pub mod operation;
pub mod validation;
