pub mod accounts;
pub mod clients;
pub mod dashboard;
pub mod operations;
