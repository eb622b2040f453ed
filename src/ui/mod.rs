pub mod controllers;
pub mod dialog;
pub mod dto;
pub mod middlewares;
pub mod modal;
pub mod router;

use std::sync::Arc;
use std::time::Duration;

use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::client::ClientRepository;
use crate::domain::repositories::operation::OperationRepository;
use crate::domain::services::auth::AuthService;

use dialog::Dialog;

/// Everything a screen controller talks to.
pub struct Context {
    pub auth: Arc<dyn AuthService>,
    pub clients: Arc<dyn ClientRepository>,
    pub accounts: Arc<dyn AccountRepository>,
    pub operations: Arc<dyn OperationRepository>,
    pub dialog: Arc<dyn Dialog>,
    pub load_timeout: Duration,
    pub base_url: String,
}
