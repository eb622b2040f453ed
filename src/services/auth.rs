use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::error::{AppError, AppResult};
use crate::domain::models::session::{Credentials, Session, SessionObserver, SubscriptionId};
use crate::domain::repositories::auth::AuthRepository;
use crate::domain::services::auth::AuthService;
use crate::domain::services::session::SessionService;

pub struct AuthServiceImpl {
    repository: Arc<dyn AuthRepository>,
    sessions: Arc<dyn SessionService>,
}

impl AuthServiceImpl {
    pub fn new(repository: Arc<dyn AuthRepository>, sessions: Arc<dyn SessionService>) -> Self {
        Self {
            repository,
            sessions,
        }
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn login(&self, credentials: Credentials) -> AppResult<Session> {
        if credentials.username.trim().is_empty() || credentials.password.is_empty() {
            return Err(AppError::ValidationFailed(
                "Username and password are required",
            ));
        }

        let session = self.repository.login(&credentials).await?;

        self.sessions.establish(session.clone())?;

        Ok(session)
    }

    fn logout(&self) -> AppResult<()> {
        self.sessions.clear()
    }

    fn current_session(&self) -> Option<Session> {
        self.sessions.current_session()
    }

    fn subscribe(&self, observer: SessionObserver) -> SubscriptionId {
        self.sessions.subscribe(observer)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.sessions.unsubscribe(id)
    }
}
