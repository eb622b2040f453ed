use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::session::{Credentials, Role, Session, SessionObserver, SubscriptionId};

#[async_trait]
pub trait AuthService: 'static + Sync + Send {
    async fn login(&self, credentials: Credentials) -> AppResult<Session>;
    fn logout(&self) -> AppResult<()>;
    fn current_session(&self) -> Option<Session>;
    fn subscribe(&self, observer: SessionObserver) -> SubscriptionId;
    fn unsubscribe(&self, id: SubscriptionId) -> bool;

    fn is_authenticated(&self) -> bool {
        self.current_session().is_some()
    }

    fn role(&self) -> Option<Role> {
        self.current_session().map(|session| session.role)
    }
}
