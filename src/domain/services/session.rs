use crate::domain::error::AppResult;
use crate::domain::models::session::{Session, SessionObserver, SubscriptionId};

/// Process-wide holder of the signed-in session.
///
/// Observers are notified synchronously after each mutation, before the
/// mutating call returns. A new observer immediately receives the current value.
pub trait SessionService: 'static + Sync + Send {
    fn current_session(&self) -> Option<Session>;
    fn establish(&self, session: Session) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
    fn subscribe(&self, observer: SessionObserver) -> SubscriptionId;
    fn unsubscribe(&self, id: SubscriptionId) -> bool;

    fn token(&self) -> Option<String> {
        self.current_session().map(|session| session.token)
    }
}
