use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::domain::error::AppResult;
use crate::domain::models::session::{Session, SessionObserver, SubscriptionId};
use crate::domain::repositories::session::SessionRepository;
use crate::domain::services::session::SessionService;

pub struct SessionStore {
    repository: Arc<dyn SessionRepository>,
    session: RwLock<Option<Session>>,
    observers: Mutex<Vec<(SubscriptionId, SessionObserver)>>,
    next_id: AtomicU64,
}

impl SessionStore {
    /// Restores whatever session the repository holds. Unreadable storage
    /// yields a signed-out store.
    pub fn rehydrate(repository: Arc<dyn SessionRepository>) -> Self {
        let session = match repository.load() {
            Ok(session) => session,
            Err(error) => {
                tracing::warn!(trace = ?error.trace, "could not read the stored session, starting signed out");
                None
            }
        };

        if let Some(session) = &session {
            tracing::info!(username = %session.username, role = %session.role, "session restored");
        }

        SessionStore {
            repository,
            session: RwLock::new(session),
            observers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn replace(&self, session: Option<Session>) {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = session;
    }

    fn publish(&self) {
        let snapshot = self.current_session();
        let observers: Vec<SessionObserver> = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();

        for observer in observers {
            observer(snapshot.as_ref());
        }
    }
}

impl SessionService for SessionStore {
    fn current_session(&self) -> Option<Session> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn establish(&self, session: Session) -> AppResult<()> {
        self.repository.save(&session)?;

        tracing::info!(username = %session.username, role = %session.role, "session established");

        self.replace(Some(session));
        self.publish();

        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        let removed = self.repository.clear();

        if let Err(error) = &removed {
            tracing::warn!(trace = ?error.trace, "could not remove the stored session");
        }

        self.replace(None);
        self.publish();

        tracing::info!("session cleared");

        removed
    }

    fn subscribe(&self, observer: SessionObserver) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));

        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, observer.clone()));

        observer(self.current_session().as_ref());

        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.lock().unwrap_or_else(PoisonError::into_inner);
        let before = observers.len();
        observers.retain(|(subscribed, _)| *subscribed != id);
        observers.len() != before
    }
}
