use std::sync::Arc;

use crate::domain::models::session::Session;
use crate::domain::repositories::repository::RepositoryResult;
use crate::domain::repositories::session::SessionRepository;
use crate::domain::repositories::storage::KeyValueStore;
use crate::infrastructure::models::session::AuthResponse;

pub const TOKEN_KEY: &str = "token";
pub const CURRENT_USER_KEY: &str = "currentUser";

pub struct SessionRepositoryImpl {
    store: Arc<dyn KeyValueStore>,
}

impl SessionRepositoryImpl {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl SessionRepository for SessionRepositoryImpl {
    fn load(&self) -> RepositoryResult<Option<Session>> {
        let Some(token) = self.store.get(TOKEN_KEY)? else {
            return Ok(None);
        };

        let Some(raw) = self.store.get(CURRENT_USER_KEY)? else {
            tracing::warn!("stored token has no matching user record, ignoring it");
            return Ok(None);
        };

        let mut record = match serde_json::from_str::<AuthResponse>(&raw) {
            Ok(record) => record,
            Err(error) => {
                tracing::warn!(%error, "stored user record is unreadable, ignoring it");
                return Ok(None);
            }
        };

        record.token = token;

        match Session::try_from(record) {
            Ok(session) => Ok(Some(session)),
            Err(error) => {
                tracing::warn!(trace = ?error.trace, "stored user record has an unsupported role, ignoring it");
                Ok(None)
            }
        }
    }

    fn save(&self, session: &Session) -> RepositoryResult<()> {
        self.store.set(TOKEN_KEY, &session.token)?;
        self.store.set(
            CURRENT_USER_KEY,
            &serde_json::to_string(&AuthResponse::from(session))?,
        )
    }

    fn clear(&self) -> RepositoryResult<()> {
        let token = self.store.remove(TOKEN_KEY);
        let user = self.store.remove(CURRENT_USER_KEY);

        token.and(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::session::Role;
    use crate::infrastructure::repositories::storage::MemoryStore;
    use rstest::*;

    #[fixture]
    fn store() -> Arc<MemoryStore> {
        Arc::new(MemoryStore::default())
    }

    fn employee() -> Session {
        Session {
            token: "t2".to_string(),
            username: "sara".to_string(),
            role: Role::Employee,
            client_id: Some(12),
        }
    }

    #[rstest]
    fn test_save_then_load(store: Arc<MemoryStore>) {
        let repository = SessionRepositoryImpl::new(store.clone());

        repository.save(&employee()).unwrap();

        assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("t2"));
        assert_eq!(repository.load().unwrap(), Some(employee()));
    }

    #[rstest]
    fn test_clear_removes_both_keys(store: Arc<MemoryStore>) {
        let repository = SessionRepositoryImpl::new(store.clone());

        repository.save(&employee()).unwrap();
        repository.clear().unwrap();

        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(store.get(CURRENT_USER_KEY).unwrap(), None);
        assert_eq!(repository.load().unwrap(), None);
    }

    #[rstest]
    #[case::no_user_record(None)]
    #[case::garbage(Some("{not json"))]
    #[case::unknown_role(Some(r#"{"token":"t3","username":"x","role":"ROLE_CLIENT"}"#))]
    fn test_unusable_record_means_no_session(store: Arc<MemoryStore>, #[case] record: Option<&str>) {
        store.set(TOKEN_KEY, "t3").unwrap();
        if let Some(record) = record {
            store.set(CURRENT_USER_KEY, record).unwrap();
        }

        let repository = SessionRepositoryImpl::new(store);

        assert_eq!(repository.load().unwrap(), None);
    }

    #[rstest]
    fn test_user_record_without_token(store: Arc<MemoryStore>) {
        store
            .set(CURRENT_USER_KEY, r#"{"token":"t1","username":"admin","role":"ROLE_ADMIN"}"#)
            .unwrap();

        let repository = SessionRepositoryImpl::new(store);

        assert_eq!(repository.load().unwrap(), None);
    }
}
