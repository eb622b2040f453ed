use std::sync::Arc;

use reqwest::Request;
use reqwest::header::{AUTHORIZATION, HeaderValue};

use crate::domain::services::session::SessionService;

pub const LOGIN_PATH: &str = "/auth/login";

/// Attaches the current bearer token to every outgoing request but the login call.
pub struct RequestAuthorizer {
    sessions: Arc<dyn SessionService>,
}

impl RequestAuthorizer {
    pub fn new(sessions: Arc<dyn SessionService>) -> Self {
        Self { sessions }
    }

    pub fn authorize(&self, request: &mut Request) {
        if request.url().path().ends_with(LOGIN_PATH) {
            return;
        }

        let Some(token) = self.sessions.token() else {
            tracing::warn!(url = %request.url(), "no session token, sending request unauthenticated");
            return;
        };

        match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(mut value) => {
                value.set_sensitive(true);
                request.headers_mut().insert(AUTHORIZATION, value);
            }
            Err(_) => {
                tracing::warn!(url = %request.url(), "session token is not a valid header value");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::session::{Role, Session};
    use crate::infrastructure::repositories::session::SessionRepositoryImpl;
    use crate::infrastructure::repositories::storage::MemoryStore;
    use crate::services::session::SessionStore;
    use rstest::*;

    fn request(url: &str) -> Request {
        reqwest::Client::new().get(url).build().unwrap()
    }

    #[fixture]
    fn sessions() -> Arc<SessionStore> {
        let repository = SessionRepositoryImpl::new(Arc::new(MemoryStore::default()));
        Arc::new(SessionStore::rehydrate(Arc::new(repository)))
    }

    fn signed_in(sessions: &SessionStore) {
        sessions
            .establish(Session {
                token: "t1".to_string(),
                username: "admin".to_string(),
                role: Role::Admin,
                client_id: None,
            })
            .unwrap();
    }

    #[rstest]
    fn test_bearer_is_attached(sessions: Arc<SessionStore>) {
        signed_in(&sessions);
        let authorizer = RequestAuthorizer::new(sessions);

        let mut request = request("http://localhost:8089/api/clients");
        authorizer.authorize(&mut request);

        let header = request.headers().get(AUTHORIZATION).unwrap();
        assert_eq!(header.to_str().unwrap(), "Bearer t1");
        assert!(header.is_sensitive());
    }

    #[rstest]
    fn test_login_call_is_untouched(sessions: Arc<SessionStore>) {
        signed_in(&sessions);
        let authorizer = RequestAuthorizer::new(sessions);

        let mut request = request("http://localhost:8089/api/auth/login");
        authorizer.authorize(&mut request);

        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[rstest]
    fn test_missing_token_sends_unauthenticated(sessions: Arc<SessionStore>) {
        let authorizer = RequestAuthorizer::new(sessions);

        let mut request = request("http://localhost:8089/api/comptes");
        authorizer.authorize(&mut request);

        assert!(request.headers().get(AUTHORIZATION).is_none());
    }
}
