use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::models::session::{Credentials, Session};
use crate::domain::repositories::auth::AuthRepository;
use crate::domain::repositories::repository::RepositoryResult;
use crate::infrastructure::http::ApiClient;
use crate::infrastructure::models::session::{AuthResponse, LoginRequest};

const LOGIN: &str = "auth/login";

pub struct AuthRepositoryImpl {
    api: Arc<ApiClient>,
}

impl AuthRepositoryImpl {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn login(&self, credentials: &Credentials) -> RepositoryResult<Session> {
        let response: AuthResponse = self
            .api
            .post(LOGIN, &LoginRequest::from(credentials))
            .await?;

        Session::try_from(response)
    }
}
