use async_trait::async_trait;

use crate::domain::models::session::{Credentials, Session};

use super::repository::RepositoryResult;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> RepositoryResult<Session>;
}
