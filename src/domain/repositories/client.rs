use async_trait::async_trait;

use crate::domain::models::client::{Client, ClientDraft};

use super::repository::RepositoryResult;

#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn list(&self) -> RepositoryResult<Vec<Client>>;
    async fn get(&self, id: i64) -> RepositoryResult<Client>;
    async fn search(&self, keyword: &str) -> RepositoryResult<Vec<Client>>;
    async fn create(&self, draft: ClientDraft) -> RepositoryResult<Client>;
    async fn update(&self, id: i64, draft: ClientDraft) -> RepositoryResult<Client>;
    async fn delete(&self, id: i64) -> RepositoryResult<()>;
}
