use async_trait::async_trait;

use crate::domain::models::account::{BankAccount, NewAccount};

use super::repository::RepositoryResult;

/// Resource client for `comptes`.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn list(&self) -> RepositoryResult<Vec<BankAccount>>;
    async fn get(&self, id: i64) -> RepositoryResult<BankAccount>;
    /// Bounded by the list ceiling; fails with a timeout once it elapses.
    async fn list_by_client(&self, client_id: i64) -> RepositoryResult<Vec<BankAccount>>;
    async fn create_current(&self, account: NewAccount) -> RepositoryResult<BankAccount>;
    async fn create_savings(&self, account: NewAccount) -> RepositoryResult<BankAccount>;
    async fn activate(&self, id: i64) -> RepositoryResult<()>;
    async fn suspend(&self, id: i64) -> RepositoryResult<()>;
}
