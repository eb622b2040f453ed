use async_trait::async_trait;

use crate::domain::models::operation::{Deposit, Operation, Transfer, Withdrawal};

use super::repository::RepositoryResult;

#[async_trait]
pub trait OperationRepository: Send + Sync {
    async fn list_by_account(&self, account_id: i64) -> RepositoryResult<Vec<Operation>>;
    async fn deposit(&self, deposit: Deposit) -> RepositoryResult<Operation>;
    async fn withdraw(&self, withdrawal: Withdrawal) -> RepositoryResult<Operation>;
    async fn transfer(&self, transfer: Transfer) -> RepositoryResult<()>;
}
