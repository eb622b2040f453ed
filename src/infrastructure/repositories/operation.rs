use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::models::operation::{Deposit, Operation, Transfer, Withdrawal};
use crate::domain::repositories::operation::OperationRepository;
use crate::domain::repositories::repository::RepositoryResult;
use crate::infrastructure::http::ApiClient;
use crate::infrastructure::models::operation::{MovementRecord, OperationRecord, VirementRecord};

const OPERATIONS: &str = "operations";

pub struct OperationRepositoryImpl {
    api: Arc<ApiClient>,
}

impl OperationRepositoryImpl {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    async fn movement(&self, path: &str, record: MovementRecord) -> RepositoryResult<Operation> {
        let created: OperationRecord = self.api.post(path, &record).await?;
        Operation::try_from(created)
    }
}

#[async_trait]
impl OperationRepository for OperationRepositoryImpl {
    async fn list_by_account(&self, account_id: i64) -> RepositoryResult<Vec<Operation>> {
        let records: Vec<OperationRecord> = self
            .api
            .get(&format!("{OPERATIONS}/compte/{account_id}"))
            .await?;
        records.into_iter().map(Operation::try_from).collect()
    }

    async fn deposit(&self, deposit: Deposit) -> RepositoryResult<Operation> {
        self.movement(&format!("{OPERATIONS}/versement"), deposit.into())
            .await
    }

    async fn withdraw(&self, withdrawal: Withdrawal) -> RepositoryResult<Operation> {
        self.movement(&format!("{OPERATIONS}/retrait"), withdrawal.into())
            .await
    }

    async fn transfer(&self, transfer: Transfer) -> RepositoryResult<()> {
        self.api
            .post_discard(
                &format!("{OPERATIONS}/virement"),
                &VirementRecord::from(transfer),
            )
            .await
    }
}
