use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::models::account::{BankAccount, NewAccount};
use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::repository::RepositoryResult;
use crate::infrastructure::http::{ApiClient, bounded};
use crate::infrastructure::models::account::{CompteRecord, NewCompteRecord};

const COMPTES: &str = "comptes";

pub struct AccountRepositoryImpl {
    api: Arc<ApiClient>,
    list_timeout: Duration,
}

impl AccountRepositoryImpl {
    pub fn new(api: Arc<ApiClient>, list_timeout: Duration) -> Self {
        Self { api, list_timeout }
    }

    async fn fetch_all(&self, path: &str) -> RepositoryResult<Vec<BankAccount>> {
        let records: Vec<CompteRecord> = self.api.get(path).await?;
        records.into_iter().map(BankAccount::try_from).collect()
    }

    async fn open(&self, path: &str, record: NewCompteRecord) -> RepositoryResult<BankAccount> {
        let created: CompteRecord = self.api.post(path, &record).await?;
        BankAccount::try_from(created)
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn list(&self) -> RepositoryResult<Vec<BankAccount>> {
        self.fetch_all(COMPTES).await
    }

    async fn get(&self, id: i64) -> RepositoryResult<BankAccount> {
        let record: CompteRecord = self.api.get(&format!("{COMPTES}/{id}")).await?;
        BankAccount::try_from(record)
    }

    async fn list_by_client(&self, client_id: i64) -> RepositoryResult<Vec<BankAccount>> {
        let path = format!("{COMPTES}/client/{client_id}");

        bounded(self.list_timeout, self.fetch_all(&path))
            .await
            .inspect_err(|error| {
                tracing::warn!(client_id, kind = ?error.kind, "listing client accounts failed");
            })
    }

    async fn create_current(&self, account: NewAccount) -> RepositoryResult<BankAccount> {
        let record = NewCompteRecord {
            taux_interet: None,
            ..NewCompteRecord::from(account)
        };

        self.open(&format!("{COMPTES}/courant"), record).await
    }

    async fn create_savings(&self, account: NewAccount) -> RepositoryResult<BankAccount> {
        let record = NewCompteRecord {
            decouvert: None,
            ..NewCompteRecord::from(account)
        };

        self.open(&format!("{COMPTES}/epargne"), record).await
    }

    async fn activate(&self, id: i64) -> RepositoryResult<()> {
        self.api.put_empty(&format!("{COMPTES}/{id}/activer")).await
    }

    async fn suspend(&self, id: i64) -> RepositoryResult<()> {
        self.api.put_empty(&format!("{COMPTES}/{id}/suspendre")).await
    }
}
