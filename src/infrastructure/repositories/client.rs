use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::models::client::{Client, ClientDraft};
use crate::domain::repositories::client::ClientRepository;
use crate::domain::repositories::repository::RepositoryResult;
use crate::infrastructure::http::ApiClient;
use crate::infrastructure::models::client::{ClientPayload, ClientRecord};

const CLIENTS: &str = "clients";

pub struct ClientRepositoryImpl {
    api: Arc<ApiClient>,
}

impl ClientRepositoryImpl {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ClientRepository for ClientRepositoryImpl {
    async fn list(&self) -> RepositoryResult<Vec<Client>> {
        let records: Vec<ClientRecord> = self.api.get(CLIENTS).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn get(&self, id: i64) -> RepositoryResult<Client> {
        let record: ClientRecord = self.api.get(&format!("{CLIENTS}/{id}")).await?;
        Ok(record.into())
    }

    async fn search(&self, keyword: &str) -> RepositoryResult<Vec<Client>> {
        let records: Vec<ClientRecord> = self
            .api
            .get_query(&format!("{CLIENTS}/search"), &[("keyword", keyword)])
            .await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn create(&self, draft: ClientDraft) -> RepositoryResult<Client> {
        let record: ClientRecord = self.api.post(CLIENTS, &ClientPayload::from(draft)).await?;
        Ok(record.into())
    }

    async fn update(&self, id: i64, draft: ClientDraft) -> RepositoryResult<Client> {
        let record: ClientRecord = self
            .api
            .put(&format!("{CLIENTS}/{id}"), &ClientPayload::from(draft))
            .await?;
        Ok(record.into())
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        self.api.delete(&format!("{CLIENTS}/{id}")).await
    }
}
