use serde::{Deserialize, Serialize};

use crate::domain::models::client::{Client, ClientDraft};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: i64,
    pub nom: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientPayload {
    pub nom: String,
    pub email: String,
}

impl From<ClientDraft> for ClientPayload {
    fn from(draft: ClientDraft) -> Self {
        let draft = draft.normalized();

        ClientPayload {
            nom: draft.name,
            email: draft.email,
        }
    }
}

impl From<ClientRecord> for Client {
    fn from(record: ClientRecord) -> Self {
        Client {
            id: record.id,
            name: record.nom,
            email: record.email,
        }
    }
}
