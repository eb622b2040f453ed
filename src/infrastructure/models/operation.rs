use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::AppError;
use crate::domain::models::operation::{
    Deposit, Operation, OperationKind, Transfer, Withdrawal,
};

use super::datetime;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRecord {
    pub id: i64,
    #[serde(with = "datetime")]
    pub date_op: DateTime<Utc>,
    pub montant: f64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    pub compte_id: i64,
    #[serde(default)]
    pub created_by: String,
}

/// Body shared by `versement` and `retrait`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementRecord {
    pub compte_id: i64,
    pub montant: f64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirementRecord {
    pub compte_source: i64,
    pub compte_destination: i64,
    pub montant: f64,
    pub description: String,
}

impl TryFrom<OperationRecord> for Operation {
    type Error = AppError;

    fn try_from(record: OperationRecord) -> Result<Self, Self::Error> {
        let kind = OperationKind::parse(&record.kind).ok_or_else(|| {
            AppError::Unspecified().trace(&format!(
                "operation {} has unknown type `{}`",
                record.id, record.kind
            ))
        })?;

        Ok(Operation {
            id: record.id,
            date: record.date_op,
            amount: record.montant,
            kind,
            description: record.description,
            account_id: record.compte_id,
            created_by: record.created_by,
        })
    }
}

impl From<Deposit> for MovementRecord {
    fn from(deposit: Deposit) -> Self {
        MovementRecord {
            compte_id: deposit.account_id,
            montant: deposit.amount,
            description: deposit.description,
        }
    }
}

impl From<Withdrawal> for MovementRecord {
    fn from(withdrawal: Withdrawal) -> Self {
        MovementRecord {
            compte_id: withdrawal.account_id,
            montant: withdrawal.amount,
            description: withdrawal.description,
        }
    }
}

impl From<Transfer> for VirementRecord {
    fn from(transfer: Transfer) -> Self {
        VirementRecord {
            compte_source: transfer.source,
            compte_destination: transfer.destination,
            montant: transfer.amount,
            description: transfer.description,
        }
    }
}
