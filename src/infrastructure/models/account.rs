use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::AppError;
use crate::domain::models::account::{AccountStatus, BankAccount, NewAccount};

use super::datetime;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompteRecord {
    pub id: i64,
    #[serde(with = "datetime")]
    pub date_creation: DateTime<Utc>,
    pub solde: f64,
    pub statut: String,
    pub devise: String,
    #[serde(default)]
    pub type_compte: String,
    pub client_id: i64,
    #[serde(default)]
    pub client_nom: String,
    #[serde(default)]
    pub decouvert: Option<f64>,
    #[serde(default)]
    pub taux_interet: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompteRecord {
    pub client_id: i64,
    pub solde: f64,
    pub devise: String,
    pub decouvert: Option<f64>,
    pub taux_interet: Option<f64>,
}

impl TryFrom<CompteRecord> for BankAccount {
    type Error = AppError;

    fn try_from(record: CompteRecord) -> Result<Self, Self::Error> {
        let status = AccountStatus::parse(&record.statut).ok_or_else(|| {
            AppError::Unspecified().trace(&format!(
                "account {} has unknown status `{}`",
                record.id, record.statut
            ))
        })?;

        Ok(BankAccount {
            id: record.id,
            created_at: record.date_creation,
            balance: record.solde,
            status,
            currency: record.devise,
            account_type: record.type_compte,
            client_id: record.client_id,
            client_name: record.client_nom,
            overdraft: record.decouvert,
            interest_rate: record.taux_interet,
        })
    }
}

impl From<NewAccount> for NewCompteRecord {
    fn from(account: NewAccount) -> Self {
        NewCompteRecord {
            client_id: account.client_id,
            solde: account.balance,
            devise: account.currency,
            decouvert: account.overdraft,
            taux_interet: account.interest_rate,
        }
    }
}
