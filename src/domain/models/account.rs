use std::fmt;

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountStatus {
    Created,
    Activated,
    Suspended,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Activated => "ACTIVATED",
            Self::Suspended => "SUSPENDED",
        }
    }

    pub fn parse(value: &str) -> Option<AccountStatus> {
        match value.trim().to_uppercase().as_str() {
            "CREATED" => Some(Self::Created),
            "ACTIVATED" => Some(Self::Activated),
            "SUSPENDED" => Some(Self::Suspended),
            _ => None,
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccountKind {
    #[default]
    Current,
    Savings,
}

impl AccountKind {
    /// Label the backend uses in `typeCompte`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Current => "Compte Courant",
            Self::Savings => "Compte Epargne",
        }
    }

    pub fn from_label(value: &str) -> Option<AccountKind> {
        match value.trim().to_lowercase().as_str() {
            "compte courant" | "courant" | "current" => Some(Self::Current),
            "compte epargne" | "compte épargne" | "epargne" | "savings" => Some(Self::Savings),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BankAccount {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub balance: f64,
    pub status: AccountStatus,
    pub currency: String,
    pub account_type: String,
    pub client_id: i64,
    pub client_name: String,
    pub overdraft: Option<f64>,
    pub interest_rate: Option<f64>,
}

impl BankAccount {
    pub fn kind(&self) -> Option<AccountKind> {
        AccountKind::from_label(&self.account_type)
    }

    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Activated
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub client_id: i64,
    pub balance: f64,
    pub currency: String,
    pub overdraft: Option<f64>,
    pub interest_rate: Option<f64>,
}
