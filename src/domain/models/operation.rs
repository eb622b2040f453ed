use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Credit,
    Debit,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "CREDIT",
            Self::Debit => "DEBIT",
        }
    }

    pub fn parse(value: &str) -> Option<OperationKind> {
        match value.trim().to_uppercase().as_str() {
            "CREDIT" => Some(Self::Credit),
            "DEBIT" => Some(Self::Debit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub amount: f64,
    pub kind: OperationKind,
    pub description: String,
    pub account_id: i64,
    pub created_by: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Deposit {
    pub account_id: i64,
    pub amount: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Withdrawal {
    pub account_id: i64,
    pub amount: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    pub source: i64,
    pub destination: i64,
    pub amount: f64,
    pub description: String,
}
