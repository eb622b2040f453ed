use std::borrow::Cow;

use validator::{Validate, ValidationError};

use crate::domain::models::operation::{Deposit, Transfer, Withdrawal};
use crate::ui::dto::validation::{is_amount, is_present};

/// Deposit or withdrawal on one account.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct MovementForm {
    #[validate(required(message = "Account is required"))]
    pub account_id: Option<i64>,

    #[validate(custom(function = "is_amount"))]
    pub amount: f64,

    #[validate(custom(function = "is_present"))]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
#[validate(schema(function = "distinct_accounts"))]
pub struct TransferForm {
    #[validate(required(message = "Source account is required"))]
    pub source: Option<i64>,

    #[validate(required(message = "Destination account is required"))]
    pub destination: Option<i64>,

    #[validate(custom(function = "is_amount"))]
    pub amount: f64,

    #[validate(custom(function = "is_present"))]
    pub description: String,
}

fn distinct_accounts(form: &TransferForm) -> Result<(), ValidationError> {
    if form.source.is_some() && form.source == form.destination {
        return Err(ValidationError::new("0").with_message(Cow::from(
            "Source and destination accounts must be different",
        )));
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub enum OperationForm {
    Deposit(MovementForm),
    Withdrawal(MovementForm),
    Transfer(TransferForm),
}

impl OperationForm {
    pub fn label(&self) -> &'static str {
        match self {
            OperationForm::Deposit(_) => "deposit",
            OperationForm::Withdrawal(_) => "withdrawal",
            OperationForm::Transfer(_) => "transfer",
        }
    }

    pub fn validate(&self) -> Result<(), validator::ValidationErrors> {
        match self {
            OperationForm::Deposit(form) | OperationForm::Withdrawal(form) => form.validate(),
            OperationForm::Transfer(form) => form.validate(),
        }
    }
}

impl MovementForm {
    fn parts(&self) -> Option<(i64, f64, String)> {
        Some((self.account_id?, self.amount, self.description.trim().to_string()))
    }

    pub fn to_deposit(&self) -> Option<Deposit> {
        self.parts().map(|(account_id, amount, description)| Deposit {
            account_id,
            amount,
            description,
        })
    }

    pub fn to_withdrawal(&self) -> Option<Withdrawal> {
        self.parts().map(|(account_id, amount, description)| Withdrawal {
            account_id,
            amount,
            description,
        })
    }
}

impl TransferForm {
    pub fn to_transfer(&self) -> Option<Transfer> {
        Some(Transfer {
            source: self.source?,
            destination: self.destination?,
            amount: self.amount,
            description: self.description.trim().to_string(),
        })
    }
}
