use std::borrow::Cow;

use serde::Serialize;
use validator::{Validate, ValidationError};

use crate::domain::models::account::{AccountKind, NewAccount};
use crate::ui::dto::validation::{is_balance, is_present};

/// Numeric input the form may disable depending on the account kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToggledField {
    pub value: f64,
    pub enabled: bool,
}

impl ToggledField {
    fn enabled(value: f64) -> Self {
        ToggledField {
            value,
            enabled: true,
        }
    }

    fn disabled() -> Self {
        ToggledField {
            value: 0.0,
            enabled: false,
        }
    }

    pub fn submitted(&self) -> Option<f64> {
        self.enabled.then_some(self.value)
    }
}

fn is_non_negative(field: &ToggledField) -> Result<(), ValidationError> {
    if !field.enabled {
        return Ok(());
    }

    if !field.value.is_finite() {
        return Err(ValidationError::new("0").with_message(Cow::from("Value must be a number")));
    }

    if field.value < 0.0 {
        return Err(ValidationError::new("0").with_message(Cow::from("Value cannot be negative")));
    }

    Ok(())
}

/// Add-account form. The current kind takes an overdraft and the savings kind
/// an interest rate; the other field is disabled and zeroed.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct AccountForm {
    #[validate(required(message = "Client is required"))]
    pub client_id: Option<i64>,

    kind: AccountKind,

    #[validate(custom(function = "is_balance"))]
    pub balance: f64,

    #[validate(custom(function = "is_present"))]
    pub currency: String,

    #[validate(custom(function = "is_non_negative"))]
    overdraft: ToggledField,

    #[validate(custom(function = "is_non_negative"))]
    interest_rate: ToggledField,
}

impl Default for AccountForm {
    fn default() -> Self {
        AccountForm {
            client_id: None,
            kind: AccountKind::Current,
            balance: 0.0,
            currency: "MAD".to_string(),
            overdraft: ToggledField::enabled(0.0),
            interest_rate: ToggledField::disabled(),
        }
    }
}

impl AccountForm {
    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn overdraft(&self) -> ToggledField {
        self.overdraft
    }

    pub fn interest_rate(&self) -> ToggledField {
        self.interest_rate
    }

    pub fn select_kind(&mut self, kind: AccountKind) {
        self.kind = kind;

        match kind {
            AccountKind::Current => {
                self.overdraft = ToggledField::enabled(self.overdraft.value);
                self.interest_rate = ToggledField::disabled();
            }
            AccountKind::Savings => {
                self.interest_rate = ToggledField::enabled(self.interest_rate.value);
                self.overdraft = ToggledField::disabled();
            }
        }
    }

    /// Ignored while the field is disabled.
    pub fn set_overdraft(&mut self, value: f64) -> bool {
        if self.overdraft.enabled {
            self.overdraft.value = value;
        }
        self.overdraft.enabled
    }

    /// Ignored while the field is disabled.
    pub fn set_interest_rate(&mut self, value: f64) -> bool {
        if self.interest_rate.enabled {
            self.interest_rate.value = value;
        }
        self.interest_rate.enabled
    }

    /// `None` until a client is chosen.
    pub fn to_new_account(&self) -> Option<NewAccount> {
        Some(NewAccount {
            client_id: self.client_id?,
            balance: self.balance,
            currency: self.currency.trim().to_uppercase(),
            overdraft: self.overdraft.submitted(),
            interest_rate: self.interest_rate.submitted(),
        })
    }
}
