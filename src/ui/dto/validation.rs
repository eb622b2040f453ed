use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

pub fn is_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();

    if email.len() < 3 || email.len() > 255 {
        return Err(ValidationError::new("0")
            .with_message(Cow::from("Email must contain between 3 and 255 characters")));
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::new("0").with_message(Cow::from("Invalid email format")));
    }

    Ok(())
}

pub fn is_present(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("0").with_message(Cow::from("This field is required")));
    }

    Ok(())
}

pub const MINIMUM_AMOUNT: f64 = 0.01;

/// Finite and at least [`MINIMUM_AMOUNT`].
pub fn is_amount(amount: f64) -> Result<(), ValidationError> {
    if !amount.is_finite() {
        return Err(ValidationError::new("0").with_message(Cow::from("Amount must be a number")));
    }

    if amount < MINIMUM_AMOUNT {
        return Err(ValidationError::new("0").with_message(Cow::from("Amount must be at least 0.01")));
    }

    Ok(())
}

pub fn is_balance(balance: f64) -> Result<(), ValidationError> {
    if !balance.is_finite() {
        return Err(ValidationError::new("0").with_message(Cow::from("Initial balance must be a number")));
    }

    if balance < 0.0 {
        return Err(ValidationError::new("0").with_message(Cow::from("Initial balance cannot be negative")));
    }

    Ok(())
}
