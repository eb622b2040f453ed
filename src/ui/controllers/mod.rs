pub mod admin;
pub mod employee;
pub mod layout;
pub mod login;

use std::future::Future;

use crate::domain::error::{AppError, AppResult, ErrorKind};
use crate::domain::models::account::BankAccount;
use crate::domain::models::operation::Operation;
use crate::domain::repositories::account::AccountRepository;
use crate::infrastructure::http::bounded;
use crate::ui::Context;
use crate::ui::dialog::Notice;

/// Runs a screen load under the UI ceiling. A failure yields `None` after the
/// user has been told about it.
pub async fn load<T, F>(context: &Context, subject: &str, future: F) -> Option<T>
where
    F: Future<Output = AppResult<T>>,
{
    match bounded(context.load_timeout, future).await {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(subject, kind = ?error.kind, trace = ?error.trace, "load failed");
            context.dialog.alert(load_failure(subject, &error));
            None
        }
    }
}

pub fn load_failure(subject: &str, error: &AppError) -> Notice {
    match error.kind {
        ErrorKind::Timeout => Notice::error(format!(
            "Loading {subject} took too long. Please try again."
        )),
        _ => Notice::error(format!("Could not load {subject}: {error}")),
    }
}

pub fn action_failure(action: &str, error: &AppError) -> Notice {
    Notice::error(format!("Could not {action}: {error}"))
}

/// Case-insensitive substring match over the fields `fields` exposes. A blank
/// keyword keeps everything.
pub fn search<T, F>(items: &[T], keyword: &str, fields: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Vec<&str>,
{
    let keyword = keyword.trim().to_lowercase();

    if keyword.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| {
            fields(item)
                .iter()
                .any(|field| field.to_lowercase().contains(&keyword))
        })
        .cloned()
        .collect()
}

pub fn newest_first(mut operations: Vec<Operation>) -> Vec<Operation> {
    operations.sort_by(|a, b| b.date.cmp(&a.date));
    operations
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountTransition {
    Activate,
    Suspend,
}

impl AccountTransition {
    pub fn question(&self, account: &BankAccount) -> String {
        let verb = match self {
            AccountTransition::Activate => "Activate",
            AccountTransition::Suspend => "Suspend",
        };
        format!("{verb} account #{} of {}?", account.id, account.client_name)
    }

    pub fn success(&self) -> &'static str {
        match self {
            AccountTransition::Activate => "Account activated",
            AccountTransition::Suspend => "Account suspended",
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            AccountTransition::Activate => "activate the account",
            AccountTransition::Suspend => "suspend the account",
        }
    }

    pub async fn apply(&self, accounts: &dyn AccountRepository, id: i64) -> AppResult<()> {
        match self {
            AccountTransition::Activate => accounts.activate(id).await,
            AccountTransition::Suspend => accounts.suspend(id).await,
        }
    }
}

/// Confirms, then applies `transition`. Returns whether the backend accepted it.
pub async fn transition_account(
    context: &Context,
    transition: AccountTransition,
    account: &BankAccount,
) -> bool {
    if !context.dialog.confirm(&transition.question(account)) {
        return false;
    }

    match transition.apply(context.accounts.as_ref(), account.id).await {
        Ok(()) => {
            tracing::info!(account_id = account.id, ?transition, "account transitioned");
            context.dialog.alert(Notice::info(transition.success()));
            true
        }
        Err(error) => {
            context.dialog.alert(action_failure(transition.action(), &error));
            false
        }
    }
}
