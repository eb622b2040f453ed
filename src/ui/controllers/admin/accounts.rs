use std::sync::Arc;

use crate::domain::models::account::{AccountKind, AccountStatus, BankAccount};
use crate::ui::Context;
use crate::ui::controllers::{AccountTransition, load, transition_account};
use crate::ui::dialog::Notice;

pub struct AdminAccountsController {
    context: Arc<Context>,
    all: Vec<BankAccount>,
    accounts: Vec<BankAccount>,
    status_filter: Option<AccountStatus>,
    kind_filter: Option<AccountKind>,
    loading: bool,
    busy: bool,
}

impl AdminAccountsController {
    pub fn new(context: Arc<Context>) -> Self {
        Self {
            context,
            all: Vec::new(),
            accounts: Vec::new(),
            status_filter: None,
            kind_filter: None,
            loading: false,
            busy: false,
        }
    }

    pub fn accounts(&self) -> &[BankAccount] {
        &self.accounts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub async fn load(&mut self) {
        self.loading = true;

        self.all = load(&self.context, "accounts", self.context.accounts.list())
            .await
            .unwrap_or_default();
        self.apply_filters();

        self.loading = false;
    }

    pub fn filter_status(&mut self, status: Option<AccountStatus>) {
        self.status_filter = status;
        self.apply_filters();
    }

    pub fn filter_kind(&mut self, kind: Option<AccountKind>) {
        self.kind_filter = kind;
        self.apply_filters();
    }

    pub fn reset_filters(&mut self) {
        self.status_filter = None;
        self.kind_filter = None;
        self.apply_filters();
    }

    pub async fn activate(&mut self, id: i64) -> bool {
        self.transition(AccountTransition::Activate, id).await
    }

    pub async fn suspend(&mut self, id: i64) -> bool {
        self.transition(AccountTransition::Suspend, id).await
    }

    async fn transition(&mut self, transition: AccountTransition, id: i64) -> bool {
        if self.busy || self.loading {
            return false;
        }

        let Some(account) = self.all.iter().find(|account| account.id == id).cloned() else {
            self.context
                .dialog
                .alert(Notice::error(format!("Account #{id} is not listed")));
            return false;
        };

        self.busy = true;
        let applied = transition_account(&self.context, transition, &account).await;
        self.busy = false;

        if applied {
            self.load().await;
        }

        applied
    }

    fn apply_filters(&mut self) {
        self.accounts = self
            .all
            .iter()
            .filter(|account| self.status_filter.is_none_or(|status| account.status == status))
            .filter(|account| self.kind_filter.is_none_or(|kind| account.kind() == Some(kind)))
            .cloned()
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;
    use crate::ui::mock::{Fixture, accounts};

    async fn loaded(fixture: &Fixture) -> AdminAccountsController {
        let mut controller = AdminAccountsController::new(fixture.context.clone());
        controller.load().await;
        controller
    }

    fn ids(controller: &AdminAccountsController) -> Vec<i64> {
        controller.accounts().iter().map(|account| account.id).collect()
    }

    #[tokio::test]
    async fn test_filters_and_reset() {
        let fixture = Fixture::accepting();
        let mut controller = loaded(&fixture).await;

        controller.filter_status(Some(AccountStatus::Activated));
        assert_eq!(ids(&controller), vec![10, 13]);

        controller.filter_kind(Some(AccountKind::Savings));
        assert_eq!(ids(&controller), vec![13]);

        controller.reset_filters();
        assert_eq!(controller.accounts(), accounts().as_slice());
    }

    #[tokio::test]
    async fn test_activate_confirms_then_reloads() {
        let fixture = Fixture::accepting();
        let mut controller = loaded(&fixture).await;

        assert!(controller.activate(11).await);

        assert_eq!(fixture.dialog.questions(), vec!["Activate account #11 of Amina Alaoui?"]);
        assert_eq!(
            fixture.accounts.behaviour.calls().await,
            vec!["list", "activate 11", "list"]
        );
        assert_eq!(controller.accounts()[1].status, AccountStatus::Activated);
        assert_eq!(fixture.dialog.last_notice(), Some(Notice::info("Account activated")));
    }

    #[tokio::test]
    async fn test_declined_suspend_sends_nothing() {
        let fixture = Fixture::declining();
        let mut controller = loaded(&fixture).await;

        assert!(!controller.suspend(10).await);

        assert_eq!(fixture.accounts.behaviour.calls().await, vec!["list"]);
    }

    #[tokio::test]
    async fn test_rejected_suspend_keeps_list() {
        let fixture = Fixture::accepting();
        let mut controller = loaded(&fixture).await;
        fixture
            .accounts
            .behaviour
            .fail_with(AppError::AuthorizationDenied())
            .await;

        assert!(!controller.suspend(10).await);

        assert_eq!(controller.accounts(), accounts().as_slice());
        assert!(fixture.dialog.last_notice().unwrap().is_error());
    }
}
