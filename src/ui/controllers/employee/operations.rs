use std::sync::Arc;

use crate::domain::error::{AppError, AppResult};
use crate::domain::models::account::{AccountStatus, BankAccount};
use crate::domain::models::operation::Operation;
use crate::ui::Context;
use crate::ui::controllers::{action_failure, load, newest_first};
use crate::ui::dialog::Notice;
use crate::ui::dto::operation::OperationForm;
use crate::ui::modal::{Modal, ModalMode};

pub struct OperationsDeskController {
    context: Arc<Context>,
    accounts: Vec<BankAccount>,
    selected: Option<i64>,
    operations: Vec<Operation>,
    loading: bool,
    modal: Modal,
    form: Option<OperationForm>,
}

impl OperationsDeskController {
    pub fn new(context: Arc<Context>) -> Self {
        Self {
            context,
            accounts: Vec::new(),
            selected: None,
            operations: Vec::new(),
            loading: false,
            modal: Modal::default(),
            form: None,
        }
    }

    /// Activated accounts only.
    pub fn accounts(&self) -> &[BankAccount] {
        &self.accounts
    }

    pub fn selected_account(&self) -> Option<i64> {
        self.selected
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn form(&self) -> Option<&OperationForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut OperationForm> {
        self.form.as_mut()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub async fn load_accounts(&mut self) {
        self.loading = true;

        self.accounts = load(&self.context, "accounts", self.context.accounts.list())
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|account| account.status == AccountStatus::Activated)
            .collect();

        self.loading = false;
    }

    pub async fn select_account(&mut self, account_id: Option<i64>) {
        self.selected = account_id;
        self.load_operations().await;
    }

    pub async fn load_operations(&mut self) {
        let Some(account_id) = self.selected else {
            self.operations.clear();
            return;
        };

        self.loading = true;

        self.operations = load(
            &self.context,
            "operations",
            self.context.operations.list_by_account(account_id),
        )
        .await
        .map(newest_first)
        .unwrap_or_default();

        self.loading = false;
    }

    pub fn open(&mut self, form: OperationForm) -> bool {
        if !self.modal.open(ModalMode::Add) {
            return false;
        }

        self.form = Some(form);
        true
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
        self.form = None;
    }

    /// Validates, confirms, then sends the operation in the modal. A rejected
    /// form never reaches the backend.
    pub async fn execute(&mut self) -> bool {
        let Some(form) = self.form.clone() else {
            return false;
        };

        if let Err(errors) = form.validate() {
            let error = AppError::from(errors);
            self.context.dialog.alert(Notice::error(error.message));
            return false;
        }

        if !self.context.dialog.confirm(&question(&form)) {
            return false;
        }

        if self.modal.begin_submit().is_none() {
            return false;
        }

        let result = self.dispatch(&form).await;

        self.close_modal();

        match result {
            Ok(()) => {
                tracing::info!(operation = form.label(), "operation executed");
                self.context.dialog.alert(Notice::info(success(&form)));
                self.load_accounts().await;
                self.load_operations().await;
                true
            }
            Err(error) => {
                self.context
                    .dialog
                    .alert(action_failure(&format!("execute the {}", form.label()), &error));
                false
            }
        }
    }

    async fn dispatch(&self, form: &OperationForm) -> AppResult<()> {
        let operations = &self.context.operations;
        let incomplete = || AppError::ValidationFailed("Account is required");

        match form {
            OperationForm::Deposit(movement) => {
                let deposit = movement.to_deposit().ok_or_else(incomplete)?;
                operations.deposit(deposit).await.map(|_| ())
            }
            OperationForm::Withdrawal(movement) => {
                let withdrawal = movement.to_withdrawal().ok_or_else(incomplete)?;
                operations.withdraw(withdrawal).await.map(|_| ())
            }
            OperationForm::Transfer(transfer) => {
                let transfer = transfer.to_transfer().ok_or_else(incomplete)?;
                operations.transfer(transfer).await
            }
        }
    }
}

fn question(form: &OperationForm) -> String {
    match form {
        OperationForm::Deposit(movement) => format!(
            "Deposit {:.2} on account #{}?",
            movement.amount,
            movement.account_id.unwrap_or_default()
        ),
        OperationForm::Withdrawal(movement) => format!(
            "Withdraw {:.2} from account #{}?",
            movement.amount,
            movement.account_id.unwrap_or_default()
        ),
        OperationForm::Transfer(transfer) => format!(
            "Transfer {:.2} from account #{} to account #{}?",
            transfer.amount,
            transfer.source.unwrap_or_default(),
            transfer.destination.unwrap_or_default()
        ),
    }
}

fn success(form: &OperationForm) -> &'static str {
    match form {
        OperationForm::Deposit(_) => "Deposit completed",
        OperationForm::Withdrawal(_) => "Withdrawal completed",
        OperationForm::Transfer(_) => "Transfer completed",
    }
}
