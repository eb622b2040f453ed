use std::sync::Arc;

use futures::future::join;

use crate::domain::models::account::{AccountKind, BankAccount};
use crate::domain::models::client::Client;
use crate::ui::Context;
use crate::ui::controllers::{
    AccountTransition, action_failure, load, search, transition_account,
};
use crate::ui::dialog::Notice;
use crate::ui::dto::account::AccountForm;
use crate::ui::middlewares::validate::Valid;
use crate::ui::modal::{Modal, ModalMode};

pub struct AccountManagementController {
    context: Arc<Context>,
    all: Vec<BankAccount>,
    accounts: Vec<BankAccount>,
    clients: Vec<Client>,
    keyword: String,
    loading: bool,
    busy: bool,
    modal: Modal,
    pub form: AccountForm,
    selected: Option<BankAccount>,
}

impl AccountManagementController {
    pub fn new(context: Arc<Context>) -> Self {
        Self {
            context,
            all: Vec::new(),
            accounts: Vec::new(),
            clients: Vec::new(),
            keyword: String::new(),
            loading: false,
            busy: false,
            modal: Modal::default(),
            form: AccountForm::default(),
            selected: None,
        }
    }

    pub fn accounts(&self) -> &[BankAccount] {
        &self.accounts
    }

    /// Clients offered by the add modal.
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn selected(&self) -> Option<&BankAccount> {
        self.selected.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub async fn load(&mut self) {
        self.loading = true;

        let context = self.context.clone();
        let (accounts, clients) = join(
            load(&context, "accounts", context.accounts.list()),
            load(&context, "clients", context.clients.list()),
        )
        .await;

        self.all = accounts.unwrap_or_default();
        self.clients = clients.unwrap_or_default();
        self.refilter();

        self.loading = false;
    }

    pub fn search(&mut self, keyword: &str) {
        self.keyword = keyword.to_string();
        self.refilter();
    }

    pub fn open_add(&mut self) -> bool {
        self.form = AccountForm::default();
        self.selected = None;
        self.modal.open(ModalMode::Add)
    }

    pub fn open_view(&mut self, id: i64) -> bool {
        let Some(account) = self.find(id) else {
            return false;
        };

        self.form = AccountForm::default();
        self.selected = Some(account);
        self.modal.open(ModalMode::View)
    }

    /// Opens a current or savings account depending on the kind picked in
    /// the form.
    pub async fn save(&mut self) -> bool {
        let form = match Valid::new(self.form.clone()) {
            Ok(form) => form,
            Err(error) => {
                self.context.dialog.alert(Notice::error(error.message));
                return false;
            }
        };

        let Some(account) = form.to_new_account() else {
            return false;
        };

        if self.modal.begin_submit().is_none() {
            return false;
        }

        let kind = form.kind();
        let result = match kind {
            AccountKind::Current => self.context.accounts.create_current(account).await,
            AccountKind::Savings => self.context.accounts.create_savings(account).await,
        };

        self.close_modal();

        match result {
            Ok(account) => {
                tracing::info!(account_id = account.id, client_id = account.client_id, ?kind, "account opened");
                self.context.dialog.alert(Notice::info("Account created"));
                self.load().await;
                true
            }
            Err(error) => {
                self.context.dialog.alert(action_failure("create the account", &error));
                false
            }
        }
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
        self.form = AccountForm::default();
        self.selected = None;
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

        let Some(account) = self.find(id) else {
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

    fn find(&self, id: i64) -> Option<BankAccount> {
        let account = self.all.iter().find(|account| account.id == id).cloned();

        if account.is_none() {
            self.context
                .dialog
                .alert(Notice::error(format!("Account #{id} is not listed")));
        }

        account
    }

    fn refilter(&mut self) {
        self.accounts = search(&self.all, &self.keyword, |account| {
            vec![account.client_name.as_str()]
        });
    }
}
