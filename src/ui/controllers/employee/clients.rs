use std::sync::Arc;

use crate::domain::error::ErrorKind;
use crate::domain::models::account::BankAccount;
use crate::domain::models::client::{Client, ClientDraft};
use crate::ui::Context;
use crate::ui::controllers::{action_failure, load, load_failure, search};
use crate::ui::dialog::Notice;
use crate::ui::dto::client::ClientForm;
use crate::ui::middlewares::validate::Valid;
use crate::ui::modal::{Modal, ModalMode};

pub struct ClientManagementController {
    context: Arc<Context>,
    all: Vec<Client>,
    clients: Vec<Client>,
    keyword: String,
    loading: bool,
    modal: Modal,
    pub form: ClientForm,
    selected: Option<Client>,
    client_accounts: Vec<BankAccount>,
    loading_accounts: bool,
}

impl ClientManagementController {
    pub fn new(context: Arc<Context>) -> Self {
        Self {
            context,
            all: Vec::new(),
            clients: Vec::new(),
            keyword: String::new(),
            loading: false,
            modal: Modal::default(),
            form: ClientForm::default(),
            selected: None,
            client_accounts: Vec::new(),
            loading_accounts: false,
        }
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn selected(&self) -> Option<&Client> {
        self.selected.as_ref()
    }

    pub fn client_accounts(&self) -> &[BankAccount] {
        &self.client_accounts
    }

    pub fn is_loading(&self) -> bool {
        self.loading || self.loading_accounts
    }

    pub async fn load(&mut self) {
        self.loading = true;

        self.all = load(&self.context, "clients", self.context.clients.list())
            .await
            .unwrap_or_default();
        self.refilter();

        self.loading = false;
    }

    pub fn search(&mut self, keyword: &str) {
        self.keyword = keyword.to_string();
        self.refilter();
    }

    pub fn open_add(&mut self) -> bool {
        self.reset();
        self.modal.open(ModalMode::Add)
    }

    pub fn open_edit(&mut self, id: i64) -> bool {
        let Some(client) = self.find(id) else {
            return false;
        };

        self.reset();
        self.form = ClientForm::from(&client);
        self.selected = Some(client);
        self.modal.open(ModalMode::Edit)
    }

    /// Opens the details of a client along with the accounts they hold.
    pub async fn open_view(&mut self, id: i64) -> bool {
        let Some(client) = self.find(id) else {
            return false;
        };

        self.reset();
        self.selected = Some(client);
        if !self.modal.open(ModalMode::View) {
            return false;
        }

        self.loading_accounts = true;
        match self.context.accounts.list_by_client(id).await {
            Ok(accounts) => self.client_accounts = accounts,
            Err(error) => {
                tracing::warn!(client_id = id, kind = ?error.kind, "client accounts unavailable");
                let notice = match error.kind {
                    ErrorKind::Timeout => load_failure("the client's accounts", &error),
                    _ => action_failure("load the client's accounts", &error),
                };
                self.context.dialog.alert(notice);
            }
        }
        self.loading_accounts = false;

        true
    }

    /// Sends the add or edit form. The modal stays open only when the form
    /// fails local validation.
    pub async fn save(&mut self) -> bool {
        let form = match Valid::new(self.form.clone()) {
            Ok(form) => form,
            Err(error) => {
                self.context.dialog.alert(Notice::error(error.message));
                return false;
            }
        };

        let Some(mode) = self.modal.begin_submit() else {
            return false;
        };

        let draft: ClientDraft = form.into_inner().into();
        let (result, success, action) = match (mode, &self.selected) {
            (ModalMode::Edit, Some(client)) => (
                self.context.clients.update(client.id, draft).await,
                "Client updated",
                "update the client",
            ),
            _ => (
                self.context.clients.create(draft).await,
                "Client added",
                "add the client",
            ),
        };

        self.close_modal();

        match result {
            Ok(client) => {
                tracing::info!(client_id = client.id, ?mode, "client saved");
                self.context.dialog.alert(Notice::info(success));
                self.load().await;
                true
            }
            Err(error) => {
                self.context.dialog.alert(action_failure(action, &error));
                false
            }
        }
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
        self.reset();
    }

    fn reset(&mut self) {
        self.form = ClientForm::default();
        self.selected = None;
        self.client_accounts.clear();
    }

    fn find(&self, id: i64) -> Option<Client> {
        let client = self.all.iter().find(|client| client.id == id).cloned();

        if client.is_none() {
            self.context
                .dialog
                .alert(Notice::error(format!("Client #{id} is not listed")));
        }

        client
    }

    fn refilter(&mut self) {
        self.clients = search(&self.all, &self.keyword, |client| {
            vec![client.name.as_str(), client.email.as_str()]
        });
    }
}
