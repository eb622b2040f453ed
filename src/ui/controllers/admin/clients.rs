use std::sync::Arc;

use crate::domain::models::client::Client;
use crate::ui::Context;
use crate::ui::controllers::{action_failure, load, search};
use crate::ui::dialog::Notice;

pub struct AdminClientsController {
    context: Arc<Context>,
    all: Vec<Client>,
    clients: Vec<Client>,
    keyword: String,
    loading: bool,
    busy: bool,
}

impl AdminClientsController {
    pub fn new(context: Arc<Context>) -> Self {
        Self {
            context,
            all: Vec::new(),
            clients: Vec::new(),
            keyword: String::new(),
            loading: false,
            busy: false,
        }
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub async fn load(&mut self) {
        self.loading = true;

        self.all = load(&self.context, "clients", self.context.clients.list())
            .await
            .unwrap_or_default();
        self.refilter();

        self.loading = false;
    }

    /// Filters the last fetched clients by name or email.
    pub fn search(&mut self, keyword: &str) {
        self.keyword = keyword.to_string();
        self.refilter();
    }

    /// Returns whether the client was deleted.
    pub async fn delete(&mut self, id: i64) -> bool {
        if self.busy || self.loading {
            return false;
        }

        let Some(client) = self.all.iter().find(|client| client.id == id).cloned() else {
            self.context
                .dialog
                .alert(Notice::error(format!("Client #{id} is not listed")));
            return false;
        };

        if !self
            .context
            .dialog
            .confirm(&format!("Do you really want to delete client \"{}\"?", client.name))
        {
            return false;
        }

        self.busy = true;
        let result = self.context.clients.delete(id).await;
        self.busy = false;

        match result {
            Ok(()) => {
                tracing::info!(client_id = id, "client deleted");
                self.context.dialog.alert(Notice::info("Client deleted"));
                self.load().await;
                true
            }
            Err(error) => {
                self.context
                    .dialog
                    .alert(action_failure("delete the client", &error));
                false
            }
        }
    }

    fn refilter(&mut self) {
        self.clients = search(&self.all, &self.keyword, |client| {
            vec![client.name.as_str(), client.email.as_str()]
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;
    use crate::ui::mock::{Fixture, clients};

    async fn loaded(fixture: &Fixture) -> AdminClientsController {
        let mut controller = AdminClientsController::new(fixture.context.clone());
        controller.load().await;
        controller
    }

    #[tokio::test]
    async fn test_load_mirrors_backend() {
        let fixture = Fixture::accepting();

        let controller = loaded(&fixture).await;

        assert_eq!(controller.clients(), clients().as_slice());
    }

    #[tokio::test]
    async fn test_failed_load_empties_list() {
        let fixture = Fixture::accepting();
        let mut controller = loaded(&fixture).await;
        fixture.clients.behaviour.fail_with(AppError::ServerFault()).await;

        controller.load().await;

        assert!(controller.clients().is_empty());
        assert!(fixture.dialog.last_notice().unwrap().is_error());
    }

    #[tokio::test]
    async fn test_search_then_clear() {
        let fixture = Fixture::accepting();
        let mut controller = loaded(&fixture).await;

        controller.search("IDRISSI");
        assert_eq!(controller.clients().len(), 1);

        controller.search("");
        assert_eq!(controller.clients(), clients().as_slice());
    }

    #[tokio::test]
    async fn test_delete_after_confirmation_reloads() {
        let fixture = Fixture::accepting();
        let mut controller = loaded(&fixture).await;

        assert!(controller.delete(2).await);

        assert_eq!(
            fixture.dialog.questions(),
            vec!["Do you really want to delete client \"Yassine Benali\"?"]
        );
        assert_eq!(fixture.clients.behaviour.calls().await, vec!["list", "delete 2", "list"]);
        assert_eq!(controller.clients().len(), 2);
    }

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let fixture = Fixture::declining();
        let mut controller = loaded(&fixture).await;

        assert!(!controller.delete(2).await);

        assert_eq!(fixture.clients.behaviour.calls().await, vec!["list"]);
        assert_eq!(controller.clients().len(), 3);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_list() {
        let fixture = Fixture::accepting();
        let mut controller = loaded(&fixture).await;
        fixture
            .clients
            .behaviour
            .fail_with(AppError::ValidationFailed("Client still owns accounts"))
            .await;

        assert!(!controller.delete(1).await);

        assert_eq!(controller.clients(), clients().as_slice());
        assert_eq!(
            fixture.dialog.last_notice(),
            Some(Notice::error(
                "Could not delete the client: Client still owns accounts"
            ))
        );
    }
}
