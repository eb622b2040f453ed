use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::auth::AuthRepository;
use crate::domain::repositories::client::ClientRepository;
use crate::domain::repositories::operation::OperationRepository;
use crate::domain::repositories::session::SessionRepository;
use crate::domain::repositories::storage::KeyValueStore;
use crate::domain::services::auth::AuthService;
use crate::domain::services::session::SessionService;

use crate::services::auth::AuthServiceImpl;
use crate::services::session::SessionStore;

use crate::infrastructure::http::ApiClient;
use crate::infrastructure::repositories::account::AccountRepositoryImpl;
use crate::infrastructure::repositories::auth::AuthRepositoryImpl;
use crate::infrastructure::repositories::client::ClientRepositoryImpl;
use crate::infrastructure::repositories::operation::OperationRepositoryImpl;
use crate::infrastructure::repositories::session::SessionRepositoryImpl;
use crate::infrastructure::repositories::storage::FileStore;

use crate::ui::Context;
use crate::ui::dialog::Dialog;

pub struct Container {
    pub auth_service: Arc<dyn AuthService>,
    pub client_repository: Arc<dyn ClientRepository>,
    pub account_repository: Arc<dyn AccountRepository>,
    pub operation_repository: Arc<dyn OperationRepository>,
    pub base_url: String,
    pub load_timeout: Duration,
}

impl Container {
    /// Wires the stack against the file store named in `config`.
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&config.storage.path));

        Self::with_store(config, store)
    }

    pub fn with_store(
        config: &AppConfig,
        store: Arc<dyn KeyValueStore>,
    ) -> Result<Self, reqwest::Error> {
        let sessions = session_service(store);
        let api = Arc::new(ApiClient::new(&config.api, sessions.clone())?);

        Ok(Container {
            auth_service: auth_service(api.clone(), sessions),
            client_repository: Arc::new(ClientRepositoryImpl::new(api.clone())),
            account_repository: Arc::new(AccountRepositoryImpl::new(
                api.clone(),
                Duration::from_secs(config.api.list_timeout_secs),
            )),
            operation_repository: Arc::new(OperationRepositoryImpl::new(api.clone())),
            base_url: api.base_url().to_string(),
            load_timeout: Duration::from_secs(config.ui.load_timeout_secs),
        })
    }

    pub fn context(&self, dialog: Arc<dyn Dialog>) -> Arc<Context> {
        Arc::new(Context {
            auth: self.auth_service.clone(),
            clients: self.client_repository.clone(),
            accounts: self.account_repository.clone(),
            operations: self.operation_repository.clone(),
            dialog,
            load_timeout: self.load_timeout,
            base_url: self.base_url.clone(),
        })
    }
}

fn session_service(store: Arc<dyn KeyValueStore>) -> Arc<dyn SessionService> {
    let session_repository: Arc<dyn SessionRepository> =
        Arc::new(SessionRepositoryImpl::new(store));

    Arc::new(SessionStore::rehydrate(session_repository))
}

fn auth_service(api: Arc<ApiClient>, sessions: Arc<dyn SessionService>) -> Arc<dyn AuthService> {
    let auth_repository: Arc<dyn AuthRepository> = Arc::new(AuthRepositoryImpl::new(api));

    Arc::new(AuthServiceImpl::new(auth_repository, sessions))
}
