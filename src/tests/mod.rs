mod auth;
mod resources;

pub mod utils;

use std::sync::Arc;

use actix_web::web;
use rstest::*;

use crate::config::AppConfig;
use crate::container::Container;
use crate::domain::models::session::{Credentials, Session};
use crate::infrastructure::repositories::storage::MemoryStore;
use crate::ui::Context;
use crate::ui::dialog::mock::ScriptedDialog;

use backend::FakeBank;

pub struct TestContext {
    pub bank: web::Data<FakeBank>,
    pub config: AppConfig,
    pub container: Container,
    pub dialog: Arc<ScriptedDialog>,
    pub context: Arc<Context>,
}

impl TestContext {
    pub fn new(bank: web::Data<FakeBank>, base_url: String) -> Self {
        let mut config = AppConfig::default();
        config.api.base_url = base_url;
        config.api.list_timeout_secs = 1;

        Self::with_config(bank, config)
    }

    pub fn with_config(bank: web::Data<FakeBank>, config: AppConfig) -> Self {
        let container = Container::with_store(&config, Arc::new(MemoryStore::default())).unwrap();
        let dialog = Arc::new(ScriptedDialog::accepting());
        let context = container.context(dialog.clone());

        TestContext {
            bank,
            config,
            container,
            dialog,
            context,
        }
    }

    pub async fn sign_in(&self, username: &str, password: &str) -> Session {
        self.container
            .auth_service
            .login(credentials(username, password))
            .await
            .unwrap()
    }
}

pub fn credentials(username: &str, password: &str) -> Credentials {
    Credentials {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[fixture]
async fn context() -> TestContext {
    let bank = web::Data::new(FakeBank::new());
    let base_url = backend::serve(bank.clone());

    TestContext::new(bank, base_url)
}
