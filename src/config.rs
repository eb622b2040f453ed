use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub storage: StorageConfig,
    pub login: LoginConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: String,
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
    /// Ceiling for list-by-client calls.
    pub list_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Ceiling for every screen load.
    pub load_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    pub path: String,
}

/// Values the login form starts with. Both unset by default.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoginConfig {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            service: ServiceConfig {
                name: "bank-backoffice".to_string(),
            },
            logging: LoggingConfig {
                level: "warn".to_string(),
                otlp_endpoint: None,
            },
            api: ApiConfig {
                base_url: "http://localhost:8089/api".to_string(),
                request_timeout_secs: 30,
                list_timeout_secs: 10,
            },
            ui: UiConfig {
                load_timeout_secs: 8,
            },
            storage: StorageConfig {
                path: ".backoffice/session.json".to_string(),
            },
            login: LoginConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file(format!(
                "config/{}.toml",
                std::env::var("RUST_ENV").unwrap_or("development".to_string())
            )))
            .merge(Env::prefixed("APP_").split("__"))
    }
}
