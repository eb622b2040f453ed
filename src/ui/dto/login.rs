use serde::Deserialize;
use validator::Validate;

use crate::config::LoginConfig;
use crate::domain::models::session::Credentials;
use crate::ui::dto::validation::is_present;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(custom(function = "is_present"))]
    pub username: String,

    #[validate(custom(function = "is_present"))]
    pub password: String,
}

impl From<&LoginConfig> for LoginForm {
    fn from(config: &LoginConfig) -> Self {
        LoginForm {
            username: config.username.clone().unwrap_or_default(),
            password: config.password.clone().unwrap_or_default(),
        }
    }
}

impl From<LoginForm> for Credentials {
    fn from(form: LoginForm) -> Self {
        Credentials {
            username: form.username.trim().to_string(),
            password: form.password,
        }
    }
}
