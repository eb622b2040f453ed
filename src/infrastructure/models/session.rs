use serde::{Deserialize, Serialize};

use crate::domain::error::AppError;
use crate::domain::models::session::{Credentials, Role, Session};

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

impl<'a> From<&'a Credentials> for LoginRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        LoginRequest {
            username: &credentials.username,
            password: &credentials.password,
        }
    }
}

/// Login response body, also the shape of the persisted `currentUser` record.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,
}

impl TryFrom<AuthResponse> for Session {
    type Error = AppError;

    fn try_from(response: AuthResponse) -> Result<Self, Self::Error> {
        let role = Role::parse(&response.role).ok_or_else(|| {
            AppError::AuthorizationDenied().trace(&format!("unsupported role `{}`", response.role))
        })?;

        Ok(Session {
            token: response.token,
            username: response.username,
            role,
            client_id: response.client_id,
        })
    }
}

impl From<&Session> for AuthResponse {
    fn from(session: &Session) -> Self {
        AuthResponse {
            token: session.token.clone(),
            username: session.username.clone(),
            role: session.role.as_str().to_string(),
            client_id: session.client_id,
        }
    }
}
