use std::collections::BTreeMap;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

pub type AppResult<T> = core::result::Result<T, AppError>;

macro_rules! static_error {
    ($name:ident, $kind:expr) => {
        #[allow(non_snake_case, missing_docs)]
        pub fn $name(message: impl ToString) -> AppError {
            AppError {
                kind: $kind,
                message: message.to_string(),
                code: None,
                trace: None,
            }
        }
    };

    ($name:ident, $kind:expr, $default:expr) => {
        #[allow(non_snake_case, missing_docs)]
        pub fn $name() -> AppError {
            AppError {
                kind: $kind,
                message: $default.to_string(),
                code: None,
                trace: None,
            }
        }
    };
}

/// Closed set of failures a caller can observe from the back-office client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NetworkUnreachable,
    NotFound,
    ServerFault,
    AuthorizationDenied,
    ValidationFailed,
    Timeout,
    Unspecified,
}

impl ErrorKind {
    pub fn default_message(self) -> &'static str {
        match self {
            Self::NetworkUnreachable => message::NETWORK_UNREACHABLE,
            Self::NotFound => message::NOT_FOUND,
            Self::ServerFault => message::SERVER_FAULT,
            Self::AuthorizationDenied => message::AUTHORIZATION_DENIED,
            Self::ValidationFailed => message::VALIDATION_FAILED,
            Self::Timeout => message::TIMEOUT,
            Self::Unspecified => message::UNSPECIFIED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(skip)]
    pub trace: Option<String>,
}

#[rustfmt::skip]
pub mod message {
    pub static NETWORK_UNREACHABLE: &str = "Unable to connect to the server";
    pub static NOT_FOUND: &str = "The requested resource was not found";
    pub static SERVER_FAULT: &str = "The server encountered an unexpected condition";
    pub static AUTHORIZATION_DENIED: &str = "The request lacks valid authentication credentials or permissions";
    pub static VALIDATION_FAILED: &str = "The request contains invalid data";
    pub static TIMEOUT: &str = "The server took too long to respond";
    pub static UNSPECIFIED: &str = "An error occurred";
}

#[rustfmt::skip]
impl AppError {
    // 1. Errors with Custom Message
    static_error!(ValidationFailed, ErrorKind::ValidationFailed);
    static_error!(Other, ErrorKind::Unspecified);

    // 2. Errors with Default Message
    static_error!(NetworkUnreachable, ErrorKind::NetworkUnreachable, message::NETWORK_UNREACHABLE);
    static_error!(NotFound, ErrorKind::NotFound, message::NOT_FOUND);
    static_error!(ServerFault, ErrorKind::ServerFault, message::SERVER_FAULT);
    static_error!(AuthorizationDenied, ErrorKind::AuthorizationDenied, message::AUTHORIZATION_DENIED);
    static_error!(Timeout, ErrorKind::Timeout, message::TIMEOUT);
    static_error!(Unspecified, ErrorKind::Unspecified, message::UNSPECIFIED);

    pub fn trace(self, message: &str) -> AppError {
        AppError {
            kind: self.kind,
            code: self.code,
            message: self.message,
            trace: Some(message.to_owned()),
        }
    }

    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

impl std::error::Error for AppError {}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "Error {}: {}", code, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Maps what the transport observed onto the closed error taxonomy.
///
/// `None` means no response was received at all. A `message` field in the
/// response body wins over the default text of the resulting kind.
pub fn normalize(status: Option<StatusCode>, body: &[u8]) -> AppError {
    let Some(status) = status else {
        return AppError::NetworkUnreachable();
    };

    let kind = match status {
        StatusCode::NOT_FOUND => ErrorKind::NotFound,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ErrorKind::AuthorizationDenied,
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
            ErrorKind::ValidationFailed
        }
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => ErrorKind::Timeout,
        status if status.is_server_error() => ErrorKind::ServerFault,
        _ => ErrorKind::Unspecified,
    };

    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| kind.default_message().to_string());

    AppError {
        kind,
        message,
        code: Some(status.as_u16()),
        trace: None,
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        let normalized = if error.is_timeout() {
            AppError::Timeout()
        } else if let Some(status) = error.status() {
            normalize(Some(status), &[])
        } else if error.is_connect() || error.is_request() {
            normalize(None, &[])
        } else {
            AppError::Unspecified()
        };

        normalized.trace(&error.to_string())
    }
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(error: tokio::time::error::Elapsed) -> Self {
        AppError::Timeout().trace(&error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Unspecified().trace(&error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::Unspecified().trace(&error.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = BTreeMap::new();

        for (_, field, error) in flatten_errors(&errors, None, None) {
            fields.entry(field).or_insert_with(|| error.to_string());
        }

        let summary = fields
            .into_iter()
            .map(|(field, error)| match field.as_str() {
                "__all__" => error,
                _ => format!("{field}: {error}"),
            })
            .collect::<Vec<_>>()
            .join("; ");

        AppError::ValidationFailed(summary)
    }
}

fn flatten_errors(
    errors: &ValidationErrors,
    path: Option<String>,
    indent: Option<u16>,
) -> Vec<(u16, String, &ValidationError)> {
    errors
        .errors()
        .iter()
        .flat_map(|(field, err)| {
            let indent = indent.unwrap_or(0);
            let actual_path = path
                .as_ref()
                .map(|path| [path.as_str(), field].join("."))
                .unwrap_or_else(|| field.to_string());
            match err {
                ValidationErrorsKind::Field(field_errors) => field_errors
                    .iter()
                    .map(|error| (indent, actual_path.clone(), error))
                    .collect::<Vec<_>>(),
                ValidationErrorsKind::List(list_error) => list_error
                    .iter()
                    .flat_map(|(index, errors)| {
                        let actual_path = format!("{}[{}]", actual_path.as_str(), index);
                        flatten_errors(errors, Some(actual_path), Some(indent + 1))
                    })
                    .collect::<Vec<_>>(),
                ValidationErrorsKind::Struct(struct_errors) => {
                    flatten_errors(struct_errors, Some(actual_path), Some(indent + 1))
                }
            }
        })
        .collect::<Vec<_>>()
}
