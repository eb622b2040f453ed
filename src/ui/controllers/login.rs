use std::sync::Arc;

use crate::config::LoginConfig;
use crate::domain::error::{AppError, ErrorKind};
use crate::infrastructure::http::authorizer::LOGIN_PATH;
use crate::ui::Context;
use crate::ui::dialog::Notice;
use crate::ui::dto::login::LoginForm;
use crate::ui::middlewares::validate::Valid;
use crate::ui::router::Route;

pub struct LoginController {
    context: Arc<Context>,
    pub form: LoginForm,
    error_message: Option<String>,
    loading: bool,
}

impl LoginController {
    pub fn new(context: Arc<Context>, defaults: &LoginConfig) -> Self {
        Self {
            context,
            form: LoginForm::from(defaults),
            error_message: None,
            loading: false,
        }
    }

    /// A signed-in user skips the form and lands on their home screen.
    pub fn activate(&self) -> Option<Route> {
        self.context.auth.role().map(Route::home)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub async fn submit(&mut self) -> Option<Route> {
        if self.loading {
            return None;
        }

        let form = match Valid::new(self.form.clone()) {
            Ok(form) => form,
            Err(error) => {
                self.fail(error.message);
                return None;
            }
        };

        self.loading = true;
        self.error_message = None;

        let result = self.context.auth.login(form.into_inner().into()).await;

        self.loading = false;

        match result {
            Ok(session) => Some(Route::home(session.role)),
            Err(error) => {
                let message = failure_message(&error, &self.context.base_url);
                self.fail(message);
                None
            }
        }
    }

    pub async fn use_test_account(&mut self, username: &str, password: &str) -> Option<Route> {
        self.form = LoginForm {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.submit().await
    }

    fn fail(&mut self, message: String) {
        self.context.dialog.alert(Notice::error(message.clone()));
        self.error_message = Some(message);
    }
}

fn failure_message(error: &AppError, base_url: &str) -> String {
    match (error.code, error.kind) {
        (Some(400 | 401), _) => "Invalid username or password.".to_string(),
        (None, ErrorKind::NetworkUnreachable) => {
            format!("Server unreachable. Check that the backend is running at {base_url}")
        }
        (Some(404), _) => format!("Endpoint not found. Check the URL: {base_url}{LOGIN_PATH}"),
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::normalize;
    use crate::ui::mock::Fixture;
    use crate::ui::router::{AdminPage, EmployeePage};
    use reqwest::StatusCode;
    use rstest::*;

    fn controller(fixture: &Fixture) -> LoginController {
        LoginController::new(fixture.context.clone(), &LoginConfig::default())
    }

    #[tokio::test]
    async fn test_admin_lands_on_admin_dashboard() {
        let fixture = Fixture::accepting();
        let mut login = controller(&fixture);

        let route = login.use_test_account("admin", "admin123").await;

        assert_eq!(route, Some(Route::Admin(AdminPage::Dashboard)));
        assert_eq!(login.error_message(), None);
        assert!(!login.is_loading());
    }

    #[tokio::test]
    async fn test_signed_in_user_skips_form() {
        let fixture = Fixture::accepting();
        let mut login = controller(&fixture);
        login.use_test_account("employe", "employe123").await;

        let again = controller(&fixture);

        assert_eq!(again.activate(), Some(Route::Employee(EmployeePage::Dashboard)));
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let fixture = Fixture::accepting();
        let mut login = controller(&fixture);

        let route = login.use_test_account("admin", "wrong").await;

        assert_eq!(route, None);
        assert_eq!(login.error_message(), Some("Invalid username or password."));
        assert_eq!(
            fixture.dialog.last_notice(),
            Some(Notice::error("Invalid username or password."))
        );
    }

    #[tokio::test]
    async fn test_empty_form_is_not_sent() {
        let fixture = Fixture::accepting();
        let mut login = controller(&fixture);

        assert_eq!(login.submit().await, None);
        assert!(login.error_message().is_some());
    }

    #[test]
    fn test_prefilled_form_from_configuration() {
        let fixture = Fixture::accepting();
        let login = LoginController::new(
            fixture.context.clone(),
            &LoginConfig {
                username: Some("admin".to_string()),
                password: Some("admin123".to_string()),
            },
        );

        assert_eq!(login.form.username, "admin");
        assert_eq!(login.form.password, "admin123");
    }

    #[rstest]
    #[case::unreachable(
        normalize(None, b""),
        "Server unreachable. Check that the backend is running at http://localhost:8089/api"
    )]
    #[case::not_found(
        normalize(Some(StatusCode::NOT_FOUND), b""),
        "Endpoint not found. Check the URL: http://localhost:8089/api/auth/login"
    )]
    #[case::bad_request(normalize(Some(StatusCode::BAD_REQUEST), b""), "Invalid username or password.")]
    #[case::server(
        normalize(Some(StatusCode::INTERNAL_SERVER_ERROR), br#"{"message":"boom"}"#),
        "Error 500: boom"
    )]
    fn test_failure_message(#[case] error: AppError, #[case] expected: &str) {
        assert_eq!(failure_message(&error, "http://localhost:8089/api"), expected);
    }
}
