use actix_web::web;
use rstest::*;

use crate::config::LoginConfig;
use crate::container::Container;
use crate::domain::error::ErrorKind;
use crate::domain::models::session::Role;
use crate::tests::backend::{self, FakeBank};
use crate::tests::{TestContext, context, credentials};
use crate::ui::controllers::login::LoginController;
use crate::ui::router::{AdminPage, Route, Router};

#[rstest]
#[awt]
#[actix_web::test]
async fn test_login_then_bearer(#[future] context: TestContext) {
    let session = context.sign_in("admin", "admin123").await;

    assert_eq!(session.username, "admin");
    assert_eq!(session.role, Role::Admin);
    assert!(!session.token.is_empty());

    let clients = context.container.client_repository.list().await.unwrap();

    assert_eq!(clients.len(), 2);
    assert_eq!(clients[0].name, "Amina Alaoui");
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_login_is_never_authorized(#[future] context: TestContext) {
    context.sign_in("admin", "admin123").await;
    context.sign_in("employe", "employe123").await;

    assert_eq!(context.bank.state().login_authorizations, vec![None, None]);
    assert_eq!(context.container.auth_service.role(), Some(Role::Employee));
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_request_without_session(#[future] context: TestContext) {
    let error = context.container.client_repository.list().await.unwrap_err();

    assert_eq!(error.kind, ErrorKind::AuthorizationDenied);
    assert_eq!(error.code, Some(401));
    assert_eq!(error.message, "Full authentication is required");
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_logout_drops_bearer(#[future] context: TestContext) {
    context.sign_in("employe", "employe123").await;
    context.container.auth_service.logout().unwrap();

    let error = context.container.account_repository.list().await.unwrap_err();

    assert_eq!(error.kind, ErrorKind::AuthorizationDenied);
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_bad_credentials(#[future] context: TestContext) {
    let mut login = LoginController::new(context.context.clone(), &LoginConfig::default());

    let route = login.use_test_account("admin", "wrong").await;

    assert_eq!(route, None);
    assert_eq!(login.error_message(), Some("Invalid username or password."));
    assert!(!context.container.auth_service.is_authenticated());
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_unknown_role_is_denied(#[future] context: TestContext) {
    let error = context
        .container
        .auth_service
        .login(credentials("auditor", "auditor123"))
        .await
        .unwrap_err();

    assert_eq!(error.kind, ErrorKind::AuthorizationDenied);
    assert_eq!(context.container.auth_service.current_session(), None);
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_guards_follow_session(#[future] context: TestContext) {
    let router = Router::new(context.container.auth_service.clone());

    context.sign_in("admin", "admin123").await;

    assert_eq!(router.navigate("/admin/clients"), Route::Admin(AdminPage::Clients));
    assert_eq!(router.navigate("/employe/gestion-operations"), Route::Login);

    context.container.auth_service.logout().unwrap();

    assert_eq!(router.navigate("/admin/clients"), Route::Login);
    assert_eq!(router.navigate("/employe/dashboard"), Route::Login);
    assert_eq!(router.redirect_by_role(), Route::Login);
}

#[actix_web::test]
async fn test_unreachable_backend() {
    let base_url = backend::unreachable();
    let context = TestContext::new(web::Data::new(FakeBank::new()), base_url.clone());
    let mut login = LoginController::new(context.context.clone(), &LoginConfig::default());

    assert_eq!(login.use_test_account("admin", "admin123").await, None);

    assert_eq!(
        login.error_message().map(str::to_string),
        Some(format!(
            "Server unreachable. Check that the backend is running at {base_url}"
        ))
    );
}

#[actix_web::test]
async fn test_session_survives_restart() {
    let bank = web::Data::new(FakeBank::new());
    let base_url = backend::serve(bank.clone());
    let dir = tempfile::tempdir().unwrap();

    let mut config = TestContext::new(bank, base_url).config;
    config.storage.path = dir.path().join("session.json").to_string_lossy().to_string();

    let first = Container::new(&config).unwrap();
    first
        .auth_service
        .login(credentials("employe", "employe123"))
        .await
        .unwrap();

    let second = Container::new(&config).unwrap();

    let session = second.auth_service.current_session().unwrap();
    assert_eq!(session.username, "employe");
    assert_eq!(session.role, Role::Employee);
    assert_eq!(second.client_repository.list().await.unwrap().len(), 2);
}
