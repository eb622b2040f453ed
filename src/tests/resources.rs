use std::time::Duration;

use rstest::*;
use serde_json::json;

use crate::domain::error::ErrorKind;
use crate::domain::models::account::{AccountKind, AccountStatus, NewAccount};
use crate::domain::models::client::ClientDraft;
use crate::domain::models::operation::{Deposit, OperationKind, Transfer, Withdrawal};
use crate::tests::{TestContext, context};
use crate::ui::controllers::admin::clients::AdminClientsController;
use crate::ui::controllers::employee::clients::ClientManagementController;
use crate::ui::dialog::Notice;
use crate::ui::dto::client::ClientForm;

#[rstest]
#[awt]
#[actix_web::test]
async fn test_add_client_sends_normalized_payload(#[future] context: TestContext) {
    context.sign_in("employe", "employe123").await;
    let mut clients = ClientManagementController::new(context.context.clone());
    clients.load().await;

    clients.open_add();
    clients.form = ClientForm {
        name: "  Karim Tazi ".to_string(),
        email: " Karim.Tazi@Bank.MA".to_string(),
    };

    assert!(clients.save().await);

    assert_eq!(clients.clients().len(), 3);
    assert_eq!(
        context.bank.state().bodies.last(),
        Some(&(
            "clients".to_string(),
            json!({"nom": "Karim Tazi", "email": "karim.tazi@bank.ma"})
        ))
    );
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_duplicate_email_is_rejected(#[future] context: TestContext) {
    context.sign_in("employe", "employe123").await;

    let error = context
        .container
        .client_repository
        .create(ClientDraft {
            name: "Amina A.".to_string(),
            email: "AMINA@bank.ma".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(error.kind, ErrorKind::ValidationFailed);
    assert_eq!(error.code, Some(409));
    assert_eq!(error.message, "Email already used");
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_missing_client(#[future] context: TestContext) {
    context.sign_in("admin", "admin123").await;

    let error = context.container.client_repository.get(999).await.unwrap_err();

    assert_eq!(error.kind, ErrorKind::NotFound);
    assert_eq!(error.code, Some(404));
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_search_and_update_client(#[future] context: TestContext) {
    context.sign_in("employe", "employe123").await;
    let repository = &context.container.client_repository;

    let found = repository.search("benali").await.unwrap();
    assert_eq!(found.len(), 1);

    let updated = repository
        .update(
            found[0].id,
            ClientDraft {
                name: "Yassine Benali".to_string(),
                email: "Y.Benali@Bank.ma ".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.email, "y.benali@bank.ma");
    assert_eq!(repository.get(2).await.unwrap(), updated);
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_delete_client_with_accounts(#[future] context: TestContext) {
    context.sign_in("admin", "admin123").await;
    let mut clients = AdminClientsController::new(context.context.clone());
    clients.load().await;

    assert!(!clients.delete(1).await);

    assert_eq!(clients.clients().len(), 2);
    assert_eq!(
        context.dialog.last_notice(),
        Some(Notice::error(
            "Could not delete the client: Error 409: Client still owns accounts"
        ))
    );
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_open_current_account(#[future] context: TestContext) {
    context.sign_in("employe", "employe123").await;

    let account = context
        .container
        .account_repository
        .create_current(NewAccount {
            client_id: 2,
            balance: 100.0,
            currency: "MAD".to_string(),
            overdraft: Some(200.0),
            interest_rate: Some(5.0),
        })
        .await
        .unwrap();

    assert_eq!(account.kind(), Some(AccountKind::Current));
    assert_eq!(account.status, AccountStatus::Created);
    assert_eq!(account.client_name, "Yassine Benali");

    let state = context.bank.state();
    let (path, body) = state.bodies.last().unwrap();
    assert_eq!(path, "comptes/courant");
    assert_eq!(body["decouvert"], json!(200.0));
    assert!(body["tauxInteret"].is_null());
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_account_lifecycle_and_movements(#[future] context: TestContext) {
    context.sign_in("employe", "employe123").await;
    let accounts = &context.container.account_repository;
    let operations = &context.container.operation_repository;

    accounts.activate(11).await.unwrap();
    assert_eq!(accounts.get(11).await.unwrap().status, AccountStatus::Activated);

    let deposit = operations
        .deposit(Deposit {
            account_id: 10,
            amount: 200.0,
            description: "Cash".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(deposit.kind, OperationKind::Credit);
    assert_eq!(deposit.created_by, "employe");

    operations
        .transfer(Transfer {
            source: 10,
            destination: 11,
            amount: 500.0,
            description: "Savings".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(accounts.get(10).await.unwrap().balance, 1200.0);
    assert_eq!(accounts.get(11).await.unwrap().balance, 8500.0);
    assert_eq!(operations.list_by_account(10).await.unwrap().len(), 3);

    accounts.suspend(10).await.unwrap();
    assert_eq!(accounts.get(10).await.unwrap().status, AccountStatus::Suspended);
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_withdrawal_beyond_overdraft(#[future] context: TestContext) {
    context.sign_in("employe", "employe123").await;

    let error = context
        .container
        .operation_repository
        .withdraw(Withdrawal {
            account_id: 10,
            amount: 5000.0,
            description: "Car".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(error.kind, ErrorKind::ValidationFailed);
    assert_eq!(error.code, Some(400));
    assert_eq!(error.message, "Solde insuffisant");
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_client_accounts_ceiling(#[future] context: TestContext) {
    context.sign_in("employe", "employe123").await;
    context.bank.state().stall = Duration::from_secs(3);

    let error = context
        .container
        .account_repository
        .list_by_client(1)
        .await
        .unwrap_err();

    assert_eq!(error.kind, ErrorKind::Timeout);
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_client_view_after_ceiling(#[future] context: TestContext) {
    context.sign_in("employe", "employe123").await;
    context.bank.state().stall = Duration::from_secs(3);
    let mut clients = ClientManagementController::new(context.context.clone());
    clients.load().await;

    assert!(clients.open_view(1).await);

    assert!(clients.client_accounts().is_empty());
    assert_eq!(
        context.dialog.last_notice(),
        Some(Notice::error(
            "Loading the client's accounts took too long. Please try again."
        ))
    );
}
