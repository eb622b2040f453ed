use std::io::{self, Write};
use std::sync::Arc;

use crate::cli::terminal::{prompt, prompt_hidden};
use crate::cli::{AdminCommand, CliError, Command, EmployeeCommand, LoginArgs, MovementArgs, OpenAccountArgs, render};
use crate::config::LoginConfig;
use crate::domain::models::account::AccountKind;
use crate::ui::Context;
use crate::ui::controllers::admin::accounts::AdminAccountsController;
use crate::ui::controllers::admin::clients::AdminClientsController;
use crate::ui::controllers::admin::dashboard::AdminDashboardController;
use crate::ui::controllers::employee::accounts::AccountManagementController;
use crate::ui::controllers::employee::clients::ClientManagementController;
use crate::ui::controllers::employee::dashboard::EmployeeDashboardController;
use crate::ui::controllers::employee::operations::OperationsDeskController;
use crate::ui::controllers::layout::LayoutController;
use crate::ui::controllers::login::LoginController;
use crate::ui::dto::operation::{MovementForm, OperationForm, TransferForm};
use crate::ui::router::{AdminPage, EmployeePage, Route, Router};

type CommandResult = Result<(), CliError>;

/// Runs one command against `context`. Screens behind a guard are only
/// reached when the router lets the current session through.
pub async fn execute(context: Arc<Context>, login: &LoginConfig, command: Command) -> CommandResult {
    let router = Router::new(context.auth.clone());
    let mut out = io::stdout();

    match command {
        Command::Login(args) => sign_in(context, login, args, &mut out).await,
        Command::Logout => {
            let mut layout = LayoutController::new(context);
            match layout.logout() {
                Some(route) => Ok(writeln!(out, "Signed out, next: {route}")?),
                None => Ok(()),
            }
        }
        Command::Whoami => {
            let layout = LayoutController::new(context);
            Ok(render::session(&mut out, layout.current_user().as_ref())?)
        }
        Command::Admin(command) => {
            enter(&router, Route::Admin(admin_page(&command)))?;
            admin(context, command, &mut out).await
        }
        Command::Employee(command) => {
            enter(&router, Route::Employee(employee_page(&command)))?;
            employee(context, command, &mut out).await
        }
    }
}

fn enter(router: &Router, target: Route) -> CommandResult {
    let route = router.navigate(target.path());

    if route != target {
        return Err(CliError::Redirected(target));
    }

    Ok(())
}

fn completed(done: bool, action: &'static str) -> CommandResult {
    if done { Ok(()) } else { Err(CliError::Failed(action)) }
}

async fn sign_in(
    context: Arc<Context>,
    defaults: &LoginConfig,
    args: LoginArgs,
    out: &mut impl Write,
) -> CommandResult {
    let mut controller = LoginController::new(context, defaults);

    if let Some(home) = controller.activate() {
        writeln!(out, "Already signed in, home: {home}")?;
        return Ok(());
    }

    if let Some(username) = args.username {
        controller.form.username = username;
    }
    if controller.form.username.trim().is_empty() {
        controller.form.username = prompt("Username: ")?;
    }
    match args.password {
        Some(password) => controller.form.password = password,
        None if controller.form.password.is_empty() => {
            controller.form.password = prompt_hidden("Password: ")?;
        }
        None => {}
    }

    match controller.submit().await {
        Some(home) => Ok(writeln!(out, "Signed in, home: {home}")?),
        None => Err(CliError::Failed("login")),
    }
}

fn admin_page(command: &AdminCommand) -> AdminPage {
    match command {
        AdminCommand::Dashboard => AdminPage::Dashboard,
        AdminCommand::Clients { .. } | AdminCommand::DeleteClient { .. } => AdminPage::Clients,
        AdminCommand::Accounts { .. } | AdminCommand::Activate { .. } | AdminCommand::Suspend { .. } => {
            AdminPage::Accounts
        }
    }
}

async fn admin(context: Arc<Context>, command: AdminCommand, out: &mut impl Write) -> CommandResult {
    match command {
        AdminCommand::Dashboard => {
            let mut dashboard = AdminDashboardController::new(context);
            dashboard.load().await;
            Ok(render::admin_dashboard(out, &dashboard)?)
        }
        AdminCommand::Clients { search } => {
            let mut clients = AdminClientsController::new(context);
            clients.load().await;
            if let Some(keyword) = search {
                clients.search(&keyword);
            }
            Ok(render::clients(out, clients.clients())?)
        }
        AdminCommand::DeleteClient { id } => {
            let mut clients = AdminClientsController::new(context);
            clients.load().await;
            completed(clients.delete(id).await, "delete-client")
        }
        AdminCommand::Accounts { status, kind } => {
            let mut accounts = AdminAccountsController::new(context);
            accounts.load().await;
            accounts.filter_status(status);
            accounts.filter_kind(kind);
            Ok(render::accounts(out, accounts.accounts())?)
        }
        AdminCommand::Activate { id } => {
            let mut accounts = AdminAccountsController::new(context);
            accounts.load().await;
            completed(accounts.activate(id).await, "activate")
        }
        AdminCommand::Suspend { id } => {
            let mut accounts = AdminAccountsController::new(context);
            accounts.load().await;
            completed(accounts.suspend(id).await, "suspend")
        }
    }
}

fn employee_page(command: &EmployeeCommand) -> EmployeePage {
    match command {
        EmployeeCommand::Dashboard => EmployeePage::Dashboard,
        EmployeeCommand::Clients { .. }
        | EmployeeCommand::ShowClient { .. }
        | EmployeeCommand::AddClient { .. }
        | EmployeeCommand::EditClient { .. } => EmployeePage::Clients,
        EmployeeCommand::Accounts { .. }
        | EmployeeCommand::OpenAccount(_)
        | EmployeeCommand::Activate { .. }
        | EmployeeCommand::Suspend { .. } => EmployeePage::Accounts,
        EmployeeCommand::Operations { .. }
        | EmployeeCommand::Deposit(_)
        | EmployeeCommand::Withdraw(_)
        | EmployeeCommand::Transfer { .. } => EmployeePage::Operations,
    }
}

async fn employee(
    context: Arc<Context>,
    command: EmployeeCommand,
    out: &mut impl Write,
) -> CommandResult {
    match command {
        EmployeeCommand::Dashboard => {
            let mut dashboard = EmployeeDashboardController::new(context);
            dashboard.load().await;
            Ok(render::employee_dashboard(out, &dashboard)?)
        }
        EmployeeCommand::Clients { search } => {
            let mut clients = ClientManagementController::new(context);
            clients.load().await;
            if let Some(keyword) = search {
                clients.search(&keyword);
            }
            Ok(render::clients(out, clients.clients())?)
        }
        EmployeeCommand::ShowClient { id } => {
            let mut clients = ClientManagementController::new(context);
            clients.load().await;
            if !clients.open_view(id).await {
                return Err(CliError::Failed("show-client"));
            }
            match clients.selected() {
                Some(client) => Ok(render::client(out, client, clients.client_accounts())?),
                None => Err(CliError::Failed("show-client")),
            }
        }
        EmployeeCommand::AddClient { name, email } => {
            let mut clients = ClientManagementController::new(context);
            clients.load().await;
            clients.open_add();
            clients.form.name = name;
            clients.form.email = email;
            completed(clients.save().await, "add-client")
        }
        EmployeeCommand::EditClient { id, name, email } => {
            let mut clients = ClientManagementController::new(context);
            clients.load().await;
            if !clients.open_edit(id) {
                return Err(CliError::Failed("edit-client"));
            }
            if let Some(name) = name {
                clients.form.name = name;
            }
            if let Some(email) = email {
                clients.form.email = email;
            }
            completed(clients.save().await, "edit-client")
        }
        EmployeeCommand::Accounts { search } => {
            let mut accounts = AccountManagementController::new(context);
            accounts.load().await;
            if let Some(keyword) = search {
                accounts.search(&keyword);
            }
            Ok(render::accounts(out, accounts.accounts())?)
        }
        EmployeeCommand::OpenAccount(args) => open_account(context, args).await,
        EmployeeCommand::Activate { id } => {
            let mut accounts = AccountManagementController::new(context);
            accounts.load().await;
            completed(accounts.activate(id).await, "activate")
        }
        EmployeeCommand::Suspend { id } => {
            let mut accounts = AccountManagementController::new(context);
            accounts.load().await;
            completed(accounts.suspend(id).await, "suspend")
        }
        EmployeeCommand::Operations { account } => {
            let mut desk = OperationsDeskController::new(context);
            desk.select_account(Some(account)).await;
            Ok(render::operations(out, desk.operations())?)
        }
        EmployeeCommand::Deposit(args) => {
            operate(context, OperationForm::Deposit(movement(args)), "deposit").await
        }
        EmployeeCommand::Withdraw(args) => {
            operate(context, OperationForm::Withdrawal(movement(args)), "withdraw").await
        }
        EmployeeCommand::Transfer {
            source,
            destination,
            amount,
            description,
        } => {
            let form = OperationForm::Transfer(TransferForm {
                source: Some(source),
                destination: Some(destination),
                amount,
                description,
            });
            operate(context, form, "transfer").await
        }
    }
}

async fn open_account(context: Arc<Context>, args: OpenAccountArgs) -> CommandResult {
    let mut accounts = AccountManagementController::new(context);
    accounts.load().await;
    accounts.open_add();

    let form = &mut accounts.form;
    form.client_id = Some(args.client);
    form.balance = args.balance;
    form.currency = args.currency;
    form.select_kind(args.kind);

    let ignored = match args.kind {
        AccountKind::Current => args
            .overdraft
            .is_some_and(|value| !form.set_overdraft(value))
            || args.interest_rate.is_some(),
        AccountKind::Savings => args
            .interest_rate
            .is_some_and(|value| !form.set_interest_rate(value))
            || args.overdraft.is_some(),
    };
    if ignored {
        tracing::warn!(kind = ?args.kind, "option not applicable to this account type ignored");
    }

    completed(accounts.save().await, "open-account")
}

fn movement(args: MovementArgs) -> MovementForm {
    MovementForm {
        account_id: Some(args.account),
        amount: args.amount,
        description: args.description,
    }
}

async fn operate(context: Arc<Context>, form: OperationForm, action: &'static str) -> CommandResult {
    let mut desk = OperationsDeskController::new(context);
    desk.load_accounts().await;
    desk.open(form);
    completed(desk.execute().await, action)
}
