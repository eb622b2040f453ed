pub mod commands;
pub mod render;
pub mod terminal;

use clap::{Args, Parser, Subcommand};
use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::domain::models::account::{AccountKind, AccountStatus};
use crate::ui::router::Route;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0} is not available to the current session, sign in first")]
    Redirected(Route),
    #[error("{0} did not complete")]
    Failed(&'static str),
    #[error(transparent)]
    Terminal(#[from] ReadlineError),
    #[error(transparent)]
    Output(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "bank-backoffice", version, about = "Back-office client for the bank API")]
pub struct Cli {
    /// Answer yes to every confirmation.
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and store the session.
    Login(LoginArgs),
    /// Sign out and forget the stored session.
    Logout,
    /// Show the signed-in user.
    Whoami,
    #[command(subcommand)]
    Admin(AdminCommand),
    #[command(subcommand, name = "employe")]
    Employee(EmployeeCommand),
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(short, long)]
    pub username: Option<String>,
    /// Prompted for when missing.
    #[arg(short, long)]
    pub password: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    Dashboard,
    Clients {
        #[arg(short, long)]
        search: Option<String>,
    },
    DeleteClient {
        id: i64,
    },
    Accounts {
        #[arg(long, value_parser = parse_status)]
        status: Option<AccountStatus>,
        #[arg(long, value_parser = parse_kind)]
        kind: Option<AccountKind>,
    },
    Activate {
        id: i64,
    },
    Suspend {
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum EmployeeCommand {
    Dashboard,
    Clients {
        #[arg(short, long)]
        search: Option<String>,
    },
    ShowClient {
        id: i64,
    },
    AddClient {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    EditClient {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    Accounts {
        #[arg(short, long)]
        search: Option<String>,
    },
    OpenAccount(OpenAccountArgs),
    Activate {
        id: i64,
    },
    Suspend {
        id: i64,
    },
    Operations {
        account: i64,
    },
    Deposit(MovementArgs),
    Withdraw(MovementArgs),
    Transfer {
        source: i64,
        destination: i64,
        amount: f64,
        #[arg(short, long)]
        description: String,
    },
}

#[derive(Args, Debug)]
pub struct OpenAccountArgs {
    #[arg(long)]
    pub client: i64,
    #[arg(long, value_parser = parse_kind, default_value = "current")]
    pub kind: AccountKind,
    #[arg(long, default_value_t = 0.0)]
    pub balance: f64,
    #[arg(long, default_value = "MAD")]
    pub currency: String,
    /// Current accounts only.
    #[arg(long)]
    pub overdraft: Option<f64>,
    /// Savings accounts only.
    #[arg(long)]
    pub interest_rate: Option<f64>,
}

#[derive(Args, Debug)]
pub struct MovementArgs {
    pub account: i64,
    pub amount: f64,
    #[arg(short, long)]
    pub description: String,
}

fn parse_status(value: &str) -> Result<AccountStatus, String> {
    AccountStatus::parse(value).ok_or_else(|| format!("unknown account status `{value}`"))
}

fn parse_kind(value: &str) -> Result<AccountKind, String> {
    AccountKind::from_label(value).ok_or_else(|| format!("unknown account type `{value}`"))
}
