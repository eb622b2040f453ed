use std::io::{self, Write};

use crate::domain::models::account::BankAccount;
use crate::domain::models::client::Client;
use crate::domain::models::operation::Operation;
use crate::domain::models::session::Session;
use crate::ui::controllers::admin::dashboard::AdminDashboardController;
use crate::ui::controllers::employee::dashboard::EmployeeDashboardController;

pub fn session(out: &mut impl Write, session: Option<&Session>) -> io::Result<()> {
    match session {
        Some(session) => writeln!(out, "{} ({})", session.username, session.role),
        None => writeln!(out, "Not signed in"),
    }
}

pub fn clients(out: &mut impl Write, clients: &[Client]) -> io::Result<()> {
    if clients.is_empty() {
        return writeln!(out, "No clients");
    }

    writeln!(out, "{:>6}  {:<28}  {}", "ID", "NAME", "EMAIL")?;
    for client in clients {
        writeln!(out, "{:>6}  {:<28}  {}", client.id, client.name, client.email)?;
    }

    Ok(())
}

pub fn client(out: &mut impl Write, client: &Client, accounts: &[BankAccount]) -> io::Result<()> {
    writeln!(out, "Client #{}", client.id)?;
    writeln!(out, "  Name:  {}", client.name)?;
    writeln!(out, "  Email: {}", client.email)?;
    writeln!(out)?;

    self::accounts(out, accounts)
}

pub fn accounts(out: &mut impl Write, accounts: &[BankAccount]) -> io::Result<()> {
    if accounts.is_empty() {
        return writeln!(out, "No accounts");
    }

    writeln!(
        out,
        "{:>6}  {:<15}  {:<10}  {:>14}  {:<4}  {}",
        "ID", "TYPE", "STATUS", "BALANCE", "CUR", "CLIENT"
    )?;
    for account in accounts {
        writeln!(
            out,
            "{:>6}  {:<15}  {:<10}  {:>14.2}  {:<4}  {}",
            account.id,
            account.account_type,
            account.status.as_str(),
            account.balance,
            account.currency,
            account.client_name
        )?;
    }

    Ok(())
}

pub fn operations(out: &mut impl Write, operations: &[Operation]) -> io::Result<()> {
    if operations.is_empty() {
        return writeln!(out, "No operations");
    }

    writeln!(
        out,
        "{:>6}  {:<16}  {:<6}  {:>12}  {}",
        "ID", "DATE", "TYPE", "AMOUNT", "DESCRIPTION"
    )?;
    for operation in operations {
        writeln!(
            out,
            "{:>6}  {:<16}  {:<6}  {:>12.2}  {}",
            operation.id,
            operation.date.format("%Y-%m-%d %H:%M"),
            operation.kind.as_str(),
            operation.amount,
            operation.description
        )?;
    }

    Ok(())
}

pub fn admin_dashboard(out: &mut impl Write, dashboard: &AdminDashboardController) -> io::Result<()> {
    let stats = &dashboard.stats;

    writeln!(out, "Clients:         {}", stats.clients)?;
    writeln!(out, "Accounts:        {}", stats.accounts)?;
    writeln!(out, "Active accounts: {}", stats.active_accounts)?;
    writeln!(out, "Total balance:   {:.2}", stats.total_balance)?;
    writeln!(
        out,
        "By status:       created {}, activated {}, suspended {}",
        dashboard.statuses.created, dashboard.statuses.activated, dashboard.statuses.suspended
    )?;
    writeln!(
        out,
        "By type:         current {}, savings {}",
        dashboard.kinds.current, dashboard.kinds.savings
    )?;
    writeln!(out)?;

    operations(out, &dashboard.recent_operations)
}

pub fn employee_dashboard(
    out: &mut impl Write,
    dashboard: &EmployeeDashboardController,
) -> io::Result<()> {
    writeln!(out, "Clients:    {}", dashboard.clients)?;
    writeln!(out, "Accounts:   {}", dashboard.accounts)?;
    writeln!(
        out,
        "By type:    current {}, savings {}",
        dashboard.kinds.current, dashboard.kinds.savings
    )?;
    writeln!(out, "Operations: {}", dashboard.operation_count)?;
    writeln!(out)?;

    operations(out, &dashboard.recent_operations)
}
