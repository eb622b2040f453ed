use std::sync::Arc;

use futures::future::join;

use crate::domain::models::account::{AccountKind, AccountStatus, BankAccount};
use crate::domain::models::operation::Operation;
use crate::ui::Context;
use crate::ui::controllers::load;

pub const RECENT_OPERATIONS: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashboardStats {
    pub clients: usize,
    pub accounts: usize,
    pub active_accounts: usize,
    pub total_balance: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusBreakdown {
    pub created: usize,
    pub activated: usize,
    pub suspended: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindBreakdown {
    pub current: usize,
    pub savings: usize,
}

impl StatusBreakdown {
    pub fn of(accounts: &[BankAccount]) -> Self {
        let count = |status| accounts.iter().filter(|account| account.status == status).count();

        StatusBreakdown {
            created: count(AccountStatus::Created),
            activated: count(AccountStatus::Activated),
            suspended: count(AccountStatus::Suspended),
        }
    }
}

impl KindBreakdown {
    pub fn of(accounts: &[BankAccount]) -> Self {
        let count = |kind| {
            accounts
                .iter()
                .filter(|account| account.kind() == Some(kind))
                .count()
        };

        KindBreakdown {
            current: count(AccountKind::Current),
            savings: count(AccountKind::Savings),
        }
    }
}

pub struct AdminDashboardController {
    context: Arc<Context>,
    loading: bool,
    pub stats: DashboardStats,
    pub statuses: StatusBreakdown,
    pub kinds: KindBreakdown,
    pub recent_operations: Vec<Operation>,
}

impl AdminDashboardController {
    pub fn new(context: Arc<Context>) -> Self {
        Self {
            context,
            loading: false,
            stats: DashboardStats::default(),
            statuses: StatusBreakdown::default(),
            kinds: KindBreakdown::default(),
            recent_operations: Vec::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Clients and accounts load side by side, then the first operations of
    /// the first account in the order the backend lists them.
    pub async fn load(&mut self) {
        self.loading = true;

        let context = self.context.as_ref();
        let (clients, accounts) = join(
            load(context, "clients", context.clients.list()),
            load(context, "accounts", context.accounts.list()),
        )
        .await;

        let clients = clients.unwrap_or_default();
        let accounts = accounts.unwrap_or_default();

        self.stats = DashboardStats {
            clients: clients.len(),
            accounts: accounts.len(),
            active_accounts: accounts.iter().filter(|account| account.is_active()).count(),
            total_balance: accounts.iter().map(|account| account.balance).sum(),
        };
        self.statuses = StatusBreakdown::of(&accounts);
        self.kinds = KindBreakdown::of(&accounts);

        self.recent_operations = match accounts.first() {
            Some(first) => load(context, "recent operations", context.operations.list_by_account(first.id))
                .await
                .unwrap_or_default()
                .into_iter()
                .take(RECENT_OPERATIONS)
                .collect(),
            None => Vec::new(),
        };

        self.loading = false;
    }
}
