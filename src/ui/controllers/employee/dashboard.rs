use std::sync::Arc;

use futures::future::join;

use crate::domain::models::operation::Operation;
use crate::ui::Context;
use crate::ui::controllers::admin::dashboard::{KindBreakdown, RECENT_OPERATIONS};
use crate::ui::controllers::{load, newest_first};

pub struct EmployeeDashboardController {
    context: Arc<Context>,
    loading: bool,
    pub clients: usize,
    pub accounts: usize,
    pub kinds: KindBreakdown,
    /// Operations of the first account, newest first.
    pub recent_operations: Vec<Operation>,
    pub operation_count: usize,
}

impl EmployeeDashboardController {
    pub fn new(context: Arc<Context>) -> Self {
        Self {
            context,
            loading: false,
            clients: 0,
            accounts: 0,
            kinds: KindBreakdown::default(),
            recent_operations: Vec::new(),
            operation_count: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub async fn load(&mut self) {
        self.loading = true;

        let context = self.context.clone();
        let (clients, accounts) = join(
            load(&context, "clients", context.clients.list()),
            load(&context, "accounts", context.accounts.list()),
        )
        .await;

        let accounts = accounts.unwrap_or_default();

        self.clients = clients.map(|clients| clients.len()).unwrap_or_default();
        self.accounts = accounts.len();
        self.kinds = KindBreakdown::of(&accounts);

        let operations = match accounts.first() {
            Some(first) => load(&context, "recent operations", context.operations.list_by_account(first.id))
                .await
                .map(newest_first)
                .unwrap_or_default(),
            None => Vec::new(),
        };

        self.operation_count = operations.len();
        self.recent_operations = operations.into_iter().take(RECENT_OPERATIONS).collect();

        self.loading = false;
    }
}
