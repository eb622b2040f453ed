use std::sync::Arc;

use crate::domain::models::session::Role;
use crate::domain::services::auth::AuthService;
use crate::ui::router::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect(Route),
}

/// Lets a navigation through only for a signed-in user holding `role`.
pub struct RoleGuard {
    role: Role,
    auth: Arc<dyn AuthService>,
}

impl RoleGuard {
    pub fn new(role: Role, auth: Arc<dyn AuthService>) -> Self {
        Self { role, auth }
    }

    pub fn check(&self, target: Route) -> GuardOutcome {
        match self.auth.role() {
            Some(role) if role == self.role => GuardOutcome::Allow,
            Some(role) => {
                tracing::warn!(target = %target, %role, required = %self.role, "role mismatch, redirecting to login");
                GuardOutcome::Redirect(Route::Login)
            }
            None => {
                tracing::warn!(target = %target, "not signed in, redirecting to login");
                GuardOutcome::Redirect(Route::Login)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::session::Session;
    use crate::domain::services::session::SessionService;
    use crate::infrastructure::repositories::auth::mock::AuthRepositoryImpl;
    use crate::infrastructure::repositories::session::SessionRepositoryImpl;
    use crate::infrastructure::repositories::storage::MemoryStore;
    use crate::services::auth::AuthServiceImpl;
    use crate::services::session::SessionStore;
    use crate::ui::router::{AdminPage, EmployeePage};
    use rstest::*;

    fn auth_with(session: Option<Session>) -> Arc<dyn AuthService> {
        let sessions = Arc::new(SessionStore::rehydrate(Arc::new(SessionRepositoryImpl::new(
            Arc::new(MemoryStore::default()),
        ))));

        if let Some(session) = session {
            sessions.establish(session).unwrap();
        }

        Arc::new(AuthServiceImpl::new(
            Arc::new(AuthRepositoryImpl::seeded()),
            sessions,
        ))
    }

    fn signed_in(role: Role) -> Option<Session> {
        Some(Session {
            token: "t".to_string(),
            username: "u".to_string(),
            role,
            client_id: None,
        })
    }

    #[rstest]
    #[case::admin_in_admin(signed_in(Role::Admin), Role::Admin, GuardOutcome::Allow)]
    #[case::employee_in_employee(signed_in(Role::Employee), Role::Employee, GuardOutcome::Allow)]
    #[case::admin_in_employee(signed_in(Role::Admin), Role::Employee, GuardOutcome::Redirect(Route::Login))]
    #[case::employee_in_admin(signed_in(Role::Employee), Role::Admin, GuardOutcome::Redirect(Route::Login))]
    #[case::anonymous(None, Role::Admin, GuardOutcome::Redirect(Route::Login))]
    fn test_check(
        #[case] session: Option<Session>,
        #[case] required: Role,
        #[case] outcome: GuardOutcome,
    ) {
        let guard = RoleGuard::new(required, auth_with(session));
        let target = match required {
            Role::Admin => Route::Admin(AdminPage::Dashboard),
            Role::Employee => Route::Employee(EmployeePage::Dashboard),
        };

        assert_eq!(guard.check(target), outcome);
    }
}
