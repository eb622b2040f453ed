use std::fmt;
use std::sync::Arc;

use crate::domain::models::session::Role;
use crate::domain::services::auth::AuthService;
use crate::ui::middlewares::guard::{GuardOutcome, RoleGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminPage {
    Dashboard,
    Clients,
    Accounts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeePage {
    Dashboard,
    Clients,
    Accounts,
    Operations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Admin(AdminPage),
    Employee(EmployeePage),
}

impl Route {
    /// Unknown paths resolve to the login screen.
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            ["admin"] | ["admin", "dashboard"] => Route::Admin(AdminPage::Dashboard),
            ["admin", "clients"] => Route::Admin(AdminPage::Clients),
            ["admin", "comptes"] => Route::Admin(AdminPage::Accounts),
            ["employe"] | ["employe", "dashboard"] => Route::Employee(EmployeePage::Dashboard),
            ["employe", "gestion-clients"] => Route::Employee(EmployeePage::Clients),
            ["employe", "gestion-comptes"] => Route::Employee(EmployeePage::Accounts),
            ["employe", "gestion-operations"] => Route::Employee(EmployeePage::Operations),
            _ => Route::Login,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Admin(AdminPage::Dashboard) => "/admin/dashboard",
            Route::Admin(AdminPage::Clients) => "/admin/clients",
            Route::Admin(AdminPage::Accounts) => "/admin/comptes",
            Route::Employee(EmployeePage::Dashboard) => "/employe/dashboard",
            Route::Employee(EmployeePage::Clients) => "/employe/gestion-clients",
            Route::Employee(EmployeePage::Accounts) => "/employe/gestion-comptes",
            Route::Employee(EmployeePage::Operations) => "/employe/gestion-operations",
        }
    }

    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::Login => None,
            Route::Admin(_) => Some(Role::Admin),
            Route::Employee(_) => Some(Role::Employee),
        }
    }

    pub fn home(role: Role) -> Route {
        match role {
            Role::Admin => Route::Admin(AdminPage::Dashboard),
            Role::Employee => Route::Employee(EmployeePage::Dashboard),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

pub struct Router {
    auth: Arc<dyn AuthService>,
    admin: RoleGuard,
    employee: RoleGuard,
}

impl Router {
    pub fn new(auth: Arc<dyn AuthService>) -> Self {
        Self {
            admin: RoleGuard::new(Role::Admin, auth.clone()),
            employee: RoleGuard::new(Role::Employee, auth.clone()),
            auth,
        }
    }

    /// Resolves `path` to the route actually displayed once guards ran.
    pub fn navigate(&self, path: &str) -> Route {
        let route = Route::parse(path);

        let guard = match route.required_role() {
            Some(Role::Admin) => &self.admin,
            Some(Role::Employee) => &self.employee,
            None => return route,
        };

        match guard.check(route) {
            GuardOutcome::Allow => route,
            GuardOutcome::Redirect(target) => target,
        }
    }

    pub fn redirect_by_role(&self) -> Route {
        self.auth.role().map(Route::home).unwrap_or(Route::Login)
    }
}
