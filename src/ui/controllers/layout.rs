use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::models::session::{Session, SubscriptionId};
use crate::ui::Context;
use crate::ui::dialog::Notice;
use crate::ui::router::Route;

/// Header and sidebar shared by both areas. The displayed user follows the
/// session until the layout is dropped.
pub struct LayoutController {
    context: Arc<Context>,
    current_user: Arc<Mutex<Option<Session>>>,
    subscription: SubscriptionId,
    sidebar_collapsed: bool,
}

impl LayoutController {
    pub fn new(context: Arc<Context>) -> Self {
        let current_user = Arc::new(Mutex::new(None));

        let sink = current_user.clone();
        let subscription = context.auth.subscribe(Arc::new(move |session: Option<&Session>| {
            *sink.lock().unwrap_or_else(PoisonError::into_inner) = session.cloned();
        }));

        Self {
            context,
            current_user,
            subscription,
            sidebar_collapsed: false,
        }
    }

    pub fn current_user(&self) -> Option<Session> {
        self.current_user
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    /// `None` when the user backs out of the confirmation.
    pub fn logout(&mut self) -> Option<Route> {
        if !self.context.dialog.confirm("Do you really want to sign out?") {
            return None;
        }

        if let Err(error) = self.context.auth.logout() {
            self.context
                .dialog
                .alert(Notice::error(format!("Signed out, but the stored session could not be removed: {error}")));
        }

        Some(Route::Login)
    }
}

impl Drop for LayoutController {
    fn drop(&mut self) {
        self.context.auth.unsubscribe(self.subscription);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::session::{Credentials, Role};
    use crate::ui::mock::Fixture;

    async fn sign_in(fixture: &Fixture) {
        fixture
            .context
            .auth
            .login(Credentials {
                username: "employe".to_string(),
                password: "employe123".to_string(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_follows_session() {
        let fixture = Fixture::accepting();
        let layout = LayoutController::new(fixture.context.clone());
        assert_eq!(layout.current_user(), None);

        sign_in(&fixture).await;

        assert_eq!(layout.current_user().map(|user| user.role), Some(Role::Employee));
    }

    #[tokio::test]
    async fn test_logout_after_confirmation() {
        let fixture = Fixture::accepting();
        sign_in(&fixture).await;
        let mut layout = LayoutController::new(fixture.context.clone());

        assert_eq!(layout.logout(), Some(Route::Login));
        assert_eq!(layout.current_user(), None);
        assert!(!fixture.context.auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_declined_logout_keeps_session() {
        let fixture = Fixture::declining();
        sign_in(&fixture).await;
        let mut layout = LayoutController::new(fixture.context.clone());

        assert_eq!(layout.logout(), None);
        assert!(fixture.context.auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_dropped_layout_unsubscribes() {
        let fixture = Fixture::accepting();
        let layout = LayoutController::new(fixture.context.clone());
        let subscription = layout.subscription;

        drop(layout);

        assert!(!fixture.context.auth.unsubscribe(subscription));
    }

    #[test]
    fn test_sidebar_toggle() {
        let fixture = Fixture::accepting();
        let mut layout = LayoutController::new(fixture.context.clone());

        layout.toggle_sidebar();
        assert!(layout.is_sidebar_collapsed());
        layout.toggle_sidebar();
        assert!(!layout.is_sidebar_collapsed());
    }
}
