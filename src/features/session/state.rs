//! Session state and context for the frontend. The provider restores the
//! persisted session once on mount and exposes derived signals for the
//! navigation chrome and the screens. The triple is always set and cleared
//! as a whole; a partially populated session never exists.

use crate::features::session::storage;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Role granted privileged UI (the role-selection field on registration).
pub const ROLE_ADMIN: &str = "admin";
/// Default, non-privileged role assigned to new registrations.
pub const ROLE_CUSTOMER: &str = "customer";

/// The authenticated principal. Absence of a value means anonymous.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub email: String,
    pub role: String,
    pub token: String,
}

#[derive(Clone, Copy)]
/// Session context shared through Leptos.
pub struct SessionContext {
    pub session: RwSignal<Option<UserSession>>,
    pub is_authenticated: Signal<bool>,
    pub is_admin: Signal<bool>,
}

impl SessionContext {
    /// Builds a context around the provided session signal.
    fn new(session: RwSignal<Option<UserSession>>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        let is_admin = Signal::derive(move || {
            session
                .get()
                .is_some_and(|current| current.role == ROLE_ADMIN)
        });
        Self {
            session,
            is_authenticated,
            is_admin,
        }
    }

    /// Overwrites the whole triple after a successful login, then mirrors it
    /// to durable storage as a separate, best-effort step.
    pub fn set_user(&self, email: String, role: String, token: String) {
        let session = UserSession { email, role, token };
        self.session.set(Some(session.clone()));
        storage::save(&session);
    }

    /// Clears the triple on logout and mirrors the cleared state to storage.
    pub fn clear_user(&self) {
        self.session.set(None);
        storage::clear();
    }
}

/// Provides the session context, restoring any persisted session on mount.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(storage::load());
    let context = SessionContext::new(session);
    provide_context(context);

    view! { {children()} }
}

/// Returns the current session context or a fallback anonymous context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| SessionContext::new(RwSignal::new(None)))
}

#[cfg(test)]
mod tests {
    use super::{ROLE_ADMIN, SessionContext, UserSession};
    use leptos::prelude::*;

    fn anonymous() -> SessionContext {
        SessionContext::new(RwSignal::new(None))
    }

    #[test]
    fn set_user_populates_the_whole_triple() {
        let context = anonymous();

        context.set_user(
            "a@b.com".to_string(),
            ROLE_ADMIN.to_string(),
            "T".to_string(),
        );

        assert_eq!(
            context.session.get_untracked(),
            Some(UserSession {
                email: "a@b.com".to_string(),
                role: "admin".to_string(),
                token: "T".to_string(),
            })
        );
        assert!(context.is_authenticated.get_untracked());
        assert!(context.is_admin.get_untracked());
    }

    #[test]
    fn clear_user_resets_to_anonymous() {
        let context = anonymous();
        context.set_user(
            "a@b.com".to_string(),
            "customer".to_string(),
            "T".to_string(),
        );

        context.clear_user();

        assert_eq!(context.session.get_untracked(), None);
        assert!(!context.is_authenticated.get_untracked());
        assert!(!context.is_admin.get_untracked());
    }

    #[test]
    fn non_admin_roles_are_not_privileged() {
        let context = anonymous();
        context.set_user(
            "a@b.com".to_string(),
            "customer".to_string(),
            "T".to_string(),
        );

        assert!(context.is_authenticated.get_untracked());
        assert!(!context.is_admin.get_untracked());
    }
}
