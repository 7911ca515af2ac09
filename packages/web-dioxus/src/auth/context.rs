//! Session context providers for the two principal kinds.
//!
//! Admin and user sessions are independent: each has its own provider,
//! signals, and server-side storage keys, and the two may coexist in one
//! browser context.

use dioxus::prelude::*;

use portal_client::{AdminProfile, AuthUser};

use super::server_fns::{admin_logout, current_admin, current_user, user_logout};

/// User session state provided to the entire app.
#[derive(Clone, Copy)]
pub struct UserAuth {
    /// Current authenticated user (if any)
    pub user: Signal<Option<AuthUser>>,
    /// Whether session restore is still in flight
    pub loading: Signal<bool>,
}

impl UserAuth {
    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    /// Refresh the session state from the server-side store.
    pub async fn refresh(mut self) {
        match current_user().await {
            Ok(user) => self.user.set(user),
            Err(_) => self.user.set(None),
        }
        self.loading.set(false);
    }

    /// Logout: remote best-effort, then clear local state.
    pub async fn logout(mut self) {
        if let Err(err) = user_logout().await {
            tracing::warn!(error = %err, "user logout failed");
        }
        self.user.set(None);
    }
}

/// Admin session state provided to the entire app.
#[derive(Clone, Copy)]
pub struct AdminAuth {
    pub admin: Signal<Option<AdminProfile>>,
    pub loading: Signal<bool>,
}

impl AdminAuth {
    pub fn is_authenticated(&self) -> bool {
        self.admin.read().is_some()
    }

    pub async fn refresh(mut self) {
        match current_admin().await {
            Ok(admin) => self.admin.set(admin),
            Err(_) => self.admin.set(None),
        }
        self.loading.set(false);
    }

    pub async fn logout(mut self) {
        if let Err(err) = admin_logout().await {
            tracing::warn!(error = %err, "admin logout failed");
        }
        self.admin.set(None);
    }
}

/// User auth provider component that wraps the app
#[component]
pub fn UserAuthProvider(children: Element) -> Element {
    let user = use_signal(|| None::<AuthUser>);
    let loading = use_signal(|| true);

    let auth = UserAuth { user, loading };
    use_context_provider(|| auth);

    // Restore the persisted session on startup
    use_effect(move || {
        spawn(async move {
            auth.refresh().await;
        });
    });

    children
}

/// Admin auth provider component that wraps the app
#[component]
pub fn AdminAuthProvider(children: Element) -> Element {
    let admin = use_signal(|| None::<AdminProfile>);
    let loading = use_signal(|| true);

    let auth = AdminAuth { admin, loading };
    use_context_provider(|| auth);

    use_effect(move || {
        spawn(async move {
            auth.refresh().await;
        });
    });

    children
}

/// Hook to access the user session context
pub fn use_user_auth() -> UserAuth {
    use_context::<UserAuth>()
}

/// Hook to access the admin session context
pub fn use_admin_auth() -> AdminAuth {
    use_context::<AdminAuth>()
}
