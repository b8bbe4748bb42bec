//! Authentication context and hooks.

use api::models::User;
use api::services::auth;
use dioxus::prelude::*;

/// Authentication state for the application.
///
/// The only cross-component shared mutable state in the app. Written by
/// login/logout/refresh flows only; everyone else reads.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    pub fn authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(|u| u.is_admin()).unwrap_or(false)
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that owns the auth signal.
/// Fetches `/auth/me` on mount when a token is stored.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_context_provider(|| Signal::new(AuthState::default()));

    let _ = use_resource(move || async move {
        if !api::token::is_authenticated() {
            auth_state.set(AuthState {
                user: None,
                loading: false,
            });
            return;
        }
        match auth::me().await {
            Ok(user) => auth_state.set(AuthState {
                user: Some(user),
                loading: false,
            }),
            Err(e) => {
                // A dead token was already cleared by the client on 401.
                tracing::error!("failed to load current user: {e}");
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                });
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Record a fresh login in the shared auth state.
pub fn set_authenticated(mut auth: Signal<AuthState>, user: User) {
    auth.set(AuthState {
        user: Some(user),
        loading: false,
    });
}

#[component]
pub fn LogoutButton(#[props(default = "".to_string())] class: String) -> Element {
    let mut auth = use_auth();

    rsx! {
        button {
            class: "btn btn-ghost {class}",
            onclick: move |_| {
                auth.set(AuthState { user: None, loading: false });
                auth::logout();
            },
            "Sign out"
        }
    }
}
