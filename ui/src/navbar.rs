use dioxus::prelude::*;

use crate::search::GlobalSearch;
use crate::{use_auth, LogoutButton};

/// Public header: brand, global search, session links.
///
/// `username` is forwarded to the search widget so blog links stay inside
/// the portfolio being viewed.
#[component]
pub fn Navbar(#[props(default)] username: Option<String>) -> Element {
    let auth = use_auth();
    let state = auth();

    rsx! {
        header {
            class: "navbar",
            Link { class: "navbar-brand", to: "/", "Folio" }

            div {
                class: "navbar-search",
                GlobalSearch { username: username }
            }

            nav {
                class: "navbar-links",
                Link { class: "navbar-link", to: "/projects", "Projects" }
                Link { class: "navbar-link", to: "/blog", "Blog" }
                if let Some(user) = state.user {
                    if user.is_admin() {
                        Link { class: "navbar-link", to: "/admin", "Admin" }
                    }
                    Link { class: "navbar-link", to: "/{user.username}", "{user.display_name()}" }
                    LogoutButton {}
                } else {
                    Link { class: "navbar-link", to: "/login", "Sign in" }
                    Link { class: "navbar-link navbar-cta", to: "/register", "Sign up" }
                }
            }
        }
    }
}
