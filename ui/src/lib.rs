//! Shared UI for the Folio workspace: the global search widget, auth
//! context, form primitives, and the pure list/pagination logic the admin
//! screens sit on.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::*;
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod auth;
pub use auth::{set_authenticated, use_auth, AuthProvider, AuthState, LogoutButton};

pub mod search;
pub use search::GlobalSearch;

pub mod listing;
pub mod validation;

mod query;
pub use query::{use_query, use_query_with, Query, QueryOptions, QueryState};

pub mod hotkeys;

mod navbar;
pub use navbar::Navbar;

mod admin_sidebar;
pub use admin_sidebar::AdminSidebar;

mod time;
pub use time::sleep_ms;
