use dioxus::prelude::*;

use ui::Navbar;

use crate::Route;

/// Navbar + routed content + footer for everything outside the admin
/// panel. On portfolio routes the owner's username is handed to the
/// search widget so blog hits link inside that portfolio.
#[component]
pub fn PublicLayout() -> Element {
    let route = use_route::<Route>();
    let username = match &route {
        Route::Portfolio { username }
        | Route::PortfolioBlog { username }
        | Route::PortfolioBlogPost { username, .. } => Some(username.clone()),
        _ => None,
    };

    rsx! {
        Navbar { username }

        main {
            class: "page",
            Outlet::<Route> {}
        }

        footer {
            class: "site-footer",
            span { "Folio" }
        }
    }
}
