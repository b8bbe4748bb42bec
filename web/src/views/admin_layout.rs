use dioxus::prelude::*;

use ui::components::LoadingSpinner;
use ui::{use_auth, AdminSidebar};

use crate::Route;

/// Guard + chrome for `/admin/*`: anonymous visitors go to the login
/// page, signed-in non-admins go home. Nothing renders until the session
/// check has settled, so the panel never flashes for the wrong user.
#[component]
pub fn AdminLayout() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();

    use_effect(move || {
        let state = auth();
        if state.loading {
            return;
        }
        if !state.authenticated() {
            nav.replace("/login");
        } else if !state.is_admin() {
            nav.replace("/");
        }
    });

    let state = auth();
    if state.loading {
        return rsx! {
            LoadingSpinner { label: "Checking session..." }
        };
    }
    if !state.is_admin() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "admin-shell",
            AdminSidebar { current_path: route.to_string() }
            main {
                class: "admin-content",
                Outlet::<Route> {}
            }
        }
    }
}
