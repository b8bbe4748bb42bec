use dioxus::prelude::*;

use api::models::Role;
use api::services::users;
use ui::components::{Button, ButtonVariant, ErrorAlert, LoadingSpinner};
use ui::{use_auth, use_query};

#[component]
pub fn AdminUsers() -> Element {
    let auth = use_auth();
    let mut query = use_query(users::list);
    let mut error = use_signal(|| None::<String>);

    let my_id = auth().user.map(|u| u.id).unwrap_or_default();
    let my_id = use_signal(|| my_id);

    let mut toggle_active = move |id: String, active: bool| {
        spawn(async move {
            let result = if active {
                users::deactivate(&id).await
            } else {
                users::activate(&id).await
            };
            match result {
                Ok(_) => query.refetch(),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let mut toggle_role = move |id: String, role: Role| {
        let next = match role {
            Role::Admin => Role::User,
            Role::User => Role::Admin,
        };
        spawn(async move {
            match users::set_role(&id, next).await {
                Ok(_) => query.refetch(),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    rsx! {
        h1 { "Users" }

        if let Some(message) = error() {
            ErrorAlert { message, onclose: move |_| error.set(None) }
        }

        if query.loading() {
            LoadingSpinner {}
        } else if let Some(e) = query.error() {
            ErrorAlert { message: e.user_message() }
        } else if let Some(users_list) = query.data() {
            table {
                class: "admin-table",
                thead {
                    tr {
                        th { "User" }
                        th { "Email" }
                        th { "Role" }
                        th { "Status" }
                        th { "" }
                    }
                }
                tbody {
                    for user in users_list {
                        {
                            // Locking yourself out is a support ticket, not a feature.
                            let is_me = user.id == my_id();
                            let id_for_active = user.id.clone();
                            let id_for_role = user.id.clone();
                            let role = user.role;
                            let active = user.is_active;
                            rsx! {
                                tr {
                                    key: "{user.id}",
                                    td {
                                        Link { to: "/{user.username}", "{user.display_name()}" }
                                    }
                                    td { "{user.email}" }
                                    td {
                                        span {
                                            class: if user.is_admin() { "status-badge status-published" } else { "status-badge" },
                                            if user.is_admin() { "Admin" } else { "User" }
                                        }
                                    }
                                    td {
                                        span {
                                            class: if active { "status-badge status-published" } else { "status-badge status-archived" },
                                            if active { "Active" } else { "Deactivated" }
                                        }
                                    }
                                    td {
                                        class: "row-actions",
                                        if !is_me {
                                            Button {
                                                variant: ButtonVariant::Ghost,
                                                onclick: move |_| toggle_role(id_for_role.clone(), role),
                                                if role == Role::Admin { "Make user" } else { "Make admin" }
                                            }
                                            Button {
                                                variant: ButtonVariant::Ghost,
                                                class: if active { "danger-text" } else { "" },
                                                onclick: move |_| toggle_active(id_for_active.clone(), active),
                                                if active { "Deactivate" } else { "Activate" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
