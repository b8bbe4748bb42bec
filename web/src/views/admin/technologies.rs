use dioxus::prelude::*;

use api::services::technologies::{self, TechnologyInput};
use ui::components::{Button, ButtonVariant, ConfirmDialog, ErrorAlert, LoadingSpinner};
use ui::use_query;

/// Technology catalog with per-technology project counts. Deleting one
/// detaches it from every project, so the confirm mentions the count.
#[component]
pub fn AdminTechnologies() -> Element {
    let mut query = use_query(technologies::list_with_stats);

    let mut name = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    // (id, name, project_count)
    let mut confirm_delete = use_signal(|| None::<(String, String, u32)>);

    let mut create = move |_| {
        let name_value = name().trim().to_string();
        if name_value.is_empty() {
            return;
        }
        let category_value = category().trim().to_string();
        spawn(async move {
            let input = TechnologyInput {
                name: Some(name_value),
                category: (!category_value.is_empty()).then_some(category_value),
                ..Default::default()
            };
            match technologies::create(&input).await {
                Ok(_) => {
                    name.set(String::new());
                    category.set(String::new());
                    query.refetch();
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let mut delete_technology = move |id: String| {
        spawn(async move {
            match technologies::delete(&id).await {
                Ok(()) => query.refetch(),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    rsx! {
        h1 { "Technologies" }

        if let Some(message) = error() {
            ErrorAlert { message, onclose: move |_| error.set(None) }
        }

        form {
            class: "inline-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                create(());
            },
            input {
                class: "field-input",
                placeholder: "Technology name",
                value: "{name()}",
                oninput: move |evt| name.set(evt.value()),
            }
            input {
                class: "field-input",
                placeholder: "Category (optional)",
                value: "{category()}",
                oninput: move |evt| category.set(evt.value()),
            }
            Button { r#type: "submit", "Add technology" }
        }

        if query.loading() {
            LoadingSpinner {}
        } else if let Some(e) = query.error() {
            ErrorAlert { message: e.user_message() }
        } else if let Some(technologies_list) = query.data() {
            if technologies_list.is_empty() {
                p { class: "empty-note", "Catalog is empty." }
            } else {
                table {
                    class: "admin-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Category" }
                            th { "Projects" }
                            th { "" }
                        }
                    }
                    tbody {
                        for entry in technologies_list {
                            {
                                let tech = &entry.technology;
                                let confirm_target =
                                    (tech.id.clone(), tech.name.clone(), entry.project_count);
                                rsx! {
                                    tr {
                                        key: "{tech.id}",
                                        td { "{tech.name}" }
                                        td { {tech.category.clone().unwrap_or_default()} }
                                        td {
                                            Link {
                                                to: "/projects?technology={tech.id}",
                                                "{entry.project_count}"
                                            }
                                        }
                                        td {
                                            class: "row-actions",
                                            Button {
                                                variant: ButtonVariant::Ghost,
                                                class: "danger-text",
                                                onclick: move |_| confirm_delete.set(Some(confirm_target.clone())),
                                                "Delete"
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

        if let Some((id, tech_name, count)) = confirm_delete() {
            ConfirmDialog {
                title: "Delete technology",
                message: "Delete \u{201c}{tech_name}\u{201d}? It is attached to {count} project(s).",
                on_confirm: move |_| {
                    confirm_delete.set(None);
                    delete_technology(id.clone());
                },
                on_cancel: move |_| confirm_delete.set(None),
            }
        }
    }
}
