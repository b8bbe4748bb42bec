use dioxus::prelude::*;

use api::services::tags;
use ui::components::{Button, ButtonVariant, ConfirmDialog, ErrorAlert, LoadingSpinner};
use ui::use_query;

#[component]
pub fn AdminTags() -> Element {
    let mut query = use_query(tags::list);
    let mut new_name = use_signal(String::new);
    // (id, draft name) of the row being renamed.
    let mut renaming = use_signal(|| None::<(String, String)>);
    let mut error = use_signal(|| None::<String>);
    let mut confirm_delete = use_signal(|| None::<(String, String)>);

    let mut create = move |_| {
        let name = new_name().trim().to_string();
        if name.is_empty() {
            return;
        }
        spawn(async move {
            match tags::create(&name).await {
                Ok(_) => {
                    new_name.set(String::new());
                    query.refetch();
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let mut save_rename = move |_| {
        let Some((id, name)) = renaming() else {
            return;
        };
        let name = name.trim().to_string();
        if name.is_empty() {
            return;
        }
        spawn(async move {
            match tags::update(&id, &name).await {
                Ok(_) => {
                    renaming.set(None);
                    query.refetch();
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let mut delete_tag = move |id: String| {
        spawn(async move {
            match tags::delete(&id).await {
                Ok(()) => query.refetch(),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    rsx! {
        h1 { "Tags" }

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
                placeholder: "New tag name",
                value: "{new_name()}",
                oninput: move |evt| new_name.set(evt.value()),
            }
            Button { r#type: "submit", "Add tag" }
        }

        if query.loading() {
            LoadingSpinner {}
        } else if let Some(tags_list) = query.data() {
            if tags_list.is_empty() {
                p { class: "empty-note", "No tags yet." }
            } else {
                table {
                    class: "admin-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Posts" }
                            th { "" }
                        }
                    }
                    tbody {
                        for tag in tags_list {
                            {
                                let rename_seed = (tag.id.clone(), tag.name.clone());
                                let confirm_target = (tag.id.clone(), tag.name.clone());
                                let being_renamed =
                                    renaming().map(|(id, _)| id) == Some(tag.id.clone());
                                rsx! {
                                    tr {
                                        key: "{tag.id}",
                                        td {
                                            if being_renamed {
                                                input {
                                                    class: "field-input",
                                                    value: renaming().map(|(_, name)| name).unwrap_or_default(),
                                                    oninput: move |evt| {
                                                        if let Some((id, _)) = renaming() {
                                                            renaming.set(Some((id, evt.value())));
                                                        }
                                                    },
                                                }
                                            } else {
                                                span { "{tag.name}" }
                                            }
                                        }
                                        td { "{tag.post_ids.len()}" }
                                        td {
                                            class: "row-actions",
                                            if being_renamed {
                                                Button {
                                                    variant: ButtonVariant::Primary,
                                                    onclick: move |_| save_rename(()),
                                                    "Save"
                                                }
                                                Button {
                                                    variant: ButtonVariant::Ghost,
                                                    onclick: move |_| renaming.set(None),
                                                    "Cancel"
                                                }
                                            } else {
                                                Button {
                                                    variant: ButtonVariant::Ghost,
                                                    onclick: move |_| renaming.set(Some(rename_seed.clone())),
                                                    "Rename"
                                                }
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
        }

        if let Some((id, name)) = confirm_delete() {
            ConfirmDialog {
                title: "Delete tag",
                message: "Delete \u{201c}{name}\u{201d}? It will be removed from every post.",
                on_confirm: move |_| {
                    confirm_delete.set(None);
                    delete_tag(id.clone());
                },
                on_cancel: move |_| confirm_delete.set(None),
            }
        }
    }
}
