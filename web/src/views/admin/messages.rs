use dioxus::prelude::*;

use api::services::contact;
use ui::components::{Button, ButtonVariant, ConfirmDialog, ErrorAlert, LoadingSpinner};
use ui::use_query;

#[component]
pub fn AdminMessages() -> Element {
    let mut query = use_query(contact::list);
    let mut stats = use_query(contact::stats);
    let mut error = use_signal(|| None::<String>);
    let mut confirm_delete = use_signal(|| None::<(String, String)>);
    // Message expanded to full text.
    let mut open = use_signal(|| None::<String>);

    let mut mark_read = move |id: String| {
        spawn(async move {
            match contact::mark_read(&id).await {
                Ok(_) => {
                    query.refetch();
                    stats.refetch();
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let mut delete_message = move |id: String| {
        spawn(async move {
            match contact::delete(&id).await {
                Ok(()) => {
                    query.refetch();
                    stats.refetch();
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    rsx! {
        div {
            class: "page-heading",
            h1 { "Messages" }
            if let Some(s) = stats.data() {
                span { class: "empty-note", "{s.unread} unread of {s.total}" }
            }
        }

        if let Some(message) = error() {
            ErrorAlert { message, onclose: move |_| error.set(None) }
        }

        if query.loading() {
            LoadingSpinner {}
        } else if let Some(e) = query.error() {
            ErrorAlert { message: e.user_message() }
        } else if let Some(messages) = query.data() {
            if messages.is_empty() {
                p { class: "empty-note", "No messages." }
            } else {
                div {
                    class: "message-list",
                    for message in messages {
                        {
                            let id = message.id.clone();
                            let id_for_read = message.id.clone();
                            let confirm_target = (message.id.clone(), message.subject.clone());
                            let expanded = open() == Some(message.id.clone());
                            rsx! {
                                article {
                                    key: "{message.id}",
                                    class: if message.read { "message-card" } else { "message-card unread" },
                                    header {
                                        class: "message-head",
                                        onclick: move |_| {
                                            open.set(if expanded { None } else { Some(id.clone()) });
                                        },
                                        span { class: "message-subject", "{message.subject}" }
                                        span {
                                            class: "message-meta",
                                            "{message.name} <{message.email}"
                                            "> · {message.created_at}"
                                        }
                                    }
                                    if expanded {
                                        p { class: "message-body", "{message.message}" }
                                        div {
                                            class: "row-actions",
                                            if !message.read {
                                                Button {
                                                    variant: ButtonVariant::Outline,
                                                    onclick: move |_| mark_read(id_for_read.clone()),
                                                    "Mark as read"
                                                }
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

        if let Some((id, subject)) = confirm_delete() {
            ConfirmDialog {
                title: "Delete message",
                message: "Delete \u{201c}{subject}\u{201d}?",
                on_confirm: move |_| {
                    confirm_delete.set(None);
                    delete_message(id.clone());
                },
                on_cancel: move |_| confirm_delete.set(None),
            }
        }
    }
}
