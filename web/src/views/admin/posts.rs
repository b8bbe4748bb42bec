use dioxus::prelude::*;

use api::services::posts::{self, PostFilters};
use ui::components::{Button, ButtonVariant, ConfirmDialog, ErrorAlert, LoadingSpinner};
use ui::use_query;

#[component]
pub fn AdminPosts() -> Element {
    let mut query = use_query(|| posts::list(PostFilters::default()));
    let mut action_error = use_signal(|| None::<String>);
    let mut confirm_delete = use_signal(|| None::<(String, String)>);

    let mut toggle_published = move |id: String, published: bool| {
        spawn(async move {
            let result = if published {
                posts::unpublish(&id).await
            } else {
                posts::publish(&id).await
            };
            match result {
                Ok(_) => query.refetch(),
                Err(e) => action_error.set(Some(e.user_message())),
            }
        });
    };

    let mut delete_post = move |id: String| {
        spawn(async move {
            match posts::delete(&id).await {
                Ok(()) => query.refetch(),
                Err(e) => action_error.set(Some(e.user_message())),
            }
        });
    };

    rsx! {
        div {
            class: "page-heading",
            h1 { "Blog posts" }
            Link { class: "btn btn-primary", to: "/admin/posts/new", "New post" }
        }

        if let Some(message) = action_error() {
            ErrorAlert { message, onclose: move |_| action_error.set(None) }
        }

        if query.loading() {
            LoadingSpinner {}
        } else if let Some(e) = query.error() {
            ErrorAlert { message: e.user_message() }
        } else if let Some(posts) = query.data() {
            if posts.is_empty() {
                p { class: "empty-note", "Nothing written yet." }
            } else {
                table {
                    class: "admin-table",
                    thead {
                        tr {
                            th { "Title" }
                            th { "Tags" }
                            th { "Status" }
                            th { "Updated" }
                            th { "" }
                        }
                    }
                    tbody {
                        for post in posts {
                            {
                                let id_for_toggle = post.id.clone();
                                let published = post.published;
                                let confirm_target = (post.id.clone(), post.title.clone());
                                rsx! {
                                    tr {
                                        key: "{post.id}",
                                        td {
                                            Link { to: "/blog/{post.slug}", "{post.title}" }
                                        }
                                        td {
                                            div {
                                                class: "tech-chip-row",
                                                for tag in &post.tags {
                                                    span { key: "{tag.id}", class: "tech-chip", "{tag.name}" }
                                                }
                                            }
                                        }
                                        td {
                                            span {
                                                class: if published { "status-badge status-published" } else { "status-badge status-draft" },
                                                if published { "Published" } else { "Draft" }
                                            }
                                        }
                                        td { "{post.updated_at}" }
                                        td {
                                            class: "row-actions",
                                            Button {
                                                variant: ButtonVariant::Ghost,
                                                onclick: move |_| toggle_published(id_for_toggle.clone(), published),
                                                if published { "Unpublish" } else { "Publish" }
                                            }
                                            Link {
                                                class: "btn btn-ghost",
                                                to: "/admin/posts/{post.id}/edit",
                                                "Edit"
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

        if let Some((id, title)) = confirm_delete() {
            ConfirmDialog {
                title: "Delete post",
                message: "Delete \u{201c}{title}\u{201d}? This cannot be undone.",
                on_confirm: move |_| {
                    confirm_delete.set(None);
                    delete_post(id.clone());
                },
                on_cancel: move |_| confirm_delete.set(None),
            }
        }
    }
}
