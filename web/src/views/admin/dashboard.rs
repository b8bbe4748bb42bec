use dioxus::prelude::*;

use api::services::posts::{self, PostFilters};
use api::services::{contact, projects};
use ui::components::LoadingSpinner;
use ui::use_query;

#[component]
pub fn AdminDashboard() -> Element {
    let projects = use_query(|| projects::list(None));
    let posts = use_query(|| posts::list(PostFilters::default()));
    let message_stats = use_query(contact::stats);
    let unread = use_query(contact::unread);

    rsx! {
        h1 { "Dashboard" }

        div {
            class: "stat-grid",
            div {
                class: "stat-card",
                span { class: "stat-value",
                    {projects.data().map(|p| p.len().to_string()).unwrap_or_else(|| "\u{2013}".into())}
                }
                Link { to: "/admin/projects", "Projects" }
            }
            div {
                class: "stat-card",
                span { class: "stat-value",
                    {posts.data().map(|p| p.len().to_string()).unwrap_or_else(|| "\u{2013}".into())}
                }
                Link { to: "/admin/posts", "Posts" }
            }
            div {
                class: "stat-card",
                span { class: "stat-value",
                    {message_stats.data().map(|s| s.unread.to_string()).unwrap_or_else(|| "\u{2013}".into())}
                }
                Link { to: "/admin/messages", "Unread messages" }
            }
        }

        section {
            class: "home-section",
            h2 { "Latest unread" }
            if unread.loading() {
                LoadingSpinner {}
            } else if let Some(messages) = unread.data() {
                if messages.is_empty() {
                    p { class: "empty-note", "Inbox zero." }
                } else {
                    div {
                        class: "post-list",
                        for message in messages.iter().take(5) {
                            div {
                                key: "{message.id}",
                                class: "post-card",
                                span { class: "post-card-title", "{message.subject}" }
                                span { class: "post-card-date",
                                    "{message.name} \u{00b7} {message.created_at}"
                                }
                            }
                        }
                    }
                }
            }
        }

        div {
            class: "hero-actions",
            Link { class: "btn btn-primary", to: "/admin/projects/new", "New project" }
            Link { class: "btn btn-outline", to: "/admin/posts/new", "New post" }
        }
    }
}
