use dioxus::prelude::*;

use api::services::posts::{self, PostFilters};
use api::services::projects;
use ui::components::LoadingSpinner;
use ui::use_query;

use super::projects::ProjectCard;

#[component]
pub fn Home() -> Element {
    let featured = use_query(|| projects::list(Some(true)));
    let recent_posts = use_query(|| {
        posts::list(PostFilters {
            published: Some(true),
            ..Default::default()
        })
    });

    rsx! {
        section {
            class: "hero",
            h1 { "Build, ship, show." }
            p {
                class: "hero-sub",
                "Projects, write-ups, and the people behind them. "
                "Press / to search everything."
            }
            div {
                class: "hero-actions",
                Link { class: "btn btn-primary", to: "/projects", "Browse projects" }
                Link { class: "btn btn-outline", to: "/register", "Create your portfolio" }
            }
        }

        section {
            class: "home-section",
            h2 { "Featured projects" }
            if featured.loading() {
                LoadingSpinner {}
            } else if let Some(projects) = featured.data() {
                if projects.is_empty() {
                    p { class: "empty-note", "Nothing featured yet." }
                } else {
                    div {
                        class: "project-grid",
                        for project in projects {
                            ProjectCard { key: "{project.id}", project: project.clone() }
                        }
                    }
                }
            }
        }

        section {
            class: "home-section",
            h2 { "From the blog" }
            if let Some(posts) = recent_posts.data() {
                div {
                    class: "post-list",
                    for post in posts.iter().take(5) {
                        article {
                            key: "{post.id}",
                            class: "post-card",
                            Link {
                                class: "post-card-title",
                                to: "/blog/{post.slug}",
                                "{post.title}"
                            }
                            if let Some(excerpt) = &post.excerpt {
                                p { class: "post-card-excerpt", "{excerpt}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
