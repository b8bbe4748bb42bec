use dioxus::prelude::*;

use api::services::search;
use ui::components::{ErrorAlert, LoadingSpinner};

/// Full results page behind the widget's "View all results" action.
/// Unlike the dropdown, nothing is capped here.
#[component]
pub fn SearchPage(q: String) -> Element {
    let query = q.clone();
    let results = use_resource(use_reactive!(|(q,)| async move {
        search::global(&q).await
    }));

    rsx! {
        section {
            class: "search-page",
            h1 { "Results for \u{201c}{query}\u{201d}" }

            match &*results.read() {
                None => rsx! { LoadingSpinner { label: "Searching..." } },
                Some(Err(e)) => rsx! { ErrorAlert { message: e.user_message() } },
                Some(Ok(results)) if results.total() == 0 => rsx! {
                    p { class: "empty-note", "No results for \u{201c}{query}\u{201d}." }
                },
                Some(Ok(results)) => rsx! {
                    if !results.projects.is_empty() {
                        section {
                            class: "search-page-section",
                            h2 { "Projects" }
                            for project in &results.projects {
                                div {
                                    key: "{project.id}",
                                    class: "search-page-hit",
                                    Link { to: "/projects/{project.id}", "{project.title}" }
                                    p { class: "search-page-sub", "{project.description}" }
                                }
                            }
                        }
                    }
                    if !results.profiles.is_empty() {
                        section {
                            class: "search-page-section",
                            h2 { "People" }
                            for profile in &results.profiles {
                                div {
                                    key: "{profile.id}",
                                    class: "search-page-hit",
                                    Link {
                                        to: "/{profile.user.username}",
                                        "{profile.user.display_name()}"
                                    }
                                    p { class: "search-page-sub", "@{profile.user.username}" }
                                }
                            }
                        }
                    }
                    if !results.posts.is_empty() {
                        section {
                            class: "search-page-section",
                            h2 { "Blog posts" }
                            for post in &results.posts {
                                div {
                                    key: "{post.id}",
                                    class: "search-page-hit",
                                    Link { to: "/blog/{post.slug}", "{post.title}" }
                                    if let Some(excerpt) = &post.excerpt {
                                        p { class: "search-page-sub", "{excerpt}" }
                                    }
                                }
                            }
                        }
                    }
                    if !results.technologies.is_empty() {
                        section {
                            class: "search-page-section",
                            h2 { "Technologies" }
                            div {
                                class: "tech-chip-row",
                                for tech in &results.technologies {
                                    Link {
                                        key: "{tech.id}",
                                        class: "tech-chip",
                                        to: "/projects?technology={tech.id}",
                                        "{tech.name}"
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
