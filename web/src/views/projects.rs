use dioxus::prelude::*;

use api::models::Project;
use api::services::{projects, search};
use ui::components::{ErrorAlert, LoadingSpinner};

#[component]
pub fn ProjectCard(project: Project) -> Element {
    rsx! {
        article {
            class: "project-card",
            if let Some(thumbnail) = &project.thumbnail {
                img { class: "project-card-thumb", src: "{thumbnail}", alt: "{project.title}" }
            }
            div {
                class: "project-card-body",
                Link {
                    class: "project-card-title",
                    to: "/projects/{project.id}",
                    "{project.title}"
                }
                p { class: "project-card-desc", "{project.description}" }
                div {
                    class: "tech-chip-row",
                    for tech in &project.technologies {
                        span { key: "{tech.id}", class: "tech-chip", "{tech.name()}" }
                    }
                }
            }
        }
    }
}

/// Public project index. `?technology=` narrows the list to projects
/// using that technology.
#[component]
pub fn Projects(technology: String) -> Element {
    let filtered = !technology.is_empty();
    let list = use_resource(use_reactive!(|(technology,)| async move {
        if technology.is_empty() {
            projects::list(None).await
        } else {
            search::projects_by_technology(&technology).await
        }
    }));

    rsx! {
        section {
            class: "projects-page",
            div {
                class: "page-heading",
                h1 { "Projects" }
                if filtered {
                    Link { class: "btn btn-ghost", to: "/projects", "Clear technology filter" }
                }
            }

            match &*list.read() {
                None => rsx! { LoadingSpinner {} },
                Some(Err(e)) => rsx! { ErrorAlert { message: e.user_message() } },
                Some(Ok(projects)) if projects.is_empty() => rsx! {
                    p { class: "empty-note", "No projects here yet." }
                },
                Some(Ok(projects)) => rsx! {
                    div {
                        class: "project-grid",
                        for project in projects {
                            ProjectCard { key: "{project.id}", project: project.clone() }
                        }
                    }
                },
            }
        }
    }
}

#[component]
pub fn ProjectDetail(id: String) -> Element {
    let project = use_resource(use_reactive!(|(id,)| async move {
        projects::get(&id).await
    }));

    rsx! {
        match &*project.read() {
            None => rsx! { LoadingSpinner {} },
            Some(Err(e)) => rsx! { ErrorAlert { message: e.user_message() } },
            Some(Ok(project)) => rsx! {
                article {
                    class: "project-detail",
                    h1 { "{project.title}" }
                    if let Some(owner) = &project.user {
                        Link {
                            class: "project-owner",
                            to: "/{owner.username}",
                            "by {owner.display_name()}"
                        }
                    }
                    p { class: "project-detail-desc", "{project.description}" }

                    div {
                        class: "project-detail-links",
                        if let Some(live_url) = &project.live_url {
                            a { class: "btn btn-primary", href: "{live_url}", target: "_blank", "Live site" }
                        }
                        if let Some(github_url) = &project.github_url {
                            a { class: "btn btn-outline", href: "{github_url}", target: "_blank", "Source" }
                        }
                    }

                    div {
                        class: "tech-chip-row",
                        for tech in &project.technologies {
                            if let Some(technology) = &tech.technology {
                                Link {
                                    key: "{tech.id}",
                                    class: "tech-chip",
                                    to: "/projects?technology={technology.id}",
                                    "{technology.name}"
                                }
                            }
                        }
                    }

                    if let Some(content) = &project.content {
                        div { class: "project-detail-content", "{content}" }
                    }

                    if !project.images.is_empty() {
                        div {
                            class: "project-gallery",
                            for image in &project.images {
                                img {
                                    key: "{image.id}",
                                    src: "{image.url}",
                                    alt: image.alt.clone().unwrap_or_default(),
                                }
                            }
                        }
                    }
                }
            },
        }
    }
}
