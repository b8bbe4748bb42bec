use dioxus::prelude::*;

use api::models::Post;
use api::services::posts::{self, PostFilters};
use ui::components::{ErrorAlert, LoadingSpinner};
use ui::use_query;

fn published_date(post: &Post) -> &str {
    post.published_at.as_deref().unwrap_or(&post.created_at)
}

#[component]
fn PostListItem(post: Post, #[props(default)] base: Option<String>) -> Element {
    // Portfolio blog links stay under the owner's prefix.
    let href = match &base {
        Some(base) => format!("{base}/blog/{}", post.slug),
        None => format!("/blog/{}", post.slug),
    };

    rsx! {
        article {
            class: "post-card",
            Link { class: "post-card-title", to: "{href}", "{post.title}" }
            span { class: "post-card-date", "{published_date(&post)}" }
            if let Some(excerpt) = &post.excerpt {
                p { class: "post-card-excerpt", "{excerpt}" }
            }
            div {
                class: "tech-chip-row",
                for tag in &post.tags {
                    span { key: "{tag.id}", class: "tech-chip", "{tag.name}" }
                }
            }
        }
    }
}

#[component]
fn PostBody(post: Post) -> Element {
    rsx! {
        article {
            class: "post-detail",
            h1 { "{post.title}" }
            span { class: "post-card-date", "{published_date(&post)}" }
            div {
                class: "tech-chip-row",
                for tag in &post.tags {
                    span { key: "{tag.id}", class: "tech-chip", "{tag.name}" }
                }
            }
            div { class: "post-detail-content", "{post.content}" }
        }
    }
}

#[component]
pub fn Blog() -> Element {
    let list = use_query(|| {
        posts::list(PostFilters {
            published: Some(true),
            ..Default::default()
        })
    });

    rsx! {
        section {
            class: "blog-page",
            h1 { "Blog" }
            if list.loading() {
                LoadingSpinner {}
            } else if let Some(e) = list.error() {
                ErrorAlert { message: e.user_message() }
            } else if let Some(posts) = list.data() {
                if posts.is_empty() {
                    p { class: "empty-note", "No posts yet." }
                } else {
                    div {
                        class: "post-list",
                        for post in posts {
                            PostListItem { key: "{post.id}", post: post.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn BlogPost(slug: String) -> Element {
    let post = use_resource(use_reactive!(|(slug,)| async move {
        posts::get_by_slug(&slug).await
    }));

    rsx! {
        match &*post.read() {
            None => rsx! { LoadingSpinner {} },
            Some(Err(e)) => rsx! { ErrorAlert { message: e.user_message() } },
            Some(Ok(post)) => rsx! { PostBody { post: post.clone() } },
        }
    }
}

/// Blog index scoped under a portfolio. Same feed, portfolio-prefixed
/// links, so back/forward stays inside the portfolio.
#[component]
pub fn PortfolioBlog(username: String) -> Element {
    let list = use_query(|| {
        posts::list(PostFilters {
            published: Some(true),
            ..Default::default()
        })
    });
    let base = format!("/{username}");

    rsx! {
        section {
            class: "blog-page",
            h1 { "Blog" }
            Link { class: "navbar-link", to: "/{username}", "\u{2190} Back to portfolio" }
            if list.loading() {
                LoadingSpinner {}
            } else if let Some(posts) = list.data() {
                div {
                    class: "post-list",
                    for post in posts {
                        PostListItem {
                            key: "{post.id}",
                            post: post.clone(),
                            base: Some(base.clone()),
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PortfolioBlogPost(username: String, slug: String) -> Element {
    let post = use_resource(use_reactive!(|(slug,)| async move {
        posts::get_by_slug(&slug).await
    }));

    rsx! {
        Link { class: "navbar-link", to: "/{username}/blog", "\u{2190} All posts" }
        match &*post.read() {
            None => rsx! { LoadingSpinner {} },
            Some(Err(e)) => rsx! { ErrorAlert { message: e.user_message() } },
            Some(Ok(post)) => rsx! { PostBody { post: post.clone() } },
        }
    }
}
