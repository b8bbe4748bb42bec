use dioxus::prelude::*;

use api::models::Post;
use api::services::posts::{self, PostInput};
use api::services::tags;
use ui::components::{Button, ErrorAlert, FormField, LoadingSpinner, Textarea};
use ui::{use_query, validation};

#[component]
pub fn AdminPostNew() -> Element {
    rsx! {
        h1 { "New post" }
        PostForm { post: None }
    }
}

#[component]
pub fn AdminPostEdit(id: String) -> Element {
    let post = use_resource(use_reactive!(|(id,)| async move { posts::get(&id).await }));

    rsx! {
        h1 { "Edit post" }
        match &*post.read() {
            None => rsx! { LoadingSpinner {} },
            Some(Err(e)) => rsx! { ErrorAlert { message: e.user_message() } },
            Some(Ok(post)) => rsx! { PostForm { post: Some(post.clone()) } },
        }
    }
}

/// The slug is server-assigned from the title; the form never edits it.
#[component]
fn PostForm(post: Option<Post>) -> Element {
    let nav = use_navigator();
    let editing = post.as_ref().map(|p| p.id.clone());
    let seed = post.unwrap_or_default();

    let mut title = use_signal(|| seed.title.clone());
    let mut excerpt = use_signal(|| seed.excerpt.clone().unwrap_or_default());
    let mut content = use_signal(|| seed.content.clone());
    let mut thumbnail = use_signal(|| seed.thumbnail.clone().unwrap_or_default());
    let mut published = use_signal(|| seed.published);
    let mut selected_tags =
        use_signal(|| seed.tags.iter().map(|t| t.id.clone()).collect::<Vec<_>>());

    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let catalog = use_query(tags::list);
    let editing_id = use_signal(|| editing);

    let mut submit = move |_| {
        if let Some(missing) = validation::required(&title(), "Title") {
            error.set(Some(missing));
            return;
        }
        if let Some(missing) = validation::required(&content(), "Content") {
            error.set(Some(missing));
            return;
        }

        error.set(None);
        saving.set(true);
        spawn(async move {
            let blank_to_none = |value: String| {
                let trimmed = value.trim().to_string();
                (!trimmed.is_empty()).then_some(trimmed)
            };
            let input = PostInput {
                title: Some(title().trim().to_string()),
                content: Some(content()),
                excerpt: blank_to_none(excerpt()),
                thumbnail: blank_to_none(thumbnail()),
                published: Some(published()),
                tag_ids: Some(selected_tags()),
            };
            let result = match editing_id() {
                Some(id) => posts::update(&id, &input).await,
                None => posts::create(&input).await,
            };
            match result {
                Ok(_) => {
                    nav.push("/admin/posts");
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            saving.set(false);
        });
    };

    rsx! {
        if let Some(message) = error() {
            ErrorAlert { message, onclose: move |_| error.set(None) }
        }

        form {
            class: "editor-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                submit(());
            },
            FormField {
                id: "post-title",
                label: "Title",
                value: title(),
                oninput: move |evt: FormEvent| title.set(evt.value()),
            }
            FormField {
                id: "post-excerpt",
                label: "Excerpt",
                placeholder: "One-line summary for lists and search",
                value: excerpt(),
                oninput: move |evt: FormEvent| excerpt.set(evt.value()),
            }
            div {
                class: "form-field",
                label { class: "field-label", r#for: "post-content", "Content" }
                Textarea {
                    id: "post-content",
                    rows: 14,
                    value: content(),
                    oninput: move |evt: FormEvent| content.set(evt.value()),
                }
            }
            FormField {
                id: "post-thumbnail",
                label: "Thumbnail URL",
                value: thumbnail(),
                oninput: move |evt: FormEvent| thumbnail.set(evt.value()),
            }

            div {
                class: "form-field",
                span { class: "field-label", "Tags" }
                if let Some(all_tags) = catalog.data() {
                    div {
                        class: "checkbox-grid",
                        for tag in all_tags {
                            {
                                let tag_id = tag.id.clone();
                                let checked = selected_tags().contains(&tag_id);
                                rsx! {
                                    label {
                                        key: "{tag.id}",
                                        class: "checkbox-row",
                                        input {
                                            r#type: "checkbox",
                                            checked: checked,
                                            onchange: move |evt| {
                                                let mut ids = selected_tags();
                                                if evt.checked() {
                                                    if !ids.contains(&tag_id) {
                                                        ids.push(tag_id.clone());
                                                    }
                                                } else {
                                                    ids.retain(|id| id != &tag_id);
                                                }
                                                selected_tags.set(ids);
                                            },
                                        }
                                        "{tag.name}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            label {
                class: "field-label checkbox-row",
                input {
                    r#type: "checkbox",
                    checked: published(),
                    onchange: move |evt| published.set(evt.checked()),
                }
                "Published"
            }

            div {
                class: "editor-actions",
                Button {
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Save post" }
                }
                Link { class: "btn btn-outline", to: "/admin/posts", "Cancel" }
            }
        }
    }
}
