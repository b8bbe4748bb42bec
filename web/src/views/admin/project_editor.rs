use dioxus::prelude::*;

use api::models::{Project, ProjectStatus};
use api::services::projects::{self, ProjectInput};
use api::services::technologies;
use ui::components::{Button, ErrorAlert, FormField, LoadingSpinner, Textarea};
use ui::{use_query, validation};

#[component]
pub fn AdminProjectNew() -> Element {
    rsx! {
        h1 { "New project" }
        ProjectForm { project: None }
    }
}

#[component]
pub fn AdminProjectEdit(id: String) -> Element {
    let project = use_resource(use_reactive!(|(id,)| async move {
        projects::get(&id).await
    }));

    rsx! {
        h1 { "Edit project" }
        match &*project.read() {
            None => rsx! { LoadingSpinner {} },
            Some(Err(e)) => rsx! { ErrorAlert { message: e.user_message() } },
            Some(Ok(project)) => rsx! { ProjectForm { project: Some(project.clone()) } },
        }
    }
}

const STATUS_CHOICES: [(ProjectStatus, &str); 3] = [
    (ProjectStatus::Draft, "DRAFT"),
    (ProjectStatus::Published, "PUBLISHED"),
    (ProjectStatus::Archived, "ARCHIVED"),
];

/// Create/edit form. Seeded from the loaded project in edit mode; the
/// whole input is sent on save either way, so the server sees one shape.
#[component]
fn ProjectForm(project: Option<Project>) -> Element {
    let nav = use_navigator();
    let editing = project.as_ref().map(|p| p.id.clone());
    let seed = project.unwrap_or_default();

    let mut title = use_signal(|| seed.title.clone());
    let mut description = use_signal(|| seed.description.clone());
    let mut content = use_signal(|| seed.content.clone().unwrap_or_default());
    let mut thumbnail = use_signal(|| seed.thumbnail.clone().unwrap_or_default());
    let mut live_url = use_signal(|| seed.live_url.clone().unwrap_or_default());
    let mut github_url = use_signal(|| seed.github_url.clone().unwrap_or_default());
    let mut status = use_signal(|| seed.status);
    let mut featured = use_signal(|| seed.featured);
    let mut selected_techs = use_signal(|| {
        seed.technologies
            .iter()
            .map(|t| t.technology_id.clone())
            .collect::<Vec<_>>()
    });

    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let catalog = use_query(technologies::list);

    let editing_id = use_signal(|| editing);

    let mut submit = move |_| {
        if let Some(missing) = validation::required(&title(), "Title") {
            error.set(Some(missing));
            return;
        }
        if let Some(missing) = validation::required(&description(), "Description") {
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
            let input = ProjectInput {
                title: Some(title().trim().to_string()),
                description: Some(description().trim().to_string()),
                content: blank_to_none(content()),
                thumbnail: blank_to_none(thumbnail()),
                live_url: blank_to_none(live_url()),
                github_url: blank_to_none(github_url()),
                status: Some(
                    STATUS_CHOICES
                        .iter()
                        .find(|(s, _)| *s == status())
                        .map(|(_, wire)| wire.to_string())
                        .unwrap_or_else(|| "DRAFT".into()),
                ),
                featured: Some(featured()),
                technology_ids: Some(selected_techs()),
            };
            let result = match editing_id() {
                Some(id) => projects::update(&id, &input).await,
                None => projects::create(&input).await,
            };
            match result {
                Ok(_) => {
                    nav.push("/admin/projects");
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
                id: "project-title",
                label: "Title",
                value: title(),
                oninput: move |evt: FormEvent| title.set(evt.value()),
            }
            FormField {
                id: "project-description",
                label: "Short description",
                value: description(),
                oninput: move |evt: FormEvent| description.set(evt.value()),
            }
            div {
                class: "form-field",
                label { class: "field-label", r#for: "project-content", "Content" }
                Textarea {
                    id: "project-content",
                    rows: 10,
                    value: content(),
                    oninput: move |evt: FormEvent| content.set(evt.value()),
                }
            }
            div {
                class: "form-row",
                FormField {
                    id: "project-thumbnail",
                    label: "Thumbnail URL",
                    value: thumbnail(),
                    oninput: move |evt: FormEvent| thumbnail.set(evt.value()),
                }
                FormField {
                    id: "project-live",
                    label: "Live URL",
                    value: live_url(),
                    oninput: move |evt: FormEvent| live_url.set(evt.value()),
                }
                FormField {
                    id: "project-github",
                    label: "GitHub URL",
                    value: github_url(),
                    oninput: move |evt: FormEvent| github_url.set(evt.value()),
                }
            }

            div {
                class: "form-row",
                div {
                    class: "form-field",
                    label { class: "field-label", r#for: "project-status", "Status" }
                    select {
                        id: "project-status",
                        class: "field-input",
                        onchange: move |evt| {
                            if let Some((s, _)) =
                                STATUS_CHOICES.iter().find(|(_, wire)| *wire == evt.value())
                            {
                                status.set(*s);
                            }
                        },
                        for (choice, wire) in STATUS_CHOICES {
                            option {
                                key: "{wire}",
                                value: "{wire}",
                                selected: choice == status(),
                                "{choice.label()}"
                            }
                        }
                    }
                }
                label {
                    class: "field-label checkbox-row",
                    input {
                        r#type: "checkbox",
                        checked: featured(),
                        onchange: move |evt| featured.set(evt.checked()),
                    }
                    "Featured on the home page"
                }
            }

            div {
                class: "form-field",
                span { class: "field-label", "Technologies" }
                if let Some(techs) = catalog.data() {
                    div {
                        class: "checkbox-grid",
                        for tech in techs {
                            {
                                let tech_id = tech.id.clone();
                                let checked = selected_techs().contains(&tech_id);
                                rsx! {
                                    label {
                                        key: "{tech.id}",
                                        class: "checkbox-row",
                                        input {
                                            r#type: "checkbox",
                                            checked: checked,
                                            onchange: move |evt| {
                                                let mut ids = selected_techs();
                                                if evt.checked() {
                                                    if !ids.contains(&tech_id) {
                                                        ids.push(tech_id.clone());
                                                    }
                                                } else {
                                                    ids.retain(|id| id != &tech_id);
                                                }
                                                selected_techs.set(ids);
                                            },
                                        }
                                        "{tech.name}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "editor-actions",
                Button {
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Save project" }
                }
                Link { class: "btn btn-outline", to: "/admin/projects", "Cancel" }
            }
        }
    }
}
