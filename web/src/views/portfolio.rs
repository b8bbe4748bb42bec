use std::collections::BTreeMap;

use dioxus::prelude::*;

use api::models::{PortfolioData, Skill};
use api::services::contact::{self, ContactInput};
use api::services::portfolio;
use ui::components::{Button, ErrorAlert, FormField, LoadingSpinner, SuccessAlert, Textarea};
use ui::validation;

/// Public portfolio: profile card, skills grouped by category, published
/// projects, and a contact form addressed to the owner.
#[component]
pub fn Portfolio(username: String) -> Element {
    let data = use_resource(use_reactive!(|(username,)| async move {
        portfolio::by_username(&username).await
    }));

    rsx! {
        match &*data.read() {
            None => rsx! { LoadingSpinner {} },
            Some(Err(e)) => rsx! {
                ErrorAlert { message: e.user_message() }
                p { class: "empty-note", "No portfolio at this address." }
            },
            Some(Ok(data)) => rsx! { PortfolioBody { data: data.clone() } },
        }
    }
}

#[component]
fn PortfolioBody(data: PortfolioData) -> Element {
    let display_name = match (&data.first_name, &data.last_name) {
        (Some(f), Some(l)) => format!("{f} {l}"),
        (Some(f), None) => f.clone(),
        _ => data.username.clone(),
    };
    let skills = data
        .profile
        .as_ref()
        .map(|p| p.skills.clone())
        .unwrap_or_default();

    rsx! {
        section {
            class: "portfolio-header",
            if let Some(profile) = &data.profile {
                if let Some(avatar) = &profile.avatar {
                    img { class: "portfolio-avatar", src: "{avatar}", alt: "{display_name}" }
                }
            }
            div {
                h1 { "{display_name}" }
                if let Some(profile) = &data.profile {
                    if let Some(title) = &profile.title {
                        p { class: "portfolio-title", "{title}" }
                    }
                    if let Some(location) = &profile.location {
                        p { class: "portfolio-location", "{location}" }
                    }
                    if let Some(bio) = &profile.bio {
                        p { class: "portfolio-bio", "{bio}" }
                    }
                    div {
                        class: "portfolio-links",
                        if let Some(website) = &profile.website {
                            a { href: "{website}", target: "_blank", "Website" }
                        }
                        if let Some(github) = &profile.github {
                            a { href: "{github}", target: "_blank", "GitHub" }
                        }
                        if let Some(linkedin) = &profile.linkedin {
                            a { href: "{linkedin}", target: "_blank", "LinkedIn" }
                        }
                        if let Some(twitter) = &profile.twitter {
                            a { href: "{twitter}", target: "_blank", "Twitter" }
                        }
                    }
                }
                Link { class: "navbar-link", to: "/{data.username}/blog", "Blog \u{2192}" }
            }
        }

        if !skills.is_empty() {
            SkillsSection { skills }
        }

        section {
            class: "home-section",
            h2 { "Projects" }
            if data.projects.is_empty() {
                p { class: "empty-note", "No published projects yet." }
            } else {
                div {
                    class: "project-grid",
                    for project in &data.projects {
                        super::projects::ProjectCard {
                            key: "{project.id}",
                            project: project.clone(),
                        }
                    }
                }
            }
        }

        ContactSection { recipient: data.username.clone() }
    }
}

#[component]
fn SkillsSection(skills: Vec<Skill>) -> Element {
    let mut by_category: BTreeMap<String, Vec<Skill>> = BTreeMap::new();
    for skill in skills {
        let category = if skill.category.is_empty() {
            "Other".to_string()
        } else {
            skill.category.clone()
        };
        by_category.entry(category).or_default().push(skill);
    }

    rsx! {
        section {
            class: "home-section",
            h2 { "Skills" }
            div {
                class: "skills-grid",
                for (category, group) in by_category {
                    div {
                        key: "{category}",
                        class: "skills-group",
                        h3 { "{category}" }
                        for skill in group {
                            div {
                                key: "{skill.id}",
                                class: "skill-row",
                                span { "{skill.name}" }
                                span {
                                    class: "skill-level",
                                    aria_label: "{skill.level} out of 5",
                                    for step in 1..=5u8 {
                                        span {
                                            key: "{step}",
                                            class: if step <= skill.level { "skill-dot filled" } else { "skill-dot" },
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

#[component]
fn ContactSection(recipient: String) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut sent = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let recipient = use_signal(|| recipient);

    let mut submit = move |_| {
        for (value, field) in [
            (name(), "Name"),
            (subject(), "Subject"),
            (message(), "Message"),
        ] {
            if let Some(missing) = validation::required(&value, field) {
                error.set(Some(missing));
                return;
            }
        }
        if !validation::is_valid_email(&email()) {
            error.set(Some("Enter a valid email address".into()));
            return;
        }

        error.set(None);
        submitting.set(true);
        spawn(async move {
            let input = ContactInput {
                name: name().trim().to_string(),
                email: email().trim().to_string(),
                subject: subject().trim().to_string(),
                message: message(),
                recipient_username: Some(recipient()),
            };
            match contact::send(&input).await {
                Ok(_) => sent.set(true),
                Err(e) => error.set(Some(e.user_message())),
            }
            submitting.set(false);
        });
    };

    rsx! {
        section {
            class: "home-section contact-section",
            h2 { "Get in touch" }

            if sent() {
                SuccessAlert { message: "Message sent. Thanks for reaching out!" }
            } else {
                if let Some(message) = error() {
                    ErrorAlert { message, onclose: move |_| error.set(None) }
                }
                form {
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        submit(());
                    },
                    div {
                        class: "form-row",
                        FormField {
                            id: "contact-name",
                            label: "Name",
                            value: name(),
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                        FormField {
                            id: "contact-email",
                            label: "Email",
                            r#type: "email",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }
                    FormField {
                        id: "contact-subject",
                        label: "Subject",
                        value: subject(),
                        oninput: move |evt: FormEvent| subject.set(evt.value()),
                    }
                    div {
                        class: "form-field",
                        label { class: "field-label", r#for: "contact-message", "Message" }
                        Textarea {
                            id: "contact-message",
                            value: message(),
                            oninput: move |evt: FormEvent| message.set(evt.value()),
                        }
                    }
                    Button {
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Sending..." } else { "Send message" }
                    }
                }
            }
        }
    }
}
