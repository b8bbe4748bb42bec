use dioxus::prelude::*;

use api::services::profile::{self, ProfileInput};
use api::ApiError;
use ui::components::{Button, ErrorAlert, FormField, LoadingSpinner, SuccessAlert, Textarea};

/// Create-or-update for the admin's own profile. A 404 on load means no
/// profile exists yet; the same form then creates instead of patching.
#[component]
pub fn AdminProfile() -> Element {
    let existing = use_resource(|| async { profile::mine().await });

    rsx! {
        h1 { "Profile" }
        match &*existing.read() {
            None => rsx! { LoadingSpinner {} },
            Some(Ok(profile)) => rsx! {
                ProfileForm { seed: Some(profile.clone()) }
            },
            Some(Err(ApiError::Status { status: 404, .. })) => rsx! {
                p { class: "empty-note", "No profile yet. Fill this in to publish one." }
                ProfileForm { seed: None }
            },
            Some(Err(e)) => rsx! { ErrorAlert { message: e.user_message() } },
        }
    }
}

#[component]
fn ProfileForm(seed: Option<api::models::Profile>) -> Element {
    let creating = seed.is_none();
    let seed = seed.unwrap_or_default();

    let mut bio = use_signal(|| seed.bio.clone().unwrap_or_default());
    let mut title = use_signal(|| seed.title.clone().unwrap_or_default());
    let mut location = use_signal(|| seed.location.clone().unwrap_or_default());
    let mut website = use_signal(|| seed.website.clone().unwrap_or_default());
    let mut github = use_signal(|| seed.github.clone().unwrap_or_default());
    let mut linkedin = use_signal(|| seed.linkedin.clone().unwrap_or_default());
    let mut twitter = use_signal(|| seed.twitter.clone().unwrap_or_default());
    let mut avatar = use_signal(|| seed.avatar.clone().unwrap_or_default());

    let mut error = use_signal(|| None::<String>);
    let mut saved = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let creating = use_signal(|| creating);

    let mut submit = move |_| {
        error.set(None);
        saved.set(false);
        saving.set(true);
        spawn(async move {
            let blank_to_none = |value: String| {
                let trimmed = value.trim().to_string();
                (!trimmed.is_empty()).then_some(trimmed)
            };
            let input = ProfileInput {
                bio: blank_to_none(bio()),
                title: blank_to_none(title()),
                location: blank_to_none(location()),
                website: blank_to_none(website()),
                github: blank_to_none(github()),
                linkedin: blank_to_none(linkedin()),
                twitter: blank_to_none(twitter()),
                avatar: blank_to_none(avatar()),
            };
            let result = if creating() {
                profile::create(&input).await
            } else {
                profile::update(&input).await
            };
            match result {
                Ok(_) => saved.set(true),
                Err(e) => error.set(Some(e.user_message())),
            }
            saving.set(false);
        });
    };

    rsx! {
        if let Some(message) = error() {
            ErrorAlert { message, onclose: move |_| error.set(None) }
        }
        if saved() {
            SuccessAlert { message: "Profile saved.", onclose: move |_| saved.set(false) }
        }

        form {
            class: "editor-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                submit(());
            },
            FormField {
                id: "profile-title",
                label: "Headline",
                placeholder: "Systems engineer, Berlin",
                value: title(),
                oninput: move |evt: FormEvent| title.set(evt.value()),
            }
            div {
                class: "form-field",
                label { class: "field-label", r#for: "profile-bio", "Bio" }
                Textarea {
                    id: "profile-bio",
                    value: bio(),
                    oninput: move |evt: FormEvent| bio.set(evt.value()),
                }
            }
            div {
                class: "form-row",
                FormField {
                    id: "profile-location",
                    label: "Location",
                    value: location(),
                    oninput: move |evt: FormEvent| location.set(evt.value()),
                }
                FormField {
                    id: "profile-avatar",
                    label: "Avatar URL",
                    value: avatar(),
                    oninput: move |evt: FormEvent| avatar.set(evt.value()),
                }
            }
            div {
                class: "form-row",
                FormField {
                    id: "profile-website",
                    label: "Website",
                    value: website(),
                    oninput: move |evt: FormEvent| website.set(evt.value()),
                }
                FormField {
                    id: "profile-github",
                    label: "GitHub",
                    value: github(),
                    oninput: move |evt: FormEvent| github.set(evt.value()),
                }
            }
            div {
                class: "form-row",
                FormField {
                    id: "profile-linkedin",
                    label: "LinkedIn",
                    value: linkedin(),
                    oninput: move |evt: FormEvent| linkedin.set(evt.value()),
                }
                FormField {
                    id: "profile-twitter",
                    label: "Twitter",
                    value: twitter(),
                    oninput: move |evt: FormEvent| twitter.set(evt.value()),
                }
            }

            Button {
                r#type: "submit",
                disabled: saving(),
                if saving() { "Saving..." } else { "Save profile" }
            }
        }
    }
}
