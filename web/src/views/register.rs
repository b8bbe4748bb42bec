use dioxus::prelude::*;

use api::models::RegisterData;
use api::services::{auth, portfolio};
use ui::components::{Button, ErrorAlert, FormField};
use ui::{set_authenticated, use_auth, validation};

#[component]
pub fn Register() -> Element {
    let auth_signal = use_auth();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);

    let mut email_error = use_signal(|| None::<String>);
    let mut username_error = use_signal(|| None::<String>);
    let mut password_error = use_signal(|| None::<String>);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    // Availability checks fire on blur so typing stays quiet.
    let check_email = move |_| {
        let value = email().trim().to_string();
        if !validation::is_valid_email(&value) {
            return;
        }
        spawn(async move {
            if let Ok(availability) = portfolio::check_email(&value).await {
                if !availability.available {
                    email_error.set(Some("That email is already registered".into()));
                }
            }
        });
    };

    let check_username = move |_| {
        let value = username();
        if !validation::is_valid_username(&value) {
            return;
        }
        spawn(async move {
            if let Ok(availability) = portfolio::check_username(&value).await {
                if !availability.available {
                    username_error.set(Some("That username is taken".into()));
                }
            }
        });
    };

    let mut submit = move |_| {
        let email_value = email().trim().to_string();
        let username_value = username();

        if !validation::is_valid_email(&email_value) {
            email_error.set(Some("Enter a valid email address".into()));
            return;
        }
        if !validation::is_valid_username(&username_value) {
            username_error.set(Some(
                "3-30 characters: lowercase letters, digits, - and _".into(),
            ));
            return;
        }
        if let Err(rule) = validation::validate_password(&password()) {
            password_error.set(Some(rule.into()));
            return;
        }
        if password() != confirm() {
            password_error.set(Some("Passwords do not match".into()));
            return;
        }

        error.set(None);
        submitting.set(true);
        spawn(async move {
            let blank_to_none = |value: String| {
                let trimmed = value.trim().to_string();
                (!trimmed.is_empty()).then_some(trimmed)
            };
            let data = RegisterData {
                email: email_value,
                username: username_value,
                password: password(),
                first_name: blank_to_none(first_name()),
                last_name: blank_to_none(last_name()),
            };
            match auth::register(&data).await {
                Ok(resp) => {
                    set_authenticated(auth_signal, resp.user);
                    nav.push("/");
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-card",
            h1 { "Create your portfolio" }

            if let Some(message) = error() {
                ErrorAlert { message, onclose: move |_| error.set(None) }
            }

            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    submit(());
                },
                FormField {
                    id: "reg-email",
                    label: "Email",
                    r#type: "email",
                    value: email(),
                    error: email_error(),
                    oninput: move |evt: FormEvent| {
                        email.set(evt.value());
                        email_error.set(None);
                    },
                    onblur: move |_| check_email(()),
                }
                FormField {
                    id: "reg-username",
                    label: "Username",
                    placeholder: "ada_lovelace",
                    value: username(),
                    error: username_error(),
                    oninput: move |evt: FormEvent| {
                        username.set(evt.value());
                        username_error.set(None);
                    },
                    onblur: move |_| check_username(()),
                }
                div {
                    class: "form-row",
                    FormField {
                        id: "reg-first",
                        label: "First name",
                        value: first_name(),
                        oninput: move |evt: FormEvent| first_name.set(evt.value()),
                    }
                    FormField {
                        id: "reg-last",
                        label: "Last name",
                        value: last_name(),
                        oninput: move |evt: FormEvent| last_name.set(evt.value()),
                    }
                }
                FormField {
                    id: "reg-password",
                    label: "Password",
                    r#type: "password",
                    value: password(),
                    error: password_error(),
                    oninput: move |evt: FormEvent| {
                        password.set(evt.value());
                        password_error.set(None);
                    },
                }
                FormField {
                    id: "reg-confirm",
                    label: "Confirm password",
                    r#type: "password",
                    value: confirm(),
                    oninput: move |evt: FormEvent| confirm.set(evt.value()),
                }

                Button {
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Creating account..." } else { "Sign up" }
                }
            }

            div {
                class: "auth-links",
                Link { to: "/login", "Already registered? Sign in" }
            }
        }
    }
}
