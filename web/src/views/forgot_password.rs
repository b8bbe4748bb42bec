use dioxus::prelude::*;

use api::services::auth;
use ui::components::{Button, ErrorAlert, FormField, SuccessAlert};
use ui::validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Email,
    Code,
    Password,
    Done,
}

/// Password recovery: request a code by email, verify it, set the new
/// password. Each step re-sends the email and code so the server can
/// re-check them.
#[component]
pub fn ForgotPassword() -> Element {
    let mut step = use_signal(|| Step::Email);
    let mut email = use_signal(String::new);
    let mut code = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let mut submit = move |_| {
        error.set(None);
        match step() {
            Step::Email => {
                let value = email().trim().to_string();
                if !validation::is_valid_email(&value) {
                    error.set(Some("Enter a valid email address".into()));
                    return;
                }
                submitting.set(true);
                spawn(async move {
                    match auth::forgot_password(&value).await {
                        Ok(_) => step.set(Step::Code),
                        Err(e) => error.set(Some(e.user_message())),
                    }
                    submitting.set(false);
                });
            }
            Step::Code => {
                if code().trim().is_empty() {
                    error.set(Some("Enter the code from the email".into()));
                    return;
                }
                submitting.set(true);
                spawn(async move {
                    match auth::verify_reset_code(email().trim(), code().trim()).await {
                        Ok(_) => step.set(Step::Password),
                        Err(e) => error.set(Some(e.user_message())),
                    }
                    submitting.set(false);
                });
            }
            Step::Password => {
                if let Err(rule) = validation::validate_password(&password()) {
                    error.set(Some(rule.into()));
                    return;
                }
                submitting.set(true);
                spawn(async move {
                    match auth::reset_password(email().trim(), code().trim(), &password()).await {
                        Ok(_) => step.set(Step::Done),
                        Err(e) => error.set(Some(e.user_message())),
                    }
                    submitting.set(false);
                });
            }
            Step::Done => {}
        }
    };

    rsx! {
        div {
            class: "auth-card",
            h1 { "Reset password" }

            if let Some(message) = error() {
                ErrorAlert { message, onclose: move |_| error.set(None) }
            }

            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    submit(());
                },
                match step() {
                    Step::Email => rsx! {
                        p { class: "auth-hint", "We'll email you a reset code." }
                        FormField {
                            id: "fp-email",
                            label: "Email",
                            r#type: "email",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                        Button {
                            r#type: "submit",
                            disabled: submitting(),
                            "Send code"
                        }
                    },
                    Step::Code => rsx! {
                        p { class: "auth-hint", "Enter the code sent to {email()}." }
                        FormField {
                            id: "fp-code",
                            label: "Reset code",
                            placeholder: "123456",
                            value: code(),
                            oninput: move |evt: FormEvent| code.set(evt.value()),
                        }
                        Button {
                            r#type: "submit",
                            disabled: submitting(),
                            "Verify code"
                        }
                    },
                    Step::Password => rsx! {
                        FormField {
                            id: "fp-password",
                            label: "New password",
                            r#type: "password",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                        Button {
                            r#type: "submit",
                            disabled: submitting(),
                            "Set new password"
                        }
                    },
                    Step::Done => rsx! {
                        SuccessAlert { message: "Password updated. You can sign in now." }
                        Link { class: "btn btn-primary", to: "/login", "Go to sign in" }
                    },
                }
            }
        }
    }
}
