use dioxus::prelude::*;

use api::models::LoginCredentials;
use api::services::auth;
use api::ApiError;
use ui::components::{Button, ErrorAlert, FormField, SuccessAlert};
use ui::{set_authenticated, use_auth, validation};

#[component]
pub fn Login() -> Element {
    let auth_signal = use_auth();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut code = use_signal(String::new);
    // Shown after a 2FA-enabled account passes the password check.
    let mut needs_code = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let mut submit = move |_| {
        let email_value = email().trim().to_string();
        if !validation::is_valid_email(&email_value) {
            error.set(Some("Enter a valid email address".into()));
            return;
        }
        if password().is_empty() {
            error.set(Some("Enter your password".into()));
            return;
        }

        error.set(None);
        notice.set(None);
        submitting.set(true);
        spawn(async move {
            let credentials = LoginCredentials {
                email: email_value,
                password: password(),
                two_factor_code: if needs_code() { Some(code()) } else { None },
            };
            match auth::login(&credentials).await {
                Ok(resp) => {
                    let admin = resp.user.is_admin();
                    set_authenticated(auth_signal, resp.user);
                    if admin {
                        nav.push("/admin");
                    } else {
                        nav.push("/");
                    }
                }
                Err(ApiError::Unauthorized) => {
                    error.set(Some("Invalid email or password".into()));
                }
                Err(ApiError::Status { message, .. })
                    if message.to_lowercase().contains("two-factor") =>
                {
                    needs_code.set(true);
                    notice.set(Some("Enter the code from your authenticator app".into()));
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-card",
            h1 { "Sign in" }

            if let Some(message) = error() {
                ErrorAlert { message, onclose: move |_| error.set(None) }
            }
            if let Some(message) = notice() {
                SuccessAlert { message }
            }

            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    submit(());
                },
                FormField {
                    id: "login-email",
                    label: "Email",
                    r#type: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                FormField {
                    id: "login-password",
                    label: "Password",
                    r#type: "password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                if needs_code() {
                    FormField {
                        id: "login-2fa",
                        label: "Authentication code",
                        placeholder: "123456",
                        value: code(),
                        oninput: move |evt: FormEvent| code.set(evt.value()),
                    }
                }

                Button {
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign in" }
                }
            }

            div {
                class: "auth-links",
                Link { to: "/forgot-password", "Forgot password?" }
                Link { to: "/register", "Need an account? Sign up" }
            }
        }
    }
}
