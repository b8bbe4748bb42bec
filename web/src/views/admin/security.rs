use dioxus::prelude::*;

use api::services::auth;
use ui::components::{Button, ButtonVariant, ConfirmDialog, ErrorAlert, SuccessAlert};
use ui::use_auth;

/// Email verification and two-factor auth for the signed-in admin.
///
/// The flags render from the cached session user; after a successful
/// change the page re-fetches `/auth/me` and updates the shared state so
/// the rest of the app agrees.
#[component]
pub fn AdminSecurity() -> Element {
    let mut auth_state = use_auth();

    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);
    // Secret shown between enable and verify.
    let mut pending_secret = use_signal(|| None::<String>);
    let mut code = use_signal(String::new);
    let mut confirm_disable = use_signal(|| false);

    let mut refresh_user = move || {
        spawn(async move {
            if let Ok(user) = auth::me().await {
                auth_state.set(ui::AuthState {
                    user: Some(user),
                    loading: false,
                });
            }
        });
    };

    let mut resend = move |email: String| {
        spawn(async move {
            match auth::resend_verification_email(&email).await {
                Ok(resp) => notice.set(Some(resp.message)),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let mut enable = move |_| {
        spawn(async move {
            match auth::enable_2fa().await {
                Ok(resp) => pending_secret.set(Some(resp.secret)),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let mut verify = move |_| {
        let code_value = code().trim().to_string();
        if code_value.is_empty() {
            error.set(Some("Enter the 6-digit code".into()));
            return;
        }
        spawn(async move {
            match auth::verify_2fa(&code_value).await {
                Ok(_) => {
                    pending_secret.set(None);
                    code.set(String::new());
                    notice.set(Some("Two-factor authentication is on.".into()));
                    refresh_user();
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let mut disable = move |_| {
        spawn(async move {
            match auth::disable_2fa().await {
                Ok(_) => {
                    notice.set(Some("Two-factor authentication is off.".into()));
                    refresh_user();
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let user = auth_state().user;

    rsx! {
        h1 { "Security" }

        if let Some(message) = error() {
            ErrorAlert { message, onclose: move |_| error.set(None) }
        }
        if let Some(message) = notice() {
            SuccessAlert { message, onclose: move |_| notice.set(None) }
        }

        if let Some(user) = user {
            section {
                class: "home-section",
                h2 { "Email" }
                if user.email_verified {
                    p { "{user.email} \u{2014} verified." }
                } else {
                    p { "{user.email} is not verified yet." }
                    {
                        let email = user.email.clone();
                        rsx! {
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| resend(email.clone()),
                                "Resend verification email"
                            }
                        }
                    }
                }
            }

            section {
                class: "home-section",
                h2 { "Password" }
                p { "Password changes go through the emailed reset code." }
                Link { class: "btn btn-outline", to: "/forgot-password", "Reset password" }
            }

            section {
                class: "home-section",
                h2 { "Two-factor authentication" }
                if let Some(secret) = pending_secret() {
                    p { "Add this secret to your authenticator app, then confirm with a code:" }
                    code { class: "totp-secret", "{secret}" }
                    form {
                        class: "inline-form",
                        onsubmit: move |evt| {
                            evt.prevent_default();
                            verify(());
                        },
                        input {
                            class: "field-input",
                            placeholder: "123456",
                            value: "{code()}",
                            oninput: move |evt| code.set(evt.value()),
                        }
                        Button { r#type: "submit", "Confirm" }
                    }
                } else if user.two_factor_enabled {
                    p { "Two-factor authentication is enabled." }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| confirm_disable.set(true),
                        "Disable 2FA"
                    }
                } else {
                    p { "Require a one-time code at sign-in." }
                    Button { onclick: move |_| enable(()), "Enable 2FA" }
                }
            }
        }

        if confirm_disable() {
            ConfirmDialog {
                title: "Disable two-factor authentication",
                message: "Sign-in will only require your password again.",
                confirm_label: "Disable",
                on_confirm: move |_| {
                    confirm_disable.set(false);
                    disable(());
                },
                on_cancel: move |_| confirm_disable.set(false),
            }
        }
    }
}
