use dioxus::prelude::*;

use api::services::auth;
use ui::components::{ErrorAlert, LoadingSpinner, SuccessAlert};

/// Landing page for the verification link in the signup email.
#[component]
pub fn VerifyEmail(token: String) -> Element {
    let result = use_resource(use_reactive!(|(token,)| async move {
        auth::verify_email(&token).await
    }));

    rsx! {
        div {
            class: "auth-card",
            h1 { "Email verification" }
            match &*result.read() {
                None => rsx! { LoadingSpinner { label: "Verifying..." } },
                Some(Ok(resp)) => rsx! {
                    SuccessAlert { message: resp.message.clone() }
                    Link { class: "btn btn-primary", to: "/login", "Sign in" }
                },
                Some(Err(e)) => rsx! {
                    ErrorAlert { message: e.user_message() }
                    p {
                        class: "auth-hint",
                        "The link may have expired. Sign in and request a new one "
                        "from the security page."
                    }
                },
            }
        }
    }
}
