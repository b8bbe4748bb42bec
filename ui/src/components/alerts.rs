use dioxus::prelude::*;

/// Local error banner for failed requests and validation errors.
#[component]
pub fn ErrorAlert(message: String, #[props(default)] onclose: Option<EventHandler<()>>) -> Element {
    rsx! {
        div {
            class: "alert alert-error",
            role: "alert",
            span { "{message}" }
            if let Some(onclose) = onclose {
                button {
                    class: "alert-close",
                    aria_label: "Dismiss",
                    onclick: move |_| onclose.call(()),
                    "\u{00d7}"
                }
            }
        }
    }
}

#[component]
pub fn SuccessAlert(message: String, #[props(default)] onclose: Option<EventHandler<()>>) -> Element {
    rsx! {
        div {
            class: "alert alert-success",
            role: "status",
            span { "{message}" }
            if let Some(onclose) = onclose {
                button {
                    class: "alert-close",
                    aria_label: "Dismiss",
                    onclick: move |_| onclose.call(()),
                    "\u{00d7}"
                }
            }
        }
    }
}
