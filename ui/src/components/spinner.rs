use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "spinner-wrap",
            span { class: "spinner" }
            span { class: "spinner-label", "{label}" }
        }
    }
}
