use dioxus::prelude::*;

use super::{Input, Label};

/// Label + input + optional error line.
#[component]
pub fn FormField(
    id: String,
    label: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] value: String,
    #[props(default)] error: Option<String>,
    #[props(default)] oninput: EventHandler<FormEvent>,
    #[props(default)] onblur: EventHandler<FocusEvent>,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            Label { html_for: id.clone(), "{label}" }
            Input {
                id: id.clone(),
                r#type: r#type,
                class: if error.is_some() { "invalid".to_string() } else { String::new() },
                placeholder: placeholder,
                value: value,
                oninput: move |evt| oninput.call(evt),
                onblur: move |evt| onblur.call(evt),
            }
            if let Some(error) = error {
                span { class: "field-error", "{error}" }
            }
        }
    }
}
