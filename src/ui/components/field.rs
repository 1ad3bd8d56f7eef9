use dioxus::prelude::*;

use crate::domain::FormField;
use crate::ui::theme;

/// Dropdown bound to one of the form's enum fields.
#[component]
pub fn SelectField(
    field: FormField,
    name: &'static str,
    options: Vec<&'static str>,
    value: String,
    on_change: EventHandler<(FormField, String)>,
) -> Element {
    let label = field.label();
    rsx! {
        div {
            label { class: "{theme::label_class()}", r#for: "{name}", "{label}" }
            select {
                class: "{theme::input_class(false)}",
                id: "{name}",
                name: "{name}",
                required: true,
                value: "{value}",
                onchange: move |evt| on_change.call((field, evt.value())),
                option { value: "", selected: value.is_empty(), "Select {label}" }
                for opt in options {
                    option { value: "{opt}", selected: value == opt, "{opt}" }
                }
            }
        }
    }
}

/// Free text input. Numeric fields still use a text box so that whatever
/// was typed stays on screen, even when it does not parse.
#[component]
pub fn TextField(
    field: FormField,
    name: &'static str,
    value: String,
    #[props(default)] numeric: bool,
    #[props(default)] invalid: bool,
    on_change: EventHandler<(FormField, String)>,
) -> Element {
    let inputmode = if numeric { "decimal" } else { "text" };
    rsx! {
        div {
            label { class: "{theme::label_class()}", r#for: "{name}", "{field.label()}" }
            input {
                class: "{theme::input_class(invalid)}",
                id: "{name}",
                name: "{name}",
                r#type: "text",
                inputmode: "{inputmode}",
                required: true,
                value: "{value}",
                oninput: move |evt| on_change.call((field, evt.value())),
            }
        }
    }
}
