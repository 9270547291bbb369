use chrono::NaiveDate;
use dioxus::prelude::*;

/// Single line text input with a label and inline validation message
#[component]
pub fn TextInput(
    label: &'static str,
    value: Option<String>,
    error: Option<String>,
    oninput: EventHandler<Option<String>>,
) -> Element {
    let text = value.unwrap_or_default();

    rsx!(
        label { class: "form-control w-full",
            div { class: "label",
                span { class: "label-text", "{label}" }
            }
            input {
                class: "input input-bordered w-full",
                r#type: "text",
                value: "{text}",
                oninput: move |evt| {
                    let entered = evt.value();
                    if entered.is_empty() {
                        oninput.call(None);
                    } else {
                        oninput.call(Some(entered));
                    }
                }
            }
            if let Some(error) = error {
                div { class: "label",
                    span { class: "label-text-alt text-error", "{error}" }
                }
            }
        }
    )
}

/// Whole number input with a label and inline validation message
#[component]
pub fn NumberInput(
    label: &'static str,
    value: Option<i64>,
    error: Option<String>,
    oninput: EventHandler<Option<i64>>,
) -> Element {
    let number = value.map(|value| value.to_string()).unwrap_or_default();

    rsx!(
        label { class: "form-control w-full",
            div { class: "label",
                span { class: "label-text", "{label}" }
            }
            input {
                class: "input input-bordered w-full",
                r#type: "number",
                value: "{number}",
                oninput: move |evt| {
                    oninput.call(evt.value().parse::<i64>().ok());
                }
            }
            if let Some(error) = error {
                div { class: "label",
                    span { class: "label-text-alt text-error", "{error}" }
                }
            }
        }
    )
}

/// Calendar date input with a label and inline validation message
#[component]
pub fn DateInput(
    label: &'static str,
    value: Option<NaiveDate>,
    error: Option<String>,
    oninput: EventHandler<Option<NaiveDate>>,
) -> Element {
    let date = value
        .map(|value| value.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    rsx!(
        label { class: "form-control w-full",
            div { class: "label",
                span { class: "label-text", "{label}" }
            }
            input {
                class: "input input-bordered w-full",
                r#type: "date",
                value: "{date}",
                oninput: move |evt| {
                    oninput.call(NaiveDate::parse_from_str(&evt.value(), "%Y-%m-%d").ok());
                }
            }
            if let Some(error) = error {
                div { class: "label",
                    span { class: "label-text-alt text-error", "{error}" }
                }
            }
        }
    )
}
