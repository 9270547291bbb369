use dioxus::prelude::*;

/// Alert shown above a form or table when a request fails
///
/// Renders nothing while no message is set.
#[component]
pub fn ErrorBanner(message: Option<String>) -> Element {
    rsx!(
        if let Some(message) = message {
            div { role: "alert", class: "alert alert-error",
                span { "{message}" }
            }
        }
    )
}
