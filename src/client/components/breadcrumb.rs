use dioxus::prelude::*;

use crate::client::router::Route;

/// Navigation trail shown at the top of the record screens
#[component]
pub fn Breadcrumb(trail: Vec<(String, Option<Route>)>) -> Element {
    rsx!(
        div { class: "breadcrumbs text-sm",
            ul {
                {trail.into_iter().map(|(label, route)| rsx! {
                    li {
                        key: "{label}",
                        if let Some(route) = route {
                            Link { to: route, "{label}" }
                        } else {
                            "{label}"
                        }
                    }
                })}
            }
        }
    )
}
