use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;
use uuid::Uuid;

use crate::model::{company::CompanyDto, user::UserDto};

/// Number of candidate records fetched for a reference select
#[cfg(feature = "web")]
const SELECT_PAGE_SIZE: u64 = 100;

/// Reference select listing users fetched from the API
///
/// Only ids present in the fetched candidate list are ever emitted, so a
/// form can never submit a user reference the API did not offer.
#[component]
pub fn UserSelect(
    label: &'static str,
    value: Option<Uuid>,
    error: Option<String>,
    onselect: EventHandler<Option<Uuid>>,
) -> Element {
    let mut users = use_signal(Vec::<UserDto>::new);

    // Retrieve candidate users on component load
    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move {
            crate::client::platform::user::find_many_with_count(SELECT_PAGE_SIZE, 0).await
        });

        match &*future.read_unchecked() {
            Some(Ok(page)) => users.set(page.data.clone()),
            Some(Err(err)) => {
                tracing::error!("Failed to retrieve user options: {err}");
            }
            None => (),
        }
    }

    rsx!(
        label { class: "form-control w-full",
            div { class: "label",
                span { class: "label-text", "{label}" }
            }
            select {
                class: "select select-bordered w-full",
                onchange: move |evt| {
                    let picked = evt
                        .value()
                        .parse::<Uuid>()
                        .ok()
                        .filter(|id| users.read().iter().any(|user| user.id == *id));
                    onselect.call(picked);
                },
                option {
                    value: "",
                    disabled: true,
                    selected: value.is_none(),
                    "Select a user"
                }
                {users.read().iter().map(|user| rsx! {
                    option {
                        key: "{user.id}",
                        value: "{user.id}",
                        selected: value == Some(user.id),
                        "{user.display_name()}"
                    }
                })}
            }
            if let Some(error) = error {
                div { class: "label",
                    span { class: "label-text-alt text-error", "{error}" }
                }
            }
        }
    )
}

/// Reference select listing companies fetched from the API
#[component]
pub fn CompanySelect(
    label: &'static str,
    value: Option<Uuid>,
    error: Option<String>,
    onselect: EventHandler<Option<Uuid>>,
) -> Element {
    let mut companies = use_signal(Vec::<CompanyDto>::new);

    // Retrieve candidate companies on component load
    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move {
            crate::client::platform::company::find_many_with_count(SELECT_PAGE_SIZE, 0).await
        });

        match &*future.read_unchecked() {
            Some(Ok(page)) => companies.set(page.data.clone()),
            Some(Err(err)) => {
                tracing::error!("Failed to retrieve company options: {err}");
            }
            None => (),
        }
    }

    rsx!(
        label { class: "form-control w-full",
            div { class: "label",
                span { class: "label-text", "{label}" }
            }
            select {
                class: "select select-bordered w-full",
                onchange: move |evt| {
                    let picked = evt
                        .value()
                        .parse::<Uuid>()
                        .ok()
                        .filter(|id| companies.read().iter().any(|company| company.id == *id));
                    onselect.call(picked);
                },
                option {
                    value: "",
                    disabled: true,
                    selected: value.is_none(),
                    "Select a company"
                }
                {companies.read().iter().map(|company| rsx! {
                    option {
                        key: "{company.id}",
                        value: "{company.id}",
                        selected: value == Some(company.id),
                        "{company.name}"
                    }
                })}
            }
            if let Some(error) = error {
                div { class: "label",
                    span { class: "label-text-alt text-error", "{error}" }
                }
            }
        }
    )
}
