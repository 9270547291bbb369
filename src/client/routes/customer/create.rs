use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use uuid::Uuid;

use crate::{
    client::{
        components::{
            form::{CompanySelect, DateInput, NumberInput, UserSelect},
            AccessGate, Breadcrumb, ErrorBanner, Page,
        },
        form::FormState,
        router::Route,
    },
    model::{
        access::{AccessEntity, AccessOperation},
        customer::CustomerPayloadDto,
    },
};

#[component]
pub fn CustomerCreate(user_id: Option<Uuid>, company_id: Option<Uuid>) -> Element {
    rsx!(
        Title { "Create Customer | Roster HR" }
        Meta {
            name: "description",
            content: "Create a customer record."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full h-full max-w-[720px] p-6 flex flex-col gap-4",
                AccessGate {
                    entity: AccessEntity::Customer,
                    operation: AccessOperation::Create,
                    Breadcrumb {
                        trail: vec![
                            ("Home".to_string(), Some(Route::Home {})),
                            ("Customers".to_string(), Some(Route::CustomerList {})),
                            ("Create".to_string(), None),
                        ]
                    }
                    h1 { class: "text-2xl",
                        "Create Customer"
                    }
                    CustomerCreateForm { user_id, company_id }
                }
            }
        }
    )
}

#[component]
pub fn CustomerCreateForm(user_id: Option<Uuid>, company_id: Option<Uuid>) -> Element {
    let navigator = use_navigator();
    let mut form = use_signal(|| {
        FormState::new(CustomerPayloadDto::create_defaults(user_id, company_id))
    });
    let mut banner = use_signal(|| None::<String>);

    let submit = move |_: MouseEvent| {
        let Some(payload) = form.write().begin_submit() else {
            return;
        };

        #[cfg(feature = "web")]
        spawn(async move {
            use crate::client::platform::{customer, PlatformError};

            match customer::create(&payload).await {
                Ok(_) => {
                    form.write().finish_submit_success();
                    navigator.push(Route::CustomerList {});
                }
                Err(PlatformError::Validation(rejection)) => {
                    let mut state = form.write();
                    state.set_rejection(rejection);
                    state.finish_submit_failure();
                }
                Err(err) => {
                    banner.set(Some(err.to_string()));
                    form.write().finish_submit_failure();
                }
            }
        });
    };

    rsx!(
        ErrorBanner { message: banner() }
        div { class: "flex flex-col gap-2",
            UserSelect {
                label: "User",
                value: form.read().values.user_id,
                error: form.read().message_for("user_id").map(str::to_string),
                onselect: move |value| form.write().update(|values| values.user_id = value),
            }
            CompanySelect {
                label: "Company",
                value: form.read().values.company_id,
                error: form.read().message_for("company_id").map(str::to_string),
                onselect: move |value| form.write().update(|values| values.company_id = value),
            }
            DateInput {
                label: "Registration Date",
                value: form.read().values.registration_date,
                error: form.read().message_for("registration_date").map(str::to_string),
                oninput: move |value| form.write().update(|values| values.registration_date = value),
            }
            DateInput {
                label: "Last Purchase Date",
                value: form.read().values.last_purchase_date,
                error: form.read().message_for("last_purchase_date").map(str::to_string),
                oninput: move |value| form.write().update(|values| values.last_purchase_date = value),
            }
            NumberInput {
                label: "Total Purchases",
                value: form.read().values.total_purchases,
                error: form.read().message_for("total_purchases").map(str::to_string),
                oninput: move |value| form.write().update(|values| values.total_purchases = value),
            }
            NumberInput {
                label: "Total Spent",
                value: form.read().values.total_spent,
                error: form.read().message_for("total_spent").map(str::to_string),
                oninput: move |value| form.write().update(|values| values.total_spent = value),
            }
            div { class: "flex justify-end mt-2",
                button {
                    class: "btn btn-primary w-36",
                    disabled: form.read().submitting,
                    onclick: submit,
                    "Create"
                }
            }
        }
    )
}
