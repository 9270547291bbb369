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
        owner::OwnerPayloadDto,
    },
};

#[component]
pub fn OwnerCreate(user_id: Option<Uuid>, company_id: Option<Uuid>) -> Element {
    rsx!(
        Title { "Create Owner | Roster HR" }
        Meta {
            name: "description",
            content: "Create an owner record."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full h-full max-w-[720px] p-6 flex flex-col gap-4",
                AccessGate {
                    entity: AccessEntity::Owner,
                    operation: AccessOperation::Create,
                    Breadcrumb {
                        trail: vec![
                            ("Home".to_string(), Some(Route::Home {})),
                            ("Owners".to_string(), Some(Route::OwnerList {})),
                            ("Create".to_string(), None),
                        ]
                    }
                    h1 { class: "text-2xl",
                        "Create Owner"
                    }
                    OwnerCreateForm { user_id, company_id }
                }
            }
        }
    )
}

#[component]
pub fn OwnerCreateForm(user_id: Option<Uuid>, company_id: Option<Uuid>) -> Element {
    let navigator = use_navigator();
    let mut form =
        use_signal(|| FormState::new(OwnerPayloadDto::create_defaults(user_id, company_id)));
    let mut banner = use_signal(|| None::<String>);

    let submit = move |_: MouseEvent| {
        let Some(payload) = form.write().begin_submit() else {
            return;
        };

        #[cfg(feature = "web")]
        spawn(async move {
            use crate::client::platform::{owner, PlatformError};

            match owner::create(&payload).await {
                Ok(_) => {
                    form.write().finish_submit_success();
                    navigator.push(Route::OwnerList {});
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
                label: "Start Date",
                value: form.read().values.start_date,
                error: form.read().message_for("start_date").map(str::to_string),
                oninput: move |value| form.write().update(|values| values.start_date = value),
            }
            DateInput {
                label: "End Date",
                value: form.read().values.end_date,
                error: form.read().message_for("end_date").map(str::to_string),
                oninput: move |value| form.write().update(|values| values.end_date = value),
            }
            NumberInput {
                label: "Ownership Percentage",
                value: form.read().values.ownership_percentage,
                error: form.read().message_for("ownership_percentage").map(str::to_string),
                oninput: move |value| {
                    form.write().update(|values| values.ownership_percentage = value)
                },
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
