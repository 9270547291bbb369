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
pub fn OwnerEdit(id: Uuid) -> Element {
    rsx!(
        Title { "Edit Owner | Roster HR" }
        Meta {
            name: "description",
            content: "Edit an owner record."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full h-full max-w-[720px] p-6 flex flex-col gap-4",
                AccessGate {
                    entity: AccessEntity::Owner,
                    operation: AccessOperation::Update,
                    Breadcrumb {
                        trail: vec![
                            ("Home".to_string(), Some(Route::Home {})),
                            ("Owners".to_string(), Some(Route::OwnerList {})),
                            ("Edit".to_string(), None),
                        ]
                    }
                    h1 { class: "text-2xl",
                        "Edit Owner"
                    }
                    OwnerEditForm { id }
                }
            }
        }
    )
}

#[component]
pub fn OwnerEditForm(id: Uuid) -> Element {
    let navigator = use_navigator();
    let mut form = use_signal(|| FormState::new(OwnerPayloadDto::default()));
    let mut seeded = use_signal(|| false);
    let mut banner = use_signal(|| None::<String>);

    // Seed the form from the stored record once it arrives
    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            crate::client::platform::owner::find_first(id).await
        });

        match &*future.read_unchecked() {
            Some(Ok(owner)) => {
                if !seeded() {
                    form.write().seed(OwnerPayloadDto::from(owner));
                    seeded.set(true);
                }
            }
            Some(Err(err)) => banner.set(Some(err.to_string())),
            None => (),
        }
    }

    let submit = move |_: MouseEvent| {
        let Some(payload) = form.write().begin_submit() else {
            return;
        };

        #[cfg(feature = "web")]
        spawn(async move {
            use crate::client::platform::{owner, PlatformError, PERMISSION_DENIED_UPDATE_MESSAGE};

            match owner::update(id, &payload).await {
                Ok(_) => {
                    form.write().finish_submit_success();
                    navigator.push(Route::OwnerList {});
                }
                Err(PlatformError::Validation(rejection)) => {
                    let mut state = form.write();
                    state.set_rejection(rejection);
                    state.finish_submit_failure();
                }
                Err(err) if err.is_permission_denied() => {
                    banner.set(Some(PERMISSION_DENIED_UPDATE_MESSAGE.to_string()));
                    form.write().finish_submit_failure();
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
                    disabled: form.read().submitting || !seeded(),
                    onclick: submit,
                    "Save"
                }
            }
        }
    )
}
