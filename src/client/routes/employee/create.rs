use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use uuid::Uuid;

use crate::{
    client::{
        components::{
            form::{CompanySelect, DateInput, NumberInput, TextInput, UserSelect},
            AccessGate, Breadcrumb, ErrorBanner, Page,
        },
        form::FormState,
        router::Route,
    },
    model::{
        access::{AccessEntity, AccessOperation},
        employee::EmployeePayloadDto,
    },
};

#[component]
pub fn EmployeeCreate(user_id: Option<Uuid>, company_id: Option<Uuid>) -> Element {
    rsx!(
        Title { "Create Employee | Roster HR" }
        Meta {
            name: "description",
            content: "Create an employee record."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full h-full max-w-[720px] p-6 flex flex-col gap-4",
                AccessGate {
                    entity: AccessEntity::Employee,
                    operation: AccessOperation::Create,
                    Breadcrumb {
                        trail: vec![
                            ("Home".to_string(), Some(Route::Home {})),
                            ("Employees".to_string(), Some(Route::EmployeeList {})),
                            ("Create".to_string(), None),
                        ]
                    }
                    h1 { class: "text-2xl",
                        "Create Employee"
                    }
                    EmployeeCreateForm { user_id, company_id }
                }
            }
        }
    )
}

#[component]
pub fn EmployeeCreateForm(user_id: Option<Uuid>, company_id: Option<Uuid>) -> Element {
    let navigator = use_navigator();
    let mut form = use_signal(|| {
        FormState::new(EmployeePayloadDto::create_defaults(user_id, company_id))
    });
    let mut banner = use_signal(|| None::<String>);

    let submit = move |_: MouseEvent| {
        let Some(payload) = form.write().begin_submit() else {
            return;
        };

        #[cfg(feature = "web")]
        spawn(async move {
            use crate::client::platform::{employee, PlatformError};

            match employee::create(&payload).await {
                Ok(_) => {
                    form.write().finish_submit_success();
                    navigator.push(Route::EmployeeList {});
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
            TextInput {
                label: "Position",
                value: form.read().values.position.clone(),
                error: form.read().message_for("position").map(str::to_string),
                oninput: move |value| form.write().update(|values| values.position = value),
            }
            NumberInput {
                label: "Salary",
                value: form.read().values.salary,
                error: form.read().message_for("salary").map(str::to_string),
                oninput: move |value| form.write().update(|values| values.salary = value),
            }
            DateInput {
                label: "Hire Date",
                value: form.read().values.hire_date,
                error: form.read().message_for("hire_date").map(str::to_string),
                oninput: move |value| form.write().update(|values| values.hire_date = value),
            }
            DateInput {
                label: "Termination Date",
                value: form.read().values.termination_date,
                error: form.read().message_for("termination_date").map(str::to_string),
                oninput: move |value| form.write().update(|values| values.termination_date = value),
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
