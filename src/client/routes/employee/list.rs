use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{AccessGate, Breadcrumb, ErrorBanner, Page, Pagination},
        router::Route,
    },
    model::{
        access::{AccessEntity, AccessOperation},
        employee::EmployeeDto,
    },
};

/// Records shown per page
const PAGE_SIZE: u64 = 10;

#[component]
pub fn EmployeeList() -> Element {
    rsx!(
        Title { "Employees | Roster HR" }
        Meta {
            name: "description",
            content: "Employee records with position and salary."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full h-full max-w-[1440px] p-6 flex flex-col gap-4",
                AccessGate {
                    entity: AccessEntity::Employee,
                    operation: AccessOperation::Read,
                    Breadcrumb {
                        trail: vec![
                            ("Home".to_string(), Some(Route::Home {})),
                            ("Employees".to_string(), None),
                        ]
                    }
                    EmployeeTable { }
                }
            }
        }
    )
}

#[component]
pub fn EmployeeTable() -> Element {
    let mut employees = use_signal(Vec::<EmployeeDto>::new);
    let mut total_count = use_signal(|| 0u64);
    let offset = use_signal(|| 0u64);
    let mut refresh = use_signal(|| 0u32);
    let mut error = use_signal(|| None::<String>);

    // Retrieve the current page on load, on page change, and after a delete
    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            refresh();
            crate::client::platform::employee::find_many_with_count(PAGE_SIZE, offset()).await
        });

        match &*future.read_unchecked() {
            Some(Ok(page)) => {
                employees.set(page.data.clone());
                total_count.set(page.total_count);
            }
            Some(Err(err)) => error.set(Some(err.to_string())),
            None => (),
        }
    }

    rsx!(
        ErrorBanner { message: error() }
        div { class: "flex justify-between items-center",
            h1 { class: "text-2xl",
                "Employees"
            }
            Link {
                to: Route::EmployeeCreate {
                    user_id: None,
                    company_id: None,
                },
                class: "btn btn-primary flex gap-2",
                Icon {
                    width: 24,
                    height: 24,
                    icon: FaPlus
                }
                "Create Employee"
            }
        }
        div { class: "overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "User" }
                        th { "Company" }
                        th { "Position" }
                        th { "Salary" }
                        th { "Hire Date" }
                        th { "Termination Date" }
                        th { "" }
                    }
                }
                tbody {
                    {employees.iter().map(|employee| {
                        let id = employee.id;
                        rsx! {
                            tr { key: "{id}",
                                td {
                                    {employee.user.as_ref().map(|user| user.email.clone()).unwrap_or_default()}
                                }
                                td {
                                    {employee.company.as_ref().map(|company| company.name.clone()).unwrap_or_default()}
                                }
                                td { "{employee.position}" }
                                td { "{employee.salary}" }
                                td { "{employee.hire_date}" }
                                td {
                                    {employee.termination_date.map(|date| date.to_string()).unwrap_or_default()}
                                }
                                td {
                                    div { class: "flex gap-2 justify-end",
                                        Link {
                                            to: Route::EmployeeEdit { id },
                                            class: "btn btn-outline btn-sm",
                                            "Edit"
                                        }
                                        button {
                                            class: "btn btn-outline btn-error btn-sm",
                                            onclick: move |_| {
                                                #[cfg(feature = "web")]
                                                spawn(async move {
                                                    match crate::client::platform::employee::delete(id).await {
                                                        Ok(()) => refresh += 1,
                                                        Err(err) => error.set(Some(err.to_string())),
                                                    }
                                                });
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    })}
                }
            }
        }
        Pagination { offset, total_count, page_size: PAGE_SIZE }
    )
}
