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
        hr_manager::HrManagerDto,
    },
};

/// Records shown per page
const PAGE_SIZE: u64 = 10;

#[component]
pub fn HrManagerList() -> Element {
    rsx!(
        Title { "HR Managers | Roster HR" }
        Meta {
            name: "description",
            content: "HR manager records with specialization and experience."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full h-full max-w-[1440px] p-6 flex flex-col gap-4",
                AccessGate {
                    entity: AccessEntity::HrManager,
                    operation: AccessOperation::Read,
                    Breadcrumb {
                        trail: vec![
                            ("Home".to_string(), Some(Route::Home {})),
                            ("HR Managers".to_string(), None),
                        ]
                    }
                    HrManagerTable { }
                }
            }
        }
    )
}

#[component]
pub fn HrManagerTable() -> Element {
    let mut hr_managers = use_signal(Vec::<HrManagerDto>::new);
    let mut total_count = use_signal(|| 0u64);
    let offset = use_signal(|| 0u64);
    let mut refresh = use_signal(|| 0u32);
    let mut error = use_signal(|| None::<String>);

    // Retrieve the current page on load, on page change, and after a delete
    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            refresh();
            crate::client::platform::hr_manager::find_many_with_count(PAGE_SIZE, offset()).await
        });

        match &*future.read_unchecked() {
            Some(Ok(page)) => {
                hr_managers.set(page.data.clone());
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
                "HR Managers"
            }
            Link {
                to: Route::HrManagerCreate {
                    user_id: None,
                    company_id: None,
                },
                class: "btn btn-primary flex gap-2",
                Icon {
                    width: 24,
                    height: 24,
                    icon: FaPlus
                }
                "Create HR Manager"
            }
        }
        div { class: "overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "User" }
                        th { "Company" }
                        th { "Start Date" }
                        th { "End Date" }
                        th { "Experience" }
                        th { "Specialization" }
                        th { "" }
                    }
                }
                tbody {
                    {hr_managers.iter().map(|hr_manager| {
                        let id = hr_manager.id;
                        rsx! {
                            tr { key: "{id}",
                                td {
                                    {hr_manager.user.as_ref().map(|user| user.email.clone()).unwrap_or_default()}
                                }
                                td {
                                    {hr_manager.company.as_ref().map(|company| company.name.clone()).unwrap_or_default()}
                                }
                                td { "{hr_manager.start_date}" }
                                td {
                                    {hr_manager.end_date.map(|date| date.to_string()).unwrap_or_default()}
                                }
                                td { "{hr_manager.experience}" }
                                td { "{hr_manager.specialization}" }
                                td {
                                    div { class: "flex gap-2 justify-end",
                                        Link {
                                            to: Route::HrManagerEdit { id },
                                            class: "btn btn-outline btn-sm",
                                            "Edit"
                                        }
                                        button {
                                            class: "btn btn-outline btn-error btn-sm",
                                            onclick: move |_| {
                                                #[cfg(feature = "web")]
                                                spawn(async move {
                                                    match crate::client::platform::hr_manager::delete(id).await {
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
