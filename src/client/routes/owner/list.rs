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
        owner::OwnerDto,
    },
};

/// Records shown per page
const PAGE_SIZE: u64 = 10;

#[component]
pub fn OwnerList() -> Element {
    rsx!(
        Title { "Owners | Roster HR" }
        Meta {
            name: "description",
            content: "Owner records with ownership share."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full h-full max-w-[1440px] p-6 flex flex-col gap-4",
                AccessGate {
                    entity: AccessEntity::Owner,
                    operation: AccessOperation::Read,
                    Breadcrumb {
                        trail: vec![
                            ("Home".to_string(), Some(Route::Home {})),
                            ("Owners".to_string(), None),
                        ]
                    }
                    OwnerTable { }
                }
            }
        }
    )
}

#[component]
pub fn OwnerTable() -> Element {
    let mut owners = use_signal(Vec::<OwnerDto>::new);
    let mut total_count = use_signal(|| 0u64);
    let offset = use_signal(|| 0u64);
    let mut refresh = use_signal(|| 0u32);
    let mut error = use_signal(|| None::<String>);

    // Retrieve the current page on load, on page change, and after a delete
    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            refresh();
            crate::client::platform::owner::find_many_with_count(PAGE_SIZE, offset()).await
        });

        match &*future.read_unchecked() {
            Some(Ok(page)) => {
                owners.set(page.data.clone());
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
                "Owners"
            }
            Link {
                to: Route::OwnerCreate {
                    user_id: None,
                    company_id: None,
                },
                class: "btn btn-primary flex gap-2",
                Icon {
                    width: 24,
                    height: 24,
                    icon: FaPlus
                }
                "Create Owner"
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
                        th { "Ownership %" }
                        th { "" }
                    }
                }
                tbody {
                    {owners.iter().map(|owner| {
                        let id = owner.id;
                        rsx! {
                            tr { key: "{id}",
                                td {
                                    {owner.user.as_ref().map(|user| user.email.clone()).unwrap_or_default()}
                                }
                                td {
                                    {owner.company.as_ref().map(|company| company.name.clone()).unwrap_or_default()}
                                }
                                td { "{owner.start_date}" }
                                td {
                                    {owner.end_date.map(|date| date.to_string()).unwrap_or_default()}
                                }
                                td { "{owner.ownership_percentage}" }
                                td {
                                    div { class: "flex gap-2 justify-end",
                                        Link {
                                            to: Route::OwnerEdit { id },
                                            class: "btn btn-outline btn-sm",
                                            "Edit"
                                        }
                                        button {
                                            class: "btn btn-outline btn-error btn-sm",
                                            onclick: move |_| {
                                                #[cfg(feature = "web")]
                                                spawn(async move {
                                                    match crate::client::platform::owner::delete(id).await {
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
