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
        customer::CustomerDto,
    },
};

/// Records shown per page
const PAGE_SIZE: u64 = 10;

#[component]
pub fn CustomerList() -> Element {
    rsx!(
        Title { "Customers | Roster HR" }
        Meta {
            name: "description",
            content: "Customer records with purchase history."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full h-full max-w-[1440px] p-6 flex flex-col gap-4",
                AccessGate {
                    entity: AccessEntity::Customer,
                    operation: AccessOperation::Read,
                    Breadcrumb {
                        trail: vec![
                            ("Home".to_string(), Some(Route::Home {})),
                            ("Customers".to_string(), None),
                        ]
                    }
                    CustomerTable { }
                }
            }
        }
    )
}

#[component]
pub fn CustomerTable() -> Element {
    let mut customers = use_signal(Vec::<CustomerDto>::new);
    let mut total_count = use_signal(|| 0u64);
    let offset = use_signal(|| 0u64);
    let mut refresh = use_signal(|| 0u32);
    let mut error = use_signal(|| None::<String>);

    // Retrieve the current page on load, on page change, and after a delete
    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            refresh();
            crate::client::platform::customer::find_many_with_count(PAGE_SIZE, offset()).await
        });

        match &*future.read_unchecked() {
            Some(Ok(page)) => {
                customers.set(page.data.clone());
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
                "Customers"
            }
            Link {
                to: Route::CustomerCreate {
                    user_id: None,
                    company_id: None,
                },
                class: "btn btn-primary flex gap-2",
                Icon {
                    width: 24,
                    height: 24,
                    icon: FaPlus
                }
                "Create Customer"
            }
        }
        div { class: "overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "User" }
                        th { "Company" }
                        th { "Registration Date" }
                        th { "Last Purchase" }
                        th { "Total Purchases" }
                        th { "Total Spent" }
                        th { "" }
                    }
                }
                tbody {
                    {customers.iter().map(|customer| {
                        let id = customer.id;
                        rsx! {
                            tr { key: "{id}",
                                td {
                                    {customer.user.as_ref().map(|user| user.email.clone()).unwrap_or_default()}
                                }
                                td {
                                    {customer.company.as_ref().map(|company| company.name.clone()).unwrap_or_default()}
                                }
                                td { "{customer.registration_date}" }
                                td {
                                    {customer.last_purchase_date.map(|date| date.to_string()).unwrap_or_default()}
                                }
                                td { "{customer.total_purchases}" }
                                td { "{customer.total_spent}" }
                                td {
                                    div { class: "flex gap-2 justify-end",
                                        Link {
                                            to: Route::CustomerEdit { id },
                                            class: "btn btn-outline btn-sm",
                                            "Edit"
                                        }
                                        button {
                                            class: "btn btn-outline btn-error btn-sm",
                                            onclick: move |_| {
                                                #[cfg(feature = "web")]
                                                spawn(async move {
                                                    match crate::client::platform::customer::delete(id).await {
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
