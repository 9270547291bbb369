use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::session::SessionState;
use crate::config::APP_CONFIG;

#[component]
pub fn RecordLinks() -> Element {
    let session_store = use_context::<Store<SessionState>>();

    rsx!(
        ul { class: "flex flex-wrap justify-center gap-2",
            if session_store.read().authenticated() {
                li {
                    Link {
                        to: Route::CustomerList {},
                        class: "btn btn-primary w-36",
                        "Customers"
                    }
                }
                li {
                    Link {
                        to: Route::EmployeeList {},
                        class: "btn btn-primary w-36",
                        "Employees"
                    }
                }
                li {
                    Link {
                        to: Route::HrManagerList {},
                        class: "btn btn-primary w-36",
                        "HR Managers"
                    }
                }
                li {
                    Link {
                        to: Route::OwnerList {},
                        class: "btn btn-primary w-36",
                        "Owners"
                    }
                }
                li {
                    a { href: "/api/docs",
                        button {
                            class: "btn btn-secondary w-36",
                            "API Docs"
                        }
                    }
                }
            } else if session_store.read().fetched {
                li {
                    p {
                        "Sign in to manage records."
                    }
                }
            }
        }
    )
}

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Roster HR Home" }
        Meta {
            name: "description",
            content: "HR management platform for companies, their staff, and their customers."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                div { class: "flex items-center gap-2",
                    p { class: "text-2xl",
                        "{APP_CONFIG.application_name}"
                    }
                    p {
                        "v0.1.0-Alpha.1"
                    }
                }
                div {
                    RecordLinks { }
                }
                div { class: "flex flex-col gap-2 px-4 max-w-256",
                    p { class: "font-bold text-center",
                        "Role-based record management for every {APP_CONFIG.tenant_name}"
                    }
                    p {
                        "{APP_CONFIG.tenant_name} roles:"
                    }
                    ul { class: "list-disc pl-6",
                        {APP_CONFIG.tenant_roles.iter().map(|role| rsx! {
                            li { key: "{role}", "{role}" }
                        })}
                    }
                    p {
                        "Customer roles:"
                    }
                    ul { class: "list-disc pl-6",
                        {APP_CONFIG.customer_roles.iter().map(|role| rsx! {
                            li { key: "{role}", "{role}" }
                        })}
                    }
                    p {
                        "Roles with owner-level management:"
                    }
                    ul { class: "list-disc pl-6",
                        {APP_CONFIG.owner_roles.iter().map(|role| rsx! {
                            li { key: "{role}", "{role}" }
                        })}
                    }
                    p {
                        "Owner-level roles can:"
                    }
                    ul { class: "list-disc pl-6",
                        {APP_CONFIG.owner_abilities.iter().map(|ability| rsx! {
                            li { key: "{ability}", "{ability}" }
                        })}
                    }
                    p {
                        "Customers can:"
                    }
                    ul { class: "list-disc pl-6",
                        {APP_CONFIG.customer_abilities.iter().map(|ability| rsx! {
                            li { key: "{ability}", "{ability}" }
                        })}
                    }
                    p {
                        "Enabled add-ons:"
                    }
                    ul { class: "list-disc pl-6",
                        {APP_CONFIG.add_ons.iter().map(|add_on| rsx! {
                            li { key: "{add_on}", "{add_on}" }
                        })}
                    }
                }
            }
        }
    )
}
