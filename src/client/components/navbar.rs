use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{router::Route, store::session::SessionState};

#[component]
pub fn Navbar() -> Element {
    let mut session_store = use_context::<Store<SessionState>>();
    let navigator = use_navigator();

    let authenticated = session_store.read().authenticated();
    let role = session_store.read().role();

    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                Link {
                    to: Route::Home {},
                    div { class: "flex items-center gap-2",
                        p { class: "text-xl",
                            "Roster HR"
                        }
                        p { class: "text-xs",
                            "v0.1.0-Alpha.1"
                        }
                    }
                }
            }
            div {
                class: "navbar-center",
                if authenticated {
                    ul { class: "menu menu-horizontal px-1",
                        li {
                            Link { to: Route::CustomerList {}, "Customers" }
                        }
                        li {
                            Link { to: Route::EmployeeList {}, "Employees" }
                        }
                        li {
                            Link { to: Route::HrManagerList {}, "HR Managers" }
                        }
                        li {
                            Link { to: Route::OwnerList {}, "Owners" }
                        }
                    }
                }
            }
            div {
                class: "navbar-end",
                if let Some(role) = role {
                    div { class: "flex items-center gap-2",
                        span { class: "badge badge-outline", "{role}" }
                        button {
                            class: "btn btn-outline btn-sm",
                            onclick: move |_| {
                                spawn(async move {
                                    #[cfg(feature = "web")]
                                    if let Err(err) = crate::client::platform::session::logout().await {
                                        tracing::error!("Failed to log out: {err}");
                                    }

                                    session_store.set(SessionState {
                                        session: None,
                                        fetched: true,
                                    });
                                    navigator.replace(Route::Home {});
                                });
                            },
                            "Logout"
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
