use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::{router::Route, store::session::SessionState};

#[component]
pub fn App() -> Element {
    let mut session_store = use_store(SessionState::default);
    use_context_provider(|| session_store);

    // Retrieve the session once at app start; fetched is set either way so
    // pages can tell "no session" apart from "still loading"
    #[cfg(feature = "web")]
    use_future(move || async move {
        match crate::client::platform::session::current().await {
            Ok(session) => session_store.set(SessionState {
                session: Some(session),
                fetched: true,
            }),
            Err(err) => {
                tracing::error!("Failed to retrieve session: {err}");
                session_store.set(SessionState {
                    session: None,
                    fetched: true,
                });
            }
        }
    });

    rsx! {
        Router::<Route> {}
    }
}
