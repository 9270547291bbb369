use dioxus::prelude::*;

use crate::{
    client::{router::Route, store::session::SessionState},
    model::access::{AccessEntity, AccessOperation},
};

/// Wraps a record screen behind a server-side access check
///
/// Visitors without a session are sent back to the landing page, and the
/// children only render once the API confirms the session's role may
/// perform the given operation on the given entity. A denied check also
/// redirects to the landing page.
#[component]
pub fn AccessGate(entity: AccessEntity, operation: AccessOperation, children: Element) -> Element {
    let session_store = use_context::<Store<SessionState>>();
    let navigator = use_navigator();
    let mut access = use_signal(|| None::<Result<bool, String>>);

    // Send visitors without a session back to the landing page once the
    // session fetch settles
    use_effect(move || {
        let session = session_store.read();
        if session.fetched && !session.authenticated() {
            navigator.replace(Route::Home {});
        }
    });

    // Leave the page when the access check comes back denied
    use_effect(move || {
        if let Some(Ok(false)) = &*access.read() {
            navigator.replace(Route::Home {});
        }
    });

    // Check access for this screen on component load
    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            crate::client::platform::session::check_access(entity, operation).await
        });

        match &*future.read_unchecked() {
            Some(Ok(result)) => access.set(Some(Ok(result.allowed))),
            Some(Err(err)) => access.set(Some(Err(err.to_string()))),
            None => (),
        }
    }

    let rendered = match &*access.read() {
        Some(Ok(true)) => rsx!({ children }),
        Some(Err(err)) => rsx!(
            div { role: "alert", class: "alert alert-error",
                span { "{err}" }
            }
        ),
        _ => rsx!(
            div { class: "flex flex-col gap-2",
                div { class: "skeleton h-8 w-full" }
                div { class: "skeleton h-32 w-full" }
            }
        ),
    };
    rendered
}
