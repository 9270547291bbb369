use dioxus::prelude::*;

/// Previous/next controls for a paged table
///
/// The parent owns the offset signal; moving between pages rewrites it,
/// which re-runs the parent's fetch.
#[component]
pub fn Pagination(offset: Signal<u64>, total_count: Signal<u64>, page_size: u64) -> Element {
    let mut offset = offset;

    let page = offset() / page_size + 1;
    let pages = total_count().div_ceil(page_size).max(1);

    rsx!(
        div { class: "flex justify-end items-center gap-2",
            button {
                class: "btn btn-outline btn-sm",
                disabled: offset() == 0,
                onclick: move |_| {
                    let previous = offset().saturating_sub(page_size);
                    offset.set(previous);
                },
                "Previous"
            }
            span { class: "text-sm",
                "Page {page} of {pages}"
            }
            button {
                class: "btn btn-outline btn-sm",
                disabled: offset() + page_size >= total_count(),
                onclick: move |_| offset.set(offset() + page_size),
                "Next"
            }
        }
    )
}
