use dioxus::prelude::*;

use crate::listing::page_window;

/// Prev / windowed page numbers / next. Pages are 1-based; hidden when a
/// single page holds everything.
#[component]
pub fn Pagination(current: usize, total: usize, on_page: EventHandler<usize>) -> Element {
    if total <= 1 {
        return rsx! {};
    }

    rsx! {
        nav {
            class: "pagination",
            aria_label: "Pagination",
            button {
                class: "page-btn",
                disabled: current <= 1,
                onclick: move |_| on_page.call(current - 1),
                "\u{2039}"
            }
            for page in page_window(current, total) {
                button {
                    key: "{page}",
                    class: if page == current { "page-btn active" } else { "page-btn" },
                    onclick: move |_| on_page.call(page),
                    "{page}"
                }
            }
            button {
                class: "page-btn",
                disabled: current >= total,
                onclick: move |_| on_page.call(current + 1),
                "\u{203a}"
            }
        }
    }
}
