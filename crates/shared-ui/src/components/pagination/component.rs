use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// Previous / Next controls driven by the backend's pagination metadata.
///
/// The buttons are enabled exactly when `has_prev` / `has_next` say so;
/// nothing is recomputed from the totals.
#[component]
pub fn Pagination(
    current_page: i64,
    total_pages: i64,
    total_items: i64,
    has_prev: bool,
    has_next: bool,
    on_page: EventHandler<i64>,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "pagination",
            span { class: "pagination-info",
                "{page_summary(current_page, total_pages, total_items)}"
            }
            div { class: "pagination-controls",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: disabled || !has_prev,
                    onclick: move |_| on_page.call(current_page - 1),
                    "Previous"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: disabled || !has_next,
                    onclick: move |_| on_page.call(current_page + 1),
                    "Next"
                }
            }
        }
    }
}

fn page_summary(current_page: i64, total_pages: i64, total_items: i64) -> String {
    let pages = total_pages.max(1);
    let noun = if total_items == 1 { "record" } else { "records" };
    format!("Page {current_page} of {pages} ({total_items} {noun})")
}
