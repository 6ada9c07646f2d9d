use dioxus::prelude::*;

/// Page title and subtitle. Children are actions, aligned to the right.
#[component]
pub fn PageHeader(title: String, #[props(default)] subtitle: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "page-header",
            div { class: "page-heading",
                h1 { class: "page-title", "{title}" }
                if !subtitle.is_empty() {
                    p { class: "page-subtitle", "{subtitle}" }
                }
            }
            div { class: "page-actions", {children} }
        }
    }
}
