use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant};

/// Failed-load banner with the backend's message and an optional retry.
#[component]
pub fn LoadError(message: String, #[props(default)] on_retry: Option<EventHandler<()>>) -> Element {
    rsx! {
        div { class: "load-error", role: "alert",
            span { "{message}" }
            if let Some(retry) = on_retry {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| retry.call(()),
                    "Retry"
                }
            }
        }
    }
}
