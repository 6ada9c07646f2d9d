use dioxus::prelude::*;

/// Headline number on a dashboard.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] hint: String,
    #[props(default)] icon: Option<Element>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card",
            div { class: "stat-card-top",
                span { class: "stat-card-label", "{label}" }
                if let Some(icon) = icon {
                    span { class: "stat-card-icon", {icon} }
                }
            }
            span { class: "stat-card-value", "{value}" }
            if !hint.is_empty() {
                span { class: "stat-card-hint", "{hint}" }
            }
        }
    }
}

/// Responsive grid of stat cards.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        div { class: "stat-grid", {children} }
    }
}
