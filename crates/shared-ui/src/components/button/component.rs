use dioxus::prelude::*;

/// Visual weight of a [`Button`], exposed as `data-style`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn data_style(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

/// Clickable action. A `busy` button shows a spinner and ignores clicks
/// until the work it started has finished.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] busy: bool,
    #[props(default = "button".to_string())] button_type: String,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-style", variant.data_style(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let inert = disabled || busy;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "{button_type}",
            disabled: inert,
            "aria-busy": busy,
            onclick: move |evt| {
                if let (false, Some(handler)) = (inert, &onclick) {
                    handler.call(evt);
                }
            },
            ..merged,
            if busy {
                span { class: "button-spinner", "aria-hidden": "true" }
            }
            {children}
        }
    }
}
