use dioxus::prelude::*;

/// Top navigation bar.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "navbar",
            nav { class: "navbar-inner", {children} }
        }
    }
}

#[component]
pub fn NavbarBrand(children: Element) -> Element {
    rsx! {
        div { class: "navbar-brand", {children} }
    }
}

/// Group of links; links are rendered by the caller so they can use the
/// app's router.
#[component]
pub fn NavbarLinks(children: Element) -> Element {
    rsx! {
        div { class: "navbar-links", {children} }
    }
}

#[component]
pub fn NavbarSpacer() -> Element {
    rsx! {
        div { class: "navbar-spacer" }
    }
}
