use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::routes::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./public.css") }
        section { class: "hero",
            h1 { class: "hero-title", "Book diagnostic tests at trusted healthcare centres" }
            p { class: "hero-lead",
                "Compare centres, choose a test and follow every booking from request to result."
            }
            div { class: "hero-actions",
                Link { to: Route::CustomerLogin {}, class: "button hero-primary", "Get started" }
                Link { to: Route::Services {}, class: "hero-secondary", "Browse services" }
            }
        }
        section { class: "feature-grid",
            Card {
                CardHeader {
                    CardTitle { "For patients" }
                    CardDescription { "Book, reschedule and review your tests in one place." }
                }
            }
            Card {
                CardHeader {
                    CardTitle { "For centres" }
                    CardDescription { "Manage your catalogue, bookings and patient feedback." }
                }
                CardContent {
                    Link { to: Route::AdminLogin {}, "Centre admin sign in" }
                }
            }
            Card {
                CardHeader {
                    CardTitle { "For operators" }
                    CardDescription { "Oversee every centre and audit platform activity." }
                }
                CardContent {
                    Link { to: Route::SuperadminLogin {}, "Operator sign in" }
                }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./public.css") }
        article { class: "prose",
            h1 { "About CareBook" }
            p {
                "CareBook connects patients with accredited healthcare centres. "
                "Centres publish the tests they offer, patients book them online, and "
                "every step is visible to both sides."
            }
            p {
                "Centre administrators moderate the reviews left by their patients, and "
                "platform operators keep an audit trail of every sensitive action."
            }
        }
    }
}

const SERVICES: &[(&str, &str)] = &[
    ("Blood work", "Complete blood count, lipid panels, glucose and more."),
    ("Imaging", "X-ray, ultrasound and MRI at partner centres."),
    ("Screenings", "Preventive packages tailored to age and history."),
    ("Home collection", "Sample pickup at home where centres offer it."),
];

#[component]
pub fn Services() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./public.css") }
        h1 { class: "section-title", "Services" }
        section { class: "feature-grid",
            for (name, blurb) in SERVICES {
                Card { key: "{name}",
                    CardHeader {
                        CardTitle { "{name}" }
                        CardDescription { "{blurb}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./public.css") }
        article { class: "prose",
            h1 { "Contact" }
            p { "Questions about a booking are best answered by the centre you booked with." }
            dl { class: "contact-list",
                dt { "Support" }
                dd { "support@carebook.example" }
                dt { "Partnerships" }
                dd { "centres@carebook.example" }
            }
        }
    }
}
