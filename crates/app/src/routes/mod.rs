pub mod customer;
pub mod hcs;
pub mod public;
pub mod superadmin;

mod reviews;

use crate::auth::{sign_out, use_auth};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdCalendar, LdFileText, LdLayoutDashboard, LdShield, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{
    chrome_mode, guard, required_roles_for, shows_chrome, ChromeMode, GuardDecision,
    RedirectTracker, Role,
};
use shared_ui::{
    Button, ButtonVariant, Navbar, NavbarBrand, NavbarLinks, NavbarSpacer, SkeletonRows,
};

use customer::{CustomerBookings, CustomerOverview};
use hcs::{HcsOverview, HcsReviews, HcsTests};
use public::{About, AdminLogin, Contact, CustomerLogin, Home, Services, SuperadminLogin};
use superadmin::{ActivityLogs, Centres, SuperadminOverview, SuperadminReviews};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/services")]
        Services {},
        #[route("/contact")]
        Contact {},
        #[route("/login")]
        CustomerLogin {},
        #[route("/admin/login")]
        AdminLogin {},
        #[route("/superadmin/login")]
        SuperadminLogin {},
        #[layout(RoleGate)]
            #[route("/dashboard/user")]
            CustomerOverview {},
            #[route("/dashboard/user/bookings")]
            CustomerBookings {},
            #[route("/dashboard/hcs")]
            HcsOverview {},
            #[route("/dashboard/hcs/reviews")]
            HcsReviews {},
            #[route("/dashboard/hcs/tests")]
            HcsTests {},
            #[route("/dashboard/superadmin")]
            SuperadminOverview {},
            #[route("/dashboard/superadmin/activity-logs")]
            ActivityLogs {},
            #[route("/dashboard/superadmin/reviews")]
            SuperadminReviews {},
            #[route("/dashboard/superadmin/centres")]
            Centres {},
        #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    Unmatched { segments: Vec<String> },
}

/// Outer layout: the navigation bar when the path calls for it, then the page.
#[component]
fn Shell() -> Element {
    let route: Route = use_route();
    let path = route.to_string();
    let auth = use_auth();
    let session = auth.snapshot();

    let chrome = shows_chrome(&path, &session);
    let mode = chrome_mode(&path, &session);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        if chrome {
            Navbar {
                NavbarBrand {
                    Link { to: Route::Home {}, "CareBook" }
                }
                NavbarLinks {
                    Link { to: Route::Home {}, active_class: "active", "Home" }
                    Link { to: Route::Services {}, active_class: "active", "Services" }
                    Link { to: Route::About {}, active_class: "active", "About" }
                    Link { to: Route::Contact {}, active_class: "active", "Contact" }
                }
                NavbarSpacer {}
                {match (mode, session.user.clone()) {
                    (ChromeMode::FullNav, Some(user)) => rsx! {
                        NavbarLinks {
                            Link { to: user.role.dashboard_path().to_string(), "Dashboard" }
                        }
                        span { class: "navbar-user", "{user.name}" }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| sign_out(auth),
                            "Log out"
                        }
                    },
                    _ => rsx! {
                        Link { to: Route::CustomerLogin {}, class: "button navbar-login", "Log in" }
                    },
                }}
            }
        }
        main { class: if chrome { "shell-main" } else { "shell-main bare" },
            Outlet::<Route> {}
        }
    }
}

/// Protects every dashboard route.
///
/// The decision is recomputed on each render from the current path and
/// session; a redirect is issued once per distinct target.
#[component]
fn RoleGate() -> Element {
    let route: Route = use_route();
    let path = route.to_string();
    let auth = use_auth();
    let session = auth.snapshot();

    let decision = guard(required_roles_for(&path), &session, &path);
    let mut tracker = use_signal(RedirectTracker::default);

    use_effect(use_reactive((&decision,), move |(decision,)| {
        if let Some(target) = tracker.write().observe(&decision) {
            tracing::info!(%target, "Route guard redirect");
            navigator().replace(target);
        }
    }));

    match decision {
        GuardDecision::ShowLoading => rsx! {
            div { class: "gate-loading",
                SkeletonRows { rows: 4 }
            }
        },
        GuardDecision::RedirectTo(_) => rsx! {
            div { class: "gate-loading",
                p { "Redirecting..." }
            }
        },
        GuardDecision::RenderContent => rsx! {
            div { class: "dashboard-layout",
                DashboardNav { role: session.role() }
                section { class: "dashboard-content",
                    Outlet::<Route> {}
                }
            }
        },
    }
}

#[component]
fn DashboardNav(role: Option<Role>) -> Element {
    let auth = use_auth();
    let name = auth.user().map(|u| u.name).unwrap_or_default();

    rsx! {
        aside { class: "dashboard-nav",
            div { class: "dashboard-nav-brand",
                span { class: "dashboard-nav-title", "CareBook" }
                if let Some(role) = role {
                    span { class: "dashboard-nav-role", "{role}" }
                }
            }
            nav { class: "dashboard-nav-links",
                {match role {
                    Some(Role::Customer) => rsx! {
                        NavItem { to: Route::CustomerOverview {}, label: "Overview",
                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                        }
                        NavItem { to: Route::CustomerBookings {}, label: "My bookings",
                            Icon::<LdCalendar> { icon: LdCalendar, width: 16, height: 16 }
                        }
                    },
                    Some(Role::HcsAdmin) => rsx! {
                        NavItem { to: Route::HcsOverview {}, label: "Overview",
                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                        }
                        NavItem { to: Route::HcsTests {}, label: "Tests",
                            Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                        }
                        NavItem { to: Route::HcsReviews {}, label: "Reviews",
                            Icon::<LdBookOpen> { icon: LdBookOpen, width: 16, height: 16 }
                        }
                    },
                    Some(Role::Superadmin) => rsx! {
                        NavItem { to: Route::SuperadminOverview {}, label: "Overview",
                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                        }
                        NavItem { to: Route::Centres {}, label: "Centres",
                            Icon::<LdUsers> { icon: LdUsers, width: 16, height: 16 }
                        }
                        NavItem { to: Route::SuperadminReviews {}, label: "Reviews",
                            Icon::<LdBookOpen> { icon: LdBookOpen, width: 16, height: 16 }
                        }
                        NavItem { to: Route::ActivityLogs {}, label: "Activity logs",
                            Icon::<LdShield> { icon: LdShield, width: 16, height: 16 }
                        }
                    },
                    None => rsx! {},
                }}
            }
            div { class: "dashboard-nav-footer",
                span { class: "dashboard-nav-user", "{name}" }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| sign_out(auth),
                    "Log out"
                }
            }
        }
    }
}

#[component]
fn NavItem(to: Route, label: String, children: Element) -> Element {
    rsx! {
        Link { to, class: "dashboard-nav-item", active_class: "active",
            {children}
            span { "{label}" }
        }
    }
}

/// Any path not listed above goes back to the home page.
#[component]
fn Unmatched(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    use_effect(move || {
        tracing::info!(path = %path, "Unknown route, redirecting home");
        navigator().replace(Route::Home {});
    });
    rsx! {}
}
