//! Route protection and chrome selection.
//!
//! Both are pure functions of the requested path and a [`SessionState`]
//! snapshot, recomputed on every render.

use crate::models::{Role, SessionState};

pub const HOME_PATH: &str = "/";
pub const CUSTOMER_LOGIN_PATH: &str = "/login";
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";
pub const SUPERADMIN_LOGIN_PATH: &str = "/superadmin/login";

/// Paths anyone may visit, signed in or not.
pub const PUBLIC_PATHS: &[&str] = &[
    HOME_PATH,
    "/about",
    "/services",
    "/contact",
    CUSTOMER_LOGIN_PATH,
    ADMIN_LOGIN_PATH,
    SUPERADMIN_LOGIN_PATH,
];

/// Prefixes whose pages never get the public navigation bar for customers.
const STAFF_PREFIXES: &[&str] = &[
    "/admin",
    "/superadmin",
    "/dashboard/hcs",
    "/dashboard/superadmin",
];

const CUSTOMER_AREA: &str = "/dashboard/user";
const HCS_AREA: &str = "/dashboard/hcs";
const SUPERADMIN_AREA: &str = "/dashboard/superadmin";

/// Outcome of [`guard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    RenderContent,
    RedirectTo(String),
    ShowLoading,
}

/// Decide what a protected route renders.
///
/// `required` empty or `None` means any signed-in identity is enough.
pub fn guard(required: Option<&[Role]>, session: &SessionState, requested_path: &str) -> GuardDecision {
    if session.loading {
        return GuardDecision::ShowLoading;
    }
    let Some(role) = session.role() else {
        return GuardDecision::RedirectTo(login_path_for(requested_path).to_string());
    };
    match required {
        Some(roles) if !roles.is_empty() && !roles.contains(&role) => {
            GuardDecision::RedirectTo(HOME_PATH.to_string())
        }
        _ => GuardDecision::RenderContent,
    }
}

/// Login surface for an unauthenticated request, by path prefix alone.
pub fn login_path_for(requested_path: &str) -> &'static str {
    if requested_path.starts_with(SUPERADMIN_AREA) {
        SUPERADMIN_LOGIN_PATH
    } else if requested_path.starts_with(HCS_AREA) {
        ADMIN_LOGIN_PATH
    } else {
        CUSTOMER_LOGIN_PATH
    }
}

/// Roles allowed into the dashboard area containing `path`.
pub fn required_roles_for(path: &str) -> Option<&'static [Role]> {
    if path.starts_with(CUSTOMER_AREA) {
        Some(&[Role::Customer])
    } else if path.starts_with(HCS_AREA) {
        Some(&[Role::HcsAdmin])
    } else if path.starts_with(SUPERADMIN_AREA) {
        Some(&[Role::Superadmin])
    } else {
        None
    }
}

pub fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

/// Whether the navigation bar is rendered around `path`.
pub fn shows_chrome(path: &str, session: &SessionState) -> bool {
    if is_public(path) || path.starts_with(CUSTOMER_AREA) {
        return true;
    }
    let staff_area = STAFF_PREFIXES.iter().any(|p| path.starts_with(p));
    !staff_area && session.role() == Some(Role::Customer)
}

/// What the navigation bar offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeMode {
    FullNav,
    /// Only a "log in" affordance.
    LoginOnly,
}

pub fn chrome_mode(path: &str, session: &SessionState) -> ChromeMode {
    if !session.is_authenticated() && !path.starts_with("/dashboard") {
        ChromeMode::LoginOnly
    } else {
        ChromeMode::FullNav
    }
}

/// Makes redirects idempotent: a given redirect target is navigated to once
/// until the decision changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectTracker {
    last: Option<String>,
}

impl RedirectTracker {
    /// Returns the path to navigate to, or `None` if nothing should happen.
    pub fn observe(&mut self, decision: &GuardDecision) -> Option<String> {
        match decision {
            GuardDecision::RedirectTo(target) => {
                if self.last.as_deref() == Some(target.as_str()) {
                    None
                } else {
                    self.last = Some(target.clone());
                    Some(target.clone())
                }
            }
            _ => {
                self.last = None;
                None
            }
        }
    }
}
