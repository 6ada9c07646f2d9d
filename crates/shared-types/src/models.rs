use serde::{Deserialize, Serialize};
use std::fmt;

/// Portal role controlling which dashboard area a user may enter.
///
/// - `Customer`: books tests and reviews healthcare centres.
/// - `HcsAdmin`: manages one healthcare centre (its tests, bookings, reviews).
/// - `Superadmin`: platform operator; sees every centre and the activity log.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    #[serde(alias = "customer")]
    Customer,
    #[serde(rename = "HCS Admin", alias = "HcsAdmin", alias = "hcs_admin")]
    HcsAdmin,
    #[serde(alias = "superadmin", alias = "SuperAdmin")]
    Superadmin,
}

pub const ALL_ROLES: &[Role] = &[Role::Customer, Role::HcsAdmin, Role::Superadmin];

impl Role {
    /// Parse a role string as sent by the backend. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['_', ' '], "").as_str() {
            "customer" => Some(Role::Customer),
            "hcsadmin" => Some(Role::HcsAdmin),
            "superadmin" => Some(Role::Superadmin),
            _ => None,
        }
    }

    /// Wire representation used by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::HcsAdmin => "HCS Admin",
            Role::Superadmin => "Superadmin",
        }
    }

    /// Landing page of this role's dashboard area.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Customer => "/dashboard/user",
            Role::HcsAdmin => "/dashboard/hcs",
            Role::Superadmin => "/dashboard/superadmin",
        }
    }

    /// Login surface dedicated to this role.
    pub fn login_path(&self) -> &'static str {
        match self {
            Role::Customer => "/login",
            Role::HcsAdmin => "/admin/login",
            Role::Superadmin => "/superadmin/login",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user as reported by the backend (safe to send to client).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identity {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Read-only snapshot of the identity provider's state.
///
/// `loading` is true while the session is still being resolved; in that
/// window `user` carries no meaning and must not trigger redirects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<Identity>,
    pub loading: bool,
}

impl SessionState {
    pub fn resolving() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: Identity) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Successful `POST /auth/login` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: Identity,
}
