use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::booking::PartyRef;
use crate::models::Role;

/// A diagnostic test offered by a healthcare centre.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthTest {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub hcs: Option<PartyRef>,
    pub created_at: DateTime<Utc>,
}

/// A registered portal account as listed by `GET /users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortalUser {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    /// Kept as the raw backend string so one odd record cannot fail the list.
    #[serde(default)]
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl PortalUser {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

/// A healthcare centre (tenant) as listed by `GET /hcs`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthcareCenter {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl HealthcareCenter {
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("active")
    }
}
