use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a test booking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    #[serde(alias = "canceled")]
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Unknown => "Unknown",
        }
    }

    /// Booked but not yet carried out.
    pub fn is_upcoming(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A populated reference to another backend document (user, centre).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PartyRef {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// The test a booking was made for, populated with its price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookedTest {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

/// A customer's booking of a test at a healthcare centre.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<PartyRef>,
    #[serde(default)]
    pub test: Option<BookedTest>,
    #[serde(default)]
    pub hcs: Option<PartyRef>,
    pub status: BookingStatus,
    #[serde(default)]
    pub appointment_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Price of the linked test, or zero when the test was not populated.
    pub fn price(&self) -> f64 {
        self.test.as_ref().map(|t| t.price).unwrap_or(0.0)
    }

    pub fn test_name(&self) -> &str {
        self.test.as_ref().map(|t| t.name.as_str()).unwrap_or("--")
    }

    pub fn centre_name(&self) -> &str {
        self.hcs.as_ref().map(|h| h.name.as_str()).unwrap_or("--")
    }

    pub fn customer_name(&self) -> &str {
        self.user.as_ref().map(|u| u.name.as_str()).unwrap_or("--")
    }
}
