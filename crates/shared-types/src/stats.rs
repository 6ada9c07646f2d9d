//! Dashboard metric derivation.
//!
//! Each dashboard names the collections it needs ([`DashboardReport::PLAN`])
//! and derives its whole stats record from them in one pass
//! ([`DashboardReport::derive`]). Nothing here performs I/O.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::booking::{Booking, BookingStatus};
use crate::directory::{HealthTest, HealthcareCenter, PortalUser};
use crate::models::Role;

/// Number of calendar months in every trend series.
pub const TREND_MONTHS: usize = 6;

/// `numerator / denominator`, or `0.0` when the denominator is zero.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Percentage in `0.0..=100.0`, rounded to one decimal, guarded like [`ratio`].
pub fn percentage(part: usize, whole: usize) -> f64 {
    (ratio(part as f64, whole as f64) * 1000.0).round() / 10.0
}

/// One calendar month of a trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthBucket {
    /// Short month name, e.g. `Jan`.
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub count: usize,
}

/// Count `timestamps` into the six calendar months ending with `now`'s month.
///
/// Always returns [`TREND_MONTHS`] buckets, oldest first, with no gaps.
/// Timestamps outside the window are ignored.
pub fn monthly_trend<I>(timestamps: I, now: DateTime<Utc>) -> Vec<MonthBucket>
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    let current = now.year() * 12 + now.month0() as i32;
    let mut buckets: Vec<MonthBucket> = (0..TREND_MONTHS as i32)
        .rev()
        .map(|back| {
            let index = current - back;
            let year = index.div_euclid(12);
            let month = index.rem_euclid(12) as u32 + 1;
            let label = NaiveDate::from_ymd_opt(year, month, 1)
                .map(|d| d.format("%b").to_string())
                .unwrap_or_default();
            MonthBucket {
                label,
                year,
                month,
                count: 0,
            }
        })
        .collect();

    for ts in timestamps {
        let index = ts.year() * 12 + ts.month0() as i32;
        let offset = index - (current - TREND_MONTHS as i32 + 1);
        if (0..TREND_MONTHS as i32).contains(&offset) {
            buckets[offset as usize].count += 1;
        }
    }
    buckets
}

/// Booking totals by status plus completed revenue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCounts {
    pub total_bookings: usize,
    pub pending_bookings: usize,
    pub confirmed_bookings: usize,
    pub completed_bookings: usize,
    pub cancelled_bookings: usize,
    /// Sum of linked test prices over completed bookings.
    pub revenue: f64,
}

impl BookingCounts {
    pub fn completion_rate(&self) -> f64 {
        percentage(self.completed_bookings, self.total_bookings)
    }

    pub fn average_revenue_per_completed(&self) -> f64 {
        ratio(self.revenue, self.completed_bookings as f64)
    }
}

pub fn count_bookings<'a, I>(bookings: I) -> BookingCounts
where
    I: IntoIterator<Item = &'a Booking>,
{
    let mut counts = BookingCounts::default();
    for booking in bookings {
        counts.total_bookings += 1;
        match booking.status {
            BookingStatus::Pending => counts.pending_bookings += 1,
            BookingStatus::Confirmed => counts.confirmed_bookings += 1,
            BookingStatus::Completed => {
                counts.completed_bookings += 1;
                counts.revenue += booking.price();
            }
            BookingStatus::Cancelled => counts.cancelled_bookings += 1,
            BookingStatus::Unknown => {}
        }
    }
    counts
}

/// A backend collection a dashboard can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    Bookings,
    Tests,
    Users,
    Centers,
}

impl Collection {
    /// Backend path, relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Collection::Bookings => "/bookings",
            Collection::Tests => "/tests",
            Collection::Users => "/users",
            Collection::Centers => "/hcs",
        }
    }
}

/// The fetched collections a report derives from. Collections outside a
/// report's plan stay empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collections {
    pub bookings: Vec<Booking>,
    pub tests: Vec<HealthTest>,
    pub users: Vec<PortalUser>,
    pub centers: Vec<HealthcareCenter>,
}

/// A dashboard's fetch plan and metric derivation.
pub trait DashboardReport: Sized {
    const PLAN: &'static [Collection];

    fn derive(collections: &Collections, now: DateTime<Utc>) -> Self;
}

/// Bookings-per-test row used by the HCS dashboard and tests page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestUsage {
    pub test_id: String,
    pub name: String,
    pub price: f64,
    pub bookings: usize,
}

/// Every test with the number of bookings made for it, most booked first.
pub fn test_usage(tests: &[HealthTest], bookings: &[Booking]) -> Vec<TestUsage> {
    let mut per_test: HashMap<&str, usize> = HashMap::new();
    for booking in bookings {
        if let Some(test) = &booking.test {
            *per_test.entry(test.id.as_str()).or_default() += 1;
        }
    }
    let mut usage: Vec<TestUsage> = tests
        .iter()
        .map(|t| TestUsage {
            test_id: t.id.clone(),
            name: t.name.clone(),
            price: t.price,
            bookings: per_test.get(t.id.as_str()).copied().unwrap_or(0),
        })
        .collect();
    usage.sort_by(|a, b| b.bookings.cmp(&a.bookings).then_with(|| a.name.cmp(&b.name)));
    usage
}

/// Bookings and revenue for one healthcare centre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CentreSummary {
    pub centre: HealthcareCenter,
    pub counts: BookingCounts,
}

pub fn centre_summaries(centers: &[HealthcareCenter], bookings: &[Booking]) -> Vec<CentreSummary> {
    centers
        .iter()
        .map(|centre| {
            let own = bookings
                .iter()
                .filter(|b| b.hcs.as_ref().is_some_and(|h| h.id == centre.id));
            CentreSummary {
                centre: centre.clone(),
                counts: count_bookings(own),
            }
        })
        .collect()
}

/// Customer dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerStats {
    pub counts: BookingCounts,
    pub upcoming_bookings: usize,
    pub completion_rate: f64,
    pub booking_trend: Vec<MonthBucket>,
    pub recent_bookings: Vec<Booking>,
}

impl DashboardReport for CustomerStats {
    const PLAN: &'static [Collection] = &[Collection::Bookings];

    fn derive(c: &Collections, now: DateTime<Utc>) -> Self {
        let counts = count_bookings(&c.bookings);
        let mut recent = c.bookings.clone();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(5);
        Self {
            upcoming_bookings: c.bookings.iter().filter(|b| b.status.is_upcoming()).count(),
            completion_rate: counts.completion_rate(),
            booking_trend: monthly_trend(c.bookings.iter().map(|b| b.created_at), now),
            recent_bookings: recent,
            counts,
        }
    }
}

/// Healthcare-centre admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HcsStats {
    pub counts: BookingCounts,
    pub total_tests: usize,
    pub completion_rate: f64,
    pub average_revenue_per_completed: f64,
    pub booking_trend: Vec<MonthBucket>,
    pub top_tests: Vec<TestUsage>,
}

impl DashboardReport for HcsStats {
    const PLAN: &'static [Collection] = &[Collection::Bookings, Collection::Tests];

    fn derive(c: &Collections, now: DateTime<Utc>) -> Self {
        let counts = count_bookings(&c.bookings);
        let mut top_tests = test_usage(&c.tests, &c.bookings);
        top_tests.truncate(5);
        Self {
            total_tests: c.tests.len(),
            completion_rate: counts.completion_rate(),
            average_revenue_per_completed: counts.average_revenue_per_completed(),
            booking_trend: monthly_trend(c.bookings.iter().map(|b| b.created_at), now),
            top_tests,
            counts,
        }
    }
}

/// Platform-wide superadmin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperadminStats {
    pub counts: BookingCounts,
    pub total_users: usize,
    pub customers: usize,
    pub hcs_admins: usize,
    pub total_centers: usize,
    pub total_tests: usize,
    pub completion_rate: f64,
    pub average_revenue_per_completed: f64,
    pub booking_trend: Vec<MonthBucket>,
    pub user_trend: Vec<MonthBucket>,
}

impl DashboardReport for SuperadminStats {
    const PLAN: &'static [Collection] = &[
        Collection::Bookings,
        Collection::Tests,
        Collection::Users,
        Collection::Centers,
    ];

    fn derive(c: &Collections, now: DateTime<Utc>) -> Self {
        let counts = count_bookings(&c.bookings);
        let with_role = |role: Role| c.users.iter().filter(|u| u.role() == Some(role)).count();
        Self {
            total_users: c.users.len(),
            customers: with_role(Role::Customer),
            hcs_admins: with_role(Role::HcsAdmin),
            total_centers: c.centers.len(),
            total_tests: c.tests.len(),
            completion_rate: counts.completion_rate(),
            average_revenue_per_completed: counts.average_revenue_per_completed(),
            booking_trend: monthly_trend(c.bookings.iter().map(|b| b.created_at), now),
            user_trend: monthly_trend(c.users.iter().map(|u| u.created_at), now),
            counts,
        }
    }
}
