//! Display formatting shared by the portal pages.
use chrono::{DateTime, Utc};
use shared_types::{BookingStatus, MonthBucket, ReviewStatus, Severity};
use shared_ui::{Bar, BadgeVariant};

/// `1234.5` → `"$1,234.50"`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// `"Oct 5, 2026"`.
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// `"Oct 5, 2026 9:05 AM"`.
pub fn format_datetime(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y %-I:%M %p").to_string()
}

pub fn booking_status_variant(status: BookingStatus) -> BadgeVariant {
    match status {
        BookingStatus::Pending => BadgeVariant::Warning,
        BookingStatus::Confirmed => BadgeVariant::Info,
        BookingStatus::Completed => BadgeVariant::Success,
        BookingStatus::Cancelled => BadgeVariant::Danger,
        BookingStatus::Unknown => BadgeVariant::Neutral,
    }
}

pub fn review_status_variant(status: ReviewStatus) -> BadgeVariant {
    match status {
        ReviewStatus::Pending => BadgeVariant::Warning,
        ReviewStatus::Approved => BadgeVariant::Success,
        ReviewStatus::Rejected => BadgeVariant::Danger,
    }
}

pub fn severity_variant(severity: Severity) -> BadgeVariant {
    match severity {
        Severity::Low | Severity::Unknown => BadgeVariant::Neutral,
        Severity::Medium => BadgeVariant::Info,
        Severity::High => BadgeVariant::Warning,
        Severity::Critical => BadgeVariant::Danger,
    }
}

/// One bar per month of a trend series.
pub fn trend_bars(trend: &[MonthBucket]) -> Vec<Bar> {
    trend
        .iter()
        .map(|bucket| Bar::new(bucket.label.clone(), bucket.count as f64))
        .collect()
}

/// `"★★★★☆"` for a 1–5 rating; out-of-range values are clamped.
pub fn rating_stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
