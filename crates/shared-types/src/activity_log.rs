use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::booking::PartyRef;
use crate::filters::{encode_pairs, opt_value, Criteria, PatchScope, SortOrder};

/// Default number of log entries per page.
pub const ACTIVITY_LOG_PAGE_SIZE: i64 = 20;

/// File name offered for the CSV download.
pub const ACTIVITY_LOG_EXPORT_FILE: &str = "activity_logs.csv";

/// How serious a logged action is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
    /// Any level this portal does not know about.
    #[serde(other)]
    Unknown,
}

pub const SEVERITIES: &[Severity] = &[
    Severity::Low,
    Severity::Medium,
    Severity::High,
    Severity::Critical,
];

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
            Severity::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
            Severity::Unknown => "Unknown",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        SEVERITIES.iter().copied().find(|sev| sev.as_str() == s.to_lowercase())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One audit entry recorded by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<PartyRef>,
    #[serde(default)]
    pub user_role: Option<String>,
    pub action: String,
    #[serde(default)]
    pub description: String,
    pub severity: Severity,
    #[serde(default)]
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ActivityLog {
    pub fn actor(&self) -> &str {
        self.user.as_ref().map(|u| u.name.as_str()).unwrap_or("System")
    }
}

/// Aggregate counts returned with an activity log page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityLogStats {
    pub total_logs: i64,
    pub critical_logs: i64,
    pub high_logs: i64,
    pub today_logs: i64,
}

/// Field the activity log is sorted by.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum LogSort {
    #[default]
    CreatedAt,
    Severity,
    Action,
}

impl LogSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogSort::CreatedAt => "createdAt",
            LogSort::Severity => "severity",
            LogSort::Action => "action",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "severity" => LogSort::Severity,
            "action" => LogSort::Action,
            _ => LogSort::CreatedAt,
        }
    }
}

/// Filters for `GET /activity-logs`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityLogFilters {
    pub severity: Option<Severity>,
    pub action: String,
    pub search: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub page: i64,
    pub limit: i64,
    pub sort_by: LogSort,
    pub sort_order: SortOrder,
}

impl Default for ActivityLogFilters {
    fn default() -> Self {
        Self {
            severity: None,
            action: String::new(),
            search: String::new(),
            start_date: None,
            end_date: None,
            page: 1,
            limit: ACTIVITY_LOG_PAGE_SIZE,
            sort_by: LogSort::default(),
            sort_order: SortOrder::default(),
        }
    }
}

impl ActivityLogFilters {
    /// Query for `GET /activity-logs/export`: only the date range applies.
    pub fn export_query(&self) -> String {
        encode_pairs(self.date_pairs())
    }

    fn date_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("startDate", opt_value(&self.start_date)),
            ("endDate", opt_value(&self.end_date)),
        ]
    }
}

/// One-field change to [`ActivityLogFilters`].
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityLogPatch {
    Severity(Option<Severity>),
    Action(String),
    Search(String),
    /// Inclusive date range; a reversed range is swapped.
    DateRange(Option<NaiveDate>, Option<NaiveDate>),
    Sort(LogSort, SortOrder),
    Limit(i64),
    Page(i64),
}

impl Criteria for ActivityLogFilters {
    type Patch = ActivityLogPatch;

    fn page(&self) -> i64 {
        self.page
    }

    fn set_page(&mut self, page: i64) {
        self.page = page;
    }

    fn merge(&mut self, patch: ActivityLogPatch) -> PatchScope {
        match patch {
            ActivityLogPatch::Severity(s) => self.severity = s,
            ActivityLogPatch::Action(a) => self.action = a,
            ActivityLogPatch::Search(q) => self.search = q,
            ActivityLogPatch::DateRange(start, end) => {
                let (start, end) = match (start, end) {
                    (Some(s), Some(e)) if s > e => (Some(e), Some(s)),
                    other => other,
                };
                self.start_date = start;
                self.end_date = end;
            }
            ActivityLogPatch::Sort(by, order) => {
                self.sort_by = by;
                self.sort_order = order;
            }
            ActivityLogPatch::Limit(l) => self.limit = l.clamp(1, 100),
            ActivityLogPatch::Page(p) => {
                self.page = p;
                return PatchScope::Page;
            }
        }
        PatchScope::Filter
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("severity", opt_value(&self.severity)),
            ("action", self.action.clone()),
            ("search", self.search.clone()),
        ];
        pairs.extend(self.date_pairs());
        pairs.extend([
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("sortBy", self.sort_by.as_str().to_string()),
            ("sortOrder", self.sort_order.as_str().to_string()),
        ]);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{apply_filters, to_query_string};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_query_string_sends_only_paging_and_sort() {
        assert_eq!(
            to_query_string(&ActivityLogFilters::default()),
            "page=1&limit=20&sortBy=createdAt&sortOrder=desc"
        );
    }

    #[test]
    fn full_query_string() {
        let f = ActivityLogFilters::default();
        let f = apply_filters(&f, ActivityLogPatch::Severity(Some(Severity::Critical)));
        let f = apply_filters(&f, ActivityLogPatch::Action("LOGIN".into()));
        let f = apply_filters(
            &f,
            ActivityLogPatch::DateRange(Some(date(2026, 1, 1)), Some(date(2026, 1, 31))),
        );
        let f = apply_filters(&f, ActivityLogPatch::Page(3));
        assert_eq!(
            to_query_string(&f),
            "severity=critical&action=LOGIN&startDate=2026-01-01&endDate=2026-01-31&page=3&limit=20&sortBy=createdAt&sortOrder=desc"
        );
    }

    #[test]
    fn reversed_date_range_is_swapped() {
        let f = apply_filters(
            &ActivityLogFilters::default(),
            ActivityLogPatch::DateRange(Some(date(2026, 2, 10)), Some(date(2026, 2, 1))),
        );
        assert_eq!(f.start_date, Some(date(2026, 2, 1)));
        assert_eq!(f.end_date, Some(date(2026, 2, 10)));
    }

    #[test]
    fn unrecognised_severity_keeps_the_entry() {
        let log: ActivityLog = serde_json::from_str(
            r#"{"_id": "l1", "action": "LOGIN", "severity": "info", "createdAt": "2026-03-01T09:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(log.severity, Severity::Unknown);
        assert_eq!(log.actor(), "System");
        assert_eq!(Severity::parse("unknown"), None);
    }

    #[test]
    fn filter_change_from_page_five_returns_to_first_page() {
        let at_five = ActivityLogFilters {
            page: 5,
            ..ActivityLogFilters::default()
        };
        let next = apply_filters(&at_five, ActivityLogPatch::Search("delete".into()));
        assert_eq!(next.page, 1);
        let next = apply_filters(&at_five, ActivityLogPatch::DateRange(None, None));
        assert_eq!(next.page, 1);
    }

    #[test]
    fn export_query_contains_only_dates() {
        let f = ActivityLogFilters {
            severity: Some(Severity::High),
            start_date: Some(date(2026, 3, 1)),
            page: 4,
            ..ActivityLogFilters::default()
        };
        assert_eq!(f.export_query(), "startDate=2026-03-01");
        assert_eq!(ActivityLogFilters::default().export_query(), "");
    }

    #[test]
    fn severity_parse() {
        assert_eq!(Severity::parse("CRITICAL"), Some(Severity::Critical));
        assert_eq!(Severity::parse(""), None);
    }
}
