use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::booking::PartyRef;
use crate::filters::{opt_value, Criteria, PatchScope, SortOrder};

/// Default number of reviews per page.
pub const REVIEW_PAGE_SIZE: i64 = 10;

/// Moderation state of a customer review.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

pub const REVIEW_STATUSES: &[ReviewStatus] = &[
    ReviewStatus::Pending,
    ReviewStatus::Approved,
    ReviewStatus::Rejected,
];

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Approved => "approved",
            ReviewStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "Pending",
            ReviewStatus::Approved => "Approved",
            ReviewStatus::Rejected => "Rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(ReviewStatus::Pending),
            "approved" => Some(ReviewStatus::Approved),
            "rejected" => Some(ReviewStatus::Rejected),
            _ => None,
        }
    }

    /// A review can be approved or rejected, and a decision can be reversed,
    /// but nothing moves back to pending.
    pub fn can_transition_to(&self, next: ReviewStatus) -> bool {
        next != ReviewStatus::Pending && next != *self
    }

    pub fn available_transitions(&self) -> Vec<ReviewStatus> {
        REVIEW_STATUSES
            .iter()
            .copied()
            .filter(|s| self.can_transition_to(*s))
            .collect()
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer's review of a healthcare centre.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<PartyRef>,
    #[serde(default)]
    pub hcs: Option<PartyRef>,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    pub status: ReviewStatus,
    #[serde(default)]
    pub admin_response: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn author(&self) -> &str {
        self.user.as_ref().map(|u| u.name.as_str()).unwrap_or("Anonymous")
    }

    pub fn centre_name(&self) -> &str {
        self.hcs.as_ref().map(|h| h.name.as_str()).unwrap_or("--")
    }
}

/// Aggregate counts the backend returns alongside a review page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewStats {
    pub total_reviews: i64,
    pub pending_reviews: i64,
    pub approved_reviews: i64,
    pub rejected_reviews: i64,
    pub average_rating: f64,
}

/// Body of `PUT /reviews/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDecision {
    pub status: ReviewStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_response: Option<String>,
}

impl ReviewDecision {
    /// Build a decision, dropping a blank admin response.
    pub fn new(status: ReviewStatus, admin_response: &str) -> Self {
        let trimmed = admin_response.trim();
        Self {
            status,
            admin_response: if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            },
        }
    }
}

/// A moderation decision being confirmed in the dialog.
///
/// Each draft starts with an empty response, so text typed for one review
/// never carries over to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionDraft {
    pub review: Review,
    pub next: ReviewStatus,
    pub response: String,
}

impl DecisionDraft {
    pub fn open(review: Review, next: ReviewStatus) -> Self {
        Self {
            review,
            next,
            response: String::new(),
        }
    }

    pub fn decision(&self) -> ReviewDecision {
        ReviewDecision::new(self.next, &self.response)
    }
}

/// Field the review list is sorted by.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReviewSort {
    #[default]
    CreatedAt,
    Rating,
}

impl ReviewSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewSort::CreatedAt => "createdAt",
            ReviewSort::Rating => "rating",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "rating" => ReviewSort::Rating,
            _ => ReviewSort::CreatedAt,
        }
    }
}

/// Filters for `GET /reviews`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewFilters {
    pub status: Option<ReviewStatus>,
    pub rating: Option<u8>,
    pub search: String,
    pub page: i64,
    pub limit: i64,
    pub sort_by: ReviewSort,
    pub sort_order: SortOrder,
}

impl Default for ReviewFilters {
    fn default() -> Self {
        Self {
            status: None,
            rating: None,
            search: String::new(),
            page: 1,
            limit: REVIEW_PAGE_SIZE,
            sort_by: ReviewSort::default(),
            sort_order: SortOrder::default(),
        }
    }
}

/// One-field change to [`ReviewFilters`].
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewPatch {
    Status(Option<ReviewStatus>),
    Rating(Option<u8>),
    Search(String),
    Sort(ReviewSort, SortOrder),
    Limit(i64),
    Page(i64),
}

impl Criteria for ReviewFilters {
    type Patch = ReviewPatch;

    fn page(&self) -> i64 {
        self.page
    }

    fn set_page(&mut self, page: i64) {
        self.page = page;
    }

    fn merge(&mut self, patch: ReviewPatch) -> PatchScope {
        match patch {
            ReviewPatch::Status(s) => self.status = s,
            ReviewPatch::Rating(r) => self.rating = r.filter(|r| (1..=5).contains(r)),
            ReviewPatch::Search(q) => self.search = q,
            ReviewPatch::Sort(by, order) => {
                self.sort_by = by;
                self.sort_order = order;
            }
            ReviewPatch::Limit(l) => self.limit = l.clamp(1, 100),
            ReviewPatch::Page(p) => {
                self.page = p;
                return PatchScope::Page;
            }
        }
        PatchScope::Filter
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("status", opt_value(&self.status)),
            ("rating", opt_value(&self.rating)),
            ("search", self.search.clone()),
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("sortBy", self.sort_by.as_str().to_string()),
            ("sortOrder", self.sort_order.as_str().to_string()),
        ]
    }
}
