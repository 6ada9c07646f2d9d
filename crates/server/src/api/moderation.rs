use dioxus::prelude::*;
use shared_types::{
    ActivityLog, ActivityLogFilters, ActivityLogStats, Paginated, Review, ReviewDecision,
    ReviewFilters, ReviewStats, ReviewStatus,
};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use super::auth::*;

#[cfg(feature = "server")]
use shared_types::Role;

// ── Reviews ────────────────────────────────────────────

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_reviews(filters: ReviewFilters) -> Result<Paginated<Review, ReviewStats>, ServerFnError> {
    let client = require_session()?;
    crate::reviews::list_reviews(&client, &filters)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Approve or reject a review, optionally with a public response.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn decide_review(
    review_id: String,
    current: ReviewStatus,
    decision: ReviewDecision,
) -> Result<Review, ServerFnError> {
    let (client, identity) = require_role(&[Role::HcsAdmin, Role::Superadmin]).await?;
    let review = crate::reviews::decide(&client, &review_id, current, &decision)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    tracing::info!(review = %review.id, status = %review.status, by = %identity.id, "Review moderated");
    Ok(review)
}

// ── Activity log ───────────────────────────────────────

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_activity_logs(
    filters: ActivityLogFilters,
) -> Result<Paginated<ActivityLog, ActivityLogStats>, ServerFnError> {
    let client = require_session()?;
    crate::activity::list_logs(&client, &filters)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// CSV text of the logs in the filter's date range. Refused unless the
/// `csv_export` flag is on.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn export_activity_logs(filters: ActivityLogFilters) -> Result<String, ServerFnError> {
    use shared_types::AppError;

    if !crate::config::feature_flags().csv_export {
        return Err(AppError::forbidden("CSV export is disabled").into_server_fn_error());
    }
    let client = require_session()?;
    crate::activity::export_csv(&client, &filters)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Irreversibly delete every activity log record. Superadmin only.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn clear_activity_logs() -> Result<(), ServerFnError> {
    let (client, identity) = require_role(&[Role::Superadmin]).await?;
    crate::activity::clear_all(&client)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    tracing::info!(by = %identity.id, "Activity logs cleared");
    Ok(())
}
