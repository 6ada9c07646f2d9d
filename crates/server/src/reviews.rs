use shared_types::{
    to_query_string, with_query, AppError, Paginated, Review, ReviewDecision, ReviewFilters,
    ReviewStats, ReviewStatus,
};

use crate::backend::BackendClient;

const REVIEWS_PATH: &str = "/reviews";

pub async fn list_reviews(
    client: &BackendClient,
    filters: &ReviewFilters,
) -> Result<Paginated<Review, ReviewStats>, AppError> {
    let path = with_query(REVIEWS_PATH, &to_query_string(filters));
    let envelope = client.get_envelope(&path).await?;
    Ok(Paginated::from_envelope(envelope))
}

/// Move a review to `decision.status`.
///
/// `current` is the status the moderator saw; a transition the review
/// lifecycle forbids is rejected before anything is sent.
pub async fn decide(
    client: &BackendClient,
    review_id: &str,
    current: ReviewStatus,
    decision: &ReviewDecision,
) -> Result<Review, AppError> {
    if review_id.trim().is_empty() {
        return Err(AppError::bad_request("Review id is required"));
    }
    if !current.can_transition_to(decision.status) {
        return Err(AppError::bad_request(format!(
            "A {} review cannot be marked {}",
            current.as_str(),
            decision.status.as_str()
        )));
    }
    let path = format!("{REVIEWS_PATH}/{}", id_segment(review_id));
    client.put_json(&path, decision).await
}

/// Backend ids are alphanumeric; anything else is dropped from the path.
fn id_segment(segment: &str) -> String {
    segment
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .collect()
}
