use shared_types::{
    records_to_csv, to_query_string, with_query, ActivityLog, ActivityLogFilters,
    ActivityLogStats, AppError, Paginated,
};

use crate::backend::BackendClient;

const ACTIVITY_LOGS_PATH: &str = "/activity-logs";
const EXPORT_PATH: &str = "/activity-logs/export";

/// One filtered page of the activity log.
pub async fn list_logs(
    client: &BackendClient,
    filters: &ActivityLogFilters,
) -> Result<Paginated<ActivityLog, ActivityLogStats>, AppError> {
    let path = with_query(ACTIVITY_LOGS_PATH, &to_query_string(filters));
    let envelope = client.get_envelope(&path).await?;
    Ok(Paginated::from_envelope(envelope))
}

/// Every log record in the filter's date range, rendered as CSV.
///
/// Records are kept as raw JSON so the CSV columns follow whatever fields
/// the backend returns.
pub async fn export_csv(client: &BackendClient, filters: &ActivityLogFilters) -> Result<String, AppError> {
    let path = with_query(EXPORT_PATH, &filters.export_query());
    let records: Vec<serde_json::Value> = client.get_data(&path).await?;
    tracing::info!(records = records.len(), "Exporting activity logs");
    Ok(records_to_csv(&records))
}

/// Delete every activity log record.
pub async fn clear_all(client: &BackendClient) -> Result<(), AppError> {
    client.delete(ACTIVITY_LOGS_PATH).await?;
    tracing::warn!("Activity log cleared");
    Ok(())
}
