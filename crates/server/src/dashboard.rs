//! Dashboard aggregation: fetch a report's collections concurrently, then
//! derive its stats in one pass.

use chrono::Utc;
use futures::future::try_join_all;
use shared_types::{
    AppError, Booking, Collection, Collections, DashboardReport, HealthTest, HealthcareCenter,
    PortalUser,
};

use crate::backend::BackendClient;

enum Fetched {
    Bookings(Vec<Booking>),
    Tests(Vec<HealthTest>),
    Users(Vec<PortalUser>),
    Centers(Vec<HealthcareCenter>),
}

async fn fetch_one(client: &BackendClient, collection: Collection) -> Result<Fetched, AppError> {
    let path = collection.path();
    Ok(match collection {
        Collection::Bookings => Fetched::Bookings(client.get_data(path).await?),
        Collection::Tests => Fetched::Tests(client.get_data(path).await?),
        Collection::Users => Fetched::Users(client.get_data(path).await?),
        Collection::Centers => Fetched::Centers(client.get_data(path).await?),
    })
}

/// Fetch every collection in `plan` at once. The first failure fails the
/// whole call and no partial result is returned.
pub async fn fetch_collections(client: &BackendClient, plan: &[Collection]) -> Result<Collections, AppError> {
    let fetched = try_join_all(plan.iter().map(|c| fetch_one(client, *c))).await?;

    let mut collections = Collections::default();
    for item in fetched {
        match item {
            Fetched::Bookings(v) => collections.bookings = v,
            Fetched::Tests(v) => collections.tests = v,
            Fetched::Users(v) => collections.users = v,
            Fetched::Centers(v) => collections.centers = v,
        }
    }
    Ok(collections)
}

/// Build report `R` from its fetch plan.
#[tracing::instrument(skip(client), fields(report = std::any::type_name::<R>()))]
pub async fn aggregate<R: DashboardReport>(client: &BackendClient) -> Result<R, AppError> {
    let collections = fetch_collections(client, R::PLAN).await.map_err(|e| {
        tracing::error!(error = %e, "Dashboard aggregation failed");
        e
    })?;
    Ok(R::derive(&collections, Utc::now()))
}
