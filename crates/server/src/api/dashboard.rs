use dioxus::prelude::*;
use shared_types::{Booking, CentreSummary, CustomerStats, HcsStats, SuperadminStats, TestUsage};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use super::auth::*;

// ── Dashboards ─────────────────────────────────────────

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_customer_dashboard() -> Result<CustomerStats, ServerFnError> {
    let client = require_session()?;
    crate::dashboard::aggregate::<CustomerStats>(&client)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_hcs_dashboard() -> Result<HcsStats, ServerFnError> {
    let client = require_session()?;
    crate::dashboard::aggregate::<HcsStats>(&client)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_superadmin_dashboard() -> Result<SuperadminStats, ServerFnError> {
    let client = require_session()?;
    crate::dashboard::aggregate::<SuperadminStats>(&client)
        .await
        .map_err(|e| e.into_server_fn_error())
}

// ── Collection pages ───────────────────────────────────

/// The signed-in customer's bookings, newest first.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_my_bookings() -> Result<Vec<Booking>, ServerFnError> {
    let client = require_session()?;
    let mut bookings: Vec<Booking> = client
        .get_data(shared_types::Collection::Bookings.path())
        .await
        .map_err(|e| e.into_server_fn_error())?;
    bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(bookings)
}

/// The centre's tests with how often each was booked.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_centre_tests() -> Result<Vec<TestUsage>, ServerFnError> {
    use shared_types::{test_usage, Collection};

    let client = require_session()?;
    let c = crate::dashboard::fetch_collections(&client, &[Collection::Tests, Collection::Bookings])
        .await
        .map_err(|e| e.into_server_fn_error())?;
    Ok(test_usage(&c.tests, &c.bookings))
}

/// Every healthcare centre with its booking totals and revenue.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_centres() -> Result<Vec<CentreSummary>, ServerFnError> {
    use shared_types::{centre_summaries, Collection};

    let client = require_session()?;
    let c = crate::dashboard::fetch_collections(&client, &[Collection::Centers, Collection::Bookings])
        .await
        .map_err(|e| e.into_server_fn_error())?;
    Ok(centre_summaries(&c.centers, &c.bookings))
}
