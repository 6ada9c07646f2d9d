// Server-only session helpers shared across all api/* modules.

use dioxus::prelude::*;
use shared_types::{AppError, Identity, Role};

use crate::auth::current_session_token;
use crate::backend::BackendClient;
use crate::error_convert::AppErrorExt;

pub(crate) const ME_PATH: &str = "/auth/me";

/// Backend client carrying the caller's token, if any.
pub(crate) fn backend() -> BackendClient {
    BackendClient::from_config(current_session_token())
}

/// Backend client for a caller that must be signed in.
pub(crate) fn require_session() -> Result<BackendClient, ServerFnError> {
    let client = backend();
    if !client.has_token() {
        return Err(AppError::unauthorized("Authentication required").into_server_fn_error());
    }
    Ok(client)
}

/// Resolve the caller's identity and require one of `roles`.
pub(crate) async fn require_role(roles: &[Role]) -> Result<(BackendClient, Identity), ServerFnError> {
    let client = require_session()?;
    let identity: Identity = client
        .get_data(ME_PATH)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    if !roles.contains(&identity.role) {
        tracing::warn!(user = %identity.id, role = %identity.role, "Role not permitted");
        return Err(AppError::forbidden("You do not have access to this action").into_server_fn_error());
    }
    Ok((client, identity))
}
