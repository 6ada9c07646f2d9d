use dioxus::prelude::*;
use shared_types::{FeatureFlags, Identity, Role};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use super::auth::*;

/// Get the current feature flags. No auth required; flags are not sensitive.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

/// Sign in through one of the three login surfaces. `surface` is the role
/// the page serves; an account of another role is refused.
///
/// The backend token is kept server-side in an HTTP-only cookie.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String, surface: Role) -> Result<Identity, ServerFnError> {
    use crate::auth::cookies;
    use shared_types::{AppError, LoginRequest, LoginResponse};

    let req = LoginRequest {
        email: email.trim().to_string(),
        password,
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let response: LoginResponse = backend()
        .post_json("/auth/login", &req)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    if response.user.role != surface {
        tracing::warn!(
            user = %response.user.id,
            role = %response.user.role,
            surface = %surface,
            "Login refused on wrong surface"
        );
        return Err(AppError::forbidden(format!(
            "This account cannot sign in here. Use the {} login.",
            response.user.role
        ))
        .into_server_fn_error());
    }

    cookies::schedule_session_cookie(&response.token);
    tracing::info!(user = %response.user.id, role = %response.user.role, "Signed in");
    Ok(response.user)
}

/// Get the current signed-in identity. Returns None if there is no session
/// or the backend no longer accepts it.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<Identity>, ServerFnError> {
    use crate::auth::cookies;

    let client = backend();
    if !client.has_token() {
        return Ok(None);
    }

    match client.get_data::<Identity>(ME_PATH).await {
        Ok(identity) => Ok(Some(identity)),
        Err(e) if e.is_unauthorized() => {
            // Stale token: drop it so the client does not keep presenting it
            cookies::schedule_clear_cookie();
            tracing::info!("Session rejected by backend, clearing cookie");
            Ok(None)
        }
        Err(e) => Err(e.into_server_fn_error()),
    }
}

/// Sign out. The backend call is best-effort; the cookie is always cleared.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use crate::auth::cookies;

    let client = backend();
    if client.has_token() {
        if let Err(e) = client.post_empty("/auth/logout").await {
            tracing::warn!(error = %e, "Backend logout failed");
        }
    }

    cookies::schedule_clear_cookie();
    Ok(())
}
