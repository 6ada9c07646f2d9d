pub mod cookies;
pub mod middleware;

/// Backend-issued session token, inserted into request extensions by
/// [`middleware::session_middleware`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionToken(pub String);

/// The caller's session token for the current server-function request.
///
/// Reads the middleware extension first and falls back to parsing headers
/// when the middleware did not run.
pub fn current_session_token() -> Option<String> {
    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();
    if let Some(token) = parts.extensions.get::<SessionToken>() {
        return Some(token.0.clone());
    }
    cookies::extract_session_token(&parts.headers)
}
