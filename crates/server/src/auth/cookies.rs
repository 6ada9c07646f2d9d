use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;
use std::sync::{Arc, Mutex};

/// Cookie holding the backend-issued session token.
pub const SESSION_COOKIE: &str = "carebook_session";

/// Session lifetime when the backend does not say otherwise.
const SESSION_MAX_AGE_HOURS: i64 = 12;

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

fn cookie_domain() -> Option<String> {
    std::env::var("COOKIE_DOMAIN")
        .ok()
        .filter(|d| !d.is_empty())
}

fn session_cookie(value: &str, max_age: cookie::time::Duration) -> Cookie<'static> {
    let mut builder = Cookie::build((SESSION_COOKIE, value.to_string()))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(max_age)
        .secure(cookie_secure());

    if let Some(domain) = cookie_domain() {
        builder = builder.domain(domain);
    }
    builder.build()
}

/// Build a Set-Cookie header value carrying the session token.
///
/// Returns `None` if the token contains bytes not allowed in a header.
pub fn build_session_cookie(token: &str) -> Option<HeaderValue> {
    let cookie = session_cookie(token, cookie::time::Duration::hours(SESSION_MAX_AGE_HOURS));
    HeaderValue::from_str(&cookie.to_string()).ok()
}

/// Build a Set-Cookie header value that expires the session cookie.
pub fn build_clear_cookie() -> HeaderValue {
    let cookie = session_cookie("", cookie::time::Duration::ZERO);
    HeaderValue::from_str(&cookie.to_string())
        .unwrap_or_else(|_| HeaderValue::from_static("carebook_session=; Max-Age=0; Path=/"))
}

/// Extract the session token from the cookie (preferred) or a Bearer header.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_cookie(headers, SESSION_COOKIE) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

/// Parse a specific cookie value from the Cookie header.
fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        if let Ok(cookie_str) = header_value.to_str() {
            for piece in cookie_str.split(';') {
                if let Ok(c) = Cookie::parse(piece.trim().to_string()) {
                    if c.name() == name && !c.value().is_empty() {
                        return Some(c.value().to_string());
                    }
                }
            }
        }
    }
    None
}

/// Pending cookie action to be picked up by the session middleware.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingCookieAction {
    Set(String),
    Clear,
}

/// Shared slot for server functions to communicate cookie actions to the
/// middleware. Stored in request extensions.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

impl CookieSlot {
    pub fn put(&self, action: PendingCookieAction) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = Some(action);
        }
    }

    pub fn take(&self) -> Option<PendingCookieAction> {
        self.0.lock().ok().and_then(|mut slot| slot.take())
    }
}

/// Apply a pending action to response headers.
pub fn apply_cookie_action(headers: &mut HeaderMap, action: PendingCookieAction) {
    match action {
        PendingCookieAction::Set(token) => match build_session_cookie(&token) {
            Some(value) => {
                headers.append(header::SET_COOKIE, value);
            }
            None => tracing::error!("Session token is not a valid cookie value"),
        },
        PendingCookieAction::Clear => {
            headers.append(header::SET_COOKIE, build_clear_cookie());
        }
    }
}

fn schedule(action: PendingCookieAction) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            slot.put(action);
        }
    }
}

/// Schedule the session cookie to be set by the middleware.
/// Called from server functions.
pub fn schedule_session_cookie(token: &str) {
    schedule(PendingCookieAction::Set(token.to_string()));
}

/// Schedule the session cookie to be cleared by the middleware.
pub fn schedule_clear_cookie() {
    schedule(PendingCookieAction::Clear);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn token_read_from_cookie_before_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; carebook_session=abc123"),
        );
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer other"));
        assert_eq!(extract_session_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn bearer_fallback_and_missing() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_session_token(&headers), None);
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer tok"));
        assert_eq!(extract_session_token(&headers), Some("tok".to_string()));
    }

    #[test]
    fn session_cookie_is_http_only() {
        let value = build_session_cookie("abc").unwrap();
        let text = value.to_str().unwrap();
        assert!(text.starts_with("carebook_session=abc"));
        assert!(text.contains("HttpOnly"));
        assert!(text.contains("SameSite=Lax"));
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let text = build_clear_cookie().to_str().unwrap().to_string();
        assert!(text.contains("Max-Age=0"));
    }

    #[test]
    fn slot_is_taken_once() {
        let slot = CookieSlot::default();
        slot.put(PendingCookieAction::Clear);
        assert_eq!(slot.take(), Some(PendingCookieAction::Clear));
        assert_eq!(slot.take(), None);
    }
}
