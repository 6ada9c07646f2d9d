use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::cookies::{self, CookieSlot};
use super::SessionToken;

/// Permissive session middleware.
///
/// On each request:
/// 1. Reads the session token from the cookie (or Bearer header fallback)
///    and inserts it as a [`SessionToken`] extension
/// 2. Inserts a `CookieSlot` so server functions can schedule cookie changes
/// 3. After the handler runs, applies any pending cookie action to the response
///
/// Does NOT reject anonymous requests; the backend decides authorization.
pub async fn session_middleware(mut req: Request, next: Next) -> Response {
    if let Some(token) = cookies::extract_session_token(req.headers()) {
        req.extensions_mut().insert(SessionToken(token));
    }

    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    if let Some(action) = cookie_slot.take() {
        cookies::apply_cookie_action(response.headers_mut(), action);
    }

    response
}
