use dioxus::prelude::ServerFnError;
use shared_types::AppError;

/// Convert a reqwest::Error into an AppError.
///
/// Transport failures (connect, timeout, body) become `Network`; a failed
/// decode of a 2xx body means the backend sent something unexpected.
pub fn reqwest_to_app_error(err: reqwest::Error) -> AppError {
    if err.is_decode() {
        return AppError::upstream(format!("Unexpected response from backend: {err}"));
    }
    if let Some(status) = err.status() {
        return AppError::from_status(status.as_u16(), "");
    }
    AppError::network(format!("Backend unreachable: {err}"))
}

/// Convert an AppError into a ServerFnError by serializing as JSON.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

/// Extension trait providing `.into_app_error()` on reqwest::Error.
pub trait ReqwestErrorExt {
    fn into_app_error(self) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        reqwest_to_app_error(self)
    }
}

/// Extension trait providing `.into_server_fn_error()` on AppError.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}

/// Trait for validating request DTOs before processing.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{AppErrorKind, LoginRequest};

    #[test]
    fn server_fn_error_carries_app_error_json() {
        let err = AppError::forbidden("Superadmin only").into_server_fn_error();
        let recovered = AppError::recover(&err);
        assert_eq!(recovered.kind, AppErrorKind::Forbidden);
        assert_eq!(recovered.message, "Superadmin only");
    }

    #[test]
    fn invalid_login_request_reports_fields() {
        let req = LoginRequest {
            email: "not-an-email".into(),
            password: String::new(),
        };
        let err = req.validate_request().unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field_errors.contains_key("email"));
        assert!(err.field_errors.contains_key("password"));
    }
}
