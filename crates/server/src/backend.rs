//! HTTP client for the REST backend.
//!
//! Every call forwards the caller's bearer token when one is present and
//! turns non-2xx responses into [`AppError`]s carrying the backend's
//! `message`.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{ApiEnvelope, AppError};
use std::sync::OnceLock;

use crate::error_convert::ReqwestErrorExt;

fn shared_http() -> &'static reqwest::Client {
    static HTTP: OnceLock<reqwest::Client> = OnceLock::new();
    HTTP.get_or_init(reqwest::Client::new)
}

/// A backend client bound to one caller's session.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: shared_http().clone(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    /// Client for the configured backend.
    pub fn from_config(token: Option<String>) -> Self {
        Self::new(crate::config::backend_url(), token)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder, method: &Method, path: &str) -> Result<Response, AppError> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!(%method, path, error = %e, "Backend request failed");
            e.into_app_error()
        })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(%method, path, status = status.as_u16(), "Backend request");
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = AppError::from_status(status.as_u16(), &body);
        tracing::error!(%method, path, status = status.as_u16(), message = %err.message, "Backend returned an error");
        Err(err)
    }

    async fn envelope<T, S>(&self, builder: RequestBuilder, method: Method, path: &str) -> Result<ApiEnvelope<T, S>, AppError>
    where
        T: DeserializeOwned,
        S: DeserializeOwned,
    {
        self.send(builder, &method, path)
            .await?
            .json::<ApiEnvelope<T, S>>()
            .await
            .map_err(ReqwestErrorExt::into_app_error)
    }

    /// `GET path` and decode the full `{ data, stats?, pagination? }` envelope.
    pub async fn get_envelope<T, S>(&self, path: &str) -> Result<ApiEnvelope<T, S>, AppError>
    where
        T: DeserializeOwned,
        S: DeserializeOwned,
    {
        self.envelope(self.request(Method::GET, path), Method::GET, path)
            .await
    }

    /// `GET path` and return only `data`.
    pub async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        Ok(self.get_envelope::<T, serde_json::Value>(path).await?.data)
    }

    /// `POST path` with a JSON body, returning `data`.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path).json(body);
        Ok(self
            .envelope::<T, serde_json::Value>(builder, Method::POST, path)
            .await?
            .data)
    }

    /// `POST path` without a body, ignoring the response body.
    pub async fn post_empty(&self, path: &str) -> Result<(), AppError> {
        self.send(self.request(Method::POST, path), &Method::POST, path)
            .await
            .map(|_| ())
    }

    /// `PUT path` with a JSON body, returning `data`.
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::PUT, path).json(body);
        Ok(self
            .envelope::<T, serde_json::Value>(builder, Method::PUT, path)
            .await?
            .data)
    }

    /// `DELETE path`, ignoring the response body.
    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        self.send(self.request(Method::DELETE, path), &Method::DELETE, path)
            .await
            .map(|_| ())
    }

    /// Whether the backend answers at all (any status counts).
    pub async fn ping(&self) -> Result<(), AppError> {
        self.http
            .get(&self.base_url)
            .send()
            .await
            .map(|_| ())
            .map_err(ReqwestErrorExt::into_app_error)
    }
}
