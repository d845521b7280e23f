//! REST API helpers for the LearnHub backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only fetched from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode (transport, non-2xx status, undecodable body) maps to
//! an `ApiError`. Pages collapse all variants into one inline message per
//! flow and log the detail; nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Certificate, CourseSummary, LoadedExport};
use crate::util::api_base::ApiConfig;

/// `localStorage` key holding the bearer token for authenticated calls.
pub const AUTH_TOKEN_KEY: &str = "token";

/// Failure of a single REST read.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Whether a request carries the caller's identity.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Access {
    Public,
    Authenticated,
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    Some(format!("Bearer {token}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_export(raw: serde_json::Value) -> Result<LoadedExport, ApiError> {
    LoadedExport::from_value(raw).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the authenticated user's certificates from
/// `GET /certificates/my-certificates`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server responds with a
/// non-OK status, or the body is not a certificate list.
pub async fn fetch_my_certificates(config: &ApiConfig) -> Result<Vec<Certificate>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&config.my_certificates_url(), Access::Authenticated).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the public course catalog from `GET /evaluations/public/courses`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server responds with a
/// non-OK status, or the body is not a course list.
pub async fn fetch_public_courses(config: &ApiConfig) -> Result<Vec<CourseSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&config.public_courses_url(), Access::Public).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one course's evaluation export from `GET /evaluations/export/{course_id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server responds with a
/// non-OK status, or the body is not an export document.
pub async fn fetch_evaluation_export(config: &ApiConfig, course_id: &str) -> Result<LoadedExport, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let raw: serde_json::Value = get_json(&config.evaluation_export_url(course_id), Access::Public).await?;
        decode_export(raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, course_id);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T>(url: &str, access: Access) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let mut request = gloo_net::http::Request::get(url);
    if access == Access::Authenticated {
        request = request.credentials(web_sys::RequestCredentials::Include);
        if let Some(header) = stored_token().as_deref().and_then(bearer_header) {
            request = request.header("Authorization", &header);
        }
    }
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn stored_token() -> Option<String> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
    storage.get_item(AUTH_TOKEN_KEY).ok().flatten()
}
