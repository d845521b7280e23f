//! API base address resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The base address is resolved once when `App` mounts and provided as
//! context; pages and the `net::api` helpers only ever read the resulting
//! `ApiConfig`.
//!
//! Resolution order:
//! 1. `LEARNHUB_API_URL` captured from the build environment, if non-empty.
//! 2. `http://localhost:5000/api` when the page host is exactly `localhost`.
//! 3. The relative prefix `/api`.

#[cfg(test)]
#[path = "api_base_test.rs"]
mod api_base_test;

/// Base address used when the page is served from `localhost`.
pub const LOCALHOST_API_BASE: &str = "http://localhost:5000/api";
/// Base address used everywhere else.
pub const RELATIVE_API_BASE: &str = "/api";

/// Resolved REST API location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Apply the resolution policy to an optional override and a page host.
    pub fn resolve(override_url: Option<&str>, host: &str) -> Self {
        let base = match override_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => url,
            None if host == "localhost" => LOCALHOST_API_BASE,
            None => RELATIVE_API_BASE,
        };
        Self { base_url: base.trim_end_matches('/').to_owned() }
    }

    /// Resolve from the compile-time override and the current page host.
    ///
    /// On the server there is no page host, so the relative prefix applies
    /// unless an override was baked in.
    pub fn from_environment() -> Self {
        Self::resolve(option_env!("LEARNHUB_API_URL"), &current_host())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` (with or without a leading slash) onto the base address.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn my_certificates_url(&self) -> String {
        self.endpoint("certificates/my-certificates")
    }

    pub fn public_courses_url(&self) -> String {
        self.endpoint("evaluations/public/courses")
    }

    pub fn evaluation_export_url(&self, course_id: &str) -> String {
        self.endpoint(&format!("evaluations/export/{course_id}"))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve(None, "")
    }
}

/// Make a possibly-relative URL absolute against a page origin.
///
/// Used for the clipboard affordance so a copied `/api/...` link still works
/// when pasted outside the app.
pub fn absolute_url(origin: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") || origin.is_empty() {
        return url.to_owned();
    }
    format!("{}/{}", origin.trim_end_matches('/'), url.trim_start_matches('/'))
}

/// Hostname of the current page, or an empty string outside the browser.
pub fn current_host() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Origin (`scheme://host:port`) of the current page, or empty outside the browser.
pub fn current_origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
