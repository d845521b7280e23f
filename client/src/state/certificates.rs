//! Certificate gallery state.
//!
//! DESIGN
//! ======
//! The gallery performs exactly one read per mount, so the state is a plain
//! `loading -> ready | error` machine. Failures keep the list empty and
//! surface one fixed message.

#[cfg(test)]
#[path = "certificates_test.rs"]
mod certificates_test;

use crate::net::api::ApiError;
use crate::net::types::Certificate;

/// Inline message shown when the certificate list cannot be loaded.
pub const CERTIFICATES_LOAD_FAILED: &str = "Failed to load certificates";

/// What the gallery should render for the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryView {
    Loading,
    Error,
    /// Loaded with no certificates: show the call-to-action.
    Empty,
    Grid,
}

/// Certificates fetched for the current user during this mount.
#[derive(Clone, Debug)]
pub struct CertificatesState {
    pub items: Vec<Certificate>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for CertificatesState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None }
    }
}

impl CertificatesState {
    /// Apply the outcome of the mount-time fetch.
    pub fn finish(&mut self, result: Result<Vec<Certificate>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(_) => {
                self.items.clear();
                self.error = Some(CERTIFICATES_LOAD_FAILED.to_owned());
            }
        }
    }

    pub fn view(&self) -> GalleryView {
        if self.loading {
            GalleryView::Loading
        } else if self.error.is_some() {
            GalleryView::Error
        } else if self.items.is_empty() {
            GalleryView::Empty
        } else {
            GalleryView::Grid
        }
    }

    /// Certificate earned for `course_id`, if the user holds one.
    pub fn find_by_course(&self, course_id: &str) -> Option<&Certificate> {
        self.items.iter().find(|cert| cert.course_id.as_deref() == Some(course_id))
    }
}

/// Route of the per-course certificate detail view.
pub fn certificate_detail_path(course_id: &str) -> String {
    format!("/certificates/{course_id}")
}
