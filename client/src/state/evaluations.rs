//! Evaluation explorer state: course catalog plus per-course export.
//!
//! DESIGN
//! ======
//! The catalog (`CatalogState`) loads once per mount. The detail pane
//! (`EvaluationState`) follows the route's selected course id. Every call to
//! [`EvaluationState::select`] bumps a generation counter and hands out an
//! [`EvaluationTicket`]; a completed fetch is applied only if its ticket is
//! still current, so a slow response for a previous selection can never
//! overwrite the pane for the current one.
//!
//! Clearing the selection happens inside `select(None)` itself, before any
//! in-flight fetch resolves. Until the route effect has run `select`, the
//! pane is derived from the route via [`EvaluationState::pane_for`] so an
//! export for the previous route is never rendered.

#[cfg(test)]
#[path = "evaluations_test.rs"]
mod evaluations_test;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::net::types::{CourseSummary, LoadedExport};

/// Inline message shown when the course catalog cannot be loaded.
pub const COURSES_LOAD_FAILED: &str = "Failed to load courses";
/// Inline message shown when a course's evaluation export cannot be loaded.
pub const EVALUATION_LOAD_FAILED: &str = "Failed to load evaluation data";

/// Course list shown in the explorer sidebar.
#[derive(Clone, Debug)]
pub struct CatalogState {
    pub items: Vec<CourseSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None }
    }
}

impl CatalogState {
    /// Apply the outcome of the mount-time catalog fetch.
    pub fn finish(&mut self, result: Result<Vec<CourseSummary>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(_) => {
                self.items.clear();
                self.error = Some(COURSES_LOAD_FAILED.to_owned());
            }
        }
    }
}

/// Proof that a fetch was issued for a particular selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluationTicket {
    course_id: String,
    generation: u64,
}

impl EvaluationTicket {
    pub fn course_id(&self) -> &str {
        &self.course_id
    }
}

/// What the detail pane should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailPane {
    /// No course selected.
    Instructions,
    Loading,
    Error,
    Loaded,
}

/// Export currently shown in the detail pane.
#[derive(Clone, Debug, Default)]
pub struct EvaluationState {
    selected: Option<String>,
    generation: u64,
    pub export: Option<LoadedExport>,
    pub loading: bool,
    pub error: Option<String>,
}

impl EvaluationState {
    /// Switch the pane to `course_id`.
    ///
    /// Any previously shown export or error is dropped immediately. Returns
    /// the ticket for the fetch the caller must now issue, or `None` when the
    /// selection was cleared.
    pub fn select(&mut self, course_id: Option<String>) -> Option<EvaluationTicket> {
        self.generation = self.generation.wrapping_add(1);
        self.selected.clone_from(&course_id);
        self.export = None;
        self.error = None;
        match course_id {
            None => {
                self.loading = false;
                None
            }
            Some(course_id) => {
                self.loading = true;
                Some(EvaluationTicket { course_id, generation: self.generation })
            }
        }
    }

    /// Whether `ticket` still belongs to the current selection.
    pub fn is_current(&self, ticket: &EvaluationTicket) -> bool {
        ticket.generation == self.generation && self.selected.as_deref() == Some(ticket.course_id.as_str())
    }

    /// Apply a completed fetch. Returns `false` (and changes nothing) when the
    /// ticket was superseded by a later selection.
    pub fn resolve(&mut self, ticket: &EvaluationTicket, result: Result<LoadedExport, ApiError>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(export) => {
                self.export = Some(export);
                self.error = None;
            }
            Err(_) => {
                self.export = None;
                self.error = Some(EVALUATION_LOAD_FAILED.to_owned());
            }
        }
        true
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Pane for the course currently named by the route.
    ///
    /// The route param changes before the effect that calls `select` runs;
    /// in that window the state still describes the previous course.
    pub fn pane_for(&self, route: Option<&str>) -> DetailPane {
        if self.selected.as_deref() == route {
            return self.pane();
        }
        match route {
            None => DetailPane::Instructions,
            Some(_) => DetailPane::Loading,
        }
    }

    pub fn pane(&self) -> DetailPane {
        if self.selected.is_none() {
            DetailPane::Instructions
        } else if self.loading {
            DetailPane::Loading
        } else if self.error.is_some() {
            DetailPane::Error
        } else if self.export.is_some() {
            DetailPane::Loaded
        } else {
            DetailPane::Loading
        }
    }
}

/// What happened to a completed export fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    Applied,
    /// A later selection superseded the ticket.
    Stale,
    /// The page that issued the fetch has been unmounted.
    Disposed,
}

/// Apply a completed fetch to the page's signal.
///
/// Subscribers are only notified when the result was applied. A disposed
/// signal is reported, never touched.
pub fn apply_export(
    evaluation: RwSignal<EvaluationState>,
    ticket: &EvaluationTicket,
    result: Result<LoadedExport, ApiError>,
) -> ExportOutcome {
    let applied = evaluation.try_maybe_update(|s| {
        let applied = s.resolve(ticket, result);
        (applied, applied)
    });
    match applied {
        Some(true) => ExportOutcome::Applied,
        Some(false) => ExportOutcome::Stale,
        None => ExportOutcome::Disposed,
    }
}

/// Route of the explorer with `course_id` selected.
pub fn evaluation_path(course_id: &str) -> String {
    format!("/evaluations/{course_id}")
}
