use leptos::prelude::*;

use super::*;
use crate::net::types::CourseStatus;

fn export_for(title: &str) -> LoadedExport {
    LoadedExport::from_value(serde_json::json!({
        "course": { "title": title },
        "totalResponses": 1,
        "columns": ["Q1"],
        "data": [{ "Q1": title }]
    }))
    .unwrap()
}

fn course(id: &str) -> CourseSummary {
    CourseSummary {
        id: id.to_owned(),
        title: format!("Course {id}"),
        course_code: format!("C-{id}"),
        teacher_name: "Lee".to_owned(),
        status: CourseStatus::Active,
        evaluation_count: 3,
    }
}

fn loaded_title(state: &EvaluationState) -> Option<&str> {
    state.export.as_ref().map(|e| e.export.course.title.as_str())
}

// =============================================================
// CatalogState
// =============================================================

#[test]
fn catalog_starts_loading() {
    let state = CatalogState::default();
    assert!(state.loading);
    assert!(state.items.is_empty());
}

#[test]
fn catalog_success_populates_list() {
    let mut state = CatalogState::default();
    state.finish(Ok(vec![course("a"), course("b")]));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
    assert!(state.error.is_none());
}

#[test]
fn catalog_failure_leaves_list_empty_with_one_message() {
    let mut state = CatalogState::default();
    state.finish(Err(ApiError::Network("offline".to_owned())));
    assert!(!state.loading);
    assert!(state.items.is_empty());
    assert_eq!(state.error.as_deref(), Some(COURSES_LOAD_FAILED));
}

// =============================================================
// EvaluationState: selection
// =============================================================

#[test]
fn default_pane_shows_instructions() {
    let state = EvaluationState::default();
    assert_eq!(state.pane(), DetailPane::Instructions);
    assert!(state.selected().is_none());
}

#[test]
fn selecting_a_course_issues_ticket_and_loads() {
    let mut state = EvaluationState::default();
    let ticket = state.select(Some("a".to_owned())).unwrap();
    assert_eq!(ticket.course_id(), "a");
    assert!(state.loading);
    assert_eq!(state.pane(), DetailPane::Loading);
}

#[test]
fn successful_fetch_stores_export() {
    let mut state = EvaluationState::default();
    let ticket = state.select(Some("a".to_owned())).unwrap();
    assert!(state.resolve(&ticket, Ok(export_for("A"))));
    assert!(!state.loading);
    assert_eq!(loaded_title(&state), Some("A"));
    assert_eq!(state.pane(), DetailPane::Loaded);
}

#[test]
fn clearing_selection_drops_data_synchronously() {
    let mut state = EvaluationState::default();
    let ticket = state.select(Some("a".to_owned())).unwrap();
    state.resolve(&ticket, Ok(export_for("A")));

    assert!(state.select(None).is_none());
    assert!(state.export.is_none());
    assert!(!state.loading);
    assert_eq!(state.pane(), DetailPane::Instructions);
}

#[test]
fn clearing_selection_with_fetch_in_flight_discards_late_response() {
    let mut state = EvaluationState::default();
    let ticket = state.select(Some("a".to_owned())).unwrap();
    state.select(None);

    assert!(!state.resolve(&ticket, Ok(export_for("A"))));
    assert!(state.export.is_none());
    assert_eq!(state.pane(), DetailPane::Instructions);
}

// =============================================================
// EvaluationState: superseded fetches
// =============================================================

#[test]
fn late_response_for_previous_course_is_discarded() {
    let mut state = EvaluationState::default();
    let ticket_a = state.select(Some("a".to_owned())).unwrap();
    let ticket_b = state.select(Some("b".to_owned())).unwrap();

    assert!(state.resolve(&ticket_b, Ok(export_for("B"))));
    assert!(!state.resolve(&ticket_a, Ok(export_for("A"))));
    assert_eq!(loaded_title(&state), Some("B"));
    assert_eq!(state.selected(), Some("b"));
}

#[test]
fn early_response_for_previous_course_is_discarded() {
    let mut state = EvaluationState::default();
    let ticket_a = state.select(Some("a".to_owned())).unwrap();
    let ticket_b = state.select(Some("b".to_owned())).unwrap();

    assert!(!state.resolve(&ticket_a, Ok(export_for("A"))));
    assert!(state.loading);
    assert!(state.export.is_none());

    assert!(state.resolve(&ticket_b, Ok(export_for("B"))));
    assert_eq!(loaded_title(&state), Some("B"));
}

#[test]
fn superseded_failure_does_not_set_error() {
    let mut state = EvaluationState::default();
    let ticket_a = state.select(Some("a".to_owned())).unwrap();
    let ticket_b = state.select(Some("b".to_owned())).unwrap();
    state.resolve(&ticket_b, Ok(export_for("B")));

    assert!(!state.resolve(&ticket_a, Err(ApiError::Status(500))));
    assert!(state.error.is_none());
    assert_eq!(loaded_title(&state), Some("B"));
}

#[test]
fn reselecting_same_course_supersedes_earlier_ticket() {
    let mut state = EvaluationState::default();
    let first = state.select(Some("a".to_owned())).unwrap();
    let second = state.select(Some("a".to_owned())).unwrap();
    assert!(!state.is_current(&first));
    assert!(state.is_current(&second));
}

// =============================================================
// EvaluationState: failures
// =============================================================

#[test]
fn failure_discards_previous_export() {
    let mut state = EvaluationState::default();
    let ticket_a = state.select(Some("a".to_owned())).unwrap();
    state.resolve(&ticket_a, Ok(export_for("A")));

    let ticket_b = state.select(Some("b".to_owned())).unwrap();
    assert!(state.resolve(&ticket_b, Err(ApiError::Status(404))));
    assert!(state.export.is_none());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(EVALUATION_LOAD_FAILED));
    assert_eq!(state.pane(), DetailPane::Error);
}

#[test]
fn success_after_failure_clears_error() {
    let mut state = EvaluationState::default();
    let ticket = state.select(Some("a".to_owned())).unwrap();
    state.resolve(&ticket, Err(ApiError::Decode("bad".to_owned())));

    let retry = state.select(Some("a".to_owned())).unwrap();
    assert!(state.error.is_none());
    state.resolve(&retry, Ok(export_for("A")));
    assert!(state.error.is_none());
    assert_eq!(state.pane(), DetailPane::Loaded);
}

// =============================================================
// EvaluationState: route ahead of state
// =============================================================

#[test]
fn pane_for_matching_route_uses_state() {
    let mut state = EvaluationState::default();
    let ticket = state.select(Some("a".to_owned())).unwrap();
    state.resolve(&ticket, Ok(export_for("A")));
    assert_eq!(state.pane_for(Some("a")), DetailPane::Loaded);
}

#[test]
fn pane_for_new_route_hides_previous_export() {
    let mut state = EvaluationState::default();
    let ticket = state.select(Some("a".to_owned())).unwrap();
    state.resolve(&ticket, Ok(export_for("A")));
    assert_eq!(state.pane_for(Some("b")), DetailPane::Loading);
    assert_eq!(state.pane_for(None), DetailPane::Instructions);
}

// =============================================================
// apply_export
// =============================================================

fn select_in(evaluation: RwSignal<EvaluationState>, course_id: &str) -> EvaluationTicket {
    evaluation.try_update(|s| s.select(Some(course_id.to_owned()))).flatten().unwrap()
}

#[test]
fn apply_export_stores_current_result() {
    let owner = Owner::new();
    let evaluation = owner.with(|| RwSignal::new(EvaluationState::default()));
    let ticket = select_in(evaluation, "a");

    assert_eq!(apply_export(evaluation, &ticket, Ok(export_for("A"))), ExportOutcome::Applied);
    assert_eq!(evaluation.with_untracked(EvaluationState::pane), DetailPane::Loaded);
    assert_eq!(evaluation.with_untracked(|s| loaded_title(s).map(str::to_owned)), Some("A".to_owned()));
}

#[test]
fn apply_export_drops_superseded_result() {
    let owner = Owner::new();
    let evaluation = owner.with(|| RwSignal::new(EvaluationState::default()));
    let ticket_a = select_in(evaluation, "a");
    let _ticket_b = select_in(evaluation, "b");

    assert_eq!(apply_export(evaluation, &ticket_a, Ok(export_for("A"))), ExportOutcome::Stale);
    assert_eq!(evaluation.with_untracked(EvaluationState::pane), DetailPane::Loading);
    assert!(evaluation.with_untracked(|s| s.export.is_none()));
}

#[test]
fn apply_export_after_unmount_is_ignored() {
    let owner = Owner::new();
    let evaluation = owner.with(|| RwSignal::new(EvaluationState::default()));
    let ticket = select_in(evaluation, "a");
    owner.cleanup();
    drop(owner);

    assert_eq!(apply_export(evaluation, &ticket, Ok(export_for("A"))), ExportOutcome::Disposed);
    assert!(evaluation.try_with_untracked(|s| s.export.is_some()).is_none());
}

#[test]
fn evaluation_path_is_keyed_by_course() {
    assert_eq!(evaluation_path("abc"), "/evaluations/abc");
}
