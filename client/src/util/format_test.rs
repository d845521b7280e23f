use super::*;

fn row(value: serde_json::Value) -> ResponseRow {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("row fixture must be an object"),
    }
}

#[test]
fn issue_date_keeps_date_part() {
    assert_eq!(format_issue_date("2024-06-01T10:00:00.000Z"), "2024-06-01");
}

#[test]
fn issue_date_passes_through_non_iso_text() {
    assert_eq!(format_issue_date("June 1, 2024"), "June 1, 2024");
}

#[test]
fn issue_date_empty_is_placeholder() {
    assert_eq!(format_issue_date("   "), PLACEHOLDER);
}

#[test]
fn percentage_has_one_decimal() {
    assert_eq!(format_percentage(92.456), "92.5%");
    assert_eq!(format_percentage(100.0), "100.0%");
}

#[test]
fn percentage_non_finite_is_placeholder() {
    assert_eq!(format_percentage(f64::NAN), PLACEHOLDER);
}

#[test]
fn attendance_days_summary() {
    let stats = CompletionStats { attendance_percentage: 90.0, attended_days: 9, total_days: 10 };
    assert_eq!(format_attendance_days(&stats), "9 / 10 days");
}

#[test]
fn cell_text_renders_present_and_missing_columns() {
    let r = row(serde_json::json!({ "Q1": "5" }));
    assert_eq!(cell_text(&r, "Q1"), "5");
    assert_eq!(cell_text(&r, "Q2"), "-");
}

#[test]
fn cell_text_null_and_empty_are_placeholder() {
    let r = row(serde_json::json!({ "a": null, "b": "" }));
    assert_eq!(cell_text(&r, "a"), "-");
    assert_eq!(cell_text(&r, "b"), "-");
}

#[test]
fn cell_text_renders_numbers_and_bools_bare() {
    let r = row(serde_json::json!({ "n": 0, "f": 4.5, "t": true }));
    assert_eq!(cell_text(&r, "n"), "0");
    assert_eq!(cell_text(&r, "f"), "4.5");
    assert_eq!(cell_text(&r, "t"), "true");
}

#[test]
fn cell_text_renders_nested_values_as_json() {
    let r = row(serde_json::json!({ "multi": ["a", "b"] }));
    assert_eq!(cell_text(&r, "multi"), r#"["a","b"]"#);
}

#[test]
fn question_count_label_distinguishes_missing() {
    assert_eq!(question_count_label(Some(0)), "0");
    assert_eq!(question_count_label(Some(7)), "7");
    assert_eq!(question_count_label(None), "not provided");
}
