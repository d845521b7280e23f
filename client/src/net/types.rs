//! Wire DTOs for the LearnHub REST API.
//!
//! DESIGN
//! ======
//! Payloads are normalized while they are deserialized: loosely-typed server
//! fields (course references that may be nested objects, counts that may
//! arrive as floats) are collapsed into one Rust representation here so
//! rendering code never branches on JSON shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A course certificate issued to the current user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    /// Certificate identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Identifier of the completed course, resolved from either a nested
    /// course object or a bare id. `None` when the course was deleted and the
    /// server sent `null` or omitted it.
    #[serde(rename = "course", default, deserialize_with = "deserialize_course_ref")]
    pub course_id: Option<String>,
    #[serde(rename = "courseName", default)]
    pub course_name: String,
    #[serde(rename = "teacherName", default)]
    pub teacher_name: String,
    #[serde(rename = "certificateNumber", default)]
    pub certificate_number: String,
    /// ISO 8601 issue timestamp.
    #[serde(rename = "issuedAt", alias = "issueDate", default)]
    pub issued_at: String,
    #[serde(rename = "downloadCount", default, deserialize_with = "deserialize_count")]
    pub download_count: u32,
    #[serde(rename = "completionStats", default)]
    pub completion_stats: CompletionStats,
}

/// Attendance figures recorded when the certificate was issued.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionStats {
    #[serde(rename = "attendancePercentage", default)]
    pub attendance_percentage: f64,
    #[serde(rename = "attendedDays", default, deserialize_with = "deserialize_count")]
    pub attended_days: u32,
    #[serde(rename = "totalDays", default, deserialize_with = "deserialize_count")]
    pub total_days: u32,
}

/// The `course` field of a certificate as the server may send it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CourseRef {
    /// Bare course identifier.
    Id(String),
    /// Populated course document.
    Nested(NestedCourse),
}

/// Populated course document; only the identifier is kept.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NestedCourse {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
}

impl CourseRef {
    /// Collapse either shape into the course identifier.
    pub fn into_id(self) -> String {
        match self {
            Self::Id(id) => id,
            Self::Nested(course) => course.id,
        }
    }
}

/// Lightweight course projection used to populate the explorer sidebar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseSummary {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(rename = "courseCode", default)]
    pub course_code: String,
    #[serde(rename = "teacherName", default)]
    pub teacher_name: String,
    #[serde(default)]
    pub status: CourseStatus,
    /// Number of evaluation responses collected for this course.
    #[serde(rename = "evaluationCount", default, deserialize_with = "deserialize_count")]
    pub evaluation_count: u32,
}

/// Lifecycle status of a course.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    Draft,
    Upcoming,
    Active,
    Completed,
    Archived,
    #[default]
    #[serde(other)]
    Unknown,
}

impl CourseStatus {
    /// Human-readable label for status badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Upcoming => "Upcoming",
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Archived => "Archived",
            Self::Unknown => "Unknown",
        }
    }

    /// BEM modifier used for the status badge class.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Upcoming => "upcoming",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Archived => "archived",
            Self::Unknown => "unknown",
        }
    }
}

/// Course header attached to an evaluation export.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportCourse {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "courseCode", default)]
    pub course_code: String,
    #[serde(rename = "teacherName", default)]
    pub teacher_name: String,
}

/// One survey response, keyed by column name.
pub type ResponseRow = serde_json::Map<String, serde_json::Value>;

/// Tabular evaluation export for a single course.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationExport {
    #[serde(default)]
    pub course: ExportCourse,
    #[serde(rename = "totalResponses", default, deserialize_with = "deserialize_count")]
    pub total_responses: u32,
    /// Ordered column names; `None` when the server omitted the field.
    #[serde(default)]
    pub columns: Option<Vec<String>>,
    /// Response rows in server order.
    #[serde(default)]
    pub data: Vec<ResponseRow>,
}

impl EvaluationExport {
    /// Number of questions, if the server supplied a column list.
    pub fn question_count(&self) -> Option<usize> {
        self.columns.as_ref().map(Vec::len)
    }
}

/// A decoded export together with the exact JSON it was decoded from.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedExport {
    pub export: EvaluationExport,
    pub raw: serde_json::Value,
}

impl LoadedExport {
    /// Decode an export while keeping the raw document for the JSON preview.
    ///
    /// # Errors
    ///
    /// Returns the serde error if `raw` does not match the export schema.
    pub fn from_value(raw: serde_json::Value) -> Result<Self, serde_json::Error> {
        let export = EvaluationExport::deserialize(&raw)?;
        Ok(Self { export, raw })
    }

    /// Pretty-printed raw JSON for the preview block.
    pub fn pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| self.raw.to_string())
    }
}

fn deserialize_course_ref<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<CourseRef>::deserialize(deserializer).map(|course| course.map(CourseRef::into_id))
}

/// Accept integer-valued JSON numbers (including `3.0`) and `null` as a count.
fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return u32::try_from(int).map_err(|_| D::Error::custom(format!("value {int} out of range for u32")));
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= f64::from(u32::MAX)
            {
                return Ok(float as u32);
            }
            Err(D::Error::custom("expected non-negative integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
