//! Course domain entity
//!
//! The single resource this service manages: a named entity bounded by a
//! start and an end calendar date.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(pub Uuid);

impl CourseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CourseId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CourseId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A course record
///
/// Invariant: `start_date <= end_date`, enforced by the service on create and
/// on every update that touches either date.
#[derive(Debug, Clone, Serialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Assigned by the repository; default list ordering key (newest first)
    pub created_at: DateTime<Utc>,
}

/// Data needed to create a new course
///
/// Dates are already parsed and ordered by the time this exists.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Partial update payload
///
/// `None` means "leave unchanged". The repository applies only the fields
/// that are present.
#[derive(Debug, Clone, Default)]
pub struct CoursePatch {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl CoursePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.start_date.is_none() && self.end_date.is_none()
    }
}

/// Query constraint for list and count operations
///
/// An empty name applies no constraint; a non-empty name matches as a
/// case-insensitive substring against the stored name.
#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    pub name: String,
}
