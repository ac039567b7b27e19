//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Course, CourseFilter, CourseId, CoursePatch, NewCourse};
use crate::error::DomainError;

/// Repository for Course entities
///
/// Every storage-level "no matching row" surfaces as
/// `DomainError::NotFound(id)`, distinct from other storage failures.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Persist a new course with a freshly generated id
    async fn create(&self, course: &NewCourse) -> Result<Course, DomainError>;

    /// Fetch a course by id
    async fn get(&self, id: &CourseId) -> Result<Course, DomainError>;

    /// List courses matching `filter`, newest first, sliced by offset/limit
    ///
    /// Returns an empty vec (not an error) when nothing matches.
    async fn find_all(
        &self,
        filter: &CourseFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Course>, DomainError>;

    /// Count all courses matching `filter`, ignoring offset/limit
    async fn count(&self, filter: &CourseFilter) -> Result<i64, DomainError>;

    /// Apply only the fields present in `patch`, leaving the rest untouched
    async fn update(&self, id: &CourseId, patch: &CoursePatch) -> Result<(), DomainError>;

    /// Remove a course
    async fn delete(&self, id: &CourseId) -> Result<(), DomainError>;
}
