//! Course service
//!
//! Owns the business rules: date parsing, chronological consistency and the
//! read-before-update orchestration for partial updates. Storage mechanics
//! are delegated to the injected repository.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::entities::{Course, CourseFilter, CourseId, CoursePatch, NewCourse};
use crate::domain::ports::CourseRepository;
use crate::error::DomainError;

/// Calendar-date wire format for start/end dates
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Service for managing courses
pub struct CourseService<R>
where
    R: CourseRepository,
{
    courses: Arc<R>,
}

impl<R> CourseService<R>
where
    R: CourseRepository,
{
    pub fn new(courses: Arc<R>) -> Self {
        Self { courses }
    }

    /// Create a course from raw date texts
    ///
    /// Both dates must parse as `YYYY-MM-DD` and the start date must not fall
    /// after the end date. Nothing is persisted unless every check passes.
    pub async fn create(
        &self,
        name: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Course, DomainError> {
        let start_date = NaiveDate::parse_from_str(start_date, DATE_FORMAT).map_err(|e| {
            tracing::warn!(error = %e, "Failed to parse start date");
            DomainError::InvalidStartDate
        })?;

        let end_date = NaiveDate::parse_from_str(end_date, DATE_FORMAT).map_err(|e| {
            tracing::warn!(error = %e, "Failed to parse end date");
            DomainError::InvalidEndDate
        })?;

        if start_date > end_date {
            return Err(DomainError::EndBeforeStart);
        }

        let course = self
            .courses
            .create(&NewCourse {
                name: name.to_string(),
                start_date,
                end_date,
            })
            .await?;

        tracing::info!(id = %course.id, "Course created");
        Ok(course)
    }

    pub async fn get(&self, id: &CourseId) -> Result<Course, DomainError> {
        self.courses.get(id).await
    }

    pub async fn get_all(
        &self,
        filter: &CourseFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Course>, DomainError> {
        self.courses.find_all(filter, offset, limit).await
    }

    pub async fn count(&self, filter: &CourseFilter) -> Result<i64, DomainError> {
        self.courses.count(filter).await
    }

    pub async fn delete(&self, id: &CourseId) -> Result<(), DomainError> {
        self.courses.delete(id).await?;
        tracing::info!(%id, "Course deleted");
        Ok(())
    }

    /// Apply a partial update
    ///
    /// The stored record is fetched first even for name-only updates, because
    /// date consistency is checked against the currently stored dates: a new
    /// start date must not fall after the stored end date, and the stored
    /// start date must not fall after a new end date. When both dates are
    /// supplied together each is still checked against the stored value of
    /// the other field, not against the other's incoming value.
    pub async fn update(
        &self,
        id: &CourseId,
        name: Option<String>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<(), DomainError> {
        let course = self.courses.get(id).await?;

        let mut patch = CoursePatch {
            name,
            ..Default::default()
        };

        if let Some(text) = start_date {
            let date = NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|e| {
                tracing::warn!(error = %e, "Failed to parse start date");
                DomainError::InvalidStartDate
            })?;

            if date > course.end_date {
                return Err(DomainError::EndBeforeStart);
            }

            patch.start_date = Some(date);
        }

        if let Some(text) = end_date {
            let date = NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|e| {
                tracing::warn!(error = %e, "Failed to parse end date");
                DomainError::InvalidEndDate
            })?;

            if course.start_date > date {
                return Err(DomainError::EndBeforeStart);
            }

            patch.end_date = Some(date);
        }

        self.courses.update(id, &patch).await?;
        tracing::info!(%id, "Course updated");
        Ok(())
    }
}
