//! Mock implementations of port traits
//!
//! In-memory repository used by service unit tests and the end-to-end tests.
//! It honors the same contract as the PostgreSQL adapter: not-found on
//! missing ids, newest-first ordering, case-insensitive substring filtering.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Course, CourseFilter, CourseId, CoursePatch, NewCourse};
use crate::domain::ports::CourseRepository;
use crate::error::DomainError;

fn matches(course: &Course, filter: &CourseFilter) -> bool {
    filter.name.is_empty()
        || course
            .name
            .to_lowercase()
            .contains(&filter.name.to_lowercase())
}

/// In-memory Course repository
#[derive(Default, Clone)]
pub struct InMemoryCourseRepository {
    courses: Arc<RwLock<HashMap<CourseId, Course>>>,
    fail: bool,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every operation fails with a storage error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// Pre-populate with a course for testing
    pub fn with_course(self, course: Course) -> Self {
        {
            let mut courses = self.courses.write().unwrap();
            courses.insert(course.id, course);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.courses.read().unwrap().len()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if self.fail {
            Err(DomainError::Database(
                "simulated storage failure".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn create(&self, course: &NewCourse) -> Result<Course, DomainError> {
        self.check_failure()?;

        let course = Course {
            id: CourseId::new(),
            name: course.name.clone(),
            start_date: course.start_date,
            end_date: course.end_date,
            created_at: Utc::now(),
        };

        let mut courses = self.courses.write().unwrap();
        courses.insert(course.id, course.clone());
        Ok(course)
    }

    async fn get(&self, id: &CourseId) -> Result<Course, DomainError> {
        self.check_failure()?;

        let courses = self.courses.read().unwrap();
        courses.get(id).cloned().ok_or(DomainError::NotFound(*id))
    }

    async fn find_all(
        &self,
        filter: &CourseFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Course>, DomainError> {
        self.check_failure()?;

        let courses = self.courses.read().unwrap();
        let mut results: Vec<Course> = courses
            .values()
            .filter(|c| matches(c, filter))
            .cloned()
            .collect();
        results.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(results
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn count(&self, filter: &CourseFilter) -> Result<i64, DomainError> {
        self.check_failure()?;

        let courses = self.courses.read().unwrap();
        Ok(courses.values().filter(|c| matches(c, filter)).count() as i64)
    }

    async fn update(&self, id: &CourseId, patch: &CoursePatch) -> Result<(), DomainError> {
        self.check_failure()?;

        let mut courses = self.courses.write().unwrap();
        let course = courses.get_mut(id).ok_or(DomainError::NotFound(*id))?;

        if let Some(ref name) = patch.name {
            course.name = name.clone();
        }
        if let Some(start_date) = patch.start_date {
            course.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            course.end_date = end_date;
        }

        Ok(())
    }

    async fn delete(&self, id: &CourseId) -> Result<(), DomainError> {
        self.check_failure()?;

        let mut courses = self.courses.write().unwrap();
        courses.remove(id).map(|_| ()).ok_or(DomainError::NotFound(*id))
    }
}
