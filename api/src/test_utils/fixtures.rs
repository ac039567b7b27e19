//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{NaiveDate, Utc};

use crate::domain::entities::{Course, CourseId};

/// Create a test course with default values
pub fn test_course() -> Course {
    Course {
        id: CourseId::new(),
        name: "Algebra I".to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        created_at: Utc::now(),
    }
}

/// Create a test course with a specific name
pub fn test_course_named(name: &str) -> Course {
    Course {
        name: name.to_string(),
        ..test_course()
    }
}
