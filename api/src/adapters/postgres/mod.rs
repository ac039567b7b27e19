//! PostgreSQL adapters

pub mod course_repo;

pub use course_repo::PostgresCourseRepository;
