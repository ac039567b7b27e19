//! PostgreSQL adapter for CourseRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, Set,
};
use uuid::Uuid;

use crate::domain::entities::{Course, CourseFilter, CourseId, CoursePatch, NewCourse};
use crate::domain::ports::CourseRepository;
use crate::entity::courses;
use crate::error::DomainError;

/// PostgreSQL implementation of CourseRepository
pub struct PostgresCourseRepository {
    db: DatabaseConnection,
}

impl PostgresCourseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Narrow a course query by the name filter
///
/// A non-empty name is lower-cased and matched as a substring against
/// `LOWER(name)`; an empty name leaves the query untouched.
fn apply_filter(query: Select<courses::Entity>, filter: &CourseFilter) -> Select<courses::Entity> {
    if filter.name.is_empty() {
        return query;
    }

    let pattern = format!("%{}%", filter.name.to_lowercase());
    query.filter(Expr::expr(Func::lower(Expr::col(courses::Column::Name))).like(pattern))
}

#[async_trait]
impl CourseRepository for PostgresCourseRepository {
    async fn create(&self, course: &NewCourse) -> Result<Course, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let model = courses::ActiveModel {
            id: Set(id),
            name: Set(course.name.clone()),
            start_date: Set(course.start_date),
            end_date: Set(course.end_date),
            created_at: Set(Some(now)),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        tracing::debug!(id = %result.id, "Course created");
        Ok(result.into())
    }

    async fn get(&self, id: &CourseId) -> Result<Course, DomainError> {
        let result = courses::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Into::into).ok_or(DomainError::NotFound(*id))
    }

    async fn find_all(
        &self,
        filter: &CourseFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Course>, DomainError> {
        let results = apply_filter(courses::Entity::find(), filter)
            .order_by_desc(courses::Column::CreatedAt)
            .offset(offset as u64)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn count(&self, filter: &CourseFilter) -> Result<i64, DomainError> {
        let count = apply_filter(courses::Entity::find(), filter)
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count as i64)
    }

    async fn update(&self, id: &CourseId, patch: &CoursePatch) -> Result<(), DomainError> {
        // An UPDATE with an empty SET list is not valid SQL; an empty patch
        // reduces to the existence question.
        if patch.is_empty() {
            return self.get(id).await.map(|_| ());
        }

        let mut model = courses::ActiveModel {
            ..Default::default()
        };

        if let Some(ref name) = patch.name {
            model.name = Set(name.clone());
        }
        if let Some(start_date) = patch.start_date {
            model.start_date = Set(start_date);
        }
        if let Some(end_date) = patch.end_date {
            model.end_date = Set(end_date);
        }

        let result = courses::Entity::update_many()
            .set(model)
            .filter(courses::Column::Id.eq(id.0))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(*id));
        }

        Ok(())
    }

    async fn delete(&self, id: &CourseId) -> Result<(), DomainError> {
        let result = courses::Entity::delete_many()
            .filter(courses::Column::Id.eq(id.0))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(*id));
        }

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<courses::Model> for Course {
    fn from(model: courses::Model) -> Self {
        Course {
            id: CourseId(model.id),
            name: model.name,
            start_date: model.start_date,
            end_date: model.end_date,
            created_at: model
                .created_at
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(Utc::now),
        }
    }
}
