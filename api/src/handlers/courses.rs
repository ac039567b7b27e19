//! Course handlers
//!
//! One endpoint per use case. Handlers decode the request, reject empty
//! required fields before touching the service, and let `AppError` classify
//! whatever comes back.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Course, CourseFilter, CourseId, PageMeta};
use crate::domain::ports::CourseRepository;
use crate::error::{AppError, DomainError};
use crate::AppState;

/// Request to create a course
///
/// Missing fields decode as empty strings and are rejected as required.
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

/// Request to partially update a course
///
/// Absent fields are left unchanged; a present-but-empty field is rejected.
#[derive(Debug, Deserialize)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Query parameters for listing courses
#[derive(Debug, Deserialize)]
pub struct ListCoursesQuery {
    pub name: Option<String>,
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub limit: i64,
}

/// Course response body
#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub created_at: String,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        CourseResponse {
            id: course.id.to_string(),
            name: course.name,
            start_date: course.start_date.to_string(),
            end_date: course.end_date.to_string(),
            created_at: course.created_at.to_rfc3339(),
        }
    }
}

/// Response for listing courses
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub data: Vec<CourseResponse>,
    pub meta: PageMeta,
}

/// POST /courses
pub async fn create_course<R: CourseRepository>(
    State(state): State<AppState<R>>,
    Json(request): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<CourseResponse>), AppError> {
    if request.name.is_empty() {
        return Err(DomainError::NameRequired.into());
    }
    if request.start_date.is_empty() {
        return Err(DomainError::StartDateRequired.into());
    }
    if request.end_date.is_empty() {
        return Err(DomainError::EndDateRequired.into());
    }

    let course = state
        .course_service
        .create(&request.name, &request.start_date, &request.end_date)
        .await?;

    Ok((StatusCode::CREATED, Json(course.into())))
}

/// GET /courses/:id
pub async fn get_course<R: CourseRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CourseResponse>, AppError> {
    let course = state.course_service.get(&CourseId(id)).await?;

    Ok(Json(course.into()))
}

/// GET /courses
pub async fn list_courses<R: CourseRepository>(
    State(state): State<AppState<R>>,
    Query(query): Query<ListCoursesQuery>,
) -> Result<Json<CourseListResponse>, AppError> {
    let filter = CourseFilter {
        name: query.name.unwrap_or_default(),
    };

    let total = state.course_service.count(&filter).await?;
    let meta = PageMeta::new(
        query.page,
        query.limit,
        total,
        state.config.default_page_limit,
    );

    let courses = state
        .course_service
        .get_all(&filter, meta.offset(), meta.limit())
        .await?;

    Ok(Json(CourseListResponse {
        data: courses.into_iter().map(Into::into).collect(),
        meta,
    }))
}

/// PATCH /courses/:id
pub async fn update_course<R: CourseRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCourseRequest>,
) -> Result<StatusCode, AppError> {
    if matches!(request.name.as_deref(), Some("")) {
        return Err(DomainError::NameRequired.into());
    }
    if matches!(request.start_date.as_deref(), Some("")) {
        return Err(DomainError::StartDateRequired.into());
    }
    if matches!(request.end_date.as_deref(), Some("")) {
        return Err(DomainError::EndDateRequired.into());
    }

    state
        .course_service
        .update(
            &CourseId(id),
            request.name,
            request.start_date.as_deref(),
            request.end_date.as_deref(),
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /courses/:id
pub async fn delete_course<R: CourseRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.course_service.delete(&CourseId(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
