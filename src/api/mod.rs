//! Read-only JSON mirror of the catalog.

use axum::Json;
use axum::extract::{Path, State};
use axum::{Router, routing::get};
use serde::Serialize;

use crate::classify::{
    ActivityPresentation, StatusPresentation, classify_activity, classify_status,
};
use crate::error::AppError;
use crate::models::{Activity, CatalogCourse, EnrolledCourse, OverviewStats};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CourseResponse {
    #[serde(flatten)]
    pub course: CatalogCourse,
    pub presentation: StatusPresentation,
}

impl CourseResponse {
    fn from_course(course: &CatalogCourse) -> Self {
        Self {
            presentation: classify_status(&course.status),
            course: course.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    #[serde(flatten)]
    pub activity: Activity,
    pub presentation: ActivityPresentation,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/courses", get(list_courses))
        .route("/courses/{id}", get(get_course))
        .route("/enrolled", get(list_enrolled))
        .route("/activities", get(list_activities))
        .route("/overview", get(overview))
}

async fn list_courses(State(state): State<AppState>) -> Json<Vec<CourseResponse>> {
    Json(
        state
            .catalog
            .courses
            .iter()
            .map(CourseResponse::from_course)
            .collect(),
    )
}

async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<CourseResponse>, AppError> {
    let course = state.catalog.course(id).ok_or(AppError::NotFound)?;
    Ok(Json(CourseResponse::from_course(course)))
}

async fn list_enrolled(State(state): State<AppState>) -> Json<Vec<EnrolledCourse>> {
    Json(state.catalog.enrolled.clone())
}

async fn list_activities(State(state): State<AppState>) -> Json<Vec<ActivityResponse>> {
    let activities = state
        .catalog
        .activities
        .iter()
        .map(|activity| ActivityResponse {
            presentation: classify_activity(&activity.kind),
            activity: activity.clone(),
        })
        .collect();
    Json(activities)
}

async fn overview(State(state): State<AppState>) -> Json<OverviewStats> {
    Json(state.catalog.overview())
}
