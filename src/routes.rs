use axum::extract::{OriginalUri, Path, Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum::{Router, http::StatusCode, routing::get};
use serde::Deserialize;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::api;
use crate::error::AppError;
use crate::state::AppState;
use crate::views::{
    self, CatalogPage, CourseDetailPage, DashboardPage, DashboardTab, HomePage, NotFoundPage,
};

#[derive(Deserialize)]
struct DashboardParams {
    tab: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/dashboard", get(dashboard))
        .route("/courses", get(course_catalog))
        .route("/courses/{id}", get(course_detail))
        .route("/health", get(health))
        .nest("/api", api::router())
        .fallback(page_not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn home() -> Result<Html<String>, AppError> {
    views::render(&HomePage::build())
}

async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<Html<String>, AppError> {
    let tab = DashboardTab::parse(params.tab.as_deref());
    debug!("rendering dashboard tab {}", tab.slug());
    views::render(&DashboardPage::build(&state.catalog, tab))
}

async fn course_catalog(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    views::render(&CatalogPage::build(&state.catalog))
}

async fn course_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    // Non-numeric ids cannot name a course, so they get the same 404 page.
    let course = id.parse::<u32>().ok().and_then(|id| state.catalog.course(id));
    match course {
        Some(course) => {
            Ok(views::render(&CourseDetailPage::build(&state.catalog, course))?.into_response())
        }
        None => not_found_response(&state, &format!("/courses/{}", id)),
    }
}

async fn page_not_found(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<Response, AppError> {
    not_found_response(&state, uri.path())
}

fn not_found_response(state: &AppState, path: &str) -> Result<Response, AppError> {
    debug!("no page at {}", path);
    let page = views::render(&NotFoundPage::build(&state.catalog, path))?;
    Ok((StatusCode::NOT_FOUND, page).into_response())
}
