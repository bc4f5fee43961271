//! HTTP surface of the API.
//!
//! Routes:
//!
//! | Method/Path | Description |
//! |-------------|-------------|
//! | `GET /` | Welcome message |
//! | `GET /health` | Liveness probe |
//! | `GET /universities` | Supported source names |
//! | `GET /announcements` | All sources, aggregated and paginated |
//! | `GET /announcements/:university` | One source, paginated |
//!
//! Every response body is JSON. Failures use the `{"detail": "..."}` shape:
//! 404 when a university is unknown or a scrape produced nothing, 500 when
//! the scrape task itself dies. A source that cannot be reached is not an
//! error here; it surfaces as an empty result from the scrapers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::models::{AnnouncementPage, University};
use crate::pagination::{paginate, Pagination};
use crate::scrapers::{scrape_all, scrape_university};

/// Shared application state: the HTTP client carries the connection pool and
/// the per-request fetch timeout.
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
}

/// Errors surfaced to API clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/universities", get(universities))
        .route("/announcements", get(all_announcements))
        .route("/announcements/:university", get(university_announcements))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Admission Announcements API" }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn universities() -> Json<Value> {
    let names: Vec<&str> = University::ALL.iter().map(|u| u.name()).collect();
    Json(json!({ "data": names }))
}

/// `GET /announcements`: aggregate every source, then paginate.
async fn all_announcements(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<AnnouncementPage>, ApiError> {
    let client = state.client.clone();
    let announcements = tokio::spawn(async move { scrape_all(&client).await })
        .await
        .map_err(|e| {
            error!(error = %e, "Aggregate scrape task failed");
            ApiError::Internal
        })?;

    if announcements.is_empty() {
        return Err(ApiError::NotFound("No announcements found".to_string()));
    }

    let total = announcements.len();
    let data = paginate(&announcements, pagination.offset, pagination.limit.get());
    Ok(Json(AnnouncementPage {
        data,
        total,
        limit: pagination.limit.get(),
        offset: pagination.offset,
    }))
}

/// `GET /announcements/:university`: one source, paginated.
///
/// The path segment is matched case-insensitively; error messages echo the
/// raw value the client sent.
async fn university_announcements(
    State(state): State<AppState>,
    Path(university): Path<String>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<AnnouncementPage>, ApiError> {
    let Some(source) = University::from_key(&university) else {
        return Err(ApiError::NotFound(format!(
            "University '{university}' not found"
        )));
    };

    let client = state.client.clone();
    let announcements = tokio::spawn(async move { scrape_university(&client, source).await })
        .await
        .map_err(|e| {
            error!(university = %source, error = %e, "Scrape task failed");
            ApiError::Internal
        })?;

    if announcements.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No announcements found for {university}"
        )));
    }

    let total = announcements.len();
    let data = paginate(&announcements, pagination.offset, pagination.limit.get());
    Ok(Json(AnnouncementPage {
        data,
        total,
        limit: pagination.limit.get(),
        offset: pagination.offset,
    }))
}
