//! HTTP API routes
//!
//! Defines the REST API endpoints driving the map frontend.

use crate::error::Error;
use crate::geo::{Geocoder, ResolutionOutcome, ResolvedLocation};
use crate::marker::{Marker, MarkerSlot};
use crate::server::state::AppState;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Create the API router
pub fn create_router<G: Geocoder + 'static>(state: Arc<AppState<G>>) -> Router {
    // Static files served relative to cwd, falling back to the binary's
    // directory
    let static_path = if std::path::Path::new("static").exists() {
        "static".to_string()
    } else if let Ok(exe_path) = std::env::current_exe() {
        match exe_path.parent() {
            Some(exe_dir) if exe_dir.join("static").exists() => {
                exe_dir.join("static").to_string_lossy().to_string()
            }
            _ => "static".to_string(),
        }
    } else {
        "static".to_string()
    };

    Router::new()
        .route("/api/distance", post(distance_handler::<G>))
        .route("/api/search", get(search_handler::<G>))
        .route("/api/markers", get(markers_handler::<G>))
        .route("/api/map-config", get(map_config_handler::<G>))
        .nest_service(
            "/",
            ServeDir::new(&static_path).append_index_html_on_directories(true),
        )
        .with_state(state)
}

/// Distance request body
#[derive(Debug, Deserialize)]
pub struct DistanceRequest {
    /// Start location query (place name or "lat, lon")
    pub start: String,
    /// End location query
    pub end: String,
}

/// Distance response body
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResponse {
    pub kilometers: f64,
    pub start: Option<Marker>,
    pub end: Option<Marker>,
}

/// Search query parameters
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.code.as_str() {
            "EMPTY_QUERY" => StatusCode::BAD_REQUEST,
            "NOT_FOUND" => StatusCode::NOT_FOUND,
            "TRANSPORT_FAILURE" => StatusCode::BAD_GATEWAY,
            "SUPERSEDED" => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::EmptyQuery => "EMPTY_QUERY",
            Error::NotFound(_) => "NOT_FOUND",
            Error::Transport(_) => "TRANSPORT_FAILURE",
            Error::Superseded => "SUPERSEDED",
            Error::Config(_) => "CONFIG_ERROR",
            _ => "INTERNAL_ERROR",
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}

/// POST /api/distance — resolve both queries and compute the distance
async fn distance_handler<G: Geocoder + 'static>(
    State(state): State<Arc<AppState<G>>>,
    Json(request): Json<DistanceRequest>,
) -> Result<Json<DistanceResponse>, ApiError> {
    let result = state
        .orchestrator
        .calculate(&request.start, &request.end)
        .await?;

    Ok(Json(DistanceResponse {
        kilometers: result.kilometers,
        start: state.orchestrator.marker(MarkerSlot::Start).await,
        end: state.orchestrator.marker(MarkerSlot::End).await,
    }))
}

/// GET /api/search?q= — one-shot coordinate lookup
///
/// On a match, the search-context marker is placed so the map can show the
/// found point alongside any calculated pair. On a failed lookup any
/// previous context marker is removed; the map never keeps showing a point
/// the status text says was not found.
async fn search_handler<G: Geocoder + 'static>(
    State(state): State<Arc<AppState<G>>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ResolvedLocation>, ApiError> {
    match state.search.search(&params.q).await {
        ResolutionOutcome::Resolved(location) => {
            state
                .orchestrator
                .mark_search_context(location.clone())
                .await;
            Ok(Json(location))
        }
        ResolutionOutcome::NotFound => {
            state.orchestrator.clear_search_context().await;
            Err(Error::NotFound(params.q).into())
        }
        ResolutionOutcome::TransportFailure(reason) => {
            state.orchestrator.clear_search_context().await;
            Err(Error::Transport(reason).into())
        }
    }
}

/// GET /api/markers — the markers the map should currently render
async fn markers_handler<G: Geocoder + 'static>(
    State(state): State<Arc<AppState<G>>>,
) -> Json<Vec<Marker>> {
    Json(state.orchestrator.markers().await)
}

/// GET /api/map-config — tile layer and initial viewport for the frontend
async fn map_config_handler<G: Geocoder + 'static>(
    State(state): State<Arc<AppState<G>>>,
) -> impl IntoResponse {
    Json(state.config.map.clone())
}
