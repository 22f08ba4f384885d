//! Axum router construction for the Cubist API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled so the scanning web client can call the API cross-origin.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the Cubist server.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `POST /api/sessions` -- mint a scanning session
/// - `GET /api/sessions/:id` -- scan progress
/// - `DELETE /api/sessions/:id` -- tear a session down
/// - `POST /api/sessions/:id/faces` -- record one face
/// - `POST /api/sessions/:id/reset` -- reset the session
/// - `POST /api/sessions/:id/solve` -- solve the scanned cube
/// - `POST /api/solve` -- solve a pre-composed state
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // Sessions
        .route("/api/sessions", post(handlers::create_session))
        .route(
            "/api/sessions/{id}",
            get(handlers::get_progress).delete(handlers::delete_session),
        )
        .route("/api/sessions/{id}/faces", post(handlers::scan_face))
        .route("/api/sessions/{id}/reset", post(handlers::reset_session))
        .route("/api/sessions/{id}/solve", post(handlers::solve_session))
        // Direct solve
        .route("/api/solve", post(handlers::solve_direct))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
