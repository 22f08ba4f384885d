//! REST API endpoint handlers for the Cubist server.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `POST` | `/api/sessions` | Mint a new scanning session |
//! | `GET` | `/api/sessions/:id` | Scan progress for one session |
//! | `DELETE` | `/api/sessions/:id` | Tear a session down |
//! | `POST` | `/api/sessions/:id/faces` | Record one face (colors or image) |
//! | `POST` | `/api/sessions/:id/reset` | Reset the session to empty |
//! | `POST` | `/api/sessions/:id/solve` | Compose, validate, and solve the session's cube |
//! | `POST` | `/api/solve` | Validate and solve a pre-composed state string |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use base64::{Engine as _, engine::general_purpose};
use cubist_scan::parse_face;
use cubist_types::{FaceObservation, SessionId};
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request payload structs
// ---------------------------------------------------------------------------

/// Body of `POST /api/sessions/:id/faces`.
///
/// Exactly one of the two fields is needed. When both are present the
/// colors array wins: it is the client's own ground truth, while the image
/// path exists for clients that delegate detection to the server.
#[derive(Debug, serde::Deserialize)]
pub struct ScanFaceRequest {
    /// The 9 sticker colors in raster order, as names or one-letter forms.
    pub colors: Option<Vec<String>>,
    /// A base64-encoded captured face image (optionally a data URL).
    pub image: Option<String>,
}

/// Body of `POST /api/solve`.
#[derive(Debug, serde::Deserialize)]
pub struct SolveRequest {
    /// The 54-character cube-state string.
    pub state: String,
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing server status and API links.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let active_sessions = state.sessions.active_count().await;
    let detector = state.detector.name();
    let solver = state.solver.backend_name();
    let uptime_secs = chrono::Utc::now()
        .signed_duration_since(state.started_at)
        .num_seconds();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Cubist</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        .metric {{
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #58a6ff; font-size: 1.5rem; font-weight: bold; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        .status {{ color: #3fb950; font-weight: bold; }}
        hr {{ border: none; border-top: 1px solid #30363d; margin: 1.5rem 0; }}
        code {{ color: #7ee787; }}
    </style>
</head>
<body>
    <h1>Cubist</h1>
    <p class="subtitle">Cube scan-and-solve server</p>

    <p>Status: <span class="status">RUNNING</span></p>

    <div>
        <div class="metric">
            <div class="label">Active sessions</div>
            <div class="value">{active_sessions}</div>
        </div>
        <div class="metric">
            <div class="label">Detector</div>
            <div class="value">{detector}</div>
        </div>
        <div class="metric">
            <div class="label">Solver</div>
            <div class="value">{solver}</div>
        </div>
        <div class="metric">
            <div class="label">Uptime (s)</div>
            <div class="value">{uptime_secs}</div>
        </div>
    </div>

    <hr>

    <h2>API Endpoints</h2>
    <ul>
        <li><code>POST /api/sessions</code> -- mint a scanning session</li>
        <li><code>GET /api/sessions/:id</code> -- scan progress</li>
        <li><code>POST /api/sessions/:id/faces</code> -- record one face</li>
        <li><code>POST /api/sessions/:id/reset</code> -- reset the session</li>
        <li><code>DELETE /api/sessions/:id</code> -- tear the session down</li>
        <li><code>POST /api/sessions/:id/solve</code> -- solve the scanned cube</li>
        <li><code>POST /api/solve</code> -- solve a 54-character state directly</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// POST /api/sessions -- mint a session
// ---------------------------------------------------------------------------

/// Create a new scanning session and return its identifier.
pub async fn create_session(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let id = state.sessions.create().await;
    info!(session_id = %id, "session created");
    (
        StatusCode::CREATED,
        Json(serde_json::json!({ "session_id": id })),
    )
}

// ---------------------------------------------------------------------------
// GET /api/sessions/:id -- scan progress
// ---------------------------------------------------------------------------

/// Return the scan progress of one session.
pub async fn get_progress(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_session_id(&id_str)?;
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or(ApiError::SessionNotFound(id))?;

    let mut guard = session.lock().await;
    guard.touch();
    let progress = guard.scan.progress();

    Ok(Json(serde_json::json!({
        "session_id": id,
        "faces_recorded": progress.faces_recorded,
        "is_complete": progress.is_complete,
        "created_at": guard.created_at,
        "last_active": guard.last_active,
    })))
}

// ---------------------------------------------------------------------------
// DELETE /api/sessions/:id -- tear a session down
// ---------------------------------------------------------------------------

/// Remove a session entirely.
pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_session_id(&id_str)?;
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::SessionNotFound(id))
    }
}

// ---------------------------------------------------------------------------
// POST /api/sessions/:id/faces -- record one face
// ---------------------------------------------------------------------------

/// Record the next face of a session's cube.
///
/// The face is supplied either as a `colors` array (9 names or one-letter
/// forms) or as a base64 `image` run through the configured detector.
pub async fn scan_face(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
    Json(request): Json<ScanFaceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_session_id(&id_str)?;
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or(ApiError::SessionNotFound(id))?;

    let observation = observation_from_request(&state, &request)?;
    let color_names: Vec<&'static str> =
        observation.stickers().iter().map(|c| c.name()).collect();

    let mut guard = session.lock().await;
    guard.touch();
    let face_index = guard.scan.record_face(observation)?;
    let progress = guard.scan.progress();

    info!(
        session_id = %id,
        face_index,
        faces_recorded = progress.faces_recorded,
        "face recorded"
    );

    Ok(Json(serde_json::json!({
        "session_id": id,
        "face_index": face_index,
        "colors": color_names,
        "faces_recorded": progress.faces_recorded,
        "is_complete": progress.is_complete,
    })))
}

// ---------------------------------------------------------------------------
// POST /api/sessions/:id/reset -- back to empty
// ---------------------------------------------------------------------------

/// Reset a session's scan to empty. Idempotent.
pub async fn reset_session(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_session_id(&id_str)?;
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or(ApiError::SessionNotFound(id))?;

    let mut guard = session.lock().await;
    guard.touch();
    guard.scan.reset();
    info!(session_id = %id, "session reset");

    Ok(Json(serde_json::json!({
        "session_id": id,
        "faces_recorded": 0,
        "is_complete": false,
    })))
}

// ---------------------------------------------------------------------------
// POST /api/sessions/:id/solve -- solve the scanned cube
// ---------------------------------------------------------------------------

/// Compose the session's cube state, validate it, and solve it.
///
/// The composed state is captured under the session lock, but the solver
/// call itself runs outside it so a slow solve never blocks the session.
pub async fn solve_session(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_session_id(&id_str)?;
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or(ApiError::SessionNotFound(id))?;

    let cube_state = {
        let mut guard = session.lock().await;
        guard.touch();
        guard.scan.compose()?
    };

    let steps = state.solver.solve(&cube_state).await?;
    info!(session_id = %id, move_count = steps.len(), "cube solved");

    Ok(Json(serde_json::json!({
        "session_id": id,
        "state": cube_state,
        "steps": steps,
        "move_count": steps.len(),
    })))
}

// ---------------------------------------------------------------------------
// POST /api/solve -- solve a pre-composed state
// ---------------------------------------------------------------------------

/// Validate and solve a 54-character state string supplied directly.
pub async fn solve_direct(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SolveRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let steps = state.solver.solve(&request.state).await?;
    info!(move_count = steps.len(), "cube solved");

    Ok(Json(serde_json::json!({
        "state": request.state,
        "steps": steps,
        "move_count": steps.len(),
    })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a session id from a path segment.
fn parse_session_id(s: &str) -> Result<SessionId, ApiError> {
    s.parse::<Uuid>()
        .map(SessionId::from)
        .map_err(|e| ApiError::InvalidSessionId(format!("{s}: {e}")))
}

/// Turn a face request into a validated observation: the colors array when
/// present, otherwise the image through the detector.
fn observation_from_request(
    state: &AppState,
    request: &ScanFaceRequest,
) -> Result<FaceObservation, ApiError> {
    if let Some(colors) = &request.colors {
        return Ok(parse_face(colors)?);
    }
    if let Some(image) = &request.image {
        let bytes = decode_image(image)?;
        return Ok(state.detector.detect(&bytes)?);
    }
    Err(ApiError::MissingFaceInput)
}

/// Decode a base64 image field, tolerating a data-URL prefix.
fn decode_image(image: &str) -> Result<Vec<u8>, ApiError> {
    let payload = image
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(','))
        .map_or(image, |(_, data)| data);
    general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| ApiError::InvalidImage(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn decode_image_accepts_plain_base64() {
        let encoded = general_purpose::STANDARD.encode(b"pixels");
        assert_eq!(decode_image(&encoded).unwrap(), b"pixels");
    }

    #[test]
    fn decode_image_accepts_data_urls() {
        let encoded = general_purpose::STANDARD.encode(b"pixels");
        let data_url = format!("data:image/png;base64,{encoded}");
        assert_eq!(decode_image(&data_url).unwrap(), b"pixels");
    }

    #[test]
    fn decode_image_rejects_garbage() {
        assert!(decode_image("!!not base64!!").is_err());
    }
}
