//! Error types for the API layer.
//!
//! [`ApiError`] unifies every failure mode into a single enum that converts
//! into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Each
//! domain error kind keeps its own status code and a stable machine-readable
//! `kind` tag in the body, so clients can tell a capacity rejection from a
//! validation failure without parsing prose.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cubist_scan::{DetectError, ScanError};
use cubist_solver::SolveError;
use cubist_types::SessionId;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A scan operation failed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Validation or solving failed.
    #[error(transparent)]
    Solve(#[from] SolveError),

    /// The color detector rejected the image payload.
    #[error(transparent)]
    Detect(#[from] DetectError),

    /// No session exists with the given id.
    #[error("unknown session: {0}")]
    SessionNotFound(SessionId),

    /// The session id in the request path is not a UUID.
    #[error("invalid session id: {0}")]
    InvalidSessionId(String),

    /// A face request carried neither a colors array nor an image.
    #[error("scan request needs either a colors array or an image")]
    MissingFaceInput,

    /// The image field could not be decoded as base64.
    #[error("invalid image payload: {0}")]
    InvalidImage(String),
}

impl ApiError {
    /// Stable machine-readable tag for the failure kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Scan(scan) => match scan {
                ScanError::WrongStickerCount { .. } | ScanError::UnknownColor { .. } => {
                    "validation_error"
                }
                ScanError::FacesComplete => "capacity_error",
                ScanError::Incomplete { .. } => "incomplete_state",
                ScanError::ColorImbalance { .. } => "invalid_cube_state",
            },
            Self::Solve(solve) => match solve {
                SolveError::MalformedState { .. } => "malformed_state",
                SolveError::SymbolImbalance { .. } => "invalid_cube_state",
                SolveError::Unsolvable { .. } => "unsolvable_state",
                SolveError::Timeout { .. } => "solver_timeout",
                SolveError::Backend(_) => "solver_backend_error",
            },
            Self::Detect(_) | Self::MissingFaceInput | Self::InvalidImage(_) => "validation_error",
            Self::SessionNotFound(_) => "session_not_found",
            Self::InvalidSessionId(_) => "invalid_session_id",
        }
    }

    /// The HTTP status this failure maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Scan(scan) => match scan {
                ScanError::WrongStickerCount { .. }
                | ScanError::UnknownColor { .. }
                | ScanError::ColorImbalance { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                ScanError::FacesComplete | ScanError::Incomplete { .. } => StatusCode::CONFLICT,
            },
            Self::Solve(solve) => match solve {
                SolveError::MalformedState { .. }
                | SolveError::SymbolImbalance { .. }
                | SolveError::Unsolvable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                SolveError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
                SolveError::Backend(_) => StatusCode::BAD_GATEWAY,
            },
            Self::Detect(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::SessionNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidSessionId(_) | Self::MissingFaceInput | Self::InvalidImage(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({
            "error": self.to_string(),
            "kind": self.kind(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_rejection_is_a_conflict() {
        let err = ApiError::Scan(ScanError::FacesComplete);
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.kind(), "capacity_error");
    }

    #[test]
    fn unsolvable_is_unprocessable_with_its_own_kind() {
        let err = ApiError::Solve(SolveError::Unsolvable {
            reason: "corner twist".to_owned(),
        });
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.kind(), "unsolvable_state");
    }

    #[test]
    fn timeout_maps_to_gateway_timeout() {
        let err = ApiError::Solve(SolveError::Timeout { limit_ms: 5000 });
        assert_eq!(err.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(err.kind(), "solver_timeout");
    }

    #[test]
    fn messages_keep_the_real_reason() {
        let err = ApiError::Solve(SolveError::Unsolvable {
            reason: "edge flip parity is off: an edge is flipped in place".to_owned(),
        });
        assert!(err.to_string().contains("edge flip parity"));
    }
}
