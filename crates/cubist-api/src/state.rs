//! Shared application state for the API server.
//!
//! [`AppState`] holds everything the handlers need: the session store, the
//! color detector behind its seam, and the solver adapter. Wrapped in
//! [`Arc`](std::sync::Arc) and injected via Axum's `State` extractor.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use cubist_scan::{ColorDetector, SessionStore};
use cubist_solver::SolverAdapter;

/// Shared state for the Axum application.
pub struct AppState {
    /// Registry of live scanning sessions.
    pub sessions: SessionStore,
    /// The color source for image-based face scans.
    pub detector: Arc<dyn ColorDetector>,
    /// The solver adapter (validation + external backend + step mapping).
    pub solver: SolverAdapter,
    /// When this server started, for the status page.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Assemble application state from its parts.
    pub fn new(detector: Arc<dyn ColorDetector>, solver: SolverAdapter) -> Self {
        Self {
            sessions: SessionStore::new(),
            detector,
            solver,
            started_at: Utc::now(),
        }
    }
}
