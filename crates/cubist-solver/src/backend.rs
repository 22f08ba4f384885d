//! Solver backend abstraction and implementations.
//!
//! Defines an enum-based dispatch for solver backends, avoiding the
//! dyn-compatibility issues with async trait methods. The actual two-phase
//! search is a black box behind this seam: the adapter sends a validated
//! 54-character state and expects back a whitespace-separated move string.
//!
//! [`RemoteSolver`] talks to an external solver service over HTTP via
//! `reqwest`. [`ScriptedSolver`] serves canned solutions from a table so
//! the scan-and-solve workflow can be exercised end-to-end (and tested)
//! before a solver service is deployed.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::SolveError;

// ---------------------------------------------------------------------------
// Unified backend enum (dyn-compatible alternative to async trait)
// ---------------------------------------------------------------------------

/// A solver backend that can turn a cube state into a move string.
///
/// Uses enum dispatch instead of trait objects because async methods
/// are not dyn-compatible in Rust.
pub enum SolverBackend {
    /// External solver service reached over HTTP.
    Remote(RemoteSolver),
    /// Canned solutions from an in-memory table.
    Scripted(ScriptedSolver),
}

impl SolverBackend {
    /// Ask the backend for the move string solving `state`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Backend`] if the backend fails or has no
    /// answer, or [`SolveError::Unsolvable`] if the remote service rejects
    /// the state outright.
    pub async fn solve(&self, state: &str) -> Result<String, SolveError> {
        match self {
            Self::Remote(backend) => backend.solve(state).await,
            Self::Scripted(backend) => backend.solve(state).await,
        }
    }

    /// Human-readable name for logging and the status page.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Remote(_) => "remote",
            Self::Scripted(_) => "scripted",
        }
    }
}

// ---------------------------------------------------------------------------
// Remote HTTP backend
// ---------------------------------------------------------------------------

/// Success payload of the solver service: the move string, empty for an
/// already-solved cube.
#[derive(Debug, Deserialize)]
struct RemoteSolution {
    solution: String,
}

/// Backend for an external solver service.
///
/// Sends `POST {base_url}/solve` with `{"state": "<54 chars>"}` and reads
/// `{"solution": "<move tokens>"}` back. A 4xx answer means the service
/// rejected the state; its body text is preserved in the error.
pub struct RemoteSolver {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteSolver {
    /// Create a backend for the service at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Send the state and return the solver's move string.
    async fn solve(&self, state: &str) -> Result<String, SolveError> {
        let url = format!("{}/solve", self.base_url);

        let body = serde_json::json!({ "state": state });

        debug!(url = %url, "dispatching state to solver service");
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| SolveError::Backend(format!("solver request failed: {e}")))?;

        let status = response.status();
        if status.is_client_error() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(SolveError::Unsolvable {
                reason: format!("solver rejected the state: {error_body}"),
            });
        }
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(SolveError::Backend(format!(
                "solver returned {status}: {error_body}"
            )));
        }

        let parsed: RemoteSolution = response
            .json()
            .await
            .map_err(|e| SolveError::Backend(format!("solver response parse failed: {e}")))?;

        Ok(parsed.solution)
    }
}

// ---------------------------------------------------------------------------
// Scripted backend
// ---------------------------------------------------------------------------

/// Backend serving canned solutions from a state -> moves table.
///
/// Plays the role a stub plays elsewhere in the stack: it lets the whole
/// pipeline run without the external service, and it makes solve behavior
/// deterministic in tests. States missing from the table are a backend
/// error, not a silent empty solution.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSolver {
    solutions: BTreeMap<String, String>,
    delay: Option<Duration>,
}

impl ScriptedSolver {
    /// Create a scripted backend with an empty table.
    pub const fn new() -> Self {
        Self {
            solutions: BTreeMap::new(),
            delay: None,
        }
    }

    /// Add a canned solution for a state.
    #[must_use]
    pub fn with_solution(mut self, state: &str, moves: &str) -> Self {
        self.solutions.insert(state.to_owned(), moves.to_owned());
        self
    }

    /// Delay every answer, simulating a slow search.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Look the state up in the table.
    async fn solve(&self, state: &str) -> Result<String, SolveError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.solutions
            .get(state)
            .cloned()
            .ok_or_else(|| SolveError::Backend("no scripted solution for this state".to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_returns_its_table_entry() {
        let backend = SolverBackend::Scripted(ScriptedSolver::new().with_solution("STATE", "R U R'"));
        assert_eq!(backend.solve("STATE").await.unwrap(), "R U R'");
    }

    #[tokio::test]
    async fn scripted_misses_are_backend_errors() {
        let backend = SolverBackend::Scripted(ScriptedSolver::new());
        let err = backend.solve("STATE").await.unwrap_err();
        assert!(matches!(err, SolveError::Backend(_)));
    }

    #[test]
    fn backend_names() {
        assert_eq!(SolverBackend::Scripted(ScriptedSolver::new()).name(), "scripted");
        assert_eq!(
            SolverBackend::Remote(RemoteSolver::new("http://localhost:8081")).name(),
            "remote"
        );
    }
}
