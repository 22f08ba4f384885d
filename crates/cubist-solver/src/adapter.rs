//! The solver adapter: validated state in, ordered human-readable steps out.
//!
//! [`SolverAdapter`] is the one entry point callers use. It validates the
//! state (so the backend only ever sees states a real cube can reach),
//! short-circuits the already-solved cube to an empty step list, bounds the
//! backend call with an explicit deadline, and maps the returned move
//! tokens to [`SolutionStep`]s preserving the solver's order exactly.
//! Solving is deterministic for a valid state, so nothing here retries.

use std::time::Duration;

use cubist_types::{Move, SolutionStep};
use tracing::{debug, warn};

use crate::backend::SolverBackend;
use crate::error::SolveError;
use crate::validate;

/// The solver adapter owned by the application for its whole lifetime.
pub struct SolverAdapter {
    backend: SolverBackend,
    timeout: Duration,
}

impl SolverAdapter {
    /// Create an adapter over `backend` with the given solve deadline.
    pub const fn new(backend: SolverBackend, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    /// Name of the underlying backend, for logging and the status page.
    pub const fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Solve a 54-character cube state into ordered steps.
    ///
    /// The returned steps must be applied in order; an empty list means the
    /// cube is already solved.
    ///
    /// # Errors
    ///
    /// Returns the validation error for a state that is malformed,
    /// imbalanced, or unreachable; [`SolveError::Timeout`] when the backend
    /// misses the deadline; and the backend's own error otherwise.
    pub async fn solve(&self, state: &str) -> Result<Vec<SolutionStep>, SolveError> {
        validate::validate(state)?;

        if validate::is_solved(state) {
            debug!("state is already solved, skipping backend");
            return Ok(Vec::new());
        }

        let limit_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
        let moves = tokio::time::timeout(self.timeout, self.backend.solve(state))
            .await
            .map_err(|_elapsed| SolveError::Timeout { limit_ms })??;

        debug!(moves = %moves, "solver answered");
        Ok(map_steps(&moves))
    }
}

/// Map a whitespace-separated move string to steps, in order.
///
/// Tokens outside the 18-move alphabet should not occur when the backend
/// honors its contract; if one does, it degrades to a verbatim step instead
/// of failing the whole response.
fn map_steps(moves: &str) -> Vec<SolutionStep> {
    moves
        .split_whitespace()
        .map(|token| match token.parse::<Move>() {
            Ok(mv) => SolutionStep::for_move(mv),
            Err(_) => {
                warn!(token, "unrecognized move token from solver, passing through verbatim");
                SolutionStep::verbatim(token)
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::backend::ScriptedSolver;
    use crate::validate::SOLVED_STATE;

    use super::*;

    /// The state after one clockwise U turn of a solved cube.
    const AFTER_U: &str = "UUUUUUUUUBBBRRRRRRRRRFFFFFFDDDDDDDDDFFFLLLLLLLLLBBBBBB";

    fn adapter_with(backend: ScriptedSolver) -> SolverAdapter {
        SolverAdapter::new(SolverBackend::Scripted(backend), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn solved_state_yields_empty_steps_without_a_backend() {
        // The table is empty: if the backend were consulted this would be
        // a backend error, so an Ok proves the fast path.
        let adapter = adapter_with(ScriptedSolver::new());
        let steps = adapter.solve(SOLVED_STATE).await.unwrap();
        assert!(steps.is_empty());
    }

    #[tokio::test]
    async fn steps_preserve_solver_order() {
        let adapter =
            adapter_with(ScriptedSolver::new().with_solution(AFTER_U, "R U R' U2"));
        let steps = adapter.solve(AFTER_U).await.unwrap();
        let tokens: Vec<&str> = steps.iter().map(|s| s.token.as_str()).collect();
        assert_eq!(tokens, ["R", "U", "R'", "U2"]);
    }

    #[tokio::test]
    async fn one_turn_state_maps_to_described_steps() {
        let adapter = adapter_with(ScriptedSolver::new().with_solution(AFTER_U, "U'"));
        let steps = adapter.solve(AFTER_U).await.unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(
            steps.first().map(|s| s.description.as_str()),
            Some("Rotate the Up face counter-clockwise")
        );
    }

    #[tokio::test]
    async fn solve_is_deterministic() {
        let adapter = adapter_with(ScriptedSolver::new().with_solution(AFTER_U, "U'"));
        let first = adapter.solve(AFTER_U).await.unwrap();
        let second = adapter.solve(AFTER_U).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn unknown_tokens_degrade_to_verbatim_steps() {
        let adapter = adapter_with(ScriptedSolver::new().with_solution(AFTER_U, "R M2 U"));
        let steps = adapter.solve(AFTER_U).await.unwrap();
        assert_eq!(steps.len(), 3);
        let middle = steps.get(1).unwrap();
        assert_eq!(middle.token, "M2");
        assert_eq!(middle.description, "M2");
        // The recognized neighbors still get real descriptions.
        assert_ne!(steps.first().unwrap().description, "R");
    }

    #[tokio::test]
    async fn invalid_states_never_reach_the_backend() {
        let adapter = adapter_with(ScriptedSolver::new());
        let err = adapter.solve("not a cube").await.unwrap_err();
        assert!(matches!(err, SolveError::MalformedState { .. }));

        // Symbol-balanced but physically impossible: twisted URF corner.
        let twisted = "UUUUUUUUFURRRRRRRRFFRFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";
        let err = adapter.solve(twisted).await.unwrap_err();
        assert!(matches!(err, SolveError::Unsolvable { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_backend_times_out() {
        let backend = ScriptedSolver::new()
            .with_solution(AFTER_U, "U'")
            .with_delay(Duration::from_secs(60));
        let adapter = SolverAdapter::new(
            SolverBackend::Scripted(backend),
            Duration::from_millis(50),
        );
        let err = adapter.solve(AFTER_U).await.unwrap_err();
        assert_eq!(err, SolveError::Timeout { limit_ms: 50 });
    }
}
