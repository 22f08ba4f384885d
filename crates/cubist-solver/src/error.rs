//! Error types for the cubist-solver crate.
//!
//! Every way a solve can fail gets its own kind with the real reason
//! attached. The transport layer maps each kind to a distinct status code,
//! and nothing here collapses a cause into a generic string.

/// Errors that can occur while validating a cube state or solving it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// The state string is structurally invalid: wrong length, a symbol
    /// outside the `U R F D L B` alphabet, or off-scheme centers.
    #[error("malformed cube state: {reason}")]
    MalformedState {
        /// What exactly is malformed.
        reason: String,
    },

    /// A symbol occurs more or fewer than 9 times, which no physical cube
    /// can produce.
    #[error("impossible cube state: symbol '{symbol}' appears {count} times, expected 9")]
    SymbolImbalance {
        /// The offending face symbol.
        symbol: char,
        /// How many times it occurs.
        count: usize,
    },

    /// The state is symbol-balanced but not a configuration a real cube
    /// can reach: a rotated corner, a flipped edge, or a lone piece swap.
    #[error("unsolvable cube state: {reason}")]
    Unsolvable {
        /// Which physical constraint is violated.
        reason: String,
    },

    /// The backend did not answer within the configured deadline.
    /// Solving is deterministic, so the caller should not retry the same
    /// state; either the deadline is too tight or the service is down.
    #[error("solver timed out after {limit_ms} ms")]
    Timeout {
        /// The configured deadline in milliseconds.
        limit_ms: u64,
    },

    /// The external solver was unreachable or answered with a transport or
    /// service failure.
    #[error("solver backend error: {0}")]
    Backend(String),
}
