//! HTTP API server for the Cubist scan-and-solve service.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Session endpoints** for the scan workflow: mint a session, record
//!   faces one at a time (as color arrays or base64 images routed through
//!   the configured detector), check progress, reset, tear down
//! - **Solve endpoints** that compose and validate a session's cube state
//!   (or take one directly) and return ordered human-readable steps
//! - **Minimal HTML status page** (`GET /`) showing live session count,
//!   the configured detector and solver backend, and API links
//!
//! # Architecture
//!
//! Handlers are thin: session ownership and aggregation live in
//! `cubist-scan`, validation and solving in `cubist-solver`. The API layer
//! maps every domain error kind to its own HTTP status plus a stable
//! machine-readable `kind` tag, so no failure is ever flattened into a
//! generic message.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
