//! Face aggregation and scan sessions for the Cubist service.
//!
//! This crate owns the scan half of the workflow: collecting per-face color
//! observations into a complete 54-sticker cube state, the detector seam
//! that stands in for real sticker recognition, and per-session ownership
//! of in-progress scans. It sits between `cubist-types` (the vocabulary)
//! and the API layer (which handles transport).
//!
//! # Modules
//!
//! - [`aggregator`] -- [`CubeScan`]: record faces, track progress, compose
//!   the facelet string, reset
//! - [`detector`] -- [`ColorDetector`] seam plus stand-in implementations
//! - [`error`] -- Typed failure kinds for all scan operations
//! - [`session`] -- [`SessionStore`]: per-session isolation and idle expiry

pub mod aggregator;
pub mod detector;
pub mod error;
pub mod session;

// Re-export primary types at crate root for convenience.
pub use aggregator::{CubeScan, parse_face};
pub use detector::{ColorDetector, DetectError, FixedPatternDetector, RandomDetector};
pub use error::ScanError;
pub use session::{ScanSession, SessionStore};
