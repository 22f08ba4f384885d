//! Error types for the cubist-scan crate.
//!
//! All operations that can fail return typed errors rather than panicking.
//! Each failure kind is distinct so the transport layer can map it to its
//! own status code and the client sees the real reason, not a generic
//! catch-all string.

use cubist_types::{StickerColor, UnknownColor, WrongStickerCount};

/// Errors that can occur while recording faces or composing a cube state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// A face payload did not hold exactly 9 stickers.
    #[error("invalid face: {source}")]
    WrongStickerCount {
        /// The underlying count mismatch.
        #[from]
        source: WrongStickerCount,
    },

    /// A color token in a face payload was not recognized.
    #[error("invalid face: {source}")]
    UnknownColor {
        /// The underlying parse failure.
        #[from]
        source: UnknownColor,
    },

    /// A face was submitted to a scan that already holds all six faces.
    /// Extra scans are rejected, never silently overwritten.
    #[error("all six faces are already recorded; reset the session to scan a new cube")]
    FacesComplete,

    /// Composition was attempted before all six faces were recorded.
    #[error("cube state is incomplete: {recorded} of 6 faces recorded")]
    Incomplete {
        /// Faces recorded at the time of the attempt.
        recorded: usize,
    },

    /// A color occurs more or fewer than 9 times across the six faces,
    /// which no physical cube can produce.
    #[error("impossible cube: {color} appears {count} times, expected 9")]
    ColorImbalance {
        /// The offending color.
        color: StickerColor,
        /// How many times it was observed.
        count: usize,
    },
}
