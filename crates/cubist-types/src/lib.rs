//! Shared type definitions for the Cubist scan-and-solve service.
//!
//! This crate is the single source of truth for the vocabulary used across
//! the Cubist workspace. Client-facing types flow downstream to `TypeScript`
//! via `ts-rs` for the scanning web client.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for session identifiers
//! - [`color`] -- Sticker colors, faces, and the pinned color scheme
//! - [`face`] -- Validated per-face observations and scan progress
//! - [`moves`] -- The 18-move notation and human-readable solution steps

pub mod color;
pub mod face;
pub mod ids;
pub mod moves;

// Re-export all public types at crate root for convenience.
pub use color::{FaceId, StickerColor, UnknownColor};
pub use face::{
    FACE_COUNT, FaceObservation, STICKER_COUNT, STICKERS_PER_FACE, ScanProgress, WrongStickerCount,
};
pub use ids::SessionId;
pub use moves::{Move, SolutionStep, Turn, UnknownMove};

#[cfg(test)]
mod tests {
    //! Integration tests for type exports and `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. Importing them here triggers generation.
        // The actual files are written to the `bindings/` directory
        // relative to the crate root.
        use ts_rs::TS;

        let _ = crate::ids::SessionId::export_all();
        let _ = crate::color::StickerColor::export_all();
        let _ = crate::color::FaceId::export_all();
        let _ = crate::face::ScanProgress::export_all();
        let _ = crate::moves::Turn::export_all();
        let _ = crate::moves::SolutionStep::export_all();
    }
}
