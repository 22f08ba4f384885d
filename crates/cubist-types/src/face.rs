//! Face observations and scan progress.
//!
//! A [`FaceObservation`] is one scan request's worth of data: the 9 sticker
//! colors of a single physical face, read row-major from the top-left.
//! Observations are validated at construction and immutable afterwards.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::color::StickerColor;

/// Stickers on one face of the cube.
pub const STICKERS_PER_FACE: usize = 9;

/// Faces on a cube.
pub const FACE_COUNT: usize = 6;

/// Stickers on a complete cube (and characters in a cube-state string).
pub const STICKER_COUNT: usize = 54;

/// Error returned when a face payload does not hold exactly 9 stickers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("a face observation needs exactly 9 stickers, got {actual}")]
pub struct WrongStickerCount {
    /// How many stickers the caller supplied.
    pub actual: usize,
}

/// The 9 sticker colors of one scanned face, in row-major raster order
/// (top-left to bottom-right as seen in the scanning orientation).
///
/// Immutable once constructed; the only way in is [`FaceObservation::new`],
/// which enforces the 9-sticker invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceObservation {
    stickers: [StickerColor; STICKERS_PER_FACE],
}

impl FaceObservation {
    /// Build an observation from exactly 9 parsed colors.
    pub fn new(colors: Vec<StickerColor>) -> Result<Self, WrongStickerCount> {
        let stickers: [StickerColor; STICKERS_PER_FACE] = colors
            .try_into()
            .map_err(|rejected: Vec<StickerColor>| WrongStickerCount {
                actual: rejected.len(),
            })?;
        Ok(Self { stickers })
    }

    /// An observation of a face showing a single color on all 9 stickers,
    /// as every face of a solved cube does.
    pub const fn uniform(color: StickerColor) -> Self {
        Self {
            stickers: [color; STICKERS_PER_FACE],
        }
    }

    /// The stickers in raster order.
    pub const fn stickers(&self) -> &[StickerColor; STICKERS_PER_FACE] {
        &self.stickers
    }
}

/// How far a scanning session has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ScanProgress {
    /// Faces recorded so far (0 through 6).
    pub faces_recorded: usize,
    /// True once all 6 faces are present and the state can be composed.
    pub is_complete: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_exactly_nine() {
        let obs = FaceObservation::new(vec![StickerColor::Red; 9]).unwrap();
        assert_eq!(obs.stickers().len(), 9);
    }

    #[test]
    fn new_rejects_short_payload() {
        let err = FaceObservation::new(vec![StickerColor::Red; 8]).unwrap_err();
        assert_eq!(err.actual, 8);
    }

    #[test]
    fn new_rejects_long_payload() {
        let err = FaceObservation::new(vec![StickerColor::Red; 10]).unwrap_err();
        assert_eq!(err.actual, 10);
    }

    #[test]
    fn uniform_face_is_all_one_color() {
        let obs = FaceObservation::uniform(StickerColor::Blue);
        assert!(obs.stickers().iter().all(|&s| s == StickerColor::Blue));
    }
}
