//! Color-detector seam between image capture and face aggregation.
//!
//! Real sticker detection is a computer-vision problem that lives outside
//! this service. The [`ColorDetector`] trait is the seam it plugs into: the
//! aggregator consumes 9 colors and does not care how they were produced.
//! The two implementations here stand in for a real detector -- a fixed
//! pattern and a randomized one -- so the scan workflow can be exercised
//! end-to-end before any vision pipeline exists.

use cubist_types::{FaceObservation, StickerColor};
use rand::seq::IndexedRandom;

/// Errors that can occur while detecting colors from an image payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetectError {
    /// The decoded image payload contained no bytes.
    #[error("empty image payload")]
    EmptyImage,
}

/// A source of per-face sticker colors.
///
/// Implementations take the decoded bytes of one captured face image and
/// return the 9 sticker colors in raster order. Swapping in a real vision
/// detector changes nothing about the aggregator contract.
pub trait ColorDetector: Send + Sync {
    /// Detect the 9 sticker colors of one face from raw image bytes.
    fn detect(&self, image: &[u8]) -> Result<FaceObservation, DetectError>;

    /// Short name for logging and the status page.
    fn name(&self) -> &'static str;
}

/// A detector that reports the same fixed 3x3 pattern for every image.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPatternDetector;

impl FixedPatternDetector {
    /// The pattern every detection reports.
    const PATTERN: [StickerColor; 9] = [
        StickerColor::Red,
        StickerColor::Blue,
        StickerColor::Green,
        StickerColor::White,
        StickerColor::Yellow,
        StickerColor::Orange,
        StickerColor::Red,
        StickerColor::Blue,
        StickerColor::Green,
    ];

    /// Create a fixed-pattern detector.
    pub const fn new() -> Self {
        Self
    }
}

impl ColorDetector for FixedPatternDetector {
    fn detect(&self, image: &[u8]) -> Result<FaceObservation, DetectError> {
        if image.is_empty() {
            return Err(DetectError::EmptyImage);
        }
        Ok(FaceObservation::new(Self::PATTERN.to_vec()).unwrap_or_else(|_| {
            // PATTERN is exactly 9 entries by construction.
            FaceObservation::uniform(StickerColor::White)
        }))
    }

    fn name(&self) -> &'static str {
        "fixed-pattern"
    }
}

/// A detector that reports 9 uniformly random colors per detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomDetector;

impl RandomDetector {
    /// Create a random detector.
    pub const fn new() -> Self {
        Self
    }
}

impl ColorDetector for RandomDetector {
    fn detect(&self, image: &[u8]) -> Result<FaceObservation, DetectError> {
        if image.is_empty() {
            return Err(DetectError::EmptyImage);
        }
        let mut rng = rand::rng();
        let colors: Vec<StickerColor> = (0..9)
            .map(|_| {
                StickerColor::ALL
                    .choose(&mut rng)
                    .copied()
                    .unwrap_or(StickerColor::White)
            })
            .collect();
        Ok(FaceObservation::new(colors)
            .unwrap_or_else(|_| FaceObservation::uniform(StickerColor::White)))
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn fixed_detector_matches_its_pattern() {
        let detector = FixedPatternDetector::new();
        let obs = detector.detect(b"fake image bytes").unwrap();
        assert_eq!(obs.stickers(), &FixedPatternDetector::PATTERN);
    }

    #[test]
    fn fixed_detector_is_deterministic() {
        let detector = FixedPatternDetector::new();
        let a = detector.detect(b"one").unwrap();
        let b = detector.detect(b"two").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn detectors_reject_empty_payloads() {
        assert_eq!(
            FixedPatternDetector::new().detect(&[]),
            Err(DetectError::EmptyImage)
        );
        assert_eq!(RandomDetector::new().detect(&[]), Err(DetectError::EmptyImage));
    }

    #[test]
    fn random_detector_returns_nine_stickers() {
        let detector = RandomDetector::new();
        let obs = detector.detect(b"fake image bytes").unwrap();
        assert_eq!(obs.stickers().len(), 9);
    }
}
