//! Face aggregation: six observations in, one cube-state string out.
//!
//! [`CubeScan`] accumulates per-face observations in scan order (Up, Right,
//! Front, Down, Left, Back) and composes the flattened 54-character facelet
//! string the solver consumes. A scan grows monotonically to six faces,
//! rejects anything beyond that, and only an explicit [`CubeScan::reset`]
//! empties it again. Rejected operations leave the recorded faces untouched.

use std::collections::BTreeMap;

use cubist_types::{FACE_COUNT, FaceObservation, ScanProgress, STICKERS_PER_FACE, StickerColor};

use crate::error::ScanError;

/// Parse a face payload of color tokens into a validated observation.
///
/// Tokens are full color names (any case) or one-letter forms. Fails on the
/// first unrecognized token, or on a payload that is not exactly 9 entries.
pub fn parse_face(tokens: &[String]) -> Result<FaceObservation, ScanError> {
    let mut colors = Vec::with_capacity(tokens.len());
    for token in tokens {
        colors.push(token.parse::<StickerColor>()?);
    }
    Ok(FaceObservation::new(colors)?)
}

/// An in-progress scan of one physical cube.
///
/// Faces are expected in scan order with the cube held in the standard
/// orientation; a mis-ordered scan composes into a state whose centers are
/// off-scheme and is rejected by solver-side validation with a diagnostic
/// naming the problem.
#[derive(Debug, Clone, Default)]
pub struct CubeScan {
    faces: Vec<FaceObservation>,
}

impl CubeScan {
    /// Create an empty scan.
    pub const fn new() -> Self {
        Self { faces: Vec::new() }
    }

    /// Record the next face, returning its 0-based index in scan order.
    ///
    /// Fails with [`ScanError::FacesComplete`] once six faces are present.
    pub fn record_face(&mut self, observation: FaceObservation) -> Result<usize, ScanError> {
        if self.faces.len() >= FACE_COUNT {
            return Err(ScanError::FacesComplete);
        }
        let index = self.faces.len();
        self.faces.push(observation);
        Ok(index)
    }

    /// Faces recorded so far.
    pub fn faces_recorded(&self) -> usize {
        self.faces.len()
    }

    /// True once all six faces are present.
    pub fn is_complete(&self) -> bool {
        self.faces.len() == FACE_COUNT
    }

    /// Current progress snapshot. No side effects.
    pub fn progress(&self) -> ScanProgress {
        ScanProgress {
            faces_recorded: self.faces.len(),
            is_complete: self.is_complete(),
        }
    }

    /// The recorded faces in scan order.
    pub fn faces(&self) -> &[FaceObservation] {
        &self.faces
    }

    /// Compose the 54-character facelet string for the solver.
    ///
    /// Faces appear in scan order, each face's 9 stickers in raster order,
    /// every sticker rendered as the symbol of the face its color belongs
    /// to. Fails if fewer than six faces are recorded, or if any color does
    /// not occur exactly 9 times (an impossible physical configuration that
    /// is cheaper to reject here than to hand to the solver).
    pub fn compose(&self) -> Result<String, ScanError> {
        if !self.is_complete() {
            return Err(ScanError::Incomplete {
                recorded: self.faces.len(),
            });
        }

        let mut counts: BTreeMap<StickerColor, usize> = BTreeMap::new();
        for face in &self.faces {
            for sticker in face.stickers() {
                let entry = counts.entry(*sticker).or_insert(0);
                *entry = entry.saturating_add(1);
            }
        }
        for color in StickerColor::ALL {
            let count = counts.get(&color).copied().unwrap_or(0);
            if count != STICKERS_PER_FACE {
                return Err(ScanError::ColorImbalance { color, count });
            }
        }

        let state: String = self
            .faces
            .iter()
            .flat_map(|face| face.stickers().iter())
            .map(|sticker| sticker.face().symbol())
            .collect();
        Ok(state)
    }

    /// Clear all recorded faces. Idempotent, always succeeds.
    pub fn reset(&mut self) {
        self.faces.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cubist_types::FaceId;

    use super::*;

    /// Six uniform faces in scan order, i.e. a solved cube.
    fn record_solved_cube(scan: &mut CubeScan) {
        for face in FaceId::SCAN_ORDER {
            scan.record_face(FaceObservation::uniform(face.color())).unwrap();
        }
    }

    #[test]
    fn six_faces_complete_the_scan() {
        let mut scan = CubeScan::new();
        for (expected_index, face) in FaceId::SCAN_ORDER.iter().enumerate() {
            assert!(!scan.is_complete());
            let index = scan
                .record_face(FaceObservation::uniform(face.color()))
                .unwrap();
            assert_eq!(index, expected_index);
        }
        assert!(scan.is_complete());
        assert_eq!(scan.faces_recorded(), 6);
    }

    #[test]
    fn seventh_face_is_rejected_and_changes_nothing() {
        let mut scan = CubeScan::new();
        record_solved_cube(&mut scan);

        let result = scan.record_face(FaceObservation::uniform(StickerColor::White));
        assert_eq!(result, Err(ScanError::FacesComplete));
        assert_eq!(scan.faces_recorded(), 6);
        // The composed state is still the solved cube, not an overwrite.
        assert_eq!(scan.compose().unwrap(), solved_state());
    }

    #[test]
    fn compose_before_complete_fails() {
        let mut scan = CubeScan::new();
        scan.record_face(FaceObservation::uniform(StickerColor::White))
            .unwrap();
        assert_eq!(scan.compose(), Err(ScanError::Incomplete { recorded: 1 }));
    }

    fn solved_state() -> String {
        "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB".to_owned()
    }

    #[test]
    fn solved_cube_composes_to_canonical_state() {
        let mut scan = CubeScan::new();
        record_solved_cube(&mut scan);
        let state = scan.compose().unwrap();
        assert_eq!(state.len(), 54);
        assert_eq!(state, solved_state());
    }

    #[test]
    fn color_imbalance_is_rejected() {
        let mut scan = CubeScan::new();
        // Two all-White faces: 18 White stickers, 0 Red.
        scan.record_face(FaceObservation::uniform(StickerColor::White))
            .unwrap();
        scan.record_face(FaceObservation::uniform(StickerColor::White))
            .unwrap();
        for face in [FaceId::Front, FaceId::Down, FaceId::Left, FaceId::Back] {
            scan.record_face(FaceObservation::uniform(face.color())).unwrap();
        }
        assert_eq!(
            scan.compose(),
            Err(ScanError::ColorImbalance {
                color: StickerColor::White,
                count: 18
            })
        );
    }

    #[test]
    fn reset_starts_a_fresh_cycle() {
        let mut scan = CubeScan::new();
        record_solved_cube(&mut scan);
        scan.reset();
        assert_eq!(scan.faces_recorded(), 0);
        assert!(!scan.is_complete());

        // Resetting an already-empty scan is fine.
        scan.reset();

        record_solved_cube(&mut scan);
        assert!(scan.is_complete());
    }

    #[test]
    fn parse_face_accepts_names_and_letters() {
        let tokens: Vec<String> = ["White", "red", "G", "y", "ORANGE", "b", "w", "R", "green"]
            .iter()
            .map(|s| (*s).to_owned())
            .collect();
        let obs = parse_face(&tokens).unwrap();
        assert_eq!(obs.stickers().first().copied(), Some(StickerColor::White));
    }

    #[test]
    fn parse_face_rejects_unknown_color() {
        let mut tokens = vec!["White".to_owned(); 9];
        if let Some(slot) = tokens.get_mut(4) {
            *slot = "Purple".to_owned();
        }
        let err = parse_face(&tokens).unwrap_err();
        assert!(matches!(err, ScanError::UnknownColor { .. }));
    }

    #[test]
    fn parse_face_rejects_wrong_count() {
        let tokens = vec!["White".to_owned(); 8];
        let err = parse_face(&tokens).unwrap_err();
        assert!(matches!(err, ScanError::WrongStickerCount { .. }));
    }
}
