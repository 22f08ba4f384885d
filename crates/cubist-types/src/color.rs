//! Sticker colors, cube faces, and the fixed mapping between them.
//!
//! The service works with the standard six-color cube in the standard
//! orientation: White up, Green front, Red right. That orientation fixes
//! which face symbol every color serializes to in a cube-state string, and
//! it is the one contract both the scanning client and the external solver
//! must agree on. The mapping lives here, once.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One of the six sticker colors on a standard cube.
///
/// A complete valid cube state contains exactly 9 stickers of each color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum StickerColor {
    /// Up-face color in the standard orientation.
    White,
    /// Right-face color in the standard orientation.
    Red,
    /// Front-face color in the standard orientation.
    Green,
    /// Down-face color in the standard orientation.
    Yellow,
    /// Left-face color in the standard orientation.
    Orange,
    /// Back-face color in the standard orientation.
    Blue,
}

impl StickerColor {
    /// All six colors, in scan order (the face order of the state string).
    pub const ALL: [Self; 6] = [
        Self::White,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Orange,
        Self::Blue,
    ];

    /// The face this color belongs to in the standard orientation.
    pub const fn face(self) -> FaceId {
        match self {
            Self::White => FaceId::Up,
            Self::Red => FaceId::Right,
            Self::Green => FaceId::Front,
            Self::Yellow => FaceId::Down,
            Self::Orange => FaceId::Left,
            Self::Blue => FaceId::Back,
        }
    }

    /// Human-readable color name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Orange => "Orange",
            Self::Blue => "Blue",
        }
    }
}

impl core::fmt::Display for StickerColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a color token cannot be recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized sticker color: {token:?}")]
pub struct UnknownColor {
    /// The token the client sent.
    pub token: String,
}

impl core::str::FromStr for StickerColor {
    type Err = UnknownColor;

    /// Parse a color from a full name (any case) or its one-letter form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Self::White),
            "red" | "r" => Ok(Self::Red),
            "green" | "g" => Ok(Self::Green),
            "yellow" | "y" => Ok(Self::Yellow),
            "orange" | "o" => Ok(Self::Orange),
            "blue" | "b" => Ok(Self::Blue),
            _ => Err(UnknownColor {
                token: s.to_owned(),
            }),
        }
    }
}

/// One of the six faces of the cube.
///
/// The declaration order is the scan order and the face order of the
/// composed cube-state string: Up, Right, Front, Down, Left, Back. The
/// external solver consumes facelets in exactly this order, so the
/// ordering here is load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum FaceId {
    /// The top face.
    Up,
    /// The right face.
    Right,
    /// The face toward the camera.
    Front,
    /// The bottom face.
    Down,
    /// The left face.
    Left,
    /// The face away from the camera.
    Back,
}

impl FaceId {
    /// All six faces in scan order (also the state-string face order).
    pub const SCAN_ORDER: [Self; 6] = [
        Self::Up,
        Self::Right,
        Self::Front,
        Self::Down,
        Self::Left,
        Self::Back,
    ];

    /// The one-letter notation symbol for this face.
    pub const fn symbol(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Right => 'R',
            Self::Front => 'F',
            Self::Down => 'D',
            Self::Left => 'L',
            Self::Back => 'B',
        }
    }

    /// Human-readable face name, capitalized for step descriptions.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Right => "Right",
            Self::Front => "Front",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Back => "Back",
        }
    }

    /// The sticker color of this face's center in the standard orientation.
    pub const fn color(self) -> StickerColor {
        match self {
            Self::Up => StickerColor::White,
            Self::Right => StickerColor::Red,
            Self::Front => StickerColor::Green,
            Self::Down => StickerColor::Yellow,
            Self::Left => StickerColor::Orange,
            Self::Back => StickerColor::Blue,
        }
    }

    /// Look a face up by its notation symbol.
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'U' => Some(Self::Up),
            'R' => Some(Self::Right),
            'F' => Some(Self::Front),
            'D' => Some(Self::Down),
            'L' => Some(Self::Left),
            'B' => Some(Self::Back),
            _ => None,
        }
    }
}

impl core::fmt::Display for FaceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn color_face_mapping_roundtrips() {
        for color in StickerColor::ALL {
            assert_eq!(color.face().color(), color);
        }
    }

    #[test]
    fn scan_order_symbols_spell_urfdlb() {
        let symbols: String = FaceId::SCAN_ORDER.iter().map(|f| f.symbol()).collect();
        assert_eq!(symbols, "URFDLB");
    }

    #[test]
    fn parse_full_names_any_case() {
        assert_eq!("White".parse::<StickerColor>().unwrap(), StickerColor::White);
        assert_eq!("orange".parse::<StickerColor>().unwrap(), StickerColor::Orange);
        assert_eq!("YELLOW".parse::<StickerColor>().unwrap(), StickerColor::Yellow);
    }

    #[test]
    fn parse_one_letter_forms() {
        assert_eq!("g".parse::<StickerColor>().unwrap(), StickerColor::Green);
        assert_eq!("B".parse::<StickerColor>().unwrap(), StickerColor::Blue);
    }

    #[test]
    fn parse_rejects_unknown_color() {
        let err = "Purple".parse::<StickerColor>().unwrap_err();
        assert_eq!(err.token, "Purple");
    }

    #[test]
    fn face_symbol_lookup_roundtrips() {
        for face in FaceId::SCAN_ORDER {
            assert_eq!(FaceId::from_symbol(face.symbol()), Some(face));
        }
        assert_eq!(FaceId::from_symbol('X'), None);
    }

    #[test]
    fn color_serde_uses_names() {
        let json = serde_json::to_string(&StickerColor::White).unwrap();
        assert_eq!(json, "\"White\"");
    }
}
