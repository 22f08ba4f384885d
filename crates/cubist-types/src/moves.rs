//! Move notation and human-readable solution steps.
//!
//! The solver speaks the 18-move face-turn notation: one of `U D L R F B`
//! optionally suffixed with `'` (counter-clockwise) or `2` (half turn).
//! [`Move`] parses and prints those tokens; [`SolutionStep`] is the
//! client-facing pairing of a token with its plain-language description.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::color::FaceId;

/// How far and in which direction a face is turned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Turn {
    /// A quarter turn clockwise (no suffix).
    Clockwise,
    /// A quarter turn counter-clockwise (`'` suffix).
    CounterClockwise,
    /// A half turn (`2` suffix).
    Half,
}

impl Turn {
    /// The notation suffix for this turn.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Clockwise => "",
            Self::CounterClockwise => "'",
            Self::Half => "2",
        }
    }

    /// The phrase used in step descriptions.
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::Clockwise => "clockwise",
            Self::CounterClockwise => "counter-clockwise",
            Self::Half => "180 degrees",
        }
    }
}

/// One atomic cube move: a face plus a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// The face being turned.
    pub face: FaceId,
    /// Direction and amount of the turn.
    pub turn: Turn,
}

impl Move {
    /// The notation token for this move, e.g. `R`, `R'`, `R2`.
    pub fn token(self) -> String {
        format!("{}{}", self.face.symbol(), self.turn.suffix())
    }

    /// The human-readable instruction for this move,
    /// e.g. "Rotate the Right face clockwise".
    pub fn description(self) -> String {
        format!("Rotate the {} face {}", self.face.name(), self.turn.phrase())
    }
}

impl core::fmt::Display for Move {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.face.symbol(), self.turn.suffix())
    }
}

/// Error returned when a token is not one of the 18 recognized moves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized move token: {token:?}")]
pub struct UnknownMove {
    /// The token that failed to parse.
    pub token: String,
}

impl core::str::FromStr for Move {
    type Err = UnknownMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face = chars
            .next()
            .and_then(FaceId::from_symbol)
            .ok_or_else(|| UnknownMove {
                token: s.to_owned(),
            })?;
        let turn = match chars.as_str() {
            "" => Turn::Clockwise,
            "'" => Turn::CounterClockwise,
            "2" => Turn::Half,
            _ => {
                return Err(UnknownMove {
                    token: s.to_owned(),
                });
            }
        };
        Ok(Self { face, turn })
    }
}

/// One step of a solution as delivered to the client: the raw notation
/// token plus a plain-language description. Steps must be applied in the
/// order they are returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SolutionStep {
    /// The solver's notation token for this step.
    pub token: String,
    /// Plain-language instruction for this step.
    pub description: String,
}

impl SolutionStep {
    /// Build the step for a recognized move.
    pub fn for_move(mv: Move) -> Self {
        Self {
            token: mv.token(),
            description: mv.description(),
        }
    }

    /// Carry an unrecognized token through verbatim so a single odd token
    /// degrades one step instead of failing the whole response.
    pub fn verbatim(token: &str) -> Self {
        Self {
            token: token.to_owned(),
            description: token.to_owned(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Every face and turn combination, i.e. the full 18-move alphabet.
    fn all_moves() -> Vec<Move> {
        let mut moves = Vec::new();
        for face in FaceId::SCAN_ORDER {
            for turn in [Turn::Clockwise, Turn::CounterClockwise, Turn::Half] {
                moves.push(Move { face, turn });
            }
        }
        moves
    }

    #[test]
    fn all_18_tokens_roundtrip() {
        let moves = all_moves();
        assert_eq!(moves.len(), 18);
        for mv in moves {
            let token = mv.token();
            assert_eq!(token.parse::<Move>().unwrap(), mv);
        }
    }

    #[test]
    fn all_18_descriptions_are_nonempty_and_not_the_token() {
        for mv in all_moves() {
            let step = SolutionStep::for_move(mv);
            assert!(!step.description.is_empty());
            assert_ne!(step.description, step.token);
        }
    }

    #[test]
    fn parse_examples() {
        assert_eq!(
            "R".parse::<Move>().unwrap(),
            Move {
                face: FaceId::Right,
                turn: Turn::Clockwise
            }
        );
        assert_eq!(
            "U'".parse::<Move>().unwrap(),
            Move {
                face: FaceId::Up,
                turn: Turn::CounterClockwise
            }
        );
        assert_eq!(
            "F2".parse::<Move>().unwrap(),
            Move {
                face: FaceId::Front,
                turn: Turn::Half
            }
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("X".parse::<Move>().is_err());
        assert!("R3".parse::<Move>().is_err());
        assert!("".parse::<Move>().is_err());
        assert!("R''".parse::<Move>().is_err());
    }

    #[test]
    fn verbatim_step_carries_token_through() {
        let step = SolutionStep::verbatim("M2");
        assert_eq!(step.token, "M2");
        assert_eq!(step.description, "M2");
    }

    #[test]
    fn description_reads_naturally() {
        let mv = "R'".parse::<Move>().unwrap();
        assert_eq!(mv.description(), "Rotate the Right face counter-clockwise");
    }
}
