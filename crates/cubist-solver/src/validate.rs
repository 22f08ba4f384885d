//! Cube-state validation: syntax, symbol balance, and physical reachability.
//!
//! A 54-character facelet string can look perfectly well-formed and still
//! describe a cube that cannot exist -- a corner rotated in place, an edge
//! flipped in place, or two pieces swapped. Handing such a state to the
//! solver produces a confusing downstream failure, so everything is checked
//! here first, each violation with its own diagnostic.
//!
//! The facelet numbering follows the two-phase solver convention: faces in
//! the order U, R, F, D, L, B, each face row-major from the top-left.
//! Reachability is checked by converting facelets to corner and edge pieces
//! and testing the three invariants of a physical cube: corner orientation
//! sum divisible by 3, edge orientation sum divisible by 2, and matching
//! corner/edge permutation parity.

use cubist_types::{FaceId, STICKER_COUNT, STICKERS_PER_FACE};

use crate::error::SolveError;

/// The facelet string of a solved cube in the standard orientation.
pub const SOLVED_STATE: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

/// True if the state describes an already-solved cube.
pub fn is_solved(state: &str) -> bool {
    state == SOLVED_STATE
}

// ---------------------------------------------------------------------------
// Facelet tables (two-phase solver numbering, 0-based)
// ---------------------------------------------------------------------------

/// Center facelet index of each face, in scan order.
const CENTER_FACELETS: [usize; 6] = [4, 13, 22, 31, 40, 49];

/// The three facelet indices of each corner position. The first entry of
/// each triple is the Up/Down-layer sticker of the position.
const CORNER_FACELETS: [[usize; 3]; 8] = [
    [8, 9, 20],   // URF
    [6, 18, 38],  // UFL
    [0, 36, 47],  // ULB
    [2, 45, 11],  // UBR
    [29, 26, 15], // DFR
    [27, 44, 24], // DLF
    [33, 53, 42], // DBL
    [35, 17, 51], // DRB
];

/// The face each sticker of a corner piece belongs to, orientation 0 first.
const CORNER_FACES: [[FaceId; 3]; 8] = [
    [FaceId::Up, FaceId::Right, FaceId::Front],
    [FaceId::Up, FaceId::Front, FaceId::Left],
    [FaceId::Up, FaceId::Left, FaceId::Back],
    [FaceId::Up, FaceId::Back, FaceId::Right],
    [FaceId::Down, FaceId::Front, FaceId::Right],
    [FaceId::Down, FaceId::Left, FaceId::Front],
    [FaceId::Down, FaceId::Back, FaceId::Left],
    [FaceId::Down, FaceId::Right, FaceId::Back],
];

/// Corner position names for diagnostics, same order as the tables above.
const CORNER_NAMES: [&str; 8] = ["URF", "UFL", "ULB", "UBR", "DFR", "DLF", "DBL", "DRB"];

/// The two facelet indices of each edge position.
const EDGE_FACELETS: [[usize; 2]; 12] = [
    [5, 10],  // UR
    [7, 19],  // UF
    [3, 37],  // UL
    [1, 46],  // UB
    [32, 16], // DR
    [28, 25], // DF
    [30, 43], // DL
    [34, 52], // DB
    [23, 12], // FR
    [21, 41], // FL
    [50, 39], // BL
    [48, 14], // BR
];

/// The face each sticker of an edge piece belongs to, orientation 0 first.
const EDGE_FACES: [[FaceId; 2]; 12] = [
    [FaceId::Up, FaceId::Right],
    [FaceId::Up, FaceId::Front],
    [FaceId::Up, FaceId::Left],
    [FaceId::Up, FaceId::Back],
    [FaceId::Down, FaceId::Right],
    [FaceId::Down, FaceId::Front],
    [FaceId::Down, FaceId::Left],
    [FaceId::Down, FaceId::Back],
    [FaceId::Front, FaceId::Right],
    [FaceId::Front, FaceId::Left],
    [FaceId::Back, FaceId::Left],
    [FaceId::Back, FaceId::Right],
];

/// Edge position names for diagnostics, same order as the tables above.
const EDGE_NAMES: [&str; 12] = [
    "UR", "UF", "UL", "UB", "DR", "DF", "DL", "DB", "FR", "FL", "BL", "BR",
];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a cube-state string end to end.
///
/// Checks, in order: length, alphabet, per-symbol balance, canonical
/// centers, and physical reachability. Returns the first violation found
/// with a diagnostic naming it.
pub fn validate(state: &str) -> Result<(), SolveError> {
    let facelets = parse_facelets(state)?;
    check_reachable(&facelets)
}

/// Parse the string into 54 face symbols, rejecting structural problems.
fn parse_facelets(state: &str) -> Result<Vec<FaceId>, SolveError> {
    let mut facelets = Vec::with_capacity(STICKER_COUNT);
    for (position, symbol) in state.chars().enumerate() {
        let face = FaceId::from_symbol(symbol).ok_or_else(|| SolveError::MalformedState {
            reason: format!("invalid symbol {symbol:?} at position {position}"),
        })?;
        facelets.push(face);
    }
    if facelets.len() != STICKER_COUNT {
        return Err(SolveError::MalformedState {
            reason: format!("expected {STICKER_COUNT} characters, got {}", facelets.len()),
        });
    }

    for face in FaceId::SCAN_ORDER {
        let count = facelets.iter().filter(|f| **f == face).count();
        if count != STICKERS_PER_FACE {
            return Err(SolveError::SymbolImbalance {
                symbol: face.symbol(),
                count,
            });
        }
    }

    for (face, center) in FaceId::SCAN_ORDER.into_iter().zip(CENTER_FACELETS) {
        let found = at(&facelets, center);
        if found != face {
            return Err(SolveError::MalformedState {
                reason: format!(
                    "center of the {} face reads '{}'; scan the cube in the standard \
                     orientation (White up, Green front)",
                    face.name(),
                    found.symbol()
                ),
            });
        }
    }

    Ok(facelets)
}

/// Check the three reachability invariants of a physical cube.
fn check_reachable(facelets: &[FaceId]) -> Result<(), SolveError> {
    // --- Corners: identify each piece and its orientation ---
    let mut corner_perm = Vec::with_capacity(CORNER_FACELETS.len());
    let mut twist_sum = 0usize;
    for (indices, position_name) in CORNER_FACELETS.iter().zip(CORNER_NAMES) {
        let stickers: Vec<FaceId> = indices.iter().map(|&i| at(facelets, i)).collect();

        let orientation = stickers
            .iter()
            .position(|f| matches!(f, FaceId::Up | FaceId::Down))
            .ok_or_else(|| SolveError::Unsolvable {
                reason: format!("corner at {position_name} has no Up or Down sticker"),
            })?;

        let mut rest = stickers.iter().copied().cycle().skip(orientation.saturating_add(1));
        let first_side = rest.next().unwrap_or(FaceId::Up);
        let second_side = rest.next().unwrap_or(FaceId::Up);

        let piece = CORNER_FACES
            .iter()
            .position(|faces| {
                faces.get(1).copied() == Some(first_side)
                    && faces.get(2).copied() == Some(second_side)
            })
            .ok_or_else(|| SolveError::Unsolvable {
                reason: format!("unrecognized corner piece at {position_name}"),
            })?;

        corner_perm.push(piece);
        twist_sum = twist_sum.saturating_add(orientation);
    }

    check_each_piece_once(&corner_perm, &CORNER_NAMES, "corner")?;
    if twist_sum % 3 != 0 {
        return Err(SolveError::Unsolvable {
            reason: "corner twist parity is off: a corner is rotated in place".to_owned(),
        });
    }

    // --- Edges: identify each piece and its flip ---
    let mut edge_perm = Vec::with_capacity(EDGE_FACELETS.len());
    let mut flip_sum = 0usize;
    for (indices, position_name) in EDGE_FACELETS.iter().zip(EDGE_NAMES) {
        let first = at(facelets, indices.first().copied().unwrap_or(0));
        let second = at(facelets, indices.last().copied().unwrap_or(0));

        let found = EDGE_FACES.iter().enumerate().find_map(|(piece, faces)| {
            let a = faces.first().copied()?;
            let b = faces.last().copied()?;
            if (first, second) == (a, b) {
                Some((piece, 0))
            } else if (first, second) == (b, a) {
                Some((piece, 1))
            } else {
                None
            }
        });

        let (piece, flip) = found.ok_or_else(|| SolveError::Unsolvable {
            reason: format!("unrecognized edge piece at {position_name}"),
        })?;
        edge_perm.push(piece);
        flip_sum = flip_sum.saturating_add(flip);
    }

    check_each_piece_once(&edge_perm, &EDGE_NAMES, "edge")?;
    if flip_sum % 2 != 0 {
        return Err(SolveError::Unsolvable {
            reason: "edge flip parity is off: an edge is flipped in place".to_owned(),
        });
    }

    // --- Permutation parity must agree between corners and edges ---
    if is_odd_permutation(&corner_perm) != is_odd_permutation(&edge_perm) {
        return Err(SolveError::Unsolvable {
            reason: "permutation parity mismatch: two pieces are swapped".to_owned(),
        });
    }

    Ok(())
}

/// Every piece index must occur exactly once in the permutation.
fn check_each_piece_once(
    perm: &[usize],
    names: &[&str],
    kind: &str,
) -> Result<(), SolveError> {
    for (piece, name) in names.iter().enumerate() {
        let occurrences = perm.iter().filter(|&&p| p == piece).count();
        if occurrences != 1 {
            return Err(SolveError::Unsolvable {
                reason: format!("{kind} piece {name} appears {occurrences} times, expected once"),
            });
        }
    }
    Ok(())
}

/// Parity of a permutation by inversion count.
fn is_odd_permutation(perm: &[usize]) -> bool {
    let mut inversions = 0usize;
    for (i, a) in perm.iter().enumerate() {
        for b in perm.iter().skip(i.saturating_add(1)) {
            if a > b {
                inversions = inversions.saturating_add(1);
            }
        }
    }
    inversions % 2 == 1
}

/// Facelet lookup. All indices come from the fixed tables above and are
/// below [`STICKER_COUNT`], which `parse_facelets` has already enforced as
/// the slice length.
fn at(facelets: &[FaceId], index: usize) -> FaceId {
    facelets.get(index).copied().unwrap_or(FaceId::Up)
}
