use derive_new::new;
use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::force::Force;
use crate::util::as_single_char;


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Enum, EnumIter, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

// How a piece kind moves. Vectors are `(d_row, d_col)` from White's point of view; pawn vectors
// are mirrored for Black.
#[derive(Debug)]
pub struct MovementTemplate {
    pub vectors: &'static [(i8, i8)],
    // Whether a step may be repeated until something blocks the way.
    pub scalable: bool,
    // Set if the piece captures differently than it moves (i.e. pawns). Move vectors then only
    // ever go to empty squares.
    pub capture_vectors: Option<&'static [(i8, i8)]>,
}

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ALL_DIRECTIONS: [(i8, i8); 8] =
    [(1, 0), (-1, 0), (0, 1), (0, -1), (1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT_JUMPS: [(i8, i8); 8] =
    [(1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2)];

static PAWN_TEMPLATE: MovementTemplate = MovementTemplate {
    vectors: &[(1, 0)],
    scalable: false,
    capture_vectors: Some(&[(1, 1), (1, -1)]),
};
static KNIGHT_TEMPLATE: MovementTemplate =
    MovementTemplate { vectors: &KNIGHT_JUMPS, scalable: false, capture_vectors: None };
static BISHOP_TEMPLATE: MovementTemplate =
    MovementTemplate { vectors: &DIAGONAL, scalable: true, capture_vectors: None };
static ROOK_TEMPLATE: MovementTemplate =
    MovementTemplate { vectors: &ORTHOGONAL, scalable: true, capture_vectors: None };
static QUEEN_TEMPLATE: MovementTemplate =
    MovementTemplate { vectors: &ALL_DIRECTIONS, scalable: true, capture_vectors: None };
static KING_TEMPLATE: MovementTemplate =
    MovementTemplate { vectors: &ALL_DIRECTIONS, scalable: false, capture_vectors: None };

impl PieceKind {
    pub fn template(self) -> &'static MovementTemplate {
        match self {
            PieceKind::Pawn => &PAWN_TEMPLATE,
            PieceKind::Knight => &KNIGHT_TEMPLATE,
            PieceKind::Bishop => &BISHOP_TEMPLATE,
            PieceKind::Rook => &ROOK_TEMPLATE,
            PieceKind::Queen => &QUEEN_TEMPLATE,
            PieceKind::King => &KING_TEMPLATE,
        }
    }

    // Should not be used to construct moves in algebraic notation, because it returns a
    // non-empty name for a pawn (use `to_algebraic_for_move` instead).
    pub fn to_full_algebraic(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn to_algebraic_for_move(self) -> &'static str {
        match self {
            PieceKind::Pawn => "",
            PieceKind::Knight => "N",
            PieceKind::Bishop => "B",
            PieceKind::Rook => "R",
            PieceKind::Queen => "Q",
            PieceKind::King => "K",
        }
    }

    pub fn from_algebraic_char(notation: char) -> Option<Self> {
        match notation {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    pub fn from_algebraic(notation: &str) -> Option<Self> {
        as_single_char(notation).and_then(Self::from_algebraic_char)
    }

    pub fn can_promote_to(self) -> bool {
        use PieceKind::*;
        match self {
            Pawn | King => false,
            Knight | Bishop | Rook | Queen => true,
        }
    }

    pub fn is_minor(self) -> bool { matches!(self, PieceKind::Knight | PieceKind::Bishop) }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }
}

// A piece does not know its square: the square is the grid key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, new, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub force: Force,
    #[new(value = "false")]
    pub has_moved: bool,
    // Round of the last two-square advance. Only ever set for pawns.
    #[new(default)]
    pub double_step_round: Option<u32>,
}

impl Piece {
    pub fn is(self, force: Force, kind: PieceKind) -> bool {
        self.force == force && self.kind == kind
    }
}

// Uppercase for White, lowercase for Black, as in FEN.
pub fn piece_to_ascii(kind: PieceKind, force: Force) -> char {
    let ch = kind.to_full_algebraic();
    match force {
        Force::White => ch,
        Force::Black => ch.to_ascii_lowercase(),
    }
}

pub fn piece_from_ascii(ch: char) -> Option<(PieceKind, Force)> {
    let kind = PieceKind::from_algebraic_char(ch.to_ascii_uppercase())?;
    let force = if ch.is_ascii_uppercase() { Force::White } else { Force::Black };
    Some((kind, force))
}

pub fn piece_to_pictogram(piece_kind: PieceKind, force: Force) -> char {
    use self::Force::*;
    use self::PieceKind::*;
    match (force, piece_kind) {
        (White, Pawn) => '♙',
        (White, Knight) => '♘',
        (White, Bishop) => '♗',
        (White, Rook) => '♖',
        (White, Queen) => '♕',
        (White, King) => '♔',
        (Black, Pawn) => '♟',
        (Black, Knight) => '♞',
        (Black, Bishop) => '♝',
        (Black, Rook) => '♜',
        (Black, Queen) => '♛',
        (Black, King) => '♚',
    }
}


#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn ascii_round_trip() {
        for kind in PieceKind::iter() {
            for force in [Force::White, Force::Black] {
                assert_eq!(piece_from_ascii(piece_to_ascii(kind, force)), Some((kind, force)));
            }
        }
        assert_eq!(piece_from_ascii('x'), None);
    }

    #[test]
    fn only_pawns_capture_differently() {
        for kind in PieceKind::iter() {
            assert_eq!(kind.template().capture_vectors.is_some(), kind == PieceKind::Pawn);
        }
    }

    #[test]
    fn new_piece_is_unmoved() {
        let piece = Piece::new(PieceKind::Rook, Force::Black);
        assert!(!piece.has_moved);
        assert_eq!(piece.double_step_round, None);
    }
}
