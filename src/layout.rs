// Validation of hand-built starting positions.

use enum_map::{EnumMap, enum_map};
use strum::IntoEnumIterator;

use crate::board::Board;
use crate::coord::{Coord, Row};
use crate::force::Force;
use crate::piece::{Piece, PieceKind};


const MAX_KINGS: i32 = 1;
const MAX_PAWNS: i32 = 8;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LayoutStatus {
    pub valid: bool,
    pub message: String,
}

impl LayoutStatus {
    fn invalid(message: String) -> Self { LayoutStatus { valid: false, message } }
}

// Keeps piece counts up to date as the layout is edited, so that checking is cheap.
#[derive(Clone, Debug)]
pub struct LayoutChecker {
    counts: EnumMap<Force, EnumMap<PieceKind, i32>>,
    // Pawns standing on rank 1 or rank 8.
    invalid_pawns: i32,
}

fn is_invalid_pawn(pos: Coord, piece: Piece) -> bool {
    piece.kind == PieceKind::Pawn && (pos.row == Row::_1 || pos.row == Row::_8)
}

fn force_name_lowercase(force: Force) -> &'static str {
    match force {
        Force::White => "white",
        Force::Black => "black",
    }
}

impl LayoutChecker {
    pub fn new() -> Self {
        LayoutChecker {
            counts: enum_map! { _ => enum_map! { _ => 0 } },
            invalid_pawns: 0,
        }
    }

    pub fn from_board(board: &Board) -> Self {
        let mut checker = LayoutChecker::new();
        for (pos, piece) in board.grid().pieces() {
            checker.add_piece(pos, piece);
        }
        checker
    }

    pub fn reset(&mut self) { *self = LayoutChecker::new(); }

    pub fn add_piece(&mut self, pos: Coord, piece: Piece) {
        self.counts[piece.force][piece.kind] += 1;
        if is_invalid_pawn(pos, piece) {
            self.invalid_pawns += 1;
        }
    }

    pub fn remove_piece(&mut self, pos: Coord, piece: Piece) {
        self.counts[piece.force][piece.kind] -= 1;
        if is_invalid_pawn(pos, piece) {
            self.invalid_pawns -= 1;
        }
    }

    // Square `pos` changed from `old` to `new`.
    pub fn change_on_board(
        &mut self, pos: Coord, old: Option<Piece>, new: Option<Piece>,
    ) -> LayoutStatus {
        if let Some(old) = old {
            self.remove_piece(pos, old);
        }
        if let Some(new) = new {
            self.add_piece(pos, new);
        }
        self.check_board()
    }

    pub fn count(&self, force: Force, kind: PieceKind) -> i32 { self.counts[force][kind] }

    // Pieces beyond the starting set must have come from promotions, each of which costs a pawn.
    fn count_with_promotions(&self, force: Force) -> i32 {
        use PieceKind::*;
        self.count(force, Pawn)
            + (self.count(force, Rook) - 2)
            + (self.count(force, Knight) - 2)
            + (self.count(force, Bishop) - 2)
            + (self.count(force, Queen) - 1)
    }

    pub fn check_board(&self) -> LayoutStatus {
        if self.invalid_pawns > 0 {
            return LayoutStatus::invalid("Pawns cannot be on rank 1 or rank 8".to_owned());
        }
        for force in Force::iter() {
            if self.count(force, PieceKind::King) != MAX_KINGS {
                return LayoutStatus::invalid(format!(
                    "Wrong number of {} kings, precisely one required",
                    force_name_lowercase(force)
                ));
            }
        }
        for force in Force::iter() {
            if self.count(force, PieceKind::Pawn) > MAX_PAWNS {
                return LayoutStatus::invalid(format!(
                    "Too many {} pawns, more than 8 are not allowed",
                    force_name_lowercase(force)
                ));
            }
        }
        for force in Force::iter() {
            if self.count_with_promotions(force) > MAX_PAWNS {
                return LayoutStatus::invalid(format!(
                    "{force} - Impossible to get even with promotions"
                ));
            }
        }
        LayoutStatus { valid: true, message: "Board is ok".to_owned() }
    }
}


// A layout being edited by hand. The only way to get a custom `Board` for a new game is `confirm`,
// which refuses layouts that fail `LayoutChecker::check_board`.
#[derive(Clone, Debug)]
pub struct CustomLayout {
    board: Board,
    checker: LayoutChecker,
}

impl CustomLayout {
    pub fn new() -> Self {
        CustomLayout { board: Board::empty(), checker: LayoutChecker::new() }
    }

    pub fn board(&self) -> &Board { &self.board }

    // Puts `piece` on `pos` (or clears it) and reports the resulting status.
    pub fn set(&mut self, pos: Coord, piece: Option<Piece>) -> LayoutStatus {
        let old = self.board.remove(pos);
        if let Some(piece) = piece {
            self.board.place_initial(pos, piece);
        }
        self.checker.change_on_board(pos, old, piece)
    }

    pub fn clear(&mut self) {
        self.board = Board::empty();
        self.checker.reset();
    }

    pub fn status(&self) -> LayoutStatus { self.checker.check_board() }

    pub fn confirm(self) -> Result<Board, LayoutStatus> {
        let status = self.status();
        if status.valid { Ok(self.board) } else { Err(status) }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn white(kind: PieceKind) -> Option<Piece> { Some(Piece::new(kind, Force::White)) }
    fn black(kind: PieceKind) -> Option<Piece> { Some(Piece::new(kind, Force::Black)) }

    fn kings_only() -> CustomLayout {
        let mut layout = CustomLayout::new();
        layout.set(Coord::E1, white(PieceKind::King));
        layout.set(Coord::E8, black(PieceKind::King));
        layout
    }

    #[test]
    fn standard_board_is_valid() {
        let status = LayoutChecker::from_board(&Board::standard()).check_board();
        assert!(status.valid);
        assert_eq!(status.message, "Board is ok");
    }

    #[test]
    fn kings_are_required() {
        let mut layout = CustomLayout::new();
        assert_eq!(
            layout.status().message,
            "Wrong number of white kings, precisely one required"
        );
        layout.set(Coord::E1, white(PieceKind::King));
        assert_eq!(
            layout.status().message,
            "Wrong number of black kings, precisely one required"
        );
        let status = layout.set(Coord::E8, black(PieceKind::King));
        assert!(status.valid);
        let status = layout.set(Coord::A8, black(PieceKind::King));
        assert!(!status.valid);
    }

    #[test]
    fn back_rank_pawns_are_tracked_incrementally() {
        let mut layout = kings_only();
        let status = layout.set(Coord::A8, white(PieceKind::Pawn));
        assert_eq!(status.message, "Pawns cannot be on rank 1 or rank 8");
        // Replacing the pawn by another pawn keeps it invalid.
        assert!(!layout.set(Coord::A8, black(PieceKind::Pawn)).valid);
        assert!(layout.set(Coord::A8, black(PieceKind::Rook)).valid);
        assert!(!layout.set(Coord::H1, black(PieceKind::Pawn)).valid);
        assert!(layout.set(Coord::H1, None).valid);
    }

    #[test]
    fn promotion_bound() {
        let mut layout = kings_only();
        for (col, kind) in crate::coord::Col::all().zip([
            PieceKind::Rook, PieceKind::Knight, PieceKind::Bishop, PieceKind::Queen,
            PieceKind::King, PieceKind::Bishop, PieceKind::Knight, PieceKind::Rook,
        ]) {
            layout.set(Coord::new(Row::_1, col), white(kind));
            layout.set(Coord::new(Row::_2, col), white(PieceKind::Pawn));
        }
        assert!(layout.status().valid);
        let status = layout.set(Coord::D3, white(PieceKind::Queen));
        assert_eq!(status.message, "White - Impossible to get even with promotions");
    }

    // The bound is a plain sum: a captured rook makes room for an extra queen.
    #[test]
    fn missing_pieces_offset_extra_ones() {
        let mut layout = kings_only();
        for col in crate::coord::Col::all() {
            layout.set(Coord::new(Row::_2, col), white(PieceKind::Pawn));
        }
        for pos in [Coord::D1, Coord::C1, Coord::B1] {
            assert!(layout.set(pos, white(PieceKind::Queen)).valid);
        }
        let mut layout = CustomLayout::new();
        for (pos, piece) in Board::standard().grid().pieces() {
            layout.set(pos, Some(piece));
        }
        layout.set(Coord::D3, white(PieceKind::Queen));
        assert!(!layout.status().valid);
        layout.set(Coord::A1, None);
        assert!(layout.status().valid);
        let checker = LayoutChecker::from_board(layout.board());
        assert_eq!(checker.count(Force::White, PieceKind::Queen), 2);
    }

    #[test]
    fn too_many_pawns() {
        let mut layout = kings_only();
        for pos in Coord::all().filter(|pos| pos.row == Row::_6 || pos.row == Row::_7).take(9) {
            layout.set(pos, black(PieceKind::Pawn));
        }
        assert_eq!(layout.status().message, "Too many black pawns, more than 8 are not allowed");
    }

    #[test]
    fn check_is_idempotent() {
        let layout = kings_only();
        assert_eq!(layout.status(), layout.status());
        let mut layout = layout;
        layout.set(Coord::A1, white(PieceKind::Pawn));
        let first = layout.status();
        assert_eq!(first, layout.status());
        assert!(!first.valid);
    }

    #[test]
    fn confirm_refuses_invalid_layouts() {
        assert!(CustomLayout::new().confirm().is_err());
        let board = kings_only().confirm().unwrap();
        assert!(board.is_custom());
        assert_eq!(board.king(Force::Black), Some(Coord::E8));
    }
}
