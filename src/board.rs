use enum_map::{EnumMap, enum_map};
use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::coord::{Col, Coord, Row, SubjectiveRow};
use crate::force::Force;
use crate::grid::Grid;
use crate::internal_error_message;
use crate::piece::{Piece, PieceKind};


const BACK_RANK_KINDS: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

// The position: what stands where, plus cached king squares.
//
// Invariant: `kings[force]` is the square of a `force` king whenever there is one on the board.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    grid: Grid,
    kings: EnumMap<Force, Option<Coord>>,
    custom_layout: bool,
}

impl Board {
    pub fn standard() -> Self {
        let mut board = Board::empty();
        board.custom_layout = false;
        for force in Force::iter() {
            let back_row = SubjectiveRow::from_one_based(1).to_row(force);
            let pawn_row = SubjectiveRow::from_one_based(2).to_row(force);
            for (col, kind) in Col::all().zip_eq(BACK_RANK_KINDS) {
                board.place(Coord::new(back_row, col), Piece::new(kind, force));
                board.place(Coord::new(pawn_row, col), Piece::new(PieceKind::Pawn, force));
            }
        }
        board
    }

    // A blank board to be filled with `place_initial`.
    pub fn empty() -> Self {
        Board {
            grid: Grid::new(),
            kings: enum_map! { _ => None },
            custom_layout: true,
        }
    }

    pub fn grid(&self) -> &Grid { &self.grid }
    pub fn is_custom(&self) -> bool { self.custom_layout }
    pub fn piece_at(&self, pos: Coord) -> Option<Piece> { self.grid[pos] }
    pub fn king(&self, force: Force) -> Option<Coord> { self.kings[force] }

    // Replaces whatever stands at `pos`.
    pub fn place(&mut self, pos: Coord, piece: Piece) {
        self.forget_king_at(pos);
        if piece.kind == PieceKind::King {
            self.kings[piece.force] = Some(pos);
        }
        self.grid[pos] = Some(piece);
    }

    // Placement for a hand-built or loaded layout, where the piece history is unknown. Kings and
    // rooks are considered moved until `set_not_moved` says otherwise; pawns are considered moved
    // unless they stand on their starting rank.
    pub fn place_initial(&mut self, pos: Coord, mut piece: Piece) {
        piece.has_moved = match piece.kind {
            PieceKind::King | PieceKind::Rook => true,
            PieceKind::Pawn => pos.row != SubjectiveRow::from_one_based(2).to_row(piece.force),
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => false,
        };
        self.place(pos, piece);
    }

    pub fn remove(&mut self, pos: Coord) -> Option<Piece> {
        self.forget_king_at(pos);
        self.grid[pos].take()
    }

    // Relocates a piece, capturing whatever stands at `to`. Castling rooks and en passant victims
    // are handled by the caller.
    pub fn move_piece(&mut self, from: Coord, to: Coord, round: u32) {
        let Some(mut piece) = self.remove(from) else {
            panic!("{}", internal_error_message!("no piece at {from}"));
        };
        if piece.kind == PieceKind::Pawn && (to.row - from.row).abs() == 2 {
            piece.double_step_round = Some(round);
        }
        piece.has_moved = true;
        self.place(to, piece);
    }

    pub fn set_not_moved(&mut self, pos: Coord) {
        if let Some(piece) = &mut self.grid[pos] {
            piece.has_moved = false;
        }
    }

    pub fn pieces_of_force(&self, force: Force) -> Vec<(Coord, Piece)> {
        self.grid.pieces().filter(|(_, piece)| piece.force == force).collect()
    }

    pub fn pieces_of_same_kind(sample: Piece, within: &[(Coord, Piece)]) -> Vec<(Coord, Piece)> {
        within
            .iter()
            .copied()
            .filter(|(_, piece)| piece.kind == sample.kind && piece.force == sample.force)
            .collect()
    }

    fn forget_king_at(&mut self, pos: Coord) {
        for king_pos in self.kings.values_mut() {
            if *king_pos == Some(pos) {
                *king_pos = None;
            }
        }
    }
}

pub fn back_row(force: Force) -> Row { SubjectiveRow::from_one_based(1).to_row(force) }
