// Move generation and legality filtering.
//
// Everything here is a total function over a well-formed position: no errors, no side effects.
// Hypothetical moves are played on a private copy of the grid and undone with scope guards.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::board::{Board, back_row};
use crate::coord::{Col, Coord, SubjectiveRow};
use crate::force::Force;
use crate::grid::Grid;
use crate::piece::{Piece, PieceKind};


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum MoveKind {
    Normal,
    Capture,
    KingsideCastle,
    QueensideCastle,
    EnPassant,
}

// Source square is implicit: it is the square the moves were generated for.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Move {
    pub to: Coord,
    pub kind: MoveKind,
}

impl Move {
    pub fn new(to: Coord, kind: MoveKind) -> Self { Move { to, kind } }
    pub fn is_castle(self) -> bool {
        matches!(self.kind, MoveKind::KingsideCastle | MoveKind::QueensideCastle)
    }
}

// Where the rook goes from and to when castling in the given direction.
pub fn castling_rook_squares(force: Force, kind: MoveKind) -> Option<(Coord, Coord)> {
    let row = back_row(force);
    match kind {
        MoveKind::KingsideCastle => Some((Coord::new(row, Col::H), Coord::new(row, Col::F))),
        MoveKind::QueensideCastle => Some((Coord::new(row, Col::A), Coord::new(row, Col::D))),
        MoveKind::Normal | MoveKind::Capture | MoveKind::EnPassant => None,
    }
}

pub fn castling_king_target(force: Force, kind: MoveKind) -> Option<Coord> {
    let row = back_row(force);
    match kind {
        MoveKind::KingsideCastle => Some(Coord::new(row, Col::G)),
        MoveKind::QueensideCastle => Some(Coord::new(row, Col::C)),
        MoveKind::Normal | MoveKind::Capture | MoveKind::EnPassant => None,
    }
}

// The pawn removed by an en passant capture from `from` to `to`.
pub fn en_passant_victim(from: Coord, to: Coord) -> Coord { Coord::new(from.row, to.col) }

pub fn should_promote(piece: Piece, to: Coord) -> bool {
    piece.kind == PieceKind::Pawn && to.row == SubjectiveRow::from_one_based(8).to_row(piece.force)
}

// Geometry-correct moves that may leave own king in check. Empty if `from` is empty.
pub fn pseudo_legal_moves(grid: &Grid, from: Coord, round: u32) -> Vec<Move> {
    let mut moves = Vec::new();
    let Some(piece) = grid[from] else {
        return moves;
    };
    walk_moves(grid, from, piece, &mut moves);
    if piece.kind == PieceKind::Pawn {
        add_en_passant(grid, from, piece, round, &mut moves);
    }
    if piece.kind == PieceKind::King {
        add_castling(grid, from, piece, &mut moves);
    }
    moves
}

fn orient(piece: Piece, (d_row, d_col): (i8, i8)) -> (i8, i8) {
    if piece.kind == PieceKind::Pawn {
        (d_row * piece.force.direction_forward(), d_col)
    } else {
        (d_row, d_col)
    }
}

fn walk_moves(grid: &Grid, from: Coord, piece: Piece, moves: &mut Vec<Move>) {
    let template = piece.kind.template();
    let max_steps = match piece.kind {
        PieceKind::Pawn => if piece.has_moved { 1 } else { 2 },
        _ => if template.scalable { 7 } else { 1 },
    };
    let quiet_only = template.capture_vectors.is_some();
    for &vector in template.vectors {
        let vector = orient(piece, vector);
        let mut pos = from;
        for _ in 0..max_steps {
            let Some(next) = pos.offset(vector) else {
                break;
            };
            pos = next;
            match grid[pos] {
                None => moves.push(Move::new(pos, MoveKind::Normal)),
                Some(other) => {
                    if other.force != piece.force && !quiet_only {
                        moves.push(Move::new(pos, MoveKind::Capture));
                    }
                    break;
                }
            }
        }
    }
    for &vector in template.capture_vectors.unwrap_or(&[]) {
        if let Some(pos) = from.offset(orient(piece, vector)) {
            if grid[pos].is_some_and(|other| other.force != piece.force) {
                moves.push(Move::new(pos, MoveKind::Capture));
            }
        }
    }
}

fn add_en_passant(grid: &Grid, from: Coord, piece: Piece, round: u32, moves: &mut Vec<Move>) {
    if from.row != SubjectiveRow::from_one_based(5).to_row(piece.force) {
        return;
    }
    for d_col in [-1, 1] {
        let Some(side) = from.offset((0, d_col)) else {
            continue;
        };
        let Some(enemy) = grid[side] else {
            continue;
        };
        if enemy.kind != PieceKind::Pawn || enemy.force == piece.force {
            continue;
        }
        if enemy.double_step_round.is_none() || enemy.double_step_round != round.checked_sub(1) {
            continue;
        }
        if let Some(to) = side.offset((piece.force.direction_forward(), 0)) {
            if grid[to].is_none() {
                moves.push(Move::new(to, MoveKind::EnPassant));
            }
        }
    }
}

fn add_castling(grid: &Grid, from: Coord, king: Piece, moves: &mut Vec<Move>) {
    if king.has_moved || from != Coord::new(back_row(king.force), Col::E) {
        return;
    }
    for kind in [MoveKind::KingsideCastle, MoveKind::QueensideCastle] {
        let Some((rook_pos, _)) = castling_rook_squares(king.force, kind) else {
            continue;
        };
        let rook_ok = grid[rook_pos]
            .is_some_and(|rook| rook.is(king.force, PieceKind::Rook) && !rook.has_moved);
        let path_clear = cols_between(from.col, rook_pos.col)
            .all(|col| grid[Coord::new(from.row, col)].is_none());
        if rook_ok && path_clear {
            if let Some(to) = castling_king_target(king.force, kind) {
                moves.push(Move::new(to, kind));
            }
        }
    }
}

// Exclusive on both ends.
fn cols_between(a: Col, b: Col) -> impl Iterator<Item = Col> {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    Col::all().filter(move |&col| lo < col && col < hi)
}

// Inclusive on both ends.
fn cols_spanned(a: Col, b: Col) -> impl Iterator<Item = Col> {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    Col::all().filter(move |&col| lo <= col && col <= hi)
}

// Whether any `attacker` piece has a pseudo-legal move ending on `square`. Castling is left out:
// it never captures.
pub fn is_under_attack(grid: &Grid, attacker: Force, square: Coord, round: u32) -> bool {
    grid.pieces().filter(|(_, piece)| piece.force == attacker).any(|(from, piece)| {
        let mut moves = Vec::new();
        walk_moves(grid, from, piece, &mut moves);
        if piece.kind == PieceKind::Pawn {
            add_en_passant(grid, from, piece, round, &mut moves);
        }
        moves.iter().any(|mv| mv.to == square)
    })
}

// Legal moves: pseudo-legal moves that do not leave own king attacked. A castling move is also
// dropped if the king would start on, cross or land on an attacked square.
pub fn filtered_moves(board: &Board, from: Coord, round: u32) -> Vec<Move> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };
    let mut grid = board.grid().clone();
    let candidates = pseudo_legal_moves(&grid, from, round);
    let opponent = piece.force.opponent();
    candidates
        .into_iter()
        .filter(|mv| {
            if mv.is_castle() {
                castling_path_is_safe(&mut grid, from, mv.to, piece, round)
            } else {
                let king_pos = board.king(piece.force);
                leaves_king_safe(&mut grid, king_pos, from, *mv, piece, round, opponent)
            }
        })
        .collect_vec()
}

fn leaves_king_safe(
    grid: &mut Grid, king_pos: Option<Coord>, from: Coord, mv: Move, piece: Piece, round: u32,
    opponent: Force,
) -> bool {
    // Zero out capture separately because of en passant.
    let victim = (mv.kind == MoveKind::EnPassant).then(|| (en_passant_victim(from, mv.to), None));
    let mut grid = grid.maybe_scoped_set(victim);
    let mut grid = grid.scoped_set(from, None);
    let grid = grid.scoped_set(mv.to, Some(piece));
    let king_pos = if piece.kind == PieceKind::King { Some(mv.to) } else { king_pos };
    match king_pos {
        Some(king_pos) => !is_under_attack(&grid, opponent, king_pos, round),
        // Nothing to protect in a kingless layout.
        None => true,
    }
}

fn castling_path_is_safe(grid: &mut Grid, from: Coord, to: Coord, king: Piece, round: u32) -> bool {
    let opponent = king.force.opponent();
    let mut grid = grid.scoped_set(from, None);
    cols_spanned(from.col, to.col).all(|col| {
        let pos = Coord::new(from.row, col);
        let grid = grid.scoped_set(pos, Some(king));
        !is_under_attack(&grid, opponent, pos, round)
    })
}

// Neither side can ever mate: bare kings, a single minor piece, or one bishop each on squares of
// the same color.
pub fn insufficient_material(board: &Board) -> bool {
    let material = board
        .grid()
        .pieces()
        .filter(|(_, piece)| piece.kind != PieceKind::King)
        .collect_vec();
    if material.iter().any(|(_, piece)| !piece.kind.is_minor()) {
        return false;
    }
    match material.as_slice() {
        [] | [_] => true,
        [(pos_a, a), (pos_b, b)] => {
            a.kind == PieceKind::Bishop
                && b.kind == PieceKind::Bishop
                && a.force != b.force
                && pos_a.color_parity() == pos_b.color_parity()
        }
        _ => false,
    }
}

// Number of legal moves of all `force` pieces.
pub fn count_legal_moves(board: &Board, force: Force, round: u32) -> usize {
    board
        .pieces_of_force(force)
        .into_iter()
        .map(|(pos, _)| filtered_moves(board, pos, round).len())
        .sum()
}
