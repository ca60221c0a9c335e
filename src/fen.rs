// Differences from classic FEN notation:
//   - En passant target is always "-": a game can only start from a layout without history.
//   - Halfmove clock and full move index are written as "0 1" and ignored when reading.

use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::board::{Board, back_row};
use crate::coord::{Col, Coord, NUM_COLS, NUM_ROWS, Row};
use crate::force::Force;
use crate::piece::{Piece, PieceKind, piece_from_ascii, piece_to_ascii};
use crate::util::as_single_char;


pub fn force_to_fen(force: Force) -> char {
    match force {
        Force::White => 'w',
        Force::Black => 'b',
    }
}
pub fn force_from_fen(s: &str) -> Result<Force, String> {
    let ch = as_single_char(s).ok_or_else(|| format!("invalid force: {s}"))?;
    match ch {
        'w' => Ok(Force::White),
        'b' => Ok(Force::Black),
        _ => Err(format!("invalid force: {ch}")),
    }
}

// Castling squares as (symbol, king square, rook square).
fn castling_symbols(force: Force) -> [(char, Coord, Coord); 2] {
    let row = back_row(force);
    let (kingside, queenside) = match force {
        Force::White => ('K', 'Q'),
        Force::Black => ('k', 'q'),
    };
    [
        (kingside, Coord::new(row, Col::E), Coord::new(row, Col::H)),
        (queenside, Coord::new(row, Col::E), Coord::new(row, Col::A)),
    ]
}

fn is_unmoved(board: &Board, pos: Coord, force: Force, kind: PieceKind) -> bool {
    board.piece_at(pos).is_some_and(|piece| piece.is(force, kind) && !piece.has_moved)
}

fn castling_rights_to_fen(board: &Board) -> String {
    let mut s = String::new();
    for force in Force::iter() {
        for (symbol, king_pos, rook_pos) in castling_symbols(force) {
            if is_unmoved(board, king_pos, force, PieceKind::King)
                && is_unmoved(board, rook_pos, force, PieceKind::Rook)
            {
                s.push(symbol);
            }
        }
    }
    if s.is_empty() { "-".to_owned() } else { s }
}

// Kings and rooks of a loaded layout count as moved until castling rights say otherwise.
fn apply_castling_rights(board: &mut Board, s: &str) -> Result<(), String> {
    if s == "-" {
        return Ok(());
    }
    for ch in s.chars() {
        let (force, king_pos, rook_pos) = Force::iter()
            .flat_map(|force| castling_symbols(force).map(|(sym, k, r)| (sym, force, k, r)))
            .find(|&(sym, ..)| sym == ch)
            .map(|(_, force, k, r)| (force, k, r))
            .ok_or_else(|| format!("invalid castling rights: {s}"))?;
        let king_ok = board.piece_at(king_pos).is_some_and(|p| p.is(force, PieceKind::King));
        let rook_ok = board.piece_at(rook_pos).is_some_and(|p| p.is(force, PieceKind::Rook));
        if !king_ok || !rook_ok {
            return Err(format!("castling right {ch} without king and rook in place"));
        }
        board.set_not_moved(king_pos);
        board.set_not_moved(rook_pos);
    }
    Ok(())
}

// Piece placement: ranks from 8 down to 1 separated by "/", runs of empty squares as digits.
pub fn placement_to_fen(board: &Board) -> String {
    Row::all()
        .rev()
        .map(|row| {
            let mut row_notation = String::new();
            let mut empty_col_count: u8 = 0;
            for col in Col::all() {
                if let Some(piece) = board.piece_at(Coord::new(row, col)) {
                    if empty_col_count > 0 {
                        row_notation.push_str(&empty_col_count.to_string());
                        empty_col_count = 0;
                    }
                    row_notation.push(piece_to_ascii(piece.kind, piece.force));
                } else {
                    empty_col_count += 1;
                }
            }
            if empty_col_count > 0 {
                row_notation.push_str(&empty_col_count.to_string());
            }
            row_notation
        })
        .join("/")
}

// Returns a custom board. Piece history is guessed as in `Board::place_initial`.
pub fn placement_from_fen(notation: &str) -> Result<Board, String> {
    let mut board = Board::empty();
    let rows = notation.split('/').collect_vec();
    if rows.len() != NUM_ROWS as usize {
        return Err(format!(
            "invalid FEN: has {} rows, expected {}",
            rows.len(),
            NUM_ROWS
        ));
    }
    for (row, row_notation) in Row::all().rev().zip_eq(rows) {
        let mut col: u8 = 0;
        for ch in row_notation.chars() {
            if let Some(n) = ch.to_digit(10) {
                col += n as u8;
                if col > NUM_COLS {
                    return Err(format!("invalid FEN: row {} is too long", row.to_algebraic()));
                }
            } else if let Some((kind, force)) = piece_from_ascii(ch) {
                if col >= NUM_COLS {
                    return Err(format!("invalid FEN: row {} is too long", row.to_algebraic()));
                }
                let pos = Coord::new(row, Col::from_zero_based(col));
                board.place_initial(pos, Piece::new(kind, force));
                col += 1;
            } else {
                return Err(format!("invalid FEN: unknown piece: {ch}"));
            }
        }
        if col != NUM_COLS {
            return Err(format!(
                "invalid FEN: row {} has {} columns, expected {}",
                row.to_algebraic(),
                col,
                NUM_COLS
            ));
        }
    }
    Ok(board)
}

pub fn board_to_fen(board: &Board, active_force: Force) -> String {
    format!(
        "{} {} {} - 0 1",
        placement_to_fen(board),
        force_to_fen(active_force),
        castling_rights_to_fen(board)
    )
}

// Only placement and active force are required. Castling rights are applied if present.
pub fn fen_to_board(fen: &str) -> Result<(Board, Force), String> {
    let mut fields = fen.split_whitespace();
    let (Some(placement), Some(active_force)) = (fields.next(), fields.next()) else {
        return Err(format!("invalid FEN: {fen}"));
    };
    let mut board = placement_from_fen(placement)?;
    let active_force = force_from_fen(active_force)?;
    if let Some(castling) = fields.next() {
        apply_castling_rights(&mut board, castling)?;
    }
    Ok((board, active_force))
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const STANDARD_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn standard_placement() {
        assert_eq!(placement_to_fen(&Board::standard()), STANDARD_PLACEMENT);
        assert_eq!(
            board_to_fen(&Board::standard(), Force::White),
            format!("{STANDARD_PLACEMENT} w KQkq - 0 1")
        );
    }

    #[test]
    fn empty_runs_are_coalesced() {
        let mut board = Board::empty();
        board.place_initial(Coord::A1, Piece::new(PieceKind::King, Force::White));
        board.place_initial(Coord::H1, Piece::new(PieceKind::Rook, Force::White));
        board.place_initial(Coord::D5, Piece::new(PieceKind::Pawn, Force::Black));
        board.place_initial(Coord::E8, Piece::new(PieceKind::King, Force::Black));
        assert_eq!(placement_to_fen(&board), "4k3/8/8/3p4/8/8/8/K6R");
        assert_eq!(board_to_fen(&board, Force::Black), "4k3/8/8/3p4/8/8/8/K6R b - - 0 1");
    }

    #[test]
    fn read_back() {
        let fen = "r3k2r/8/8/8/8/8/4P3/4K2R b Kq - 0 1";
        let (board, active_force) = fen_to_board(fen).unwrap();
        assert_eq!(active_force, Force::Black);
        assert!(board.is_custom());
        assert_eq!(board.king(Force::White), Some(Coord::E1));
        assert!(!board.piece_at(Coord::E2).unwrap().has_moved);
        assert!(!board.piece_at(Coord::H1).unwrap().has_moved);
        assert!(!board.piece_at(Coord::A8).unwrap().has_moved);
        assert!(board.piece_at(Coord::H8).unwrap().has_moved);
        assert_eq!(board_to_fen(&board, active_force), fen);
    }

    #[test]
    fn placement_and_force_are_enough() {
        let (board, active_force) = fen_to_board("8/8/8/8/8/8/8/k6K w").unwrap();
        assert_eq!(active_force, Force::White);
        assert_eq!(board.king(Force::Black), Some(Coord::A1));
    }

    #[test]
    fn malformed() {
        assert!(fen_to_board("").is_err());
        assert!(fen_to_board(STANDARD_PLACEMENT).is_err());
        assert!(fen_to_board(&format!("{STANDARD_PLACEMENT} x")).is_err());
        assert!(placement_from_fen("8/8/8/8/8/8/8").is_err());
        assert!(placement_from_fen("9/8/8/8/8/8/8/8").is_err());
        assert!(placement_from_fen("7/8/8/8/8/8/8/8").is_err());
        assert!(placement_from_fen("8/8/8/8/8/8/8/7X").is_err());
        assert!(fen_to_board("8/8/8/8/8/8/8/k6K w K").is_err());
    }
}
