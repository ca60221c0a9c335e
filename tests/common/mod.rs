// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use classic_chess::board::Board;
use classic_chess::coord::{Col, Coord, Row};
use classic_chess::force::Force;
use classic_chess::piece::{Piece, PieceKind, piece_from_ascii};
use classic_chess::util::as_single_char;
use itertools::Itertools;


#[derive(Clone, Copy, Debug)]
pub struct PieceMatcher {
    pub kind: PieceKind,
    pub force: Force,
}

pub trait PieceIs {
    fn is(self, matcher: PieceMatcher) -> bool;
}

impl PieceIs for Option<Piece> {
    fn is(self, matcher: PieceMatcher) -> bool {
        if let Some(piece) = self {
            piece.kind == matcher.kind && piece.force == matcher.force
        } else {
            false
        }
    }
}

#[macro_export]
macro_rules! piece {
    ($force:ident $kind:ident) => {
        common::PieceMatcher {
            force: classic_chess::force::Force::$force,
            kind: classic_chess::piece::PieceKind::$kind,
        }
    };
}

// Parses a diagram with rank 8 on top, e.g. "r n b q k b n r" for the first line. Empty squares
// are dots. Piece history is guessed as in `Board::place_initial`.
#[allow(dead_code)]
pub fn parse_board(board_str: &str) -> Result<Board, String> {
    let rows = board_str
        .split('\n')
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.split_ascii_whitespace().collect_vec())
        .collect_vec();
    assert_eq!(rows.len(), 8);
    assert!(rows.iter().all(|row| row.len() == 8));
    let mut board = Board::empty();
    for (row_idx, row) in rows.iter().rev().enumerate() {
        for (col_idx, piece_str) in row.iter().enumerate() {
            let piece_char =
                as_single_char(piece_str).ok_or_else(|| format!("Invalid piece: {}", piece_str))?;
            if piece_char == '.' {
                continue;
            }
            let (kind, force) = piece_from_ascii(piece_char)
                .ok_or_else(|| format!("Invalid piece: {}", piece_char))?;
            let coord = Coord::new(
                Row::from_zero_based(row_idx as u8),
                Col::from_zero_based(col_idx as u8),
            );
            board.place_initial(coord, Piece::new(kind, force));
        }
    }
    Ok(board)
}


#[cfg(test)]
mod tests {
    use classic_chess::fen::placement_to_fen;

    use super::*;

    #[test]
    fn parse_board_opening() {
        let board_str = "
            r n b q k b n r
            p p p . p p p p
            . . . . . . . .
            . . . p . . . .
            . . . . P . . .
            . . . . . . . .
            P P P P . P P P
            R N B Q K B N R
        ";
        let board = parse_board(board_str).unwrap();
        assert_eq!(placement_to_fen(&board), "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR");
        assert_eq!(board.king(Force::Black), Some(Coord::E8));
    }
}
