use std::{fmt, ops};

use ndarray::{Array, Array2};

use crate::coord::{Coord, NUM_COLS, NUM_ROWS};
use crate::piece::{Piece, piece_to_ascii};


#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    data: Array2<Option<Piece>>,
}

impl Grid {
    pub fn new() -> Self {
        Grid {
            data: Array::from_elem((NUM_ROWS as usize, NUM_COLS as usize), None),
        }
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(|pos| self[pos].map(|piece| (pos, piece)))
    }

    // Puts `piece` at `pos` until the guard is dropped. Guards may be nested; each one restores
    // exactly the square it changed.
    pub fn scoped_set<'a>(
        &'a mut self, pos: Coord, piece: Option<Piece>,
    ) -> impl ops::DerefMut<Target = &'a mut Self> + 'a {
        let original_piece = std::mem::replace(&mut self[pos], piece);
        scopeguard::guard(self, move |grid| grid[pos] = original_piece)
    }

    pub fn maybe_scoped_set<'a>(
        &'a mut self, change: Option<(Coord, Option<Piece>)>,
    ) -> impl ops::DerefMut<Target = &'a mut Self> + 'a {
        let original =
            change.map(|(pos, piece)| (pos, std::mem::replace(&mut self[pos], piece)));
        scopeguard::guard(self, move |grid| {
            if let Some((pos, original_piece)) = original {
                grid[pos] = original_piece;
            }
        })
    }
}

impl ops::Index<Coord> for Grid {
    type Output = Option<Piece>;
    fn index(&self, pos: Coord) -> &Self::Output { &self.data[coord_to_index(pos)] }
}

impl ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, pos: Coord) -> &mut Self::Output {
        &mut self.data[coord_to_index(pos)]
    }
}

// Coords are always in bounds, so indexing cannot fail.
fn coord_to_index(pos: Coord) -> [usize; 2] {
    [pos.row.to_zero_based() as usize, pos.col.to_zero_based() as usize]
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid ")?;
        f.debug_map()
            .entries(
                self.pieces()
                    .map(|(pos, piece)| {
                        (pos.to_algebraic(), piece_to_ascii(piece.kind, piece.force))
                    }),
            )
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::force::Force;
    use crate::piece::PieceKind;

    #[test]
    fn scoped_set() {
        let make_piece = |kind| Piece::new(kind, Force::White);
        let mut g = Grid::new();
        g[Coord::A1] = Some(make_piece(PieceKind::Queen));
        g[Coord::B2] = Some(make_piece(PieceKind::King));
        g[Coord::C3] = Some(make_piece(PieceKind::Rook));
        {
            let mut g = g.scoped_set(Coord::A1, Some(make_piece(PieceKind::Knight)));
            let mut g = g.scoped_set(Coord::A1, None);
            let g = g.scoped_set(Coord::C3, Some(make_piece(PieceKind::Bishop)));
            assert_eq!(g[Coord::A1], None);
            assert_eq!(g[Coord::B2].unwrap().kind, PieceKind::King);
            assert_eq!(g[Coord::C3].unwrap().kind, PieceKind::Bishop);
        }
        assert_eq!(g[Coord::A1].unwrap().kind, PieceKind::Queen);
        assert_eq!(g[Coord::B2].unwrap().kind, PieceKind::King);
        assert_eq!(g[Coord::C3].unwrap().kind, PieceKind::Rook);
    }

    #[test]
    fn maybe_scoped_set() {
        let mut g = Grid::new();
        g[Coord::D5] = Some(Piece::new(PieceKind::Pawn, Force::Black));
        {
            let mut g = g.maybe_scoped_set(Some((Coord::D5, None)));
            let g = g.maybe_scoped_set(None);
            assert_eq!(g[Coord::D5], None);
        }
        assert_eq!(g[Coord::D5].unwrap().force, Force::Black);
    }
}
