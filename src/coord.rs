use std::fmt;
use std::ops;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::force::Force;


pub const NUM_ROWS: u8 = 8;
pub const NUM_COLS: u8 = 8;


// Row from a force's point of view: `SubjectiveRow::from_one_based(1)` is the back rank.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct SubjectiveRow {
    idx: u8, // 0-based
}

impl SubjectiveRow {
    pub const fn from_one_based(idx: u8) -> Self {
        assert!(idx >= 1 && idx <= NUM_ROWS);
        Self { idx: idx - 1 }
    }
    pub fn to_row(self, force: Force) -> Row {
        match force {
            Force::White => Row::from_zero_based(self.idx),
            Force::Black => Row::from_zero_based(NUM_ROWS - self.idx - 1),
        }
    }
    pub fn from_row(row: Row, force: Force) -> Self {
        let idx = match force {
            Force::White => row.idx,
            Force::Black => NUM_ROWS - row.idx - 1,
        };
        Self { idx }
    }
    pub fn to_one_based(self) -> u8 { self.idx + 1 }
}


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Row {
    idx: u8, // 0-based, rank 1 is 0
}

impl Row {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_ROWS);
        Self { idx }
    }
    pub fn from_algebraic(ch: char) -> Option<Self> {
        let idx = (ch as u32).checked_sub('1' as u32)?;
        (idx < NUM_ROWS as u32).then(|| Self::from_zero_based(idx as u8))
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_algebraic(self) -> char { (self.idx + b'1') as char }
    pub fn offset(self, delta: i8) -> Option<Self> {
        let idx = self.idx as i8 + delta;
        (0..NUM_ROWS as i8).contains(&idx).then(|| Self::from_zero_based(idx as u8))
    }
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + Clone {
        (0..NUM_ROWS).map(Self::from_zero_based)
    }
}

impl ops::Sub for Row {
    type Output = i8;
    fn sub(self, other: Self) -> Self::Output { self.idx as i8 - other.idx as i8 }
}


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Col {
    idx: u8, // 0-based, file A is 0
}

impl Col {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_COLS);
        Self { idx }
    }
    pub fn from_algebraic(ch: char) -> Option<Self> {
        let idx = (ch as u32).checked_sub('a' as u32)?;
        (idx < NUM_COLS as u32).then(|| Self::from_zero_based(idx as u8))
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_algebraic(self) -> char { (self.idx + b'a') as char }
    pub fn offset(self, delta: i8) -> Option<Self> {
        let idx = self.idx as i8 + delta;
        (0..NUM_COLS as i8).contains(&idx).then(|| Self::from_zero_based(idx as u8))
    }
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + Clone {
        (0..NUM_COLS).map(Self::from_zero_based)
    }
}

impl ops::Sub for Col {
    type Output = i8;
    fn sub(self, other: Self) -> Self::Output { self.idx as i8 - other.idx as i8 }
}


#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: Row,
    pub col: Col,
}

impl Coord {
    pub const fn new(row: Row, col: Col) -> Self { Self { row, col } }

    pub fn from_algebraic(s: &str) -> Option<Self> {
        let (col, row) = s.chars().collect_tuple()?;
        Some(Coord::new(Row::from_algebraic(row)?, Col::from_algebraic(col)?))
    }
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.col.to_algebraic(), self.row.to_algebraic())
    }

    // `(d_row, d_col)` step; `None` when it leaves the board.
    pub fn offset(self, (d_row, d_col): (i8, i8)) -> Option<Self> {
        Some(Coord::new(self.row.offset(d_row)?, self.col.offset(d_col)?))
    }

    // Squares of the same parity have the same color.
    pub fn color_parity(self) -> u8 { (self.row.idx + self.col.idx) % 2 }

    pub fn all() -> impl Iterator<Item = Coord> {
        Row::all().cartesian_product(Col::all()).map(|(row, col)| Coord { row, col })
    }

    // Used by `squares!` only: `name` is an uppercase square name like "E4".
    const fn from_const_name(name: &str) -> Self {
        let bytes = name.as_bytes();
        assert!(bytes.len() == 2);
        Coord::new(Row::from_zero_based(bytes[1] - b'1'), Col::from_zero_based(bytes[0] - b'A'))
    }
}

impl ops::Sub for Coord {
    type Output = (i8, i8);
    fn sub(self, other: Self) -> Self::Output { (self.row - other.row, self.col - other.col) }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({})", self.to_algebraic())
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}


impl Row {
    pub const _1: Row = Row::from_zero_based(0);
    pub const _2: Row = Row::from_zero_based(1);
    pub const _3: Row = Row::from_zero_based(2);
    pub const _4: Row = Row::from_zero_based(3);
    pub const _5: Row = Row::from_zero_based(4);
    pub const _6: Row = Row::from_zero_based(5);
    pub const _7: Row = Row::from_zero_based(6);
    pub const _8: Row = Row::from_zero_based(7);
}

impl Col {
    pub const A: Col = Col::from_zero_based(0);
    pub const B: Col = Col::from_zero_based(1);
    pub const C: Col = Col::from_zero_based(2);
    pub const D: Col = Col::from_zero_based(3);
    pub const E: Col = Col::from_zero_based(4);
    pub const F: Col = Col::from_zero_based(5);
    pub const G: Col = Col::from_zero_based(6);
    pub const H: Col = Col::from_zero_based(7);
}

macro_rules! squares {
    ($($name:ident)*) => {
        #[allow(dead_code)]
        impl Coord {
            $( pub const $name: Coord = Coord::from_const_name(stringify!($name)); )*
        }
    };
}

squares! {
    A1 B1 C1 D1 E1 F1 G1 H1
    A2 B2 C2 D2 E2 F2 G2 H2
    A3 B3 C3 D3 E3 F3 G3 H3
    A4 B4 C4 D4 E4 F4 G4 H4
    A5 B5 C5 D5 E5 F5 G5 H5
    A6 B6 C6 D6 E6 F6 G6 H6
    A7 B7 C7 D7 E7 F7 G7 H7
    A8 B8 C8 D8 E8 F8 G8 H8
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algebraic() {
        assert_eq!(Coord::from_algebraic("e4"), Some(Coord::E4));
        assert_eq!(Coord::from_algebraic("h8"), Some(Coord::H8));
        assert_eq!(Coord::from_algebraic("i1"), None);
        assert_eq!(Coord::from_algebraic("a9"), None);
        assert_eq!(Coord::from_algebraic("a"), None);
        assert_eq!(Coord::B7.to_algebraic(), "b7");
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(Coord::A1.offset((1, 2)), Some(Coord::C2));
        assert_eq!(Coord::A1.offset((-1, 0)), None);
        assert_eq!(Coord::H8.offset((0, 1)), None);
    }

    #[test]
    fn subjective_rows() {
        assert_eq!(SubjectiveRow::from_one_based(2).to_row(Force::White), Row::_2);
        assert_eq!(SubjectiveRow::from_one_based(2).to_row(Force::Black), Row::_7);
        assert_eq!(SubjectiveRow::from_row(Row::_4, Force::Black).to_one_based(), 5);
    }

    #[test]
    fn square_colors() {
        assert_eq!(Coord::A1.color_parity(), Coord::H8.color_parity());
        assert_ne!(Coord::A1.color_parity(), Coord::A2.color_parity());
        assert_ne!(Coord::C1.color_parity(), Coord::F1.color_parity());
    }

    // Turn records embed coordinates, so they must be serializable.
    #[test]
    fn serializable() {
        fn check<T: Serialize + for<'de> Deserialize<'de>>() {}
        check::<Row>();
        check::<Col>();
        check::<Coord>();
        check::<crate::movegen::Move>();
        check::<crate::game::TurnRecord>();
    }
}
