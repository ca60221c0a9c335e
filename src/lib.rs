#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod algebraic;
pub mod board;
pub mod clock;
pub mod coord;
pub mod error;
pub mod fen;
pub mod force;
pub mod game;
pub mod grid;
pub mod layout;
pub mod movegen;
pub mod pgn;
pub mod piece;
pub mod player;
pub mod rules;
pub mod test_util;
pub mod util;
