// Test utilities that cannot be moved to the "tests" folder, because unit tests use them too.

use enum_map::{EnumMap, enum_map};
use rand::{Rng, SeedableRng};

use crate::cached_regex;
use crate::error::TurnError;
use crate::force::Force;
use crate::game::{ChessGame, GameInfo};
use crate::piece::PieceKind;
use crate::player::Player;


// In theory random tests verify properties that should always hold, but let's fix the seed to
// avoid sporadic failures.
pub fn deterministic_rng() -> impl Rng { rand::rngs::StdRng::from_seed([0; 32]) }

pub fn sample_players() -> EnumMap<Force, Player> {
    enum_map! {
        Force::White => Player::human("Alice", "Smith"),
        Force::Black => Player::human("Bob", "Jones"),
    }
}

pub fn sample_info() -> GameInfo {
    GameInfo {
        event: "Test match".to_owned(),
        site: "Localhost".to_owned(),
        date: Some(time::macros::date!(2024 - 01 - 01)),
    }
}

pub fn sample_game() -> ChessGame { ChessGame::new(sample_info(), sample_players()) }

// Improvement potential: Allow whitespace after turn number.
pub fn replay_chess_log(game: &mut ChessGame, log: &str) -> Result<(), TurnError> {
    let turn_number_re = cached_regex!(r"^(?:[0-9]+\.+)?(.*)$");
    for word in log.split_whitespace() {
        let turn_notation = turn_number_re
            .captures(word)
            .and_then(|cap| cap.get(1))
            .map_or(word, |m| m.as_str());
        if turn_notation.is_empty() {
            continue;
        }
        game.apply_algebraic(turn_notation)?;
    }
    Ok(())
}

// Makes a uniformly random legal move for the active side, promoting to a random piece. Returns
// false if the game is over.
pub fn random_legal_move(game: &mut ChessGame, rng: &mut impl Rng) -> bool {
    if !game.is_active() {
        return false;
    }
    let moves = game.all_legal_moves();
    if moves.is_empty() {
        return false;
    }
    let (from, mv) = moves[rng.random_range(0..moves.len())];
    let promote_to = game.requires_promotion(from, mv.to).then(|| {
        const PROMOTION_TARGETS: [PieceKind; 4] =
            [PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight];
        PROMOTION_TARGETS[rng.random_range(0..PROMOTION_TARGETS.len())]
    });
    game.apply_move(from, mv, promote_to).is_ok()
}
