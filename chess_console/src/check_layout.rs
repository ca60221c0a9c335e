use classic_chess::fen;
use classic_chess::force::Force;
use classic_chess::game::{ChessGame, GameInfo};
use classic_chess::layout::{CustomLayout, LayoutStatus};
use classic_chess::player::Player;


pub struct CheckLayoutConfig {
    pub placement: String,
    pub active_force: Force,
}

// Builds the layout square by square, the way an editor would, and reports the verdict.
pub fn run(config: CheckLayoutConfig) -> anyhow::Result<()> {
    let parsed = fen::placement_from_fen(&config.placement).map_err(anyhow::Error::msg)?;
    let mut layout = CustomLayout::new();
    let mut status = layout.status();
    for (pos, piece) in parsed.grid().pieces() {
        status = layout.set(pos, Some(piece));
    }
    let LayoutStatus { valid, message } = status;
    println!("{message}");
    if valid {
        let board = layout.confirm().map_err(|status| anyhow::Error::msg(status.message))?;
        println!("{}", fen::board_to_fen(&board, config.active_force));
        let players = enum_map::enum_map! { _ => Player::default() };
        let game =
            ChessGame::new_with_board(GameInfo::default(), players, board, config.active_force)
                .map_err(anyhow::Error::msg)?;
        if let Some(outcome) = game.outcome() {
            println!("Game is decided from the start: {}", outcome.reason_text());
        }
        Ok(())
    } else {
        Err(anyhow::anyhow!("Invalid layout: {message}"))
    }
}
