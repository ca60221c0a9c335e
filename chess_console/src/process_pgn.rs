use std::io::{self, Read};

use anyhow::Context;
use classic_chess::pgn;


pub struct ProcessPgnConfig {
    pub annotate: bool,
}

pub fn run(config: ProcessPgnConfig) -> anyhow::Result<()> {
    let mut pgn_in = String::new();
    io::stdin().read_to_string(&mut pgn_in).context("Reading PGN from stdin")?;
    let game = pgn::import_from_pgn_with_observer(&pgn_in, |game, record| {
        if config.annotate {
            let move_number = game.full_move_number(record.round);
            log::info!("{}. {}", move_number, pgn::describe_turn(record));
        }
    })
    .map_err(|err| {
        log::warn!("Error reading PGN: {err}");
        anyhow::anyhow!(err)
    })?;
    if let Some(outcome) = game.outcome() {
        log::info!("{} {}", game.result().to_pgn(), outcome.reason_text());
    }
    print!("{}", pgn::export_to_pgn(&game));
    Ok(())
}
