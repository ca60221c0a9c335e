use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use enum_map::{EnumMap, enum_map};
use rand::SeedableRng;
use rand::rngs::StdRng;

use classic_chess::clock::{Clock, GameInstant};
use classic_chess::force::Force;
use classic_chess::game::{ChessGame, GameInfo};
use classic_chess::pgn;
use classic_chess::player::Player;
use classic_chess::rules::Settings;

use crate::computer;
use crate::tui;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Controller {
    Human,
    Computer,
}

pub struct PlayConfig {
    pub settings: Settings,
    pub controllers: EnumMap<Force, Controller>,
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
}

enum HumanInput {
    Quit,
    Resign,
    Draw,
    Move(String),
}

fn read_human_input(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<HumanInput> {
    loop {
        let Some(line) = lines.next() else {
            return Ok(HumanInput::Quit);
        };
        let line = line?;
        let input = match line.trim() {
            "" => continue,
            "quit" => HumanInput::Quit,
            "resign" => HumanInput::Resign,
            "draw" => HumanInput::Draw,
            notation => HumanInput::Move(notation.to_owned()),
        };
        return Ok(input);
    }
}

pub fn run(config: PlayConfig) -> anyhow::Result<()> {
    let controllers = config.controllers;
    let players = enum_map! {
        force => match controllers[force] {
            Controller::Human => Player::human("", &force.to_string()),
            Controller::Computer => Player::computer("Random"),
        }
    };
    let info = GameInfo { event: "Console game".to_owned(), ..GameInfo::default() };
    let mut game = ChessGame::new(info, players);
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let flipped = controllers[Force::White] == Controller::Computer
        && controllers[Force::Black] == Controller::Human;

    let start = Instant::now();
    let now = || GameInstant::from_duration(start.elapsed());
    let mut clock = Clock::new(config.settings.time_control());
    clock.new_turn(game.active_force(), now());
    log::info!("Time control: {}", clock.control());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while game.is_active() {
        let force = game.active_force();
        match controllers[force] {
            Controller::Computer => {
                let Some((from, mv, promote_to)) = computer::choose_move(&game, &mut rng) else {
                    break;
                };
                let record = game.apply_move(from, mv, promote_to)?;
                println!("{force}: {}", record.algebraic);
            }
            Controller::Human => {
                println!("{}", tui::render_game(&game, &clock, now(), flipped));
                print!("{force} to move: ");
                io::stdout().flush()?;
                let input = read_human_input(&mut lines)?;
                if let Some(flagged) = clock.flagged(now()) {
                    game.clock_expired(flagged)?;
                    break;
                }
                match input {
                    HumanInput::Quit => break,
                    HumanInput::Resign => game.resign(force)?,
                    HumanInput::Draw => game.agree_draw()?,
                    HumanInput::Move(notation) => {
                        if let Err(err) = game.apply_algebraic(&notation) {
                            println!("{notation}: {err}");
                            continue;
                        }
                    }
                }
            }
        }
        clock.new_turn(game.active_force(), now());
    }
    clock.stop(now());

    println!("{}", tui::render_game(&game, &clock, now(), flipped));
    if let Some(outcome) = game.outcome() {
        println!("{} {}", game.result().to_pgn(), outcome.reason_text());
    }
    let pgn = pgn::export_to_pgn(&game);
    match config.output {
        Some(path) => {
            let saved = std::fs::write(&path, &pgn)
                .with_context(|| format!("Writing PGN to {}", path.display()));
            if let Err(err) = saved {
                log::error!("{err:#}");
            }
        }
        None => print!("{pgn}"),
    }
    Ok(())
}
