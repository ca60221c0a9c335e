// Legend for various fix-this comments:
//   * "TODO" - bug or missing crucial feature.
//   * "Improvement potential" - missing nice-to-have feature or an opportunity
//       to make code better or faster.

#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod check_layout;
mod computer;
mod play;
mod process_pgn;
mod tui;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Command, arg};
use classic_chess::fen;
use classic_chess::force::Force;
use classic_chess::rules::Settings;
use enum_map::enum_map;
use play::Controller;


fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Chess")
        .version(clap::crate_version!())
        .about("Classic chess console app")
        .subcommand_required(true)
        .subcommand(
            Command::new("pgn")
                .about("Reads a PGN from stdin, replays it and writes it back to stdout.")
                .arg(arg!(--"annotate" "Logs a human-readable description of every move.")),
        )
        .subcommand(
            Command::new("play")
                .about("Plays a game in the terminal")
                .arg(arg!(--"config" <config_file> "Path to yaml-serialized Settings."))
                .arg(
                    arg!(--"white" <controller>)
                        .value_parser(["human", "computer"])
                        .default_value("human"),
                )
                .arg(
                    arg!(--"black" <controller>)
                        .value_parser(["human", "computer"])
                        .default_value("computer"),
                )
                .arg(arg!(-'o' --"output" <pgn_file> "Where to save the game record."))
                .arg(
                    arg!(--"seed" <seed> "Seed for computer players.")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("fen")
                .about("Validates a piece placement as a custom starting layout.")
                .arg(arg!(<placement> "Piece placement, e.g. 4k3/8/8/8/8/8/4P3/4K3"))
                .arg(
                    arg!(--"to-move" <force>)
                        .value_parser(["w", "b"])
                        .default_value("w"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("pgn", sub_matches)) => process_pgn::run(process_pgn::ProcessPgnConfig {
            annotate: sub_matches.get_flag("annotate"),
        }),
        Some(("play", sub_matches)) => {
            let settings = match sub_matches.get_one::<String>("config") {
                Some(filename) => read_config_file(filename)?,
                None => Settings::default(),
            };
            let controller = |name: &str| {
                match sub_matches.get_one::<String>(name).map(String::as_str) {
                    Some("computer") => Controller::Computer,
                    _ => Controller::Human,
                }
            };
            play::run(play::PlayConfig {
                settings,
                controllers: enum_map! {
                    Force::White => controller("white"),
                    Force::Black => controller("black"),
                },
                output: sub_matches.get_one::<String>("output").map(PathBuf::from),
                seed: sub_matches.get_one::<u64>("seed").copied(),
            })
        }
        Some(("fen", sub_matches)) => {
            let to_move = sub_matches.get_one::<String>("to-move").map_or("w", String::as_str);
            check_layout::run(check_layout::CheckLayoutConfig {
                placement: sub_matches.get_one::<String>("placement").cloned().unwrap_or_default(),
                active_force: fen::force_from_fen(to_move).map_err(anyhow::Error::msg)?,
            })
        }
        _ => unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`"),
    }
}

fn read_config_file(filename: &str) -> anyhow::Result<Settings> {
    let contents = std::fs::read_to_string(filename)
        .with_context(|| format!("Reading config file {filename}"))?;
    serde_yaml::from_str(&contents).with_context(|| format!("Parsing config file {filename}"))
}
