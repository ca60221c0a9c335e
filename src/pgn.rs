// PGN (Portable Game Notation) export and import.
// Doc: http://www.saremba.de/chessgml/standards/pgn/pgn-complete.htm
//
// Import is a single pipeline: header tags, then move text applied ply by ply through
// `ChessGame::apply_algebraic`. Loading and browsing both go through it.

use enum_map::enum_map;
use itertools::Itertools;
use time::macros::format_description;

use crate::algebraic::CheckMark;
use crate::board::Board;
use crate::cached_regex;
use crate::fen;
use crate::force::Force;
use crate::game::{ChessGame, GameInfo, GameResult, TurnRecord};
use crate::movegen::MoveKind;
use crate::player::Player;


const LINE_WIDTH: usize = 80;
const UNKNOWN_TAG_VALUE: &str = "?";

struct TextDocument {
    text: String,
    last_line_len: usize,
}
impl TextDocument {
    fn new() -> Self { TextDocument { text: String::new(), last_line_len: 0 } }
    fn push_word(&mut self, word: &str) {
        if self.last_line_len == 0 {
            // no separators: first record
        } else if self.last_line_len + word.len() < LINE_WIDTH {
            self.text.push(' ');
            self.last_line_len += 1;
        } else {
            self.text.push('\n');
            self.last_line_len = 0;
        }
        self.text.push_str(word);
        self.last_line_len += word.len();
    }
    fn render(&self) -> String {
        let trailing_newline = if self.last_line_len > 0 { "\n" } else { "" };
        format!("{}{}", self.text, trailing_newline)
    }
}

fn tag_value_or_unknown(value: &str) -> &str {
    if value.is_empty() { UNKNOWN_TAG_VALUE } else { value }
}

fn tag_value_or_empty(value: &str) -> String {
    if value == UNKNOWN_TAG_VALUE { String::new() } else { value.to_owned() }
}

fn format_date(date: time::Date) -> String {
    date.format(format_description!("[year].[month].[day]"))
        .unwrap_or_else(|_| "????.??.??".to_owned())
}

// Unknown parts ("2024.??.??") make the whole date unknown.
fn parse_date(s: &str) -> Option<time::Date> {
    time::Date::parse(s, format_description!("[year].[month].[day]")).ok()
}

fn make_header(game: &ChessGame) -> String {
    let info = game.info();
    let date = info.date.unwrap_or_else(|| time::OffsetDateTime::now_utc().date());
    let mut tags = vec![
        ("Event", tag_value_or_unknown(&info.event).to_owned()),
        ("Site", tag_value_or_unknown(&info.site).to_owned()),
        ("Date", format_date(date)),
        ("Round", "-".to_owned()),
        ("White", game.player(Force::White).to_pgn()),
        ("Black", game.player(Force::Black).to_pgn()),
        ("Result", game.result().to_pgn().to_owned()),
    ];
    if game.starting_board().is_custom() {
        tags.push(("SetUp", "1".to_owned()));
        tags.push(("FEN", fen::board_to_fen(game.starting_board(), game.first_force())));
    }
    tags.into_iter().map(|(name, value)| format!("[{name} \"{value}\"]\n")).join("")
}

pub fn export_to_pgn(game: &ChessGame) -> String {
    let mut doc = TextDocument::new();
    for (idx, record) in game.turn_log().iter().enumerate() {
        let move_number = game.full_move_number(record.round);
        let word = match record.force {
            Force::White => format!("{}. {}", move_number, record.algebraic),
            Force::Black if idx == 0 => format!("{}... {}", move_number, record.algebraic),
            Force::Black => record.algebraic.clone(),
        };
        doc.push_word(&word);
    }
    doc.push_word(game.result().to_pgn());
    format!("{}\n{}", make_header(game), doc.render())
}

struct PgnHeader {
    tags: Vec<(String, String)>,
}

impl PgnHeader {
    fn get(&self, name: &str) -> Option<&str> {
        self.tags.iter().find(|(tag, _)| tag == name).map(|(_, value)| value.as_str())
    }
}

// Splits PGN text into header tags and move text.
fn parse_header(pgn: &str) -> Result<(PgnHeader, String), String> {
    let tag_re = cached_regex!(r#"^\[([A-Za-z0-9_]+)\s+"(.*)"\]$"#);
    let mut tags = Vec::new();
    let mut lines = pgn.lines().map(str::trim).skip_while(|line| line.is_empty()).peekable();
    while let Some(line) = lines.next_if(|line| line.starts_with('[')) {
        let cap = tag_re.captures(line).ok_or_else(|| format!("Wrong tag format: {line}"))?;
        tags.push((cap[1].to_owned(), cap[2].to_owned()));
    }
    let movetext = lines.join("\n");
    Ok((PgnHeader { tags }, movetext))
}

fn new_game_from_header(header: &PgnHeader) -> Result<ChessGame, String> {
    let info = GameInfo {
        event: tag_value_or_empty(header.get("Event").unwrap_or(UNKNOWN_TAG_VALUE)),
        site: tag_value_or_empty(header.get("Site").unwrap_or(UNKNOWN_TAG_VALUE)),
        date: header.get("Date").and_then(parse_date),
    };
    let players = enum_map! {
        Force::White => Player::from_pgn(header.get("White").unwrap_or(UNKNOWN_TAG_VALUE)),
        Force::Black => Player::from_pgn(header.get("Black").unwrap_or(UNKNOWN_TAG_VALUE)),
    };
    if header.get("SetUp") == Some("1") {
        let fen = header.get("FEN").ok_or_else(|| "No FEN present".to_owned())?;
        let (board, active_force) = fen::fen_to_board(fen)?;
        ChessGame::new_with_board(info, players, board, active_force)
    } else {
        Ok(ChessGame::new(info, players))
    }
}

// Move text tokens without move numbers and comments.
fn movetext_tokens(movetext: &str) -> Vec<String> {
    let comment_re = cached_regex!(r"\{[^}]*\}|;[^\n]*");
    let move_number_re = cached_regex!(r"^[0-9]+\.+(.*)$");
    comment_re
        .replace_all(movetext, " ")
        .split_whitespace()
        .filter_map(|token| match move_number_re.captures(token) {
            Some(cap) => {
                let rest = cap.get(1).map_or("", |m| m.as_str());
                (!rest.is_empty()).then(|| rest.to_owned())
            }
            None => Some(token.to_owned()),
        })
        .collect()
}

// Parses a game record and replays it. `observer` is called after every applied ply.
pub fn import_from_pgn_with_observer(
    pgn: &str, mut observer: impl FnMut(&ChessGame, &TurnRecord),
) -> Result<ChessGame, String> {
    let (header, movetext) = parse_header(pgn)?;
    let mut game = new_game_from_header(&header)?;
    let mut recorded_result = header.get("Result").and_then(GameResult::from_pgn);
    for token in movetext_tokens(&movetext) {
        if let Some(result) = GameResult::from_pgn(&token) {
            recorded_result = Some(result);
            break;
        }
        let record = game.apply_algebraic(&token).map_err(|err| {
            format!("Cannot apply move \"{}\" at ply {}: {}", token, game.round(), err)
        })?;
        observer(&game, &record);
    }
    if let Some(result) = recorded_result {
        game.settle_from_record(result);
    }
    Ok(game)
}

pub fn import_from_pgn(pgn: &str) -> Result<ChessGame, String> {
    import_from_pgn_with_observer(pgn, |_, _| {})
}

// Human-readable description of a ply, e.g. "White Pawn e5 -> d6 - captured Black Pawn -
// en passant".
pub fn describe_turn(record: &TurnRecord) -> String {
    let mut s = format!(
        "{} {} {} -> {}",
        record.force,
        record.piece_kind.name(),
        record.from,
        record.mv.to
    );
    if let Some(captured) = record.captured {
        s.push_str(&format!(" - captured {} {}", record.force.opponent(), captured.name()));
    }
    if record.mv.kind == MoveKind::EnPassant {
        s.push_str(" - en passant");
    }
    if let Some(promote_to) = record.promote_to {
        s.push_str(&format!(" - promoted to {}", promote_to.name()));
    }
    match record.check_mark {
        CheckMark::Checkmate => s.push_str(&format!(" - checkmate - {} player won", record.force)),
        CheckMark::Check => s.push_str(" - check"),
        CheckMark::None => {}
    }
    s
}

// Step-by-step view of a recorded game.
#[derive(Clone, Debug)]
pub struct PgnBrowser {
    game: ChessGame,
    // Position before the first ply and after each ply.
    positions: Vec<Board>,
    annotations: Vec<String>,
    cursor: usize,
}

impl PgnBrowser {
    pub fn new(pgn: &str) -> Result<Self, String> {
        let (header, _) = parse_header(pgn)?;
        let mut positions = vec![new_game_from_header(&header)?.board().clone()];
        let mut annotations = Vec::new();
        let game = import_from_pgn_with_observer(pgn, |game, record| {
            positions.push(game.board().clone());
            annotations.push(describe_turn(record));
        })?;
        Ok(PgnBrowser { game, positions, annotations, cursor: 0 })
    }

    pub fn game(&self) -> &ChessGame { &self.game }
    pub fn num_plies(&self) -> usize { self.annotations.len() }
    pub fn cursor(&self) -> usize { self.cursor }
    pub fn board(&self) -> &Board { &self.positions[self.cursor] }
    pub fn has_next(&self) -> bool { self.cursor < self.num_plies() }
    pub fn has_previous(&self) -> bool { self.cursor > 0 }

    // Annotation of the ply that led to the current position.
    pub fn annotation(&self) -> Option<&str> {
        self.cursor.checked_sub(1).map(|idx| self.annotations[idx].as_str())
    }

    pub fn next(&mut self) -> Option<&str> {
        if !self.has_next() {
            return None;
        }
        self.cursor += 1;
        self.annotation()
    }

    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn go_to(&mut self, ply: usize) { self.cursor = ply.min(self.num_plies()); }
}
