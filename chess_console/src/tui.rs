use console::Style;
use itertools::Itertools;

use classic_chess::board::Board;
use classic_chess::clock::{Clock, GameInstant, format_time_left};
use classic_chess::coord::{Col, Coord, Row};
use classic_chess::force::Force;
use classic_chess::game::ChessGame;
use classic_chess::piece::piece_to_pictogram;


fn render_clock(clock: &Clock, force: Force, now: GameInstant) -> (String, usize) {
    let time_left = clock.time_left(force, now);
    let mut clock_str = format_time_left(time_left);
    let clock_str_len = clock_str.len();
    if time_left.is_zero() {
        clock_str = Style::new().on_red().apply_to(clock_str).to_string();
    } else if clock.active_force() == Some(force) {
        clock_str = Style::new().reverse().apply_to(clock_str).to_string();
    }
    (clock_str, clock_str_len)
}

fn render_header(
    game: &ChessGame, clock: &Clock, force: Force, now: GameInstant, board_width: usize,
) -> String {
    let (clock_str, clock_str_len) = render_clock(clock, force, now);
    let player_str = game.player(force).to_pgn();
    let space_len = board_width.saturating_sub(clock_str_len + player_str.len());
    let space = String::from(' ').repeat(space_len);
    format!("{}{}{}\n", clock_str, space, player_str)
}

// Renders the board with White at the bottom, unless `flipped`.
pub fn render_grid(board: &Board, flipped: bool) -> String {
    let colors = [
        Style::new().color256(233).on_color256(222),
        Style::new().color256(233).on_color256(230),
    ];
    let rows = if flipped { Row::all().collect_vec() } else { Row::all().rev().collect_vec() };
    let cols = if flipped { Col::all().rev().collect_vec() } else { Col::all().collect_vec() };
    let col_header = format!(
        "{}{}{}\n",
        format_square(' '),
        cols.iter().map(|col| format_square(col.to_algebraic())).join(""),
        format_square(' ')
    );
    let mut ret = col_header.clone();
    for &row in &rows {
        ret.push_str(&format_square(row.to_algebraic()));
        for &col in &cols {
            let coord = Coord::new(row, col);
            let square = format_square(match board.piece_at(coord) {
                Some(piece) => piece_to_pictogram(piece.kind, piece.force),
                None => ' ',
            });
            ret.push_str(&colors[usize::from(coord.color_parity())].apply_to(square).to_string());
        }
        ret.push_str(&format_square(row.to_algebraic()));
        ret.push('\n');
    }
    ret.push_str(&col_header);
    ret
}

pub fn render_game(game: &ChessGame, clock: &Clock, now: GameInstant, flipped: bool) -> String {
    let board_width = 10 * 3;
    let (top, bottom) = if flipped {
        (Force::White, Force::Black)
    } else {
        (Force::Black, Force::White)
    };
    format!(
        "{}{}{}",
        render_header(game, clock, top, now, board_width),
        render_grid(game.board(), flipped),
        render_header(game, clock, bottom, now, board_width),
    )
}

fn format_square(ch: char) -> String { format!(" {} ", ch) }
