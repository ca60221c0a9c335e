use serde::{Deserialize, Serialize};

use crate::cached_regex;
use crate::coord::{Col, Coord, Row};
use crate::movegen::MoveKind;
use crate::piece::PieceKind;
use crate::util::as_single_char;


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CastleDirection {
    Kingside,
    Queenside,
}

impl CastleDirection {
    pub fn move_kind(self) -> MoveKind {
        match self {
            CastleDirection::Kingside => MoveKind::KingsideCastle,
            CastleDirection::Queenside => MoveKind::QueensideCastle,
        }
    }
}

// How much of the origin square a move needs to name to be unambiguous.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Disambiguation {
    None,
    ByOriginFile,
    ByOriginRank,
    ByFullOriginSquare,
}

impl Disambiguation {
    pub fn origin_parts(self, from: Coord) -> (Option<Col>, Option<Row>) {
        match self {
            Disambiguation::None => (None, None),
            Disambiguation::ByOriginFile => (Some(from.col), None),
            Disambiguation::ByOriginRank => (None, Some(from.row)),
            Disambiguation::ByFullOriginSquare => (Some(from.col), Some(from.row)),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CheckMark {
    None,
    Check,
    Checkmate,
}

impl CheckMark {
    pub fn new(check: bool, checkmate: bool) -> Self {
        if checkmate {
            CheckMark::Checkmate
        } else if check {
            CheckMark::Check
        } else {
            CheckMark::None
        }
    }
    fn suffix(self) -> &'static str {
        match self {
            CheckMark::None => "",
            CheckMark::Check => "+",
            CheckMark::Checkmate => "#",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AlgebraicMove {
    // Pawn for promotions: the letter of the promoted piece goes after "=".
    pub piece_kind: PieceKind,
    pub from_col: Option<Col>,
    pub from_row: Option<Row>,
    pub capturing: bool,
    pub to: Coord,
    pub promote_to: Option<PieceKind>,
}

// Parsed algebraic notation. Conversion between `AlgebraicTurn` and string can be done without
// a board. Resolving the origin square requires a game (see `ChessGame::apply_algebraic`).
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AlgebraicTurn {
    Move(AlgebraicMove),
    Castle(CastleDirection),
}

fn piece_from_any_case(s: &str) -> Option<PieceKind> {
    as_single_char(s).and_then(|ch| PieceKind::from_algebraic_char(ch.to_ascii_uppercase()))
}

impl AlgebraicTurn {
    // Piece letters may be lowercase ("nf6"), except for the bishop: a leading "b" is read as the
    // b-file. See `parse_as_lowercase_bishop` for the other reading.
    pub fn parse(notation: &str) -> Option<Self> {
        let notation = notation.trim();
        let move_re = cached_regex!(
            r"^([NBRQKnrqk])?([a-h])?([1-8])?([x×:])?([a-h][1-8])(?:=([NBRQnbrq])|([NBRQ]))?([+†#‡]?)$"
        );
        let kingside_re = cached_regex!(r"^(?:0-0|O-O)[+†#‡]?$");
        let queenside_re = cached_regex!(r"^(?:0-0-0|O-O-O)[+†#‡]?$");
        if let Some(cap) = move_re.captures(notation) {
            let piece_kind = match cap.get(1) {
                None => PieceKind::Pawn,
                Some(m) => piece_from_any_case(m.as_str())?,
            };
            let from_col = match cap.get(2) {
                None => None,
                Some(m) => Some(Col::from_algebraic(as_single_char(m.as_str())?)?),
            };
            let from_row = match cap.get(3) {
                None => None,
                Some(m) => Some(Row::from_algebraic(as_single_char(m.as_str())?)?),
            };
            let capturing = cap.get(4).is_some();
            let to = Coord::from_algebraic(cap.get(5)?.as_str())?;
            let promote_to = match cap.get(6).or_else(|| cap.get(7)) {
                None => None,
                Some(m) => Some(piece_from_any_case(m.as_str())?),
            };
            Some(AlgebraicTurn::Move(AlgebraicMove {
                piece_kind,
                from_col,
                from_row,
                capturing,
                to,
                promote_to,
            }))
        } else if queenside_re.is_match(notation) {
            Some(AlgebraicTurn::Castle(CastleDirection::Queenside))
        } else if kingside_re.is_match(notation) {
            Some(AlgebraicTurn::Castle(CastleDirection::Kingside))
        } else {
            None
        }
    }

    // "bc4" is either a pawn from the b-file or a bishop in lowercase notation.
    pub fn parse_as_lowercase_bishop(notation: &str) -> Option<Self> {
        let rest = notation.trim().strip_prefix('b')?;
        match AlgebraicTurn::parse(&format!("B{rest}"))? {
            AlgebraicTurn::Move(mv) if mv.piece_kind == PieceKind::Bishop => {
                Some(AlgebraicTurn::Move(mv))
            }
            _ => None,
        }
    }

    pub fn format(&self, mark: CheckMark) -> String {
        let body = match self {
            AlgebraicTurn::Move(mv) => {
                let mut from = String::new();
                if let Some(col) = mv.from_col {
                    from.push(col.to_algebraic());
                }
                if let Some(row) = mv.from_row {
                    from.push(row.to_algebraic());
                }
                let promotion = match mv.promote_to {
                    Some(piece_kind) => format!("={}", piece_kind.to_full_algebraic()),
                    None => String::new(),
                };
                format!(
                    "{}{}{}{}{}",
                    mv.piece_kind.to_algebraic_for_move(),
                    from,
                    if mv.capturing { "x" } else { "" },
                    mv.to.to_algebraic(),
                    promotion,
                )
            }
            AlgebraicTurn::Castle(CastleDirection::Kingside) => "O-O".to_owned(),
            AlgebraicTurn::Castle(CastleDirection::Queenside) => "O-O-O".to_owned(),
        };
        format!("{}{}", body, mark.suffix())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn parse_move(notation: &str) -> AlgebraicMove {
        match AlgebraicTurn::parse(notation) {
            Some(AlgebraicTurn::Move(mv)) => mv,
            other => panic!("{notation}: {other:?}"),
        }
    }

    #[test]
    fn parse_piece_moves() {
        let mv = parse_move("Nf3");
        assert_eq!(mv.piece_kind, PieceKind::Knight);
        assert_eq!((mv.from_col, mv.from_row, mv.capturing), (None, None, false));
        assert_eq!(mv.to, Coord::F3);

        let mv = parse_move("R1xa4+");
        assert_eq!(mv.piece_kind, PieceKind::Rook);
        assert_eq!((mv.from_col, mv.from_row, mv.capturing), (None, Some(Row::_1), true));

        let mv = parse_move("qd8");
        assert_eq!(mv.piece_kind, PieceKind::Queen);
    }

    #[test]
    fn parse_pawn_moves() {
        let mv = parse_move("exd5");
        assert_eq!(mv.piece_kind, PieceKind::Pawn);
        assert_eq!(mv.from_col, Some(Col::E));
        assert!(mv.capturing);

        let mv = parse_move("e8=Q#");
        assert_eq!(mv.promote_to, Some(PieceKind::Queen));
        let mv = parse_move("a1=n");
        assert_eq!(mv.promote_to, Some(PieceKind::Knight));
        let mv = parse_move("bxc1R");
        assert_eq!((mv.from_col, mv.promote_to), (Some(Col::B), Some(PieceKind::Rook)));
    }

    #[test]
    fn parse_castling() {
        use CastleDirection::*;
        assert_eq!(AlgebraicTurn::parse("O-O"), Some(AlgebraicTurn::Castle(Kingside)));
        assert_eq!(AlgebraicTurn::parse("0-0-0+"), Some(AlgebraicTurn::Castle(Queenside)));
    }

    #[test]
    fn parse_garbage() {
        for notation in ["", "e9", "Xe4", "Ne", "O-O-O-O", "1-0"] {
            assert_eq!(AlgebraicTurn::parse(notation), None, "{notation}");
        }
    }

    #[test]
    fn lowercase_bishop() {
        assert_eq!(parse_move("bc4").piece_kind, PieceKind::Pawn);
        match AlgebraicTurn::parse_as_lowercase_bishop("bc4") {
            Some(AlgebraicTurn::Move(mv)) => {
                assert_eq!((mv.piece_kind, mv.to), (PieceKind::Bishop, Coord::C4));
            }
            other => panic!("{other:?}"),
        }
        assert_eq!(AlgebraicTurn::parse_as_lowercase_bishop("Nc4"), None);
    }

    #[test]
    fn format_moves() {
        let mv = AlgebraicTurn::Move(AlgebraicMove {
            piece_kind: PieceKind::Knight,
            from_col: Some(Col::B),
            from_row: None,
            capturing: true,
            to: Coord::D2,
            promote_to: None,
        });
        assert_eq!(mv.format(CheckMark::Check), "Nbxd2+");
        let mv = AlgebraicTurn::Move(AlgebraicMove {
            piece_kind: PieceKind::Pawn,
            from_col: None,
            from_row: None,
            capturing: false,
            to: Coord::H8,
            promote_to: Some(PieceKind::Queen),
        });
        assert_eq!(mv.format(CheckMark::Checkmate), "h8=Q#");
        let castle = AlgebraicTurn::Castle(CastleDirection::Queenside);
        assert_eq!(castle.format(CheckMark::None), "O-O-O");
    }
}
