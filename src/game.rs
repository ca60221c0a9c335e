// Game state: a position plus whose turn it is, the ply counter, the result and the turn log.

use enum_map::EnumMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::algebraic::{AlgebraicMove, AlgebraicTurn, CastleDirection, CheckMark, Disambiguation};
use crate::board::Board;
use crate::coord::Coord;
use crate::error::TurnError;
use crate::force::Force;
use crate::layout::LayoutChecker;
use crate::movegen::{
    Move, MoveKind, castling_rook_squares, count_legal_moves, en_passant_victim, filtered_moves,
    insufficient_material, is_under_attack, should_promote,
};
use crate::piece::{Piece, PieceKind};
use crate::player::Player;


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
    Unknown,
}

impl GameResult {
    pub fn victory(winner: Force) -> Self {
        match winner {
            Force::White => GameResult::WhiteWins,
            Force::Black => GameResult::BlackWins,
        }
    }

    pub fn is_settled(self) -> bool { self != GameResult::Unknown }

    pub fn to_pgn(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Unknown => "*",
        }
    }

    pub fn from_pgn(s: &str) -> Option<Self> {
        match s {
            "1-0" => Some(GameResult::WhiteWins),
            "0-1" => Some(GameResult::BlackWins),
            "1/2-1/2" => Some(GameResult::Draw),
            "*" => Some(GameResult::Unknown),
            _ => None,
        }
    }
}

// Why a game ended.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum GameOutcome {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    Flag,
    Resignation,
    DrawAgreement,
}

impl GameOutcome {
    pub fn reason_text(self) -> &'static str {
        match self {
            GameOutcome::Checkmate => "(Checkmate)",
            GameOutcome::Stalemate => "(Stalemate)",
            GameOutcome::InsufficientMaterial => "(insufficient material)",
            GameOutcome::Flag => "(time for move ran out)",
            GameOutcome::Resignation => "player resigned",
            GameOutcome::DrawAgreement => "(draw accepted)",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Continuation {
    pub should_continue: bool,
    pub result: GameResult,
    pub reason: Option<GameOutcome>,
}

impl Continuation {
    pub fn reason_text(&self) -> &'static str {
        self.reason.map_or("", GameOutcome::reason_text)
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TurnRecord {
    // Ply number, starting from 1.
    pub round: u32,
    pub force: Force,
    pub piece_kind: PieceKind,
    pub from: Coord,
    pub mv: Move,
    pub captured: Option<PieceKind>,
    pub promote_to: Option<PieceKind>,
    pub check_mark: CheckMark,
    // Move text including the check/checkmate suffix.
    pub algebraic: String,
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct GameInfo {
    pub event: String,
    pub site: String,
    pub date: Option<time::Date>,
}

#[derive(Clone, Debug)]
pub struct ChessGame {
    info: GameInfo,
    players: EnumMap<Force, Player>,
    starting_board: Board,
    first_force: Force,
    board: Board,
    active_force: Force,
    round: u32,
    result: GameResult,
    outcome: Option<GameOutcome>,
    // Whether `active_force` is in check / checkmated.
    check: bool,
    checkmate: bool,
    turn_log: Vec<TurnRecord>,
}

impl ChessGame {
    pub fn new(info: GameInfo, players: EnumMap<Force, Player>) -> Self {
        let board = Board::standard();
        ChessGame {
            info,
            players,
            starting_board: board.clone(),
            first_force: Force::White,
            board,
            active_force: Force::White,
            round: 1,
            result: GameResult::Unknown,
            outcome: None,
            check: false,
            checkmate: false,
            turn_log: Vec::new(),
        }
    }

    // Starts from an arbitrary position with `active_force` to move. The position may already be
    // decided (e.g. stalemate), in which case the game starts finished.
    pub fn new_with_board(
        info: GameInfo, players: EnumMap<Force, Player>, board: Board, active_force: Force,
    ) -> Result<Self, String> {
        let status = LayoutChecker::from_board(&board).check_board();
        if !status.valid {
            return Err(status.message);
        }
        let waiting_force = active_force.opponent();
        if let Some(king) = board.king(waiting_force) {
            if is_under_attack(board.grid(), active_force, king, 1) {
                return Err(format!("{waiting_force} is in check, but it is not their turn"));
            }
        }
        let mut game = ChessGame {
            info,
            players,
            starting_board: board.clone(),
            first_force: active_force,
            board,
            active_force,
            round: 1,
            result: GameResult::Unknown,
            outcome: None,
            check: false,
            checkmate: false,
            turn_log: Vec::new(),
        };
        game.evaluate_continuation(active_force);
        Ok(game)
    }

    pub fn info(&self) -> &GameInfo { &self.info }
    pub fn info_mut(&mut self) -> &mut GameInfo { &mut self.info }
    pub fn players(&self) -> &EnumMap<Force, Player> { &self.players }
    pub fn player(&self, force: Force) -> &Player { &self.players[force] }
    pub fn starting_board(&self) -> &Board { &self.starting_board }
    pub fn first_force(&self) -> Force { self.first_force }
    pub fn board(&self) -> &Board { &self.board }
    pub fn active_force(&self) -> Force { self.active_force }
    pub fn round(&self) -> u32 { self.round }
    pub fn result(&self) -> GameResult { self.result }
    pub fn outcome(&self) -> Option<GameOutcome> { self.outcome }
    pub fn is_check(&self) -> bool { self.check }
    pub fn is_checkmate(&self) -> bool { self.checkmate }
    pub fn is_active(&self) -> bool { !self.result.is_settled() }
    pub fn turn_log(&self) -> &Vec<TurnRecord> { &self.turn_log }
    pub fn last_turn_record(&self) -> Option<&TurnRecord> { self.turn_log.last() }

    // Full-move number of the given ply, as written in PGN.
    pub fn full_move_number(&self, round: u32) -> u32 {
        let offset = if self.first_force == Force::Black { 1 } else { 0 };
        (round + offset + 1) / 2
    }

    pub fn legal_moves(&self, from: Coord) -> Vec<Move> {
        if !self.is_active() {
            return Vec::new();
        }
        filtered_moves(&self.board, from, self.round)
    }

    // Legal moves of every piece of the side to move.
    pub fn all_legal_moves(&self) -> Vec<(Coord, Move)> {
        self.board
            .pieces_of_force(self.active_force)
            .into_iter()
            .flat_map(|(from, _)| self.legal_moves(from).into_iter().map(move |mv| (from, mv)))
            .collect_vec()
    }

    pub fn find_move(&self, from: Coord, to: Coord) -> Option<Move> {
        self.legal_moves(from).into_iter().find(|mv| mv.to == to)
    }

    // Whether moving from `from` to `to` needs a promotion choice before it can be applied.
    pub fn requires_promotion(&self, from: Coord, to: Coord) -> bool {
        self.board.piece_at(from).is_some_and(|piece| should_promote(piece, to))
    }

    // How much of `source` must be written for a move to `target` to be unambiguous: other
    // pieces of the same kind and force that could also legally go to `target` are rivals.
    pub fn disambiguation_for(&self, target: Coord, source: Coord) -> Disambiguation {
        let Some(piece) = self.board.piece_at(source) else {
            return Disambiguation::None;
        };
        let mut board = self.board.clone();
        board.remove(target);
        let own_pieces = board.pieces_of_force(piece.force);
        let rivals = Board::pieces_of_same_kind(piece, &own_pieces)
            .into_iter()
            .map(|(pos, _)| pos)
            .filter(|&pos| pos != source)
            .filter(|&pos| {
                filtered_moves(&board, pos, self.round).iter().any(|mv| mv.to == target)
            })
            .collect_vec();
        if rivals.is_empty() {
            Disambiguation::None
        } else if rivals.iter().all(|pos| pos.col != source.col) {
            Disambiguation::ByOriginFile
        } else if rivals.iter().all(|pos| pos.row != source.row) {
            Disambiguation::ByOriginRank
        } else {
            Disambiguation::ByFullOriginSquare
        }
    }

    pub fn apply_move(
        &mut self, from: Coord, mv: Move, promote_to: Option<PieceKind>,
    ) -> Result<TurnRecord, TurnError> {
        if !self.is_active() {
            return Err(TurnError::GameOver);
        }
        let piece = self.board.piece_at(from).ok_or(TurnError::PieceMissing)?;
        if piece.force != self.active_force {
            return Err(TurnError::WrongTurnOrder);
        }
        if !filtered_moves(&self.board, from, self.round).contains(&mv) {
            return Err(TurnError::IllegalMove);
        }
        match (should_promote(piece, mv.to), promote_to) {
            (true, Some(kind)) if kind.can_promote_to() => {}
            (false, None) => {}
            _ => return Err(TurnError::BadPromotion),
        }

        let notation = self.notation_for(from, mv, piece, promote_to);
        let captured = match mv.kind {
            MoveKind::EnPassant => Some(PieceKind::Pawn),
            _ => self.board.piece_at(mv.to).map(|victim| victim.kind),
        };
        let round = self.round;
        match mv.kind {
            MoveKind::EnPassant => {
                self.board.remove(en_passant_victim(from, mv.to));
            }
            MoveKind::KingsideCastle | MoveKind::QueensideCastle => {
                if let Some((rook_from, rook_to)) = castling_rook_squares(piece.force, mv.kind) {
                    self.board.move_piece(rook_from, rook_to, round);
                }
            }
            MoveKind::Normal | MoveKind::Capture => {}
        }
        self.board.move_piece(from, mv.to, round);
        if let Some(kind) = promote_to {
            let mut promoted = Piece::new(kind, piece.force);
            promoted.has_moved = true;
            self.board.place(mv.to, promoted);
        }

        self.next_round();
        self.evaluate_continuation(self.active_force);
        let check_mark = CheckMark::new(self.check, self.checkmate);
        let record = TurnRecord {
            round,
            force: piece.force,
            piece_kind: piece.kind,
            from,
            mv,
            captured,
            promote_to,
            check_mark,
            algebraic: notation.format(check_mark),
        };
        self.turn_log.push(record.clone());
        Ok(record)
    }

    // Parses and applies a move written in algebraic notation for the side to move.
    pub fn apply_algebraic(&mut self, notation: &str) -> Result<TurnRecord, TurnError> {
        let turn = AlgebraicTurn::parse(notation).ok_or(TurnError::InvalidNotation)?;
        match self.resolve(&turn) {
            Ok((from, mv, promote_to)) => self.apply_move(from, mv, promote_to),
            Err(err @ (TurnError::IllegalMove | TurnError::PieceMissing)) => {
                // "bc4" may have been a bishop.
                let bishop_turn =
                    AlgebraicTurn::parse_as_lowercase_bishop(notation).ok_or(err)?;
                let (from, mv, promote_to) = self.resolve(&bishop_turn).map_err(|_| err)?;
                self.apply_move(from, mv, promote_to)
            }
            Err(err) => Err(err),
        }
    }

    // Finds the origin square and the move described by `turn`, without applying it.
    pub fn resolve(
        &self, turn: &AlgebraicTurn,
    ) -> Result<(Coord, Move, Option<PieceKind>), TurnError> {
        if !self.is_active() {
            return Err(TurnError::GameOver);
        }
        match turn {
            AlgebraicTurn::Castle(dir) => {
                let king = self.board.king(self.active_force).ok_or(TurnError::PieceMissing)?;
                let kind = dir.move_kind();
                let mv = self
                    .legal_moves(king)
                    .into_iter()
                    .find(|mv| mv.kind == kind)
                    .ok_or(TurnError::IllegalMove)?;
                Ok((king, mv, None))
            }
            AlgebraicTurn::Move(notation) => {
                let candidates = self
                    .board
                    .pieces_of_force(self.active_force)
                    .into_iter()
                    .filter(|(_, piece)| piece.kind == notation.piece_kind)
                    .collect_vec();
                if candidates.is_empty() {
                    return Err(TurnError::PieceMissing);
                }
                let matching = candidates
                    .into_iter()
                    .filter(|(pos, _)| notation.from_col.is_none_or(|col| col == pos.col))
                    .filter(|(pos, _)| notation.from_row.is_none_or(|row| row == pos.row))
                    .filter_map(|(pos, _)| self.find_move(pos, notation.to).map(|mv| (pos, mv)))
                    .collect_vec();
                let (from, mv) = match matching.as_slice() {
                    [] => return Err(TurnError::IllegalMove),
                    [single] => *single,
                    _ => return Err(TurnError::AmbiguousNotation),
                };
                if notation.capturing
                    && !matches!(mv.kind, MoveKind::Capture | MoveKind::EnPassant)
                {
                    return Err(TurnError::CaptureNotationRequiresCapture);
                }
                Ok((from, mv, notation.promote_to))
            }
        }
    }

    fn notation_for(
        &self, from: Coord, mv: Move, piece: Piece, promote_to: Option<PieceKind>,
    ) -> AlgebraicTurn {
        match mv.kind {
            MoveKind::KingsideCastle => return AlgebraicTurn::Castle(CastleDirection::Kingside),
            MoveKind::QueensideCastle => return AlgebraicTurn::Castle(CastleDirection::Queenside),
            MoveKind::Normal | MoveKind::Capture | MoveKind::EnPassant => {}
        }
        let capturing = matches!(mv.kind, MoveKind::Capture | MoveKind::EnPassant);
        let disambiguation = match piece.kind {
            PieceKind::Pawn if capturing => Disambiguation::ByOriginFile,
            PieceKind::Pawn => Disambiguation::None,
            _ => self.disambiguation_for(mv.to, from),
        };
        let (from_col, from_row) = disambiguation.origin_parts(from);
        AlgebraicTurn::Move(AlgebraicMove {
            piece_kind: piece.kind,
            from_col,
            from_row,
            capturing,
            to: mv.to,
            promote_to,
        })
    }

    fn next_round(&mut self) {
        self.round += 1;
        self.active_force = self.active_force.opponent();
    }

    // Decides whether `force`, which is about to move, can go on. Finishes the game otherwise.
    pub fn evaluate_continuation(&mut self, force: Force) -> Continuation {
        if self.result.is_settled() {
            return self.continuation();
        }
        if insufficient_material(&self.board) {
            self.finish(GameResult::Draw, GameOutcome::InsufficientMaterial);
            return self.continuation();
        }
        let round = self.round;
        let grid = self.board.grid();
        self.check = self
            .board
            .king(force)
            .is_some_and(|king| is_under_attack(grid, force.opponent(), king, round));
        if self.check {
            log::debug!("{force} is in check");
        }
        if count_legal_moves(&self.board, force, self.round) == 0 {
            if self.check {
                self.checkmate = true;
                self.finish(GameResult::victory(force.opponent()), GameOutcome::Checkmate);
            } else {
                self.finish(GameResult::Draw, GameOutcome::Stalemate);
            }
        }
        self.continuation()
    }

    pub fn continuation(&self) -> Continuation {
        Continuation {
            should_continue: !self.result.is_settled(),
            result: self.result,
            reason: self.outcome,
        }
    }

    pub fn clock_expired(&mut self, force: Force) -> Result<(), TurnError> {
        self.ensure_active()?;
        self.finish(GameResult::victory(force.opponent()), GameOutcome::Flag);
        Ok(())
    }

    pub fn resign(&mut self, force: Force) -> Result<(), TurnError> {
        self.ensure_active()?;
        self.finish(GameResult::victory(force.opponent()), GameOutcome::Resignation);
        Ok(())
    }

    pub fn agree_draw(&mut self) -> Result<(), TurnError> {
        self.ensure_active()?;
        self.finish(GameResult::Draw, GameOutcome::DrawAgreement);
        Ok(())
    }

    // Applies the result written in a game record. The record does not say why the game ended.
    pub fn settle_from_record(&mut self, result: GameResult) {
        if result.is_settled() && !self.result.is_settled() {
            log::info!("Game over: {} (from record)", result.to_pgn());
            self.result = result;
        }
    }

    fn ensure_active(&self) -> Result<(), TurnError> {
        if self.is_active() { Ok(()) } else { Err(TurnError::GameOver) }
    }

    fn finish(&mut self, result: GameResult, outcome: GameOutcome) {
        log::info!("Game over: {} {}", result.to_pgn(), outcome.reason_text());
        self.result = result;
        self.outcome = Some(outcome);
    }
}


#[cfg(test)]
mod tests {
    use enum_map::enum_map;

    use super::*;

    fn players() -> EnumMap<Force, Player> {
        enum_map! {
            Force::White => Player::human("Alice", "Smith"),
            Force::Black => Player::computer("Bot"),
        }
    }

    fn new_game() -> ChessGame { ChessGame::new(GameInfo::default(), players()) }

    fn play(game: &mut ChessGame, moves: &str) {
        for notation in moves.split_whitespace() {
            game.apply_algebraic(notation).unwrap();
        }
    }

    #[test]
    fn result_pgn_tokens() {
        for result in [GameResult::WhiteWins, GameResult::BlackWins, GameResult::Draw] {
            assert!(result.is_settled());
            assert_eq!(GameResult::from_pgn(result.to_pgn()), Some(result));
        }
        assert_eq!(GameResult::from_pgn("*"), Some(GameResult::Unknown));
        assert_eq!(GameResult::from_pgn("2-0"), None);
    }

    #[test]
    fn turn_order() {
        let mut game = new_game();
        assert_eq!(game.apply_algebraic("e5"), Err(TurnError::IllegalMove));
        let e5 = Move::new(Coord::E5, MoveKind::Normal);
        assert_eq!(game.apply_move(Coord::E7, e5, None), Err(TurnError::WrongTurnOrder));
        assert_eq!(game.apply_move(Coord::E4, e5, None), Err(TurnError::PieceMissing));
        play(&mut game, "e4");
        assert_eq!(game.active_force(), Force::Black);
        assert_eq!(game.round(), 2);
        game.apply_move(Coord::E7, e5, None).unwrap();
        assert_eq!(game.round(), 3);
    }

    #[test]
    fn notation_errors() {
        let mut game = new_game();
        assert_eq!(game.apply_algebraic("Zz9"), Err(TurnError::InvalidNotation));
        assert_eq!(game.apply_algebraic("xe4"), Err(TurnError::CaptureNotationRequiresCapture));
        assert_eq!(game.apply_algebraic("Qd3"), Err(TurnError::IllegalMove));
        play(&mut game, "Nf3 d5 Nc3 d4");
        play(&mut game, "Ne4 e6");
        assert_eq!(game.apply_algebraic("Ng5"), Err(TurnError::AmbiguousNotation));
        play(&mut game, "Nfg5");
        assert_eq!(game.last_turn_record().unwrap().algebraic, "Nfg5");
    }

    #[test]
    fn disambiguation_by_rank() {
        let mut board = Board::empty();
        board.place_initial(Coord::A1, Piece::new(PieceKind::Rook, Force::White));
        board.place_initial(Coord::A5, Piece::new(PieceKind::Rook, Force::White));
        board.place_initial(Coord::H1, Piece::new(PieceKind::King, Force::White));
        board.place_initial(Coord::H8, Piece::new(PieceKind::King, Force::Black));
        let mut game =
            ChessGame::new_with_board(GameInfo::default(), players(), board, Force::White).unwrap();
        assert_eq!(game.disambiguation_for(Coord::A3, Coord::A1), Disambiguation::ByOriginRank);
        assert_eq!(game.disambiguation_for(Coord::B5, Coord::A5), Disambiguation::None);
        play(&mut game, "R1a3");
        assert_eq!(game.last_turn_record().unwrap().from, Coord::A1);
        assert_eq!(game.last_turn_record().unwrap().algebraic, "R1a3");
    }

    #[test]
    fn promotion_requires_choice() {
        let mut board = Board::empty();
        board.place_initial(Coord::B7, Piece::new(PieceKind::Pawn, Force::White));
        board.place_initial(Coord::E1, Piece::new(PieceKind::King, Force::White));
        board.place_initial(Coord::H5, Piece::new(PieceKind::King, Force::Black));
        let mut game =
            ChessGame::new_with_board(GameInfo::default(), players(), board, Force::White).unwrap();
        assert!(game.requires_promotion(Coord::B7, Coord::B8));
        let mv = game.find_move(Coord::B7, Coord::B8).unwrap();
        assert_eq!(game.apply_move(Coord::B7, mv, None), Err(TurnError::BadPromotion));
        assert_eq!(
            game.apply_move(Coord::B7, mv, Some(PieceKind::King)),
            Err(TurnError::BadPromotion)
        );
        let record = game.apply_move(Coord::B7, mv, Some(PieceKind::Queen)).unwrap();
        assert_eq!(record.algebraic, "b8=Q");
        let queen = game.board().piece_at(Coord::B8).unwrap();
        assert!(queen.is(Force::White, PieceKind::Queen));
        assert!(queen.has_moved);
    }

    #[test]
    fn start_refused_when_waiting_side_is_in_check() {
        let mut board = Board::empty();
        board.place_initial(Coord::E1, Piece::new(PieceKind::King, Force::White));
        board.place_initial(Coord::E8, Piece::new(PieceKind::King, Force::Black));
        board.place_initial(Coord::E4, Piece::new(PieceKind::Rook, Force::White));
        assert!(
            ChessGame::new_with_board(GameInfo::default(), players(), board.clone(), Force::White)
                .is_err()
        );
        let game =
            ChessGame::new_with_board(GameInfo::default(), players(), board, Force::Black).unwrap();
        assert!(game.is_check());
        assert!(game.is_active());
    }

    #[test]
    fn start_in_stalemate_is_finished() {
        let mut board = Board::empty();
        board.place_initial(Coord::A8, Piece::new(PieceKind::King, Force::Black));
        board.place_initial(Coord::B6, Piece::new(PieceKind::Queen, Force::White));
        board.place_initial(Coord::H1, Piece::new(PieceKind::King, Force::White));
        let game =
            ChessGame::new_with_board(GameInfo::default(), players(), board, Force::Black).unwrap();
        assert_eq!(game.result(), GameResult::Draw);
        assert_eq!(game.outcome(), Some(GameOutcome::Stalemate));
    }

    #[test]
    fn resignation_and_draw_freeze_the_game() {
        let mut game = new_game();
        play(&mut game, "e4");
        game.resign(Force::Black).unwrap();
        assert_eq!(game.result(), GameResult::WhiteWins);
        assert_eq!(game.continuation().reason_text(), "player resigned");
        assert_eq!(game.apply_algebraic("e5"), Err(TurnError::GameOver));
        assert!(game.legal_moves(Coord::E7).is_empty());
        assert_eq!(game.agree_draw(), Err(TurnError::GameOver));

        let mut game = new_game();
        game.agree_draw().unwrap();
        assert_eq!(game.result(), GameResult::Draw);
        assert_eq!(game.continuation().reason_text(), "(draw accepted)");
    }

    #[test]
    fn flag_fall() {
        let mut game = new_game();
        game.clock_expired(Force::White).unwrap();
        let continuation = game.continuation();
        assert!(!continuation.should_continue);
        assert_eq!(continuation.result, GameResult::BlackWins);
        assert_eq!(continuation.reason_text(), "(time for move ran out)");
    }

    #[test]
    fn full_move_numbers() {
        let game = new_game();
        assert_eq!(game.full_move_number(1), 1);
        assert_eq!(game.full_move_number(2), 1);
        assert_eq!(game.full_move_number(3), 2);

        let mut board = Board::empty();
        board.place_initial(Coord::E1, Piece::new(PieceKind::King, Force::White));
        board.place_initial(Coord::E8, Piece::new(PieceKind::King, Force::Black));
        board.place_initial(Coord::A2, Piece::new(PieceKind::Pawn, Force::White));
        let game =
            ChessGame::new_with_board(GameInfo::default(), players(), board, Force::Black).unwrap();
        assert_eq!(game.full_move_number(1), 1);
        assert_eq!(game.full_move_number(2), 2);
        assert_eq!(game.full_move_number(3), 2);
    }

    #[test]
    fn lowercase_bishop_fallback() {
        let mut game = new_game();
        play(&mut game, "e4 e5");
        let record = game.apply_algebraic("bc4").unwrap();
        assert_eq!(record.piece_kind, PieceKind::Bishop);
        assert_eq!(record.from, Coord::F1);
        assert_eq!(record.algebraic, "Bc4");
    }
}
