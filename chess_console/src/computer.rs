use classic_chess::coord::Coord;
use classic_chess::game::ChessGame;
use classic_chess::movegen::Move;
use classic_chess::piece::PieceKind;
use rand::Rng;


// Picks uniformly among all legal moves of the side to move. Always promotes to a queen.
pub fn choose_move(
    game: &ChessGame, rng: &mut impl Rng,
) -> Option<(Coord, Move, Option<PieceKind>)> {
    let moves = game.all_legal_moves();
    if moves.is_empty() {
        return None;
    }
    let (from, mv) = moves[rng.random_range(0..moves.len())];
    let promote_to = game.requires_promotion(from, mv.to).then_some(PieceKind::Queen);
    Some((from, mv, promote_to))
}
