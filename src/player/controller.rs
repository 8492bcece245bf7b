use crate::core::Position;
use crate::logic::Game;

/// プレイヤー操作のtrait
pub trait PlayerController {
    fn choose_move(&self, game: &Game, legal_moves: &[Position]) -> Option<Position>;
    fn name(&self) -> &str;
}
