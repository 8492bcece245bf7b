//! # Evaluation Module
//!
//! Static evaluation of an Othello position.
//!
//! The score is always taken from Black's side: positive means Black has more
//! discs on the board, negative means White does. The search maximizes this
//! value at the root regardless of which color the engine is playing.

use crate::core::Player;
use crate::logic::Game;

/// Black disc count minus White disc count.
pub fn evaluate(game: &Game) -> i32 {
    let (black, white) = game.score();
    black as i32 - white as i32
}

/// Disc difference seen from `player`'s side.
pub fn evaluate_for(game: &Game, player: Player) -> i32 {
    match player {
        Player::Black => evaluate(game),
        Player::White => -evaluate(game),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::setup_from_strings;

    #[test]
    fn test_standard_board_is_even() {
        let game = Game::new(0);
        assert_eq!(evaluate(&game), 0);
    }

    #[test]
    fn test_disc_difference() {
        let board = setup_from_strings(&["BBB.....", "W......."]);
        let game = Game::from_board(board, Player::Black, 0);
        assert_eq!(evaluate(&game), 2);
        assert_eq!(evaluate_for(&game, Player::White), -2);
    }
}
