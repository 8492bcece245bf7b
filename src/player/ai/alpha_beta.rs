//! Depth-bounded minimax with alpha-beta pruning.
//!
//! Every child node is searched on its own clone of the [`Game`], so the live
//! game is never touched and sibling branches share no state.

use super::eval::evaluate;
use crate::core::Position;
use crate::logic::Game;
use crate::player::PlayerController;
use serde::{Deserialize, Serialize};

/// 探索結果 (評価値, 最善手)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub value: i32,
    pub best_move: Option<Position>,
}

impl SearchResult {
    fn leaf(value: i32) -> Self {
        SearchResult {
            value,
            best_move: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: usize,
}

/// Runs alpha-beta from `game` and returns the value and the move that
/// reached it.
///
/// `maximizing` selects which side of the Black-minus-White score the node
/// plays for. Ties keep the first move in row-major order.
pub fn search(game: &Game, depth: usize, alpha: i32, beta: i32, maximizing: bool) -> SearchResult {
    let mut stats = SearchStats::default();
    alpha_beta(game, depth, alpha, beta, maximizing, &mut stats)
}

pub fn alpha_beta(
    game: &Game,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    stats: &mut SearchStats,
) -> SearchResult {
    stats.nodes += 1;

    if depth == 0 || game.is_game_over() {
        return SearchResult::leaf(evaluate(game));
    }

    let moves = game.legal_moves(game.current_player);
    if moves.is_empty() {
        // 手番側だけ手がない局面 (任意局面から始めた場合のみ)
        return SearchResult::leaf(evaluate(game));
    }

    let mut best_move = None;

    if maximizing {
        let mut value = i32::MIN;
        for mv in moves {
            let mut child = game.clone();
            if child.apply(mv.row, mv.col).is_err() {
                continue;
            }
            let result = alpha_beta(&child, depth - 1, alpha, beta, false, stats);
            if result.value > value {
                value = result.value;
                best_move = Some(mv);
            }
            alpha = alpha.max(value);
            if alpha >= beta {
                break; // Beta Cutoff
            }
        }
        SearchResult { value, best_move }
    } else {
        let mut value = i32::MAX;
        for mv in moves {
            let mut child = game.clone();
            if child.apply(mv.row, mv.col).is_err() {
                continue;
            }
            let result = alpha_beta(&child, depth - 1, alpha, beta, true, stats);
            if result.value < value {
                value = result.value;
                best_move = Some(mv);
            }
            beta = beta.min(value);
            if alpha >= beta {
                break; // Alpha Cutoff
            }
        }
        SearchResult { value, best_move }
    }
}

/// Root search: full window, maximizing for Black.
pub fn best_move(game: &Game, depth: usize) -> SearchResult {
    search(game, depth, i32::MIN, i32::MAX, true)
}

/// Searches the live game and plays the chosen move. Returns the move played,
/// or `None` when the game is over or nothing could be chosen.
pub fn best_move_for_current_player(game: &mut Game, depth: usize) -> Option<Position> {
    if game.game_over {
        return None;
    }
    let mv = best_move(game, depth).best_move?;
    game.apply(mv.row, mv.col).ok()?;
    Some(mv)
}

impl Game {
    /// 設定された深さで自動着手する。深さ 0 なら何もしない
    pub fn make_computer_move(&mut self) -> Option<Position> {
        if self.depth == 0 {
            return None;
        }
        let depth = self.depth;
        best_move_for_current_player(self, depth)
    }
}

pub struct AlphaBetaAI {
    name: String,
    depth: usize,
}

impl AlphaBetaAI {
    pub fn new(name: &str, depth: usize) -> Self {
        Self {
            name: name.to_string(),
            depth,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl PlayerController for AlphaBetaAI {
    fn choose_move(&self, game: &Game, legal_moves: &[Position]) -> Option<Position> {
        if legal_moves.is_empty() {
            return None;
        }
        best_move(game, self.depth)
            .best_move
            .or_else(|| legal_moves.first().copied())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{setup_from_strings, Player};

    #[test]
    fn test_depth_one_from_opening() {
        let game = Game::new(1);
        let result = best_move(&game, 1);

        // 4手とも黒4白1になるので、最初の手 (2,3) が選ばれる
        assert_eq!(result.value, 3);
        assert_eq!(result.best_move, Some(Position::new(2, 3)));
        assert!(game
            .legal_moves(Player::Black)
            .contains(&result.best_move.unwrap()));
    }

    #[test]
    fn test_depth_zero_is_static_eval() {
        let game = Game::new(0);
        let result = best_move(&game, 0);
        assert_eq!(result.value, 0);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_terminal_position_returns_no_move() {
        let board = setup_from_strings(&["BBB....."]);
        let game = Game::from_board(board, Player::White, 3);
        assert!(game.game_over);
        let result = best_move(&game, 3);
        assert_eq!(result.value, 3);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_prefers_larger_capture() {
        // (0,2) は1枚、(7,3) は2枚裏返す
        let board = setup_from_strings(&[
            "BW......",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "BWW.....",
        ]);
        let game = Game::from_board(board, Player::Black, 1);
        let result = best_move(&game, 1);
        assert_eq!(result.best_move, Some(Position::new(7, 3)));
        assert_eq!(result.value, 4);
    }

    #[test]
    fn test_search_does_not_mutate_live_game() {
        let game = Game::new(3);
        let snapshot = game.clone();
        let _ = best_move(&game, 3);
        assert_eq!(game, snapshot);
    }

    #[test]
    fn test_make_computer_move_applies_search_choice() {
        let mut game = Game::new(1);
        let mv = game.make_computer_move();
        assert_eq!(mv, Some(Position::new(2, 3)));
        assert_eq!(game.score(), (4, 1));
        assert_eq!(game.current_player, Player::White);
        assert_eq!(game.reserve(Player::Black), 29);
    }

    #[test]
    fn test_make_computer_move_disabled_at_depth_zero() {
        let mut game = Game::new(0);
        assert_eq!(game.make_computer_move(), None);
        assert_eq!(game, Game::new(0));
    }

    #[test]
    fn test_alpha_beta_ai_picks_legal_move() {
        let game = Game::new(2);
        let ai = AlphaBetaAI::new("AB", 2);
        let moves = game.legal_moves(game.current_player);
        let mv = ai.choose_move(&game, &moves).unwrap();
        assert!(moves.contains(&mv));
        assert_eq!(ai.name(), "AB");
    }
}
