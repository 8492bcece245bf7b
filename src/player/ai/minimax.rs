//! Plain minimax without pruning. Slow, but it visits every node, which makes
//! it the yardstick for the alpha-beta search.

use super::alpha_beta::{SearchResult, SearchStats};
use super::eval::evaluate;
use crate::logic::Game;

pub fn minimax(game: &Game, depth: usize, maximizing: bool, stats: &mut SearchStats) -> SearchResult {
    stats.nodes += 1;

    if depth == 0 || game.is_game_over() {
        return SearchResult {
            value: evaluate(game),
            best_move: None,
        };
    }

    let moves = game.legal_moves(game.current_player);
    if moves.is_empty() {
        return SearchResult {
            value: evaluate(game),
            best_move: None,
        };
    }

    let mut value = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_move = None;

    for mv in moves {
        let mut child = game.clone();
        if child.apply(mv.row, mv.col).is_err() {
            continue;
        }
        let eval = minimax(&child, depth - 1, !maximizing, stats).value;
        let better = if maximizing { eval > value } else { eval < value };
        if better {
            value = eval;
            best_move = Some(mv);
        }
    }

    SearchResult { value, best_move }
}
