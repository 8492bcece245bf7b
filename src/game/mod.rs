use crate::core::{Player, Winner};
use crate::logic::Game;
use crate::player::PlayerController;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// 1局の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 手数上限で打ち切った場合は None
    pub winner: Option<Winner>,
    pub black: usize,
    pub white: usize,
    pub plies: usize,
    pub time_ms: u128,
}

/// 2つのコントローラで1局を進める
pub struct Match<'a> {
    pub game: Game,
    black: &'a dyn PlayerController,
    white: &'a dyn PlayerController,
    max_plies: usize,
}

impl<'a> Match<'a> {
    pub fn new(
        game: Game,
        black: &'a dyn PlayerController,
        white: &'a dyn PlayerController,
    ) -> Self {
        Match {
            game,
            black,
            white,
            max_plies: 128,
        }
    }

    pub fn with_max_plies(mut self, max_plies: usize) -> Self {
        self.max_plies = max_plies;
        self
    }

    fn controller(&self, player: Player) -> &'a dyn PlayerController {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// 1手進める。打てなければ false
    pub fn step(&mut self) -> bool {
        if self.game.game_over {
            return false;
        }

        let current = self.game.current_player;
        let legal_moves = self.game.legal_moves(current);
        if legal_moves.is_empty() {
            // 任意局面から始めた場合の手番側パス
            if self.game.is_game_over() {
                self.game.game_over = true;
                return false;
            }
            self.game.current_player = current.opponent();
            return true;
        }

        let controller = self.controller(current);
        let Some(mv) = controller.choose_move(&self.game, &legal_moves) else {
            return false;
        };

        match self.game.apply(mv.row, mv.col) {
            Ok(()) => true,
            Err(e) => {
                eprintln!("[match] {} chose {}: {}", controller.name(), mv, e);
                false
            }
        }
    }

    pub fn play(&mut self) -> MatchResult {
        let start_time = Instant::now();
        let mut plies = 0;

        while plies < self.max_plies && self.step() {
            plies += 1;
        }

        let (black, white) = self.game.score();
        MatchResult {
            winner: self.game.game_over.then(|| self.game.winner()),
            black,
            white,
            plies,
            time_ms: start_time.elapsed().as_millis(),
        }
    }
}
