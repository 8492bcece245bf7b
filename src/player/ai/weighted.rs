use super::eval::evaluate_for;
use crate::core::Position;
use crate::logic::Game;
use crate::player::PlayerController;
use rand::prelude::*;
use std::cell::RefCell;
use std::f64;

/// 1手先の石差をソフトマックスで確率に変えて手を選ぶ
pub struct WeightedRandomAI {
    pub name: String,
    pub temperature: f64,
    rng: RefCell<StdRng>,
}

impl WeightedRandomAI {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            temperature: 1.0,
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    pub fn with_seed(name: &str, seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
            ..Self::new(name)
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Softmax-like probability distribution from scores
    fn get_probabilities(&self, game: &Game, moves: &[Position]) -> Vec<f64> {
        let mover = game.current_player;
        let scores: Vec<f64> = moves
            .iter()
            .map(|mv| {
                let mut next = game.clone();
                match next.apply(mv.row, mv.col) {
                    Ok(()) => evaluate_for(&next, mover) as f64,
                    Err(_) => f64::NEG_INFINITY,
                }
            })
            .collect();

        if scores.is_empty() {
            return vec![];
        }

        let temperature = self.temperature.max(f64::EPSILON);
        let max_score = scores.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        let exps: Vec<f64> = scores
            .iter()
            .map(|&s| ((s - max_score) / temperature).exp())
            .collect();
        let sum_exp: f64 = exps.iter().sum();

        exps.iter().map(|&e| e / sum_exp).collect()
    }
}

impl PlayerController for WeightedRandomAI {
    fn choose_move(&self, game: &Game, moves: &[Position]) -> Option<Position> {
        if moves.is_empty() {
            return None;
        }

        let probs = self.get_probabilities(game, moves);
        let mut r = self.rng.borrow_mut().gen::<f64>();
        for (i, &p) in probs.iter().enumerate() {
            if r < p {
                return Some(moves[i]);
            }
            r -= p;
        }

        moves.last().copied()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
