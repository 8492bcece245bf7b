//! # othello-ab
//!
//! Othello rules engine with a depth-bounded alpha-beta opponent.
//!
//! - `core`: colors, cells, positions and the 8x8 board
//! - `logic`: the rules engine (`Game`): legality, captures, passes, scoring
//! - `player`: controller trait, alpha-beta / minimax search, evaluation, config
//! - `game`: drives one match between two controllers
//! - `selfplay`: runs batches of matches in parallel and collects statistics

pub mod core;
pub mod game;
pub mod logic;
pub mod player;
pub mod selfplay;


pub use crate::core::{Board, Cell, Player, Position, Winner};
pub use crate::logic::{Game, MoveError};
pub use crate::player::ai::{best_move, search, AIConfig, Difficulty, SearchResult};
