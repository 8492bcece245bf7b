pub mod alpha_beta;
pub mod config;
pub mod eval;
pub mod minimax;
pub mod random;
pub mod weighted;

pub use alpha_beta::{
    alpha_beta, best_move, best_move_for_current_player, search, AlphaBetaAI, SearchResult,
    SearchStats,
};
pub use config::{AIConfig, Difficulty};
pub use eval::evaluate;
pub use minimax::minimax;
pub use random::RandomAI;
pub use weighted::WeightedRandomAI;
