pub mod ai;
pub mod controller;

pub use ai::{AlphaBetaAI, RandomAI, WeightedRandomAI};
pub use controller::PlayerController;
