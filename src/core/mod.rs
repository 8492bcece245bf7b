pub mod board;
pub mod setup;
pub mod types;

pub use board::Board;
pub use setup::setup_from_strings;
pub use types::{Cell, Player, Position, Winner, BOARD_SIZE};
