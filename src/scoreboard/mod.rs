pub mod board;
pub mod ids;
pub mod models;
pub mod seed;

pub use board::Scoreboard;
pub use ids::{IdGenerator, RandomIds, SequentialIds};
pub use models::{Match, Side, TeamScore};
pub use seed::load_seed;
