pub mod matches;
pub mod players;
pub mod stats;

pub use matches::{Match, MatchResult};
pub use players::{InjuryStatus, NewPlayer, Player, PlayerPosition};
pub use stats::MatchStatistics;
