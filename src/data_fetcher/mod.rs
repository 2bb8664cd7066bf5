pub mod api;
pub mod models;

pub use api::{HttpTeamApi, TeamApi};
pub use models::{InjuryStatus, Match, MatchResult, MatchStatistics, NewPlayer, Player, PlayerPosition};
