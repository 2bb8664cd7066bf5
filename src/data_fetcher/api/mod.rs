//! Team management API client

mod fetch_utils;
pub mod http_client;
pub mod team_api;
pub mod urls;

pub use http_client::create_http_client_with_timeout;
pub use team_api::{HttpTeamApi, TeamApi};
pub use urls::{build_match_stats_url, build_matches_url, build_player_url, build_players_url};
