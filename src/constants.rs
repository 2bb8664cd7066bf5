//! Application-wide constants
//!
//! This module centralizes defaults, user-visible messages and labels so the
//! renderers and tests agree on the exact text.

/// Default base URL of the team management API
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "squad_board.log";

/// Environment variable names that override config file values
pub mod env_vars {
    pub const API_URL: &str = "SQUAD_BOARD_API_URL";
    pub const LOG_FILE: &str = "SQUAD_BOARD_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "SQUAD_BOARD_HTTP_TIMEOUT";
}

/// Placeholder texts shown in place of data
pub mod placeholders {
    pub const NO_PLAYERS: &str = "No players found.";
    pub const PLAYERS_FAILED: &str = "Failed to load players.";
    pub const NO_MATCHES: &str = "No matches available.";
    pub const SELECT_MATCH: &str = "Select a completed match to view its statistics.";
    pub const NO_STATISTICS: &str = "No statistics available for this match.";
    pub const MATCH_SELECT_PROMPT: &str = "-- Select a completed match --";
}

/// Values the creation form always sends
pub mod player_defaults {
    pub const TRANSFER_PRICE_VND: f64 = 0.0;
}

/// Labels of the statistic cards, in display order
pub const STAT_LABELS: [&str; 12] = [
    "Expected Goals (xG)",
    "Shots on Target",
    "Possession",
    "Total Passes",
    "Successful Passes",
    "Pass Accuracy",
    "Interceptions",
    "Successful Tackles",
    "Aerial Duels Won",
    "Fouls",
    "Yellow Cards",
    "Red Cards",
];
