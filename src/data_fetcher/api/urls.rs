//! URL building utilities for API endpoints
//!
//! Every builder tolerates a trailing `/` on the base URL.

fn base(api_base_url: &str) -> &str {
    api_base_url.trim_end_matches('/')
}

/// Builds the player collection URL (list and create).
///
/// # Example
/// ```
/// use squad_board::data_fetcher::api::build_players_url;
///
/// assert_eq!(build_players_url("http://localhost:8000/"), "http://localhost:8000/players/");
/// ```
pub fn build_players_url(api_base_url: &str) -> String {
    format!("{}/players/", base(api_base_url))
}

/// Builds the URL of a single player.
///
/// # Example
/// ```
/// use squad_board::data_fetcher::api::build_player_url;
///
/// assert_eq!(build_player_url("http://localhost:8000", 12), "http://localhost:8000/players/12");
/// ```
pub fn build_player_url(api_base_url: &str, player_id: i64) -> String {
    format!("{}/players/{player_id}", base(api_base_url))
}

/// Builds the fixture list URL. The endpoint returns both played and
/// upcoming matches.
pub fn build_matches_url(api_base_url: &str) -> String {
    format!("{}/matches/upcoming", base(api_base_url))
}

/// Builds the statistics URL for one match.
///
/// # Example
/// ```
/// use squad_board::data_fetcher::api::build_match_stats_url;
///
/// assert_eq!(build_match_stats_url("https://api.example.com", "5"), "https://api.example.com/matches/5/stats");
/// ```
pub fn build_match_stats_url(api_base_url: &str, match_id: &str) -> String {
    format!("{}/matches/{}/stats", base(api_base_url), match_id.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_url() {
        assert_eq!(
            build_matches_url("http://localhost:8000"),
            "http://localhost:8000/matches/upcoming"
        );
        assert_eq!(
            build_matches_url("http://localhost:8000///"),
            "http://localhost:8000/matches/upcoming"
        );
    }

    #[test]
    fn test_match_stats_url_trims_id() {
        assert_eq!(
            build_match_stats_url("http://localhost:8000", " 42 "),
            "http://localhost:8000/matches/42/stats"
        );
    }
}
