//! The API surface the view controller depends on

use reqwest::Client;
use std::future::Future;
use tracing::{info, warn};

use super::fetch_utils::{fetch, post};
use super::http_client::create_http_client_with_timeout;
use super::urls::{build_match_stats_url, build_matches_url, build_player_url, build_players_url};
use crate::config::Config;
use crate::data_fetcher::models::{Match, MatchStatistics, NewPlayer, Player};
use crate::error::AppError;

/// Remote operations of the team management API.
///
/// `ViewController` is generic over this trait so it can be driven by the
/// real HTTP client or by an in-memory double in tests.
pub trait TeamApi {
    fn fetch_players(&self) -> impl Future<Output = Result<Vec<Player>, AppError>> + Send;

    fn fetch_player(&self, player_id: i64) -> impl Future<Output = Result<Player, AppError>> + Send;

    /// Creates a player. Success is the HTTP status; the created record is
    /// returned when the response body could be read as one.
    fn create_player(
        &self,
        player: &NewPlayer,
    ) -> impl Future<Output = Result<Option<Player>, AppError>> + Send;

    fn fetch_matches(&self) -> impl Future<Output = Result<Vec<Match>, AppError>> + Send;

    fn fetch_match_statistics(
        &self,
        match_id: &str,
    ) -> impl Future<Output = Result<MatchStatistics, AppError>> + Send;
}

/// `TeamApi` over HTTP with reqwest.
#[derive(Debug, Clone)]
pub struct HttpTeamApi {
    client: Client,
    api_base_url: String,
}

impl HttpTeamApi {
    pub fn new(client: Client, api_base_url: impl Into<String>) -> Self {
        Self {
            client,
            api_base_url: api_base_url.into(),
        }
    }

    /// Builds a client using the configured base URL and timeout.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::new(client, config.api_base_url.clone()))
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

impl TeamApi for HttpTeamApi {
    async fn fetch_players(&self) -> Result<Vec<Player>, AppError> {
        fetch(&self.client, &build_players_url(&self.api_base_url)).await
    }

    async fn fetch_player(&self, player_id: i64) -> Result<Player, AppError> {
        fetch(&self.client, &build_player_url(&self.api_base_url, player_id)).await
    }

    async fn create_player(&self, player: &NewPlayer) -> Result<Option<Player>, AppError> {
        let body = post(&self.client, &build_players_url(&self.api_base_url), player).await?;
        match serde_json::from_str::<Player>(&body) {
            Ok(created) => {
                info!("Created player {} with id {}", created.name, created.id);
                Ok(Some(created))
            }
            Err(e) => {
                warn!("Player {} created but response body was not a player: {e}", player.name);
                Ok(None)
            }
        }
    }

    async fn fetch_matches(&self) -> Result<Vec<Match>, AppError> {
        fetch(&self.client, &build_matches_url(&self.api_base_url)).await
    }

    async fn fetch_match_statistics(&self, match_id: &str) -> Result<MatchStatistics, AppError> {
        fetch(
            &self.client,
            &build_match_stats_url(&self.api_base_url, match_id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use crate::data_fetcher::models::{InjuryStatus, PlayerPosition};
    use chrono::NaiveDate;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_partial_json, method, path},
    };

    fn api_for(server: &MockServer) -> HttpTeamApi {
        HttpTeamApi::new(create_test_http_client(), server.uri())
    }

    #[tokio::test]
    async fn test_fetch_players() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/players/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "name": "Filip Nguyen", "age": 32, "position": "Goalkeeper",
                 "jersey_number": 1, "injury_status": "Fit"},
                {"id": 2, "name": "Nguyen Tien Linh", "age": 27, "position": "Striker",
                 "jersey_number": 22, "injury_status": "Suspended"}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let players = api_for(&mock_server).fetch_players().await.unwrap();

        assert_eq!(players.len(), 2);
        assert_eq!(players[0].position, PlayerPosition::Goalkeeper);
        assert_eq!(players[1].injury_status, InjuryStatus::Suspended);
    }

    #[tokio::test]
    async fn test_fetch_single_player_not_found() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/players/99"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Player not found"})))
            .mount(&mock_server)
            .await;

        let result = api_for(&mock_server).fetch_player(99).await;
        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_create_player_posts_payload() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/players/"))
            .and(body_partial_json(json!({
                "name": "Hoang Duc",
                "date_of_birth": "1998-01-11",
                "position": "Center Midfielder",
                "injury_status": "Fit"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 14, "name": "Hoang Duc", "age": 26, "position": "Center Midfielder",
                "jersey_number": 14, "injury_status": "Fit",
                "date_of_birth": "1998-01-11", "transfer_price_vnd": 0.0
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let new_player = NewPlayer {
            name: "Hoang Duc".to_string(),
            age: 26,
            date_of_birth: NaiveDate::from_ymd_opt(1998, 1, 11).unwrap(),
            position: PlayerPosition::CenterMidfielder,
            jersey_number: 14,
            transfer_price_vnd: 0.0,
            injury_status: InjuryStatus::Fit,
        };

        let created = api_for(&mock_server).create_player(&new_player).await.unwrap();
        assert_eq!(created.map(|p| p.id), Some(14));
    }

    #[tokio::test]
    async fn test_create_player_success_with_unreadable_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/players/"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 5})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let new_player = NewPlayer {
            name: "Pham Tuan Hai".to_string(),
            age: 26,
            date_of_birth: NaiveDate::from_ymd_opt(1998, 5, 19).unwrap(),
            position: PlayerPosition::Striker,
            jersey_number: 10,
            transfer_price_vnd: 0.0,
            injury_status: InjuryStatus::Fit,
        };

        let result = api_for(&mock_server).create_player(&new_player).await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_fetch_match_statistics() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/matches/5/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 1, "expected_goals": 2.1, "shots_on_target": 7,
                "ball_possession_percent": 61.0, "total_passes": 512,
                "successful_passes": 430, "pass_success_rate": 83.98,
                "interceptions": 9, "successful_tackles": 14, "aerial_disputes_won": 11,
                "total_fouls": 12, "yellow_cards": 2, "red_cards": 0
            })))
            .mount(&mock_server)
            .await;

        let stats = api_for(&mock_server).fetch_match_statistics("5").await.unwrap();
        assert_eq!(stats.shots_on_target, 7);
        assert_eq!(stats.total_passes, 512);
    }

    #[test]
    fn test_from_config_uses_base_url() {
        let config = Config {
            api_base_url: "http://example.test:8000".to_string(),
            ..Config::default()
        };
        let api = HttpTeamApi::from_config(&config).unwrap();
        assert_eq!(api.api_base_url(), "http://example.test:8000");
    }
}
