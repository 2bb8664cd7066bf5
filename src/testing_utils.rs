use crate::data_fetcher::api::TeamApi;
use crate::data_fetcher::models::{
    InjuryStatus, Match, MatchStatistics, NewPlayer, Player, PlayerPosition,
};
use crate::error::AppError;
use crate::view::PlayerForm;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// A fit centre back whose jersey number equals the id
    pub fn player(id: i64, name: &str) -> Player {
        Player {
            id,
            name: name.to_string(),
            age: 25,
            position: PlayerPosition::CenterBack,
            jersey_number: id as i32,
            injury_status: InjuryStatus::Fit,
        }
    }

    pub fn upcoming_match(id: i64, opponent: &str, date: &str) -> Match {
        Match {
            id,
            opponent_name: opponent.to_string(),
            match_date: parse_date(date),
            venue: "Home".to_string(),
            is_completed: false,
            our_score: None,
            opponent_score: None,
            result: None,
        }
    }

    pub fn completed_match(
        id: i64,
        opponent: &str,
        date: &str,
        our_score: i32,
        opponent_score: i32,
    ) -> Match {
        Match {
            id,
            opponent_name: opponent.to_string(),
            match_date: parse_date(date),
            venue: "Away".to_string(),
            is_completed: true,
            our_score: Some(our_score),
            opponent_score: Some(opponent_score),
            result: None,
        }
    }

    pub fn statistics() -> MatchStatistics {
        MatchStatistics {
            expected_goals: 1.8,
            shots_on_target: 6,
            ball_possession_percent: 54.5,
            total_passes: 480,
            successful_passes: 401,
            pass_success_rate: 83.54,
            interceptions: 11,
            successful_tackles: 17,
            aerial_disputes_won: 9,
            total_fouls: 13,
            yellow_cards: 2,
            red_cards: 0,
        }
    }

    /// A valid form for the given name, position and jersey number
    pub fn player_form(name: &str, position: &str, jersey_number: &str) -> PlayerForm {
        PlayerForm {
            name: name.to_string(),
            age: "24".to_string(),
            date_of_birth: "2000-06-15".to_string(),
            position: position.to_string(),
            jersey_number: jersey_number.to_string(),
        }
    }
}

fn parse_date(date: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap_or_default()
}

/// A request seen by `RecordingApi`
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    FetchPlayers,
    FetchPlayer(i64),
    CreatePlayer(NewPlayer),
    FetchMatches,
    FetchMatchStatistics(String),
}

/// What a `RecordingApi` endpoint answers with
#[derive(Debug, Clone)]
pub enum CannedResponse<T> {
    Ok(T),
    /// Non-success HTTP status
    Status(u16),
    /// Transport failure
    Offline,
}

impl<T: Clone> CannedResponse<T> {
    fn produce(&self, url: &str) -> Result<T, AppError> {
        match self {
            CannedResponse::Ok(value) => Ok(value.clone()),
            CannedResponse::Status(404) => Err(AppError::api_not_found(url)),
            CannedResponse::Status(status @ 400..=499) => {
                Err(AppError::api_client_error(*status, "Bad Request", url))
            }
            CannedResponse::Status(status) => {
                Err(AppError::api_server_error(*status, "Internal Server Error", url))
            }
            CannedResponse::Offline => Err(AppError::network_connection(url, "connection refused")),
        }
    }
}

/// In-memory `TeamApi` that records every call.
///
/// Created players are appended to the player list so a refresh after
/// creation sees them. Statistics for ids that were not registered answer 404.
pub struct RecordingApi {
    players: Mutex<CannedResponse<Vec<Player>>>,
    create: Mutex<CannedResponse<()>>,
    matches: Mutex<CannedResponse<Vec<Match>>>,
    statistics: Mutex<HashMap<String, (CannedResponse<MatchStatistics>, Duration)>>,
    calls: Mutex<Vec<ApiCall>>,
}

impl Default for RecordingApi {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl RecordingApi {
    pub fn new() -> Self {
        Self {
            players: Mutex::new(CannedResponse::Ok(Vec::new())),
            create: Mutex::new(CannedResponse::Ok(())),
            matches: Mutex::new(CannedResponse::Ok(Vec::new())),
            statistics: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_players(self, players: Vec<Player>) -> Self {
        self.set_players(CannedResponse::Ok(players));
        self
    }

    pub fn with_matches(self, matches: Vec<Match>) -> Self {
        self.set_matches(CannedResponse::Ok(matches));
        self
    }

    pub fn with_statistics(self, match_id: &str, stats: MatchStatistics) -> Self {
        self.with_statistics_delayed(match_id, stats, Duration::ZERO)
    }

    /// Statistics that arrive only after `delay`
    pub fn with_statistics_delayed(
        self,
        match_id: &str,
        stats: MatchStatistics,
        delay: Duration,
    ) -> Self {
        lock(&self.statistics).insert(match_id.to_string(), (CannedResponse::Ok(stats), delay));
        self
    }

    pub fn set_players(&self, response: CannedResponse<Vec<Player>>) {
        *lock(&self.players) = response;
    }

    pub fn set_create(&self, response: CannedResponse<()>) {
        *lock(&self.create) = response;
    }

    pub fn set_matches(&self, response: CannedResponse<Vec<Match>>) {
        *lock(&self.matches) = response;
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        lock(&self.calls).clone()
    }

    fn record(&self, call: ApiCall) {
        lock(&self.calls).push(call);
    }
}

impl TeamApi for RecordingApi {
    async fn fetch_players(&self) -> Result<Vec<Player>, AppError> {
        self.record(ApiCall::FetchPlayers);
        lock(&self.players).produce("/players/")
    }

    async fn fetch_player(&self, player_id: i64) -> Result<Player, AppError> {
        self.record(ApiCall::FetchPlayer(player_id));
        let url = format!("/players/{player_id}");
        let players = lock(&self.players).produce(&url)?;
        players
            .into_iter()
            .find(|p| p.id == player_id)
            .ok_or_else(|| AppError::api_not_found(url))
    }

    async fn create_player(&self, player: &NewPlayer) -> Result<Option<Player>, AppError> {
        self.record(ApiCall::CreatePlayer(player.clone()));
        lock(&self.create).produce("/players/")?;

        let mut players = lock(&self.players);
        let existing = match &mut *players {
            CannedResponse::Ok(existing) => existing,
            _ => return Err(AppError::api_server_error(500, "Internal Server Error", "/players/")),
        };
        let created = Player {
            id: existing.iter().map(|p| p.id).max().unwrap_or(0) + 1,
            name: player.name.clone(),
            age: player.age,
            position: player.position,
            jersey_number: player.jersey_number,
            injury_status: player.injury_status,
        };
        existing.push(created.clone());
        Ok(Some(created))
    }

    async fn fetch_matches(&self) -> Result<Vec<Match>, AppError> {
        self.record(ApiCall::FetchMatches);
        lock(&self.matches).produce("/matches/upcoming")
    }

    async fn fetch_match_statistics(&self, match_id: &str) -> Result<MatchStatistics, AppError> {
        self.record(ApiCall::FetchMatchStatistics(match_id.to_string()));
        let url = format!("/matches/{match_id}/stats");
        let (response, delay) = lock(&self.statistics)
            .get(match_id)
            .cloned()
            .unwrap_or((CannedResponse::Status(404), Duration::ZERO));

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        response.produce(&url)
    }
}
