//! View controller for the squad page
//!
//! Each operation is one fetch followed by one render pass. Failures are
//! logged and turned into placeholders or alerts; nothing is returned to the
//! caller.

use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, error, info, instrument, warn};

use crate::constants::placeholders;
use crate::data_fetcher::api::TeamApi;
use crate::view::components::{match_card, placeholder, player_placeholder, player_row, stat_cards};
use crate::view::{Document, SelectOption};

pub struct ViewController<A> {
    api: A,
    document: Mutex<Document>,
    /// Bumped on every match selection. A statistics response is only
    /// rendered if no newer selection happened while it was in flight.
    stats_generation: AtomicU64,
}

impl<A: TeamApi> ViewController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            document: Mutex::new(Document::new()),
            stats_generation: AtomicU64::new(0),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Locks the document for reading or for editing form fields.
    ///
    /// Do not hold the guard while awaiting another controller operation.
    pub async fn document(&self) -> MutexGuard<'_, Document> {
        self.document.lock().await
    }

    pub fn into_document(self) -> Document {
        self.document.into_inner()
    }

    /// Initial load: players and matches are fetched independently and
    /// rendered in whichever order they complete.
    pub async fn page_load(&self) {
        info!("Loading squad page");
        tokio::join!(self.list_players(), self.list_matches());
    }

    #[instrument(skip(self))]
    pub async fn list_players(&self) {
        let result = self.api.fetch_players().await;

        let rows = match result {
            Ok(players) if players.is_empty() => {
                info!("Player list is empty");
                vec![player_placeholder(placeholders::NO_PLAYERS)]
            }
            Ok(players) => {
                info!("Rendering {} players", players.len());
                players.iter().map(player_row).collect()
            }
            Err(e) => {
                error!("Failed to load players: {e}");
                vec![player_placeholder(placeholders::PLAYERS_FAILED)]
            }
        };

        self.document.lock().await.players.replace(rows);
    }

    /// Renders a single player as the only row of the player table.
    #[instrument(skip(self))]
    pub async fn show_player(&self, player_id: i64) {
        let rows = match self.api.fetch_player(player_id).await {
            Ok(player) => vec![player_row(&player)],
            Err(e) if e.is_not_found() => {
                warn!("Player {player_id} does not exist");
                vec![player_placeholder(placeholders::NO_PLAYERS)]
            }
            Err(e) => {
                error!("Failed to load player {player_id}: {e}");
                vec![player_placeholder(placeholders::PLAYERS_FAILED)]
            }
        };

        self.document.lock().await.players.replace(rows);
    }

    /// Submits the player form. On success the list is refreshed and the
    /// form cleared; on failure an alert is raised and the form is kept.
    #[instrument(skip(self))]
    pub async fn create_player(&self) {
        let request = {
            let mut document = self.document.lock().await;
            match document.player_form.to_new_player() {
                Ok(request) => request,
                Err(e) => {
                    warn!("Player form rejected: {e}");
                    document.alert(format!("Failed to add player: {}", e.user_message()));
                    return;
                }
            }
        };

        match self.api.create_player(&request).await {
            Ok(created) => {
                match created {
                    Some(player) => info!("Player {} added", player.id),
                    None => info!("Player {} added", request.name),
                }
                self.list_players().await;
                self.document.lock().await.player_form.clear();
            }
            Err(e) => {
                error!("Failed to add player: {e}");
                self.document
                    .lock()
                    .await
                    .alert(format!("Failed to add player: {}", e.user_message()));
            }
        }
    }

    /// Renders the fixture cards and offers the completed matches in the
    /// statistics selector.
    #[instrument(skip(self))]
    pub async fn list_matches(&self) {
        let result = self.api.fetch_matches().await;

        let (cards, options) = match result {
            Ok(matches) if !matches.is_empty() => {
                info!("Rendering {} matches", matches.len());
                let options = matches
                    .iter()
                    .filter(|m| m.is_completed)
                    .map(|m| SelectOption {
                        value: m.id.to_string(),
                        label: m.selector_label(),
                    })
                    .collect();
                (matches.iter().map(match_card).collect(), options)
            }
            Ok(_) => {
                info!("Match list is empty");
                (vec![placeholder(placeholders::NO_MATCHES)], Vec::new())
            }
            Err(e) => {
                error!("Failed to load matches: {e}");
                (vec![placeholder(placeholders::NO_MATCHES)], Vec::new())
            }
        };

        let mut document = self.document.lock().await;
        document.matches.replace(cards);
        if document.match_select.replace_options(options) {
            info!("Selected match is no longer offered; clearing statistics");
            self.stats_generation.fetch_add(1, Ordering::SeqCst);
            document.stats.replace(vec![placeholder(placeholders::SELECT_MATCH)]);
        }
    }

    /// Handles a change of the match selector.
    #[instrument(skip(self))]
    pub async fn select_match(&self, match_id: &str) {
        let generation = self.stats_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let match_id = match_id.trim();

        if match_id.is_empty() {
            let mut document = self.document.lock().await;
            document.match_select.set_selected("");
            document.stats.replace(vec![placeholder(placeholders::SELECT_MATCH)]);
            return;
        }

        self.document
            .lock()
            .await
            .match_select
            .set_selected(match_id);

        let result = self.api.fetch_match_statistics(match_id).await;

        let mut document = self.document.lock().await;
        if self.stats_generation.load(Ordering::SeqCst) != generation {
            debug!("Discarding statistics for match {match_id}: a newer selection was made");
            return;
        }

        let content = match result {
            Ok(stats) => stat_cards(&stats),
            Err(e) => {
                error!("Failed to load statistics for match {match_id}: {e}");
                vec![placeholder(placeholders::NO_STATISTICS)]
            }
        };
        document.stats.replace(content);
    }
}
