use serde::{Deserialize, Serialize};

/// Per-match statistics. Any field the API omits reads as zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchStatistics {
    pub expected_goals: f64,
    pub shots_on_target: i32,
    pub ball_possession_percent: f64,
    pub total_passes: i32,
    pub successful_passes: i32,
    pub pass_success_rate: f64,
    pub interceptions: i32,
    pub successful_tackles: i32,
    pub aerial_disputes_won: i32,
    pub total_fouls: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
}

impl MatchStatistics {
    /// Display values in card order. Pairs with `constants::STAT_LABELS`.
    pub fn display_values(&self) -> [String; 12] {
        [
            format!("{:.2}", self.expected_goals),
            self.shots_on_target.to_string(),
            format!("{:.1}%", self.ball_possession_percent),
            self.total_passes.to_string(),
            self.successful_passes.to_string(),
            format!("{:.1}%", self.pass_success_rate),
            self.interceptions.to_string(),
            self.successful_tackles.to_string(),
            self.aerial_disputes_won.to_string(),
            self.total_fouls.to_string(),
            self.yellow_cards.to_string(),
            self.red_cards.to_string(),
        ]
    }
}
