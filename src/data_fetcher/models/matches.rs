use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

impl MatchResult {
    pub fn from_scores(our_score: i32, opponent_score: i32) -> Self {
        match our_score.cmp(&opponent_score) {
            Ordering::Greater => MatchResult::Win,
            Ordering::Less => MatchResult::Loss,
            Ordering::Equal => MatchResult::Draw,
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatchResult::Win => "Win",
            MatchResult::Draw => "Draw",
            MatchResult::Loss => "Loss",
        })
    }
}

/// Scheduled or completed fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: i64,
    pub opponent_name: String,
    pub match_date: NaiveDate,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub our_score: Option<i32>,
    #[serde(default)]
    pub opponent_score: Option<i32>,
    #[serde(default)]
    pub result: Option<MatchResult>,
}

impl Match {
    /// Score line for the fixture card: `"3 - 1"` once played, `"vs"` before.
    pub fn score_text(&self) -> String {
        match (self.is_completed, self.our_score, self.opponent_score) {
            (true, Some(ours), Some(theirs)) => format!("{ours} - {theirs}"),
            _ => "vs".to_string(),
        }
    }

    /// Result for a completed match, derived from the score when the API left it out.
    pub fn outcome(&self) -> Option<MatchResult> {
        if !self.is_completed {
            return None;
        }
        self.result.or_else(|| match (self.our_score, self.opponent_score) {
            (Some(ours), Some(theirs)) => Some(MatchResult::from_scores(ours, theirs)),
            _ => None,
        })
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_completed { "Completed" } else { "Upcoming" }
    }

    /// Label used in the statistics selector.
    pub fn selector_label(&self) -> String {
        format!("{} vs {}", self.match_date, self.opponent_name)
    }
}
