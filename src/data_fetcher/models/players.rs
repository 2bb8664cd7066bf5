use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Playing position as the API spells it on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerPosition {
    #[serde(rename = "Goalkeeper")]
    Goalkeeper,
    #[serde(rename = "Center Back")]
    CenterBack,
    #[serde(rename = "Left Back")]
    LeftBack,
    #[serde(rename = "Right Back")]
    RightBack,
    #[serde(rename = "Defensive Midfielder")]
    DefensiveMidfielder,
    #[serde(rename = "Center Midfielder")]
    CenterMidfielder,
    #[serde(rename = "Attacking Midfielder")]
    AttackingMidfielder,
    #[serde(rename = "Left Winger")]
    LeftWinger,
    #[serde(rename = "Right Winger")]
    RightWinger,
    #[serde(rename = "Striker")]
    Striker,
}

impl PlayerPosition {
    pub const ALL: [PlayerPosition; 10] = [
        PlayerPosition::Goalkeeper,
        PlayerPosition::CenterBack,
        PlayerPosition::LeftBack,
        PlayerPosition::RightBack,
        PlayerPosition::DefensiveMidfielder,
        PlayerPosition::CenterMidfielder,
        PlayerPosition::AttackingMidfielder,
        PlayerPosition::LeftWinger,
        PlayerPosition::RightWinger,
        PlayerPosition::Striker,
    ];

    /// Two letter abbreviation used on team sheets.
    pub fn code(self) -> &'static str {
        match self {
            PlayerPosition::Goalkeeper => "GK",
            PlayerPosition::CenterBack => "CB",
            PlayerPosition::LeftBack => "LB",
            PlayerPosition::RightBack => "RB",
            PlayerPosition::DefensiveMidfielder => "DM",
            PlayerPosition::CenterMidfielder => "CM",
            PlayerPosition::AttackingMidfielder => "AM",
            PlayerPosition::LeftWinger => "LW",
            PlayerPosition::RightWinger => "RW",
            PlayerPosition::Striker => "ST",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayerPosition::Goalkeeper => "Goalkeeper",
            PlayerPosition::CenterBack => "Center Back",
            PlayerPosition::LeftBack => "Left Back",
            PlayerPosition::RightBack => "Right Back",
            PlayerPosition::DefensiveMidfielder => "Defensive Midfielder",
            PlayerPosition::CenterMidfielder => "Center Midfielder",
            PlayerPosition::AttackingMidfielder => "Attacking Midfielder",
            PlayerPosition::LeftWinger => "Left Winger",
            PlayerPosition::RightWinger => "Right Winger",
            PlayerPosition::Striker => "Striker",
        }
    }
}

impl fmt::Display for PlayerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlayerPosition {
    type Err = String;

    /// Accepts either the short code (`ST`) or the full label (`Striker`),
    /// ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PlayerPosition::ALL
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(wanted) || p.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown position '{wanted}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InjuryStatus {
    #[default]
    #[serde(rename = "Fit")]
    Fit,
    #[serde(rename = "Minor Injury")]
    Minor,
    #[serde(rename = "Long Term Injury")]
    LongTerm,
    #[serde(rename = "Suspended")]
    Suspended,
}

impl fmt::Display for InjuryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InjuryStatus::Fit => "Fit",
            InjuryStatus::Minor => "Minor Injury",
            InjuryStatus::LongTerm => "Long Term Injury",
            InjuryStatus::Suspended => "Suspended",
        })
    }
}

/// Player record as returned by the API. Write-only fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub position: PlayerPosition,
    pub jersey_number: i32,
    #[serde(default)]
    pub injury_status: InjuryStatus,
}

/// Body of a player creation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    pub age: i32,
    pub date_of_birth: NaiveDate,
    pub position: PlayerPosition,
    pub jersey_number: i32,
    pub transfer_price_vnd: f64,
    pub injury_status: InjuryStatus,
}
