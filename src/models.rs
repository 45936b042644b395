use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Roster placeholder the snapshot producer writes for an unfilled slot.
pub const EMPTY_SLOT: &str = "Empty Slot";

/// Top level of the snapshot: matchup id to matchup, in file order.
pub type Snapshot = IndexMap<String, Matchup>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matchup {
    pub team1: Team,
    pub team2: Team,
    pub totals: MatchupTotals,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchupTotals {
    pub team1: TeamTotals,
    pub team2: TeamTotals,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TeamTotals {
    #[serde(default)]
    pub points: f64,
    #[serde(default)]
    pub live_projection: f64,
    #[serde(default)]
    pub win_probability: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    #[serde(default)]
    pub record: String,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub days: BTreeMap<u32, DayRoster>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DayRoster {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub roster: Roster,
    #[serde(default)]
    pub players: Vec<PlayerLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Roster {
    #[serde(rename = "PG", default)]
    pub pg: Option<String>,
    #[serde(rename = "SG", default)]
    pub sg: Option<String>,
    #[serde(rename = "SF", default)]
    pub sf: Option<String>,
    #[serde(rename = "PF", default)]
    pub pf: Option<String>,
    #[serde(rename = "C", default)]
    pub c: Option<String>,
    #[serde(rename = "G", default)]
    pub g: Option<String>,
    #[serde(rename = "F", default)]
    pub f: Option<String>,
    #[serde(rename = "UTL", default)]
    pub utl: Option<Vec<String>>,
    #[serde(rename = "BENCH", default)]
    pub bench: Vec<ReserveEntry>,
    #[serde(rename = "IR", default)]
    pub ir: Vec<ReserveEntry>,
}

/// Bench and IR entries come either as a bare name or as a name with status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReserveEntry {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        injury_status: Option<String>,
    },
}

impl ReserveEntry {
    pub fn name(&self) -> &str {
        match self {
            ReserveEntry::Name(name) => name,
            ReserveEntry::Detailed { name, .. } => name,
        }
    }

    pub fn injury_status(&self) -> Option<&str> {
        match self {
            ReserveEntry::Name(_) => None,
            ReserveEntry::Detailed { injury_status, .. } => injury_status.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlayerLine {
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub points: f64,
    #[serde(default)]
    pub static_projection: f64,
    #[serde(default)]
    pub live_projection: f64,
    #[serde(default)]
    pub injury_status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FragmentResponse {
    pub html: String,
}
