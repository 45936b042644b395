//! Day-scoped roster tables: which rows a team shows for one scoring period
//! and what the day adds up to.

use crate::format::{format_decimal, format_points, injury_tag, InjuryTag};
use crate::models::{DayRoster, PlayerLine, ReserveEntry, Team, EMPTY_SLOT};
use serde::Serialize;
use tracing::warn;

const FLEX_DEFAULT_SLOTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Position {
    #[serde(rename = "PG")]
    PointGuard,
    #[serde(rename = "SG")]
    ShootingGuard,
    #[serde(rename = "SF")]
    SmallForward,
    #[serde(rename = "PF")]
    PowerForward,
    #[serde(rename = "C")]
    Center,
    #[serde(rename = "G")]
    Guard,
    #[serde(rename = "F")]
    Forward,
    #[serde(rename = "UTL")]
    Utility,
    #[serde(rename = "BN")]
    Bench,
    #[serde(rename = "IR")]
    InjuredReserve,
}

/// Single-occupant slots in display order.
pub const STARTING_SLOTS: [Position; 7] = [
    Position::PointGuard,
    Position::ShootingGuard,
    Position::SmallForward,
    Position::PowerForward,
    Position::Center,
    Position::Guard,
    Position::Forward,
];

impl Position {
    pub fn label(self) -> &'static str {
        match self {
            Position::PointGuard => "PG",
            Position::ShootingGuard => "SG",
            Position::SmallForward => "SF",
            Position::PowerForward => "PF",
            Position::Center => "C",
            Position::Guard => "G",
            Position::Forward => "F",
            Position::Utility => "UTL",
            Position::Bench => "BN",
            Position::InjuredReserve => "IR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Projection {
    /// Empty slot, bench, IR, or a name missing from the player list.
    Blank,
    /// Game under way or finished.
    Live { live: f64, fixed: f64 },
    /// Scheduled but not started.
    Scheduled { fixed: f64 },
    /// No game today.
    Idle,
}

impl Projection {
    pub fn display(&self) -> String {
        match self {
            Projection::Blank => String::new(),
            Projection::Live { live, fixed } => {
                format!("{} ({})", format_decimal(*live), format_decimal(*fixed))
            }
            Projection::Scheduled { fixed } => format_decimal(*fixed),
            Projection::Idle => "0.0".to_string(),
        }
    }

    /// What this row adds to the day's projected total.
    pub fn counted(&self) -> f64 {
        match self {
            Projection::Live { live, .. } => *live,
            Projection::Scheduled { fixed } => *fixed,
            Projection::Blank | Projection::Idle => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum Points {
    Blank,
    Scored(f64),
    Pending,
    Idle,
}

impl Points {
    pub fn display(&self) -> String {
        match self {
            Points::Blank => String::new(),
            Points::Scored(points) => format_points(*points),
            Points::Pending => "-".to_string(),
            Points::Idle => "0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotRow {
    pub position: Position,
    /// Full name as stored in the snapshot; empty for an unfilled slot.
    pub name: String,
    pub injury: Option<InjuryTag>,
    pub projection: Projection,
    pub points: Points,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RosterRow {
    Slot(SlotRow),
    NoData,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DayTotals {
    pub points: f64,
    pub projection: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterTable {
    pub rows: Vec<RosterRow>,
    pub totals: DayTotals,
}

impl RosterTable {
    fn no_data() -> Self {
        Self {
            rows: vec![RosterRow::NoData],
            totals: DayTotals::default(),
        }
    }
}

/// Builds the table a team shows for `period`. `None` (an unusable period
/// key) and periods the team has no data for both give the no-data table.
pub fn build_roster_table(team: &Team, period: Option<u32>) -> RosterTable {
    let Some(day) = period.and_then(|p| team.days.get(&p)) else {
        return RosterTable::no_data();
    };

    let mut rows = Vec::new();
    let mut totals = DayTotals::default();

    let roster = &day.roster;
    let starters = [
        &roster.pg, &roster.sg, &roster.sf, &roster.pf, &roster.c, &roster.g, &roster.f,
    ];
    for (position, assigned) in STARTING_SLOTS.iter().zip(starters) {
        rows.push(active_row(team, day, *position, assigned.as_deref(), &mut totals));
    }

    match &roster.utl {
        Some(flex) => {
            for assigned in flex {
                let assigned = Some(assigned.as_str());
                rows.push(active_row(team, day, Position::Utility, assigned, &mut totals));
            }
        }
        None => {
            for _ in 0..FLEX_DEFAULT_SLOTS {
                rows.push(active_row(team, day, Position::Utility, None, &mut totals));
            }
        }
    }

    rows.extend(roster.bench.iter().map(|entry| reserve_row(Position::Bench, entry)));
    rows.extend(roster.ir.iter().map(|entry| reserve_row(Position::InjuredReserve, entry)));

    RosterTable { rows, totals }
}

fn active_row(
    team: &Team,
    day: &DayRoster,
    position: Position,
    assigned: Option<&str>,
    totals: &mut DayTotals,
) -> RosterRow {
    let Some(name) = assigned.filter(|name| *name != EMPTY_SLOT) else {
        return RosterRow::Slot(SlotRow {
            position,
            name: String::new(),
            injury: None,
            projection: Projection::Blank,
            points: Points::Blank,
        });
    };

    let Some(player) = find_player(team, day, name) else {
        warn!(team = %team.name, player = name, "rostered player missing from day's player list");
        return RosterRow::Slot(SlotRow {
            position,
            name: name.to_string(),
            injury: None,
            projection: Projection::Blank,
            points: Points::Blank,
        });
    };

    totals.points += player.points;

    let (projection, points) = if player.points > 0.0 {
        (
            Projection::Live {
                live: player.live_projection,
                fixed: player.static_projection,
            },
            Points::Scored(player.points),
        )
    } else if player.static_projection > 0.0 {
        (
            Projection::Scheduled {
                fixed: player.static_projection,
            },
            Points::Pending,
        )
    } else {
        (Projection::Idle, Points::Idle)
    };
    totals.projection += projection.counted();

    RosterRow::Slot(SlotRow {
        position,
        name: name.to_string(),
        injury: injury_tag(player.injury_status.as_deref()),
        projection,
        points,
    })
}

fn reserve_row(position: Position, entry: &ReserveEntry) -> RosterRow {
    RosterRow::Slot(SlotRow {
        position,
        name: entry.name().to_string(),
        injury: injury_tag(entry.injury_status()),
        projection: Projection::Blank,
        points: Points::Blank,
    })
}

/// First exact name match wins. Later duplicates are reported, not merged.
fn find_player<'a>(team: &Team, day: &'a DayRoster, name: &str) -> Option<&'a PlayerLine> {
    let mut matches = day.players.iter().filter(|player| player.name == name);
    let first = matches.next()?;
    let duplicates = matches.count();
    if duplicates > 0 {
        warn!(
            team = %team.name,
            player = name,
            duplicates,
            date = %day.date,
            "duplicate player entries; using the first"
        );
    }
    Some(first)
}
