use crate::errors::AppError;
use crate::models::{FragmentResponse, Snapshot};
use crate::period::{closest_period, parse_period, scoring_periods, today_in};
use crate::roster::{build_roster_table, RosterTable};
use crate::state::AppState;
use crate::storage::load_snapshot;
use crate::ui::{render_index, render_player_tables};
use crate::view::ViewState;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

#[derive(Debug, Serialize)]
pub struct MatchupDayResponse {
    pub matchup_id: String,
    pub day: Option<u32>,
    pub team1: RosterTable,
    pub team2: RosterTable,
}

/// Full page, or the roster fragment when the day selector asks for one
/// (`?ajax=1&matchupId=..&day=..`).
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, AppError> {
    let snapshot = load_snapshot(&state.snapshot_path).await?;

    if let Some((matchup_id, day)) = fragment_request(&params) {
        let fragment = render_fragment(&snapshot, matchup_id, day)?;
        return Ok(Json(fragment).into_response());
    }

    let periods = scoring_periods(&snapshot);
    let default_period = closest_period(&periods, today_in(state.timezone));
    let view = ViewState::from_query(&params);
    debug!(default_period, matchups = snapshot.len(), "rendering matchup page");

    Ok(Html(render_index(&snapshot, &view, default_period)).into_response())
}

pub async fn matchup_day(
    State(state): State<AppState>,
    Path((matchup_id, day)): Path<(String, String)>,
) -> Result<Json<MatchupDayResponse>, AppError> {
    let snapshot = load_snapshot(&state.snapshot_path).await?;
    let matchup = snapshot
        .get(&matchup_id)
        .ok_or_else(|| unknown_matchup(&matchup_id))?;

    let period = parse_period(&day);
    Ok(Json(MatchupDayResponse {
        team1: build_roster_table(&matchup.team1, period),
        team2: build_roster_table(&matchup.team2, period),
        matchup_id,
        day: period,
    }))
}

pub async fn healthz() -> &'static str {
    "ok"
}

fn fragment_request(params: &HashMap<String, String>) -> Option<(&str, &str)> {
    params.get("ajax")?;
    let matchup_id = params.get("matchupId")?;
    let day = params.get("day")?;
    Some((matchup_id.as_str(), day.as_str()))
}

/// Roster fragment for one matchup and day. An unknown matchup is an error;
/// an unknown or malformed day renders the no-data tables.
pub fn render_fragment(
    snapshot: &Snapshot,
    matchup_id: &str,
    day: &str,
) -> Result<FragmentResponse, AppError> {
    let matchup = snapshot
        .get(matchup_id)
        .ok_or_else(|| unknown_matchup(matchup_id))?;

    Ok(FragmentResponse {
        html: render_player_tables(matchup, parse_period(day)),
    })
}

fn unknown_matchup(matchup_id: &str) -> AppError {
    info!(matchup_id, "requested unknown matchup");
    AppError::not_found(format!("unknown matchup {matchup_id:?}"))
}
