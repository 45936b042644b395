use crate::format::{format_decimal, format_percentage, format_points, team_color};
use crate::models::{Matchup, Team, TeamTotals};
use serde::Serialize;

/// Probabilities under this are too narrow a segment to carry a label.
const MIN_LABELLED_PROBABILITY: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSummary {
    pub name: String,
    pub record: String,
    pub color: &'static str,
    pub points: String,
    pub projected_total: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSegment {
    pub width: f64,
    pub color: &'static str,
    pub label: Option<String>,
}

/// Header data for one matchup card. Away team is listed first to match the
/// left-to-right layout of the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchupSummary {
    pub title: String,
    pub away: TeamSummary,
    pub home: TeamSummary,
    pub bar: [BarSegment; 2],
}

pub fn build_summary(matchup_id: &str, position: usize, matchup: &Matchup) -> MatchupSummary {
    let away = &matchup.totals.team2;
    let home = &matchup.totals.team1;

    MatchupSummary {
        title: format!("Matchup #{}", matchup_number(matchup_id, position)),
        away: team_summary(&matchup.team2, away),
        home: team_summary(&matchup.team1, home),
        bar: [bar_segment(away.win_probability), bar_segment(home.win_probability)],
    }
}

/// Matchup ids end in a zero-based digit (`matchup_0`); ids that don't fall
/// back to the card's position.
pub fn matchup_number(matchup_id: &str, position: usize) -> u32 {
    matchup_id
        .chars()
        .last()
        .and_then(|c| c.to_digit(10))
        .map(|digit| digit + 1)
        .unwrap_or(position as u32 + 1)
}

fn team_summary(team: &Team, totals: &TeamTotals) -> TeamSummary {
    TeamSummary {
        name: team.name.clone(),
        record: team.record.clone(),
        color: team_color(totals.win_probability),
        points: format_points(totals.points),
        projected_total: format_decimal(totals.live_projection),
    }
}

fn bar_segment(probability: f64) -> BarSegment {
    BarSegment {
        width: probability.clamp(1.0, 99.0),
        color: team_color(probability),
        label: (probability >= MIN_LABELLED_PROBABILITY).then(|| format_percentage(probability)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchupTotals;
    use std::collections::BTreeMap;

    fn team(name: &str, record: &str) -> Team {
        Team {
            name: name.to_string(),
            record: record.to_string(),
            id: None,
            owner: None,
            days: BTreeMap::new(),
        }
    }

    fn matchup(home_prob: f64, away_prob: f64) -> Matchup {
        Matchup {
            team1: team("Home", "5-2"),
            team2: team("Away", "2-5"),
            totals: MatchupTotals {
                team1: TeamTotals {
                    points: 412.0,
                    live_projection: 1032.46,
                    win_probability: home_prob,
                },
                team2: TeamTotals {
                    points: 398.5,
                    live_projection: 987.0,
                    win_probability: away_prob,
                },
            },
        }
    }

    #[test]
    fn summary_places_away_team_first() {
        let summary = build_summary("matchup_2", 0, &matchup(72.4, 27.6));
        assert_eq!(summary.title, "Matchup #3");
        assert_eq!(summary.away.name, "Away");
        assert_eq!(summary.away.points, "398.5");
        assert_eq!(summary.away.color, "#ff6600");
        assert_eq!(summary.home.name, "Home");
        assert_eq!(summary.home.points, "412");
        assert_eq!(summary.home.projected_total, "1,032.5");
        assert_eq!(summary.home.color, "#28a745");
        assert_eq!(summary.bar[0].label.as_deref(), Some("27.6%"));
        assert_eq!(summary.bar[1].label.as_deref(), Some("72.4%"));
    }

    #[test]
    fn lopsided_bar_is_clamped_and_unlabelled() {
        let summary = build_summary("matchup_0", 0, &matchup(99.6, 0.4));
        assert_eq!(summary.bar[0].width, 1.0);
        assert_eq!(summary.bar[0].label, None);
        assert_eq!(summary.bar[0].color, "#cc0000");
        assert_eq!(summary.bar[1].width, 99.0);
        assert_eq!(summary.bar[1].label.as_deref(), Some("99.6%"));
    }

    #[test]
    fn matchup_number_falls_back_to_position() {
        assert_eq!(matchup_number("matchup_0", 5), 1);
        assert_eq!(matchup_number("week9-box", 3), 4);
        assert_eq!(matchup_number("", 0), 1);
    }
}
