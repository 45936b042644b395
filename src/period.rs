use crate::models::Snapshot;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;

/// Week 1 of the season only has six scoring days.
const FIRST_WEEK_DAYS: u32 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoringPeriod {
    pub period: u32,
    pub date: String,
}

impl ScoringPeriod {
    pub fn label(&self) -> String {
        format!("Day {} - {}", day_of_week(self.period), self.date)
    }
}

/// 1-based day within the period's fantasy week.
pub fn day_of_week(period: u32) -> u32 {
    if period <= FIRST_WEEK_DAYS {
        period
    } else {
        (period - 7) % 7 + 1
    }
}

/// Parses a period key from a query string; anything that isn't a positive
/// integer selects nothing.
pub fn parse_period(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|period| *period > 0)
}

/// Periods and their dates, read from the first matchup's home team.
pub fn scoring_periods(snapshot: &Snapshot) -> Vec<ScoringPeriod> {
    snapshot
        .values()
        .next()
        .map(|matchup| {
            matchup
                .team1
                .days
                .iter()
                .map(|(period, day)| ScoringPeriod {
                    period: *period,
                    date: day.date.clone(),
                })
                .collect()
        })
        .unwrap_or_default()
}

pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// The period whose date is nearest to `today`; ties keep the earlier period.
/// Falls back to period 1 when nothing has a usable date.
pub fn closest_period(periods: &[ScoringPeriod], today: NaiveDate) -> u32 {
    let mut closest = 1;
    let mut min_diff = i64::MAX;

    for period in periods {
        let Ok(date) = NaiveDate::parse_from_str(&period.date, "%Y-%m-%d") else {
            continue;
        };
        let diff = (date - today).num_days().abs();
        if diff < min_diff {
            min_diff = diff;
            closest = period.period;
        }
    }

    closest
}
