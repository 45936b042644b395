//! Small display helpers shared by the page and fragment renderers.

use serde::Serialize;

const ABBREVIATE_OVER: usize = 18;

/// Win-probability brackets, highest first. A value lands in the first
/// bracket whose floor it reaches.
const TEAM_COLORS: [(f64, &str); 11] = [
    (90.0, "#0d7a2c"),
    (80.0, "#1a9240"),
    (70.0, "#28a745"),
    (60.0, "#3d9e50"),
    (55.0, "#4d9e5a"),
    (50.0, "#5da864"),
    (45.0, "#d9941f"),
    (40.0, "#e68a00"),
    (30.0, "#ff8020"),
    (20.0, "#ff6600"),
    (10.0, "#e65500"),
];
const LOWEST_COLOR: &str = "#cc0000";

pub fn team_color(probability: f64) -> &'static str {
    TEAM_COLORS
        .iter()
        .find(|(floor, _)| probability >= *floor)
        .map(|(_, color)| *color)
        .unwrap_or(LOWEST_COLOR)
}

pub fn format_percentage(value: f64) -> String {
    format!("{}%", format_decimal(value))
}

/// One decimal place with comma thousands separators, e.g. `1,204.5`. Halves
/// round away from zero (`12.25` prints `12.3`).
pub fn format_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    let fixed = format!("{:.1}", rounded.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "0"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = rounded < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

/// Raw point values print without a trailing `.0`; float noise from summing
/// is rounded away at two decimals.
pub fn format_points(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InjurySeverity {
    Out,
    DayToDay,
    Questionable,
    Probable,
    Other,
}

impl InjurySeverity {
    pub fn css_class(self) -> &'static str {
        match self {
            InjurySeverity::Out => "injury-tag out",
            InjurySeverity::DayToDay => "injury-tag dtd",
            // Doubtful is rendered with the questionable style as well.
            InjurySeverity::Questionable => "injury-tag questionable",
            InjurySeverity::Probable => "injury-tag probable",
            InjurySeverity::Other => "injury-tag",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InjuryTag {
    pub code: String,
    pub severity: InjurySeverity,
}

impl InjuryTag {
    pub fn to_html(&self) -> String {
        format!(
            r#"<span class="{}">{}</span>"#,
            self.severity.css_class(),
            html_escape(&self.code)
        )
    }
}

/// Maps a status to its tag. Unknown statuses keep their first three
/// characters. Input is trimmed and `_` reads as `-` before matching, so the
/// producer's `DAY_TO_DAY` gets the day-to-day tag and a blank status gets none.
pub fn injury_tag(status: Option<&str>) -> Option<InjuryTag> {
    let status = status?.trim();
    if status.is_empty() {
        return None;
    }

    let upper = status.to_uppercase().replace('_', "-");
    let (code, severity) = match upper.as_str() {
        "OUT" | "O" => ("O".to_string(), InjurySeverity::Out),
        "DAY-TO-DAY" | "DTD" | "DAY" => ("DTD".to_string(), InjurySeverity::DayToDay),
        "QUESTIONABLE" | "Q" => ("Q".to_string(), InjurySeverity::Questionable),
        "PROBABLE" | "P" => ("P".to_string(), InjurySeverity::Probable),
        "DOUBTFUL" | "D" => ("D".to_string(), InjurySeverity::Questionable),
        other => (other.chars().take(3).collect(), InjurySeverity::Other),
    };

    Some(InjuryTag { code, severity })
}

/// Shortens the first token of a long name to an initial. Names without a
/// space are left alone however long they are.
pub fn abbreviate_name(name: &str) -> String {
    if name.chars().count() <= ABBREVIATE_OVER {
        return name.to_string();
    }

    let mut parts: Vec<String> = name.split(' ').map(str::to_string).collect();
    if parts.len() < 2 {
        return name.to_string();
    }

    parts[0] = match parts[0].chars().next() {
        Some(initial) => format!("{initial}."),
        None => ".".to_string(),
    };
    parts.join(" ")
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
