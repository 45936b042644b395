use crate::period::parse_period;
use std::collections::{BTreeMap, HashMap};

const DAY_PREFIX: &str = "day_";
const OPEN_PREFIX: &str = "open_";

/// What the browser is currently looking at for one matchup card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchupView {
    /// Raw `day_<id>` value; `None` means "use the default period".
    pub day: Option<String>,
    pub expanded: bool,
}

/// Per-matchup view state, carried in the page URL rather than in browser
/// storage so a render is a pure function of snapshot plus query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    matchups: BTreeMap<String, MatchupView>,
}

impl ViewState {
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        let mut matchups: BTreeMap<String, MatchupView> = BTreeMap::new();

        for (key, value) in params {
            if let Some(id) = key.strip_prefix(DAY_PREFIX).filter(|id| !id.is_empty()) {
                matchups.entry(id.to_string()).or_default().day = Some(value.clone());
            } else if let Some(id) = key.strip_prefix(OPEN_PREFIX).filter(|id| !id.is_empty()) {
                matchups.entry(id.to_string()).or_default().expanded = is_truthy(value);
            }
        }

        Self { matchups }
    }

    /// The period to render for a matchup. An explicit but unusable `day_`
    /// value resolves to `None` rather than to the default.
    pub fn selected_period(&self, matchup_id: &str, default: u32) -> Option<u32> {
        match self.matchups.get(matchup_id).and_then(|view| view.day.as_deref()) {
            Some(raw) => parse_period(raw),
            None => Some(default),
        }
    }

    pub fn is_expanded(&self, matchup_id: &str) -> bool {
        self.matchups
            .get(matchup_id)
            .map(|view| view.expanded)
            .unwrap_or(false)
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim(), "1" | "true" | "yes" | "on")
}
