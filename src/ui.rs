use crate::format::{abbreviate_name, format_decimal, format_points, html_escape};
use crate::models::{Matchup, Snapshot};
use crate::period::{scoring_periods, ScoringPeriod};
use crate::roster::{
    build_roster_table, Points, Position, Projection, RosterRow, RosterTable, SlotRow,
};
use crate::summary::{build_summary, BarSegment, MatchupSummary, TeamSummary};
use crate::view::ViewState;

/// Column order differs per side; the away table reads left to right from
/// the position badge, the home table mirrors it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Away,
    Home,
}

pub fn render_index(snapshot: &Snapshot, view: &ViewState, default_period: u32) -> String {
    let periods = scoring_periods(snapshot);
    let cards: String = snapshot
        .iter()
        .enumerate()
        .map(|(position, (matchup_id, matchup))| {
            let selected = view.selected_period(matchup_id, default_period);
            let expanded = view.is_expanded(matchup_id);
            render_matchup_card(matchup_id, position, matchup, &periods, selected, expanded)
        })
        .collect();

    let cards = if cards.is_empty() {
        r#"<p class="empty">No matchups in the current snapshot.</p>"#.to_string()
    } else {
        cards
    };

    INDEX_HTML.replace("{{MATCHUPS}}", &cards)
}

pub fn render_matchup_card(
    matchup_id: &str,
    position: usize,
    matchup: &Matchup,
    periods: &[ScoringPeriod],
    selected: Option<u32>,
    expanded: bool,
) -> String {
    let summary = build_summary(matchup_id, position, matchup);
    let id = html_escape(matchup_id);

    format!(
        r#"<article class="matchup-card{open}" data-matchup="{id}">
  <div class="matchup-header">{title}</div>
  <div class="team-section" data-toggle>
    {summary}
    <div class="probability-bar">{bar}</div>
    <div class="chevron" aria-hidden="true">{chevron}</div>
  </div>
  <div class="details-content"{hidden}>
    <div class="day-select">
      <label for="daySelect-{id}">Select Day:</label>
      <select id="daySelect-{id}" data-day-select>{options}</select>
    </div>
    <div class="player-tables" data-tables>{tables}</div>
  </div>
</article>
"#,
        open = if expanded { " open" } else { "" },
        title = html_escape(&summary.title),
        summary = render_summary(&summary),
        bar = summary.bar.iter().map(render_segment).collect::<String>(),
        chevron = if expanded { "&#9650;" } else { "&#9660;" },
        hidden = if expanded { "" } else { " hidden" },
        options = render_day_options(periods, selected),
        tables = render_player_tables(matchup, selected),
    )
}

/// Both teams' roster tables for one period. This is also the payload of the
/// day-switch fragment request.
pub fn render_player_tables(matchup: &Matchup, period: Option<u32>) -> String {
    let away = build_roster_table(&matchup.team2, period);
    let home = build_roster_table(&matchup.team1, period);

    format!(
        r#"<div class="team-names-row"><h4>{away_name}</h4><h4>{home_name}</h4></div>
<div class="player-details">
{away_table}
{home_table}
</div>"#,
        away_name = html_escape(&matchup.team2.name),
        home_name = html_escape(&matchup.team1.name),
        away_table = render_table(&away, Side::Away),
        home_table = render_table(&home, Side::Home),
    )
}

fn render_summary(summary: &MatchupSummary) -> String {
    format!(
        r#"<div class="team-row">
      {away}
      {home}
    </div>"#,
        away = render_team_summary(&summary.away, Side::Away),
        home = render_team_summary(&summary.home, Side::Home),
    )
}

fn render_team_summary(team: &TeamSummary, side: Side) -> String {
    let points = format!(r#"<span class="points">{}</span>"#, html_escape(&team.points));
    let projection = format!(
        r#"<span class="projection">Projected Total: {}</span>"#,
        html_escape(&team.projected_total)
    );
    let (class, stats) = match side {
        Side::Away => ("team away", format!("{projection}{points}")),
        Side::Home => ("team home", format!("{points}{projection}")),
    };

    format!(
        r#"<div class="{class}">
        <div class="team-name" style="color: {color};">{name}<span class="team-record">({record})</span></div>
        <div class="team-stats">{stats}</div>
      </div>"#,
        color = team.color,
        name = html_escape(&team.name),
        record = html_escape(&team.record),
    )
}

fn render_segment(segment: &BarSegment) -> String {
    format!(
        r#"<div class="progress-segment" style="width: {width}%; background-color: {color};">{label}</div>"#,
        width = segment.width,
        color = segment.color,
        label = segment.label.as_deref().map(html_escape).unwrap_or_default(),
    )
}

fn render_day_options(periods: &[ScoringPeriod], selected: Option<u32>) -> String {
    periods
        .iter()
        .map(|period| {
            let is_selected = selected == Some(period.period);
            format!(
                r#"<option value="{value}"{selected}>{label}</option>"#,
                value = period.period,
                selected = if is_selected { " selected" } else { "" },
                label = html_escape(&period.label()),
            )
        })
        .collect()
}

fn render_table(table: &RosterTable, side: Side) -> String {
    let head = match side {
        Side::Away => "<th>POS</th><th>Player</th><th>Projection</th><th>Points</th>",
        Side::Home => "<th>Points</th><th>Projection</th><th>Player</th><th>POS</th>",
    };
    let body: String = table.rows.iter().map(|row| render_row(row, side)).collect();

    let projection = format_decimal(table.totals.projection);
    let points = format_points(table.totals.points);
    let total = match side {
        Side::Away => format!(
            "<td><strong>Day Total</strong></td><td></td><td><strong>{projection}</strong></td><td><strong>{points}</strong></td>"
        ),
        Side::Home => format!(
            "<td><strong>{points}</strong></td><td><strong>{projection}</strong></td><td></td><td><strong>Day Total</strong></td>"
        ),
    };

    format!(
        r#"<div class="roster {side}">
<table>
<thead><tr>{head}</tr></thead>
<tbody>
{body}<tr class="day-total-row">{total}</tr>
</tbody>
</table>
</div>"#,
        side = match side {
            Side::Away => "away",
            Side::Home => "home",
        },
    )
}

fn render_row(row: &RosterRow, side: Side) -> String {
    let slot = match row {
        RosterRow::NoData => {
            return "<tr><td colspan=\"4\" class=\"no-data\">No data for this day</td></tr>\n".to_string();
        }
        RosterRow::Slot(slot) => slot,
    };

    let (row_class, badge_class) = match slot.position {
        Position::Bench => (r#" class="bench-row""#, "position-badge bench-badge"),
        Position::InjuredReserve => (r#" class="ir-row""#, "position-badge ir-badge"),
        _ => ("", "position-badge"),
    };
    let position = format!(
        r#"<td><span class="{badge_class}">{}</span></td>"#,
        slot.position.label()
    );
    let player = render_player_cell(slot);
    let projection = format!("<td>{}</td>", render_projection(&slot.projection));
    let points = render_points(&slot.points);

    let cells = match side {
        Side::Away => [position, player, projection, points],
        Side::Home => [points, projection, player, position],
    };
    format!("<tr{row_class}>{}</tr>\n", cells.concat())
}

fn render_player_cell(slot: &SlotRow) -> String {
    let tag = slot
        .injury
        .as_ref()
        .map(|tag| tag.to_html())
        .unwrap_or_default();
    format!(
        r#"<td class="player-name"><span class="player-text">{}</span>{tag}</td>"#,
        html_escape(&abbreviate_name(&slot.name))
    )
}

fn render_projection(projection: &Projection) -> String {
    match projection {
        Projection::Live { live, fixed } => format!(
            r#"{} <span class="static-proj">({})</span>"#,
            format_decimal(*live),
            format_decimal(*fixed)
        ),
        other => other.display(),
    }
}

fn render_points(points: &Points) -> String {
    match points {
        Points::Blank => "<td></td>".to_string(),
        other => format!(r#"<td class="points-col">{}</td>"#, other.display()),
    }
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Fantasy Basketball Weekly Matchups</title>
  <style>
    :root {
      --bg: #0a002a;
      --card: #10004d;
      --header: #07002a;
      --line: #1e0082;
      --badge: #1a0066;
      --badge-hover: #2d0099;
      --muted: #aaaaaa;
      --soft: #a8a8ff;
      --shadow: 0 4px 15px rgba(0, 0, 0, 0.5);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      padding: 20px;
      background-color: var(--bg);
      color: #ffffff;
      font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    }

    .container {
      max-width: 1200px;
      margin: 0 auto;
    }

    h1 {
      text-align: center;
      margin: 0 0 24px;
    }

    h4 {
      margin: 0;
      font-size: 1.2rem;
    }

    .empty {
      text-align: center;
      color: var(--muted);
    }

    .matchup-card {
      margin-bottom: 30px;
      border-radius: 10px;
      overflow: hidden;
      box-shadow: var(--shadow);
      background-color: var(--card);
    }

    .matchup-header {
      background-color: var(--header);
      padding: 15px;
      font-weight: bold;
    }

    .team-section {
      padding: 15px;
      border-bottom: 1px solid var(--line);
      cursor: pointer;
    }

    .team-row {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 16px;
    }

    .team.home {
      text-align: right;
    }

    .team-name {
      font-size: 1.25rem;
      font-weight: bold;
    }

    .team-record {
      font-size: 0.85rem;
      font-weight: normal;
      opacity: 0.8;
      margin-left: 0.5rem;
    }

    .team-stats {
      margin-top: 10px;
      display: flex;
      align-items: center;
      justify-content: space-between;
    }

    .team-stats .projection {
      font-size: 0.9rem;
      color: var(--muted);
    }

    .team-stats .points {
      font-size: 2rem;
      font-weight: bold;
    }

    .probability-bar {
      display: flex;
      height: 30px;
      margin: 15px 0;
      border-radius: 5px;
      overflow: hidden;
    }

    .progress-segment {
      height: 100%;
      text-align: center;
      line-height: 30px;
      white-space: nowrap;
    }

    .chevron {
      text-align: center;
      margin-top: 8px;
    }

    .details-content[hidden] {
      display: none;
    }

    .day-select {
      display: flex;
      justify-content: center;
      align-items: center;
      gap: 8px;
      margin: 16px auto;
    }

    select {
      background-color: var(--badge);
      border: 1px solid var(--badge-hover);
      color: #ffffff;
      border-radius: 5px;
      padding: 5px 8px;
    }

    .team-names-row,
    .player-details {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 16px;
      padding: 0 16px;
      text-align: center;
    }

    .player-details {
      padding: 16px;
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th,
    td {
      padding: 6px 4px;
      border-bottom: 1px solid var(--line);
      text-align: center;
    }

    .roster.away .player-name {
      text-align: left;
    }

    .roster.home .player-name {
      text-align: right;
    }

    .roster.home .player-name .injury-tag {
      margin-left: 0;
      margin-right: 5px;
      float: left;
    }

    .position-badge {
      background-color: var(--badge);
      border-radius: 4px;
      padding: 2px 6px;
      font-size: 0.8rem;
    }

    .bench-row,
    .ir-row {
      opacity: 0.75;
    }

    .static-proj {
      font-size: 0.8rem;
      color: var(--soft);
    }

    .points-col {
      font-weight: bold;
    }

    .day-total-row {
      background-color: var(--badge);
    }

    .no-data {
      color: var(--muted);
    }

    .injury-tag {
      display: inline-block;
      margin-left: 5px;
      padding: 2px 6px;
      font-size: 0.75rem;
      font-weight: bold;
      border-radius: 3px;
      background-color: #ff6b6b;
      color: #ffffff;
    }

    .injury-tag.out {
      background-color: #dc3545;
    }

    .injury-tag.dtd {
      background-color: #ffc107;
      color: #000000;
    }

    .injury-tag.questionable {
      background-color: #ff9800;
    }

    .injury-tag.probable {
      background-color: #17a2b8;
    }

    @media (max-width: 768px) {
      body {
        padding: 10px;
      }

      .team-names-row,
      .player-details {
        grid-template-columns: 1fr;
      }

      .team-stats .points {
        font-size: 1.5rem;
      }
    }
  </style>
</head>
<body>
  <main class="container">
    <h1>Fantasy Basketball Weekly Matchups</h1>
    {{MATCHUPS}}
  </main>

  <script>
    const setParam = (key, value) => {
      const url = new URL(window.location);
      if (value === null) {
        url.searchParams.delete(key);
      } else {
        url.searchParams.set(key, value);
      }
      window.history.replaceState({}, '', url);
    };

    const toggle = (card) => {
      const id = card.dataset.matchup;
      const details = card.querySelector('.details-content');
      const chevron = card.querySelector('.chevron');
      const open = details.hidden;
      details.hidden = !open;
      card.classList.toggle('open', open);
      chevron.innerHTML = open ? '&#9650;' : '&#9660;';
      setParam('open_' + id, open ? '1' : null);
    };

    const loadDay = async (card, day) => {
      const id = card.dataset.matchup;
      const params = new URLSearchParams({ ajax: '1', matchupId: id, day });
      const res = await fetch('/?' + params.toString());
      if (!res.ok) {
        throw new Error('Unable to load matchup ' + id);
      }
      const data = await res.json();
      card.querySelector('[data-tables]').innerHTML = data.html;
      setParam('day_' + id, day);
    };

    document.querySelectorAll('.matchup-card').forEach((card) => {
      card.querySelector('[data-toggle]').addEventListener('click', () => toggle(card));
      card.querySelector('[data-day-select]').addEventListener('change', (event) => {
        loadDay(card, event.target.value).catch((err) => console.error(err));
      });
    });
  </script>
</body>
</html>
"#;
