//! Win rate on own picks, opponent picks and deciders for one team.

use crate::dataset::{columns, Dataset};
use crate::stats::win_ratio;
use crate::table::{Notice, QueryReport, ResultTable};
use crate::teams::TeamDirectory;
use std::collections::HashMap;

/// Who selected the map, from the queried team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickCategory {
    OwnPick,
    OpponentPick,
    Decider,
}

impl PickCategory {
    pub const ALL: [PickCategory; 3] = [
        PickCategory::OwnPick,
        PickCategory::OpponentPick,
        PickCategory::Decider,
    ];

    /// Classify a `picked_by` value. `"decider"` (any case) always wins,
    /// even if a team shares the name.
    pub fn classify(picked_by: &str, team: &str) -> Self {
        let picked_by = picked_by.trim().to_lowercase();
        if picked_by == "decider" {
            PickCategory::Decider
        } else if picked_by == team.trim().to_lowercase() {
            PickCategory::OwnPick
        } else {
            PickCategory::OpponentPick
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PickCategory::OwnPick => "Own pick",
            PickCategory::OpponentPick => "Opponent pick",
            PickCategory::Decider => "Decider",
        }
    }
}

/// One map that contributed to a category.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDetail {
    pub map: String,
    pub opponent: String,
    pub score: String,
    pub won: bool,
    pub picked_by: String,
    /// Series score of the match the map belongs to
    pub series_score: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickTally {
    pub wins: i64,
    pub total: i64,
    pub details: Vec<MapDetail>,
}

impl PickTally {
    pub fn win_pct(&self) -> f64 {
        win_ratio(self.wins, self.total)
    }
}

/// Opponent and series metadata for one of the team's matches.
#[derive(Debug, Clone)]
struct TeamMatch {
    /// The team's name as written in this match
    side: String,
    opponent: String,
    score: String,
    date: String,
}

/// Split `"A vs B"` into its two trimmed participants.
pub fn split_teams(teams: &str) -> Option<(&str, &str)> {
    let (a, b) = teams.split_once(" vs ")?;
    Some((a.trim(), b.trim()))
}

/// Matches of the team known by any of `names`, keyed by match id.
///
/// A match belongs to the team when one side of `"A vs B"` equals one of
/// the names (case-insensitive). Only when no match qualifies that way is a
/// side containing the first name accepted.
fn find_team_matches<'a>(overview: &'a Dataset, names: &[&str]) -> HashMap<&'a str, TeamMatch> {
    let lowered: Vec<String> = names.iter().map(|n| n.trim().to_lowercase()).collect();
    let exact = |side: &str| lowered.contains(&side.to_lowercase());
    let primary = lowered.first().cloned().unwrap_or_default();
    let contains = |side: &str| !primary.is_empty() && side.to_lowercase().contains(&primary);

    let scan = |is_team: &dyn Fn(&str) -> bool| {
        let mut found = HashMap::new();
        for m in overview.records() {
            let Some((a, b)) = split_teams(m.get_or(columns::TEAMS, "")) else {
                continue;
            };
            let (side, opponent) = if is_team(a) {
                (a, b)
            } else if is_team(b) {
                (b, a)
            } else {
                continue;
            };
            found.insert(
                m.get_or(columns::MATCH_ID, ""),
                TeamMatch {
                    side: side.to_string(),
                    opponent: opponent.to_string(),
                    score: m.get_or(columns::SCORE, "").to_string(),
                    date: m.get_or(columns::DATE, "").to_string(),
                },
            );
        }
        found
    };

    let found = scan(&exact);
    if !found.is_empty() {
        return found;
    }
    let found = scan(&contains);
    if !found.is_empty() {
        log::debug!("Matched {:?} by substring in {} matches", names.first(), found.len());
    }
    found
}

/// Per-category tallies for the team known by `names`, or `None` when the
/// team played no match in the overview table.
pub fn tally_pick_strategy(
    overview: &Dataset,
    maps: &Dataset,
    names: &[&str],
) -> Option<HashMap<PickCategory, PickTally>> {
    let team_matches = find_team_matches(overview, names);
    if team_matches.is_empty() {
        return None;
    }
    log::debug!("{:?} played {} matches", names.first(), team_matches.len());

    let mut tallies: HashMap<PickCategory, PickTally> = PickCategory::ALL
        .iter()
        .map(|&c| (c, PickTally::default()))
        .collect();

    for r in maps.records() {
        let Some(info) = team_matches.get(r.get_or(columns::MATCH_ID, "")) else {
            continue;
        };
        let picked_by = r.get_or(columns::PICKED_BY, "").trim();
        let won = r.get_or(columns::WINNER, "").trim().to_lowercase() == info.side.to_lowercase();

        let tally = tallies
            .entry(PickCategory::classify(picked_by, &info.side))
            .or_default();
        tally.total += 1;
        if won {
            tally.wins += 1;
        }
        tally.details.push(MapDetail {
            map: r.get_or(columns::MAP_NAME, "").to_string(),
            opponent: info.opponent.clone(),
            score: r.get_or(columns::SCORE, "").to_string(),
            won,
            picked_by: picked_by.to_string(),
            series_score: info.score.clone(),
            date: info.date.clone(),
        });
    }
    Some(tallies)
}

/// Win rate per pick category for a team given by display name or code.
pub fn pick_strategy_winrate(
    overview: &Dataset,
    maps: &Dataset,
    teams: &TeamDirectory,
    team: &str,
) -> QueryReport {
    if team.trim().is_empty() {
        return QueryReport::notice(Notice::MissingInput("team"));
    }
    let names = teams.names_for(team);
    let name_refs: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
    let team = teams.display_name(team);

    let Some(tallies) = tally_pick_strategy(overview, maps, &name_refs) else {
        return QueryReport::notice(Notice::TeamNotFound { team });
    };

    let mut summary = ResultTable::new(
        format!("Map win rate by pick for {}", team),
        &["Scenario", "Wins", "Total", "Win%"],
    );
    let mut report = QueryReport::default();
    let mut detail_tables = Vec::new();

    for category in PickCategory::ALL {
        let tally = &tallies[&category];
        summary.push_row(vec![
            category.label().to_string(),
            tally.wins.to_string(),
            tally.total.to_string(),
            format!("{:.1}%", tally.win_pct()),
        ]);

        if tally.total == 0 {
            continue;
        }
        let mut detail = ResultTable::new(
            format!(
                "{}: {} ({}/{} - {:.1}%)",
                team,
                category.label(),
                tally.wins,
                tally.total,
                tally.win_pct()
            ),
            &["Map", "Opponent", "Score", "Result", "Pick", "Date"],
        );
        for d in &tally.details {
            detail.push_row(vec![
                d.map.clone(),
                d.opponent.clone(),
                d.score.clone(),
                if d.won { "W" } else { "L" }.to_string(),
                d.picked_by.clone(),
                d.date.clone(),
            ]);
        }
        detail_tables.push(detail);
    }

    report.tables.push(summary);
    report.tables.extend(detail_tables);
    report
}
