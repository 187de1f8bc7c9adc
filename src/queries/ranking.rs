//! Final tournament standings enriched with series, map and player stats.
//!
//! Placements come from the official Champions 2025 bracket, which is not
//! present in any of the tables; everything else is derived from the data.

use super::pick_strategy::split_teams;
use crate::dataset::{columns, Dataset, Record};
use crate::parsing::{parse_float, parse_percent};
use crate::table::{QueryReport, ResultTable};
use crate::teams::TeamDirectory;
use std::collections::HashMap;

/// One line of the official bracket result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketEntry {
    /// Placement label; empty for teams sharing the placement above
    pub position: &'static str,
    /// Display name as used in the match tables
    pub team: &'static str,
    pub stage: &'static str,
}

const fn entry(position: &'static str, team: &'static str, stage: &'static str) -> BracketEntry {
    BracketEntry {
        position,
        team,
        stage,
    }
}

pub const CHAMPIONS_2025_BRACKET: &[BracketEntry] = &[
    entry("1st", "NRG", "Won the Grand Final"),
    entry("2nd", "FNATIC", "Lost the Grand Final to NRG (3-2)"),
    entry("3rd", "DRX", "Lost the Lower Final to FNATIC (3-1)"),
    entry("4th", "Paper Rex", "Eliminated in Lower Round 3 by DRX (2-0)"),
    entry("5th-6th", "MIBR", "Eliminated in Lower Round 2 by DRX (2-1)"),
    entry("", "Team Heretics", "Eliminated in Lower Round 2 by Paper Rex (2-1)"),
    entry("7th-8th", "G2 Esports", "Eliminated in Lower Round 1 by DRX (2-1)"),
    entry("", "GIANTX", "Eliminated in Lower Round 1 by Team Heretics (2-1)"),
    entry("9th-12th", "Team Liquid", "Eliminated in Group Stage (Decider C) by DRX (2-0)"),
    entry("", "Xi Lai Gaming", "Eliminated in Group Stage (Decider A) by GIANTX (2-0)"),
    entry("", "T1", "Eliminated in Group Stage (Decider D) by G2 Esports (2-0)"),
    entry("", "Rex Regum Qeon", "Eliminated in Group Stage (Decider B) by MIBR (2-0)"),
    entry(
        "13th-16th",
        "Sentinels",
        "Eliminated in Group Stage (Elimination A) by Xi Lai Gaming (2-1)",
    ),
    entry("", "EDward Gaming", "Eliminated in Group Stage (Elimination C) by Team Liquid (2-1)"),
    entry(
        "",
        "Bilibili Gaming",
        "Eliminated in Group Stage (Elimination B) by Rex Regum Qeon (2-1)",
    ),
    entry(
        "",
        "Dragon Ranger Gaming",
        "Eliminated in Group Stage (Elimination D) by G2 Esports (2-0)",
    ),
];

/// Derived record for one bracket team.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamStanding {
    pub series_wins: u32,
    pub series_losses: u32,
    pub map_wins: u32,
    pub map_losses: u32,
    pub player_count: u32,
    rating_sum: f64,
    acs_sum: f64,
    kast_sum: f64,
}

impl TeamStanding {
    fn add_player(&mut self, player: &Record) {
        self.rating_sum += parse_float(player.get(columns::RATING));
        self.acs_sum += parse_float(player.get(columns::ACS));
        self.kast_sum += parse_percent(player.get(columns::KAST));
        self.player_count += 1;
    }

    fn average(&self, sum: f64) -> f64 {
        if self.player_count == 0 {
            0.0
        } else {
            sum / self.player_count as f64
        }
    }

    pub fn avg_rating(&self) -> f64 {
        self.average(self.rating_sum)
    }

    pub fn avg_acs(&self) -> f64 {
        self.average(self.acs_sum)
    }

    pub fn avg_kast(&self) -> f64 {
        self.average(self.kast_sum)
    }
}

/// Compute a standing for every team in `bracket`.
pub fn compute_standings<'b>(
    bracket: &'b [BracketEntry],
    overview: &Dataset,
    maps: &Dataset,
    players: &Dataset,
    teams: &TeamDirectory,
) -> HashMap<&'b str, TeamStanding> {
    let mut standings: HashMap<&str, TeamStanding> = bracket
        .iter()
        .map(|e| (e.team, TeamStanding::default()))
        .collect();

    let mut maps_by_match: HashMap<&str, Vec<&Record>> = HashMap::new();
    for r in maps.records() {
        maps_by_match
            .entry(r.get_or(columns::MATCH_ID, ""))
            .or_default()
            .push(r);
    }

    // Match ids are unique per overview row; the first row wins otherwise.
    let mut participants: HashMap<&str, (&str, &str)> = HashMap::new();
    for m in overview.records() {
        if let Some(pair) = split_teams(m.get_or(columns::TEAMS, "")) {
            participants
                .entry(m.get_or(columns::MATCH_ID, ""))
                .or_insert(pair);
        }
    }

    // Series between two bracket teams go to whoever won more maps. On a
    // tie the second-listed team is credited.
    for m in overview.records() {
        let Some((t1, t2)) = split_teams(m.get_or(columns::TEAMS, "")) else {
            continue;
        };
        if !standings.contains_key(t1) || !standings.contains_key(t2) {
            continue;
        }
        let match_maps = maps_by_match
            .get(m.get_or(columns::MATCH_ID, ""))
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        let wins_for = |team: &str| {
            match_maps
                .iter()
                .filter(|r| r.get_or(columns::WINNER, "").trim() == team)
                .count()
        };
        let (winner, loser) = if wins_for(t1) > wins_for(t2) {
            (t1, t2)
        } else {
            (t2, t1)
        };
        if let Some(s) = standings.get_mut(winner) {
            s.series_wins += 1;
        }
        if let Some(s) = standings.get_mut(loser) {
            s.series_losses += 1;
        }
    }

    for r in maps.records() {
        let winner = r.get_or(columns::WINNER, "").trim();
        if let Some(s) = standings.get_mut(winner) {
            s.map_wins += 1;
        }
        let Some(&(t1, t2)) = participants.get(r.get_or(columns::MATCH_ID, "")) else {
            continue;
        };
        let loser = if winner == t1 { t2 } else { t1 };
        if let Some(s) = standings.get_mut(loser) {
            s.map_losses += 1;
        }
    }

    for p in players.records() {
        let code = p.get_or(columns::TEAM, "");
        let Some(full_name) = teams.display_name_for_code(code) else {
            continue;
        };
        if let Some(s) = standings.get_mut(full_name) {
            s.add_player(p);
        }
    }

    standings
}

/// Render the standings table in bracket order.
pub fn ranking_table(
    bracket: &[BracketEntry],
    standings: &HashMap<&str, TeamStanding>,
) -> ResultTable {
    let mut table = ResultTable::new(
        "Final ranking",
        &[
            "Position",
            "Team",
            "Elimination stage",
            "Series (W-L)",
            "Maps (W-L)",
            "Avg rating",
            "Avg ACS",
            "Avg KAST",
        ],
    );
    for e in bracket {
        let s = standings.get(e.team).cloned().unwrap_or_default();
        table.push_row(vec![
            e.position.to_string(),
            e.team.to_string(),
            e.stage.to_string(),
            format!("{}-{}", s.series_wins, s.series_losses),
            format!("{}-{}", s.map_wins, s.map_losses),
            format!("{:.2}", s.avg_rating()),
            format!("{:.1}", s.avg_acs()),
            format!("{:.0}%", s.avg_kast()),
        ]);
    }
    table
}

pub fn final_ranking(
    overview: &Dataset,
    maps: &Dataset,
    players: &Dataset,
    teams: &TeamDirectory,
) -> QueryReport {
    let standings = compute_standings(CHAMPIONS_2025_BRACKET, overview, maps, players, teams);
    QueryReport::from_table(ranking_table(CHAMPIONS_2025_BRACKET, &standings))
}
