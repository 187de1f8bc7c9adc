//! Players in the upper quartile for both first kills and clutch rate.

use crate::dataset::{columns, Dataset};
use crate::parsing::{parse_int, parse_percent};
use crate::stats::upper_quartile;
use crate::table::{Notice, QueryReport, ResultTable};
use std::collections::HashSet;

pub fn adaptive_players(players: &Dataset) -> QueryReport {
    if players.is_empty() {
        return QueryReport::notice(Notice::NoPlayerData);
    }

    let first_kills: Vec<i64> = players
        .records()
        .iter()
        .map(|r| parse_int(r.get(columns::FIRST_KILLS)))
        .collect();
    let clutch: Vec<f64> = players
        .records()
        .iter()
        .map(|r| parse_percent(r.get(columns::CLUTCH_PERCENT)))
        .collect();

    let fk_values: Vec<f64> = first_kills.iter().map(|&fk| fk as f64).collect();
    let fk_threshold = upper_quartile(&fk_values);
    let clutch_threshold = upper_quartile(&clutch);
    log::debug!(
        "Adaptive thresholds: first kills >= {:.2}, clutch >= {:.2}%",
        fk_threshold,
        clutch_threshold
    );

    let name_of = |i: usize| players.records()[i].get_or(columns::PLAYER_NAME, "?");
    let high_fk: HashSet<&str> = (0..players.len())
        .filter(|&i| fk_values[i] >= fk_threshold)
        .map(name_of)
        .collect();
    let high_clutch: HashSet<&str> = (0..players.len())
        .filter(|&i| clutch[i] >= clutch_threshold)
        .map(name_of)
        .collect();

    let mut table = ResultTable::new(
        "Adaptive players (first kills and clutch rate in the upper quartile)",
        &["Player", "Team", "First Kills", "Clutch%"],
    );
    for (i, r) in players.records().iter().enumerate() {
        let name = name_of(i);
        if high_fk.contains(name) && high_clutch.contains(name) {
            table.push_row(vec![
                name.to_string(),
                r.get_or(columns::TEAM, "?").to_string(),
                first_kills[i].to_string(),
                format!("{:.0}%", clutch[i]),
            ]);
        }
    }
    QueryReport::from_table(table)
}
