//! Analytical queries over the tournament tables.
//!
//! Each query is a pure function from loaded [`Dataset`]s (plus arguments)
//! to a [`QueryReport`]. Queries never fail for data-quality reasons:
//! unparseable numbers read as zero, unknown lookups end the query early
//! with a [`Notice`](crate::table::Notice).

pub mod adaptive;
pub mod economy;
pub mod performance;
pub mod pick_strategy;
pub mod pickrate;
pub mod ranking;
pub mod specialists;

pub use adaptive::adaptive_players;
pub use economy::compare_economy;
pub use performance::top_performance;
pub use pick_strategy::pick_strategy_winrate;
pub use pickrate::agent_pickrate_on_map;
pub use ranking::final_ranking;
pub use specialists::agent_specialists;

use crate::dataset::{columns, Dataset, Record};
use crate::parsing::{parse_float, parse_percent};
use std::cmp::Ordering;

/// Rating, ACS and KAST of one player row, parsed once for sorting.
#[derive(Debug, Clone)]
pub(crate) struct ScoredPlayer<'a> {
    pub record: &'a Record,
    pub rating: f64,
    pub acs: f64,
    pub kast: f64,
}

impl<'a> ScoredPlayer<'a> {
    pub fn new(record: &'a Record) -> Self {
        ScoredPlayer {
            record,
            rating: parse_float(record.get(columns::RATING)),
            acs: parse_float(record.get(columns::ACS)),
            kast: parse_percent(record.get(columns::KAST)),
        }
    }

    pub fn name(&self) -> &str {
        self.record.get_or(columns::PLAYER_NAME, "?")
    }

    pub fn team(&self) -> &str {
        self.record.get_or(columns::TEAM, "?")
    }
}

pub(crate) fn score_players(players: &Dataset) -> Vec<ScoredPlayer<'_>> {
    players.records().iter().map(ScoredPlayer::new).collect()
}

/// Descending lexicographic comparison of sort keys, a total order even with
/// NaN. Pair with a stable sort so equal keys keep their input order.
pub(crate) fn compare_desc(a: &[f64], b: &[f64]) -> Ordering {
    b.iter()
        .zip(a)
        .map(|(x, y)| x.total_cmp(y))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}
