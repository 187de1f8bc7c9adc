//! Overall top performers, ranked by rating, then ACS, then KAST.

use super::{compare_desc, score_players};
use crate::dataset::Dataset;
use crate::table::{QueryReport, ResultTable};

/// Number of players listed by the overall ranking.
pub const TOP_PERFORMANCE_LIMIT: usize = 10;

pub fn top_performance(players: &Dataset, limit: usize) -> QueryReport {
    let mut scored = score_players(players);
    scored.sort_by(|a, b| compare_desc(&[a.rating, a.acs, a.kast], &[b.rating, b.acs, b.kast]));

    let mut table = ResultTable::new(
        format!("Top {} players by overall performance", limit),
        &["Rank", "Player", "Team", "Rating", "ACS", "KAST"],
    );
    for (i, p) in scored.iter().take(limit).enumerate() {
        table.push_row(vec![
            (i + 1).to_string(),
            p.name().to_string(),
            p.team().to_string(),
            format!("{:.2}", p.rating),
            format!("{:.1}", p.acs),
            format!("{:.0}%", p.kast),
        ]);
    }
    QueryReport::from_table(table)
}
