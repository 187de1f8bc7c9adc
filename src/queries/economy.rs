//! Side-by-side economy efficiency of two teams.

use crate::dataset::{columns, Dataset};
use crate::parsing::{parse_count_wins, parse_int};
use crate::stats::win_ratio;
use crate::table::{QueryReport, ResultTable};
use crate::teams::TeamDirectory;

/// Attempts and wins for one buy category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuyRecord {
    pub total: i64,
    pub wins: i64,
}

impl BuyRecord {
    fn add(&mut self, (total, wins): (i64, i64)) {
        self.total += total;
        self.wins += wins;
    }

    pub fn win_pct(&self) -> f64 {
        win_ratio(self.wins, self.total)
    }
}

/// Economy totals for one team across all of its rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EconomyTotals {
    pub pistol_won: i64,
    pub eco: BuyRecord,
    pub semi_eco: BuyRecord,
    pub semi_buy: BuyRecord,
    pub full_buy: BuyRecord,
}

impl EconomyTotals {
    /// Sum every economy row whose team code matches `code`
    /// (case-insensitive).
    pub fn accumulate(economy: &Dataset, code: &str) -> Self {
        let code = code.to_uppercase();
        let mut totals = EconomyTotals::default();
        let mut rows = 0usize;
        for r in economy.records() {
            if r.get_or(columns::ECON_TEAM, "").trim().to_uppercase() != code {
                continue;
            }
            rows += 1;
            totals.pistol_won += parse_int(r.get(columns::PISTOL_WON));
            totals.eco.add(parse_count_wins(r.get(columns::ECO)));
            totals.semi_eco.add(parse_count_wins(r.get(columns::SEMI_ECO)));
            totals.semi_buy.add(parse_count_wins(r.get(columns::SEMI_BUY)));
            totals.full_buy.add(parse_count_wins(r.get(columns::FULL_BUY)));
        }
        log::debug!("Economy rows for {}: {}", code, rows);
        totals
    }
}

/// Compare two teams given by display name or short code.
pub fn compare_economy(
    economy: &Dataset,
    teams: &TeamDirectory,
    team_a: &str,
    team_b: &str,
) -> QueryReport {
    let a = EconomyTotals::accumulate(economy, &teams.normalize(team_a));
    let b = EconomyTotals::accumulate(economy, &teams.normalize(team_b));

    let mut table = ResultTable::with_headers(
        format!("Economy efficiency: {} vs {}", team_a, team_b),
        vec!["Metric".to_string(), team_a.to_string(), team_b.to_string()],
    );
    table.push_row(vec![
        "Pistol won".to_string(),
        a.pistol_won.to_string(),
        b.pistol_won.to_string(),
    ]);
    let categories: [(&str, fn(&EconomyTotals) -> BuyRecord); 4] = [
        ("Eco win%", |t| t.eco),
        ("Semi-eco win%", |t| t.semi_eco),
        ("Semi-buy win%", |t| t.semi_buy),
        ("Full-buy win%", |t| t.full_buy),
    ];
    for (label, pick) in categories {
        table.push_row(vec![
            label.to_string(),
            format!("{:.1}%", pick(&a).win_pct()),
            format!("{:.1}%", pick(&b).win_pct()),
        ]);
    }
    QueryReport::from_table(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn economy() -> Dataset {
        Dataset::from_rows(
            &[
                "Team",
                "Pistol Won",
                "Eco (won)",
                "Semi-eco (won)",
                "Semi-buy (won)",
                "Full buy(won)",
            ],
            &[
                &["PRX", "2", "4(1)", "2(0)", "5(3)", "12(6)"],
                &["DRX", "1", "3(0)", "1(1)", "4(2)", "14(9)"],
                &[" prx ", "1", "4(2)", "3", "bad", "8(6)"],
            ],
        )
    }

    #[test]
    fn test_accumulate_sums_both_components() {
        let totals = EconomyTotals::accumulate(&economy(), "PRX");
        assert_eq!(totals.pistol_won, 3);
        assert_eq!(totals.eco, BuyRecord { total: 8, wins: 3 });
        assert_eq!(totals.semi_eco, BuyRecord { total: 5, wins: 0 });
        assert_eq!(totals.semi_buy, BuyRecord { total: 5, wins: 3 });
        assert_eq!(totals.full_buy, BuyRecord { total: 20, wins: 12 });
    }

    #[test]
    fn test_compare_normalizes_names() {
        let report = compare_economy(&economy(), &TeamDirectory::default(), "Paper Rex", "DRX");
        let table = &report.tables[0];
        assert_eq!(table.headers, vec!["Metric", "Paper Rex", "DRX"]);
        assert_eq!(table.rows[0], vec!["Pistol won", "3", "1"]);
        assert_eq!(table.rows[1], vec!["Eco win%", "37.5%", "0.0%"]);
        assert_eq!(table.rows[2], vec!["Semi-eco win%", "0.0%", "100.0%"]);
        assert_eq!(table.rows[4], vec!["Full-buy win%", "60.0%", "64.3%"]);
    }

    #[test]
    fn test_unknown_team_yields_zero_ratios() {
        let report = compare_economy(&economy(), &TeamDirectory::default(), "Nobody", "PRX");
        let table = &report.tables[0];
        assert_eq!(table.column("Nobody"), vec!["0", "0.0%", "0.0%", "0.0%", "0.0%"]);
    }
}
