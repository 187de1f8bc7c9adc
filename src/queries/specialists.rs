//! Best players on a given agent.
//!
//! Per-agent statistics are not in the player table, so specialists are
//! ranked by their overall KAST (then rating, then ACS) among the players
//! whose agent pool includes the requested agent.

use super::{compare_desc, ScoredPlayer};
use crate::dataset::{columns, Dataset, Record};
use crate::parsing::parse_string_list;
use crate::table::{Notice, QueryReport, ResultTable};

/// Number of specialists listed per agent.
pub const SPECIALIST_LIMIT: usize = 5;

/// Lowercased agent names from a player's `agents` field. A missing or
/// malformed field yields an empty pool.
fn agent_pool(record: &Record) -> Vec<String> {
    let raw = record.get(columns::AGENTS).unwrap_or("");
    if raw.trim().is_empty() {
        return Vec::new();
    }
    match parse_string_list(raw) {
        Some(agents) => agents.iter().map(|a| a.to_lowercase()).collect(),
        None => {
            log::debug!(
                "Unparseable agent list for {}: {:?}",
                record.get_or(columns::PLAYER_NAME, "?"),
                raw
            );
            Vec::new()
        }
    }
}

pub fn agent_specialists(players: &Dataset, agent: &str, limit: usize) -> QueryReport {
    let target = agent.trim().to_lowercase();
    if target.is_empty() {
        return QueryReport::notice(Notice::MissingInput("agent"));
    }

    let mut candidates: Vec<ScoredPlayer> = players
        .records()
        .iter()
        .filter(|r| agent_pool(r).contains(&target))
        .map(ScoredPlayer::new)
        .collect();

    if candidates.is_empty() {
        return QueryReport::notice(Notice::NoAgentPlayers {
            agent: agent.to_string(),
        });
    }

    candidates.sort_by(|a, b| compare_desc(&[a.kast, a.rating, a.acs], &[b.kast, b.rating, b.acs]));

    let mut table = ResultTable::new(
        format!("Top {} specialists: {}", limit, agent.trim()),
        &["Rank", "Player", "Team", "KAST", "Rating", "ACS"],
    );
    for (i, p) in candidates.iter().take(limit).enumerate() {
        table.push_row(vec![
            (i + 1).to_string(),
            p.name().to_string(),
            p.team().to_string(),
            format!("{:.0}%", p.kast),
            format!("{:.2}", p.rating),
            format!("{:.1}", p.acs),
        ]);
    }
    QueryReport::from_table(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADERS: &[&str] = &["player_name", "team", "rating", "acs", "kast", "agents"];

    fn players() -> Dataset {
        Dataset::from_rows(
            HEADERS,
            &[
                &["alfajer", "FNC", "1.10", "220", "74%", "['Neon', 'Killjoy']"],
                &["Derke", "FNC", "1.20", "240", "70%", "['Jett', 'Raze']"],
                &["aspas", "MIBR", "1.30", "260", "70%", "['jett']"],
                &["broken", "T1", "2.00", "300", "90%", "Jett, Raze"],
                &["nobody", "T1", "2.00", "300", "90%", ""],
            ],
        )
    }

    #[test]
    fn test_kast_primary_then_rating() {
        let report = agent_specialists(&players(), "JETT", SPECIALIST_LIMIT);
        let table = &report.tables[0];
        // equal KAST, rating breaks the tie
        assert_eq!(table.column("Player"), vec!["aspas", "Derke"]);
        assert_eq!(table.rows[0], vec!["1", "aspas", "MIBR", "70%", "1.30", "260.0"]);
    }

    #[test]
    fn test_unparseable_agent_list_is_excluded() {
        for agent in ["Jett", "Raze", "Neon"] {
            let report = agent_specialists(&players(), agent, SPECIALIST_LIMIT);
            for table in &report.tables {
                assert!(!table.column("Player").contains(&"broken"));
            }
        }
    }

    #[test]
    fn test_no_candidates() {
        let report = agent_specialists(&players(), "Viper", SPECIALIST_LIMIT);
        assert!(report.tables.is_empty());
        assert_eq!(
            report.notices,
            vec![Notice::NoAgentPlayers {
                agent: "Viper".to_string()
            }]
        );

        let report = agent_specialists(&players(), "  ", SPECIALIST_LIMIT);
        assert_eq!(report.notices, vec![Notice::MissingInput("agent")]);
    }

    #[test]
    fn test_non_finite_kast_does_not_break_the_sort() {
        let rows: Vec<Vec<String>> = (0..200)
            .map(|i| {
                let kast = if i % 7 == 0 {
                    "NaN%".to_string()
                } else {
                    format!("{}%", 50 + i % 40)
                };
                vec![
                    format!("p{}", i),
                    "T1".to_string(),
                    "1.0".to_string(),
                    "200".to_string(),
                    kast,
                    "['Jett']".to_string(),
                ]
            })
            .collect();
        let row_refs: Vec<Vec<&str>> = rows
            .iter()
            .map(|r| r.iter().map(|s| s.as_str()).collect())
            .collect();
        let slices: Vec<&[&str]> = row_refs.iter().map(|r| r.as_slice()).collect();
        let players = Dataset::from_rows(HEADERS, &slices);

        let report = agent_specialists(&players, "Jett", SPECIALIST_LIMIT);
        let table = &report.tables[0];
        assert_eq!(table.column("KAST"), vec!["89%", "89%", "89%", "89%", "88%"]);
    }

    #[test]
    fn test_limit() {
        let report = agent_specialists(&players(), "jett", 1);
        assert_eq!(report.tables[0].rows.len(), 1);
    }
}
