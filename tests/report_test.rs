//! Integration tests for the report pipeline against fixture CSVs
//!
//! The fixtures under `tests/fixtures/data/` are a small slice of a
//! Champions-style event: eight players, four agents, five economy rows and
//! four series. The tests load them through the same `run_query` path the
//! CLI and menu use.

use champions_report::pipeline::{export_workbook, run_query, ExportConfig, Query, ReportConfig};
use champions_report::queries::pick_strategy_winrate;
use champions_report::{Dataset, Notice, TeamAlias, TeamDirectory};
use std::path::PathBuf;

fn fixtures() -> ReportConfig {
    // CSVs live under fixtures/data/, exercising the data/ fallback
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    ReportConfig::new(root)
}

fn run(query: Query) -> champions_report::QueryReport {
    run_query(&fixtures(), &query).expect("Failed to run query on fixtures")
}

#[test]
fn test_top_performance() {
    let report = run(Query::TopPerformance);
    let table = &report.tables[0];
    assert_eq!(
        table.column("Player"),
        vec!["aspas", "something", "Derke", "Ethan", "BuZz", "brawk", "f0rsakeN", "Boaster"]
    );
    assert_eq!(table.rows[0], vec!["1", "aspas", "MIBR", "1.25", "265.3", "74%"]);
}

#[test]
fn test_specialists_skip_unparseable_agent_lists() {
    let report = run(Query::Specialists {
        agent: "jett".to_string(),
    });
    let table = &report.tables[0];
    assert_eq!(table.column("Player"), vec!["aspas", "BuZz", "Derke", "something"]);
    assert_eq!(table.column("KAST"), vec!["74%", "73%", "72%", "70%"]);

    // Ethan's agents field is not a list, so he is nobody's specialist
    for agent in ["Sova", "Fade"] {
        let report = run(Query::Specialists {
            agent: agent.to_string(),
        });
        assert!(!report.tables[0].column("Player").contains(&"Ethan"));
    }

    let report = run(Query::Specialists {
        agent: "Clove".to_string(),
    });
    assert!(report.tables.is_empty());
    assert!(report.has_notice(&Notice::NoAgentPlayers {
        agent: "Clove".to_string()
    }));
}

#[test]
fn test_pickrate() {
    let report = run(Query::Pickrate {
        map: "Sunset".to_string(),
    });
    let table = &report.tables[0];
    assert_eq!(table.column("Agent (Sunset)"), vec!["Omen", "Sova", "Jett", "Neon"]);
    assert_eq!(table.column("Pickrate"), vec!["48.0%", "30.0%", "12.0%", "8.5%"]);
    assert!(report.has_notice(&Notice::WinRateUnavailable));

    let report = run(Query::Pickrate {
        map: "Icebox".to_string(),
    });
    assert!(report.tables.is_empty());
    assert_eq!(
        report.notices,
        vec![Notice::MapNotFound {
            map: "Icebox".to_string(),
            available: ["Ascent", "Bind", "Lotus", "Sunset"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }]
    );
}

#[test]
fn test_economy() {
    let report = run(Query::Economy {
        team_a: "Paper Rex".to_string(),
        team_b: "DRX".to_string(),
    });
    let table = &report.tables[0];
    assert_eq!(
        table.column("Paper Rex"),
        vec!["3", "40.0%", "33.3%", "44.4%", "50.0%"]
    );
    assert_eq!(table.column("DRX"), vec!["1", "0.0%", "100.0%", "33.3%", "60.0%"]);

    let report = run(Query::Economy {
        team_a: "PRX".to_string(),
        team_b: "Sentinels".to_string(),
    });
    let table = &report.tables[0];
    assert_eq!(table.column("PRX")[0], "3");
    assert_eq!(
        table.column("Sentinels"),
        vec!["0", "0.0%", "0.0%", "0.0%", "0.0%"]
    );
}

#[test]
fn test_adaptive_players() {
    let report = run(Query::Adaptive);
    let table = &report.tables[0];
    assert_eq!(table.rows, vec![vec!["something", "PRX", "66", "30%"]]);
}

#[test]
fn test_pick_strategy() {
    let report = run(Query::PickStrategy {
        team: "PRX".to_string(),
    });
    let summary = &report.tables[0];
    assert_eq!(summary.rows[0], vec!["Own pick", "1", "2", "50.0%"]);
    assert_eq!(summary.rows[1], vec!["Opponent pick", "0", "2", "0.0%"]);
    assert_eq!(summary.rows[2], vec!["Decider", "1", "1", "100.0%"]);

    let details = &report.tables[1..];
    assert_eq!(details.len(), 3);
    assert_eq!(details[0].column("Map"), vec!["Corrode", "Haven"]);
    assert_eq!(details[0].column("Result"), vec!["L", "W"]);
    assert_eq!(details[1].column("Opponent"), vec!["DRX", "Team Heretics"]);
    assert_eq!(details[2].column("Pick"), vec!["decider"]);

    let report = run(Query::PickStrategy {
        team: "Sentinels".to_string(),
    });
    assert_eq!(
        report.notices,
        vec![Notice::TeamNotFound {
            team: "Sentinels".to_string()
        }]
    );
}

#[test]
fn test_pick_strategy_single_series() {
    let overview = Dataset::from_rows(
        &["match_id", "teams", "score", "date"],
        &[&["m1", "A vs B", "2-0", "2025-01-01"]],
    );
    let maps = Dataset::from_rows(
        &["match_id", "map_name", "winner", "picked_by", "score"],
        &[
            &["m1", "Ascent", "A", "A", "13-3"],
            &["m1", "Bind", "A", "decider", "13-11"],
        ],
    );
    let teams = TeamDirectory::new(vec![TeamAlias::new("Alpha", "ALP")]);
    let report = pick_strategy_winrate(&overview, &maps, &teams, "A");
    let summary = &report.tables[0];
    assert_eq!(
        summary.rows,
        vec![
            vec!["Own pick", "1", "1", "100.0%"],
            vec!["Opponent pick", "0", "0", "0.0%"],
            vec!["Decider", "1", "1", "100.0%"],
        ]
    );
}

#[test]
fn test_final_ranking() {
    let report = run(Query::Ranking);
    let table = &report.tables[0];
    assert_eq!(table.rows.len(), 16);

    let row = |team: &str| {
        table
            .rows
            .iter()
            .find(|r| r[1] == team)
            .cloned()
            .unwrap_or_else(|| panic!("{} missing from ranking", team))
    };
    assert_eq!(row("NRG")[3..5], ["1-0", "3-2"]);
    assert_eq!(row("FNATIC")[3..5], ["1-1", "5-4"]);
    assert_eq!(row("DRX")[3..5], ["1-1", "3-3"]);
    assert_eq!(row("Team Heretics")[3..5], ["0-1", "1-2"]);
    assert_eq!(
        row("Paper Rex"),
        vec![
            "4th",
            "Paper Rex",
            "Eliminated in Lower Round 3 by DRX (2-0)",
            "1-1",
            "2-3",
            "1.15",
            "240.3",
            "71%"
        ]
    );
    // MIBR has players but no series in the fixtures
    assert_eq!(row("MIBR")[3..], ["0-0", "0-0", "1.25", "265.3", "74%"]);
}

#[test]
fn test_rendered_report() {
    let text = run(Query::TopPerformance).render();
    assert!(text.starts_with("Top 10 players by overall performance\n+------+"));
    assert!(text.contains("| 1    | aspas     | MIBR | 1.25   | 265.3 | 74%  |"));
}

#[test]
fn test_export_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.xlsx");
    let mut export = ExportConfig::new(&output);
    export.queries.push(Query::Pickrate {
        map: "Nowhere".to_string(),
    });
    export.queries.push(Query::PickStrategy {
        team: "Paper Rex".to_string(),
    });

    let summary = export_workbook(&fixtures(), &export).unwrap();
    // 3 default tables + 0 pickrate tables + 4 pick strategy tables
    assert!(summary.starts_with("Wrote 7 tables from 5 reports"));
    let meta = std::fs::metadata(&output).unwrap();
    assert!(meta.len() > 0);
}
