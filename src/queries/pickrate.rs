//! Agent pick rates on one map.
//!
//! The agent table has one pick-rate column per map. Map names are whatever
//! columns the table carries besides the agent name and total utilization,
//! so they are discovered from the header row on every call.

use crate::dataset::{columns, Dataset};
use crate::parsing::parse_float;
use crate::table::{Notice, QueryReport, ResultTable};

/// Map columns of the agent table, in header order.
pub fn available_maps(agents: &Dataset) -> Vec<String> {
    if agents.is_empty() {
        return Vec::new();
    }
    agents
        .headers()
        .iter()
        .filter(|h| {
            let h = h.to_lowercase();
            h != columns::AGENT_NAME && h != columns::TOTAL_UTILIZATION
        })
        .cloned()
        .collect()
}

pub fn agent_pickrate_on_map(agents: &Dataset, map: &str) -> QueryReport {
    let requested = map.trim();
    if requested.is_empty() {
        return QueryReport::notice(Notice::MissingInput("map"));
    }

    let maps = available_maps(agents);
    let column = match maps.iter().find(|m| m.as_str() == requested) {
        Some(column) => column,
        None => match maps.iter().find(|m| m.eq_ignore_ascii_case(requested)) {
            Some(column) => column,
            None => {
                return QueryReport::notice(Notice::MapNotFound {
                    map: requested.to_string(),
                    available: maps,
                })
            }
        },
    };

    let mut lines: Vec<(&str, f64)> = agents
        .records()
        .iter()
        .map(|r| {
            (
                r.get_or(columns::AGENT_NAME, "?"),
                parse_float(r.get(column)),
            )
        })
        .collect();
    lines.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut table = ResultTable::with_headers(
        format!("Agent pick rate on {}", column),
        vec![format!("Agent ({})", column), "Pickrate".to_string()],
    );
    for (agent, pick) in lines {
        table.push_row(vec![agent.to_string(), format!("{:.1}%", pick)]);
    }

    let mut report = QueryReport::from_table(table);
    report.notices.push(Notice::WinRateUnavailable);
    report
}
