//! Interactive numbered menu over the reports.

use crate::pipeline::{list_teams, run_query, Query, ReportConfig};
use anyhow::Result;
use std::io::{BufRead, Write};

const MENU: &str = "\
1. Top 10 players by overall performance
2. Top 5 specialists for an agent
3. Agent pick rate on a map
4. Compare team economies
5. Adaptive players (first kills and clutches)
6. Map win rate by pick for a team
7. Final team ranking with series, maps and average performance
8. List known teams
9. Exit";

/// Read one trimmed line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{}: ", label)?;
    out.flush()?;
    read_line(input)
}

/// Run the menu until the user picks "Exit" or input ends.
///
/// A query that fails to load its data is reported and the loop continues.
pub fn run_menu<R: BufRead, W: Write>(
    config: &ReportConfig,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        writeln!(out, "{}", MENU)?;
        let Some(choice) = prompt(input, out, "Choose an option")? else {
            return Ok(());
        };

        let query = match choice.as_str() {
            "1" => Query::TopPerformance,
            "2" => match prompt(input, out, "Agent")? {
                Some(agent) => Query::Specialists { agent },
                None => return Ok(()),
            },
            "3" => match prompt(input, out, "Map")? {
                Some(map) => Query::Pickrate { map },
                None => return Ok(()),
            },
            "4" => {
                let Some(team_a) = prompt(input, out, "Team A")? else {
                    return Ok(());
                };
                let Some(team_b) = prompt(input, out, "Team B")? else {
                    return Ok(());
                };
                Query::Economy { team_a, team_b }
            }
            "5" => Query::Adaptive,
            "6" => match prompt(input, out, "Team")? {
                Some(team) => Query::PickStrategy { team },
                None => return Ok(()),
            },
            "7" => Query::Ranking,
            "8" => {
                write!(out, "{}", list_teams(&config.teams).render())?;
                if !pause(input, out)? {
                    return Ok(());
                }
                continue;
            }
            "9" => return Ok(()),
            _ => {
                writeln!(out, "Invalid option.")?;
                continue;
            }
        };

        match run_query(config, &query) {
            Ok(report) => write!(out, "{}", report.render())?,
            Err(e) => {
                log::error!("{:?} failed: {:#}", query, e);
                writeln!(out, "Error: {:#}", e)?;
            }
        }
        if !pause(input, out)? {
            return Ok(());
        }
    }
}

/// Wait for Enter; `false` when input has ended.
fn pause<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<bool> {
    writeln!(out, "\nPress Enter to continue...")?;
    out.flush()?;
    Ok(read_line(input)?.is_some())
}
