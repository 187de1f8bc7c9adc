//! Champions Report - tournament statistics from the command line
//!
//! Runs one report over the tournament CSV exports and prints it as text
//! tables, or drives the interactive menu, or packages several reports into
//! an Excel workbook.

use anyhow::{bail, Context, Result};
use champions_report::menu::run_menu;
use champions_report::pipeline::{
    export_workbook, list_teams, load_teams, run_query, ExportConfig, Query, ReportConfig,
};
use clap::{Parser, Subcommand};
use std::io::{stdin, stdout};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "champions-report")]
#[command(about = "Rankings, pick/ban breakdowns and economy comparisons for a tournament")]
struct Cli {
    /// Directory holding the CSV exports (directly or under data/)
    #[arg(long, global = true, env = "CHAMPIONS_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// CSV with `name,code` columns replacing the built-in team table
    #[arg(long, global = true, env = "CHAMPIONS_TEAMS")]
    teams: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Top 10 players by rating, then ACS, then KAST
    TopPlayers,

    /// Top 5 players on an agent, ranked by KAST
    Specialists {
        /// Agent name (case-insensitive)
        #[arg(short, long)]
        agent: String,
    },

    /// Agent pick rates on one map
    Pickrate {
        /// Map name, as it appears in the agent table header
        #[arg(short, long)]
        map: String,
    },

    /// Compare eco, semi-eco, semi-buy and full-buy win rates of two teams
    Economy {
        /// First team (full name or code)
        team_a: String,
        /// Second team (full name or code)
        team_b: String,
    },

    /// Players in the upper quartile for both first kills and clutch rate
    Adaptive,

    /// Map win rate on own picks, opponent picks and deciders
    PickStrategy {
        /// Team (full name or code)
        #[arg(short, long)]
        team: String,
    },

    /// Final bracket placements with series, maps and average performance
    Ranking,

    /// List the known team names and codes
    Teams,

    /// Interactive numbered menu
    Menu,

    /// Write several reports into an Excel workbook.
    ///
    /// Always includes the top players, adaptive players and final ranking;
    /// the options below add the reports that need an argument.
    Export {
        /// Output xlsx file
        #[arg(short, long)]
        output: PathBuf,

        /// Also include the specialists report for this agent
        #[arg(long)]
        agent: Option<String>,

        /// Also include the pick rate report for this map
        #[arg(long)]
        map: Option<String>,

        /// Also include an economy comparison, given as "TEAM_A,TEAM_B"
        #[arg(long, value_delimiter = ',')]
        economy: Option<Vec<String>>,

        /// Also include the pick strategy report for this team
        #[arg(long)]
        team: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let teams = load_teams(cli.teams.as_deref()).context("Failed to load team table")?;
    let config = ReportConfig::new(&cli.data_dir).with_teams(teams);

    let query = match cli.command {
        Commands::TopPlayers => Query::TopPerformance,
        Commands::Specialists { agent } => Query::Specialists { agent },
        Commands::Pickrate { map } => Query::Pickrate { map },
        Commands::Economy { team_a, team_b } => Query::Economy { team_a, team_b },
        Commands::Adaptive => Query::Adaptive,
        Commands::PickStrategy { team } => Query::PickStrategy { team },
        Commands::Ranking => Query::Ranking,
        Commands::Teams => {
            print!("{}", list_teams(&config.teams).render());
            return Ok(());
        }
        Commands::Menu => {
            let mut input = stdin().lock();
            let mut output = stdout().lock();
            return run_menu(&config, &mut input, &mut output);
        }
        Commands::Export {
            output,
            agent,
            map,
            economy,
            team,
        } => {
            let mut export = ExportConfig::new(output);
            if let Some(agent) = agent {
                export.queries.push(Query::Specialists { agent });
            }
            if let Some(map) = map {
                export.queries.push(Query::Pickrate { map });
            }
            match economy.as_deref() {
                None => {}
                Some([team_a, team_b]) => export.queries.push(Query::Economy {
                    team_a: team_a.clone(),
                    team_b: team_b.clone(),
                }),
                Some(other) => bail!("--economy takes two teams, got {}", other.len()),
            }
            if let Some(team) = team {
                export.queries.push(Query::PickStrategy { team });
            }
            let summary = export_workbook(&config, &export)?;
            eprintln!("{}", summary);
            return Ok(());
        }
    };

    eprintln!("Reading data from {}", config.data.root().display());
    let report = run_query(&config, &query)?;
    print!("{}", report.render());
    Ok(())
}
