//! Pipeline functions for programmatic use by the CLI and the interactive
//! menu.
//!
//! Each call reloads the CSV tables it needs from the data directory, runs
//! one query and returns its structured report. Loading problems are
//! errors; data-quality problems are notices inside the report.

use crate::dataset::{DataDir, DatasetKind};
use crate::queries::performance::TOP_PERFORMANCE_LIMIT;
use crate::queries::specialists::SPECIALIST_LIMIT;
use crate::queries::{
    adaptive_players, agent_pickrate_on_map, agent_specialists, compare_economy, final_ranking,
    pick_strategy_winrate, top_performance,
};
use crate::table::{QueryReport, ResultTable};
use crate::teams::TeamDirectory;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Where the tables live and which team directory to resolve names with.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub data: DataDir,
    pub teams: TeamDirectory,
}

impl ReportConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        ReportConfig {
            data: DataDir::new(data_dir),
            teams: TeamDirectory::default(),
        }
    }

    pub fn with_teams(mut self, teams: TeamDirectory) -> Self {
        self.teams = teams;
        self
    }
}

/// One of the available reports, with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    TopPerformance,
    Specialists { agent: String },
    Pickrate { map: String },
    Economy { team_a: String, team_b: String },
    Adaptive,
    PickStrategy { team: String },
    Ranking,
}

/// Load the inputs of `query` and run it.
pub fn run_query(config: &ReportConfig, query: &Query) -> Result<QueryReport> {
    log::debug!("Running {:?}", query);
    let data = &config.data;
    let report = match query {
        Query::TopPerformance => {
            let players = data.load(DatasetKind::Players)?;
            top_performance(&players, TOP_PERFORMANCE_LIMIT)
        }
        Query::Specialists { agent } => {
            let players = data.load(DatasetKind::Players)?;
            agent_specialists(&players, agent, SPECIALIST_LIMIT)
        }
        Query::Pickrate { map } => {
            let agents = data.load(DatasetKind::Agents)?;
            agent_pickrate_on_map(&agents, map)
        }
        Query::Economy { team_a, team_b } => {
            let economy = data.load(DatasetKind::Economy)?;
            compare_economy(&economy, &config.teams, team_a, team_b)
        }
        Query::Adaptive => {
            let players = data.load(DatasetKind::Players)?;
            adaptive_players(&players)
        }
        Query::PickStrategy { team } => {
            let overview = data.load(DatasetKind::MatchOverview)?;
            let maps = data.load(DatasetKind::MatchMaps)?;
            pick_strategy_winrate(&overview, &maps, &config.teams, team)
        }
        Query::Ranking => {
            let overview = data.load(DatasetKind::MatchOverview)?;
            let maps = data.load(DatasetKind::MatchMaps)?;
            let players = data.load(DatasetKind::Players)?;
            final_ranking(&overview, &maps, &players, &config.teams)
        }
    };
    Ok(report)
}

/// Table of every alias in the team directory.
pub fn list_teams(teams: &TeamDirectory) -> QueryReport {
    let mut table = ResultTable::new("Known teams", &["Full name", "Code"]);
    for alias in teams.aliases() {
        table.push_row(vec![alias.name.clone(), alias.code.clone()]);
    }
    QueryReport::from_table(table)
}

// ============================================================================
// Workbook export
// ============================================================================

/// Configuration for the workbook export.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Output xlsx path
    pub output: PathBuf,
    /// Reports to include, in sheet order
    pub queries: Vec<Query>,
}

impl ExportConfig {
    /// Starts with the reports that take no arguments; push others onto
    /// `queries` as needed.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        ExportConfig {
            output: output.into(),
            queries: vec![Query::TopPerformance, Query::Adaptive, Query::Ranking],
        }
    }
}

/// Excel limits sheet names to 31 characters and forbids a few symbols.
fn sheet_name(title: &str, used: &mut HashSet<String>) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '-',
            c => c,
        })
        .collect();
    let base: String = cleaned.trim().chars().take(31).collect();
    let base = if base.is_empty() { "Sheet".to_string() } else { base };

    let mut name = base.clone();
    let mut n = 2;
    while used.contains(&name.to_lowercase()) {
        let suffix = format!(" ({})", n);
        let keep = 31 - suffix.chars().count();
        name = format!("{}{}", base.chars().take(keep).collect::<String>(), suffix);
        n += 1;
    }
    used.insert(name.to_lowercase());
    name
}

/// Write every report of `export` into an Excel workbook: a Summary sheet
/// followed by one sheet per result table.
///
/// Returns a summary string on success.
pub fn export_workbook(config: &ReportConfig, export: &ExportConfig) -> Result<String> {
    use rust_xlsxwriter::{Format, Workbook};

    let mut reports = Vec::new();
    for query in &export.queries {
        let report = run_query(config, query)
            .with_context(|| format!("Failed to run {:?} for export", query))?;
        reports.push(report);
    }

    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let title_fmt = Format::new().set_bold().set_font_size(16);
    let mut used_names = HashSet::new();

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(sheet_name("Summary", &mut used_names))?;
        let mut row: u32 = 0;

        sheet.write_string_with_format(row, 0, "Tournament Report", &title_fmt)?;
        row += 2;
        sheet.write_string_with_format(row, 0, "Data Directory", &bold)?;
        sheet.write_string(row, 1, config.data.root().display().to_string())?;
        row += 1;
        let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        sheet.write_string_with_format(row, 0, "Generated", &bold)?;
        sheet.write_string(row, 1, &now)?;
        row += 2;

        sheet.write_string_with_format(row, 0, "Notices", &bold)?;
        let notices: Vec<String> = reports
            .iter()
            .flat_map(|r| r.notices.iter().map(|n| n.to_string()))
            .collect();
        if notices.is_empty() {
            sheet.write_string(row, 1, "(none)")?;
        }
        for notice in &notices {
            sheet.write_string(row, 1, notice)?;
            row += 1;
        }
        sheet.set_column_width(0, 18)?;
        sheet.set_column_width(1, 60)?;
    }

    let mut table_count = 0;
    for table in reports.iter().flat_map(|r| r.tables.iter()) {
        let sheet = workbook.add_worksheet();
        sheet.set_name(sheet_name(&table.title, &mut used_names))?;
        for (col, header) in table.headers.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, header, &bold)?;
        }
        for (r, cells) in table.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                sheet.write_string(r as u32 + 1, col as u16, cell)?;
            }
        }
        sheet.autofit();
        table_count += 1;
    }

    workbook
        .save(&export.output)
        .with_context(|| format!("Failed to write {}", export.output.display()))?;
    log::info!("Exported {} tables to {}", table_count, export.output.display());

    Ok(format!(
        "Wrote {} tables from {} reports to {}",
        table_count,
        reports.len(),
        export.output.display()
    ))
}

/// Resolve the team directory: a CSV override if given, else the built-in
/// roster.
pub fn load_teams(path: Option<&Path>) -> Result<TeamDirectory> {
    match path {
        Some(path) => TeamDirectory::from_csv(path),
        None => Ok(TeamDirectory::default()),
    }
}
