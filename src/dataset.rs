//! Tabular datasets loaded from the tournament CSV exports.
//!
//! A [`Dataset`] keeps the header row (some queries discover columns from it)
//! and a list of [`Record`]s mapping column name to raw string value. No
//! schema is enforced beyond the columns a query reads.

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Column names read by the queries.
pub mod columns {
    pub const PLAYER_NAME: &str = "player_name";
    pub const TEAM: &str = "team";
    pub const RATING: &str = "rating";
    pub const ACS: &str = "acs";
    pub const KAST: &str = "kast";
    pub const FIRST_KILLS: &str = "first_kills";
    pub const CLUTCH_PERCENT: &str = "cl_percent";
    pub const AGENTS: &str = "agents";

    pub const AGENT_NAME: &str = "agent_name";
    pub const TOTAL_UTILIZATION: &str = "total_utilization";

    pub const ECON_TEAM: &str = "Team";
    pub const PISTOL_WON: &str = "Pistol Won";
    pub const ECO: &str = "Eco (won)";
    pub const SEMI_ECO: &str = "Semi-eco (won)";
    pub const SEMI_BUY: &str = "Semi-buy (won)";
    pub const FULL_BUY: &str = "Full buy(won)";

    pub const MATCH_ID: &str = "match_id";
    pub const TEAMS: &str = "teams";
    pub const SCORE: &str = "score";
    pub const DATE: &str = "date";
    pub const MAP_NAME: &str = "map_name";
    pub const WINNER: &str = "winner";
    pub const PICKED_BY: &str = "picked_by";
}

/// One CSV row as column name → raw value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    pub fn from_pairs<K: Into<String>, V: Into<String>>(
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Record {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(|s| s.as_str())
    }

    /// Value of `column`, or `default` when the column is absent.
    pub fn get_or<'a>(&'a self, column: &str, default: &'a str) -> &'a str {
        self.get(column).unwrap_or(default)
    }
}

/// Header row plus records, in file order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    /// Build a dataset from literal rows; handy for tests and fixtures.
    pub fn from_rows(headers: &[&str], rows: &[&[&str]]) -> Self {
        let records = rows
            .iter()
            .map(|row| Record::from_pairs(headers.iter().copied().zip(row.iter().copied())))
            .collect();
        Dataset {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            records,
        }
    }

    /// Read a CSV stream with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers: Vec<String> = reader
            .headers()
            .context("Failed to read CSV header")?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').to_string())
            .collect();

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result.context("Failed to read CSV row")?;
            // Short rows simply lack the trailing columns.
            records.push(Record::from_pairs(
                headers.iter().cloned().zip(row.iter().map(|s| s.to_string())),
            ));
        }
        Ok(Dataset { headers, records })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        let dataset = Self::from_reader(file)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        log::debug!("Read {} records from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Entries of `expected` absent from the header row.
    pub fn missing_columns<'a>(&self, expected: &[&'a str]) -> Vec<&'a str> {
        expected
            .iter()
            .copied()
            .filter(|c| !self.headers.iter().any(|h| h == c))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The fixed set of tournament tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Players,
    Agents,
    Economy,
    MatchOverview,
    MatchMaps,
}

impl DatasetKind {
    pub fn file_name(self) -> &'static str {
        match self {
            DatasetKind::Players => "player_stats.csv",
            DatasetKind::Agents => "agents_stats.csv",
            DatasetKind::Economy => "economy_data.csv",
            DatasetKind::MatchOverview => "detailed_matches_overview.csv",
            DatasetKind::MatchMaps => "detailed_matches_maps.csv",
        }
    }

    /// Columns the queries read from this table. Missing ones read as empty.
    pub fn expected_columns(self) -> &'static [&'static str] {
        use columns::*;
        match self {
            DatasetKind::Players => &[
                PLAYER_NAME,
                TEAM,
                AGENTS,
                RATING,
                ACS,
                KAST,
                FIRST_KILLS,
                CLUTCH_PERCENT,
            ],
            DatasetKind::Agents => &[AGENT_NAME, TOTAL_UTILIZATION],
            DatasetKind::Economy => &[ECON_TEAM, PISTOL_WON, ECO, SEMI_ECO, SEMI_BUY, FULL_BUY],
            DatasetKind::MatchOverview => &[MATCH_ID, TEAMS, SCORE, DATE],
            DatasetKind::MatchMaps => &[MATCH_ID, MAP_NAME, WINNER, PICKED_BY, SCORE],
        }
    }
}

/// Directory holding the CSV exports, either directly or under `data/`.
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DataDir { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Prefer `<root>/<file>`, then `<root>/data/<file>`. When neither
    /// exists the first candidate is returned so the open error names it.
    pub fn resolve(&self, file_name: &str) -> PathBuf {
        let direct = self.root.join(file_name);
        if direct.exists() {
            return direct;
        }
        let nested = self.root.join("data").join(file_name);
        if nested.exists() {
            return nested;
        }
        direct
    }

    pub fn load(&self, kind: DatasetKind) -> Result<Dataset> {
        let path = self.resolve(kind.file_name());
        let dataset = Dataset::from_path(&path)?;
        log::info!("Loaded {} ({} records)", kind.file_name(), dataset.len());
        for missing in dataset.missing_columns(kind.expected_columns()) {
            log::warn!("{} has no '{}' column; values default to empty", kind.file_name(), missing);
        }
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reader_keeps_header_order() {
        let csv = "agent_name,Ascent,Bind,total_utilization\nJett,40,12,30\nSova,55,\n";
        let data = Dataset::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(data.headers(), ["agent_name", "Ascent", "Bind", "total_utilization"]);
        assert_eq!(data.len(), 2);
        assert_eq!(data.records()[0].get("Bind"), Some("12"));
        assert_eq!(data.records()[1].get("Bind"), Some(""));
        assert_eq!(data.records()[1].get("total_utilization"), None);
    }

    #[test]
    fn test_from_reader_strips_bom() {
        let csv = "\u{feff}player_name,team\naspas,MIBR\n";
        let data = Dataset::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(data.records()[0].get("player_name"), Some("aspas"));
    }

    #[test]
    fn test_get_or_default() {
        let data = Dataset::from_rows(&["player_name"], &[&["f0rsakeN"]]);
        let record = &data.records()[0];
        assert_eq!(record.get_or("player_name", "?"), "f0rsakeN");
        assert_eq!(record.get_or("team", "?"), "?");
    }

    #[test]
    fn test_resolve_prefers_root_then_data_subdir() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = DataDir::new(dir.path());
        let file = DatasetKind::Players.file_name();

        assert_eq!(data_dir.resolve(file), dir.path().join(file));

        std::fs::create_dir(dir.path().join("data")).unwrap();
        std::fs::write(dir.path().join("data").join(file), "player_name\n").unwrap();
        assert_eq!(data_dir.resolve(file), dir.path().join("data").join(file));

        std::fs::write(dir.path().join(file), "player_name\n").unwrap();
        assert_eq!(data_dir.resolve(file), dir.path().join(file));
    }

    #[test]
    fn test_missing_columns() {
        let data = Dataset::from_rows(&["match_id", "teams"], &[]);
        assert_eq!(
            data.missing_columns(DatasetKind::MatchOverview.expected_columns()),
            vec!["score", "date"]
        );
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DataDir::new(dir.path())
            .load(DatasetKind::Economy)
            .unwrap_err();
        assert!(format!("{:#}", err).contains("economy_data.csv"));
    }
}
