//! Team directory: maps display names to the short codes used by the
//! player and economy tables.
//!
//! The directory is an ordinary value passed to the queries that need it, so
//! callers (and tests) can inject their own alias table instead of the
//! built-in Champions 2025 roster.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// One display name → short code alias.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TeamAlias {
    /// Full display name, e.g. "Paper Rex"
    pub name: String,
    /// Short code, e.g. "PRX"
    pub code: String,
}

impl TeamAlias {
    pub fn new(name: &str, code: &str) -> Self {
        TeamAlias {
            name: name.to_string(),
            code: code.to_string(),
        }
    }
}

/// Lookup table between team display names and short codes.
#[derive(Debug, Clone)]
pub struct TeamDirectory {
    aliases: Vec<TeamAlias>,
}

const CHAMPIONS_2025: &[(&str, &str)] = &[
    ("Paper Rex", "PRX"),
    ("Xi Lai Gaming", "XLG"),
    ("GIANTX", "GX"),
    ("Sentinels", "SEN"),
    ("NRG", "NRG"),
    ("EDward Gaming", "EDG"),
    ("Team Liquid", "TL"),
    ("DRX", "DRX"),
    ("Dragon Ranger Gaming", "DRG"),
    ("T1", "T1"),
    ("G2 Esports", "G2"),
    ("Team Heretics", "TH"),
    ("Bilibili Gaming", "BLG"),
    ("MIBR", "MIBR"),
    ("Rex Regum Qeon", "RRQ"),
    ("FNATIC", "FNC"),
    ("Guangzhou Huadu Bilibili Gaming(Bilibili Gaming)", "BLG"),
];

impl Default for TeamDirectory {
    fn default() -> Self {
        Self::champions_2025()
    }
}

impl TeamDirectory {
    pub fn new(aliases: Vec<TeamAlias>) -> Self {
        TeamDirectory { aliases }
    }

    /// The sixteen Champions 2025 teams, plus the long-form Bilibili name
    /// that appears in some scraped tables.
    pub fn champions_2025() -> Self {
        Self::new(
            CHAMPIONS_2025
                .iter()
                .map(|(name, code)| TeamAlias::new(name, code))
                .collect(),
        )
    }

    /// Load aliases from a CSV file with `name` and `code` columns.
    pub fn from_csv(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .with_context(|| format!("Failed to open team file {}", path.display()))?;
        let aliases = reader
            .deserialize()
            .collect::<std::result::Result<Vec<TeamAlias>, _>>()
            .context("Failed to read team aliases")?;
        log::info!("Loaded {} team aliases from {}", aliases.len(), path.display());
        Ok(Self::new(aliases))
    }

    pub fn aliases(&self) -> &[TeamAlias] {
        &self.aliases
    }

    /// Map a display name or short code to its short code.
    ///
    /// Codes map to themselves, so `normalize(normalize(x)) == normalize(x)`.
    /// Unknown names are returned trimmed and otherwise unchanged.
    pub fn normalize(&self, name: &str) -> String {
        let name = name.trim();
        if let Some(alias) = self.aliases.iter().find(|a| a.name == name) {
            return alias.code.clone();
        }
        if let Some(alias) = self.aliases.iter().find(|a| a.code == name) {
            return alias.code.clone();
        }
        name.to_string()
    }

    /// First display name registered for `code`, if any.
    pub fn display_name_for_code(&self, code: &str) -> Option<&str> {
        let code = code.trim();
        self.aliases
            .iter()
            .find(|a| a.code == code)
            .map(|a| a.name.as_str())
    }

    /// Resolve a display name or short code to the display name used in the
    /// match tables. Unknown names pass through trimmed.
    pub fn display_name(&self, name: &str) -> String {
        let name = name.trim();
        if self.aliases.iter().any(|a| a.name == name) {
            return name.to_string();
        }
        self.display_name_for_code(name)
            .unwrap_or(name)
            .to_string()
    }

    /// Every display name sharing `name`'s code, led by its
    /// [`display_name`](Self::display_name). Unknown names yield only
    /// themselves.
    pub fn names_for(&self, name: &str) -> Vec<String> {
        let code = self.normalize(name);
        let mut names = vec![self.display_name(name)];
        for alias in self.aliases.iter().filter(|a| a.code == code) {
            if !names.contains(&alias.name) {
                names.push(alias.name.clone());
            }
        }
        names
    }
}
