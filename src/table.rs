//! Query results and their text rendering.

use std::fmt::{self, Write};

/// A titled table of pre-formatted cells.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    pub fn new(title: impl Into<String>, headers: &[&str]) -> Self {
        ResultTable {
            title: title.into(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn with_headers(title: impl Into<String>, headers: Vec<String>) -> Self {
        ResultTable {
            title: title.into(),
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Column `header` of every row, in order.
    pub fn column(&self, header: &str) -> Vec<&str> {
        match self.headers.iter().position(|h| h == header) {
            Some(idx) => self
                .rows
                .iter()
                .map(|row| row.get(idx).map(|s| s.as_str()).unwrap_or(""))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Render as a MySQL-style box:
    ///
    /// ```text
    /// +------+--------+
    /// | Rank | Player |
    /// +------+--------+
    /// | 1    | aspas  |
    /// +------+--------+
    /// ```
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let border = {
            let mut line = String::from("+");
            for w in &widths {
                line.push_str(&"-".repeat(w + 2));
                line.push('+');
            }
            line
        };
        let format_row = |cells: &[String]| {
            let mut line = String::from("|");
            for (i, w) in widths.iter().enumerate() {
                let cell = cells.get(i).map(|s| s.as_str()).unwrap_or("");
                let pad = w - cell.chars().count();
                line.push(' ');
                line.push_str(cell);
                line.push_str(&" ".repeat(pad + 1));
                line.push('|');
            }
            line
        };

        let mut out = String::new();
        let _ = writeln!(out, "{}", border);
        let _ = writeln!(out, "{}", format_row(&self.headers));
        let _ = writeln!(out, "{}", border);
        for row in &self.rows {
            let _ = writeln!(out, "{}", format_row(row));
        }
        let _ = writeln!(out, "{}", border);
        out
    }
}

/// User-facing diagnostic produced by a query instead of (or next to) rows.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// A required argument was empty.
    MissingInput(&'static str),
    NoAgentPlayers { agent: String },
    MapNotFound { map: String, available: Vec<String> },
    /// Per-agent win rate cannot be derived from the pick-rate table.
    WinRateUnavailable,
    NoPlayerData,
    TeamNotFound { team: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::MissingInput(what) => write!(f, "No {} given.", what),
            Notice::NoAgentPlayers { agent } => {
                write!(f, "No player found who plays the agent '{}'.", agent)
            }
            Notice::MapNotFound { map, available } => write!(
                f,
                "Map '{}' not found. Available maps: {}",
                map,
                available.join(", ")
            ),
            Notice::WinRateUnavailable => write!(
                f,
                "Agent win rate on this map: N/A (not available in the provided data)"
            ),
            Notice::NoPlayerData => write!(f, "No player data."),
            Notice::TeamNotFound { team } => write!(f, "Team '{}' not found in the data.", team),
        }
    }
}

/// Everything a query produced: zero or more tables plus diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryReport {
    pub tables: Vec<ResultTable>,
    pub notices: Vec<Notice>,
}

impl QueryReport {
    pub fn from_table(table: ResultTable) -> Self {
        QueryReport {
            tables: vec![table],
            notices: Vec::new(),
        }
    }

    /// A report that stopped early with a single diagnostic.
    pub fn notice(notice: Notice) -> Self {
        QueryReport {
            tables: Vec::new(),
            notices: vec![notice],
        }
    }

    pub fn has_notice(&self, notice: &Notice) -> bool {
        self.notices.contains(notice)
    }

    /// Tables (each under its title) followed by the notices.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, table) in self.tables.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            if !table.title.is_empty() {
                let _ = writeln!(out, "{}", table.title);
            }
            out.push_str(&table.render());
        }
        for notice in &self.notices {
            let _ = writeln!(out, "{}", notice);
        }
        out
    }
}
