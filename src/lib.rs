//! Champions Report
//!
//! Analytical reports over esports tournament statistics tables.
//!
//! This library provides:
//! - `parsing`: Best-effort numeric parsing of raw CSV fields
//! - `teams`: Team display name ↔ short code directory
//! - `dataset`: CSV loading into header-aware record sets
//! - `stats`: Quartiles, medians and win ratios
//! - `queries`: Rankings, filters, intersections and pick/ban breakdowns
//! - `table`: Result tables, diagnostics and their text rendering
//! - `pipeline`: Query dispatch over a data directory and workbook export
//! - `menu`: Interactive numbered menu
//!
//! Binaries:
//! - `champions-report`: Command-line front end for every report

pub mod dataset;
pub mod menu;
pub mod parsing;
pub mod pipeline;
pub mod queries;
pub mod stats;
pub mod table;
pub mod teams;

pub use dataset::{DataDir, Dataset, DatasetKind, Record};
pub use table::{Notice, QueryReport, ResultTable};
pub use teams::{TeamAlias, TeamDirectory};
