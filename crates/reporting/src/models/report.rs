//! Report payload structures and the fetch request.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::ReportDataError;

/// The report variables requested when the caller does not override them.
/// Matches the standard management-report layout: portfolio, security,
/// description, gross balance, strategy.
pub const DEFAULT_VARIABLES: [&str; 5] = [
    "nome_portfolio",
    "ativo",
    "desc",
    "saldo_bruto",
    "estrategia",
];

/// A request for a management report covering a set of portfolios as of an
/// analysis date.
///
/// Credentials live on the provider, not on the request: the request only
/// describes *what* to fetch.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub analysis_date: NaiveDate,
    pub portfolios: Vec<String>,
    pub variables: Vec<String>,
}

impl ReportRequest {
    pub fn new(analysis_date: NaiveDate, portfolios: Vec<String>) -> Self {
        Self {
            analysis_date,
            portfolios,
            variables: DEFAULT_VARIABLES.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Overrides the requested report variables (column layout changes with
    /// them, so the column mapping must be kept in sync by the caller).
    pub fn with_variables(mut self, variables: Vec<String>) -> Self {
        self.variables = variables;
        self
    }
}

/// The vendor's `json3` response shape:
/// `{"tables": {"tab0": {"<row_key>": {"col0": ..., "col1": ...}}}}`.
///
/// Cell values arrive as strings or bare numbers depending on the column and
/// report version; both are surfaced as text here. Interpreting the text is
/// the consumer's job.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportPayload {
    pub tables: HashMap<String, HashMap<String, HashMap<String, Value>>>,
}

impl ReportPayload {
    /// Extracts the rows of one table in a deterministic order.
    ///
    /// Row keys follow the `lin<N>` pattern; rows are ordered by their
    /// numeric suffix so that `lin2` sorts before `lin10`. The first
    /// `skip_rows` rows are dropped (the vendor emits column titles as the
    /// leading row).
    pub fn rows(&self, table: &str, skip_rows: usize) -> Result<Vec<RawReportRow>, ReportDataError> {
        let table_rows = self
            .tables
            .get(table)
            .ok_or_else(|| ReportDataError::TableNotFound(table.to_string()))?;

        let mut keys: Vec<&String> = table_rows.keys().collect();
        keys.sort_by_key(|k| row_sort_key(k));

        Ok(keys
            .into_iter()
            .skip(skip_rows)
            .map(|key| RawReportRow {
                key: key.clone(),
                cells: table_rows[key]
                    .iter()
                    .map(|(col, value)| (col.clone(), cell_text(value)))
                    .collect(),
            })
            .collect())
    }
}

/// One row of a report table, with cells keyed by their `colN` position.
#[derive(Debug, Clone)]
pub struct RawReportRow {
    pub key: String,
    cells: HashMap<String, String>,
}

impl RawReportRow {
    pub fn new(key: impl Into<String>, cells: HashMap<String, String>) -> Self {
        Self {
            key: key.into(),
            cells,
        }
    }

    /// Returns the text of the cell at the given column index, if present.
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(&format!("col{}", index)).map(|s| s.as_str())
    }
}

/// Sort key for `lin<N>` row keys: numeric suffix first, raw key as the
/// tie-breaker for anything that doesn't match the pattern.
fn row_sort_key(key: &str) -> (u64, String) {
    let digits: String = key.chars().skip_while(|c| !c.is_ascii_digit()).collect();
    (digits.parse().unwrap_or(u64::MAX), key.to_string())
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
