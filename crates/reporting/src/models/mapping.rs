//! Column mapping configuration.
//!
//! Report column positions are version-specific: the vendor reorders columns
//! when the requested variable list changes. The mapping below is supplied as
//! configuration by the caller and is the only place column indices are
//! interpreted.

use serde::{Deserialize, Serialize};

use crate::errors::ReportDataError;
use crate::models::RawReportRow;

/// Maps `colN` positions of a report table to semantic fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportColumnMapping {
    /// Leading rows to discard (column titles).
    #[serde(default = "default_header_rows")]
    pub header_rows: usize,
    pub portfolio: usize,
    pub asset: usize,
    pub description: usize,
    pub gross_balance: usize,
    pub strategy_tag: usize,
    /// Column holding the source currency label, when the report carries one.
    /// Absent in older layouts, where the currency is inferred elsewhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<usize>,
}

fn default_header_rows() -> usize {
    1
}

impl Default for ReportColumnMapping {
    /// The standard management-report layout (see `DEFAULT_VARIABLES`):
    /// portfolio, security, description, gross balance, strategy.
    fn default() -> Self {
        Self {
            header_rows: 1,
            portfolio: 0,
            asset: 1,
            description: 2,
            gross_balance: 3,
            strategy_tag: 4,
            currency: None,
        }
    }
}

impl ReportColumnMapping {
    /// Projects a raw row onto semantic fields.
    ///
    /// A missing required cell is a shape violation of the report contract
    /// and fails the whole mapping rather than producing a half-filled row.
    pub fn map_row(&self, row: &RawReportRow) -> Result<ReportRow, ReportDataError> {
        let required = |index: usize| -> Result<String, ReportDataError> {
            row.cell(index)
                .map(|s| s.to_string())
                .ok_or_else(|| ReportDataError::MissingColumn {
                    column: format!("col{}", index),
                    row: row.key.clone(),
                })
        };

        Ok(ReportRow {
            portfolio_id: required(self.portfolio)?,
            asset_id: required(self.asset)?,
            description: required(self.description)?,
            gross_balance: required(self.gross_balance)?,
            strategy_tag: required(self.strategy_tag)?,
            currency: match self.currency {
                Some(index) => row.cell(index).map(|s| s.to_string()),
                None => None,
            },
        })
    }
}

/// One report row with semantic field names. All values are raw text exactly
/// as the vendor sent them; numeric parsing happens downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub portfolio_id: String,
    pub asset_id: String,
    pub description: String,
    pub gross_balance: String,
    pub strategy_tag: String,
    pub currency: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn raw_row(cells: &[(&str, &str)]) -> RawReportRow {
        RawReportRow::new(
            "lin1",
            cells
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        )
    }

    #[test]
    fn test_map_row_standard_layout() {
        let mapping = ReportColumnMapping::default();
        let row = raw_row(&[
            ("col0", "FINACAP009"),
            ("col1", "04.899.128/0001-90"),
            ("col2", "Sul América Excellence FI RF"),
            ("col3", "44.519,63"),
            ("col4", "Crédito Privado Pós"),
        ]);

        let mapped = mapping.map_row(&row).unwrap();
        assert_eq!(mapped.portfolio_id, "FINACAP009");
        assert_eq!(mapped.gross_balance, "44.519,63");
        assert_eq!(mapped.strategy_tag, "Crédito Privado Pós");
        assert!(mapped.currency.is_none());
    }

    #[test]
    fn test_map_row_missing_required_cell() {
        let mapping = ReportColumnMapping::default();
        let row = raw_row(&[("col0", "FINACAP009")]);

        let err = mapping.map_row(&row).unwrap_err();
        assert!(matches!(err, ReportDataError::MissingColumn { .. }));
    }

    #[test]
    fn test_mapping_roundtrips_through_json() {
        let json = r#"{
            "headerRows": 1,
            "portfolio": 0,
            "asset": 1,
            "description": 2,
            "grossBalance": 3,
            "strategyTag": 4,
            "currency": 5
        }"#;
        let mapping: ReportColumnMapping = serde_json::from_str(json).unwrap();
        assert_eq!(mapping.currency, Some(5));
    }
}
