//! Position ingestion from the third-party management report.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;

use enquadra_reporting::{ReportColumnMapping, ReportProvider, ReportRequest, ReportRow};

use crate::errors::Result;
use crate::fx::CurrencyNormalizer;
use crate::utils::money_utils::parse_monetary;

use super::{PositionRecord, PositionSourceTrait};

/// The report table holding position rows.
const POSITIONS_TABLE: &str = "tab0";

/// Turns raw management-report rows into normalized position records.
///
/// This is where the noisy upstream meets the engine's contract: balances
/// are sanitized and parsed (unparseable or negative values contribute zero
/// rather than aborting the snapshot) and dollar balances are converted into
/// the base currency. Shape violations - a row missing a mapped column -
/// do abort, since they mean the report layout and the column mapping have
/// drifted apart.
pub struct ReportPositionSource {
    provider: Arc<dyn ReportProvider>,
    mapping: ReportColumnMapping,
    normalizer: CurrencyNormalizer,
    portfolios: Vec<String>,
}

impl ReportPositionSource {
    pub fn new(
        provider: Arc<dyn ReportProvider>,
        mapping: ReportColumnMapping,
        normalizer: CurrencyNormalizer,
        portfolios: Vec<String>,
    ) -> Self {
        Self {
            provider,
            mapping,
            normalizer,
            portfolios,
        }
    }

    fn to_record(&self, row: ReportRow) -> PositionRecord {
        let gross_balance = match parse_monetary(&row.gross_balance) {
            Some(value) if value >= Decimal::ZERO => value,
            Some(value) => {
                warn!(
                    "Negative balance {} for asset '{}' in {}, counting as zero",
                    value, row.asset_id, row.portfolio_id
                );
                Decimal::ZERO
            }
            None => {
                warn!(
                    "Unparseable balance '{}' for asset '{}' in {}, counting as zero",
                    row.gross_balance, row.asset_id, row.portfolio_id
                );
                Decimal::ZERO
            }
        };

        let currency_label = currency_label(&row);
        let gross_balance = self.normalizer.normalize(gross_balance, &currency_label);

        PositionRecord {
            portfolio_id: row.portfolio_id,
            asset_id: row.asset_id,
            description: row.description,
            gross_balance,
            strategy_tag: row.strategy_tag,
        }
    }
}

/// Source currency of a row: the currency column when the report carries
/// one, otherwise inferred from the portfolio-id suffix convention
/// ("FINACAP056_USD").
fn currency_label(row: &ReportRow) -> String {
    if let Some(currency) = &row.currency {
        return currency.clone();
    }
    if row.portfolio_id.to_uppercase().ends_with("_USD") {
        "usd".to_string()
    } else {
        String::new()
    }
}

#[async_trait]
impl PositionSourceTrait for ReportPositionSource {
    async fn fetch_positions(&self, analysis_date: NaiveDate) -> Result<Vec<PositionRecord>> {
        let request = ReportRequest::new(analysis_date, self.portfolios.clone());
        let payload = self.provider.fetch_report(&request).await?;

        let raw_rows = payload.rows(POSITIONS_TABLE, self.mapping.header_rows)?;
        debug!(
            "Report for {} returned {} position rows",
            analysis_date,
            raw_rows.len()
        );

        let mut records = Vec::with_capacity(raw_rows.len());
        for raw in &raw_rows {
            let row = self.mapping.map_row(raw)?;
            records.push(self.to_record(row));
        }

        Ok(records)
    }
}
