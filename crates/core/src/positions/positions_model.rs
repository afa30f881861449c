//! Position domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One security holding of one portfolio, as of an analysis date.
///
/// Records are immutable inputs to the conformance engine. By the time a
/// record exists, its balance has been sanitized and normalized into the
/// base reporting currency; the engine never sees raw upstream text.
///
/// Asset identifiers are heterogeneous (tax-id-like codes, fund names,
/// free text) and are only ever compared as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRecord {
    pub portfolio_id: String,
    pub asset_id: String,
    /// Free-text description, for display only.
    pub description: String,
    /// Gross balance in the base reporting currency. Finite and
    /// non-negative; unparseable upstream values enter as zero.
    pub gross_balance: Decimal,
    /// Free-text strategy label used for category classification.
    pub strategy_tag: String,
}
