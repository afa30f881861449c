//! Domain models for allocation targets and conformance reporting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// The six fixed allocation categories positions are classified into.
///
/// Classification is by case-insensitive substring match of the category
/// label against a position's free-text strategy tag. The declaration order
/// below is the evaluation order: the aggregate clamp walks categories in
/// this order, so earlier categories keep their amounts when a bucket's
/// combined total has to be truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AllocationCategory {
    #[serde(rename = "Selic")]
    Selic,
    #[serde(rename = "Crédito Privado Pós")]
    CreditoPrivadoPos,
    #[serde(rename = "IPCA/Pré Fixado")]
    IpcaPreFixado,
    #[serde(rename = "Renda Variável")]
    RendaVariavel,
    #[serde(rename = "Offshore")]
    Offshore,
    #[serde(rename = "Alternativo")]
    Alternativo,
}

impl AllocationCategory {
    /// All categories, in evaluation order.
    pub const ALL: [AllocationCategory; 6] = [
        AllocationCategory::Selic,
        AllocationCategory::CreditoPrivadoPos,
        AllocationCategory::IpcaPreFixado,
        AllocationCategory::RendaVariavel,
        AllocationCategory::Offshore,
        AllocationCategory::Alternativo,
    ];

    /// Display label, as it appears in strategy tags and configuration.
    pub fn label(&self) -> &'static str {
        match self {
            AllocationCategory::Selic => "Selic",
            AllocationCategory::CreditoPrivadoPos => "Crédito Privado Pós",
            AllocationCategory::IpcaPreFixado => "IPCA/Pré Fixado",
            AllocationCategory::RendaVariavel => "Renda Variável",
            AllocationCategory::Offshore => "Offshore",
            AllocationCategory::Alternativo => "Alternativo",
        }
    }

    fn label_lower(&self) -> &'static str {
        match self {
            AllocationCategory::Selic => "selic",
            AllocationCategory::CreditoPrivadoPos => "crédito privado pós",
            AllocationCategory::IpcaPreFixado => "ipca/pré fixado",
            AllocationCategory::RendaVariavel => "renda variável",
            AllocationCategory::Offshore => "offshore",
            AllocationCategory::Alternativo => "alternativo",
        }
    }

    /// Whether a free-text strategy tag classifies into this category.
    pub fn matches_tag(&self, strategy_tag: &str) -> bool {
        strategy_tag.to_lowercase().contains(self.label_lower())
    }
}

/// Target allocation policy for one risk/suitability bucket.
///
/// Weights are fractions in [0, 1] and need not sum to 1; the shortfall is
/// headroom left unallocated by the policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketPolicy {
    pub bucket_id: String,
    pub target_weights: HashMap<AllocationCategory, Decimal>,
    /// Portfolios governed by this bucket. Membership lists are taken
    /// exactly as supplied: the same portfolio may legitimately appear under
    /// more than one bucket and is then counted in each.
    pub members: HashSet<String>,
}

/// Known internal composition of a blended instrument.
///
/// Some funds-of-funds carry a strategy tag that says nothing about what
/// they hold. For those, a fixed per-instrument decomposition attributes
/// fractions of the balance to categories. Fractions are signed: an internal
/// hedge can subtract from a category (the contribution stays signed until
/// the final bucket-level clamp).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentOverlay {
    /// Matched against position asset ids by exact string equality.
    pub asset_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub components: HashMap<AllocationCategory, Decimal>,
}

/// Conformance flag for a bucket.
///
/// The reference behavior emits OK unconditionally; a real tolerance-band
/// comparison against the targets needs a product decision on the band and
/// is deliberately not guessed at here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConformanceStatus {
    #[serde(rename = "OK")]
    Ok,
}

/// Realized-versus-target percentages for one category of one bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryConformance {
    pub category: AllocationCategory,
    /// Share of the bucket's net worth in this category, 0-100.
    pub realized_pct: Decimal,
    /// The policy target, 0-100.
    pub target_pct: Decimal,
}

/// One computed conformance record for a bucket.
///
/// Raw numbers only; percentage and currency formatting belong to the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConformanceRow {
    pub bucket_id: String,
    /// Sum of gross balances across all member positions, base currency.
    pub net_worth: Decimal,
    /// Per-category results, in evaluation order.
    pub categories: Vec<CategoryConformance>,
    pub status: ConformanceStatus,
}

impl ConformanceRow {
    /// Convenience lookup of one category's result.
    pub fn category(&self, category: AllocationCategory) -> Option<&CategoryConformance> {
        self.categories.iter().find(|c| c.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_tag_is_case_insensitive() {
        assert!(AllocationCategory::Selic.matches_tag("Tesouro SELIC Simples"));
        assert!(AllocationCategory::RendaVariavel.matches_tag("renda variável - ações"));
        assert!(!AllocationCategory::Offshore.matches_tag("Selic"));
    }

    #[test]
    fn test_matches_tag_handles_accents() {
        assert!(AllocationCategory::CreditoPrivadoPos.matches_tag("CRÉDITO PRIVADO PÓS"));
        assert!(AllocationCategory::IpcaPreFixado.matches_tag("ipca/pré fixado"));
    }

    #[test]
    fn test_category_serializes_as_its_label() {
        let json = serde_json::to_string(&AllocationCategory::CreditoPrivadoPos).unwrap();
        assert_eq!(json, "\"Crédito Privado Pós\"");
    }
}
