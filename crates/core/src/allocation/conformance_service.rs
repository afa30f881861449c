//! Service for computing allocation conformance per suitability bucket.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::positions::PositionRecord;

use super::{
    AllocationCategory, AllocationConfig, CategoryConformance, ConformanceRow, ConformanceStatus,
};

/// Trait for the conformance service.
pub trait ConformanceServiceTrait: Send + Sync {
    /// Computes one conformance row per bucket that has member positions in
    /// the snapshot, in the policy's bucket order.
    fn compute_conformance(&self, positions: &[PositionRecord]) -> Vec<ConformanceRow>;
}

/// Computes realized-versus-target allocation percentages.
///
/// Pure transformation: reads the snapshot and the policy, allocates fresh
/// output rows, holds no state between invocations. Safe to call from any
/// number of callers concurrently.
pub struct ConformanceService {
    config: Arc<AllocationConfig>,
}

impl ConformanceService {
    pub fn new(config: Arc<AllocationConfig>) -> Self {
        Self { config }
    }

    /// Aggregates one bucket's positions into category amounts.
    ///
    /// A position contributes its full balance to every category whose label
    /// appears in its strategy tag, plus the signed overlay components of
    /// its instrument, if any. Amounts stay signed here; clamping happens
    /// once per bucket, after aggregation.
    fn aggregate_categories(
        &self,
        positions: &[&PositionRecord],
    ) -> HashMap<AllocationCategory, Decimal> {
        let mut amounts: HashMap<AllocationCategory, Decimal> = HashMap::new();

        for position in positions {
            for category in AllocationCategory::ALL {
                if category.matches_tag(&position.strategy_tag) {
                    *amounts.entry(category).or_insert(Decimal::ZERO) += position.gross_balance;
                }
            }

            if let Some(overlay) = self.config.overlay_for(&position.asset_id) {
                for (category, fraction) in &overlay.components {
                    *amounts.entry(*category).or_insert(Decimal::ZERO) +=
                        *fraction * position.gross_balance;
                }
            }
        }

        amounts
    }
}

impl ConformanceServiceTrait for ConformanceService {
    fn compute_conformance(&self, positions: &[PositionRecord]) -> Vec<ConformanceRow> {
        debug!(
            "Computing conformance for {} positions across {} buckets",
            positions.len(),
            self.config.buckets.len()
        );

        let mut rows = Vec::new();

        for bucket in &self.config.buckets {
            let selected: Vec<&PositionRecord> = positions
                .iter()
                .filter(|p| bucket.members.contains(&p.portfolio_id))
                .collect();

            // A bucket with no member positions contributes no output row.
            if selected.is_empty() {
                continue;
            }

            let net_worth: Decimal = selected.iter().map(|p| p.gross_balance).sum();
            let amounts = self.aggregate_categories(&selected);

            // Clamp the combined total to the bucket's net worth, walking
            // categories in evaluation order: earlier categories keep their
            // amounts, later ones get whatever headroom is left.
            let mut remaining = net_worth;
            let mut categories = Vec::with_capacity(AllocationCategory::ALL.len());

            for category in AllocationCategory::ALL {
                let raw = amounts.get(&category).copied().unwrap_or(Decimal::ZERO);
                let amount = raw.max(Decimal::ZERO).min(remaining);
                remaining -= amount;

                let realized_pct = if net_worth.is_zero() {
                    Decimal::ZERO
                } else {
                    amount / net_worth * dec!(100)
                };

                let target_pct = bucket
                    .target_weights
                    .get(&category)
                    .copied()
                    .unwrap_or(Decimal::ZERO)
                    * dec!(100);

                categories.push(CategoryConformance {
                    category,
                    realized_pct,
                    target_pct,
                });
            }

            rows.push(ConformanceRow {
                bucket_id: bucket.bucket_id.clone(),
                net_worth,
                categories,
                status: ConformanceStatus::Ok,
            });
        }

        rows
    }
}
