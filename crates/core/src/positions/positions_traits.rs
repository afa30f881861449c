//! Position source trait definitions.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::Result;

use super::PositionRecord;

/// Trait for position sources.
///
/// A position source hands the rest of the system a consistent,
/// already-normalized snapshot of positions for one analysis date. Where
/// the records come from (report API, file, fixture) is the implementor's
/// concern.
#[async_trait]
pub trait PositionSourceTrait: Send + Sync {
    async fn fetch_positions(&self, analysis_date: NaiveDate) -> Result<Vec<PositionRecord>>;
}
