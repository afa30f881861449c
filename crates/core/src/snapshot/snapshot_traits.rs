//! Snapshot service trait definitions.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::Result;

use super::PositionSnapshot;

/// Trait for the snapshot service.
#[async_trait]
pub trait SnapshotServiceTrait: Send + Sync {
    /// Fetches a fresh snapshot for the given analysis date and makes it the
    /// current one. On failure the previous snapshot stays current and the
    /// error is returned to the caller.
    async fn refresh(&self, analysis_date: NaiveDate) -> Result<PositionSnapshot>;

    /// The current snapshot, if one has been taken.
    fn current(&self) -> Result<Option<PositionSnapshot>>;
}
