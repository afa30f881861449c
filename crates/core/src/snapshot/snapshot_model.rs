//! Position snapshot domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::positions::PositionRecord;

/// A consistent, timestamped set of position records for one analysis date.
///
/// Snapshots are immutable once taken; callers that want fresher data take
/// a new one through the snapshot service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSnapshot {
    pub positions: Vec<PositionRecord>,
    pub analysis_date: NaiveDate,
    /// When the snapshot was fetched from upstream.
    pub fetched_at: DateTime<Utc>,
}

impl PositionSnapshot {
    /// A snapshot with no positions, as produced when upstream has no data.
    pub fn empty(analysis_date: NaiveDate) -> Self {
        Self {
            positions: Vec::new(),
            analysis_date,
            fetched_at: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        let snapshot = PositionSnapshot::empty(date);
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.analysis_date, date);
    }
}

