use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::{debug, error};

use crate::errors::{Error, Result};
use crate::positions::PositionSourceTrait;

use super::{PositionSnapshot, SnapshotServiceTrait};

/// Owns the current position snapshot and refreshes it on demand.
///
/// Refreshing is an explicit caller action, never a side effect of reading:
/// computation over a snapshot always sees one consistent set of records.
/// A failed refresh keeps the previous snapshot current so that an upstream
/// outage degrades to stale data instead of no data.
#[derive(Clone)]
pub struct SnapshotService {
    source: Arc<dyn PositionSourceTrait>,
    current: Arc<RwLock<Option<PositionSnapshot>>>,
}

impl SnapshotService {
    pub fn new(source: Arc<dyn PositionSourceTrait>) -> Self {
        Self {
            source,
            current: Arc::new(RwLock::new(None)),
        }
    }
}

#[async_trait]
impl SnapshotServiceTrait for SnapshotService {
    async fn refresh(&self, analysis_date: NaiveDate) -> Result<PositionSnapshot> {
        debug!("Refreshing position snapshot for {}", analysis_date);

        let positions = match self.source.fetch_positions(analysis_date).await {
            Ok(positions) => positions,
            Err(e) => {
                error!("Snapshot refresh failed, keeping previous snapshot: {}", e);
                return Err(e);
            }
        };

        let snapshot = PositionSnapshot {
            positions,
            analysis_date,
            fetched_at: Utc::now(),
        };

        let mut current = self
            .current
            .write()
            .map_err(|e| Error::Unexpected(e.to_string()))?;
        *current = Some(snapshot.clone());

        Ok(snapshot)
    }

    fn current(&self) -> Result<Option<PositionSnapshot>> {
        let current = self
            .current
            .read()
            .map_err(|e| Error::Unexpected(e.to_string()))?;
        Ok(current.clone())
    }
}
