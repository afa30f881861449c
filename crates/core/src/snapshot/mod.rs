//! Snapshot module - cached position snapshots with explicit refresh.

mod snapshot_model;
mod snapshot_service;
mod snapshot_traits;

pub use snapshot_model::PositionSnapshot;
pub use snapshot_service::SnapshotService;
pub use snapshot_traits::SnapshotServiceTrait;
