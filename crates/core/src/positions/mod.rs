//! Positions module - position records, the source seam, and ingestion.

mod positions_model;
mod positions_traits;
mod report_source;

pub use positions_model::PositionRecord;
pub use positions_traits::PositionSourceTrait;
pub use report_source::ReportPositionSource;
