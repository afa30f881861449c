//! Report data models
//!
//! This module contains the data types for report operations:
//! - `report` - The nested `json3` payload, raw rows, and the fetch request
//! - `mapping` - Column-index-to-semantic-field mapping configuration

mod mapping;
mod report;

pub use mapping::{ReportColumnMapping, ReportRow};
pub use report::{RawReportRow, ReportPayload, ReportRequest};
