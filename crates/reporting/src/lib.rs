//! Enquadra Reporting Crate
//!
//! This crate provides provider-agnostic access to the third-party
//! managed-portfolio reporting API that supplies position snapshots for the
//! rest of the system.
//!
//! # Overview
//!
//! The reporting crate supports:
//! - Fetching a management report for a set of portfolios as of a date
//! - Parsing the vendor's nested `json3` table payload into ordered rows
//! - Mapping version-specific column positions to semantic fields
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   Domain Layer   | --> |  ReportRequest   |  (portfolios + date)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    Provider      |  (Comdinheiro, ...)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  ReportPayload   |  (nested json3 tables)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   ReportRow      |  (semantic fields, raw text)
//!                          +------------------+
//! ```
//!
//! Column positions carry no meaning on their own: a [`ReportColumnMapping`]
//! supplied by the caller translates `colN` indices into semantic fields.
//! Consumers downstream never interpret raw column indices.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::ReportDataError;
pub use models::{RawReportRow, ReportColumnMapping, ReportPayload, ReportRequest, ReportRow};
pub use provider::{
    comdinheiro::{ComdinheiroProvider, ReportCredentials},
    ReportProvider,
};
