//! Allocation module - conformance engine, targets, and policy configuration.

mod allocation_config;
mod allocation_model;
mod conformance_service;

pub use allocation_config::AllocationConfig;
pub use allocation_model::{
    AllocationCategory, BucketPolicy, CategoryConformance, ConformanceRow, ConformanceStatus,
    InstrumentOverlay,
};
pub use conformance_service::{ConformanceService, ConformanceServiceTrait};
