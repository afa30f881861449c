//! Clients module - client registry models and book-level metrics.

mod client_metrics_service;
mod clients_model;
mod clients_traits;

pub use client_metrics_service::ClientMetricsService;
pub use clients_model::{ClientBookSummary, ClientPatrimony, ClientRecord, SuitabilitySlice};
pub use clients_traits::{ClientMetricsServiceTrait, ClientRepositoryTrait};
