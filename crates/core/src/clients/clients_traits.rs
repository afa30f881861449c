//! Client registry and metrics trait definitions.

use crate::errors::Result;

use super::{ClientBookSummary, ClientPatrimony, ClientRecord, SuitabilitySlice};

/// Trait for the client registry.
///
/// Implemented by the storage layer; the core only consumes records.
pub trait ClientRepositoryTrait: Send + Sync {
    fn get_clients(&self) -> Result<Vec<ClientRecord>>;
}

/// Trait for the client metrics service.
pub trait ClientMetricsServiceTrait: Send + Sync {
    /// Headline aggregates over the whole book.
    fn get_book_summary(&self) -> Result<ClientBookSummary>;

    /// Patrimony per suitability bucket, largest first.
    fn get_patrimony_by_suitability(&self) -> Result<Vec<SuitabilitySlice>>;

    /// Patrimony per client, largest first.
    fn get_patrimony_by_client(&self) -> Result<Vec<ClientPatrimony>>;
}
