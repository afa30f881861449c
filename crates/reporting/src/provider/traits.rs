//! Report provider trait definitions.

use async_trait::async_trait;

use crate::errors::ReportDataError;
use crate::models::{ReportPayload, ReportRequest};

/// Trait for management-report providers.
///
/// Implement this trait to add support for a new report source. Providers
/// are handed a fully described request and return the vendor payload as-is;
/// they never interpret column positions.
#[async_trait]
pub trait ReportProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "COMDINHEIRO". Used for logging and
    /// error attribution.
    fn id(&self) -> &'static str;

    /// Fetch a management report for the portfolios and analysis date in the
    /// request.
    async fn fetch_report(&self, request: &ReportRequest)
        -> Result<ReportPayload, ReportDataError>;
}
