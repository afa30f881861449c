//! Error types for the reporting crate.

use thiserror::Error;

/// Errors that can occur while fetching or decoding a management report.
#[derive(Error, Debug)]
pub enum ReportDataError {
    /// The provider rejected the request or returned an in-band error body.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The payload did not have the expected nested table shape.
    #[error("Malformed report payload: {0}")]
    MalformedPayload(String),

    /// The requested table key was absent from the payload.
    #[error("Table not found in report: {0}")]
    TableNotFound(String),

    /// A row was missing a column the mapping declares as required.
    #[error("Missing column {column} in row {row}")]
    MissingColumn {
        /// The `colN` key that was absent
        column: String,
        /// The row key the column was missing from
        row: String,
    },

    /// A network error occurred while talking to the provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ReportDataError::ProviderError {
            provider: "COMDINHEIRO".to_string(),
            message: "invalid credentials".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Provider error: COMDINHEIRO - invalid credentials"
        );

        let error = ReportDataError::MissingColumn {
            column: "col3".to_string(),
            row: "lin12".to_string(),
        };
        assert_eq!(format!("{}", error), "Missing column col3 in row lin12");
    }
}
