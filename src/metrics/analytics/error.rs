//! Analytics error types.

use thiserror::Error;

/// Errors that can occur during analytics calculations.
///
/// The engine is total over well-typed inputs, so the taxonomy is narrow:
/// both variants are validation decisions made once, at the boundary where
/// user input enters the engine. Empty inputs are never errors - every
/// component degrades to a well-defined zero/flat output.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// A period selection missing a required custom date for its anchor
    /// mode, or otherwise unresolvable.
    #[error("Invalid period selection: {0}")]
    InvalidSelection(String),

    /// A session record rejected at ingestion.
    #[error("Invalid session record: {0}")]
    InvalidRecord(String),
}

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_selection_error() {
        let err = AnalyticsError::InvalidSelection("custom range requires both dates".to_string());
        assert!(err.to_string().contains("custom range requires both dates"));
    }

    #[test]
    fn test_invalid_record_error() {
        let err = AnalyticsError::InvalidRecord("TSS must be a non-negative number".to_string());
        assert!(err.to_string().contains("non-negative"));
    }
}
