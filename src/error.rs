//! Error types for the tripsmith library.
//!
//! Two distinct types reflect two distinct failure modes:
//!
//! * [`TripsmithError`] — **Fatal**: the plan cannot be generated at all
//!   (invalid request, provider not configured, completion failed after
//!   retries). Returned as `Err(TripsmithError)` from the top-level
//!   `generate*` functions.
//!
//! * [`ParseWarning`] — **Non-fatal**: the response text deviated from the
//!   prompted shape and the parser degraded (dropped a row, filled missing
//!   cells with empty strings). Collected in
//!   [`crate::output::PlanOutput::warnings`] so callers can inspect how
//!   clean the parse was. Parsing itself never fails: the worst outcome is
//!   an itinerary with empty fields.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the tripsmith library.
///
/// Parse-level degradation uses [`ParseWarning`] and is stored in
/// [`crate::output::PlanOutput`] rather than propagated here.
#[derive(Debug, Error)]
pub enum TripsmithError {
    // ── Request errors ────────────────────────────────────────────────────
    /// The trip request failed validation before any LLM call was made.
    #[error("Invalid trip request: {reason}")]
    InvalidRequest { reason: String },

    // ── LLM errors ────────────────────────────────────────────────────────
    /// The configured provider is not initialised (missing API key etc.).
    #[error("LLM provider '{provider}' is not configured.\n{hint}")]
    ProviderNotConfigured { provider: String, hint: String },

    /// A completion call failed after all retries.
    #[error("The {stage} completion failed after {retries} retries: {detail}")]
    CompletionFailed {
        stage: String,
        retries: u32,
        detail: String,
    },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A non-fatal deviation the parser absorbed.
///
/// Each variant carries a bounded excerpt of the offending line. Strict
/// callers can treat a non-empty warning list as a parse failure; the
/// default contract accepts the degraded result.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize, serde::Deserialize)]
pub enum ParseWarning {
    /// The first table line did not look like a pipe-delimited header row.
    /// It was dropped positionally anyway.
    #[error("Schedule header row has unexpected shape: {found:?}")]
    HeaderShape { found: String },

    /// The second table line did not look like a separator row. It was
    /// dropped positionally anyway.
    #[error("Schedule separator row has unexpected shape: {found:?}")]
    SeparatorShape { found: String },

    /// A data row had fewer than five cells; the missing trailing fields
    /// were left empty.
    #[error("Schedule row has {cells} of 5 cells, missing fields left empty: {found:?}")]
    ShortRow { cells: usize, found: String },

    /// A data row's day cell was empty; the row was dropped.
    #[error("Schedule row dropped, day cell is empty: {found:?}")]
    EmptyDay { found: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_failed_display() {
        let e = TripsmithError::CompletionFailed {
            stage: "itinerary".into(),
            retries: 3,
            detail: "HTTP 429".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("itinerary"), "got: {msg}");
        assert!(msg.contains("3 retries"), "got: {msg}");
    }

    #[test]
    fn provider_not_configured_display_keeps_hint() {
        let e = TripsmithError::ProviderNotConfigured {
            provider: "openai".into(),
            hint: "Set OPENAI_API_KEY.".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("openai"));
        assert!(msg.contains("OPENAI_API_KEY"));
    }

    #[test]
    fn short_row_warning_display() {
        let w = ParseWarning::ShortRow {
            cells: 3,
            found: "| 1日目 | 08:00 | 出発 |".into(),
        };
        assert!(w.to_string().contains("3 of 5"));
    }

    #[test]
    fn warnings_serialise() {
        let w = ParseWarning::EmptyDay {
            found: "||08:00|".into(),
        };
        let json = serde_json::to_string(&w).unwrap();
        let back: ParseWarning = serde_json::from_str(&json).unwrap();
        assert_eq!(w, back);
    }
}
