//! Warning taxonomy for the conversion pipeline
//!
//! The converter never fails the caller; degraded outcomes are reported
//! through these warnings alongside the always-valid document.

use thiserror::Error;

/// Non-fatal issues encountered while converting HTML
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionWarning {
    /// The input was empty or whitespace-only
    #[error("input HTML was empty; produced the minimal document")]
    EmptyInput,

    /// Transformation produced no blocks at all
    #[error("conversion produced no blocks; substituted an empty paragraph")]
    EmptyOutput,

    /// The HTML parser reported a recoverable problem with one node
    #[error("malformed HTML node skipped: {detail}")]
    NodeSkipped {
        /// Parser diagnostic for the skipped node
        detail: String,
    },
}
