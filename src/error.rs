//! Error types for the transition analysis engine

use std::fmt;

/// Errors that can occur while preparing audio for analysis.
///
/// The leaf analyzers themselves never return errors: invalid input is
/// reported through sentinel values (0.0 BPM, `None` key, empty energy
/// curve) so that a degraded track still flows through the pipeline.
/// Hard errors are reserved for decoding, where there is nothing useful
/// to hand back.
#[derive(Debug, Clone)]
pub enum AnalysisError {
    /// Invalid input parameters
    InvalidInput(String),

    /// Audio decoding error
    DecodingError(String),

    /// Processing error during analysis
    ProcessingError(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::DecodingError(msg) => write!(f, "Decoding error: {}", msg),
            AnalysisError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
