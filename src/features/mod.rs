//! Feature extraction modules
//!
//! The three leaf analyzers of the pipeline:
//! - Windowed RMS energy curves
//! - Tempo estimation (onset-novelty autocorrelation)
//! - Key estimation (pitch-class histogram template matching)

pub mod energy;
pub mod key;
pub mod tempo;
