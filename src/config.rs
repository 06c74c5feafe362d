//! Configuration parameters for track analysis

use serde::{Deserialize, Serialize};

/// Analysis configuration parameters
///
/// The onset and key analysis frame sizes are fixed module constants
/// (see [`crate::features::tempo`] and [`crate::features::key`]); this
/// struct carries the knobs a caller may reasonably want to turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Minimum BPM to consider (default: 80.0)
    pub min_bpm: f32,

    /// Maximum BPM to consider (default: 180.0)
    pub max_bpm: f32,

    /// Energy curve window duration in seconds (default: 0.5)
    pub energy_window_seconds: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_bpm: 80.0,
            max_bpm: 180.0,
            energy_window_seconds: 0.5,
        }
    }
}
