//! Per-track orchestration and result types

pub mod result;

use crate::config::AnalysisConfig;
use crate::features::energy::compute_energy_curve;
use crate::features::key::estimate_key;
use crate::features::tempo::estimate_bpm;
use crate::io::sample_buffer::AudioBuffer;
use result::TrackAnalysis;

/// Run the three leaf analyzers over one track.
///
/// The returned record is never mutated afterwards. Analyzer failures are
/// carried as sentinel values (0.0 BPM, `None` key, empty energy curve),
/// not errors; the transition scorer substitutes neutral sub-scores for
/// them.
///
/// # Arguments
///
/// * `audio` - Decoded mono audio
/// * `config` - BPM search range and energy window duration
pub fn analyze_track(audio: &AudioBuffer, config: &AnalysisConfig) -> TrackAnalysis {
    log::debug!(
        "Analyzing track: {} samples at {} Hz",
        audio.len(),
        audio.sample_rate()
    );

    TrackAnalysis {
        bpm: estimate_bpm(audio, config.min_bpm, config.max_bpm),
        key: estimate_key(audio),
        energy: compute_energy_curve(audio, config.energy_window_seconds),
    }
}
