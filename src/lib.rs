//! # Mixpoint DSP
//!
//! A transition-point analysis engine for DJ applications: given two
//! decoded tracks, it estimates tempo, musical key, and energy dynamics,
//! then recommends where to mix out of the first track and into the second.
//!
//! ## Features
//!
//! - **Tempo estimation**: onset-novelty autocorrelation over a BPM range
//! - **Key estimation**: pitch-class histogram matched against
//!   Krumhansl-Schmuckler major/minor templates
//! - **Energy curves**: per-window RMS loudness profiles
//! - **Transition scoring**: weighted tempo/key/energy compatibility with
//!   an exhaustive search over window pairs
//!
//! ## Quick Start
//!
//! ```no_run
//! use mixpoint_dsp::{suggest_transition, AnalysisConfig, AudioBuffer};
//!
//! // Decoded audio (mono, f32, normalized); see `io::decode_audio_file`.
//! let track_a = AudioBuffer::new(vec![], 44100, 2);
//! let track_b = AudioBuffer::new(vec![], 44100, 2);
//!
//! let suggestion = suggest_transition(&track_a, &track_b, &AnalysisConfig::default());
//! println!(
//!     "mix out at {:.1}s, in at {:.1}s, score {:.1}/10",
//!     suggestion.exit_seconds, suggestion.enter_seconds, suggestion.score
//! );
//! ```
//!
//! ## Architecture
//!
//! Data flows one way:
//!
//! ```text
//! decoded audio -> leaf analyzers -> TrackAnalysis -> scorer -> TransitionSuggestion
//! ```
//!
//! Every analyzer is a pure, single-pass function of its inputs; invalid
//! input yields sentinel values ("unknown") rather than errors, and the
//! scorer treats those sentinels as neutral evidence.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod io;
pub mod preprocessing;
pub mod scoring;

// Re-export main types
pub use analysis::analyze_track;
pub use analysis::result::{EnergyCurve, Key, TrackAnalysis, TransitionSuggestion};
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use features::energy::compute_energy_curve;
pub use features::key::estimate_key;
pub use features::tempo::estimate_bpm;
pub use io::sample_buffer::AudioBuffer;
pub use scoring::transition::find_best_transition;

/// Analyze two decoded tracks and suggest the best transition point.
///
/// Convenience wrapper over [`analyze_track`] for each buffer followed by
/// [`find_best_transition`]. Callers who want the intermediate per-track
/// results should run those two steps themselves; the leaf analyzers are
/// also exported individually.
///
/// # Arguments
///
/// * `track_a` - The track being mixed out of
/// * `track_b` - The track being mixed into
/// * `config` - BPM search range and energy window duration
pub fn suggest_transition(
    track_a: &AudioBuffer,
    track_b: &AudioBuffer,
    config: &AnalysisConfig,
) -> TransitionSuggestion {
    let a = analyze_track(track_a, config);
    let b = analyze_track(track_b, config);
    find_best_transition(&a, &b)
}
