//! Windowed RMS energy extraction
//!
//! Partitions a track into consecutive non-overlapping windows of a fixed
//! duration and computes the RMS energy of each, producing the loudness
//! profile the transition scorer searches over.

use crate::analysis::result::EnergyCurve;
use crate::io::sample_buffer::AudioBuffer;

/// Compute the per-window RMS energy curve of a track.
///
/// Window length in samples is `round(window_seconds * sample_rate)`; the
/// final window may be shorter. Returns the empty sentinel curve when the
/// buffer has no samples, the sample rate is zero, or the window rounds to
/// zero samples.
///
/// # Arguments
///
/// * `audio` - Decoded mono audio
/// * `window_seconds` - Window duration in seconds (> 0)
///
/// # Returns
///
/// Energy curve with `ceil(samples / window_samples)` non-negative values
pub fn compute_energy_curve(audio: &AudioBuffer, window_seconds: f32) -> EnergyCurve {
    if audio.is_empty() || audio.sample_rate() == 0 || window_seconds <= 0.0 {
        log::warn!(
            "Energy curve unavailable: {} samples, {} Hz, window={:.3}s",
            audio.len(),
            audio.sample_rate(),
            window_seconds
        );
        return EnergyCurve::empty();
    }

    let window_samples = (window_seconds * audio.sample_rate() as f32).round() as i64;
    if window_samples <= 0 {
        return EnergyCurve::empty();
    }
    let window_samples = window_samples as usize;

    let samples = audio.samples();
    let mut values = Vec::with_capacity(samples.len().div_ceil(window_samples));
    for window in samples.chunks(window_samples) {
        let sum_sq: f32 = window.iter().map(|&x| x * x).sum();
        values.push((sum_sq / window.len() as f32).sqrt());
    }

    log::debug!(
        "Energy curve: {} windows of {:.3}s ({} samples each)",
        values.len(),
        window_seconds,
        window_samples
    );

    EnergyCurve {
        values,
        window_seconds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(samples: Vec<f32>) -> AudioBuffer {
        AudioBuffer::new(samples, 44100, 1)
    }

    #[test]
    fn test_curve_length_matches_ceil_formula() {
        // 0.5s windows at 44100 Hz = 22050 samples per window
        let n = 100_000;
        let curve = compute_energy_curve(&buffer(vec![0.1; n]), 0.5);
        assert_eq!(curve.len(), n.div_ceil(22050));
        assert!(curve.values.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn test_trailing_partial_window_included() {
        // 22050 + 100 samples: two windows, the second covering 100 samples
        let mut samples = vec![0.0; 22050];
        samples.extend(vec![0.5; 100]);
        let curve = compute_energy_curve(&buffer(samples), 0.5);
        assert_eq!(curve.len(), 2);
        assert!((curve.values[0] - 0.0).abs() < 1e-9);
        assert!((curve.values[1] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_silence_yields_all_zero_curve() {
        let curve = compute_energy_curve(&buffer(vec![0.0; 44100]), 0.25);
        assert_eq!(curve.len(), 4);
        assert!(curve.values.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_constant_signal_rms() {
        let curve = compute_energy_curve(&buffer(vec![-0.25; 22050]), 0.5);
        assert_eq!(curve.len(), 1);
        assert!((curve.values[0] - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_inputs_yield_empty_curve() {
        assert!(compute_energy_curve(&buffer(vec![]), 0.5).is_empty());
        assert!(compute_energy_curve(&buffer(vec![0.1; 100]), 0.0).is_empty());
        assert!(compute_energy_curve(&buffer(vec![0.1; 100]), -1.0).is_empty());
        let no_rate = AudioBuffer::new(vec![0.1; 100], 0, 1);
        assert!(compute_energy_curve(&no_rate, 0.5).is_empty());
        // Window so short it rounds to zero samples
        assert!(compute_energy_curve(&buffer(vec![0.1; 100]), 1e-9).is_empty());
    }
}
