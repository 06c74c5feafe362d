//! Peak normalization
//!
//! Decoded audio is attenuated so its peak stays under a fixed ceiling,
//! giving every analyzer the same headroom regardless of source loudness.
//! Silence passes through untouched.

/// Peak ceiling applied after decoding.
pub const TARGET_PEAK: f32 = 0.99;

/// Below this peak the buffer is treated as silent and left alone.
const SILENCE_FLOOR: f32 = 1e-6;

/// Attenuate `samples` in place so the peak amplitude is at most
/// [`TARGET_PEAK`]. Quieter signals are never boosted.
///
/// # Returns
///
/// The gain that was applied (1.0 when nothing changed).
pub fn normalize_peak(samples: &mut [f32]) -> f32 {
    let peak = samples.iter().fold(0.0f32, |max, &v| max.max(v.abs()));
    if peak <= SILENCE_FLOOR || peak <= TARGET_PEAK {
        return 1.0;
    }

    let gain = TARGET_PEAK / peak;
    for v in samples.iter_mut() {
        *v *= gain;
    }
    log::debug!("Peak normalization: peak {:.4} -> {:.2}, gain {:.4}", peak, TARGET_PEAK, gain);
    gain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loud_signal_attenuated_to_ceiling() {
        let mut samples = vec![1.5, -2.0, 0.5];
        let gain = normalize_peak(&mut samples);
        assert!(gain < 1.0);
        let peak = samples.iter().fold(0.0f32, |m, &v| m.max(v.abs()));
        assert!((peak - TARGET_PEAK).abs() < 1e-6);
    }

    #[test]
    fn test_quiet_signal_untouched() {
        let mut samples = vec![0.25, -0.5, 0.1];
        let original = samples.clone();
        assert_eq!(normalize_peak(&mut samples), 1.0);
        assert_eq!(samples, original);
    }

    #[test]
    fn test_silence_preserved() {
        let mut samples = vec![0.0; 1024];
        assert_eq!(normalize_peak(&mut samples), 1.0);
        assert!(samples.iter().all(|&v| v == 0.0));
    }
}
