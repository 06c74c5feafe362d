//! Channel downmixing (multichannel to mono)

use crate::error::AnalysisError;

/// Downmix interleaved multichannel samples to mono by averaging the
/// channels of each frame.
///
/// # Arguments
///
/// * `interleaved` - Interleaved samples (frame-major)
/// * `channels` - Channel count (> 0)
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` when `channels` is zero.
pub fn downmix_interleaved(interleaved: &[f32], channels: usize) -> Result<Vec<f32>, AnalysisError> {
    if channels == 0 {
        return Err(AnalysisError::InvalidInput(
            "Channel count must be > 0".to_string(),
        ));
    }
    if channels == 1 {
        return Ok(interleaved.to_vec());
    }

    let mono = interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect();
    Ok(mono)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stereo_average() {
        let interleaved = vec![1.0, 0.0, 0.5, 0.5, -1.0, 1.0];
        let mono = downmix_interleaved(&interleaved, 2).unwrap();
        assert_eq!(mono, vec![0.5, 0.5, 0.0]);
    }

    #[test]
    fn test_mono_passthrough() {
        let samples = vec![0.1, 0.2, 0.3];
        assert_eq!(downmix_interleaved(&samples, 1).unwrap(), samples);
    }

    #[test]
    fn test_zero_channels_rejected() {
        assert!(downmix_interleaved(&[0.0], 0).is_err());
    }

    #[test]
    fn test_trailing_partial_frame_dropped() {
        let interleaved = vec![1.0, 1.0, 0.5];
        assert_eq!(downmix_interleaved(&interleaved, 2).unwrap(), vec![1.0]);
    }
}
