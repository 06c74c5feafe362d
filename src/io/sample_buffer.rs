//! Decoded audio buffer type

/// Owned, immutable view of mono-normalized audio.
///
/// Samples are real-valued amplitudes in [-1, 1]; after decoding, the peak
/// amplitude is at most [`crate::preprocessing::normalization::TARGET_PEAK`]
/// unless the buffer is silent. The original channel count is kept for
/// reporting even though the samples are already downmixed.
#[derive(Debug, Clone)]
pub struct AudioBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
    channels: u32,
}

impl AudioBuffer {
    /// Wrap already-decoded mono samples.
    pub fn new(samples: Vec<f32>, sample_rate: u32, channels: u32) -> Self {
        Self {
            samples,
            sample_rate,
            channels,
        }
    }

    /// Mono samples in [-1, 1].
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Channel count of the source audio before downmixing.
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Number of mono samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds (0.0 when the sample rate is unusable).
    pub fn duration_seconds(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f32 / self.sample_rate as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration() {
        let buf = AudioBuffer::new(vec![0.0; 22050], 44100, 2);
        assert!((buf.duration_seconds() - 0.5).abs() < 1e-6);
        assert_eq!(buf.channels(), 2);
    }

    #[test]
    fn test_zero_sample_rate_duration() {
        let buf = AudioBuffer::new(vec![0.0; 100], 0, 1);
        assert_eq!(buf.duration_seconds(), 0.0);
    }
}
