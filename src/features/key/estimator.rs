//! Key estimation via pitch-class histogram template matching
//!
//! Builds a 12-bin pitch-class histogram from short-time magnitude spectra,
//! then correlates it against the Krumhansl-Schmuckler major and minor
//! templates at all 12 rotations. The winning (rotation, mode) pair names
//! the key.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use super::templates::KeyProfiles;
use crate::analysis::result::Key;
use crate::io::sample_buffer::AudioBuffer;

/// Analysis frame length in samples.
const FRAME_SIZE: usize = 4096;

/// Hop between frames in samples.
const HOP_SIZE: usize = 2048;

/// Lowest bin frequency accumulated into the histogram, Hz.
const MIN_FREQ: f32 = 30.0;

/// Highest bin frequency accumulated into the histogram, Hz.
const MAX_FREQ: f32 = 5000.0;

/// Estimate a track's musical key.
///
/// Returns `None` when the key could not be estimated: fewer samples than
/// one analysis frame, zero sample rate, or a spectrum with no energy in
/// the 30 Hz - 5 kHz band (silence).
///
/// # Arguments
///
/// * `audio` - Decoded mono audio
///
/// # Algorithm
///
/// 1. Hann-windowed 4096-sample frames with 2048-sample hop; magnitude
///    spectrum over the real half-spectrum (FFT magnitudes match the direct
///    DFT within floating-point tolerance)
/// 2. Each bin in (30 Hz, 5 kHz] maps to a pitch class via the MIDI note
///    number `69 + 12 log2(f / 440)` rounded to the nearest semitone; the
///    bin magnitude accumulates into a 12-bin histogram
/// 3. The normalized histogram is correlated against the major and minor
///    templates at all 12 rotations; strict `>` keeps the earliest maximal
///    rotation, major checked before minor at each rotation
pub fn estimate_key(audio: &AudioBuffer) -> Option<Key> {
    if audio.sample_rate() == 0 || audio.len() < FRAME_SIZE {
        log::debug!(
            "Key estimation unavailable: {} samples at {} Hz",
            audio.len(),
            audio.sample_rate()
        );
        return None;
    }

    let histogram = pitch_class_histogram(audio)?;
    let profiles = KeyProfiles::krumhansl();

    let mut best_score = f32::NEG_INFINITY;
    let mut best_key = Key::Major(0);
    for shift in 0..12u32 {
        let mut rotated = [0.0f32; 12];
        for (i, slot) in rotated.iter_mut().enumerate() {
            *slot = histogram[(i + shift as usize) % 12];
        }
        let score_major = dot(&rotated, &profiles.major);
        if score_major > best_score {
            best_score = score_major;
            best_key = Key::Major(shift);
        }
        let score_minor = dot(&rotated, &profiles.minor);
        if score_minor > best_score {
            best_score = score_minor;
            best_key = Key::Minor(shift);
        }
    }

    log::debug!("Key estimate: {} (score {:.4})", best_key.name(), best_score);
    Some(best_key)
}

/// Normalized 12-bin pitch-class histogram, or `None` if no spectral
/// energy falls in the analysis band.
fn pitch_class_histogram(audio: &AudioBuffer) -> Option<[f32; 12]> {
    let samples = audio.samples();
    let window = hann_window(FRAME_SIZE);
    let bin_pitch_class = bin_pitch_classes(audio.sample_rate());

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(FRAME_SIZE);
    let mut frame = vec![Complex::new(0.0f32, 0.0f32); FRAME_SIZE];

    let mut histogram = [0.0f32; 12];
    let mut start = 0;
    while start + FRAME_SIZE <= samples.len() {
        for (dst, (&s, &w)) in frame
            .iter_mut()
            .zip(samples[start..start + FRAME_SIZE].iter().zip(window.iter()))
        {
            *dst = Complex::new(s * w, 0.0);
        }
        fft.process(&mut frame);

        for (k, pc) in bin_pitch_class.iter().enumerate() {
            if let Some(pc) = pc {
                histogram[*pc] += frame[k].norm();
            }
        }
        start += HOP_SIZE;
    }

    let sum: f32 = histogram.iter().sum();
    if sum <= 0.0 {
        return None;
    }
    for v in &mut histogram {
        *v /= sum;
    }
    Some(histogram)
}

/// Hann window w[n] = 0.5 (1 - cos(2 pi n / (N - 1))).
fn hann_window(len: usize) -> Vec<f32> {
    (0..len)
        .map(|n| {
            0.5 * (1.0 - (2.0 * std::f32::consts::PI * n as f32 / (len - 1) as f32).cos())
        })
        .collect()
}

/// Pitch class per spectral bin over the real half-spectrum, `None` for DC
/// and bins outside the analysis band.
fn bin_pitch_classes(sample_rate: u32) -> Vec<Option<usize>> {
    let bin_hz = sample_rate as f32 / FRAME_SIZE as f32;
    (0..=FRAME_SIZE / 2)
        .map(|k| {
            if k == 0 {
                return None;
            }
            let freq = bin_hz * k as f32;
            if freq < MIN_FREQ || freq > MAX_FREQ {
                return None;
            }
            let midi = 69.0 + 12.0 * (freq / 440.0).log2();
            Some((midi.round() as i32).rem_euclid(12) as usize)
        })
        .collect()
}

fn dot(a: &[f32; 12], b: &[f32; 12]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
