//! Tempo estimation via onset-novelty autocorrelation
//!
//! Builds a half-wave rectified energy-difference novelty curve, then finds
//! the lag with the strongest unnormalized autocorrelation inside the BPM
//! search range. The fixed frame/hop and unweighted autocorrelation trade
//! accuracy for transparency and determinism.

use crate::io::sample_buffer::AudioBuffer;

/// Analysis frame length in samples, short for onset sensitivity.
const FRAME_SIZE: usize = 1024;

/// Hop between frames in samples.
const HOP_SIZE: usize = 512;

/// Estimate a track's tempo in BPM.
///
/// Returns 0.0 when the tempo could not be estimated: empty buffer, zero
/// sample rate, an invalid BPM range (`min_bpm <= 0`, `max_bpm <= 0`, or
/// `min_bpm >= max_bpm`), too little audio for a novelty curve, or a lag
/// range that collapses after clamping. Estimates landing exactly on a
/// range boundary are valid results.
///
/// # Arguments
///
/// * `audio` - Decoded mono audio
/// * `min_bpm` - Minimum BPM to consider
/// * `max_bpm` - Maximum BPM to consider
///
/// # Algorithm
///
/// 1. Per-frame squared energy over 1024-sample frames with 512-sample hop
/// 2. Novelty = half-wave rectified first difference of energy, then
///    zero-meaned to suppress the DC autocorrelation peak
/// 3. BPM range converted to a lag range in novelty frames
/// 4. Argmax of the unnormalized autocorrelation over that range; strict
///    `>` keeps the earliest maximal lag on ties
/// 5. BPM = 60 / (best_lag * hop_seconds)
pub fn estimate_bpm(audio: &AudioBuffer, min_bpm: f32, max_bpm: f32) -> f32 {
    if audio.sample_rate() == 0 || audio.is_empty() {
        return 0.0;
    }
    if min_bpm <= 0.0 || max_bpm <= 0.0 || min_bpm >= max_bpm {
        log::warn!("Invalid BPM range: [{:.1}, {:.1}]", min_bpm, max_bpm);
        return 0.0;
    }

    let novelty = compute_novelty(audio.samples());
    if novelty.len() < 4 {
        log::debug!("Novelty curve too short for autocorrelation: {} frames", novelty.len());
        return 0.0;
    }
    if novelty.iter().all(|&v| v == 0.0) {
        // Silence or a perfectly flat signal carries no onset information.
        log::debug!("Novelty curve is flat, no periodicity to estimate");
        return 0.0;
    }

    let hop_seconds = HOP_SIZE as f32 / audio.sample_rate() as f32;

    // Shortest period corresponds to the max BPM and vice versa.
    let min_lag = (((60.0 / max_bpm) / hop_seconds).floor() as usize).max(1);
    let mut max_lag = ((60.0 / min_bpm) / hop_seconds).ceil() as usize;
    if max_lag >= novelty.len() {
        max_lag = novelty.len() - 1;
    }
    if min_lag >= max_lag {
        log::warn!(
            "Lag range [{}, {}] collapsed for {} novelty frames",
            min_lag,
            max_lag,
            novelty.len()
        );
        return 0.0;
    }

    let mut best_score = f32::NEG_INFINITY;
    let mut best_lag = min_lag;
    for lag in min_lag..=max_lag {
        let score = autocorrelation_at_lag(&novelty, lag);
        if score > best_score {
            best_score = score;
            best_lag = lag;
        }
    }

    let period_seconds = best_lag as f32 * hop_seconds;
    if period_seconds <= 0.0 {
        return 0.0;
    }
    let bpm = 60.0 / period_seconds;
    log::debug!(
        "Tempo estimate: {:.2} BPM (lag {} of [{}, {}])",
        bpm,
        best_lag,
        min_lag,
        max_lag
    );
    bpm
}

/// Half-wave rectified energy-difference novelty curve, zero-meaned.
fn compute_novelty(samples: &[f32]) -> Vec<f32> {
    if samples.len() < FRAME_SIZE {
        return Vec::new();
    }

    let mut novelty = Vec::new();
    let mut prev_energy = 0.0f32;
    let mut start = 0;
    while start + FRAME_SIZE <= samples.len() {
        let energy: f32 = samples[start..start + FRAME_SIZE]
            .iter()
            .map(|&x| x * x)
            .sum();
        novelty.push((energy - prev_energy).max(0.0));
        prev_energy = energy;
        start += HOP_SIZE;
    }

    if !novelty.is_empty() {
        let mean = novelty.iter().sum::<f32>() / novelty.len() as f32;
        for v in &mut novelty {
            *v -= mean;
        }
    }
    novelty
}

/// Unnormalized autocorrelation of `x` at the given lag.
fn autocorrelation_at_lag(x: &[f32], lag: usize) -> f32 {
    let mut sum = 0.0f32;
    let mut i = 0;
    while i + lag < x.len() {
        sum += x[i] * x[i + lag];
        i += 1;
    }
    sum
}
