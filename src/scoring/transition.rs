//! Multi-factor transition scoring
//!
//! Combines tempo compatibility, harmonic (key) compatibility, and energy
//! alignment into a single 0-10 score plus the best exit/entry timestamps.
//! The energy search is an exhaustive pass over every pair of energy
//! windows; quadratic, but curves are short (one value per half second by
//! default) and the documented first-found-maximum tie-break keeps results
//! reproducible.

use crate::analysis::result::{Key, TrackAnalysis, TransitionSuggestion};

/// Flat-curve epsilon: a curve whose dynamic range is below this
/// normalizes to all zeros.
const FLAT_EPSILON: f32 = 1e-12;

fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// Tempo compatibility in [0, 1].
///
/// Neutral 0.5 when either BPM is unknown (<= 0). Otherwise the relative
/// difference against the mean BPM maps through fixed thresholds modelling
/// DJ tempo-stretch tolerance: small relative gaps are fully mixable,
/// larger gaps degrade sharply.
pub fn bpm_compatibility(bpm_a: f32, bpm_b: f32) -> f32 {
    if bpm_a <= 0.0 || bpm_b <= 0.0 {
        return 0.5;
    }
    let avg = 0.5 * (bpm_a + bpm_b);
    if avg <= 0.0 {
        return 0.0;
    }
    let rel_diff = (bpm_a - bpm_b).abs() / avg;
    if rel_diff <= 0.03 {
        1.0
    } else if rel_diff <= 0.06 {
        0.7
    } else if rel_diff <= 0.10 {
        0.4
    } else {
        0.15
    }
}

/// Harmonic key compatibility in [0, 1].
///
/// Neutral 0.5 when either key is unknown. Otherwise scores the absolute
/// pitch-class distance mod 12 by harmonic-mixing rules: same root 1.0,
/// perfect fourth/fifth 0.85, relative major/minor 0.75, tritone 0.2,
/// adjacent semitone 0.6, anything else 0.4. Symmetric by construction.
pub fn key_compatibility(key_a: Option<Key>, key_b: Option<Key>) -> f32 {
    let (a, b) = match (key_a, key_b) {
        (Some(a), Some(b)) => (a, b),
        _ => return 0.5,
    };
    let diff = (a.pitch_class() as i32 - b.pitch_class() as i32).abs() % 12;
    match diff {
        0 => 1.0,
        5 | 7 => 0.85,
        3 | 9 => 0.75,
        6 => 0.2,
        1 | 11 => 0.6,
        _ => 0.4,
    }
}

/// Min-max normalize a curve to [0, 1].
///
/// A flat curve (dynamic range below the epsilon) normalizes to all zeros;
/// an already-normalized curve passes through unchanged.
pub fn normalize_min_max(values: &[f32]) -> Vec<f32> {
    if values.is_empty() {
        return Vec::new();
    }
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if max - min < FLAT_EPSILON {
        return vec![0.0; values.len()];
    }
    values.iter().map(|&v| (v - min) / (max - min)).collect()
}

/// Find the best transition point between two analyzed tracks.
///
/// Soft-fails to the all-zero suggestion when either energy curve is empty
/// or either window duration is non-positive. Unknown BPM or key on either
/// side contributes the neutral 0.5 sub-score rather than aborting.
///
/// The energy search visits every (i, j) window pair in row-major order
/// and keeps the first-found maximum (strict `>`), scoring a quiet,
/// falling exit in track A against a loud, rising entry in track B.
pub fn find_best_transition(a: &TrackAnalysis, b: &TrackAnalysis) -> TransitionSuggestion {
    if a.energy.is_empty()
        || b.energy.is_empty()
        || a.window_seconds() <= 0.0
        || b.window_seconds() <= 0.0
    {
        log::warn!("Transition scoring unavailable: missing energy curve");
        return TransitionSuggestion::default();
    }

    let tempo_score = bpm_compatibility(a.bpm, b.bpm);
    let key_score = key_compatibility(a.key, b.key);

    let norm_a = normalize_min_max(&a.energy.values);
    let norm_b = normalize_min_max(&b.energy.values);

    let mut best_energy = -1.0f32;
    let mut best_i = 0usize;
    let mut best_j = 0usize;
    for (i, &cur_a) in norm_a.iter().enumerate() {
        let slope_a = if i > 0 { cur_a - norm_a[i - 1] } else { 0.0 };
        let exit_level = 1.0 - cur_a; // prefer exiting on low energy
        for (j, &cur_b) in norm_b.iter().enumerate() {
            let slope_b = if j > 0 { cur_b - norm_b[j - 1] } else { 0.0 };
            // Prefer entering on rising energy at a louder point than the exit.
            let rise = clamp01((-slope_a).max(0.0) * slope_b.max(0.0));
            let level = clamp01(exit_level * cur_b);
            let energy = 0.6 * level + 0.4 * rise;
            if energy > best_energy {
                best_energy = energy;
                best_i = i;
                best_j = j;
            }
        }
    }
    let energy_score = clamp01(best_energy);

    let score = clamp01(0.4 * tempo_score + 0.3 * key_score + 0.3 * energy_score) * 10.0;
    log::debug!(
        "Transition: score {:.2}/10 at A[{}] -> B[{}] (tempo {:.2}, key {:.2}, energy {:.2})",
        score,
        best_i,
        best_j,
        tempo_score,
        key_score,
        energy_score
    );

    TransitionSuggestion {
        score,
        exit_seconds: best_i as f32 * a.window_seconds(),
        enter_seconds: best_j as f32 * b.window_seconds(),
        tempo_component: tempo_score,
        key_component: key_score,
        energy_component: energy_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::result::EnergyCurve;

    fn track(bpm: f32, key: Option<Key>, values: Vec<f32>) -> TrackAnalysis {
        TrackAnalysis {
            bpm,
            key,
            energy: EnergyCurve {
                values,
                window_seconds: 0.5,
            },
        }
    }

    #[test]
    fn test_bpm_compatibility_thresholds() {
        assert_eq!(bpm_compatibility(120.0, 120.0), 1.0);
        assert_eq!(bpm_compatibility(120.0, 123.0), 1.0); // ~2.5%
        assert_eq!(bpm_compatibility(120.0, 126.0), 0.7); // ~4.9%
        assert_eq!(bpm_compatibility(120.0, 131.0), 0.4); // ~8.8%
        assert_eq!(bpm_compatibility(120.0, 160.0), 0.15);
        assert_eq!(bpm_compatibility(0.0, 120.0), 0.5);
        assert_eq!(bpm_compatibility(120.0, -5.0), 0.5);
    }

    #[test]
    fn test_key_compatibility_rules() {
        let c = Some(Key::Major(0));
        assert_eq!(key_compatibility(c, Some(Key::Minor(0))), 1.0); // same root
        assert_eq!(key_compatibility(c, Some(Key::Major(7))), 0.85); // fifth
        assert_eq!(key_compatibility(c, Some(Key::Major(5))), 0.85); // fourth
        assert_eq!(key_compatibility(c, Some(Key::Minor(9))), 0.75); // relative minor
        assert_eq!(key_compatibility(c, Some(Key::Major(6))), 0.2); // tritone
        assert_eq!(key_compatibility(c, Some(Key::Major(1))), 0.6); // adjacent
        assert_eq!(key_compatibility(c, Some(Key::Major(11))), 0.6);
        assert_eq!(key_compatibility(c, Some(Key::Major(4))), 0.4);
        assert_eq!(key_compatibility(c, None), 0.5);
        assert_eq!(key_compatibility(None, None), 0.5);
    }

    #[test]
    fn test_key_compatibility_symmetric() {
        for pa in 0..12 {
            for pb in 0..12 {
                let a = Some(Key::Major(pa));
                let b = Some(Key::Minor(pb));
                assert_eq!(
                    key_compatibility(a, b),
                    key_compatibility(b, a),
                    "asymmetry at ({}, {})",
                    pa,
                    pb
                );
            }
        }
    }

    #[test]
    fn test_normalize_min_max() {
        let normed = normalize_min_max(&[2.0, 4.0, 6.0]);
        assert_eq!(normed, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_normalize_min_max_idempotent() {
        let once = normalize_min_max(&[0.3, 0.9, 0.1, 0.5]);
        let twice = normalize_min_max(&once);
        for (a, b) in once.iter().zip(twice.iter()) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_normalize_min_max_flat_curve() {
        assert_eq!(normalize_min_max(&[0.7; 5]), vec![0.0; 5]);
        assert!(normalize_min_max(&[]).is_empty());
    }

    #[test]
    fn test_empty_curve_soft_fails() {
        let a = track(120.0, Some(Key::Major(0)), vec![]);
        let b = track(120.0, Some(Key::Major(0)), vec![0.5, 0.6]);
        assert_eq!(find_best_transition(&a, &b), TransitionSuggestion::default());
        assert_eq!(find_best_transition(&b, &a), TransitionSuggestion::default());
    }

    #[test]
    fn test_nonpositive_window_soft_fails() {
        let mut a = track(120.0, None, vec![0.5, 0.6]);
        a.energy.window_seconds = 0.0;
        let b = track(120.0, None, vec![0.5, 0.6]);
        assert_eq!(find_best_transition(&a, &b), TransitionSuggestion::default());
    }

    #[test]
    fn test_falling_exit_rising_entry_picks_final_indices() {
        let a = track(
            128.0,
            Some(Key::Minor(9)),
            vec![1.0, 0.75, 0.5, 0.25, 0.0],
        );
        let b = track(
            128.0,
            Some(Key::Minor(9)),
            vec![0.0, 0.25, 0.5, 0.75, 1.0],
        );
        let suggestion = find_best_transition(&a, &b);
        // Last window of A (quiet, falling) into last window of B (loud, rising)
        assert!((suggestion.exit_seconds - 4.0 * 0.5).abs() < 1e-6);
        assert!((suggestion.enter_seconds - 4.0 * 0.5).abs() < 1e-6);
        assert_eq!(suggestion.tempo_component, 1.0);
        assert_eq!(suggestion.key_component, 1.0);
        assert!(suggestion.score > 0.0 && suggestion.score <= 10.0);
    }

    #[test]
    fn test_score_stays_in_range() {
        let a = track(174.0, Some(Key::Major(6)), vec![0.9, 0.1, 0.8, 0.2]);
        let b = track(80.0, Some(Key::Major(0)), vec![0.2, 0.9, 0.1, 0.7]);
        let suggestion = find_best_transition(&a, &b);
        assert!((0.0..=10.0).contains(&suggestion.score));
        for component in [
            suggestion.tempo_component,
            suggestion.key_component,
            suggestion.energy_component,
        ] {
            assert!((0.0..=1.0).contains(&component));
        }
    }

    #[test]
    fn test_tie_break_keeps_first_pair() {
        // Two flat curves: every pair scores 0.0, so (0, 0) must win.
        let a = track(0.0, None, vec![0.4; 3]);
        let b = track(0.0, None, vec![0.4; 3]);
        let suggestion = find_best_transition(&a, &b);
        assert_eq!(suggestion.exit_seconds, 0.0);
        assert_eq!(suggestion.enter_seconds, 0.0);
        // Unknown BPM and key contribute neutral halves; flat energy adds 0.
        assert!((suggestion.score - 3.5).abs() < 1e-5);
    }
}
