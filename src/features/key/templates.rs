//! Krumhansl-Schmuckler key profiles
//!
//! Empirically derived reference distributions over the 12 pitch classes
//! characterizing major and minor tonality, used as correlation templates.
//!
//! # Reference
//!
//! Krumhansl, C. L. (1990). Cognitive Foundations of Musical Pitch.
//! Oxford University Press.

/// Major profile, anchored at C (index 0 = tonic).
const MAJOR_PROFILE: [f32; 12] = [
    6.35, 2.23, 3.48, 2.33, 4.38, 4.09, 2.52, 5.19, 2.39, 3.66, 2.29, 2.88,
];

/// Minor profile, anchored at C (index 0 = tonic).
const MINOR_PROFILE: [f32; 12] = [
    6.33, 2.68, 3.52, 5.38, 2.60, 3.53, 2.54, 4.75, 3.98, 2.69, 3.34, 3.17,
];

/// Major/minor tonal templates, pre-normalized to sum to 1.
#[derive(Debug, Clone)]
pub struct KeyProfiles {
    /// Normalized major template
    pub major: [f32; 12],

    /// Normalized minor template
    pub minor: [f32; 12],
}

impl KeyProfiles {
    /// Krumhansl-Schmuckler profiles, normalized.
    pub fn krumhansl() -> Self {
        Self {
            major: normalized(&MAJOR_PROFILE),
            minor: normalized(&MINOR_PROFILE),
        }
    }
}

impl Default for KeyProfiles {
    fn default() -> Self {
        Self::krumhansl()
    }
}

fn normalized(profile: &[f32; 12]) -> [f32; 12] {
    let sum: f32 = profile.iter().sum();
    let mut out = [0.0f32; 12];
    if sum <= 0.0 {
        return out;
    }
    for (dst, &src) in out.iter_mut().zip(profile.iter()) {
        *dst = src / sum;
    }
    out
}
