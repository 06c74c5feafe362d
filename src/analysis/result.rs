//! Analysis result types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pitch-class names, using shared enharmonic spellings for black keys.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#/Db", "D", "D#/Eb", "E", "F", "F#/Gb", "G", "G#/Ab", "A", "A#/Bb", "B",
];

/// Musical key: a tonal root (pitch class 0 = C .. 11 = B) plus mode.
///
/// An unknown key is represented as `Option<Key>::None` by the callers;
/// the enum itself always names a concrete key. Formatting to a textual
/// label happens only at the boundary via [`Key::name`], and the inverse
/// [`Key::parse`] accepts the same convention, so no component ever needs
/// to re-parse a label it produced itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Major key (0 = C, 1 = C#, ..., 11 = B)
    Major(u32),
    /// Minor key (0 = C, 1 = C#, ..., 11 = B)
    Minor(u32),
}

impl Key {
    /// Pitch class of the tonal root (0 = C .. 11 = B).
    pub fn pitch_class(&self) -> u32 {
        match self {
            Key::Major(i) | Key::Minor(i) => *i % 12,
        }
    }

    /// Key label in the "<root> <mode>" convention (e.g., "A minor",
    /// "F#/Gb major").
    pub fn name(&self) -> String {
        match self {
            Key::Major(i) => format!("{} major", NOTE_NAMES[*i as usize % 12]),
            Key::Minor(i) => format!("{} minor", NOTE_NAMES[*i as usize % 12]),
        }
    }

    /// Parse a "<root> <mode>" label back into a key.
    ///
    /// The leading root token is matched case-insensitively against the
    /// shared enharmonic spellings and their single halves ("C#/Db", "C#",
    /// "Db" all name pitch class 1).
    ///
    /// # Example
    ///
    /// ```
    /// use mixpoint_dsp::Key;
    ///
    /// assert_eq!(Key::parse("A minor"), Some(Key::Minor(9)));
    /// assert_eq!(Key::parse("f#/gb MAJOR"), Some(Key::Major(6)));
    /// assert_eq!(Key::parse("db major"), Some(Key::Major(1)));
    /// assert_eq!(Key::parse("Unknown"), None);
    /// ```
    pub fn parse(label: &str) -> Option<Self> {
        let mut tokens = label.split_whitespace();
        let root = tokens.next()?.to_uppercase();
        let mode = tokens.next()?.to_uppercase();

        let pc = NOTE_NAMES.iter().position(|name| {
            let up = name.to_uppercase();
            up == root || up.split('/').any(|alias| alias == root)
        })? as u32;

        match mode.as_str() {
            "MAJOR" => Some(Key::Major(pc)),
            "MINOR" => Some(Key::Minor(pc)),
            _ => None,
        }
    }

    /// Key in DJ wheel notation (e.g., "8A" for A minor, "8B" for C major).
    ///
    /// Minor keys map to the "A" ring and major keys to the "B" ring,
    /// ordered by the circle of fifths as popularized by harmonic-mixing
    /// software.
    pub fn camelot(&self) -> String {
        // Circle of fifths for the major ring: 8B = C, 9B = G, ...
        const MAJOR_RING: [u32; 12] = [0, 7, 2, 9, 4, 11, 6, 1, 8, 3, 10, 5];
        // Relative minors shifted three positions: 8A = Am, 9A = Em, ...
        const MINOR_RING: [u32; 12] = [9, 4, 11, 6, 1, 8, 3, 10, 5, 0, 7, 2];

        match self {
            Key::Major(i) => {
                let pos = MAJOR_RING.iter().position(|&x| x == *i % 12).unwrap_or(0);
                format!("{}B", (pos + 7) % 12 + 1)
            }
            Key::Minor(i) => {
                let pos = MINOR_RING.iter().position(|&x| x == *i % 12).unwrap_or(0);
                format!("{}A", (pos + 7) % 12 + 1)
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-window RMS energy of a track.
///
/// One value per fixed-duration window, trailing partial window included.
/// An empty curve is the sentinel for "could not compute".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyCurve {
    /// RMS values, one per window, all non-negative
    pub values: Vec<f32>,

    /// Window duration in seconds (> 0 when the curve is non-empty)
    pub window_seconds: f32,
}

impl EnergyCurve {
    /// Empty sentinel curve.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of windows.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the curve holds no windows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Per-track analysis aggregate.
///
/// Built once by the orchestrator and never mutated afterwards. Unknown
/// estimates are carried as first-class sentinel values: `bpm == 0.0`,
/// `key == None`, empty `energy`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAnalysis {
    /// BPM estimate (0.0 = could not estimate)
    pub bpm: f32,

    /// Detected key, if any
    pub key: Option<Key>,

    /// Windowed RMS energy curve
    pub energy: EnergyCurve,
}

impl TrackAnalysis {
    /// Energy window duration in seconds.
    pub fn window_seconds(&self) -> f32 {
        self.energy.window_seconds
    }
}

/// Suggested transition between two tracks.
///
/// Produced once per track pair by the scorer; a pure function of the two
/// [`TrackAnalysis`] values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionSuggestion {
    /// Composite compatibility score, 0-10
    pub score: f32,

    /// Suggested exit point in track A, seconds
    pub exit_seconds: f32,

    /// Suggested entry point in track B, seconds
    pub enter_seconds: f32,

    /// Tempo compatibility sub-score, 0-1
    pub tempo_component: f32,

    /// Key compatibility sub-score, 0-1
    pub key_component: f32,

    /// Energy alignment sub-score, 0-1
    pub energy_component: f32,
}
