//! Transition scoring modules

pub mod transition;

pub use transition::{bpm_compatibility, find_best_transition, key_compatibility};
