//! Key estimation modules
//!
//! Pitch-class histogram extraction and Krumhansl-Schmuckler template
//! matching over all 24 (root, mode) combinations.

pub mod estimator;
pub mod templates;

pub use estimator::estimate_key;
pub use templates::KeyProfiles;
