//! Audio preprocessing modules
//!
//! Utilities the decoder applies before analysis:
//! - Channel downmixing (multichannel to mono)
//! - Peak normalization

pub mod channel_mixer;
pub mod normalization;
