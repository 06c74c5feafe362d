//! Audio I/O modules
//!
//! Decoding via Symphonia and the decoded buffer type.

pub mod decoder;
pub mod sample_buffer;

pub use decoder::decode_audio_file;
pub use sample_buffer::AudioBuffer;
