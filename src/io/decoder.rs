//! Audio decoding using Symphonia
//!
//! The analysis core never touches the filesystem itself; this module is
//! the decode collaborator that turns a file path into a normalized mono
//! [`AudioBuffer`]. Decode failures are the one hard error in the crate.

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::default::get_probe;

use crate::error::AnalysisError;
use crate::io::sample_buffer::AudioBuffer;
use crate::preprocessing::channel_mixer::downmix_interleaved;
use crate::preprocessing::normalization::normalize_peak;

/// Decode an audio file into a normalized mono buffer.
///
/// Every packet is decoded to f32, channels are interleaved and then
/// averaged down to mono, and the result is peak-normalized to the 0.99
/// ceiling (silence preserved).
///
/// # Errors
///
/// Returns `AnalysisError::DecodingError` when the file cannot be opened
/// or probed, contains no supported audio track, reports no sample rate,
/// uses a sample format this decoder does not handle, or yields no audio
/// frames at all. Corrupted packets are skipped with a warning.
pub fn decode_audio_file(path: &Path) -> Result<AudioBuffer, AnalysisError> {
    log::debug!("Decoding audio file: {}", path.display());

    let src = File::open(path).map_err(|e| {
        AnalysisError::DecodingError(format!("Failed to open {}: {}", path.display(), e))
    })?;
    let mss = MediaSourceStream::new(Box::new(src), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| {
            AnalysisError::DecodingError(format!("Unreadable format {}: {}", path.display(), e))
        })?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != symphonia::core::codecs::CODEC_TYPE_NULL)
        .ok_or_else(|| {
            AnalysisError::DecodingError(format!(
                "No supported audio tracks in {}",
                path.display()
            ))
        })?;
    let track_id = track.id;

    let sample_rate = track.codec_params.sample_rate.ok_or_else(|| {
        AnalysisError::DecodingError(format!("Missing sample rate in {}", path.display()))
    })?;
    if sample_rate == 0 {
        return Err(AnalysisError::DecodingError(format!(
            "Invalid sample rate in {}",
            path.display()
        )));
    }

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| {
            AnalysisError::DecodingError(format!("Unsupported codec in {}: {}", path.display(), e))
        })?;

    let mut interleaved: Vec<f32> = Vec::new();
    let mut channels: Option<usize> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(_) => break, // end of stream
        };
        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                let packet_channels = decoded.spec().channels.count();
                if packet_channels == 0 {
                    return Err(AnalysisError::DecodingError(format!(
                        "Invalid channel count in {}",
                        path.display()
                    )));
                }
                channels.get_or_insert(packet_channels);
                push_interleaved(&mut interleaved, &decoded)?;
            }
            Err(symphonia::core::errors::Error::DecodeError(e)) => {
                // Corrupted packets happen in the wild; skip them.
                log::warn!("Skipping undecodable packet in {}: {}", path.display(), e);
                continue;
            }
            Err(e) => {
                return Err(AnalysisError::DecodingError(format!(
                    "Decode failed for {}: {}",
                    path.display(),
                    e
                )));
            }
        }
    }

    let channels = channels.ok_or_else(|| {
        AnalysisError::DecodingError(format!("No audio frames decoded from {}", path.display()))
    })?;

    let mut mono = downmix_interleaved(&interleaved, channels)?;
    normalize_peak(&mut mono);

    log::debug!(
        "Decoded {}: {} mono samples at {} Hz ({} channels)",
        path.display(),
        mono.len(),
        sample_rate,
        channels
    );
    Ok(AudioBuffer::new(mono, sample_rate, channels as u32))
}

/// Append one decoded packet's samples in interleaved frame order,
/// converted to f32.
fn push_interleaved(out: &mut Vec<f32>, decoded: &AudioBufferRef<'_>) -> Result<(), AnalysisError> {
    match decoded {
        AudioBufferRef::F32(buf) => push_frames(out, &**buf, |s| s),
        AudioBufferRef::F64(buf) => push_frames(out, &**buf, |s| s as f32),
        AudioBufferRef::S16(buf) => push_frames(out, &**buf, |s| s as f32 / 32768.0),
        AudioBufferRef::S24(buf) => push_frames(out, &**buf, |s| s.inner() as f32 / 8388608.0),
        AudioBufferRef::S32(buf) => push_frames(out, &**buf, |s| s as f32 / 2147483648.0),
        AudioBufferRef::U8(buf) => push_frames(out, &**buf, |s| (s as f32 - 128.0) / 128.0),
        _ => {
            return Err(AnalysisError::DecodingError(
                "Unsupported sample format".to_string(),
            ))
        }
    }
    Ok(())
}

fn push_frames<T: symphonia::core::sample::Sample>(
    out: &mut Vec<f32>,
    buf: &symphonia::core::audio::AudioBuffer<T>,
    convert: impl Fn(T) -> f32,
) {
    let channels = buf.spec().channels.count();
    out.reserve(buf.frames() * channels);
    for i in 0..buf.frames() {
        for ch in 0..channels {
            out.push(convert(buf.chan(ch)[i]));
        }
    }
}
