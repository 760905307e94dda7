//! Audio decoding using Symphonia
//!
//! Turns the encoded payload of a `SoundAsset` into a `DecodedBuffer`:
//! interleaved stereo f32 at the source sample rate. Mono sources are
//! duplicated to both channels, anything wider keeps its first two.

use std::io::Cursor;
use std::time::Duration;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use super::asset::SoundAsset;
use crate::error::{Result, SoundError};

/// A fully decoded clip, ready to be handed to any number of voices
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl DecodedBuffer {
    /// Wrap interleaved stereo samples
    pub fn from_stereo(samples: Vec<f32>, sample_rate: u32) -> Self {
        debug_assert!(samples.len() % 2 == 0, "stereo buffer must have an even length");
        Self {
            samples,
            sample_rate: sample_rate.max(1),
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of stereo frames
    pub fn frames(&self) -> usize {
        self.samples.len() / 2
    }

    /// Stereo frame at `index`, silence past the end
    #[inline]
    pub fn frame(&self, index: usize) -> (f32, f32) {
        match self.samples.get(index * 2..index * 2 + 2) {
            Some(pair) => (pair[0], pair[1]),
            None => (0.0, 0.0),
        }
    }

    /// Exact clip length at normal speed
    pub fn duration(&self) -> Duration {
        let nanos = self.frames() as u128 * 1_000_000_000 / self.sample_rate as u128;
        Duration::from_nanos(nanos as u64)
    }

    /// Clip length when played back at `rate`
    pub fn duration_at_rate(&self, rate: f32) -> Duration {
        scale_by_rate(self.duration(), rate)
    }
}

/// `length` played at `rate`. Non-positive or NaN rates leave it unscaled;
/// rates so small the result overflows saturate at `Duration::MAX`.
pub fn scale_by_rate(length: Duration, rate: f32) -> Duration {
    if rate.is_nan() || rate <= 0.0 || (rate - 1.0).abs() <= f32::EPSILON {
        return length;
    }
    Duration::try_from_secs_f64(length.as_secs_f64() / rate as f64).unwrap_or(Duration::MAX)
}

fn extension_for_mime(mime: &str) -> Option<&'static str> {
    match mime {
        "audio/wav" | "audio/wave" | "audio/x-wav" | "audio/vnd.wave" => Some("wav"),
        "audio/mpeg" | "audio/mp3" => Some("mp3"),
        "audio/aac" | "audio/x-aac" => Some("aac"),
        _ => None,
    }
}

/// Decode an asset's payload in full
pub fn decode_asset(asset: &SoundAsset) -> Result<DecodedBuffer> {
    let name = asset.name();
    let (mime, bytes) = asset.payload()?;

    let mss = MediaSourceStream::new(Box::new(Cursor::new(bytes)), Default::default());

    let mut hint = Hint::new();
    hint.mime_type(&mime);
    if let Some(ext) = extension_for_mime(&mime) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .map_err(|e| SoundError::decode(name, format!("Failed to probe format: {}", e)))?;

    let mut format = probed.format;

    let track = format
        .default_track()
        .ok_or_else(|| SoundError::decode(name, "No audio track found"))?;

    let track_id = track.id;
    let codec_params = track.codec_params.clone();
    let sample_rate = codec_params
        .sample_rate
        .ok_or_else(|| SoundError::decode(name, "Unknown sample rate"))?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| SoundError::decode(name, format!("Unsupported codec: {}", e)))?;

    let mut samples: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => {
                return Err(SoundError::decode(name, format!("Failed to read packet: {}", e)));
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                let spec = *decoded.spec();
                let channels = spec.channels.count();
                let mut buf = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
                buf.copy_interleaved_ref(decoded);
                push_stereo(&mut samples, buf.samples(), channels);
            }
            // Corrupt packet, skip it and keep going
            Err(SymphoniaError::DecodeError(e)) => {
                log::warn!("Skipping undecodable packet in '{}': {}", name, e);
            }
            Err(e) => {
                return Err(SoundError::decode(name, format!("Failed to decode packet: {}", e)));
            }
        }
    }

    if samples.is_empty() {
        return Err(SoundError::decode(name, "No audio frames decoded"));
    }

    let buffer = DecodedBuffer::from_stereo(samples, sample_rate);
    log::debug!(
        "Decoded '{}': {} frames, {} Hz, {:.3}s",
        name,
        buffer.frames(),
        buffer.sample_rate(),
        buffer.duration().as_secs_f32()
    );
    Ok(buffer)
}

fn push_stereo(out: &mut Vec<f32>, interleaved: &[f32], channels: usize) {
    match channels {
        0 => {}
        1 => {
            out.reserve(interleaved.len() * 2);
            for &sample in interleaved {
                out.push(sample);
                out.push(sample);
            }
        }
        2 => out.extend_from_slice(interleaved),
        _ => {
            for frame in interleaved.chunks_exact(channels) {
                out.push(frame[0]);
                out.push(frame[1]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::testing::tone_asset;

    #[test]
    fn test_scale_by_rate() {
        let length = Duration::from_millis(300);
        assert_eq!(scale_by_rate(length, 1.0), length);
        assert_eq!(scale_by_rate(length, 2.0), Duration::from_millis(150));
        assert_eq!(scale_by_rate(length, 0.0), length);
        assert_eq!(scale_by_rate(length, -1.0), length);
        assert_eq!(scale_by_rate(length, f32::NAN), length);
    }

    #[test]
    fn test_scale_by_extreme_rates() {
        let length = Duration::from_millis(300);
        assert_eq!(scale_by_rate(length, 1e-20), Duration::MAX);
        assert_eq!(scale_by_rate(length, f32::MIN_POSITIVE), Duration::MAX);
        assert_eq!(scale_by_rate(length, f32::INFINITY), Duration::ZERO);
    }

    #[test]
    fn test_decode_wav_mono_to_stereo() {
        let asset = tone_asset("tone", 8000, 2400);
        let buffer = decode_asset(&asset).unwrap();

        assert_eq!(buffer.sample_rate(), 8000);
        assert_eq!(buffer.frames(), 2400);
        assert_eq!(buffer.duration(), Duration::from_millis(300));

        let (left, right) = buffer.frame(100);
        assert_eq!(left, right);
    }

    #[test]
    fn test_decode_garbage_is_decode_error() {
        let asset = SoundAsset::from_bytes("noise", "audio/wav", b"definitely not a riff file");
        assert!(matches!(decode_asset(&asset), Err(SoundError::Decode { .. })));
    }

    #[test]
    fn test_duration_at_rate() {
        let buffer = DecodedBuffer::from_stereo(vec![0.0; 2000], 1000);
        assert_eq!(buffer.duration(), Duration::from_secs(1));
        assert_eq!(buffer.duration_at_rate(2.0), Duration::from_millis(500));
        assert_eq!(buffer.duration_at_rate(1.0), Duration::from_secs(1));
    }

    #[test]
    fn test_frame_past_end_is_silent() {
        let buffer = DecodedBuffer::from_stereo(vec![0.5, -0.5], 1000);
        assert_eq!(buffer.frame(0), (0.5, -0.5));
        assert_eq!(buffer.frame(1), (0.0, 0.0));
    }

    #[test]
    fn test_push_stereo_keeps_first_two_channels() {
        let mut out = Vec::new();
        push_stereo(&mut out, &[0.1, 0.2, 0.3, 0.4, 0.5, 0.6], 3);
        assert_eq!(out, vec![0.1, 0.2, 0.4, 0.5]);
    }
}
