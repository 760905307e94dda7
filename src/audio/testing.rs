//! Test helpers for building small in-memory clips

use super::asset::SoundAsset;

/// 16-bit mono PCM WAV holding a quiet square-ish tone
pub(crate) fn wav_bytes(sample_rate: u32, frames: u32) -> Vec<u8> {
    let data_len = frames * 2;
    let mut out = Vec::with_capacity(44 + data_len as usize);

    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&1u16.to_le_bytes()); // mono
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&(sample_rate * 2).to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());

    for i in 0..frames {
        let sample: i16 = if (i / 20) % 2 == 0 { 4000 } else { -4000 };
        out.extend_from_slice(&sample.to_le_bytes());
    }
    out
}

pub(crate) fn tone_asset(name: &str, sample_rate: u32, frames: u32) -> SoundAsset {
    SoundAsset::from_bytes(name, "audio/wav", &wav_bytes(sample_rate, frames))
}
