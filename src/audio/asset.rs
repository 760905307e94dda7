//! Embedded sound assets
//!
//! A `SoundAsset` pairs a name with an encoded clip stored inline as a
//! `data:` URI. Built-in assets are `const` values, runtime assets can
//! be created from owned strings or raw bytes.

use base64::Engine;
use std::borrow::Cow;
use std::fmt;
use std::time::Duration;

use crate::error::{Result, SoundError};

#[derive(Clone, PartialEq, Eq)]
pub struct SoundAsset {
    name: Cow<'static, str>,
    data_uri: Cow<'static, str>,
    duration: Option<Duration>,
}

impl SoundAsset {
    /// Declare an asset from static data, usable in `const` items
    pub const fn from_static(
        name: &'static str,
        data_uri: &'static str,
        duration: Option<Duration>,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            data_uri: Cow::Borrowed(data_uri),
            duration,
        }
    }

    pub fn new(name: impl Into<String>, data_uri: impl Into<String>, duration: Option<Duration>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            data_uri: Cow::Owned(data_uri.into()),
            duration,
        }
    }

    /// Build an asset by base64-encoding raw file bytes
    pub fn from_bytes(name: impl Into<String>, mime: &str, bytes: &[u8]) -> Self {
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        Self::new(name, format!("data:{};base64,{}", mime, encoded), None)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }

    /// Duration known ahead of decoding, if any
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Identity used by the decode cache
    pub(crate) fn cache_key(&self) -> &str {
        &self.data_uri
    }

    /// Split the data URI into its MIME type and decoded payload bytes
    pub fn payload(&self) -> Result<(String, Vec<u8>)> {
        let rest = self
            .data_uri
            .strip_prefix("data:")
            .ok_or_else(|| SoundError::InvalidDataUri(format!("'{}' is missing the data: scheme", self.name)))?;

        let (meta, body) = rest
            .split_once(',')
            .ok_or_else(|| SoundError::InvalidDataUri(format!("'{}' has no payload separator", self.name)))?;

        let mime = match meta.strip_suffix(";base64") {
            Some(mime) => mime,
            None => {
                return Err(SoundError::InvalidDataUri(format!(
                    "'{}' is not base64 encoded",
                    self.name
                )))
            }
        };

        let bytes = base64::engine::general_purpose::STANDARD.decode(body.trim())?;
        Ok((mime.to_string(), bytes))
    }
}

// The payload can be several kilobytes of base64, keep it out of logs
impl fmt::Debug for SoundAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoundAsset")
            .field("name", &self.name)
            .field("data_uri_len", &self.data_uri.len())
            .field("duration", &self.duration)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_roundtrip_from_bytes() {
        let asset = SoundAsset::from_bytes("blip", "audio/wav", b"RIFF....WAVE");
        assert!(asset.data_uri().starts_with("data:audio/wav;base64,"));

        let (mime, bytes) = asset.payload().unwrap();
        assert_eq!(mime, "audio/wav");
        assert_eq!(bytes, b"RIFF....WAVE");
    }

    #[test]
    fn test_rejects_non_data_uri() {
        let asset = SoundAsset::new("bad", "https://example.com/a.wav", None);
        assert!(matches!(asset.payload(), Err(SoundError::InvalidDataUri(_))));
    }

    #[test]
    fn test_rejects_plain_text_payload() {
        let asset = SoundAsset::new("bad", "data:audio/wav,hello", None);
        assert!(matches!(asset.payload(), Err(SoundError::InvalidDataUri(_))));
    }

    #[test]
    fn test_rejects_broken_base64() {
        let asset = SoundAsset::new("bad", "data:audio/wav;base64,@@@@", None);
        assert!(matches!(asset.payload(), Err(SoundError::Base64(_))));
    }

    #[test]
    fn test_debug_hides_payload() {
        let asset = SoundAsset::from_static("quiet", "data:audio/wav;base64,AAAA", None);
        let debug = format!("{:?}", asset);
        assert!(debug.contains("quiet"));
        assert!(!debug.contains("AAAA"));
    }
}
