//! Error type shared by the sound engine, controllers and settings store

use thiserror::Error;

/// Everything that can go wrong inside the sound subsystem.
///
/// None of these are fatal to a caller: the controller and the settings
/// layer log them and fall back to silence or to the in-memory default.
#[derive(Debug, Error)]
pub enum SoundError {
    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    #[error("Failed to decode base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Failed to decode audio '{asset}': {message}")]
    Decode { asset: String, message: String },

    /// Stopping a voice that already ended or was stopped before.
    #[error("Voice {0} is already stopped")]
    AlreadyStopped(u64),

    #[error("Settings storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Audio device error: {0}")]
    Device(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl SoundError {
    pub(crate) fn decode(asset: &str, message: impl Into<String>) -> Self {
        Self::Decode {
            asset: asset.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SoundError>;
