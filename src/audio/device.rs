//! Output device enumeration and stream configuration

use cpal::traits::{DeviceTrait, HostTrait};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SoundError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioDeviceInfo {
    pub name: String,
    pub is_default: bool,
}

/// Preferred stream settings; the device may override them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub sample_rate: u32,
    pub channels: u16,
    pub buffer_size: u32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            channels: 2,
            buffer_size: 512,
        }
    }
}

/// Get list of available output devices
pub fn list_output_devices() -> Result<Vec<AudioDeviceInfo>> {
    let host = cpal::default_host();
    let default_name = host.default_output_device().and_then(|d| d.name().ok());

    let devices = host
        .output_devices()
        .map_err(|e| SoundError::Device(format!("Failed to enumerate devices: {}", e)))?;

    Ok(describe_devices(
        devices.filter_map(|device| device.name().ok()),
        default_name.as_deref(),
    ))
}

fn describe_devices(names: impl Iterator<Item = String>, default_name: Option<&str>) -> Vec<AudioDeviceInfo> {
    names
        .map(|name| AudioDeviceInfo {
            is_default: Some(name.as_str()) == default_name,
            name,
        })
        .collect()
}

/// Output device by name, or the host default if `name` is None
pub fn get_output_device(name: Option<&str>) -> Result<cpal::Device> {
    let host = cpal::default_host();

    let Some(wanted) = name else {
        return host
            .default_output_device()
            .ok_or_else(|| SoundError::Device("No default output device found".to_string()));
    };

    let mut devices = host
        .output_devices()
        .map_err(|e| SoundError::Device(format!("Failed to enumerate devices: {}", e)))?;

    devices
        .find(|device| device.name().map(|n| n == wanted).unwrap_or(false))
        .ok_or_else(|| SoundError::Device(format!("Device '{}' not found", wanted)))
}

/// Pick an f32 stream config close to `preferred`, falling back to the
/// device default (capped at stereo)
pub fn get_stream_config(device: &cpal::Device, preferred: &AudioConfig) -> Result<cpal::StreamConfig> {
    let supported = device
        .supported_output_configs()
        .map_err(|e| SoundError::Device(format!("Failed to get supported configs: {}", e)))?;

    for range in supported {
        if range.sample_format() != cpal::SampleFormat::F32 {
            continue;
        }
        let rate_ok = (range.min_sample_rate().0..=range.max_sample_rate().0).contains(&preferred.sample_rate);
        if rate_ok && range.channels() >= preferred.channels {
            return Ok(cpal::StreamConfig {
                channels: preferred.channels,
                sample_rate: cpal::SampleRate(preferred.sample_rate),
                buffer_size: cpal::BufferSize::Fixed(preferred.buffer_size),
            });
        }
    }

    let default_config = device
        .default_output_config()
        .map_err(|e| SoundError::Device(format!("Failed to get default config: {}", e)))?;

    Ok(cpal::StreamConfig {
        channels: default_config.channels().min(2),
        sample_rate: default_config.sample_rate(),
        buffer_size: cpal::BufferSize::Default,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_devices_marks_default() {
        let names = ["Speakers", "Headphones"].into_iter().map(String::from);
        let devices = describe_devices(names, Some("Headphones"));

        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].name, "Speakers");
        assert!(!devices[0].is_default);
        assert_eq!(devices[1].name, "Headphones");
        assert!(devices[1].is_default);
    }

    #[test]
    fn test_describe_devices_without_default() {
        let names = ["Speakers"].into_iter().map(String::from);
        let devices = describe_devices(names, None);
        assert!(devices.iter().all(|d| !d.is_default));
    }

    #[test]
    fn test_audio_config_partial_json() {
        let config: AudioConfig = serde_json::from_str(r#"{"sample_rate": 48000}"#).unwrap();
        assert_eq!(config.sample_rate, 48000);
        assert_eq!(config.channels, 2);
        assert_eq!(config.buffer_size, 512);
    }
}
