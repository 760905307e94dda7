//! Voice mixer run inside the audio callback
//!
//! Never allocates while rendering except when voices are added. Voices
//! stopped from the control side are dropped silently; voices that run
//! out of samples are reported through `on_ended`.

use std::sync::Arc;

use super::VoiceControl;
use crate::audio::decode::DecodedBuffer;

pub(crate) struct MixerVoice {
    control: Arc<VoiceControl>,
    buffer: Arc<DecodedBuffer>,
    position: f64,
    playback_rate: f32,
}

impl MixerVoice {
    pub(crate) fn new(control: Arc<VoiceControl>, buffer: Arc<DecodedBuffer>, playback_rate: f32) -> Self {
        Self {
            control,
            buffer,
            position: 0.0,
            playback_rate: if playback_rate > 0.0 { playback_rate } else { 1.0 },
        }
    }
}

pub(crate) struct Mixer {
    voices: Vec<MixerVoice>,
    device_rate: u32,
}

impl Mixer {
    pub(crate) fn new(device_rate: u32) -> Self {
        Self {
            voices: Vec::with_capacity(32),
            device_rate: device_rate.max(1),
        }
    }

    pub(crate) fn add(&mut self, voice: MixerVoice) {
        self.voices.push(voice);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.voices.len()
    }

    /// Mix every live voice into `data` (interleaved, `channels` wide)
    pub(crate) fn render(&mut self, data: &mut [f32], channels: usize, mut on_ended: impl FnMut(u64)) {
        data.fill(0.0);
        if channels == 0 {
            return;
        }
        let device_rate = self.device_rate as f64;

        self.voices.retain_mut(|voice| {
            if voice.control.is_finished() {
                return false;
            }

            // Speed ratio: source rate relative to the device, scaled by playback rate
            let step = voice.buffer.sample_rate() as f64 / device_rate * voice.playback_rate as f64;
            let frames = voice.buffer.frames() as f64;
            let gain = voice.control.gain();

            for chunk in data.chunks_mut(channels) {
                if voice.position >= frames {
                    break;
                }
                let index = voice.position as usize;
                let frac = (voice.position - index as f64) as f32;
                let (l0, r0) = voice.buffer.frame(index);
                let (l1, r1) = voice.buffer.frame(index + 1);
                let left = (l0 + (l1 - l0) * frac) * gain;
                let right = (r0 + (r1 - r0) * frac) * gain;

                if channels > 1 {
                    chunk[0] += left;
                    chunk[1] += right;
                } else {
                    chunk[0] += (left + right) * 0.5;
                }
                voice.position += step;
            }

            if voice.position >= frames {
                if voice.control.finish() {
                    on_ended(voice.control.id());
                }
                return false;
            }
            true
        });

        for sample in data.iter_mut() {
            *sample = sample.clamp(-1.0, 1.0);
        }
    }
}
