//! Real output through cpal
//!
//! One f32 output stream mixes every voice. New voices are handed to the
//! audio thread through a mutex it only ever `try_lock`s. Voices that run
//! out are reported back through a lock-free ring buffer to a dispatcher
//! thread, which runs the completion callbacks off the audio thread.

use cpal::traits::{DeviceTrait, StreamTrait};
use parking_lot::Mutex;
use ringbuf::{traits::*, HeapRb};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use super::mixer::{Mixer, MixerVoice};
use super::{
    ContextState, EndedCallback, OutputContext, PlaybackHandle, VoiceControl, VoiceHandle,
    VoiceParams,
};
use crate::audio::decode::DecodedBuffer;
use crate::audio::device::{get_output_device, get_stream_config, AudioConfig};
use crate::error::{Result, SoundError};

/// Ended-voice ids waiting for dispatch
const ENDED_QUEUE_CAPACITY: usize = 1024;

/// How often the dispatcher drains the ended queue
const DISPATCH_INTERVAL: Duration = Duration::from_millis(5);

/// State shared between the context, its audio callback and the dispatcher
struct CpalShared {
    pending: Mutex<Vec<MixerVoice>>,
    callbacks: Mutex<HashMap<u64, EndedCallback>>,
    suspended: AtomicBool,
    /// Completions the audio thread could not queue
    dropped_ends: AtomicUsize,
}

pub struct CpalContext {
    shared: Arc<CpalShared>,
    next_id: AtomicU64,
}

impl CpalContext {
    /// Open the output device and start the stream
    pub fn new(device_name: Option<&str>, config: &AudioConfig) -> Result<Self> {
        let device = get_output_device(device_name)?;
        let stream_config = get_stream_config(&device, config)?;
        let device_name = device.name().unwrap_or_else(|_| "unknown".to_string());

        let sample_rate = stream_config.sample_rate.0;
        let channels = stream_config.channels as usize;

        log::info!(
            "Starting sound output on '{}': {} Hz, {} channels",
            device_name,
            sample_rate,
            channels
        );

        let shared = Arc::new(CpalShared {
            pending: Mutex::new(Vec::new()),
            callbacks: Mutex::new(HashMap::new()),
            suspended: AtomicBool::new(false),
            dropped_ends: AtomicUsize::new(0),
        });

        let (mut ended_producer, ended_consumer) = HeapRb::<u64>::new(ENDED_QUEUE_CAPACITY).split();

        let shared_clone = Arc::clone(&shared);
        let mut mixer = Mixer::new(sample_rate);

        let stream = device
            .build_output_stream(
                &stream_config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    // Never block the audio thread, pick new voices up next callback
                    if let Some(mut pending) = shared_clone.pending.try_lock() {
                        for voice in pending.drain(..) {
                            mixer.add(voice);
                        }
                    }

                    if shared_clone.suspended.load(Ordering::Relaxed) {
                        data.fill(0.0);
                        return;
                    }

                    mixer.render(data, channels, |id| {
                        if ended_producer.try_push(id).is_err() {
                            shared_clone.dropped_ends.fetch_add(1, Ordering::Relaxed);
                        }
                    });
                },
                move |err| {
                    log::error!("Sound output stream error: {}", err);
                },
                None,
            )
            .map_err(|e| SoundError::Device(format!("Failed to build output stream: {}", e)))?;

        stream
            .play()
            .map_err(|e| SoundError::Device(format!("Failed to start stream: {}", e)))?;

        spawn_dispatcher(Arc::clone(&shared), ended_consumer)?;

        // cpal::Stream is neither Send nor Sync, so it cannot live in the
        // context. Leak it: the output stays open for the process lifetime.
        std::mem::forget(stream);

        Ok(Self {
            shared,
            next_id: AtomicU64::new(0),
        })
    }
}

fn spawn_dispatcher(shared: Arc<CpalShared>, mut ended: ringbuf::HeapCons<u64>) -> Result<()> {
    thread::Builder::new()
        .name("sfx-dispatch".into())
        .spawn(move || loop {
            while let Some(id) = ended.try_pop() {
                // Take the callback out first so it runs without the lock held
                let callback = shared.callbacks.lock().remove(&id);
                if let Some(callback) = callback {
                    callback();
                }
            }
            let dropped = shared.dropped_ends.swap(0, Ordering::Relaxed);
            if dropped > 0 {
                log::warn!("Ended-voice queue full, {} completion(s) lost", dropped);
            }
            thread::sleep(DISPATCH_INTERVAL);
        })
        .map(|_| ())
        .map_err(|e| SoundError::Device(format!("Failed to start dispatcher thread: {}", e)))
}

impl OutputContext for CpalContext {
    fn state(&self) -> ContextState {
        if self.shared.suspended.load(Ordering::SeqCst) {
            ContextState::Suspended
        } else {
            ContextState::Running
        }
    }

    fn resume(&self) {
        if self.shared.suspended.swap(false, Ordering::SeqCst) {
            log::debug!("Sound output resumed");
        }
    }

    fn suspend(&self) {
        if !self.shared.suspended.swap(true, Ordering::SeqCst) {
            log::debug!("Sound output suspended");
        }
    }

    fn start_voice(
        &self,
        buffer: Arc<DecodedBuffer>,
        params: VoiceParams,
        on_ended: EndedCallback,
    ) -> Box<dyn PlaybackHandle> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let control = VoiceControl::new(id, params.volume);

        // Register the callback before the audio thread can see the voice
        self.shared.callbacks.lock().insert(id, on_ended);
        self.shared
            .pending
            .lock()
            .push(MixerVoice::new(Arc::clone(&control), buffer, params.playback_rate));

        let shared = Arc::clone(&self.shared);
        Box::new(VoiceHandle::new(
            control,
            Some(Box::new(move |id| {
                shared.callbacks.lock().remove(&id);
            })),
        ))
    }
}
