//! Fallback context used when no output device can be opened
//!
//! Plays nothing, but still reports each voice as ended after its natural
//! duration so controllers cycle through their states the same way.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;

use super::{
    ContextState, EndedCallback, OutputContext, PlaybackHandle, VoiceControl, VoiceHandle,
    VoiceParams,
};
use crate::audio::decode::DecodedBuffer;

#[derive(Default)]
pub struct SilentContext {
    suspended: AtomicBool,
    next_id: AtomicU64,
}

impl SilentContext {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputContext for SilentContext {
    fn state(&self) -> ContextState {
        if self.suspended.load(Ordering::SeqCst) {
            ContextState::Suspended
        } else {
            ContextState::Running
        }
    }

    fn resume(&self) {
        self.suspended.store(false, Ordering::SeqCst);
    }

    fn suspend(&self) {
        self.suspended.store(true, Ordering::SeqCst);
    }

    fn start_voice(
        &self,
        buffer: Arc<DecodedBuffer>,
        params: VoiceParams,
        on_ended: EndedCallback,
    ) -> Box<dyn PlaybackHandle> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let control = VoiceControl::new(id, params.volume);
        let duration = buffer.duration_at_rate(params.playback_rate);

        // One-shot timer, cancelled by the handle marking the voice finished
        let timer_control = Arc::clone(&control);
        let spawned = thread::Builder::new()
            .name("sfx-silent-voice".into())
            .spawn(move || {
                thread::sleep(duration);
                if timer_control.finish() {
                    on_ended();
                }
            });
        if let Err(e) = spawned {
            log::warn!("Failed to start completion timer for voice {}: {}", id, e);
        }

        Box::new(VoiceHandle::new(control, None))
    }
}
