//! Deterministic output context driven by a manual clock
//!
//! Nothing is rendered. Each voice ends once the clock passes its start
//! time plus the clip duration at its playback rate. Completion callbacks
//! run on the thread calling `advance`, with no lock held.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::{
    ContextState, EndedCallback, OutputContext, PlaybackHandle, VoiceControl, VoiceHandle,
    VoiceParams,
};
use crate::audio::decode::DecodedBuffer;

struct SimVoice {
    control: Arc<VoiceControl>,
    ends_at: Duration,
    on_ended: EndedCallback,
}

#[derive(Default)]
struct SimClock {
    now: Duration,
    voices: Vec<SimVoice>,
}

#[derive(Default)]
pub struct SimulatedContext {
    clock: Arc<Mutex<SimClock>>,
    suspended: AtomicBool,
    next_id: AtomicU64,
    started: AtomicUsize,
}

impl SimulatedContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position of the simulated clock
    pub fn now(&self) -> Duration {
        self.clock.lock().now
    }

    /// Voices that have neither ended nor been stopped
    pub fn active_voices(&self) -> usize {
        self.clock.lock().voices.len()
    }

    /// Total voices ever started on this context
    pub fn started_voices(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    /// Move the clock forward and fire completions that are due.
    /// A suspended context keeps its clock frozen.
    pub fn advance(&self, by: Duration) {
        if self.suspended.load(Ordering::SeqCst) {
            return;
        }

        let due: Vec<SimVoice> = {
            let mut clock = self.clock.lock();
            clock.now = clock.now.saturating_add(by);
            let now = clock.now;
            let (due, pending): (Vec<_>, Vec<_>) =
                clock.voices.drain(..).partition(|v| v.ends_at <= now);
            clock.voices = pending;
            due
        };

        for voice in due {
            if voice.control.finish() {
                (voice.on_ended)();
            }
        }
    }
}

impl OutputContext for SimulatedContext {
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
        self.started.fetch_add(1, Ordering::SeqCst);

        {
            let mut clock = self.clock.lock();
            let ends_at = clock.now.saturating_add(buffer.duration_at_rate(params.playback_rate));
            clock.voices.push(SimVoice {
                control: Arc::clone(&control),
                ends_at,
                on_ended,
            });
        }

        let clock = Arc::clone(&self.clock);
        Box::new(VoiceHandle::new(
            control,
            Some(Box::new(move |id| {
                clock.lock().voices.retain(|v| v.control.id() != id);
            })),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip(millis: usize) -> Arc<DecodedBuffer> {
        Arc::new(DecodedBuffer::from_stereo(vec![0.0; millis * 2], 1000))
    }

    fn counter() -> (Arc<AtomicUsize>, EndedCallback) {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);
        (
            count,
            Box::new(move || {
                count_clone.fetch_add(1, Ordering::SeqCst);
            }),
        )
    }

    #[test]
    fn test_voice_ends_after_duration() {
        let ctx = SimulatedContext::new();
        let (ended, on_ended) = counter();
        let _handle = ctx.start_voice(clip(300), VoiceParams::default(), on_ended);

        ctx.advance(Duration::from_millis(299));
        assert_eq!(ended.load(Ordering::SeqCst), 0);
        assert_eq!(ctx.active_voices(), 1);

        ctx.advance(Duration::from_millis(1));
        assert_eq!(ended.load(Ordering::SeqCst), 1);
        assert_eq!(ctx.active_voices(), 0);

        ctx.advance(Duration::from_secs(1));
        assert_eq!(ended.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_stopped_voice_never_ends() {
        let ctx = SimulatedContext::new();
        let (ended, on_ended) = counter();
        let mut handle = ctx.start_voice(clip(100), VoiceParams::default(), on_ended);

        handle.stop().unwrap();
        assert_eq!(ctx.active_voices(), 0);

        ctx.advance(Duration::from_secs(1));
        assert_eq!(ended.load(Ordering::SeqCst), 0);
        assert!(handle.stop().is_err());
    }

    #[test]
    fn test_playback_rate_shortens_voice() {
        let ctx = SimulatedContext::new();
        let (ended, on_ended) = counter();
        let params = VoiceParams {
            volume: 1.0,
            playback_rate: 2.0,
        };
        let _handle = ctx.start_voice(clip(400), params, on_ended);

        ctx.advance(Duration::from_millis(200));
        assert_eq!(ended.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_suspended_clock_is_frozen() {
        let ctx = SimulatedContext::new();
        let (ended, on_ended) = counter();
        let _handle = ctx.start_voice(clip(100), VoiceParams::default(), on_ended);

        ctx.suspend();
        assert_eq!(ctx.state(), ContextState::Suspended);
        ctx.advance(Duration::from_secs(1));
        assert_eq!(ended.load(Ordering::SeqCst), 0);

        ctx.resume();
        ctx.advance(Duration::from_millis(100));
        assert_eq!(ended.load(Ordering::SeqCst), 1);
    }
}
