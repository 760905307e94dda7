//! Output contexts that turn decoded buffers into sound
//!
//! An `OutputContext` plays one-shot voices. Each voice is controlled
//! through a `PlaybackHandle` and reports natural completion through a
//! callback that fires exactly once, and never after an explicit stop.

pub mod cpal_output;
pub(crate) mod mixer;
pub mod silent;
pub mod simulated;

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::decode::DecodedBuffer;
use crate::error::{Result, SoundError};

pub use cpal_output::CpalContext;
pub use silent::SilentContext;
pub use simulated::SimulatedContext;

/// Completion callback for a voice
pub type EndedCallback = Box<dyn FnOnce() + Send + 'static>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextState {
    Running,
    Suspended,
}

/// Per-voice parameters fixed at start time (volume stays adjustable)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceParams {
    pub volume: f32,
    pub playback_rate: f32,
}

impl Default for VoiceParams {
    fn default() -> Self {
        Self {
            volume: 1.0,
            playback_rate: 1.0,
        }
    }
}

/// Shared audio output, one per engine
pub trait OutputContext: Send + Sync {
    fn state(&self) -> ContextState;

    fn resume(&self);

    fn suspend(&self);

    /// Start playing `buffer` immediately
    fn start_voice(
        &self,
        buffer: Arc<DecodedBuffer>,
        params: VoiceParams,
        on_ended: EndedCallback,
    ) -> Box<dyn PlaybackHandle>;
}

/// One in-flight sound emission
pub trait PlaybackHandle: Send {
    fn id(&self) -> u64;

    /// Halt the voice. Errors with `SoundError::AlreadyStopped` if it
    /// already ended or was stopped.
    fn stop(&mut self) -> Result<()>;

    fn set_volume(&self, volume: f32);

    fn volume(&self) -> f32;
}

/// Helper to store f32 in AtomicU32
#[inline]
fn f32_to_u32(f: f32) -> u32 {
    f.to_bits()
}

/// Helper to load f32 from AtomicU32
#[inline]
fn u32_to_f32(u: u32) -> f32 {
    f32::from_bits(u)
}

/// Lock-free state shared between a handle and whatever renders the voice
pub(crate) struct VoiceControl {
    id: u64,
    gain: AtomicU32,
    finished: AtomicBool,
}

impl VoiceControl {
    pub(crate) fn new(id: u64, volume: f32) -> Arc<Self> {
        Arc::new(Self {
            id,
            gain: AtomicU32::new(f32_to_u32(volume.max(0.0))),
            finished: AtomicBool::new(false),
        })
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub(crate) fn gain(&self) -> f32 {
        u32_to_f32(self.gain.load(Ordering::Relaxed))
    }

    pub(crate) fn set_gain(&self, volume: f32) {
        self.gain.store(f32_to_u32(volume.max(0.0)), Ordering::Relaxed);
    }

    /// Mark the voice finished. Returns false if something else got there first.
    #[inline]
    pub(crate) fn finish(&self) -> bool {
        !self.finished.swap(true, Ordering::SeqCst)
    }

    #[inline]
    pub(crate) fn is_finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }
}

type ReleaseFn = Box<dyn FnOnce(u64) + Send + 'static>;

/// Handle used by every built-in context. `release` runs once on a
/// successful stop so the context can drop its completion callback.
pub(crate) struct VoiceHandle {
    control: Arc<VoiceControl>,
    release: Option<ReleaseFn>,
}

impl VoiceHandle {
    pub(crate) fn new(control: Arc<VoiceControl>, release: Option<ReleaseFn>) -> Self {
        Self { control, release }
    }
}

impl PlaybackHandle for VoiceHandle {
    fn id(&self) -> u64 {
        self.control.id()
    }

    fn stop(&mut self) -> Result<()> {
        if !self.control.finish() {
            return Err(SoundError::AlreadyStopped(self.control.id()));
        }
        if let Some(release) = self.release.take() {
            release(self.control.id());
        }
        Ok(())
    }

    fn set_volume(&self, volume: f32) {
        self.control.set_gain(volume);
    }

    fn volume(&self) -> f32 {
        self.control.gain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_voice_handle_double_stop() {
        let released = Arc::new(AtomicUsize::new(0));
        let released_clone = Arc::clone(&released);
        let mut handle = VoiceHandle::new(
            VoiceControl::new(7, 1.0),
            Some(Box::new(move |_| {
                released_clone.fetch_add(1, Ordering::SeqCst);
            })),
        );

        assert!(handle.stop().is_ok());
        assert!(matches!(handle.stop(), Err(SoundError::AlreadyStopped(7))));
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_gain_is_clamped_at_zero() {
        let control = VoiceControl::new(1, -2.0);
        assert_eq!(control.gain(), 0.0);
        control.set_gain(0.25);
        assert_eq!(control.gain(), 0.25);
    }
}
