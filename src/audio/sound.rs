//! Per call-site sound controller
//!
//! A `Sound` owns the playback handles it starts and tracks whether it is
//! idle, playing or paused. It keeps a local copy of the global toggle,
//! updated through a subscription, so `play()` never touches storage.
//!
//! Pause has no resume-from-position: it stops like `stop()` and the next
//! `play()` starts the clip from the beginning.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use super::asset::SoundAsset;
use super::backend::{ContextState, PlaybackHandle, VoiceParams};
use super::decode::DecodedBuffer;
use super::engine::SoundEngine;
use crate::settings::{SoundSetting, Subscription};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    Idle,
    Playing,
    Paused,
}

pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// Construction options, mirroring what a UI call site configures
#[derive(Clone)]
pub struct SoundOptions {
    pub volume: f32,
    pub playback_rate: f32,
    /// Stop the previous voice before starting a new one
    pub interrupt: bool,
    /// Overrides the global toggle for this sound when set
    pub sound_enabled: Option<bool>,
    pub on_play: Option<Callback>,
    pub on_end: Option<Callback>,
    pub on_pause: Option<Callback>,
    pub on_stop: Option<Callback>,
}

impl Default for SoundOptions {
    fn default() -> Self {
        Self {
            volume: 1.0,
            playback_rate: 1.0,
            interrupt: false,
            sound_enabled: None,
            on_play: None,
            on_end: None,
            on_pause: None,
            on_stop: None,
        }
    }
}

impl SoundOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn volume(mut self, volume: f32) -> Self {
        self.volume = volume;
        self
    }

    pub fn playback_rate(mut self, rate: f32) -> Self {
        self.playback_rate = rate;
        self
    }

    pub fn interrupt(mut self, interrupt: bool) -> Self {
        self.interrupt = interrupt;
        self
    }

    pub fn sound_enabled(mut self, enabled: bool) -> Self {
        self.sound_enabled = Some(enabled);
        self
    }

    pub fn on_play(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_play = Some(Arc::new(f));
        self
    }

    pub fn on_end(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_end = Some(Arc::new(f));
        self
    }

    pub fn on_pause(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_pause = Some(Arc::new(f));
        self
    }

    pub fn on_stop(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_stop = Some(Arc::new(f));
        self
    }
}

/// Per-call overrides for `play_with`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayOverrides {
    pub volume: Option<f32>,
    pub playback_rate: Option<f32>,
}

struct ActiveVoice {
    token: u64,
    handle: Box<dyn PlaybackHandle>,
}

struct ControllerState {
    state: PlaybackState,
    buffer: Option<Arc<DecodedBuffer>>,
    duration: Option<Duration>,
    volume: f32,
    playback_rate: f32,
    voices: Vec<ActiveVoice>,
}

struct SoundShared {
    inner: Mutex<ControllerState>,
    next_token: AtomicU64,
    on_end: Option<Callback>,
}

fn fire(callback: &Option<Callback>) {
    if let Some(callback) = callback {
        callback();
    }
}

/// Stop every voice; "already stopped" is expected and ignored
fn halt_all(voices: &mut Vec<ActiveVoice>) {
    for mut voice in voices.drain(..) {
        if let Err(e) = voice.handle.stop() {
            log::trace!("{}", e);
        }
    }
}

pub struct Sound {
    asset: SoundAsset,
    engine: Arc<SoundEngine>,
    shared: Arc<SoundShared>,
    global_enabled: Arc<AtomicBool>,
    sound_enabled: Option<bool>,
    interrupt: bool,
    on_play: Option<Callback>,
    on_pause: Option<Callback>,
    on_stop: Option<Callback>,
    _subscription: Subscription,
}

impl Sound {
    /// Controller on the global engine and global sound toggle
    pub fn new(asset: SoundAsset, options: SoundOptions) -> Self {
        Self::with_engine(SoundEngine::global(), SoundSetting::global(), asset, options)
    }

    pub fn with_engine(
        engine: Arc<SoundEngine>,
        setting: Arc<SoundSetting>,
        asset: SoundAsset,
        options: SoundOptions,
    ) -> Self {
        // Subscribe before reading so a concurrent write is never missed
        let global_enabled = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&global_enabled);
        let subscription = setting.subscribe(move |enabled| flag.store(enabled, Ordering::SeqCst));
        global_enabled.store(setting.read(), Ordering::SeqCst);

        let shared = Arc::new(SoundShared {
            inner: Mutex::new(ControllerState {
                state: PlaybackState::Idle,
                buffer: None,
                duration: asset.duration(),
                volume: options.volume,
                playback_rate: options.playback_rate,
                voices: Vec::new(),
            }),
            next_token: AtomicU64::new(0),
            on_end: options.on_end,
        });

        // Result is dropped if this controller is gone by the time it lands
        let weak = Arc::downgrade(&shared);
        let name = asset.name().to_string();
        engine.decode_with(&asset, move |result| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            match result {
                Ok(buffer) => {
                    let mut inner = shared.inner.lock();
                    inner.duration = Some(buffer.duration());
                    inner.buffer = Some(buffer);
                }
                Err(e) => log::debug!("Sound '{}' will stay silent: {}", name, e),
            }
        });

        Self {
            asset,
            engine,
            shared,
            global_enabled,
            sound_enabled: options.sound_enabled,
            interrupt: options.interrupt,
            on_play: options.on_play,
            on_pause: options.on_pause,
            on_stop: options.on_stop,
            _subscription: subscription,
        }
    }

    pub fn play(&self) {
        self.play_with(PlayOverrides::default());
    }

    /// Start a new voice. No-op while sound is disabled or the clip has
    /// not finished decoding.
    pub fn play_with(&self, overrides: PlayOverrides) {
        if !self.is_enabled() {
            return;
        }
        let Some(buffer) = self.shared.inner.lock().buffer.clone() else {
            log::trace!("Sound '{}' not decoded yet, skipping play", self.asset.name());
            return;
        };

        let context = self.engine.context();
        if context.state() == ContextState::Suspended {
            context.resume();
        }

        let token = self.shared.next_token.fetch_add(1, Ordering::SeqCst);
        let on_ended = completion(Arc::downgrade(&self.shared), token);

        let interrupted = {
            let mut inner = self.shared.inner.lock();

            let interrupted = self.interrupt && !inner.voices.is_empty();
            if interrupted {
                halt_all(&mut inner.voices);
            }

            let params = VoiceParams {
                volume: overrides.volume.unwrap_or(inner.volume),
                playback_rate: overrides.playback_rate.unwrap_or(inner.playback_rate),
            };

            // Lock is held across start so a fast completion cannot
            // overtake the handle being recorded
            let handle = context.start_voice(buffer, params, on_ended);
            log::trace!("Sound '{}' started voice {}", self.asset.name(), handle.id());
            inner.voices.push(ActiveVoice { token, handle });
            inner.state = PlaybackState::Playing;
            interrupted
        };

        if interrupted {
            fire(&self.on_stop);
        }
        fire(&self.on_play);
    }

    /// Halt every active voice. Safe to call repeatedly.
    pub fn stop(&self) {
        {
            let mut inner = self.shared.inner.lock();
            halt_all(&mut inner.voices);
            inner.state = PlaybackState::Idle;
        }
        fire(&self.on_stop);
    }

    /// Stop playback; the next `play()` starts over
    pub fn pause(&self) {
        {
            let mut inner = self.shared.inner.lock();
            let was_playing = inner.state == PlaybackState::Playing;
            halt_all(&mut inner.voices);
            inner.state = if was_playing {
                PlaybackState::Paused
            } else {
                PlaybackState::Idle
            };
        }
        fire(&self.on_stop);
        fire(&self.on_pause);
    }

    /// Change the volume for future plays and every active voice
    pub fn set_volume(&self, volume: f32) {
        let mut inner = self.shared.inner.lock();
        inner.volume = volume;
        for voice in &inner.voices {
            voice.handle.set_volume(volume);
        }
    }

    pub fn volume(&self) -> f32 {
        self.shared.inner.lock().volume
    }

    /// Applies from the next `play()`
    pub fn set_playback_rate(&self, rate: f32) {
        self.shared.inner.lock().playback_rate = rate;
    }

    /// Gain of the most recently started voice still playing
    pub fn active_volume(&self) -> Option<f32> {
        self.shared.inner.lock().voices.last().map(|v| v.handle.volume())
    }

    pub fn active_voices(&self) -> usize {
        self.shared.inner.lock().voices.len()
    }

    pub fn state(&self) -> PlaybackState {
        self.shared.inner.lock().state
    }

    pub fn is_playing(&self) -> bool {
        self.state() == PlaybackState::Playing
    }

    /// Decoded length, or the asset's declared length until decoding finishes
    pub fn duration(&self) -> Option<Duration> {
        self.shared.inner.lock().duration
    }

    pub fn is_ready(&self) -> bool {
        self.shared.inner.lock().buffer.is_some()
    }

    pub fn is_enabled(&self) -> bool {
        self.sound_enabled
            .unwrap_or_else(|| self.global_enabled.load(Ordering::SeqCst))
    }

    pub fn asset(&self) -> &SoundAsset {
        &self.asset
    }
}

fn completion(shared: Weak<SoundShared>, token: u64) -> Box<dyn FnOnce() + Send> {
    Box::new(move || {
        let Some(shared) = shared.upgrade() else {
            return;
        };
        let ended = {
            let mut inner = shared.inner.lock();
            let before = inner.voices.len();
            inner.voices.retain(|v| v.token != token);
            let ended = inner.voices.len() != before;
            if ended && inner.voices.is_empty() && inner.state == PlaybackState::Playing {
                inner.state = PlaybackState::Idle;
            }
            ended
        };
        if ended {
            fire(&shared.on_end);
        }
    })
}

impl Drop for Sound {
    fn drop(&mut self) {
        halt_all(&mut self.shared.inner.lock().voices);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::backend::{OutputContext, SimulatedContext};
    use crate::audio::testing::tone_asset;
    use crate::settings::MemoryStore;
    use std::sync::atomic::AtomicUsize;
    use std::thread;

    struct Fixture {
        ctx: Arc<SimulatedContext>,
        engine: Arc<SoundEngine>,
        setting: Arc<SoundSetting>,
        asset: SoundAsset,
    }

    impl Fixture {
        fn sound(&self, options: SoundOptions) -> Sound {
            Sound::with_engine(
                Arc::clone(&self.engine),
                Arc::clone(&self.setting),
                self.asset.clone(),
                options,
            )
        }
    }

    /// 300 ms clip, already decoded
    fn fixture() -> Fixture {
        let ctx = Arc::new(SimulatedContext::new());
        let engine = Arc::new(SoundEngine::with_context(ctx.clone()));
        let setting = Arc::new(SoundSetting::new(Box::new(MemoryStore::new())));
        let asset = tone_asset("tone", 8000, 2400);
        engine.decode_blocking(&asset).unwrap();
        Fixture {
            ctx,
            engine,
            setting,
            asset,
        }
    }

    fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);
        (count, move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_play_until_natural_end() {
        let fx = fixture();
        let (ended, on_end) = counter();
        let (played, on_play) = counter();
        let sound = fx.sound(SoundOptions::new().on_end(on_end).on_play(on_play));

        assert!(sound.is_ready());
        sound.play();
        assert_eq!(sound.state(), PlaybackState::Playing);
        assert_eq!(played.load(Ordering::SeqCst), 1);

        fx.ctx.advance(Duration::from_millis(200));
        assert_eq!(sound.state(), PlaybackState::Playing);
        assert_eq!(ended.load(Ordering::SeqCst), 0);

        fx.ctx.advance(Duration::from_millis(100));
        assert_eq!(sound.state(), PlaybackState::Idle);
        assert_eq!(ended.load(Ordering::SeqCst), 1);

        fx.ctx.advance(Duration::from_secs(1));
        assert_eq!(ended.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_disabled_after_construction_blocks_play() {
        let fx = fixture();
        let (played, on_play) = counter();
        let sound = fx.sound(SoundOptions::new().on_play(on_play));

        fx.setting.write(false);
        sound.play();

        assert_eq!(fx.ctx.started_voices(), 0);
        assert_eq!(played.load(Ordering::SeqCst), 0);
        assert_eq!(sound.state(), PlaybackState::Idle);

        fx.setting.write(true);
        sound.play();
        assert_eq!(fx.ctx.started_voices(), 1);
    }

    #[test]
    fn test_disabled_before_construction_blocks_play() {
        let fx = fixture();
        fx.setting.write(false);
        let sound = fx.sound(SoundOptions::new());

        assert!(!sound.is_enabled());
        sound.play();
        assert_eq!(fx.ctx.started_voices(), 0);
    }

    #[test]
    fn test_local_override_beats_global_toggle() {
        let fx = fixture();
        fx.setting.write(false);
        let sound = fx.sound(SoundOptions::new().sound_enabled(true));

        sound.play();
        assert_eq!(fx.ctx.started_voices(), 1);

        let muted = fx.sound(SoundOptions::new().sound_enabled(false));
        fx.setting.write(true);
        muted.play();
        assert_eq!(fx.ctx.started_voices(), 1);
    }

    #[test]
    fn test_interrupt_keeps_one_voice() {
        let fx = fixture();
        let (stopped, on_stop) = counter();
        let (ended, on_end) = counter();
        let sound = fx.sound(SoundOptions::new().interrupt(true).on_stop(on_stop).on_end(on_end));

        sound.play();
        fx.ctx.advance(Duration::from_millis(100));
        sound.play();

        assert_eq!(fx.ctx.started_voices(), 2);
        assert_eq!(fx.ctx.active_voices(), 1);
        assert_eq!(sound.active_voices(), 1);
        assert_eq!(stopped.load(Ordering::SeqCst), 1);

        // Only the second voice completes
        fx.ctx.advance(Duration::from_millis(300));
        assert_eq!(ended.load(Ordering::SeqCst), 1);
        assert_eq!(sound.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_overlapping_voices_without_interrupt() {
        let fx = fixture();
        let (ended, on_end) = counter();
        let sound = fx.sound(SoundOptions::new().on_end(on_end));

        sound.play();
        fx.ctx.advance(Duration::from_millis(100));
        sound.play();
        assert_eq!(fx.ctx.active_voices(), 2);

        // First voice ends, second keeps the controller playing
        fx.ctx.advance(Duration::from_millis(200));
        assert_eq!(ended.load(Ordering::SeqCst), 1);
        assert_eq!(sound.state(), PlaybackState::Playing);

        fx.ctx.advance(Duration::from_millis(100));
        assert_eq!(ended.load(Ordering::SeqCst), 2);
        assert_eq!(sound.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_stop_twice() {
        let fx = fixture();
        let (stopped, on_stop) = counter();
        let (ended, on_end) = counter();
        let sound = fx.sound(SoundOptions::new().on_stop(on_stop).on_end(on_end));

        sound.play();
        sound.stop();
        assert_eq!(sound.state(), PlaybackState::Idle);
        sound.stop();
        assert_eq!(sound.state(), PlaybackState::Idle);

        assert_eq!(stopped.load(Ordering::SeqCst), 2);
        assert_eq!(fx.ctx.active_voices(), 0);

        fx.ctx.advance(Duration::from_secs(1));
        assert_eq!(ended.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_volume_override() {
        let fx = fixture();
        let sound = fx.sound(SoundOptions::new().volume(0.8));

        sound.play_with(PlayOverrides {
            volume: Some(0.5),
            ..Default::default()
        });
        assert_eq!(sound.active_volume(), Some(0.5));
        assert_eq!(sound.volume(), 0.8);

        sound.play();
        assert_eq!(sound.active_volume(), Some(0.8));
    }

    #[test]
    fn test_set_volume_applies_live() {
        let fx = fixture();
        let sound = fx.sound(SoundOptions::new());

        sound.play();
        sound.set_volume(0.3);

        assert_eq!(sound.active_volume(), Some(0.3));
        assert!(sound.is_playing());
        assert_eq!(fx.ctx.started_voices(), 1);
    }

    #[test]
    fn test_playback_rate_override_shortens_clip() {
        let fx = fixture();
        let (ended, on_end) = counter();
        let sound = fx.sound(SoundOptions::new().on_end(on_end));

        sound.play_with(PlayOverrides {
            playback_rate: Some(2.0),
            ..Default::default()
        });
        fx.ctx.advance(Duration::from_millis(150));
        assert_eq!(ended.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_extreme_playback_rates() {
        let fx = fixture();
        let (ended, on_end) = counter();
        let sound = fx.sound(SoundOptions::new().on_end(on_end));

        // Too slow to ever finish
        sound.play_with(PlayOverrides {
            playback_rate: Some(1e-20),
            ..Default::default()
        });
        fx.ctx.advance(Duration::from_secs(3600));
        assert_eq!(ended.load(Ordering::SeqCst), 0);
        assert!(sound.is_playing());
        sound.stop();

        // Over at once
        sound.play_with(PlayOverrides {
            playback_rate: Some(f32::INFINITY),
            ..Default::default()
        });
        fx.ctx.advance(Duration::ZERO);
        assert_eq!(ended.load(Ordering::SeqCst), 1);
        assert_eq!(sound.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_pause_then_play_starts_over() {
        let fx = fixture();
        let (paused, on_pause) = counter();
        let (stopped, on_stop) = counter();
        let sound = fx.sound(SoundOptions::new().on_pause(on_pause).on_stop(on_stop));

        sound.play();
        sound.pause();
        assert_eq!(sound.state(), PlaybackState::Paused);
        assert_eq!(paused.load(Ordering::SeqCst), 1);
        assert_eq!(stopped.load(Ordering::SeqCst), 1);
        assert_eq!(fx.ctx.active_voices(), 0);

        sound.play();
        assert_eq!(sound.state(), PlaybackState::Playing);
        assert_eq!(fx.ctx.started_voices(), 2);

        // Pausing while idle does not report paused
        sound.stop();
        sound.pause();
        assert_eq!(sound.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_resumes_suspended_context() {
        let fx = fixture();
        let sound = fx.sound(SoundOptions::new());

        fx.ctx.suspend();
        sound.play();
        assert_eq!(fx.ctx.state(), ContextState::Running);
    }

    #[test]
    fn test_undecodable_asset_stays_silent() {
        let fx = fixture();
        let asset = SoundAsset::from_bytes("broken", "audio/wav", b"not audio");
        let sound = Sound::with_engine(
            Arc::clone(&fx.engine),
            Arc::clone(&fx.setting),
            asset,
            SoundOptions::new(),
        );

        thread::sleep(Duration::from_millis(100));
        sound.play();

        assert!(!sound.is_ready());
        assert_eq!(sound.state(), PlaybackState::Idle);
        assert_eq!(fx.ctx.started_voices(), 0);
    }

    #[test]
    fn test_background_decode_updates_duration() {
        let fx = fixture();
        let asset = SoundAsset::new(
            "late",
            tone_asset("late", 8000, 800).data_uri(),
            Some(Duration::from_millis(5)),
        );
        let sound = Sound::with_engine(
            Arc::clone(&fx.engine),
            Arc::clone(&fx.setting),
            asset,
            SoundOptions::new(),
        );

        for _ in 0..500 {
            if sound.is_ready() {
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }

        assert!(sound.is_ready());
        assert_eq!(sound.duration(), Some(Duration::from_millis(100)));
    }

    #[test]
    fn test_drop_stops_voices_quietly() {
        let fx = fixture();
        let (ended, on_end) = counter();
        let sound = fx.sound(SoundOptions::new().on_end(on_end));

        sound.play();
        drop(sound);

        assert_eq!(fx.ctx.active_voices(), 0);
        fx.ctx.advance(Duration::from_secs(1));
        assert_eq!(ended.load(Ordering::SeqCst), 0);
        assert_eq!(fx.setting.listener_count(), 0);
    }
}
