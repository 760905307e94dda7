//! Shared sound engine: one lazily created output context plus a decode
//! cache keyed by asset identity

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use super::asset::SoundAsset;
use super::backend::{CpalContext, OutputContext, SilentContext};
use super::decode::{decode_asset, DecodedBuffer};
use crate::config::SoundConfig;
use crate::error::{Result, SoundError};

/// Builds the output context on first use
pub type ContextFactory = Box<dyn Fn() -> Arc<dyn OutputContext> + Send + Sync>;

pub struct SoundEngine {
    factory: ContextFactory,
    context: OnceCell<Arc<dyn OutputContext>>,
    cache: RwLock<HashMap<String, Arc<DecodedBuffer>>>,
}

impl SoundEngine {
    /// Engine that opens the configured output device on first play,
    /// or plays silently if no device is available
    pub fn new(config: SoundConfig) -> Self {
        Self::with_factory(Box::new(move || open_default_context(&config)))
    }

    pub fn with_factory(factory: ContextFactory) -> Self {
        Self {
            factory,
            context: OnceCell::new(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Engine bound to an existing context
    pub fn with_context(context: Arc<dyn OutputContext>) -> Self {
        let engine = Self::with_factory(Box::new(|| -> Arc<dyn OutputContext> { Arc::new(SilentContext::new()) }));
        let _ = engine.context.set(context);
        engine
    }

    /// The shared output context, created on the first call
    pub fn context(&self) -> Arc<dyn OutputContext> {
        Arc::clone(self.context.get_or_init(|| {
            log::debug!("Creating sound output context");
            (self.factory)()
        }))
    }

    pub fn has_context(&self) -> bool {
        self.context.get().is_some()
    }

    pub fn cached(&self, asset: &SoundAsset) -> Option<Arc<DecodedBuffer>> {
        self.cache.read().get(asset.cache_key()).cloned()
    }

    pub fn cache_len(&self) -> usize {
        self.cache.read().len()
    }

    /// Decode on the calling thread, or return the cached buffer
    pub fn decode_blocking(&self, asset: &SoundAsset) -> Result<Arc<DecodedBuffer>> {
        if let Some(buffer) = self.cached(asset) {
            return Ok(buffer);
        }

        let decoded = decode_asset(asset).map_err(|e| {
            log::warn!("Sound '{}' is unplayable: {}", asset.name(), e);
            e
        })?;

        // A concurrent decode may have won the race; keep the first buffer
        let mut cache = self.cache.write();
        let entry = cache
            .entry(asset.cache_key().to_string())
            .or_insert_with(|| Arc::new(decoded));
        Ok(Arc::clone(entry))
    }

    /// Decode on a tokio blocking worker. Cache hits resolve immediately.
    pub async fn decode(self: &Arc<Self>, asset: &SoundAsset) -> Result<Arc<DecodedBuffer>> {
        if let Some(buffer) = self.cached(asset) {
            return Ok(buffer);
        }

        let engine = Arc::clone(self);
        let asset = asset.clone();
        let name = asset.name().to_string();
        tokio::task::spawn_blocking(move || engine.decode_blocking(&asset))
            .await
            .map_err(|e| SoundError::decode(&name, format!("Decode task failed: {}", e)))?
    }

    /// Callback flavour for callers without a runtime. A cache hit calls
    /// `on_done` before returning; a miss decodes on a background thread.
    pub fn decode_with<F>(self: &Arc<Self>, asset: &SoundAsset, on_done: F)
    where
        F: FnOnce(Result<Arc<DecodedBuffer>>) + Send + 'static,
    {
        if let Some(buffer) = self.cached(asset) {
            on_done(Ok(buffer));
            return;
        }

        let engine = Arc::clone(self);
        let asset = asset.clone();
        let spawned = thread::Builder::new()
            .name("sfx-decode".into())
            .spawn(move || on_done(engine.decode_blocking(&asset)));

        if let Err(e) = spawned {
            log::error!("Failed to start decode thread: {}", e);
        }
    }
}

fn open_default_context(config: &SoundConfig) -> Arc<dyn OutputContext> {
    match CpalContext::new(config.output_device.as_deref(), &config.audio) {
        Ok(context) => Arc::new(context),
        Err(e) => {
            log::warn!("No sound output available, playing silently: {}", e);
            Arc::new(SilentContext::new())
        }
    }
}

// Process-wide engine
static ENGINE: OnceCell<Arc<SoundEngine>> = OnceCell::new();

/// Install the global engine with a specific configuration. Has no effect
/// if the global engine already exists.
pub fn init_engine(config: SoundConfig) {
    if ENGINE.get().is_some() {
        log::debug!("Sound engine already initialized, reusing existing instance");
        return;
    }
    let _ = ENGINE.set(Arc::new(SoundEngine::new(config)));
}

impl SoundEngine {
    /// The process-wide engine, created with default settings if
    /// `init_engine` was never called
    pub fn global() -> Arc<SoundEngine> {
        Arc::clone(ENGINE.get_or_init(|| Arc::new(SoundEngine::new(SoundConfig::default()))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::backend::SimulatedContext;
    use crate::audio::testing::tone_asset;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::mpsc;
    use std::time::Duration;

    fn engine() -> Arc<SoundEngine> {
        Arc::new(SoundEngine::with_context(Arc::new(SimulatedContext::new())))
    }

    #[test]
    fn test_decode_twice_returns_cached_instance() {
        let engine = engine();
        let asset = tone_asset("blip", 8000, 800);

        let first = engine.decode_blocking(&asset).unwrap();
        let second = engine.decode_blocking(&asset).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(engine.cache_len(), 1);
    }

    #[test]
    fn test_failed_decode_not_cached() {
        let engine = engine();
        let asset = SoundAsset::from_bytes("broken", "audio/wav", b"nope");

        assert!(engine.decode_blocking(&asset).is_err());
        assert!(engine.cached(&asset).is_none());
        assert_eq!(engine.cache_len(), 0);
    }

    #[tokio::test]
    async fn test_async_decode_shares_cache() {
        let engine = engine();
        let asset = tone_asset("blip", 8000, 800);

        let first = engine.decode(&asset).await.unwrap();
        let second = engine.decode(&asset).await.unwrap();
        let blocking = engine.decode_blocking(&asset).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, &blocking));
    }

    #[test]
    fn test_decode_with_cache_hit_is_synchronous() {
        let engine = engine();
        let asset = tone_asset("blip", 8000, 800);
        engine.decode_blocking(&asset).unwrap();

        let called = Arc::new(AtomicBool::new(false));
        let called_clone = Arc::clone(&called);
        engine.decode_with(&asset, move |result| {
            assert!(result.is_ok());
            called_clone.store(true, Ordering::SeqCst);
        });

        assert!(called.load(Ordering::SeqCst));
    }

    #[test]
    fn test_decode_with_miss_completes_in_background() {
        let engine = engine();
        let asset = tone_asset("blip", 8000, 800);
        let (tx, rx) = mpsc::channel();

        engine.decode_with(&asset, move |result| {
            let _ = tx.send(result.is_ok());
        });

        assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(true));
        assert!(engine.cached(&asset).is_some());
    }

    #[test]
    fn test_context_created_once() {
        let created = Arc::new(AtomicUsize::new(0));
        let created_clone = Arc::clone(&created);
        let engine = SoundEngine::with_factory(Box::new(move || -> Arc<dyn OutputContext> {
            created_clone.fetch_add(1, Ordering::SeqCst);
            Arc::new(SimulatedContext::new())
        }));

        assert!(!engine.has_context());
        let a = engine.context();
        let b = engine.context();

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(created.load(Ordering::SeqCst), 1);
    }
}
