//! Global sound toggle
//!
//! One persisted boolean ("sound enabled") shared by every controller in
//! the process. Writes are persisted, then pushed synchronously to every
//! subscriber before `write` returns. Storage failures are logged and the
//! in-memory value is used instead.

use once_cell::sync::OnceCell;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use crate::config::SoundConfig;
use crate::error::{Result, SoundError};

/// Key the toggle is persisted under
pub const SOUND_STORAGE_KEY: &str = "odyssey-sound-enabled";

/// Name of the change notification, used in logs
pub const SOUND_EVENT: &str = "odyssey-sound-toggle";

/// Durable string key-value storage
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Process-local storage, lost on exit
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Flat JSON object of string values on disk
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| {
            SoundError::StorageUnavailable(format!("Failed to read {:?}: {}", self.path, e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            SoundError::StorageUnavailable(format!("Failed to parse {:?}: {}", self.path, e))
        })
    }
}

impl SettingsStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking every future write
        let mut values = self.read_all().unwrap_or_else(|e| {
            log::warn!("{}, starting a fresh settings file", e);
            HashMap::new()
        });
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SoundError::StorageUnavailable(format!("Failed to create {:?}: {}", parent, e))
            })?;
        }

        let json = serde_json::to_string_pretty(&values).map_err(|e| {
            SoundError::StorageUnavailable(format!("Failed to serialize settings: {}", e))
        })?;
        fs::write(&self.path, json).map_err(|e| {
            SoundError::StorageUnavailable(format!("Failed to write {:?}: {}", self.path, e))
        })
    }
}

type Listener = Arc<dyn Fn(bool) + Send + Sync>;

pub struct SoundSetting {
    store: Box<dyn SettingsStore>,
    value: RwLock<Option<bool>>,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_listener: AtomicU64,
}

impl SoundSetting {
    pub fn new(store: Box<dyn SettingsStore>) -> Self {
        Self {
            store,
            value: RwLock::new(None),
            listeners: Mutex::new(Vec::new()),
            next_listener: AtomicU64::new(0),
        }
    }

    /// Whether sound is enabled. Loaded from storage on first call,
    /// enabled if never stored or storage is unavailable.
    pub fn read(&self) -> bool {
        if let Some(value) = *self.value.read() {
            return value;
        }

        let loaded = match self.store.get(SOUND_STORAGE_KEY) {
            Ok(Some(stored)) => stored == "true",
            Ok(None) => true,
            Err(e) => {
                log::warn!("{}, sound stays enabled for this session", e);
                true
            }
        };

        // Keep a value a concurrent write may have set meanwhile
        *self.value.write().get_or_insert(loaded)
    }

    /// Persist `enabled` and notify every subscriber before returning
    pub fn write(&self, enabled: bool) {
        *self.value.write() = Some(enabled);

        let text = if enabled { "true" } else { "false" };
        if let Err(e) = self.store.set(SOUND_STORAGE_KEY, text) {
            log::warn!("{}, keeping sound toggle in memory only", e);
        }

        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        log::debug!("{}: enabled={} ({} listeners)", SOUND_EVENT, enabled, listeners.len());
        for listener in listeners {
            listener(enabled);
        }
    }

    /// Flip the toggle, returning the new value
    pub fn toggle(&self) -> bool {
        let next = !self.read();
        self.write(next);
        next
    }

    /// Register `listener` for changes until the returned guard is dropped
    pub fn subscribe<F>(self: &Arc<Self>, listener: F) -> Subscription
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        let id = self.next_listener.fetch_add(1, Ordering::SeqCst);
        self.listeners.lock().push((id, Arc::new(listener)));
        Subscription {
            setting: Arc::downgrade(self),
            id,
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    fn unsubscribe(&self, id: u64) {
        self.listeners.lock().retain(|(listener_id, _)| *listener_id != id);
    }
}

/// Removes its listener when dropped
pub struct Subscription {
    setting: Weak<SoundSetting>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(setting) = self.setting.upgrade() {
            setting.unsubscribe(self.id);
        }
    }
}

static SETTING: OnceCell<Arc<SoundSetting>> = OnceCell::new();

fn store_for(config: &SoundConfig) -> Box<dyn SettingsStore> {
    match config.settings_file() {
        Some(path) => {
            log::debug!("Sound toggle persisted in {:?}", path);
            Box::new(FileStore::new(path))
        }
        None => {
            log::warn!("No config directory, sound toggle will not persist");
            Box::new(MemoryStore::new())
        }
    }
}

/// Install the global toggle for `config`. No effect once it exists.
pub fn init_setting(config: &SoundConfig) {
    if SETTING.get().is_some() {
        log::debug!("Sound setting already initialized");
        return;
    }
    let _ = SETTING.set(Arc::new(SoundSetting::new(store_for(config))));
}

impl SoundSetting {
    /// Process-wide toggle, file-backed at the default location unless
    /// `init_setting` ran first
    pub fn global() -> Arc<SoundSetting> {
        Arc::clone(SETTING.get_or_init(|| Arc::new(SoundSetting::new(store_for(&SoundConfig::default())))))
    }
}
