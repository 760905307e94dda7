pub mod audio;
pub mod config;
pub mod error;
pub mod logging;
pub mod settings;
pub mod sounds;

pub use audio::asset::SoundAsset;
pub use audio::engine::{init_engine, SoundEngine};
pub use audio::sound::{PlayOverrides, PlaybackState, Sound, SoundOptions};
pub use config::SoundConfig;
pub use error::{Result, SoundError};
pub use settings::{init_setting, SoundSetting};

/// Load the user's config, start logging and install the global engine
/// and sound toggle. Returns the config that was applied.
pub fn init() -> SoundConfig {
    let config = SoundConfig::load_or_default();
    logging::init_logging(&config.log_level);
    init_setting(&config);
    init_engine(config.clone());
    config
}
