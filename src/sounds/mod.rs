//! Built-in UI sounds

mod click_soft;
mod switch_off;
mod switch_on;

pub use click_soft::CLICK_SOFT;
pub use switch_off::SWITCH_OFF;
pub use switch_on::SWITCH_ON;

use crate::audio::asset::SoundAsset;

pub static ALL: [&SoundAsset; 3] = [&CLICK_SOFT, &SWITCH_ON, &SWITCH_OFF];

/// Look up a built-in sound by its asset name
pub fn by_name(name: &str) -> Option<&'static SoundAsset> {
    ALL.iter().copied().find(|asset| asset.name() == name)
}
