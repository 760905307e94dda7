//! Sound effect playback
//!
//! - Embedded assets as data URIs, decoded once via Symphonia and cached
//! - A shared output context (cpal, silent fallback, or simulated clock)
//! - Per call-site controllers with play/stop/pause and completion callbacks

pub mod asset;
pub mod backend;
pub mod decode;
pub mod device;
pub mod engine;
pub mod sound;

#[cfg(test)]
pub(crate) mod testing;
