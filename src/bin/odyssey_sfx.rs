//! Command line player for the built-in UI sounds
//!
//! Usage:
//!   odyssey-sfx list
//!   odyssey-sfx devices
//!   odyssey-sfx play <name> [volume] [rate]
//!   odyssey-sfx mute | unmute | toggle | status

use std::env;
use std::sync::mpsc;
use std::time::Duration;

use odyssey_sound::audio::decode::scale_by_rate;
use odyssey_sound::audio::device::list_output_devices;
use odyssey_sound::{sounds, PlayOverrides, Sound, SoundConfig, SoundOptions, SoundSetting};

/// Extra wait after the clip's own length before giving up
const END_GRACE: Duration = Duration::from_millis(500);

/// How long to wait for a clip to finish decoding
const DECODE_TIMEOUT: Duration = Duration::from_secs(5);

fn usage() -> ! {
    eprintln!("Usage: odyssey-sfx <list | devices | play <name> [volume] [rate] | mute | unmute | toggle | status>");
    std::process::exit(2);
}

fn parse_arg(args: &[String], index: usize, what: &str) -> Option<f32> {
    let raw = args.get(index)?;
    match raw.parse::<f32>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Invalid {} '{}', using default", what, raw);
            None
        }
    }
}

fn play(args: &[String]) -> Result<(), String> {
    let name = args.get(2).ok_or("Missing sound name")?;
    let asset = sounds::by_name(name).ok_or_else(|| format!("Unknown sound '{}'", name))?;

    let overrides = PlayOverrides {
        volume: parse_arg(args, 3, "volume"),
        playback_rate: parse_arg(args, 4, "rate"),
    };

    let (tx, rx) = mpsc::channel();
    let sound = Sound::new(
        asset.clone(),
        SoundOptions::new().on_end(move || {
            let _ = tx.send(());
        }),
    );

    let waited = wait_until(|| sound.is_ready(), DECODE_TIMEOUT);
    if !waited {
        return Err(format!("Sound '{}' could not be decoded", name));
    }
    if !sound.is_enabled() {
        println!("Sound is muted, run `odyssey-sfx unmute` first");
        return Ok(());
    }

    sound.play_with(overrides);
    log::info!("Playing '{}'", name);

    let rate = overrides.playback_rate.unwrap_or(1.0);
    let length = scale_by_rate(sound.duration().unwrap_or_default(), rate);
    if rx.recv_timeout(length.saturating_add(END_GRACE)).is_err() {
        log::warn!("No end-of-clip notification for '{}'", name);
    }
    Ok(())
}

fn devices(config: &SoundConfig) -> Result<(), String> {
    let devices = list_output_devices().map_err(|e| e.to_string())?;
    if devices.is_empty() {
        println!("No output devices");
    }
    for device in devices {
        let mut marks = Vec::new();
        if device.is_default {
            marks.push("default");
        }
        if config.output_device.as_deref() == Some(device.name.as_str()) {
            marks.push("configured");
        }
        if marks.is_empty() {
            println!("{}", device.name);
        } else {
            println!("{} ({})", device.name, marks.join(", "));
        }
    }
    Ok(())
}

fn wait_until(ready: impl Fn() -> bool, timeout: Duration) -> bool {
    let step = Duration::from_millis(10);
    let mut waited = Duration::ZERO;
    while !ready() {
        if waited >= timeout {
            return false;
        }
        std::thread::sleep(step);
        waited += step;
    }
    true
}

fn main() {
    let config = odyssey_sound::init();

    let args: Vec<String> = env::args().collect();
    let Some(command) = args.get(1) else { usage() };

    let setting = SoundSetting::global();
    let result = match command.as_str() {
        "list" => {
            for asset in sounds::ALL {
                let millis = asset.duration().map(|d| d.as_millis()).unwrap_or(0);
                println!("{:<12} {} ms", asset.name(), millis);
            }
            Ok(())
        }
        "devices" => devices(&config),
        "play" => play(&args),
        "mute" => {
            setting.write(false);
            println!("sound off");
            Ok(())
        }
        "unmute" => {
            setting.write(true);
            println!("sound on");
            Ok(())
        }
        "toggle" => {
            let enabled = setting.toggle();
            println!("sound {}", if enabled { "on" } else { "off" });
            Ok(())
        }
        "status" => {
            println!("sound {}", if setting.read() { "on" } else { "off" });
            Ok(())
        }
        _ => usage(),
    };

    if let Err(e) = result {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
