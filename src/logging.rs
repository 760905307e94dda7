//! Logging setup: timestamped lines to stderr and a log file

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::APP_DIR;

/// Get the log file path (in the user's data directory)
pub fn get_log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("logs")
        .join("odyssey-sound.log")
}

/// Writes each record to stderr and, when available, the log file
struct Tee {
    file: Option<File>,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Also print to stderr for dev mode
        io::stderr().write_all(buf)?;
        if let Some(file) = self.file.as_mut() {
            let _ = file.write_all(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        if let Some(file) = self.file.as_mut() {
            let _ = file.flush();
        }
        Ok(())
    }
}

fn open_log_file() -> Option<File> {
    let log_path = get_log_path();

    // Create logs directory if it doesn't exist
    if let Some(parent) = log_path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    OpenOptions::new().create(true).append(true).open(&log_path).ok()
}

/// Initialize logging. `RUST_LOG` wins over `default_level`.
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(default_level: &str) {
    let target = Tee {
        file: open_log_file(),
    };

    let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            writeln!(
                buf,
                "[{}] [{}] [{}] {}",
                timestamp,
                record.level(),
                record.module_path().unwrap_or("odyssey_sound"),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(target)))
        .try_init();

    if result.is_ok() {
        log::info!("Logging to {:?}", get_log_path());
    }
}
