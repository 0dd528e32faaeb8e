// src/log.rs
//
// Logging goes through `tracing`; the `logf!`/`logd!`/`loge!` shorthands live in
// macros.rs. `init` is called once by each binary; the library never installs
// a subscriber on its own.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

#[doc(hidden)]
pub use tracing;

/// Default filter for a `-v` count: 0 → info, 1 → debug, 2+ → trace.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "goal500=info",
        1 => "goal500=debug",
        _ => "goal500=trace",
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `verbosity` when set.
/// With `log_file`, events are appended there (no colours) instead of stderr.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    // A second init (tests, embedding) is harmless; keep the first subscriber.
    let _ = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    Ok(())
}
