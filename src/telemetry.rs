use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Send logs to `path` so they never draw over the terminal UI.
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn init_tracing(path: &Path, default_filter: &str) -> std::io::Result<()> {
    let file = File::create(path)?;
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}
