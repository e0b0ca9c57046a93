use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var holding the log file prefix for the interactive UI.
pub const LOG_PATH_ENV: &str = "FIGURAS_LOG";

/// Initialize tracing for the interactive UI.
///
/// The terminal belongs to the UI, so events only go to a file, and only
/// when `FIGURAS_LOG` is set. Its value is a prefix; the run's start time
/// and pid are appended.
pub fn init_tui_tracing() {
    let Some(prefix) = std::env::var_os(LOG_PATH_ENV).filter(|p| !p.is_empty()) else {
        return;
    };
    let path = run_log_path(Path::new(&prefix), SystemTime::now(), std::process::id());
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("figuras: cannot write log {}: {}", path.display(), err);
            return;
        }
    };

    tracing_subscriber::registry()
        .with(filter_or("info"))
        .with(fmt::layer().with_writer(file).with_ansi(false))
        .init();
}

fn run_log_path(prefix: &Path, now: SystemTime, pid: u32) -> PathBuf {
    let secs = now
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut name = prefix.as_os_str().to_owned();
    name.push(format!(".{}.{}", secs, pid));
    PathBuf::from(name)
}

/// `RUST_LOG` when set, `level` otherwise.
fn filter_or(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize tracing on stderr for one-shot commands.
pub fn init_cli_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(filter_or("warn"))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();
}
