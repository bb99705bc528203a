//! Logging init: file under the XDG state dir, falling back to stderr.
//!
//! `RUST_LOG` overrides the built-in filter in both modes.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const QUIET_FILTER: &str = "warn,tagsync_core=info,tagsync_cli=info";
const VERBOSE_FILTER: &str = "info,tagsync_core=debug,tagsync_cli=debug";

/// Where log output ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// Log writer handed out per event: a clone of the log file, or stderr when
/// the clone fails.
enum LogSink {
    File(fs::File),
    Stderr,
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct LogFile(fs::File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogSink::File)
            .unwrap_or(LogSink::Stderr)
    }
}

/// Install the global subscriber, preferring `~/.local/state/tagsync/tagsync.log`.
pub fn init(verbose: bool) -> LogTarget {
    match open_log_file() {
        Ok((path, file)) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(verbose))
                .with_writer(BoxMakeWriter::new(LogFile(file)))
                .with_ansi(false)
                .init();
            tracing::info!("tagsync logging initialized at {}", path.display());
            LogTarget::File(path)
        }
        Err(_) => {
            init_stderr(verbose);
            LogTarget::Stderr
        }
    }
}

/// Install a stderr-only subscriber.
pub fn init_stderr(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn open_log_file() -> Result<(PathBuf, fs::File)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tagsync")?;
    let log_dir = xdg_dirs.get_state_home().join("tagsync");
    fs::create_dir_all(&log_dir)?;

    let path = log_dir.join("tagsync.log");
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    Ok((path, file))
}

fn env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose { VERBOSE_FILTER } else { QUIET_FILTER };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
