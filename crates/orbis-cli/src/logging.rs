//! Run-scoped logging using `tracing` and `tracing-subscriber`.
//!
//! Each pipeline run builds a [`RunLogging`] context from a [`LogConfig`].
//! The context installs a subscriber for the current thread only, writing to
//! stderr and to `<log_dir>/orbis_<run_id>.log`, and removes it when dropped.
//! No process-wide logger is installed.
//!
//! # Log Levels
//!
//! - `error`: fatal pipeline failures
//! - `warn`: nothing to do, skipped checks
//! - `info`: stage progress, row and column counts, durations
//! - `debug`: per-file reads and cleaning counts
//! - `trace`: not used by the pipeline itself
//!
//! # Usage
//!
//! ```ignore
//! use orbis_cli::logging::{LogConfig, RunLogging};
//!
//! let logging = RunLogging::start(&LogConfig::default(), "20250101_000000_abcd1234")?;
//! tracing::info!("inside the run");
//! drop(logging);
//! ```

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::level_filters::LevelFilter;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::layer::{Layer, Layered, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{self, MakeWriter},
};

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Maximum level to record.
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` override `level_filter`.
    pub use_env_filter: bool,
    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
    /// Whether to use ANSI colors on stderr. The log file never has colors.
    pub with_ansi: bool,
    /// Output format: "pretty", "compact", or "json".
    pub format: LogFormat,
    /// Directory for per-run log files. `None` logs to stderr only.
    pub log_dir: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line format.
    Pretty,
    /// Compact single-line format.
    #[default]
    Compact,
    /// JSON format for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::INFO,
            use_env_filter: true,
            with_timestamps: true,
            with_target: false,
            with_ansi: false,
            format: LogFormat::default(),
            log_dir: Some(PathBuf::from("logs")),
        }
    }
}

impl LogConfig {
    /// Set log level directly.
    #[must_use]
    pub fn with_level(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    /// Set output format.
    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the log directory (stderr only when None).
    #[must_use]
    pub fn with_log_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.log_dir = dir;
        self
    }

    /// Path of the log file for a run, if file logging is enabled.
    pub fn log_file_for(&self, run_id: &str) -> Option<PathBuf> {
        self.log_dir
            .as_ref()
            .map(|dir| dir.join(format!("orbis_{run_id}.log")))
    }
}

type RunSubscriber = Layered<EnvFilter, Registry>;
type BoxedLayer = Box<dyn Layer<RunSubscriber> + Send + Sync>;

/// Logging context for one pipeline run.
///
/// Holds the thread-local subscriber guard; dropping the context restores
/// whatever subscriber was active before.
pub struct RunLogging {
    log_file: Option<PathBuf>,
    _guard: DefaultGuard,
}

impl RunLogging {
    /// Installs the run's subscriber on the current thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the log directory or file cannot be created.
    pub fn start(config: &LogConfig, run_id: &str) -> io::Result<Self> {
        let mut layers: Vec<BoxedLayer> = vec![fmt_layer(config, io::stderr, config.with_ansi)];

        let log_file = config.log_file_for(run_id);
        if let Some(path) = &log_file {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            layers.push(fmt_layer(config, SharedFileWriter::new(file), false));
        }

        let guard = tracing_subscriber::registry()
            .with(build_env_filter(config))
            .with(layers)
            .set_default();

        Ok(Self {
            log_file,
            _guard: guard,
        })
    }

    /// The file this run logs to, if any.
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}

fn fmt_layer<W>(config: &LogConfig, writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(writer)
            .with_target(config.with_target)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(config.with_target);
            if config.with_timestamps {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            }
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(config.with_target);
            if config.with_timestamps {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            }
        }
    }
}

#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<File>>,
}

impl SharedFileWriter {
    fn new(file: File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

struct SharedFileGuard {
    file: Arc<Mutex<File>>,
}

impl Write for SharedFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
    type Writer = SharedFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        SharedFileGuard {
            file: Arc::clone(&self.file),
        }
    }
}

/// Build an `EnvFilter` from the configured level, respecting `RUST_LOG`
/// when allowed.
fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let level = config.level_filter.to_string().to_lowercase();
    let fallback = || {
        // Dependencies stay at warn unless the level is stricter
        EnvFilter::new(format!(
            "warn,orbis={level},orbis_cli={level},orbis_ingest={level},\
             orbis_transform={level},orbis_validate={level},orbis_output={level}"
        ))
    };

    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}
