// ==========================================
// Logging setup
// ==========================================
// tracing + tracing-subscriber
// RUST_LOG selects the level, SUPPORT_STOCK_LOG_FORMAT=json switches output
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Env var selecting the output format
pub const LOG_FORMAT_ENV: &str = "SUPPORT_STOCK_LOG_FORMAT";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable lines (default)
    Text,
    /// One JSON object per event, for log files shipped off the workstation
    Json,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var(LOG_FORMAT_ENV) {
            Ok(v) if v.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Initialize logging
///
/// # Environment
/// - RUST_LOG: filter directive (default: info),
///   e.g. RUST_LOG=debug or RUST_LOG=support_stock=trace
/// - SUPPORT_STOCK_LOG_FORMAT: `text` (default) or `json`
///
/// # Example
/// ```no_run
/// use support_stock::logging;
/// logging::init();
/// ```
pub fn init() {
    init_with_format(LogFormat::from_env());
}

/// Initialize logging with an explicit format
pub fn init_with_format(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true);

    let result = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    if let Err(e) = result {
        eprintln!("logging already initialized: {}", e);
    }
}

/// Logging for tests: debug level, captured by the test harness
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
