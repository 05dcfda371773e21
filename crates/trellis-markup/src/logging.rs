//! Logger initialization for applications built on trellis.
//!
//! The library crates only ever log through the `log` facade (the dimension
//! grammar warns when malformed size strings degrade to auto); wiring a
//! backend is the application's call. This module offers an `env_logger`
//! setup for binaries that do not bring their own.

use std::sync::Once;

/// With no explicit filter and no `RUST_LOG`, only warnings and errors are
/// shown — the level the grammar's fallback-to-Auto reports land on.
const DEFAULT_FILTER: &str = "warn";

/// Logger configuration.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// `env_logger` filter syntax, e.g. `"warn"` or `"trellis_layout=debug"`.
    /// `None` defers to `RUST_LOG`, then to [`DEFAULT_FILTER`].
    pub env_filter: Option<String>,
}

impl LoggingConfig {
    /// Config with an explicit filter, overriding `RUST_LOG`.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { env_filter: Some(filter.into()) }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent; subsequent calls are ignored. Intended usage is early in
/// `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config
            .env_filter
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| DEFAULT_FILTER.to_owned());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.init();

        log::debug!("logging initialized with filter {filter:?}");
    });
}
