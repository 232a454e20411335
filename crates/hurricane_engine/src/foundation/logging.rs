//! Logging utilities and structured logging support

use std::sync::Once;

pub use log::{debug, error, info, trace, warn};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Initialize the logging system
///
/// The filter follows `env_logger` syntax (e.g. `"info"` or
/// `"hurricane_engine=debug"`). It is taken from the config, then `RUST_LOG`,
/// then defaults to `info`. Only the first call has any effect.
pub fn init(config: &LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = &config.filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        // A test harness may already have installed a logger
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("Logging initialized");
    });
}
