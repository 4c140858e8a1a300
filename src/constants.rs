//! Application constants and configuration

pub const APP_NAME: &str = "Currency Converter";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed EUR -> USD exchange rate. The reverse rate is derived from it.
pub const EUR_TO_USD_RATE: f64 = 1.11;

/// Result text before any conversion and after switching direction
pub const DEFAULT_RESULT: &str = "0.00";

/// Log file naming and retention under `<data dir>/logs`
pub const LOG_FILE_PREFIX: &str = "currency-converter";
pub const LOG_FILES_KEPT: usize = 7;
/// Used when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info,currency_converter=debug";
