//! Static portal configuration.
//!
//! These values are compiled in; there is no environment override on the
//! client side.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL of the academic backend that the departments lookup targets.
pub const API_BASE_URL: &str = "http://localhost:8000";

/// Product name shown in page titles and headers.
pub const APP_NAME: &str = "MUK Support Portal";

/// Rows per page in issue tables.
pub const DEFAULT_PAGINATION_LIMIT: usize = 10;

/// `chrono` format string for dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// `chrono` format string for date + time.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
