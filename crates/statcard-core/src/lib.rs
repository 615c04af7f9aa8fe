#![forbid(unsafe_code)]

//! Data model for headless stats cards.
//!
//! Everything here is plain data plus pure normalization:
//! - [`StatsSnapshot`]: metrics handed over by a stats source
//! - [`CardOptions`]: typed, normalized user options (`from_query`)
//! - [`ColorSet`]: theme resolution with explicit > theme > default precedence
//! - [`format_number`]: compact (`12.3k`) or long number text

pub mod config;
pub mod error;
pub mod locale;
pub mod number;
pub mod options;
pub mod stats;
pub mod theme;

pub use config::{CacheConfig, CardConfig};
pub use error::{DataSourceError, DataSourceErrorCode, Error, Result};
pub use locale::Locale;
pub use number::{NumberFormat, format_number};
pub use options::{CardOptions, parse_bool, parse_query};
pub use stats::{StatsSnapshot, leading_integer};
pub use theme::{Background, ColorOverrides, ColorSet, Theme};

#[cfg(test)]
mod tests;
