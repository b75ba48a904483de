//! Error types for the COinS encoder

use thiserror::Error;

/// Main error type.
///
/// Encoding itself never fails: absent or blank metadata degrades to
/// omission or a documented default. Errors only arise at the
/// configuration edge of the crate.
#[derive(Error, Debug)]
pub enum CoinsError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type alias using CoinsError
pub type CoinsResult<T> = Result<T, CoinsError>;
