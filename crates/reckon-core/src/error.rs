//! Error types for reckon-core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Non-finite time for {name}: {value}")]
    NonFiniteTime { name: &'static str, value: f64 },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
