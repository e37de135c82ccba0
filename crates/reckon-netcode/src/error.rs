//! Error types for reckon-netcode

use thiserror::Error;

/// Netcode error type
#[derive(Debug, Error)]
pub enum Error {
    /// Sample is not newer than the last accepted one
    ///
    /// Expected under out-of-order or duplicated delivery. The estimator is
    /// left untouched; callers typically drop the packet.
    #[error("Stale sample at {packet_time}s, last accepted sample is at {last_packet_time}s")]
    StaleSample {
        packet_time: f64,
        last_packet_time: f64,
    },

    /// Sample or reset value has a NaN or infinite component
    #[error("Non-finite {name} rejected")]
    NonFiniteValue { name: &'static str },

    /// Estimator configuration rejected
    #[error("Invalid estimator config: {0}")]
    InvalidConfig(String),

    /// Config file could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Core error (non-finite timestamps)
    #[error("Core error: {0}")]
    Core(#[from] reckon_core::Error),
}

impl Error {
    /// True for the rejection that normal out-of-order delivery produces
    pub fn is_stale(&self) -> bool {
        matches!(self, Error::StaleSample { .. })
    }
}

/// Result type for netcode operations
pub type Result<T> = std::result::Result<T, Error>;
