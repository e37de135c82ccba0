//! Estimator Configuration - Smoothing weights and extrapolation limits
//!
//! The defaults reproduce the canonical tuning: halfway correction when a
//! metric gets worse, one-eighth decay when it improves, a 1e-4 second
//! degenerate-interval threshold, and extrapolation allowed one estimated
//! update interval past the aim point.
//!
//! Configs can be built in code or loaded from RON:
//!
//! ```ron
//! (
//!     rise_weight: 0.5,
//!     decay_weight: 0.125,
//!     epsilon: 0.0001,
//!     range_extension: 1.0,
//! )
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

fn default_rise_weight() -> f64 {
    0.5
}

fn default_decay_weight() -> f64 {
    0.125
}

fn default_epsilon() -> f64 {
    1e-4
}

fn default_range_extension() -> f64 {
    1.0
}

/// Tuning for an [`Estimator`](crate::Estimator)
///
/// # Example
///
/// ```
/// use reckon_netcode::EstimatorConfig;
///
/// let config = EstimatorConfig::default()
///     .with_decay_weight(0.25)
///     .with_range_extension(2.0);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.rise_weight, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Weight given to an observation above the current estimate, in `(0, 1]`
    #[serde(default = "default_rise_weight")]
    pub rise_weight: f64,
    /// Weight given to an observation at or below the current estimate, in `(0, 1]`
    #[serde(default = "default_decay_weight")]
    pub decay_weight: f64,
    /// Time deltas shorter than this (seconds) are treated as degenerate
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    /// How many estimated update intervals past the aim time a query stays in range
    #[serde(default = "default_range_extension")]
    pub range_extension: f64,
}

impl EstimatorConfig {
    /// Parse a config from a RON string and validate it
    ///
    /// Missing fields take their defaults.
    ///
    /// ```
    /// use reckon_netcode::EstimatorConfig;
    ///
    /// let config = EstimatorConfig::from_ron("(decay_weight: 0.25)").unwrap();
    /// assert_eq!(config.decay_weight, 0.25);
    /// assert_eq!(config.epsilon, 1e-4);
    /// ```
    pub fn from_ron(content: &str) -> Result<Self> {
        let config: Self =
            ron::from_str(content).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a RON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_ron(&content)
    }

    /// Set the rise weight
    pub fn with_rise_weight(mut self, weight: f64) -> Self {
        self.rise_weight = weight;
        self
    }

    /// Set the decay weight
    pub fn with_decay_weight(mut self, weight: f64) -> Self {
        self.decay_weight = weight;
        self
    }

    /// Set the degenerate-interval threshold
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the range extension factor
    pub fn with_range_extension(mut self, factor: f64) -> Self {
        self.range_extension = factor;
        self
    }

    /// Check every field is finite and within its range
    ///
    /// `epsilon` must be strictly positive: it is the only guard against
    /// dividing by a zero-length interval.
    pub fn validate(&self) -> Result<()> {
        Self::check_weight("rise_weight", self.rise_weight)?;
        Self::check_weight("decay_weight", self.decay_weight)?;

        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(Self::reject(format!(
                "epsilon must be finite and positive, got {}",
                self.epsilon
            )));
        }
        if !self.range_extension.is_finite() || self.range_extension < 0.0 {
            return Err(Self::reject(format!(
                "range_extension must be finite and non-negative, got {}",
                self.range_extension
            )));
        }
        Ok(())
    }

    fn check_weight(name: &str, weight: f64) -> Result<()> {
        if weight.is_finite() && weight > 0.0 && weight <= 1.0 {
            Ok(())
        } else {
            Err(Self::reject(format!(
                "{} must be in (0, 1], got {}",
                name, weight
            )))
        }
    }

    fn reject(reason: String) -> Error {
        debug!(%reason, "rejecting estimator config");
        Error::InvalidConfig(reason)
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            rise_weight: default_rise_weight(),
            decay_weight: default_decay_weight(),
            epsilon: default_epsilon(),
            range_extension: default_range_extension(),
        }
    }
}
