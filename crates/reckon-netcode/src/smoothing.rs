//! Asymmetric exponential smoothing for link metrics
//!
//! Observations above the current estimate are blended in with a large
//! weight, observations at or below it with a small one. Latency spikes and
//! longer gaps between updates are picked up within a couple of samples,
//! while a single fast packet barely moves the estimate.

/// Smoothed running estimate of a non-negative quantity
///
/// # Example
///
/// ```
/// use reckon_netcode::AsymmetricSmoother;
///
/// let mut latency = AsymmetricSmoother::new(0.5, 0.125);
/// latency.update(0.2);
/// assert!((latency.estimate() - 0.1).abs() < 1e-12);
///
/// // Dropping back to zero only decays by an eighth of the gap
/// latency.update(0.0);
/// assert!((latency.estimate() - 0.0875).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsymmetricSmoother {
    /// Current estimate
    estimate: f64,
    /// Weight of an observation above the estimate
    rise_weight: f64,
    /// Weight of an observation at or below the estimate
    decay_weight: f64,
}

impl AsymmetricSmoother {
    /// Create a smoother starting from zero
    ///
    /// Weights are expected in `(0, 1]`; `EstimatorConfig::validate` checks
    /// them before an estimator builds its smoothers.
    pub fn new(rise_weight: f64, decay_weight: f64) -> Self {
        Self {
            estimate: 0.0,
            rise_weight,
            decay_weight,
        }
    }

    /// Blend in a new observation and return the updated estimate
    pub fn update(&mut self, observed: f64) -> f64 {
        let weight = if observed > self.estimate {
            self.rise_weight
        } else {
            self.decay_weight
        };
        self.estimate = self.estimate * (1.0 - weight) + observed * weight;
        self.estimate
    }

    /// Overwrite the estimate
    pub fn reset(&mut self, estimate: f64) {
        self.estimate = estimate;
    }

    /// Current estimate
    pub fn estimate(&self) -> f64 {
        self.estimate
    }
}
