//! Global clock timestamps
//!
//! Estimators never read a clock themselves. Every operation takes its
//! timestamps as arguments, expressed in seconds of a clock shared by sender
//! and receiver. Skew correction happens before the values reach this crate.

use crate::{Error, Result};

/// A point on the shared global clock, in seconds
pub type Seconds = f64;

/// Validate a timestamp before it enters estimator state
///
/// Rejects NaN and infinities; any finite value (including negative ones)
/// is a valid clock reading.
///
/// ```
/// use reckon_core::check_time;
///
/// assert_eq!(check_time("packet_time", 1.5), Ok(1.5));
/// assert!(check_time("packet_time", f64::NAN).is_err());
/// ```
pub fn check_time(name: &'static str, value: Seconds) -> Result<Seconds> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteTime { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_times_pass_through() {
        assert_eq!(check_time("cur_time", 0.0), Ok(0.0));
        assert_eq!(check_time("cur_time", -3.25), Ok(-3.25));
    }

    #[test]
    fn test_non_finite_times_rejected() {
        let err = check_time("cur_time", f64::INFINITY).unwrap_err();
        assert!(matches!(err, Error::NonFiniteTime { name: "cur_time", .. }));
        assert!(check_time("cur_time", f64::NEG_INFINITY).is_err());
        assert!(check_time("cur_time", f64::NAN).is_err());
    }
}
