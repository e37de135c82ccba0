//! Authoritative samples in, estimated readings out

use reckon_core::{Kinematic, Seconds};

/// One authoritative update for the tracked quantity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<V> {
    /// Global time the sample was valid at the sender
    pub packet_time: Seconds,
    /// Authoritative value
    pub pos: V,
    /// Authoritative velocity, if the sender provides one
    pub vel: Option<V>,
}

impl<V: Kinematic> Sample<V> {
    /// A position-only sample; velocity will be inferred from the previous one
    pub fn position(packet_time: Seconds, pos: V) -> Self {
        Self {
            packet_time,
            pos,
            vel: None,
        }
    }

    /// A sample carrying its own velocity
    pub fn with_velocity(packet_time: Seconds, pos: V, vel: V) -> Self {
        Self {
            packet_time,
            pos,
            vel: Some(vel),
        }
    }
}

/// Result of querying an estimator at some point in time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading<V> {
    /// Estimated value, clamped to the extrapolation window
    pub pos: V,
    /// Estimated velocity; zero when out of range
    pub vel: V,
    /// False when the query time fell outside the extrapolation window
    pub in_range: bool,
}

impl<V> Reading<V> {
    /// Split into `(pos, vel, in_range)`
    pub fn into_parts(self) -> (V, V, bool) {
        (self.pos, self.vel, self.in_range)
    }
}
