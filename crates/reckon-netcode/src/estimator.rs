//! Dead-reckoning estimator for a remote quantity
//!
//! Turns a sparse, irregular stream of authoritative samples into a value
//! that can be queried at any point of the global clock. Each accepted
//! sample re-anchors a linear segment:
//!
//! ```text
//!   snap (where we are predicted to be now)
//!     ●──────────────────────────▶●  aim (sample projected one update interval ahead)
//!   snap_time                  aim_time ······ max_range = aim_time + update_time
//! ```
//!
//! Queries move along that segment. The position is continuous across
//! samples (the new snap is the old segment evaluated at arrival time), the
//! velocity is not.

use crate::{AsymmetricSmoother, Error, EstimatorConfig, Reading, Result, Sample};
use reckon_core::{check_time, Kinematic, Seconds};
use tracing::{debug, trace};

/// Extrapolating estimator for one tracked quantity of one entity
///
/// Generic over `V: Kinematic`, so the same estimator tracks scalars,
/// `Vec2`/`Vec3` positions or any fixed-size array.
///
/// # Example
///
/// ```
/// use reckon_core::Vec3;
/// use reckon_netcode::Estimator;
///
/// let mut estimator = Estimator::<Vec3>::new();
/// estimator.reset(0.0, 0.0, Vec3::ZERO).unwrap();
///
/// estimator.add_sample(1.0, 1.0, Vec3::new(10.0, 0.0, 0.0)).unwrap();
///
/// // The snap point is where the old segment put us at arrival time
/// let reading = estimator.read_position(1.0);
/// assert_eq!(reading.pos, Vec3::ZERO);
/// assert!(reading.in_range);
///
/// // Later queries head toward the new sample
/// let reading = estimator.read_position(1.25);
/// assert!(reading.pos.x > 0.0);
///
/// // Duplicates are rejected
/// assert!(estimator.add_sample(1.0, 1.1, Vec3::ZERO).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Estimator<V: Kinematic> {
    config: EstimatorConfig,
    /// Last accepted sample, for inferring velocity
    last_packet_pos: V,
    last_packet_time: Seconds,
    /// Origin of the current segment
    snap_pos: V,
    snap_vel: V,
    snap_time: Seconds,
    /// Target of the current segment
    aim_pos: V,
    aim_time: Seconds,
    /// One-way delay between packet time and processing time
    latency: AsymmetricSmoother,
    /// Interval between accepted samples
    update_time: AsymmetricSmoother,
}

impl<V: Kinematic> Estimator<V> {
    /// Create an estimator at rest at the zero value, time zero
    pub fn new() -> Self {
        Self::from_valid_config(EstimatorConfig::default())
    }

    /// Create an estimator with custom tuning
    ///
    /// Fails if the config does not validate.
    pub fn with_config(config: EstimatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: EstimatorConfig) -> Self {
        let mut estimator = Self {
            config,
            last_packet_pos: V::zero(),
            last_packet_time: 0.0,
            snap_pos: V::zero(),
            snap_vel: V::zero(),
            snap_time: 0.0,
            aim_pos: V::zero(),
            aim_time: 0.0,
            latency: AsymmetricSmoother::new(config.rise_weight, config.decay_weight),
            update_time: AsymmetricSmoother::new(config.rise_weight, config.decay_weight),
        };
        estimator.rebaseline(0.0, 0.0, V::zero(), V::zero());
        estimator
    }

    /// Ingest a position-only sample
    ///
    /// Velocity is inferred from the previous accepted sample; if the two
    /// packet times are closer than the configured epsilon, zero velocity is
    /// used instead.
    ///
    /// Returns [`Error::StaleSample`] without touching any state when
    /// `packet_time` is not strictly newer than the last accepted sample,
    /// and [`Error::NonFiniteValue`] when `pos` has a NaN or infinite
    /// component.
    pub fn add_sample(&mut self, packet_time: Seconds, cur_time: Seconds, pos: V) -> Result<()> {
        self.check_sample_times(packet_time, cur_time)?;
        check_value("pos", &pos)?;

        let vel = V::slope(
            self.last_packet_pos,
            pos,
            packet_time - self.last_packet_time,
            self.config.epsilon,
            V::zero(),
        );
        self.ingest(packet_time, cur_time, pos, vel);
        Ok(())
    }

    /// Ingest a sample that carries its own velocity
    pub fn add_sample_with_velocity(
        &mut self,
        packet_time: Seconds,
        cur_time: Seconds,
        pos: V,
        vel: V,
    ) -> Result<()> {
        self.check_sample_times(packet_time, cur_time)?;
        check_value("pos", &pos)?;
        check_value("vel", &vel)?;
        self.ingest(packet_time, cur_time, pos, vel);
        Ok(())
    }

    /// Ingest a [`Sample`] record processed at `cur_time`
    pub fn add_sample_record(&mut self, cur_time: Seconds, sample: &Sample<V>) -> Result<()> {
        match sample.vel {
            Some(vel) => self.add_sample_with_velocity(sample.packet_time, cur_time, sample.pos, vel),
            None => self.add_sample(sample.packet_time, cur_time, sample.pos),
        }
    }

    /// Estimate the value and velocity at `for_time`
    ///
    /// `for_time` is clamped into `[snap_time, max_range()]`. When clamping
    /// happens the reading is flagged out of range and its velocity is zero,
    /// but the position is still the segment evaluated at the clamp bound.
    pub fn read_position(&self, for_time: Seconds) -> Reading<V> {
        let max_range = self.max_range();
        let (t, in_range) = if for_time.is_nan() || for_time < self.snap_time {
            (self.snap_time, false)
        } else if for_time > max_range {
            (max_range, false)
        } else {
            (for_time, true)
        };

        let pos = self.snap_pos.add(self.snap_vel.scale(t - self.snap_time));
        let vel = if in_range { self.snap_vel } else { V::zero() };
        Reading { pos, vel, in_range }
    }

    /// Estimate the value at `for_time`, discarding velocity
    pub fn read_position_only(&self, for_time: Seconds) -> (V, bool) {
        let reading = self.read_position(for_time);
        (reading.pos, reading.in_range)
    }

    /// Re-baseline at rest: `pos` is the sole ground truth at `packet_time`
    pub fn reset(&mut self, packet_time: Seconds, cur_time: Seconds, pos: V) -> Result<()> {
        self.reset_with_velocity(packet_time, cur_time, pos, V::zero())
    }

    /// Re-baseline at the zero value, at rest
    pub fn reset_to_zero(&mut self, packet_time: Seconds, cur_time: Seconds) -> Result<()> {
        self.reset_with_velocity(packet_time, cur_time, V::zero(), V::zero())
    }

    /// Re-baseline with `pos` moving at `vel` at `packet_time`, observed at `cur_time`
    ///
    /// Both the latency and update-interval estimates restart from
    /// `cur_time - packet_time` (clamped at zero).
    pub fn reset_with_velocity(
        &mut self,
        packet_time: Seconds,
        cur_time: Seconds,
        pos: V,
        vel: V,
    ) -> Result<()> {
        check_time("packet_time", packet_time)?;
        check_time("cur_time", cur_time)?;
        check_value("pos", &pos)?;
        check_value("vel", &vel)?;
        self.rebaseline(packet_time, cur_time, pos, vel);
        Ok(())
    }

    /// Smoothed one-way delay, in seconds
    pub fn estimate_latency(&self) -> f64 {
        self.latency.estimate()
    }

    /// Smoothed interval between samples, in seconds
    pub fn estimate_update_time(&self) -> f64 {
        self.update_time.estimate()
    }

    /// Packet time of the last accepted sample
    pub fn last_packet_time(&self) -> Seconds {
        self.last_packet_time
    }

    /// Segment origin as `(pos, vel, time)`
    pub fn snap(&self) -> (V, V, Seconds) {
        (self.snap_pos, self.snap_vel, self.snap_time)
    }

    /// Segment target as `(pos, time)`
    pub fn aim(&self) -> (V, Seconds) {
        (self.aim_pos, self.aim_time)
    }

    /// Latest time a query is still considered in range
    pub fn max_range(&self) -> Seconds {
        self.aim_time + self.update_time.estimate() * self.config.range_extension
    }

    /// Tuning this estimator was built with
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    fn check_sample_times(&self, packet_time: Seconds, cur_time: Seconds) -> Result<()> {
        check_time("packet_time", packet_time)?;
        check_time("cur_time", cur_time)?;

        if packet_time <= self.last_packet_time {
            debug!(
                packet_time,
                last_packet_time = self.last_packet_time,
                "rejecting stale sample"
            );
            return Err(Error::StaleSample {
                packet_time,
                last_packet_time: self.last_packet_time,
            });
        }
        Ok(())
    }

    /// Apply an already-validated sample
    fn ingest(&mut self, packet_time: Seconds, cur_time: Seconds, pos: V, vel: V) {
        self.latency.update((cur_time - packet_time).max(0.0));
        self.update_time.update(packet_time - self.last_packet_time);

        self.last_packet_pos = pos;
        self.last_packet_time = packet_time;

        // Out-of-range is ignored here: the clamped position becomes the new snap.
        self.snap_pos = self.read_position(cur_time).pos;
        self.snap_time = cur_time;

        self.aim_time = cur_time + self.update_time.estimate();
        self.aim_pos = pos.add(vel.scale(self.aim_time - packet_time));

        self.snap_vel = V::slope(
            self.snap_pos,
            self.aim_pos,
            self.aim_time - self.snap_time,
            self.config.epsilon,
            vel,
        );

        trace!(
            packet_time,
            cur_time,
            latency = self.latency.estimate(),
            update_time = self.update_time.estimate(),
            aim_time = self.aim_time,
            "accepted sample"
        );
    }

    fn rebaseline(&mut self, packet_time: Seconds, cur_time: Seconds, pos: V, vel: V) {
        let delay = (cur_time - packet_time).max(0.0);
        self.latency.reset(delay);
        self.update_time.reset(delay);

        self.last_packet_pos = pos;
        self.last_packet_time = packet_time;

        self.snap_pos = pos;
        self.snap_vel = vel;
        self.snap_time = cur_time;

        self.aim_time = cur_time + delay;
        self.aim_pos = pos.add(vel.scale(delay));
    }
}

fn check_value<V: Kinematic>(name: &'static str, value: &V) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteValue { name })
    }
}

impl<V: Kinematic> Default for Estimator<V> {
    fn default() -> Self {
        Self::new()
    }
}
