//! Reckon Netcode - Dead reckoning for remote entities
//!
//! This crate turns sparse, late and out-of-order authoritative samples of a
//! remote quantity into a value that can be read at any time:
//!
//! - **Estimator**: snap/aim extrapolation with adaptive latency and
//!   update-interval tracking
//! - **Smoothing**: asymmetric exponential filter that reacts fast to
//!   degradation and slowly to improvement
//! - **Config**: tuning constants, loadable from RON
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       Client                             │
//! │  ┌──────────────┐  add_sample  ┌──────────────────────┐  │
//! │  │   Network    │─────────────▶│      Estimator       │  │
//! │  └──────────────┘              │  latency ─┐          │  │
//! │                                │  update ──┴▶ snap/aim│  │
//! │  ┌──────────────┐ read_position└──────────┬───────────┘  │
//! │  │    Render    │◀────────────────────────┘              │
//! │  └──────────────┘                                        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Every call takes explicit timestamps on a shared clock; nothing in this
//! crate reads wall-clock time.
//!
//! # Example
//!
//! ```rust,ignore
//! use reckon_core::Vec3;
//! use reckon_netcode::Estimator;
//!
//! let mut estimator = Estimator::<Vec3>::new();
//!
//! loop {
//!     let now = clock.now();
//!     while let Some(packet) = receive_position() {
//!         // Out-of-order packets are rejected and can be dropped
//!         let _ = estimator.add_sample(packet.time, now, packet.pos);
//!     }
//!     let reading = estimator.read_position(now);
//!     render(reading.pos);
//! }
//! ```

mod config;
mod error;
mod estimator;
mod sample;
mod smoothing;

pub use config::EstimatorConfig;
pub use error::{Error, Result};
pub use estimator::Estimator;
pub use sample::{Reading, Sample};
pub use smoothing::AsymmetricSmoother;

// Re-export core types for convenience
pub use reckon_core::{Kinematic, Seconds};
