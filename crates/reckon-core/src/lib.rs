//! Reckon Core - Shared primitives for dead-reckoning estimators
//!
//! This crate provides the host-side building blocks the estimators are
//! generic over:
//! - `Kinematic` - the vector capability (zero, add, subtract, scale)
//! - `Vec2` / `Vec3` - concrete real vectors for positions and velocities
//! - `Seconds` - global clock timestamps, always passed explicitly
//!
//! `Kinematic` is also implemented for `f32`, `f64` and fixed-size arrays of
//! any `Kinematic` element, so a single estimator implementation covers
//! scalars, 2D, 3D and higher-dimensional quantities.
//!
//! ```rust
//! use reckon_core::{Kinematic, Vec3};
//!
//! let a = Vec3::new(1.0, 2.0, 3.0);
//! let b = Vec3::new(3.0, 2.0, 1.0);
//! assert_eq!(a.lerp(b, 0.5), Vec3::new(2.0, 2.0, 2.0));
//!
//! // Arrays behave the same way
//! let p = [0.0f64, 10.0];
//! assert_eq!(p.scale(0.5), [0.0, 5.0]);
//! ```

mod error;
pub mod math;
pub mod time;
mod vector;

pub use error::{Error, Result};
pub use math::{Vec2, Vec3};
pub use time::{check_time, Seconds};
pub use vector::Kinematic;
