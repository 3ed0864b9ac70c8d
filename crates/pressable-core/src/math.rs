//! Integer pointer positions.
//!
//! Re-exports the [`glam`] vector type used for pointer samples.
//!
//! ```
//! use pressable_core::math::{IVec2, floor_to_ivec2};
//!
//! assert_eq!(floor_to_ivec2(10.7, 20.2), IVec2::new(10, 20));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::IVec2;

/// Convert a float host coordinate pair into an integer pointer position.
///
/// Coordinates are floored, so `-0.5` maps to `-1` rather than `0`.
#[inline]
pub fn floor_to_ivec2(x: f64, y: f64) -> IVec2 {
    IVec2::new(x.floor() as i32, y.floor() as i32)
}
