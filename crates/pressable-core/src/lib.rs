//! Pressable Core
//!
//! Geometry, color, math and logging utilities shared by the pressable
//! widget and its platform adapters.

pub mod color;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;

pub use color::Color;
pub use geometry::{Pos, Rect};
