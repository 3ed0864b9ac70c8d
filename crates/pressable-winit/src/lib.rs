//! winit integration for pressable.
//!
//! Converts winit window events into pointer samples and forwards them to
//! a button while it is registered for pointer events.

pub mod event;
pub mod pointer;

pub use event::{Event, EventBatch, HandleStatus};
pub use pointer::{PointerTracker, WinitButton};
