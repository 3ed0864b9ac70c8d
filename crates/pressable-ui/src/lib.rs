//! Pressable UI
//!
//! A single rectangular button that turns raw pointer samples into six
//! edge-triggered transitions: moved inside/outside, pressed inside,
//! dragged outside, released inside/outside.
//!
//! The host feeds pointer samples into [`Button`] (directly or via a
//! platform adapter), then either lets the button dispatch immediately
//! (`update_async`) or calls [`Button::update`] once per frame. Transitions
//! reach listeners through the [`ButtonHandler`] trait and through
//! [`ButtonSignals`].

pub mod button;
pub mod config;
pub mod draw;
pub mod error;
pub mod event;
pub mod source;
pub mod tracked;

pub use button::Button;
pub use config::ButtonConfig;
pub use draw::{ButtonState, ButtonStyle, Painter, RecordingPainter};
pub use error::ButtonError;
pub use event::{ButtonEvent, ButtonEvents, ButtonHandler, ButtonSignals, ListenerId};
pub use source::{PointerInput, PointerKind, PointerSource, SharedGate};
pub use tracked::Tracked;
