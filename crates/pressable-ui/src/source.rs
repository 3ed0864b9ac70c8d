//! Pointer input and the host subscription a button registers with.

use std::cell::Cell;
use std::rc::Rc;

use pressable_core::math::{IVec2, floor_to_ivec2};

/// Which pointer entry point an input targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Pointer moved with no button held.
    Moved,
    /// Primary button went down.
    Pressed,
    /// Pointer moved with the primary button held.
    Dragged,
    /// Primary button went up.
    Released,
}

/// A raw pointer sample in integer window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerInput {
    pub kind: PointerKind,
    pub position: IVec2,
}

impl PointerInput {
    pub fn new(kind: PointerKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            position: IVec2::new(x, y),
        }
    }

    /// Build an input from float host coordinates, flooring them.
    pub fn from_f64(kind: PointerKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            position: floor_to_ivec2(x, y),
        }
    }

    pub fn moved(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Moved, x, y)
    }

    pub fn pressed(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Pressed, x, y)
    }

    pub fn dragged(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Dragged, x, y)
    }

    pub fn released(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Released, x, y)
    }
}

/// Host-side subscription for a button's pointer events.
///
/// The button calls [`subscribe`](PointerSource::subscribe) and
/// [`unsubscribe`](PointerSource::unsubscribe) exactly once per
/// registration transition, and unsubscribes on drop if still registered.
pub trait PointerSource {
    fn subscribe(&mut self);
    fn unsubscribe(&mut self);
}

impl<S: PointerSource + ?Sized> PointerSource for Box<S> {
    fn subscribe(&mut self) {
        (**self).subscribe()
    }

    fn unsubscribe(&mut self) {
        (**self).unsubscribe()
    }
}

/// Shared open/closed flag usable as a [`PointerSource`].
///
/// The host keeps a clone and forwards pointer events only while the gate
/// is open. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct SharedGate {
    open: Rc<Cell<bool>>,
}

impl SharedGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }
}

impl PointerSource for SharedGate {
    fn subscribe(&mut self) {
        self.open.set(true);
    }

    fn unsubscribe(&mut self) {
        self.open.set(false);
    }
}
