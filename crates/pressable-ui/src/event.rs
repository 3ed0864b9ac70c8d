//! Named button transitions and the two ways of listening to them.
//!
//! A [`ButtonHandler`] is the overridable side: one method per transition,
//! owned by the button. [`ButtonSignals`] is the subscribable side: any
//! number of shared callbacks connected per transition. The button emits
//! each transition once and both kinds are notified from that one call.

use std::rc::Rc;

use crate::error::ButtonError;

/// Edge-triggered transitions derived by [`crate::Button::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonEvent {
    /// Pointer moved onto the button.
    MovedInside,
    /// Pointer moved off the button.
    MovedOutside,
    /// Pointer pressed while over the button.
    PressedInside,
    /// Pointer dragged off the button while held.
    DraggedOutside,
    /// Pointer released over the button.
    ReleasedInside,
    /// Pointer released (or dragged away) off the button.
    ReleasedOutside,
}

impl ButtonEvent {
    /// All transitions in dispatch order.
    pub const ALL: [ButtonEvent; 6] = [
        ButtonEvent::MovedInside,
        ButtonEvent::MovedOutside,
        ButtonEvent::PressedInside,
        ButtonEvent::DraggedOutside,
        ButtonEvent::ReleasedInside,
        ButtonEvent::ReleasedOutside,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ButtonEvent::MovedInside => "moved_inside",
            ButtonEvent::MovedOutside => "moved_outside",
            ButtonEvent::PressedInside => "pressed_inside",
            ButtonEvent::DraggedOutside => "dragged_outside",
            ButtonEvent::ReleasedInside => "released_inside",
            ButtonEvent::ReleasedOutside => "released_outside",
        }
    }
}

impl std::fmt::Display for ButtonEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// Set of transitions. Flags are declared in dispatch order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ButtonEvents: u8 {
        const MOVED_INSIDE = 1 << 0;
        const MOVED_OUTSIDE = 1 << 1;
        const PRESSED_INSIDE = 1 << 2;
        const DRAGGED_OUTSIDE = 1 << 3;
        const RELEASED_INSIDE = 1 << 4;
        const RELEASED_OUTSIDE = 1 << 5;
    }
}

impl ButtonEvents {
    pub const fn has(&self, event: ButtonEvent) -> bool {
        self.contains(Self::from_event(event))
    }

    pub const fn from_event(event: ButtonEvent) -> Self {
        match event {
            ButtonEvent::MovedInside => Self::MOVED_INSIDE,
            ButtonEvent::MovedOutside => Self::MOVED_OUTSIDE,
            ButtonEvent::PressedInside => Self::PRESSED_INSIDE,
            ButtonEvent::DraggedOutside => Self::DRAGGED_OUTSIDE,
            ButtonEvent::ReleasedInside => Self::RELEASED_INSIDE,
            ButtonEvent::ReleasedOutside => Self::RELEASED_OUTSIDE,
        }
    }

    /// Iterate the contained transitions in dispatch order.
    pub fn events(self) -> impl Iterator<Item = ButtonEvent> {
        ButtonEvent::ALL
            .into_iter()
            .filter(move |event| self.has(*event))
    }
}

impl From<ButtonEvent> for ButtonEvents {
    fn from(event: ButtonEvent) -> Self {
        Self::from_event(event)
    }
}

impl FromIterator<ButtonEvent> for ButtonEvents {
    fn from_iter<I: IntoIterator<Item = ButtonEvent>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ButtonEvents::empty(), |set, event| set | event.into())
    }
}

/// Overridable per-transition handlers.
///
/// Every method defaults to doing nothing, so implementors only override
/// what they care about. Handlers only run while the button has handlers
/// enabled (see [`crate::Button::set_use_handlers`]); the registration
/// hooks always run.
pub trait ButtonHandler {
    fn moved_inside(&mut self) {}
    fn moved_outside(&mut self) {}
    fn pressed_inside(&mut self) {}
    fn dragged_outside(&mut self) {}
    fn released_inside(&mut self) {}
    fn released_outside(&mut self) {}

    /// Called once when the button registers for pointer events.
    fn event_register(&mut self) {}
    /// Called once when the button unregisters, including on drop.
    fn event_unregister(&mut self) {}

    /// Route a transition to its method.
    fn handle(&mut self, event: ButtonEvent) {
        match event {
            ButtonEvent::MovedInside => self.moved_inside(),
            ButtonEvent::MovedOutside => self.moved_outside(),
            ButtonEvent::PressedInside => self.pressed_inside(),
            ButtonEvent::DraggedOutside => self.dragged_outside(),
            ButtonEvent::ReleasedInside => self.released_inside(),
            ButtonEvent::ReleasedOutside => self.released_outside(),
        }
    }
}

/// No handler.
impl ButtonHandler for () {}

impl<H: ButtonHandler + ?Sized> ButtonHandler for Box<H> {
    fn moved_inside(&mut self) {
        (**self).moved_inside()
    }

    fn moved_outside(&mut self) {
        (**self).moved_outside()
    }

    fn pressed_inside(&mut self) {
        (**self).pressed_inside()
    }

    fn dragged_outside(&mut self) {
        (**self).dragged_outside()
    }

    fn released_inside(&mut self) {
        (**self).released_inside()
    }

    fn released_outside(&mut self) {
        (**self).released_outside()
    }

    fn handle(&mut self, event: ButtonEvent) {
        (**self).handle(event)
    }

    fn event_register(&mut self) {
        (**self).event_register()
    }

    fn event_unregister(&mut self) {
        (**self).event_unregister()
    }
}

/// Callback type for signal listeners.
pub type SignalCallback = Rc<dyn Fn(ButtonEvent)>;

/// Handle returned by [`ButtonSignals::connect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

struct Slot {
    id: ListenerId,
    events: ButtonEvents,
    callback: SignalCallback,
}

/// Subscribable per-transition listeners.
#[derive(Default)]
pub struct ButtonSignals {
    slots: Vec<Slot>,
    next_id: u64,
}

impl ButtonSignals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect a callback to one or more transitions.
    ///
    /// Callbacks run in connection order.
    pub fn connect<F>(&mut self, events: impl Into<ButtonEvents>, callback: F) -> ListenerId
    where
        F: Fn(ButtonEvent) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.slots.push(Slot {
            id,
            events: events.into(),
            callback: Rc::new(callback),
        });
        id
    }

    pub fn disconnect(&mut self, id: ListenerId) -> Result<(), ButtonError> {
        let index = self
            .slots
            .iter()
            .position(|slot| slot.id == id)
            .ok_or(ButtonError::UnknownListener(id))?;
        self.slots.remove(index);
        Ok(())
    }

    pub fn is_connected(&self, id: ListenerId) -> bool {
        self.slots.iter().any(|slot| slot.id == id)
    }

    /// Number of listeners that would receive `event`.
    pub fn listener_count(&self, event: ButtonEvent) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.events.has(event))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub(crate) fn emit(&self, event: ButtonEvent) {
        for slot in self.slots.iter().filter(|slot| slot.events.has(event)) {
            (slot.callback)(event);
        }
    }
}

impl std::fmt::Debug for ButtonSignals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ButtonSignals")
            .field("listeners", &self.slots.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
