use pressable_core::Pos;
pub use winit::event::{ElementState, MouseButton, WindowEvent as WinitEvent};

/// Window events in the order they arrived during one frame.
#[derive(Debug, Default, Clone)]
pub struct EventBatch {
    events: Vec<Event>,
}

impl EventBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Convert and append a winit event. Returns `false` if it was ignored.
    pub fn push_winit(&mut self, event: &WinitEvent, scale_factor: f64) -> bool {
        match Event::from_winit(event, scale_factor) {
            Some(event) => {
                self.events.push(event);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Run `handler` over every event, dropping the ones it consumes.
    pub fn dispatch<H>(&mut self, mut handler: H)
    where
        H: FnMut(&Event) -> HandleStatus,
    {
        self.events.retain(|event| {
            let status = handler(event);
            !status.is_consumed()
        });
    }
}

impl FromIterator<Event> for EventBatch {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

/// Window events relevant to pointer-driven widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Cursor moved (logical coordinates).
    CursorMoved(Pos<f64>),
    /// Cursor entered the window.
    CursorEntered,
    /// Cursor left the window.
    CursorLeft,
    /// Mouse button pressed.
    MouseButtonDown(MouseButton),
    /// Mouse button released.
    MouseButtonUp(MouseButton),
    /// Window focus changed.
    Focused(bool),
}

impl Event {
    /// Convert a winit window event, scaling physical cursor coordinates to
    /// logical ones. Events unrelated to pointer input map to `None`.
    pub fn from_winit(event: &WinitEvent, scale_factor: f64) -> Option<Self> {
        match event {
            WinitEvent::CursorMoved { position, .. } => Some(Event::CursorMoved(Pos::new(
                position.x / scale_factor,
                position.y / scale_factor,
            ))),
            WinitEvent::CursorEntered { .. } => Some(Event::CursorEntered),
            WinitEvent::CursorLeft { .. } => Some(Event::CursorLeft),
            WinitEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => Some(Event::MouseButtonDown(*button)),
                ElementState::Released => Some(Event::MouseButtonUp(*button)),
            },
            WinitEvent::Focused(focused) => Some(Event::Focused(*focused)),
            other => {
                tracing::trace!("ignored window event: {:?}", other);
                None
            }
        }
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HandleStatus: u8 {
        const HANDLED = 0b00000001;
        const CONSUMED = 0b00000010;
    }
}

impl HandleStatus {
    pub const fn is_consumed(&self) -> bool {
        self.contains(Self::CONSUMED)
    }

    pub const fn is_handled(&self) -> bool {
        self.contains(Self::HANDLED)
    }

    pub const fn consumed() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits() | Self::CONSUMED.bits())
    }

    pub const fn handled() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits())
    }

    pub const fn ignored() -> Self {
        Self::empty()
    }
}
