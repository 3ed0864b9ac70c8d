//! Routing winit pointer events into a [`Button`].

use std::ops::Deref;

use pressable_core::Pos;
use pressable_core::Rect;
use pressable_core::profiling::profile_function;
use pressable_ui::{
    Button, ButtonConfig, ButtonEvents, ButtonHandler, ButtonSignals, ButtonStyle, Painter,
    PointerInput, PointerKind, SharedGate,
};

use crate::event::{Event, EventBatch, HandleStatus, MouseButton, WinitEvent};

/// Turns window events into pointer samples.
///
/// Cursor motion while the left button is held is a drag, otherwise a
/// move. Presses and releases are reported at the last cursor position.
#[derive(Debug, Default, Clone)]
pub struct PointerTracker {
    position: Pos<f64>,
    primary_down: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last cursor position in logical coordinates.
    pub fn position(&self) -> Pos<f64> {
        self.position
    }

    pub fn is_primary_down(&self) -> bool {
        self.primary_down
    }

    pub fn translate(&mut self, event: &Event) -> Option<PointerInput> {
        let kind = match event {
            Event::CursorMoved(pos) => {
                self.position = *pos;
                if self.primary_down {
                    PointerKind::Dragged
                } else {
                    PointerKind::Moved
                }
            }
            Event::MouseButtonDown(MouseButton::Left) => {
                self.primary_down = true;
                PointerKind::Pressed
            }
            Event::MouseButtonUp(MouseButton::Left) => {
                self.primary_down = false;
                PointerKind::Released
            }
            Event::Focused(false) if self.primary_down => {
                tracing::warn!("window lost focus during a press; releasing pointer");
                self.primary_down = false;
                PointerKind::Released
            }
            _ => return None,
        };

        Some(PointerInput::from_f64(kind, self.position.x, self.position.y))
    }
}

/// A [`Button`] wired to winit window events.
///
/// Pointer events reach the button only while it is registered: the button
/// holds a [`SharedGate`] as its pointer source and this adapter checks the
/// other end. Cursor and button state are tracked regardless, so
/// registering mid-gesture starts from the right place.
///
/// Read access to the button goes through `Deref`. Mutation is limited to
/// the forwarding setters below, so the gate cannot be swapped out:
///
/// ```compile_fail
/// use pressable_core::Rect;
/// use pressable_ui::SharedGate;
/// use pressable_winit::WinitButton;
///
/// let mut button = WinitButton::new(Rect::new(0.0, 0.0, 10.0, 10.0));
/// button.set_pointer_source(SharedGate::new());
/// ```
pub struct WinitButton<H: ButtonHandler = ()> {
    button: Button<H>,
    tracker: PointerTracker,
    gate: SharedGate,
}

impl WinitButton<()> {
    pub fn new(rect: Rect<f32>) -> Self {
        Self::with_config(rect, (), ButtonConfig::default())
    }
}

impl<H: ButtonHandler> WinitButton<H> {
    pub fn with_config(rect: Rect<f32>, handler: H, config: ButtonConfig) -> Self {
        let gate = SharedGate::new();
        let mut button = Button::with_config(rect, handler, config.register_events(false));
        button.set_pointer_source(gate.clone());
        button.set_register_events(config.register_events);

        Self {
            button,
            tracker: PointerTracker::new(),
            gate,
        }
    }

    pub fn button(&self) -> &Button<H> {
        &self.button
    }

    pub fn tracker(&self) -> &PointerTracker {
        &self.tracker
    }

    pub fn is_listening(&self) -> bool {
        self.gate.is_open()
    }

    pub fn set_rect(&mut self, rect: Rect<f32>) {
        self.button.set_rect(rect);
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.button.move_to(x, y);
    }

    pub fn move_center_to(&mut self, x: i32, y: i32) {
        self.button.move_center_to(x, y);
    }

    pub fn set_enabled(&mut self, value: bool) {
        self.button.set_enabled(value);
    }

    pub fn set_use_handlers(&mut self, value: bool) {
        self.button.set_use_handlers(value);
    }

    pub fn set_update_async(&mut self, value: bool) {
        self.button.set_update_async(value);
    }

    /// Opens or closes routing along with the button's registration.
    pub fn set_register_events(&mut self, value: bool) {
        self.button.set_register_events(value);
    }

    pub fn apply_config(&mut self, config: ButtonConfig) {
        self.button.apply_config(config);
    }

    pub fn handler_mut(&mut self) -> &mut H {
        self.button.handler_mut()
    }

    pub fn signals_mut(&mut self) -> &mut ButtonSignals {
        self.button.signals_mut()
    }

    /// Forward this frame's pointer events to the button.
    ///
    /// Forwarded events are marked handled but not consumed, so other
    /// widgets still see them.
    pub fn handle_events(&mut self, events: &mut EventBatch) {
        profile_function!();
        events.dispatch(|event| self.route(event));
    }

    /// Convert and forward a single winit event.
    pub fn handle_window_event(&mut self, event: &WinitEvent, scale_factor: f64) -> HandleStatus {
        match Event::from_winit(event, scale_factor) {
            Some(event) => self.route(&event),
            None => HandleStatus::ignored(),
        }
    }

    fn route(&mut self, event: &Event) -> HandleStatus {
        let Some(input) = self.tracker.translate(event) else {
            return HandleStatus::ignored();
        };
        if !self.gate.is_open() {
            return HandleStatus::ignored();
        }

        self.button.handle_pointer(input);
        HandleStatus::handled()
    }

    /// Per-frame update for deferred dispatch.
    pub fn update(&mut self) -> ButtonEvents {
        self.button.update()
    }

    pub fn draw<P: Painter>(&self, painter: &mut P, style: &ButtonStyle) {
        self.button.draw(painter, style);
    }

    pub fn into_inner(self) -> Button<H> {
        self.button
    }
}

impl<H: ButtonHandler> Deref for WinitButton<H> {
    type Target = Button<H>;

    fn deref(&self) -> &Self::Target {
        &self.button
    }
}
