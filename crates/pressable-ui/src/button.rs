//! Button interaction state machine.
//!
//! Pointer entry points update two change-tracked booleans, `over` and
//! `down`. [`Button::update`] turns the pair (current value plus "changed
//! since the last update") into the six edge-triggered [`ButtonEvent`]s.
//!
//! | Entry point | `over`            | `down`                          |
//! |-------------|-------------------|---------------------------------|
//! | moved       | `contains(pos)`   | unchanged                       |
//! | pressed     | `contains(pos)`   | `true` if over                  |
//! | dragged     | `contains(pos)`   | `false` if not over             |
//! | released    | `contains(pos)`   | `false` if down                 |
//!
//! # Example
//! ```
//! use pressable_ui::{Button, ButtonEvent, ButtonEvents};
//! use pressable_core::Rect;
//!
//! let mut button = Button::new(Rect::new(0.0, 0.0, 100.0, 40.0));
//! button.set_use_handlers(true);
//!
//! button.point_moved(10, 10);
//! assert_eq!(button.update(), ButtonEvents::MOVED_INSIDE);
//!
//! button.point_pressed(10, 10);
//! assert_eq!(button.update(), ButtonEvents::PRESSED_INSIDE);
//!
//! button.point_released(12, 12);
//! assert!(button.update().has(ButtonEvent::ReleasedInside));
//! ```

use pressable_core::Rect;
use pressable_core::math::IVec2;
use pressable_core::profiling::profile_function;

use crate::config::ButtonConfig;
use crate::draw::{ButtonState, ButtonStyle, Painter};
use crate::event::{ButtonEvent, ButtonEvents, ButtonHandler, ButtonSignals};
use crate::source::{PointerInput, PointerKind, PointerSource};
use crate::tracked::Tracked;

/// A rectangular hit area with hover/press tracking.
///
/// `H` receives the overridable handler calls; use `()` for none and rely on
/// [`Button::signals_mut`] or the return value of [`Button::update`].
pub struct Button<H: ButtonHandler = ()> {
    rect: Rect<f32>,
    enabled: bool,
    use_handlers: bool,
    update_async: bool,
    register_events: bool,
    over: Tracked<bool>,
    down: Tracked<bool>,
    point_pos: IVec2,
    handler: H,
    signals: ButtonSignals,
    source: Option<Box<dyn PointerSource>>,
}

impl Button<()> {
    pub fn new(rect: Rect<f32>) -> Self {
        Self::with_handler(rect, ())
    }
}

impl Default for Button<()> {
    fn default() -> Self {
        Self::new(Rect::default())
    }
}

impl<H: ButtonHandler> Button<H> {
    pub fn with_handler(rect: Rect<f32>, handler: H) -> Self {
        Self::with_config(rect, handler, ButtonConfig::default())
    }

    pub fn with_config(rect: Rect<f32>, handler: H, config: ButtonConfig) -> Self {
        let mut button = Self {
            rect,
            enabled: true,
            use_handlers: false,
            update_async: false,
            register_events: false,
            over: Tracked::new(false),
            down: Tracked::new(false),
            point_pos: IVec2::ZERO,
            handler,
            signals: ButtonSignals::new(),
            source: None,
        };
        button.apply_config(config);
        button
    }

    // ---- geometry ----

    pub fn rect(&self) -> &Rect<f32> {
        &self.rect
    }

    /// Replace the hit rect. `over`/`down` are left alone until the next
    /// pointer event.
    pub fn set_rect(&mut self, rect: Rect<f32>) {
        self.rect = rect;
    }

    pub fn set_rect_xywh(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.set_rect(Rect::new(x, y, width, height));
    }

    /// Move the top-left corner, keeping the size.
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.rect = self.rect.with_position(x as f32, y as f32);
    }

    /// Center the rect on `(x, y)`, keeping the size.
    pub fn move_center_to(&mut self, x: i32, y: i32) {
        self.rect = self.rect.centered_at(x as f32, y as f32);
    }

    // ---- configuration ----

    pub fn set_enabled(&mut self, value: bool) {
        if self.enabled != value {
            tracing::debug!(enabled = value, "button enabled changed");
        }
        self.enabled = value;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_use_handlers(&mut self, value: bool) {
        self.use_handlers = value;
    }

    pub fn uses_handlers(&self) -> bool {
        self.use_handlers
    }

    pub fn set_update_async(&mut self, value: bool) {
        self.update_async = value;
    }

    pub fn updates_async(&self) -> bool {
        self.update_async
    }

    /// Register or unregister for pointer events.
    ///
    /// Does nothing if already in the requested state. Otherwise fires the
    /// handler's register/unregister hook and (un)subscribes the attached
    /// pointer source, once per transition.
    pub fn set_register_events(&mut self, value: bool) {
        if self.register_events == value {
            return;
        }

        self.register_events = value;
        if value {
            tracing::debug!("button registered for pointer events");
            self.handler.event_register();
            if let Some(source) = self.source.as_mut() {
                source.subscribe();
            }
        } else {
            tracing::debug!("button unregistered from pointer events");
            self.handler.event_unregister();
            if let Some(source) = self.source.as_mut() {
                source.unsubscribe();
            }
        }
    }

    pub fn events_registered(&self) -> bool {
        self.register_events
    }

    /// Attach the host subscription, returning the previous one.
    ///
    /// While registered, the new source is subscribed and the old one
    /// unsubscribed before it is handed back.
    pub fn set_pointer_source<S>(&mut self, source: S) -> Option<Box<dyn PointerSource>>
    where
        S: PointerSource + 'static,
    {
        let mut source: Box<dyn PointerSource> = Box::new(source);
        let mut previous = self.source.take();
        if self.register_events {
            if let Some(old) = previous.as_mut() {
                old.unsubscribe();
            }
            source.subscribe();
        }
        self.source = Some(source);
        previous
    }

    pub fn has_pointer_source(&self) -> bool {
        self.source.is_some()
    }

    pub fn config(&self) -> ButtonConfig {
        ButtonConfig {
            enabled: self.enabled,
            use_handlers: self.use_handlers,
            update_async: self.update_async,
            register_events: self.register_events,
        }
    }

    pub fn apply_config(&mut self, config: ButtonConfig) {
        self.set_enabled(config.enabled);
        self.set_use_handlers(config.use_handlers);
        self.set_update_async(config.update_async);
        self.set_register_events(config.register_events);
    }

    // ---- listeners ----

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn signals(&self) -> &ButtonSignals {
        &self.signals
    }

    pub fn signals_mut(&mut self) -> &mut ButtonSignals {
        &mut self.signals
    }

    // ---- state ----

    /// Last pointer position seen while enabled.
    pub fn point_pos_last(&self) -> IVec2 {
        self.point_pos
    }

    pub fn over(&self) -> bool {
        self.over.get()
    }

    pub fn over_changed(&self) -> bool {
        self.over.has_changed()
    }

    pub fn down(&self) -> bool {
        self.down.get()
    }

    pub fn down_changed(&self) -> bool {
        self.down.has_changed()
    }

    pub fn state(&self) -> ButtonState {
        ButtonState::from_flags(self.over(), self.down())
    }

    pub fn moved_inside(&self) -> bool {
        self.over() && self.over_changed()
    }

    pub fn moved_outside(&self) -> bool {
        !self.over() && self.over_changed()
    }

    pub fn pressed_inside(&self) -> bool {
        self.down() && self.down_changed()
    }

    pub fn dragged_outside(&self) -> bool {
        !self.down() && self.down_changed() && !self.over() && self.over_changed()
    }

    pub fn released_inside(&self) -> bool {
        !self.down() && self.down_changed() && self.over()
    }

    pub fn released_outside(&self) -> bool {
        !self.down() && self.down_changed() && !self.over()
    }

    /// Transitions that the next [`Button::update`] would dispatch.
    pub fn pending_events(&self) -> ButtonEvents {
        let mut events = ButtonEvents::empty();
        events.set(ButtonEvents::MOVED_INSIDE, self.moved_inside());
        events.set(ButtonEvents::MOVED_OUTSIDE, self.moved_outside());
        events.set(ButtonEvents::PRESSED_INSIDE, self.pressed_inside());
        events.set(ButtonEvents::DRAGGED_OUTSIDE, self.dragged_outside());
        events.set(ButtonEvents::RELEASED_INSIDE, self.released_inside());
        events.set(ButtonEvents::RELEASED_OUTSIDE, self.released_outside());
        events
    }

    // ---- update ----

    /// Settle `over`/`down` and dispatch the transitions since the last call.
    ///
    /// The transitions are computed once, before settling and before any
    /// listener runs. With handlers disabled nothing is dispatched and the
    /// returned set is empty, but the changed flags still reset.
    pub fn update(&mut self) -> ButtonEvents {
        profile_function!();

        let pending = self.pending_events();

        self.over.settle();
        self.down.settle();

        if !self.use_handlers {
            return ButtonEvents::empty();
        }

        for event in pending.events() {
            self.emit(event);
        }
        pending
    }

    fn emit(&mut self, event: ButtonEvent) {
        tracing::trace!(%event, pos = ?self.point_pos, "button event");
        self.handler.handle(event);
        self.signals.emit(event);
    }

    // ---- pointer entry points ----

    pub fn point_moved(&mut self, x: i32, y: i32) {
        self.handle_pointer(PointerInput::moved(x, y));
    }

    pub fn point_pressed(&mut self, x: i32, y: i32) {
        self.handle_pointer(PointerInput::pressed(x, y));
    }

    pub fn point_dragged(&mut self, x: i32, y: i32) {
        self.handle_pointer(PointerInput::dragged(x, y));
    }

    pub fn point_released(&mut self, x: i32, y: i32) {
        self.handle_pointer(PointerInput::released(x, y));
    }

    /// Apply one pointer sample. Ignored while disabled.
    pub fn handle_pointer(&mut self, input: PointerInput) {
        if !self.enabled {
            return;
        }

        let IVec2 { x, y } = input.position;
        self.point_pos = input.position;

        // f64 holds every i32 and f32 exactly.
        let over = self.rect.cast::<f64>().contains(f64::from(x), f64::from(y));
        self.over.set(over);

        match input.kind {
            PointerKind::Moved => {}
            PointerKind::Pressed => {
                if over {
                    self.down.set(true);
                }
            }
            PointerKind::Dragged => {
                if !over {
                    self.down.set(false);
                }
            }
            PointerKind::Released => {
                if self.down.get() {
                    self.down.set(false);
                }
            }
        }

        tracing::trace!(
            kind = ?input.kind,
            x,
            y,
            over,
            down = self.down.get(),
            "button pointer"
        );

        if self.update_async {
            self.update();
        }
    }

    // ---- drawing ----

    /// Fill the hit rect with the colour for the current state.
    pub fn draw<P: Painter>(&self, painter: &mut P, style: &ButtonStyle) {
        painter.fill_rect(self.rect, style.color_for(self.state(), self.enabled));
    }
}

impl<H: ButtonHandler> Drop for Button<H> {
    fn drop(&mut self) {
        self.set_register_events(false);
    }
}

impl<H: ButtonHandler> std::fmt::Debug for Button<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("rect", &self.rect)
            .field("enabled", &self.enabled)
            .field("use_handlers", &self.use_handlers)
            .field("update_async", &self.update_async)
            .field("register_events", &self.register_events)
            .field("over", &self.over)
            .field("down", &self.down)
            .field("point_pos", &self.point_pos)
            .field("signals", &self.signals)
            .finish_non_exhaustive()
    }
}
