//! Interaction tests for the button state machine.
//!
//! These drive the pointer entry points directly and check which
//! transitions `update()` derives, how registration hooks fire, and how
//! handlers and signals are notified.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pressable_core::Rect;
use pressable_core::math::IVec2;
use pressable_ui::{
    Button, ButtonConfig, ButtonEvent, ButtonEvents, ButtonHandler, PointerInput, PointerSource,
    SharedGate,
};

/// Handler that records every call it receives.
#[derive(Default)]
struct Recorder {
    events: Vec<ButtonEvent>,
    registered: u32,
    unregistered: u32,
}

impl ButtonHandler for Recorder {
    fn moved_inside(&mut self) {
        self.events.push(ButtonEvent::MovedInside);
    }

    fn moved_outside(&mut self) {
        self.events.push(ButtonEvent::MovedOutside);
    }

    fn pressed_inside(&mut self) {
        self.events.push(ButtonEvent::PressedInside);
    }

    fn dragged_outside(&mut self) {
        self.events.push(ButtonEvent::DraggedOutside);
    }

    fn released_inside(&mut self) {
        self.events.push(ButtonEvent::ReleasedInside);
    }

    fn released_outside(&mut self) {
        self.events.push(ButtonEvent::ReleasedOutside);
    }

    fn event_register(&mut self) {
        self.registered += 1;
    }

    fn event_unregister(&mut self) {
        self.unregistered += 1;
    }
}

/// Source that counts subscribe/unsubscribe calls through shared cells.
#[derive(Clone, Default)]
struct CountingSource {
    subscribed: Rc<Cell<u32>>,
    unsubscribed: Rc<Cell<u32>>,
}

impl PointerSource for CountingSource {
    fn subscribe(&mut self) {
        self.subscribed.set(self.subscribed.get() + 1);
    }

    fn unsubscribe(&mut self) {
        self.unsubscribed.set(self.unsubscribed.get() + 1);
    }
}

const RECT: Rect<f32> = Rect::new(10.0, 10.0, 100.0, 50.0);

fn recording_button() -> Button<Recorder> {
    Button::with_config(
        RECT,
        Recorder::default(),
        ButtonConfig::default().use_handlers(true),
    )
}

fn take_events(button: &mut Button<Recorder>) -> Vec<ButtonEvent> {
    std::mem::take(&mut button.handler_mut().events)
}

#[test]
fn test_moved_sets_over_to_containment() {
    let rects = [
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Rect::new(-20.0, 5.0, 40.0, 3.0),
        Rect::default(),
    ];
    let points = [(0, 0), (5, 5), (10, 10), (11, 10), (-20, 5), (20, 8), (0, 9)];

    for rect in rects {
        let mut button = Button::new(rect);
        for (x, y) in points {
            button.point_moved(x, y);
            assert_eq!(
                button.over(),
                rect.cast::<f64>().contains(f64::from(x), f64::from(y)),
                "rect {:?} point ({}, {})",
                rect,
                x,
                y
            );
            assert_eq!(button.point_pos_last(), IVec2::new(x, y));
        }
    }
}

#[test]
fn test_hover_in_and_out() {
    let mut button = recording_button();

    button.point_moved(20, 20);
    assert_eq!(button.update(), ButtonEvents::MOVED_INSIDE);

    button.point_moved(30, 30);
    assert_eq!(button.update(), ButtonEvents::empty());

    button.point_moved(0, 0);
    assert_eq!(button.update(), ButtonEvents::MOVED_OUTSIDE);

    assert_eq!(
        take_events(&mut button),
        vec![ButtonEvent::MovedInside, ButtonEvent::MovedOutside]
    );
}

#[test]
fn test_press_drag_out_fires_dragged_and_released_outside() {
    let mut button = recording_button();

    button.point_pressed(20, 20);
    assert!(button.down());
    button.update();
    assert_eq!(
        take_events(&mut button),
        vec![ButtonEvent::MovedInside, ButtonEvent::PressedInside]
    );

    button.point_dragged(200, 200);
    assert!(!button.down());
    assert!(!button.over());

    let fired = button.update();
    assert!(fired.has(ButtonEvent::DraggedOutside));
    assert!(fired.has(ButtonEvent::ReleasedOutside));
    assert_eq!(
        take_events(&mut button),
        vec![
            ButtonEvent::MovedOutside,
            ButtonEvent::DraggedOutside,
            ButtonEvent::ReleasedOutside
        ]
    );
}

#[test]
fn test_press_and_drag_out_within_one_update_is_not_an_edge() {
    let mut button = recording_button();
    button.point_moved(20, 20);
    button.update();
    take_events(&mut button);

    button.point_pressed(20, 20);
    button.point_dragged(200, 200);
    assert!(!button.down_changed());

    assert_eq!(button.update(), ButtonEvents::MOVED_OUTSIDE);
    assert_eq!(take_events(&mut button), vec![ButtonEvent::MovedOutside]);
}

#[test]
fn test_release_inside() {
    let mut button = recording_button();
    button.point_moved(20, 20);
    button.point_pressed(20, 20);
    button.update();
    take_events(&mut button);

    button.point_released(25, 25);
    assert!(!button.down());

    let fired = button.update();
    assert_eq!(fired, ButtonEvents::RELEASED_INSIDE);
    assert!(!fired.has(ButtonEvent::ReleasedOutside));
    assert_eq!(take_events(&mut button), vec![ButtonEvent::ReleasedInside]);
}

#[test]
fn test_release_outside_after_drag_inside() {
    let mut button = recording_button();
    button.point_pressed(20, 20);
    button.point_dragged(40, 40);
    button.update();
    take_events(&mut button);

    // Released off the rect without an intermediate drag sample.
    button.point_released(500, 500);
    assert_eq!(
        button.update(),
        ButtonEvents::MOVED_OUTSIDE | ButtonEvents::DRAGGED_OUTSIDE | ButtonEvents::RELEASED_OUTSIDE
    );
}

#[test]
fn test_press_outside_then_release_inside_is_not_a_click() {
    let mut button = recording_button();
    button.point_pressed(0, 0);
    button.point_dragged(20, 20);
    button.point_released(20, 20);

    assert!(!button.down());
    assert_eq!(button.update(), ButtonEvents::MOVED_INSIDE);
}

#[test]
fn test_disabled_ignores_pointer() {
    let mut button = recording_button();
    button.point_moved(20, 20);
    button.update();

    button.set_enabled(false);
    button.point_pressed(30, 30);
    button.point_dragged(500, 500);
    button.point_released(500, 500);
    button.point_moved(0, 0);

    assert!(button.over());
    assert!(!button.down());
    assert!(!button.over_changed());
    assert_eq!(button.point_pos_last(), IVec2::new(20, 20));

    button.set_enabled(true);
    button.point_moved(0, 0);
    assert!(!button.over());
}

#[test]
fn test_register_is_idempotent() {
    let source = CountingSource::default();
    let mut button = Button::with_handler(RECT, Recorder::default());
    button.set_pointer_source(source.clone());

    button.set_register_events(true);
    button.set_register_events(true);
    assert!(button.events_registered());
    assert_eq!(button.handler().registered, 1);
    assert_eq!(source.subscribed.get(), 1);

    button.set_register_events(false);
    button.set_register_events(false);
    assert_eq!(button.handler().unregistered, 1);
    assert_eq!(source.unsubscribed.get(), 1);
}

#[test]
fn test_drop_unregisters_once() {
    let gate = SharedGate::new();
    let source = CountingSource::default();
    {
        let mut button = Button::new(RECT);
        button.set_pointer_source(source.clone());
        button.set_register_events(true);
        assert_eq!(source.subscribed.get(), 1);
    }
    assert_eq!(source.unsubscribed.get(), 1);

    {
        let mut button = Button::new(RECT);
        button.set_pointer_source(gate.clone());
        button.set_register_events(true);
        assert!(gate.is_open());
    }
    assert!(!gate.is_open());
}

#[test]
fn test_drop_unregistered_button_does_not_unsubscribe() {
    let source = CountingSource::default();
    {
        let mut button = Button::new(RECT);
        button.set_pointer_source(source.clone());
    }
    assert_eq!(source.subscribed.get(), 0);
    assert_eq!(source.unsubscribed.get(), 0);
}

#[test]
fn test_swap_source_while_registered() {
    let first = CountingSource::default();
    let second = CountingSource::default();

    let mut button = Button::new(RECT);
    button.set_pointer_source(first.clone());
    button.set_register_events(true);

    let previous = button.set_pointer_source(second.clone());
    assert!(previous.is_some());
    assert_eq!(first.unsubscribed.get(), 1);
    assert_eq!(second.subscribed.get(), 1);
}

#[test]
fn test_register_from_config_fires_hook() {
    let button = Button::with_config(
        RECT,
        Recorder::default(),
        ButtonConfig::default().register_events(true),
    );
    assert!(button.events_registered());
    assert_eq!(button.handler().registered, 1);
}

#[test]
fn test_async_dispatches_inside_pointer_call() {
    let mut button = Button::with_config(RECT, Recorder::default(), ButtonConfig::immediate());

    button.point_moved(20, 20);
    assert_eq!(button.handler().events, vec![ButtonEvent::MovedInside]);
    assert!(!button.over_changed());

    button.point_pressed(20, 20);
    assert_eq!(
        button.handler().events,
        vec![ButtonEvent::MovedInside, ButtonEvent::PressedInside]
    );
}

#[test]
fn test_deferred_without_update_fires_nothing() {
    let mut button = recording_button();

    button.point_moved(20, 20);
    button.point_pressed(20, 20);
    assert!(button.over());
    assert!(button.down());
    assert!(button.handler().events.is_empty());
}

#[test]
fn test_update_settles_even_without_handlers() {
    let mut button = Button::with_handler(RECT, Recorder::default());
    assert!(!button.uses_handlers());

    button.point_pressed(20, 20);
    assert!(button.over_changed());
    assert!(button.down_changed());

    assert_eq!(button.update(), ButtonEvents::empty());
    assert!(!button.over_changed());
    assert!(!button.down_changed());
    assert!(button.handler().events.is_empty());

    // The edge was consumed by the silent update.
    button.set_use_handlers(true);
    assert_eq!(button.update(), ButtonEvents::empty());
}

#[test]
fn test_handler_and_signals_share_one_dispatch() {
    let log = Rc::new(RefCell::new(Vec::new()));

    struct Logging(Rc<RefCell<Vec<String>>>);

    impl ButtonHandler for Logging {
        fn handle(&mut self, event: ButtonEvent) {
            self.0.borrow_mut().push(format!("handler:{}", event));
        }
    }

    let mut button = Button::with_config(
        RECT,
        Logging(log.clone()),
        ButtonConfig::default().use_handlers(true),
    );

    let signal_log = log.clone();
    button
        .signals_mut()
        .connect(ButtonEvents::all(), move |event| {
            signal_log.borrow_mut().push(format!("signal:{}", event));
        });

    button.handle_pointer(PointerInput::pressed(20, 20));
    button.update();

    assert_eq!(
        *log.borrow(),
        vec![
            "handler:moved_inside",
            "signal:moved_inside",
            "handler:pressed_inside",
            "signal:pressed_inside",
        ]
    );
}

#[test]
fn test_disconnected_signal_is_silent() {
    let hits = Rc::new(Cell::new(0));
    let mut button = Button::with_config(RECT, (), ButtonConfig::immediate());

    let counter = hits.clone();
    let id = button
        .signals_mut()
        .connect(ButtonEvent::MovedInside, move |_| counter.set(counter.get() + 1));

    button.point_moved(20, 20);
    assert_eq!(hits.get(), 1);

    button.signals_mut().disconnect(id).unwrap();
    button.point_moved(0, 0);
    button.point_moved(20, 20);
    assert_eq!(hits.get(), 1);
}

#[test]
fn test_config_roundtrip() {
    let config = ButtonConfig::new()
        .enabled(false)
        .use_handlers(true)
        .update_async(true);
    let button = Button::with_config(RECT, (), config);
    assert_eq!(button.config(), config);
}
