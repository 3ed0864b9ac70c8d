/// Behaviour flags for a [`crate::Button`].
///
/// The default matches a freshly constructed button: enabled, handlers off,
/// deferred updates, not registered for pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonConfig {
    /// Pointer entry points are ignored while false.
    pub enabled: bool,
    /// `update()` dispatches transitions to the handler and signals.
    pub use_handlers: bool,
    /// Every pointer entry point calls `update()` immediately.
    pub update_async: bool,
    /// Register with the pointer source on construction.
    pub register_events: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        ButtonConfig {
            enabled: true,
            use_handlers: false,
            update_async: false,
            register_events: false,
        }
    }
}

impl ButtonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn use_handlers(mut self, use_handlers: bool) -> Self {
        self.use_handlers = use_handlers;
        self
    }

    pub fn update_async(mut self, update_async: bool) -> Self {
        self.update_async = update_async;
        self
    }

    pub fn register_events(mut self, register_events: bool) -> Self {
        self.register_events = register_events;
        self
    }

    /// Handlers on, dispatched from inside each pointer call.
    pub fn immediate() -> Self {
        Self::default().use_handlers(true).update_async(true)
    }
}
