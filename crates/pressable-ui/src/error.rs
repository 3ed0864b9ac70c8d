use crate::event::ListenerId;

/// Errors raised by the button's signal registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonError {
    /// The listener was never connected or has already been disconnected.
    UnknownListener(ListenerId),
}

impl std::fmt::Display for ButtonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ButtonError::UnknownListener(id) => write!(f, "Listener {:?} is not connected", id),
        }
    }
}

impl std::error::Error for ButtonError {}
