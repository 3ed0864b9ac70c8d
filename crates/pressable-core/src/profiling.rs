//! Profiling scopes based on the `puffin` crate.
//!
//! With the `profiling` feature disabled the macros expand to nothing and
//! the functions are no-ops, so call sites never need their own `cfg`.

#[cfg(feature = "profiling")]
pub use puffin::{profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __pressable_profile_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "profiling"))]
pub use crate::__pressable_profile_noop as profile_function;
#[cfg(not(feature = "profiling"))]
pub use crate::__pressable_profile_noop as profile_scope;

/// Turn scope collection on or off.
pub fn set_enabled(enabled: bool) {
    #[cfg(feature = "profiling")]
    {
        puffin::set_scopes_on(enabled);
        tracing::debug!(enabled, "puffin scopes toggled");
    }
    #[cfg(not(feature = "profiling"))]
    let _ = enabled;
}

/// Mark the start of a new frame. Call once per frame from the host loop.
#[inline]
pub fn new_frame() {
    #[cfg(feature = "profiling")]
    puffin::GlobalProfiler::lock().new_frame();
}
