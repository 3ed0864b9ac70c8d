//! Change-tracked value wrapper.

/// A value that remembers whether it differs from its last settled value.
///
/// The baseline moves only when [`Tracked::settle`] is called, so any number
/// of [`Tracked::set`] calls in between collapse into a single "changed or
/// not" answer. Setting a value back to its baseline clears the change.
///
/// # Example
/// ```
/// use pressable_ui::tracked::Tracked;
///
/// let mut over = Tracked::new(false);
/// over.set(true);
/// assert!(over.has_changed());
///
/// over.settle();
/// assert!(!over.has_changed());
/// assert!(over.get());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tracked<T> {
    current: T,
    previous: T,
}

impl<T: Copy> Tracked<T> {
    /// Create a settled value.
    pub fn new(value: T) -> Self {
        Self {
            current: value,
            previous: value,
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.current
    }

    /// Get the value as of the last settle.
    pub fn previous(&self) -> T {
        self.previous
    }

    /// Set the current value without moving the baseline.
    pub fn set(&mut self, value: T) {
        self.current = value;
    }

    /// Move the baseline to the current value.
    pub fn settle(&mut self) {
        self.previous = self.current;
    }
}

impl<T: Copy + PartialEq> Tracked<T> {
    /// Whether the current value differs from the last settled value.
    pub fn has_changed(&self) -> bool {
        self.current != self.previous
    }
}

impl<T: Copy + Default> Default for Tracked<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Copy> From<T> for Tracked<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
