use std::ops::{Add, Div, Sub};

/// Axis-aligned rectangle anchored at its top-left corner.
///
/// The default rect is zero-sized at the origin.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Lossless widening, e.g. `Rect<f32>` to `Rect<f64>` for hit tests.
    pub fn cast<U: From<T>>(self) -> Rect<U> {
        Rect {
            x: U::from(self.x),
            y: U::from(self.y),
            width: U::from(self.width),
            height: U::from(self.height),
        }
    }
}

impl<T: Copy> Rect<T> {
    /// Same size, new top-left corner.
    pub fn with_position(self, x: T, y: T) -> Self {
        Rect { x, y, ..self }
    }
}

impl<T> Rect<T>
where
    T: Copy + PartialOrd + Add<Output = T>,
{
    /// Point containment, inclusive on all four edges.
    pub fn contains(&self, x: T, y: T) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

impl<T> Rect<T>
where
    T: Copy + Sub<Output = T> + Div<Output = T> + From<u8>,
{
    /// Same size, centered on `(x, y)`.
    pub fn centered_at(self, x: T, y: T) -> Self {
        let two = T::from(2u8);
        Rect {
            x: x - self.width / two,
            y: y - self.height / two,
            ..self
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos<T> {
    pub x: T,
    pub y: T,
}

impl<T> Pos<T> {
    pub fn new(x: T, y: T) -> Self {
        Pos { x, y }
    }
}

impl<T> From<mint::Point2<T>> for Pos<T> {
    fn from(p: mint::Point2<T>) -> Self {
        Pos { x: p.x, y: p.y }
    }
}

impl<T> From<Pos<T>> for mint::Point2<T> {
    fn from(p: Pos<T>) -> Self {
        mint::Point2 { x: p.x, y: p.y }
    }
}
