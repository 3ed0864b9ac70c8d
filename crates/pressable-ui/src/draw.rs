//! Draw call for a button's hit area.

use pressable_core::{Color, Rect};

/// Visual state derived from `over` and `down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonState {
    Idle,
    Hovered,
    Pressed,
}

impl ButtonState {
    /// `down` wins over `over`.
    pub fn from_flags(over: bool, down: bool) -> Self {
        if down {
            ButtonState::Pressed
        } else if over {
            ButtonState::Hovered
        } else {
            ButtonState::Idle
        }
    }
}

/// Fill colours per state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub idle_color: Color,
    pub hover_color: Color,
    pub active_color: Color,
    pub disabled_color: Color,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            idle_color: Color::from_rgb_u8(60, 60, 80),
            hover_color: Color::from_rgb_u8(80, 80, 100),
            active_color: Color::from_rgb_u8(40, 40, 60),
            disabled_color: Color::from_rgb_u8(60, 60, 80).with_alpha(0.4),
        }
    }
}

impl ButtonStyle {
    pub fn idle_color(mut self, color: Color) -> Self {
        self.idle_color = color;
        self
    }

    pub fn hover_color(mut self, color: Color) -> Self {
        self.hover_color = color;
        self
    }

    pub fn active_color(mut self, color: Color) -> Self {
        self.active_color = color;
        self
    }

    pub fn disabled_color(mut self, color: Color) -> Self {
        self.disabled_color = color;
        self
    }

    pub fn color_for(&self, state: ButtonState, enabled: bool) -> Color {
        if !enabled {
            return self.disabled_color;
        }
        match state {
            ButtonState::Idle => self.idle_color,
            ButtonState::Hovered => self.hover_color,
            ButtonState::Pressed => self.active_color,
        }
    }
}

/// Minimal rendering surface a button draws into.
pub trait Painter {
    fn fill_rect(&mut self, rect: Rect<f32>, color: Color);
}

impl<P: Painter + ?Sized> Painter for &mut P {
    fn fill_rect(&mut self, rect: Rect<f32>, color: Color) {
        (**self).fill_rect(rect, color)
    }
}

/// Painter that records every fill. Useful for headless hosts and tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingPainter {
    pub fills: Vec<(Rect<f32>, Color)>,
}

impl Painter for RecordingPainter {
    fn fill_rect(&mut self, rect: Rect<f32>, color: Color) {
        self.fills.push((rect, color));
    }
}
