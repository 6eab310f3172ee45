//! Surface-local coordinates and pointer input.

/// A point in surface-local space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate, growing to the right.
    pub x: f32,
    /// Y coordinate, growing downward.
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A single-pointer input event delivered to a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Finger touched the surface.
    Down(Point),
    /// Finger moved while touching.
    Move(Point),
    /// Finger lifted.
    Up(Point),
    /// The platform took the gesture away (e.g. a system swipe).
    Cancel,
}
