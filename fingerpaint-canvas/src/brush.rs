//! Brush configuration read when a stroke begins.

use crate::error::{CanvasError, CanvasResult};
use crate::style::BrushSize;
use tiny_skia::Color;

/// Widest brush accepted.
pub const MAX_BRUSH_WIDTH: f32 = 4096.0;

/// Current brush color and width.
///
/// Changing the brush never touches strokes that already exist; the values
/// are copied into each new stroke at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushState {
    color: Color,
    width: f32,
}

impl BrushState {
    pub fn new(color: Color, width: f32) -> CanvasResult<Self> {
        validate_width(width)?;
        Ok(Self { color, width })
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Set the brush width. Values outside `(0, MAX_BRUSH_WIDTH]` are
    /// rejected and the previous width is kept.
    pub fn set_width(&mut self, width: f32) -> CanvasResult<()> {
        validate_width(width)?;
        self.width = width;
        Ok(())
    }

    pub fn set_preset(&mut self, size: BrushSize) {
        self.width = size.width();
    }
}

impl Default for BrushState {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: BrushSize::default().width(),
        }
    }
}

pub(crate) fn validate_width(width: f32) -> CanvasResult<()> {
    if width.is_finite() && width > 0.0 && width <= MAX_BRUSH_WIDTH {
        Ok(())
    } else {
        Err(CanvasError::InvalidBrushSize(width))
    }
}
