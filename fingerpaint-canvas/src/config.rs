//! Surface configuration.

use crate::brush::BrushState;
use crate::palette::Palette;
use tiny_skia::Color;

/// Settings a drawing surface starts from.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceConfig {
    /// Solid fill underneath everything (and behind transparent background images).
    pub background_color: Color,
    /// Brush color before the first `set_color`.
    pub brush_color: Color,
    /// Brush width before the first `set_brush_size`.
    pub brush_width: f32,
    /// Colors that `set_color` tokens resolve against.
    pub palette: Palette,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        let brush = BrushState::default();
        Self {
            background_color: Color::WHITE,
            brush_color: brush.color(),
            brush_width: brush.width(),
            palette: Palette::default(),
        }
    }
}
