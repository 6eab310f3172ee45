//! Interactive drawing surface.

mod compositing;
mod input;

use crate::background::BackgroundImage;
use crate::brush::BrushState;
use crate::config::SurfaceConfig;
use crate::error::{CanvasError, CanvasResult};
use crate::history::StrokeHistory;
use crate::palette::Palette;
use crate::stroke::Stroke;
use crate::style::BrushSize;
use tiny_skia::{Color, Pixmap};

/// Maximum raster dimension (same as Chrome's canvas limit).
const MAX_DIMENSION: u32 = 32767;

/// Builder for DrawingSurface.
#[derive(Debug, Clone, Default)]
pub struct DrawingSurfaceBuilder {
    config: SurfaceConfig,
    size: Option<(u32, u32)>,
}

impl DrawingSurfaceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every setting at once.
    pub fn with_config(mut self, config: SurfaceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.config.background_color = color;
        self
    }

    pub fn brush_color(mut self, color: Color) -> Self {
        self.config.brush_color = color;
        self
    }

    pub fn brush_width(mut self, width: f32) -> Self {
        self.config.brush_width = width;
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.config.palette = palette;
        self
    }

    /// Allocate the raster immediately instead of waiting for the first resize.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = Some((width, height));
        self
    }

    pub fn build(self) -> CanvasResult<DrawingSurface> {
        let mut surface = DrawingSurface::from_config(self.config)?;
        if let Some((width, height)) = self.size {
            surface.resize(width, height)?;
        }
        Ok(surface)
    }
}

/// A finger-paint canvas: captures strokes, keeps their undo history and
/// composites them over a background.
///
/// The surface owns two rasters once it has a size. The composite holds the
/// background plus every committed stroke and is rebuilt from scratch
/// whenever the committed strokes or the background change. The frame is the
/// composite with the in-progress stroke drawn on top and is what gets shown
/// while a finger is down.
///
/// All methods must be called from the thread that owns the surface. Use
/// [`export_composite`](Self::export_composite) to take a snapshot that can
/// be sent elsewhere.
pub struct DrawingSurface {
    pub(crate) palette: Palette,
    pub(crate) background_color: Color,
    pub(crate) background: Option<BackgroundImage>,
    pub(crate) brush: BrushState,
    pub(crate) history: StrokeHistory,
    /// Stroke under the finger, not yet committed.
    pub(crate) in_progress: Option<Stroke>,
    /// Background plus committed strokes.
    pub(crate) composite: Option<Pixmap>,
    /// Composite plus in-progress overlay.
    pub(crate) frame: Option<Pixmap>,
    pub(crate) redraw_requested: bool,
}

impl DrawingSurface {
    /// Create a surface with the default configuration and no raster yet.
    pub fn new() -> Self {
        let config = SurfaceConfig::default();
        let brush = BrushState::default();
        Self::with_brush(config, brush)
    }

    /// Create a surface without a raster from `config`, validating the
    /// initial brush width.
    pub fn from_config(config: SurfaceConfig) -> CanvasResult<Self> {
        let brush = BrushState::new(config.brush_color, config.brush_width)?;
        Ok(Self::with_brush(config, brush))
    }

    fn with_brush(config: SurfaceConfig, brush: BrushState) -> Self {
        Self {
            palette: config.palette,
            background_color: config.background_color,
            background: None,
            brush,
            history: StrokeHistory::new(),
            in_progress: None,
            composite: None,
            frame: None,
            redraw_requested: false,
        }
    }

    pub fn builder() -> DrawingSurfaceBuilder {
        DrawingSurfaceBuilder::new()
    }

    /// (Re)create the rasters for a new surface size.
    ///
    /// Old raster content is discarded, not scaled; the composite is rebuilt
    /// by replaying the committed strokes.
    pub fn resize(&mut self, width: u32, height: u32) -> CanvasResult<()> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(CanvasError::InvalidDimensions { width, height });
        }
        let composite =
            Pixmap::new(width, height).ok_or(CanvasError::InvalidDimensions { width, height })?;
        let frame = composite.clone();

        log::debug!(target: "surface", "resize {}x{}", width, height);
        self.composite = Some(composite);
        self.frame = Some(frame);
        self.regenerate();
        Ok(())
    }

    /// Drop the rasters, the in-progress stroke and the stroke history.
    pub fn release(&mut self) {
        log::debug!(target: "surface", "release");
        self.composite = None;
        self.frame = None;
        self.in_progress = None;
        self.history.clear();
        self.redraw_requested = false;
    }

    /// Whether the surface has a raster to draw into.
    pub fn is_ready(&self) -> bool {
        self.composite.is_some()
    }

    /// Current raster size, if any.
    pub fn size(&self) -> Option<(u32, u32)> {
        self.composite.as_ref().map(|p| (p.width(), p.height()))
    }

    pub fn brush(&self) -> &BrushState {
        &self.brush
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn has_background_image(&self) -> bool {
        self.background.is_some()
    }

    /// Whether a gesture is in progress.
    pub fn is_drawing(&self) -> bool {
        self.in_progress.is_some()
    }

    /// The stroke currently under the finger.
    pub fn in_progress(&self) -> Option<&Stroke> {
        self.in_progress.as_ref()
    }

    /// Whether something changed since the last [`render_frame`](Self::render_frame).
    pub fn needs_redraw(&self) -> bool {
        self.redraw_requested
    }

    // --- Brush ---

    /// Set the width used by the next stroke.
    pub fn set_brush_size(&mut self, width: f32) -> CanvasResult<()> {
        self.brush.set_width(width)?;
        log::debug!(target: "surface", "brush size {}", width);
        Ok(())
    }

    pub fn set_brush_size_preset(&mut self, size: BrushSize) {
        self.brush.set_preset(size);
        log::debug!(target: "surface", "brush size {:?}", size);
    }

    /// Set the color used by the next stroke from a palette token.
    ///
    /// Unknown tokens fail with [`CanvasError::InvalidColor`] and leave the
    /// brush unchanged.
    pub fn set_color(&mut self, token: &str) -> CanvasResult<Color> {
        let color = self.palette.resolve(token)?;
        self.brush.set_color(color);
        log::debug!(target: "surface", "brush color {}", token);
        Ok(color)
    }

    /// Set the brush color directly, bypassing the palette.
    pub fn set_color_rgba(&mut self, color: Color) {
        self.brush.set_color(color);
        log::debug!(target: "surface", "brush color {:?}", color);
    }

    // --- History ---

    /// Undo the newest committed stroke. Returns whether anything changed.
    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo();
        if changed {
            self.regenerate();
        }
        changed
    }

    /// Redo the most recently undone stroke. Returns whether anything changed.
    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo();
        if changed {
            self.regenerate();
        }
        changed
    }

    // --- Background ---

    /// Replace the background image; `None` reverts to the solid fill.
    /// Strokes are kept.
    pub fn load_background(&mut self, image: Option<BackgroundImage>) {
        match &image {
            Some(image) => {
                log::debug!(target: "surface", "background image {}x{}", image.width(), image.height())
            }
            None => log::debug!(target: "surface", "background cleared"),
        }
        self.background = image;
        self.regenerate();
    }

    /// Replace the solid fill below the background image. Strokes are kept.
    pub fn set_background_color(&mut self, color: Color) {
        log::debug!(target: "surface", "background color {:?}", color);
        self.background_color = color;
        self.regenerate();
    }

    fn ensure_ready(&self) -> CanvasResult<()> {
        if self.composite.is_none() {
            return Err(CanvasError::SurfaceNotReady);
        }
        Ok(())
    }
}

impl Default for DrawingSurface {
    fn default() -> Self {
        Self::new()
    }
}
