//! Stroke-based raster canvas with undo/redo, rendered with tiny-skia.
//!
//! A [`DrawingSurface`] turns pointer gestures into freehand [`Stroke`]s,
//! keeps them in a [`StrokeHistory`] and composites them over a background
//! (solid color or a [`BackgroundImage`]). Undo and redo rebuild the
//! composite by replaying the committed strokes. [`ExportWorker`] encodes
//! exported snapshots to PNG off the drawing thread.
//!
//! # Example
//!
//! ```rust
//! use fingerpaint_canvas::{DrawingSurface, Point};
//!
//! let mut surface = DrawingSurface::builder().size(200, 100).build()?;
//! surface.set_color("red")?;
//! surface.set_brush_size(10.0)?;
//! surface.pointer_down(Point::new(10.0, 50.0))?;
//! surface.pointer_move(Point::new(100.0, 20.0))?;
//! surface.pointer_up(Point::new(190.0, 50.0))?;
//!
//! assert!(surface.undo());
//! assert!(surface.redo());
//! let png_data = surface.export_composite()?.to_png(None)?;
//! assert!(!png_data.is_empty());
//! # Ok::<(), fingerpaint_canvas::CanvasError>(())
//! ```

mod background;
mod brush;
mod config;
mod error;
mod export;
mod geometry;
mod history;
mod palette;
mod path;
mod raster;
mod stroke;
mod style;
mod surface;

// Re-export public API
pub use background::BackgroundImage;
pub use brush::{BrushState, MAX_BRUSH_WIDTH};
pub use config::SurfaceConfig;
pub use error::{CanvasError, CanvasResult};
pub use export::ExportWorker;
pub use geometry::{Point, PointerEvent};
pub use history::StrokeHistory;
pub use palette::{parse_color, NamedColor, Palette};
pub use raster::{Raster, DEFAULT_PPI};
pub use stroke::Stroke;
pub use style::{BrushSize, LineCap, LineJoin};
pub use surface::{DrawingSurface, DrawingSurfaceBuilder};

pub use tiny_skia::{Color, ColorU8, Pixmap};
