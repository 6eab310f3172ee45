//! Gesture scripts: JSON lists of operations replayed onto a surface.

use anyhow::{bail, Context};
use fingerpaint_canvas::{BackgroundImage, BrushSize, DrawingSurface, Point, PointerEvent};
use serde::Deserialize;
use std::path::Path;

/// One scripted operation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum GestureOp {
    /// Pick a brush color by palette token.
    Color { token: String },
    /// Set the brush width in pixels.
    Size { width: f32 },
    /// Pick one of the preset brush widths.
    Preset { size: String },
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up { x: f32, y: f32 },
    Cancel,
    Undo,
    Redo,
    /// Load a background image, relative to the script's directory.
    Background { path: String },
    ClearBackground,
}

pub fn parse_script(json: &str) -> anyhow::Result<Vec<GestureOp>> {
    serde_json::from_str(json).context("Failed to parse gesture script")
}

/// Decode an image file into a background.
pub fn load_background(path: &Path) -> anyhow::Result<BackgroundImage> {
    let image = image::open(path)
        .with_context(|| format!("Failed to read background image {}", path.display()))?
        .to_rgba8();
    let background = BackgroundImage::from_rgba8(image.as_raw(), image.width(), image.height())?;
    Ok(background)
}

/// Apply one operation. `base_dir` resolves relative background paths.
pub fn apply(surface: &mut DrawingSurface, op: &GestureOp, base_dir: &Path) -> anyhow::Result<()> {
    log::trace!("{:?}", op);
    match op {
        GestureOp::Color { token } => {
            surface.set_color(token)?;
        }
        GestureOp::Size { width } => surface.set_brush_size(*width)?,
        GestureOp::Preset { size } => {
            let size = match size.parse::<BrushSize>() {
                Ok(size) => size,
                Err(err) => bail!(err),
            };
            surface.set_brush_size_preset(size);
        }
        GestureOp::Down { x, y } => surface.handle_pointer(PointerEvent::Down(Point::new(*x, *y)))?,
        GestureOp::Move { x, y } => surface.handle_pointer(PointerEvent::Move(Point::new(*x, *y)))?,
        GestureOp::Up { x, y } => surface.handle_pointer(PointerEvent::Up(Point::new(*x, *y)))?,
        GestureOp::Cancel => surface.handle_pointer(PointerEvent::Cancel)?,
        GestureOp::Undo => {
            if !surface.undo() {
                log::info!("undo: nothing to undo");
            }
        }
        GestureOp::Redo => {
            if !surface.redo() {
                log::info!("redo: nothing to redo");
            }
        }
        GestureOp::Background { path } => {
            let image = load_background(&base_dir.join(path))?;
            surface.load_background(Some(image));
        }
        GestureOp::ClearBackground => surface.load_background(None),
    }
    Ok(())
}

/// Apply every operation in order, stopping at the first failure.
pub fn replay(
    surface: &mut DrawingSurface,
    ops: &[GestureOp],
    base_dir: &Path,
) -> anyhow::Result<()> {
    for (i, op) in ops.iter().enumerate() {
        apply(surface, op, base_dir).with_context(|| format!("Operation #{} ({:?}) failed", i, op))?;
    }
    Ok(())
}
