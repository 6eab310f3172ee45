//! Replaying strokes onto the rasters.

use super::DrawingSurface;
use crate::background::BackgroundImage;
use crate::error::{CanvasError, CanvasResult};
use crate::raster::Raster;
use crate::stroke::Stroke;
use tiny_skia::{Color, Pixmap, Transform};

impl DrawingSurface {
    /// Rebuild the composite from the background and the committed strokes.
    /// No-op until the surface has a size.
    pub(crate) fn regenerate(&mut self) {
        let Some(composite) = self.composite.as_mut() else {
            return;
        };
        paint_background(composite, self.background_color, self.background.as_ref());
        for stroke in self.history.snapshot() {
            paint_stroke(composite, stroke);
        }
        log::trace!(
            target: "surface",
            "regenerated composite from {} strokes",
            self.history.committed_len()
        );
        self.redraw_requested = true;
    }

    /// Draw the frame to display: the composite with the in-progress stroke
    /// on top. Clears the redraw request.
    pub fn render_frame(&mut self) -> CanvasResult<&Pixmap> {
        self.ensure_ready()?;
        self.redraw_requested = false;

        let (Some(composite), Some(frame)) = (&self.composite, &mut self.frame) else {
            return Err(CanvasError::SurfaceNotReady);
        };
        frame.data_mut().copy_from_slice(composite.data());
        if let Some(stroke) = &self.in_progress {
            paint_stroke(frame, stroke);
        }
        Ok(&*frame)
    }

    /// Snapshot of the background and every committed stroke.
    ///
    /// The in-progress stroke is never included. The returned raster is
    /// independent of the surface and can be handed to an
    /// [`ExportWorker`](crate::ExportWorker).
    pub fn export_composite(&self) -> CanvasResult<Raster> {
        let composite = self.composite.as_ref().ok_or(CanvasError::SurfaceNotReady)?;
        log::debug!(
            target: "export",
            "snapshot {}x{} with {} strokes",
            composite.width(),
            composite.height(),
            self.history.committed_len()
        );
        Ok(Raster::from_pixmap(composite.clone()))
    }
}

/// Fill with the background color, then stretch the image (if any) over the
/// whole raster.
fn paint_background(pixmap: &mut Pixmap, color: Color, image: Option<&BackgroundImage>) {
    pixmap.fill(color);

    let Some(image) = image else {
        return;
    };
    let scale_x = pixmap.width() as f32 / image.width() as f32;
    let scale_y = pixmap.height() as f32 / image.height() as f32;
    let paint = tiny_skia::PixmapPaint {
        quality: tiny_skia::FilterQuality::Bilinear,
        ..Default::default()
    };
    pixmap.draw_pixmap(
        0,
        0,
        image.pixmap().as_ref(),
        &paint,
        Transform::from_scale(scale_x, scale_y),
        None,
    );
}

fn paint_stroke(pixmap: &mut Pixmap, stroke: &Stroke) {
    let Some(path) = stroke.to_path() else {
        return;
    };
    let mut paint = tiny_skia::Paint::default();
    paint.set_color(stroke.color());
    paint.anti_alias = true;
    pixmap.stroke_path(
        &path,
        &paint,
        &stroke.to_skia_stroke(),
        Transform::identity(),
        None,
    );
}
