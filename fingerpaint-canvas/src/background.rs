//! Background images supplied by the picker collaborator.

use crate::error::{CanvasError, CanvasResult};
use tiny_skia::Pixmap;

/// A decoded image painted underneath all strokes.
///
/// Stored premultiplied, ready to be drawn onto the composite.
#[derive(Debug, Clone)]
pub struct BackgroundImage {
    pixmap: Pixmap,
}

impl BackgroundImage {
    /// Create a background from straight-alpha RGBA bytes (4 bytes per pixel,
    /// row-major).
    pub fn from_rgba8(data: &[u8], width: u32, height: u32) -> CanvasResult<Self> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(CanvasError::InvalidDimensions { width, height })?;

        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(CanvasError::InvalidBackground(format!(
                "expected {} bytes for {}x{} RGBA, got {}",
                expected,
                width,
                height,
                data.len()
            )));
        }

        for (dst, src) in pixmap
            .data_mut()
            .chunks_exact_mut(4)
            .zip(data.chunks_exact(4))
        {
            let (r, g, b, a) = (src[0], src[1], src[2], src[3]);

            // Convert to premultiplied alpha using integer math
            // Formula: (color * alpha + 127) / 255 for proper rounding
            let (pr, pg, pb) = if a == 255 {
                (r, g, b)
            } else if a == 0 {
                (0, 0, 0)
            } else {
                let a16 = a as u16;
                (
                    ((r as u16 * a16 + 127) / 255) as u8,
                    ((g as u16 * a16 + 127) / 255) as u8,
                    ((b as u16 * a16 + 127) / 255) as u8,
                )
            };
            dst.copy_from_slice(&[pr, pg, pb, a]);
        }

        Ok(Self { pixmap })
    }

    /// Wrap an already premultiplied pixmap.
    pub fn from_pixmap(pixmap: Pixmap) -> Self {
        Self { pixmap }
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub(crate) fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}
