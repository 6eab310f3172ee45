//! Immutable raster snapshots and PNG output.

use crate::error::CanvasResult;
use tiny_skia::{ColorU8, Pixmap};

/// Default pixel density written into PNG metadata.
pub const DEFAULT_PPI: f32 = 72.0;

/// A finished composite, detached from the surface that produced it.
///
/// Safe to move to another thread; nothing on the surface can change it.
#[derive(Debug, Clone)]
pub struct Raster {
    pixmap: Pixmap,
}

impl Raster {
    pub(crate) fn from_pixmap(pixmap: Pixmap) -> Self {
        Self { pixmap }
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight-alpha color of the pixel at (x, y), or None outside bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<ColorU8> {
        // Pixmap::pixel only checks the flat index
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.pixmap.pixel(x, y).map(|p| p.demultiply())
    }

    /// Premultiplied pixel buffer.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Pixel data as straight (non-premultiplied) RGBA, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        data
    }

    /// Encode as PNG.
    ///
    /// # Arguments
    /// * `ppi` - Optional pixels per inch for PNG metadata. Defaults to 72 if not specified.
    pub fn to_png(&self, ppi: Option<f32>) -> CanvasResult<Vec<u8>> {
        let ppi = ppi.unwrap_or(DEFAULT_PPI);

        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width(), self.height());
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            // Pixel density is stored as pixels per meter
            let ppm = (ppi.max(0.0) / 0.0254).round() as u32;
            encoder.set_pixel_dims(Some(png::PixelDimensions {
                xppu: ppm,
                yppu: ppm,
                unit: png::Unit::Meter,
            }));

            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.to_rgba8())?;
        }
        log::debug!(target: "export", "encoded {}x{} PNG ({} bytes)", self.width(), self.height(), buf.len());
        Ok(buf)
    }
}

impl PartialEq for Raster {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.pixmap.data() == other.pixmap.data()
    }
}
