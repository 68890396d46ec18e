use egui::{Color32, Pos2};
use image::{Rgba, RgbaImage};

use crate::error::{RasterError, RasterResult};

/// Converts an egui color into the pixel format of the raster
pub fn to_pixel(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}

/// Immutable capture of the full pixel buffer at a point in time
#[derive(Clone, PartialEq, Eq)]
pub struct RasterSnapshot {
    image: RgbaImage,
}

impl RasterSnapshot {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }
}

impl std::fmt::Debug for RasterSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterSnapshot")
            .field("dimensions", &self.image.dimensions())
            .finish()
    }
}

/// The owned pixel buffer the canvas draws into
#[derive(Clone)]
pub struct Surface {
    image: RgbaImage,
    background: Color32,
}

impl Surface {
    /// Allocates a surface and paints it with the background color
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, to_pixel(background)),
            background,
        }
    }

    /// Builds a surface from raw RGBA bytes, row-major
    pub fn from_rgba(
        width: u32,
        height: u32,
        data: Vec<u8>,
        background: Color32,
    ) -> RasterResult<Self> {
        let expected = width as usize * height as usize * 4;
        let found = data.len();
        let image =
            RgbaImage::from_raw(width, height, data).ok_or(RasterError::BufferSize { expected, found })?;
        Ok(Self { image, background })
    }

    /// Returns a fresh surface at the new dimensions. Nothing from the old
    /// buffer is carried over, so snapshots taken before are no longer valid.
    pub fn resize(&self, width: u32, height: u32) -> Surface {
        Surface::new(width, height, self.background)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn is_empty(&self) -> bool {
        self.image.width() == 0 || self.image.height() == 0
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let [r, g, b, a] = self.image.get_pixel(x, y).0;
        Some(Color32::from_rgba_unmultiplied(r, g, b, a))
    }

    pub fn snapshot(&self) -> RasterSnapshot {
        RasterSnapshot {
            image: self.image.clone(),
        }
    }

    /// Copies a snapshot back into the buffer. The surface is left untouched
    /// when the dimensions differ.
    pub fn restore(&mut self, snapshot: &RasterSnapshot) -> RasterResult<()> {
        if snapshot.dimensions() != self.dimensions() {
            return Err(RasterError::DimensionMismatch {
                expected: self.dimensions(),
                found: snapshot.dimensions(),
            });
        }
        self.image.copy_from_slice(snapshot.image.as_raw());
        Ok(())
    }

    /// Paints every pixel with the background color
    pub fn fill_background(&mut self) {
        let pixel = to_pixel(self.background);
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
    }

    /// Rasterizes one segment as a capsule of the given width.
    ///
    /// A pixel is covered when its center lies within `width / 2` of the
    /// segment. Coverage is binary and the color is written as-is.
    pub fn draw_segment(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32) {
        if self.is_empty() {
            return;
        }
        let radius = (width * 0.5).max(0.5);
        let pixel = to_pixel(color);

        let min_x = (from.x.min(to.x) - radius).floor().max(0.0);
        let min_y = (from.y.min(to.y) - radius).floor().max(0.0);
        let max_x = (from.x.max(to.x) + radius).ceil().min(self.width() as f32 - 1.0);
        let max_y = (from.y.max(to.y) + radius).ceil().min(self.height() as f32 - 1.0);
        if !(min_x <= max_x && min_y <= max_y) {
            return;
        }

        for y in min_y as u32..=max_y as u32 {
            for x in min_x as u32..=max_x as u32 {
                let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                if distance_to_segment(center, from, to) <= radius {
                    self.image.put_pixel(x, y, pixel);
                }
            }
        }
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("dimensions", &self.image.dimensions())
            .field("background", &self.background)
            .finish()
    }
}

fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
