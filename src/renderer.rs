use egui::{Color32, ColorImage, Painter, Rect, TextureHandle, TextureOptions};

use crate::canvas::CanvasSurface;
use crate::raster::Surface;

/// Converts the raster into an egui image
pub fn to_color_image(surface: &Surface) -> ColorImage {
    let (width, height) = surface.dimensions();
    ColorImage::from_rgba_unmultiplied([width as usize, height as usize], surface.image().as_raw())
}

/// Keeps a GPU texture in sync with the canvas raster and paints it
#[derive(Default)]
pub struct Renderer {
    texture: Option<TextureHandle>,
    /// Canvas revision the texture was last uploaded from
    uploaded_revision: Option<u64>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .field("uploaded_revision", &self.uploaded_revision)
            .finish()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the canvas changed since the last upload
    pub fn needs_upload(&self, canvas: &CanvasSurface) -> bool {
        self.uploaded_revision != Some(canvas.revision())
    }

    /// Renders the canvas raster into `rect`, one texel per point
    ///
    /// Args:
    ///     ctx (egui::Context): The egui context owning the texture
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): The rectangle the canvas occupies
    pub fn render(&mut self, ctx: &egui::Context, painter: &Painter, rect: Rect, canvas: &CanvasSurface) {
        if canvas.surface().is_empty() {
            return;
        }

        if self.needs_upload(canvas) {
            let image = to_color_image(canvas.surface());
            match &mut self.texture {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => {
                    self.texture = Some(ctx.load_texture("canvas_raster", image, TextureOptions::NEAREST));
                }
            }
            self.uploaded_revision = Some(canvas.revision());
        }

        if let Some(texture) = &self.texture {
            let (width, height) = canvas.dimensions();
            let image_rect = Rect::from_min_size(rect.min, egui::vec2(width as f32, height as f32));
            let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            painter.image(texture.id(), image_rect, uv, Color32::WHITE);
        }
    }
}
