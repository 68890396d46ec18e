use egui::Color32;

use crate::canvas::CanvasSurface;

/// Actions requested by the toolbar, shortcuts or the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Undo,
    Redo,
    Clear,
    SetColor(Color32),
    SetStrokeWidth(f32),
    /// The viewport changed size
    Resize { width: u32, height: u32 },
}

impl Command {
    pub fn execute(self, canvas: &mut CanvasSurface) {
        match self {
            Command::Undo => match canvas.undo() {
                Ok(true) => log::debug!("Undo applied"),
                Ok(false) => {}
                Err(err) => log::error!("Undo failed: {err}"),
            },
            Command::Redo => match canvas.redo() {
                Ok(true) => log::debug!("Redo applied"),
                Ok(false) => {}
                Err(err) => log::error!("Redo failed: {err}"),
            },
            Command::Clear => canvas.clear(),
            Command::SetColor(color) => {
                log::debug!("Stroke color set to {color:?}");
                canvas.set_color(color);
            }
            Command::SetStrokeWidth(width) => canvas.set_stroke_width(width),
            Command::Resize { width, height } => canvas.resize(width, height),
        }
    }
}
