use egui::{Color32, Pos2};

use crate::config::{CanvasConfig, clamp_stroke_width};
use crate::error::RasterResult;
use crate::history::History;
use crate::raster::Surface;
use crate::stroke::StrokePath;

/// The drawing widget's state: the raster, its history and the stroke in progress.
///
/// All mutation goes through this type; nothing else holds the raster.
#[derive(Debug)]
pub struct CanvasSurface {
    surface: Surface,
    history: History,
    selected_color: Color32,
    stroke_width: f32,
    /// `Some` while drawing-active
    stroke: Option<StrokePath>,
    revision: u64,
}

impl Default for CanvasSurface {
    fn default() -> Self {
        Self::new(0, 0, &CanvasConfig::default())
    }
}

impl CanvasSurface {
    pub fn new(width: u32, height: u32, config: &CanvasConfig) -> Self {
        Self {
            surface: Surface::new(width, height, config.background),
            history: History::new(config.history_depth, config.redo_policy),
            selected_color: config.initial_color,
            stroke_width: clamp_stroke_width(config.stroke_width),
            stroke: None,
            revision: 0,
        }
    }

    /// Starts a stroke at `pos` unless one is already in progress
    pub fn pointer_down(&mut self, pos: Pos2) {
        if self.stroke.is_some() {
            return;
        }
        self.history.save_state(self.surface.snapshot());
        self.stroke = Some(StrokePath::begin(pos, self.selected_color, self.stroke_width));
        log::debug!("Stroke started at {pos:?}");
    }

    /// Extends the active stroke to `pos` and paints the new segment
    pub fn pointer_move(&mut self, pos: Pos2) {
        let Some(stroke) = &mut self.stroke else {
            return;
        };
        let (from, to) = stroke.line_to(pos);
        self.surface.draw_segment(from, to, stroke.color(), stroke.thickness());
        self.revision += 1;
    }

    /// Closes the active stroke
    pub fn pointer_up(&mut self) {
        if let Some(stroke) = self.stroke.take() {
            log::debug!("Stroke finished with {} segments", stroke.segment_count());
        }
    }

    /// Saves a snapshot, then wipes the raster to the background color
    pub fn clear(&mut self) {
        self.history.save_state(self.surface.snapshot());
        self.surface.fill_background();
        self.revision += 1;
        log::info!("Canvas cleared");
    }

    /// Returns `Ok(false)` if there was nothing to undo
    pub fn undo(&mut self) -> RasterResult<bool> {
        let changed = self.history.undo(&mut self.surface)?;
        if changed {
            self.revision += 1;
        }
        Ok(changed)
    }

    /// Returns `Ok(false)` if there was nothing to redo
    pub fn redo(&mut self) -> RasterResult<bool> {
        let changed = self.history.redo(&mut self.surface)?;
        if changed {
            self.revision += 1;
        }
        Ok(changed)
    }

    /// Reallocates the raster at the new size.
    ///
    /// The new raster is blank. Any stroke in progress and all history are
    /// dropped since snapshots no longer match the dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.surface.dimensions() == (width, height) {
            return;
        }
        log::info!(
            "Canvas resized from {:?} to {:?}",
            self.surface.dimensions(),
            (width, height)
        );
        self.surface = self.surface.resize(width, height);
        self.history.clear();
        self.stroke = None;
        self.revision += 1;
    }

    pub fn set_color(&mut self, color: Color32) {
        self.selected_color = color;
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = clamp_stroke_width(width);
    }

    pub fn color(&self) -> Color32 {
        self.selected_color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn is_drawing(&self) -> bool {
        self.stroke.is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.surface.dimensions()
    }

    /// Bumped on every change to the raster
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
