use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::history::RedoPolicy;

/// Bounds for the stroke width slider and `set_stroke_width`
pub const STROKE_WIDTH_RANGE: std::ops::RangeInclusive<f32> = 1.0..=50.0;

/// Canvas preferences. Persisted through eframe storage; the drawing itself is not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct CanvasConfig {
    /// Color of a blank or cleared canvas
    pub background: Color32,
    /// Stroke color selected at startup
    pub initial_color: Color32,
    pub stroke_width: f32,
    /// Maximum number of snapshots kept on each of the undo and redo stacks
    pub history_depth: usize,
    pub redo_policy: RedoPolicy,
    /// Height reserved for the toolbar above the canvas
    pub toolbar_height: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            initial_color: Color32::BLACK,
            stroke_width: 2.0,
            history_depth: 50,
            redo_policy: RedoPolicy::default(),
            toolbar_height: 100.0,
        }
    }
}

impl CanvasConfig {
    /// Clamps out-of-range values loaded from storage
    pub fn sanitized(mut self) -> Self {
        self.history_depth = self.history_depth.max(1);
        self.stroke_width = clamp_stroke_width(self.stroke_width);
        if !self.toolbar_height.is_finite() || self.toolbar_height < 0.0 {
            self.toolbar_height = Self::default().toolbar_height;
        }
        self
    }
}

pub fn clamp_stroke_width(width: f32) -> f32 {
    if width.is_nan() {
        return *STROKE_WIDTH_RANGE.start();
    }
    width.clamp(*STROKE_WIDTH_RANGE.start(), *STROKE_WIDTH_RANGE.end())
}
