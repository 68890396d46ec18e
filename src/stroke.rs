use egui::{Color32, Pos2};

/// The path of the stroke currently being drawn.
///
/// Segments are rasterized as soon as they are added, so only the last point
/// is needed to continue the path.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePath {
    color: Color32,
    thickness: f32,
    last_point: Pos2,
    segments: usize,
}

impl StrokePath {
    /// Begin a path at the given point
    pub fn begin(start: Pos2, color: Color32, thickness: f32) -> Self {
        Self {
            color,
            thickness,
            last_point: start,
            segments: 0,
        }
    }

    /// Extends the path and returns the new segment as `(from, to)`
    pub fn line_to(&mut self, point: Pos2) -> (Pos2, Pos2) {
        let from = std::mem::replace(&mut self.last_point, point);
        self.segments += 1;
        (from, point)
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn last_point(&self) -> Pos2 {
        self.last_point
    }

    pub fn segment_count(&self) -> usize {
        self.segments
    }
}
