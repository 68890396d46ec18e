use eframe::egui;

/// A clickable square filled with one palette color
pub struct ColorSwatch {
    pub color: egui::Color32,
    pub selected: bool,
}

impl ColorSwatch {
    pub fn new(color: egui::Color32, selected: bool) -> Self {
        Self { color, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let swatch_size = egui::vec2(24.0, 24.0);
        let (rect, response) = ui.allocate_exact_size(swatch_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            ui.painter().rect_filled(rect, 4.0, self.color);

            let border = if self.selected {
                egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243))
            } else if response.hovered() {
                egui::Stroke::new(1.0, egui::Color32::from_gray(160))
            } else {
                egui::Stroke::new(1.0, egui::Color32::from_gray(60))
            };
            ui.painter().rect_stroke(rect, 4.0, border);
        }

        response.on_hover_text(format!(
            "#{:02x}{:02x}{:02x}",
            self.color.r(),
            self.color.g(),
            self.color.b()
        ))
    }
}
