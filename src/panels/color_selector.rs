use egui::Color32;

use crate::command::Command;
use crate::components::ColorSwatch;

/// Preset colors offered next to the picker
pub const PALETTE: [Color32; 8] = [
    Color32::BLACK,
    Color32::WHITE,
    Color32::from_rgb(229, 57, 53),
    Color32::from_rgb(251, 140, 0),
    Color32::from_rgb(253, 216, 53),
    Color32::from_rgb(67, 160, 71),
    Color32::from_rgb(30, 136, 229),
    Color32::from_rgb(142, 36, 170),
];

/// Palette swatches plus a free color picker.
/// Returns a `SetColor` command when the user picks something new.
pub fn color_selector(ui: &mut egui::Ui, selected: Color32) -> Option<Command> {
    let mut picked = selected;

    ui.horizontal(|ui| {
        for color in PALETTE {
            if ColorSwatch::new(color, color == selected).show(ui).clicked() {
                picked = color;
            }
        }

        ui.separator();
        egui::color_picker::color_edit_button_srgba(
            ui,
            &mut picked,
            egui::color_picker::Alpha::Opaque,
        );
    });

    (picked != selected).then_some(Command::SetColor(picked))
}
