use crate::canvas::CanvasSurface;
use crate::command::Command;
use crate::config::STROKE_WIDTH_RANGE;

use super::color_selector;

/// Overlay toolbar above the canvas: color, width, undo/redo and clear
pub fn toolbar(ctx: &egui::Context, canvas: &CanvasSurface, height: f32) -> Vec<Command> {
    let mut commands = Vec::new();

    egui::TopBottomPanel::top("toolbar")
        .exact_height(height)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                if let Some(cmd) = color_selector(ui, canvas.color()) {
                    commands.push(cmd);
                }
                ui.separator();

                let mut width = canvas.stroke_width();
                ui.label("Width:");
                if ui.add(egui::Slider::new(&mut width, STROKE_WIDTH_RANGE)).changed() {
                    commands.push(Command::SetStrokeWidth(width));
                }
                ui.separator();

                if ui
                    .add_enabled(canvas.can_undo(), egui::Button::new("⟲ Undo"))
                    .clicked()
                {
                    commands.push(Command::Undo);
                }
                if ui
                    .add_enabled(canvas.can_redo(), egui::Button::new("⟳ Redo"))
                    .clicked()
                {
                    commands.push(Command::Redo);
                }
                if ui.button("CLEAR").clicked() {
                    log::info!("Clear requested from toolbar");
                    commands.push(Command::Clear);
                }
                ui.separator();

                let history = canvas.history();
                ui.weak(format!(
                    "history {}/{} · redo {}",
                    history.undo_len(),
                    history.max_depth(),
                    history.redo_len()
                ));
            });
        });

    commands
}
