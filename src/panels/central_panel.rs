use crate::command::Command;
use crate::input::{InputEvent, InputHandler};
use crate::renderer::Renderer;
use crate::canvas::CanvasSurface;

/// Viewport size in whole points, as used for the raster dimensions
pub fn viewport_dimensions(rect: egui::Rect) -> (u32, u32) {
    let size = rect.size();
    (size.x.max(0.0).round() as u32, size.y.max(0.0).round() as u32)
}

/// Feeds unified pointer input to the canvas
pub fn apply_input(canvas: &mut CanvasSurface, events: &[InputEvent]) {
    for event in events {
        match event {
            InputEvent::PointerDown { location } if location.is_in_canvas => {
                canvas.pointer_down(location.position);
            }
            InputEvent::PointerDown { .. } => {}
            InputEvent::PointerMove { location } => canvas.pointer_move(location.position),
            InputEvent::PointerUp => canvas.pointer_up(),
        }
    }
}

/// True when nothing layered above the canvas covers `pos` (screen coordinates)
pub fn canvas_on_top(ctx: &egui::Context, canvas_layer: egui::LayerId, pos: egui::Pos2) -> bool {
    ctx.layer_id_at(pos).is_none_or(|layer| layer == canvas_layer)
}

/// Drops presses that land on popups or windows covering the canvas.
/// Moves and releases still pass so an active stroke can continue and end.
pub fn drop_covered_presses(
    ctx: &egui::Context,
    canvas_layer: egui::LayerId,
    canvas_rect: egui::Rect,
    events: Vec<InputEvent>,
) -> Vec<InputEvent> {
    events
        .into_iter()
        .filter(|event| match event {
            InputEvent::PointerDown { location } => {
                let screen_pos = canvas_rect.min + location.position.to_vec2();
                let on_top = canvas_on_top(ctx, canvas_layer, screen_pos);
                if !on_top {
                    log::debug!("Press at {screen_pos:?} belongs to an overlay, not starting a stroke");
                }
                on_top
            }
            _ => true,
        })
        .collect()
}

/// The full-viewport drawing area below the toolbar
pub fn central_panel(
    ctx: &egui::Context,
    canvas: &mut CanvasSurface,
    input: &mut InputHandler,
    renderer: &mut Renderer,
) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let canvas_rect = response.rect;

            let (width, height) = viewport_dimensions(canvas_rect);
            if canvas.dimensions() != (width, height) {
                Command::Resize { width, height }.execute(canvas);
            }

            input.set_canvas_rect(canvas_rect);
            let events = input.process_input(ctx);
            let events = drop_covered_presses(ctx, response.layer_id, canvas_rect, events);
            apply_input(canvas, &events);

            if canvas.is_drawing() {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }

            renderer.render(ctx, &painter, canvas_rect, canvas);
        });
}
