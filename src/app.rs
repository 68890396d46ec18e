use crate::canvas::CanvasSurface;
use crate::config::CanvasConfig;
use crate::input::{self, InputHandler};
use crate::panels;
use crate::renderer::Renderer;

/// Only `config` is persisted on shutdown; the drawing never is.
#[derive(Debug, Default)]
pub struct CanvasApp {
    config: CanvasConfig,
    canvas: CanvasSurface,
    input: InputHandler,
    renderer: Renderer,
}

impl CanvasApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config: CanvasConfig = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self::with_config(config)
    }

    pub fn with_config(config: CanvasConfig) -> Self {
        let config = config.sanitized();
        log::info!(
            "Starting canvas with history depth {} and redo policy {:?}",
            config.history_depth,
            config.redo_policy
        );
        Self {
            canvas: CanvasSurface::new(0, 0, &config),
            config,
            input: InputHandler::default(),
            renderer: Renderer::new(),
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn canvas(&self) -> &CanvasSurface {
        &self.canvas
    }
}

impl eframe::App for CanvasApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let mut config = self.config.clone();
        config.initial_color = self.canvas.color();
        config.stroke_width = self.canvas.stroke_width();
        eframe::set_value(storage, eframe::APP_KEY, &config);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut commands = panels::toolbar(ctx, &self.canvas, self.config.toolbar_height);
        commands.extend(input::shortcut_commands(ctx));
        for command in commands {
            command.execute(&mut self.canvas);
        }

        panels::central_panel(ctx, &mut self.canvas, &mut self.input, &mut self.renderer);
    }
}
