#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod history;
pub mod input;
pub mod panels;
pub mod raster;
pub mod renderer;
pub mod stroke;

pub use app::CanvasApp;
pub use canvas::CanvasSurface;
pub use command::Command;
pub use config::CanvasConfig;
pub use error::RasterError;
pub use history::{History, RedoPolicy};
pub use input::{InputEvent, InputHandler, InputLocation, PointerSource};
pub use raster::{RasterSnapshot, Surface};
pub use renderer::Renderer;
pub use stroke::StrokePath;
