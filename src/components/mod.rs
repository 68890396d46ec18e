mod color_swatch;

pub use color_swatch::ColorSwatch;
