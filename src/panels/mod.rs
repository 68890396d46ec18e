mod central_panel;
mod color_selector;
mod toolbar;

pub use central_panel::{
    apply_input, canvas_on_top, central_panel, drop_covered_presses, viewport_dimensions,
};
pub use color_selector::{PALETTE, color_selector};
pub use toolbar::toolbar;
