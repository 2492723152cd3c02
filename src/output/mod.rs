//! Consumers of computed grids: SVG heatmaps and CSV tables.

pub mod export;
pub mod render;

pub use export::{format_price, write_grid_csv, write_heatmaps_csv};
pub use render::{render_heatmaps_svg, RenderOptions};
