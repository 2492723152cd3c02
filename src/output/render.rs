// SVG heatmap rendering of the call/put price grids. Cells are drawn in
// index space so uneven label rounding never shifts a cell; axis labels map
// back to the spot/volatility values.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::grid::{HeatmapGrids, PriceGrid};

/// Layout options for [`render_heatmaps_svg`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Total image width in pixels (both panels)
    pub width: u32,
    pub height: u32,
    /// Print each cell's price inside it
    pub annotate: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 600,
            annotate: true,
        }
    }
}

/// Colour stops from low (dark blue) through yellow-green to high (red).
const STOPS: [(u8, u8, u8); 4] = [(49, 54, 149), (116, 173, 209), (254, 224, 144), (215, 48, 39)];

/// Linear colour map over `t` in [0, 1].
fn heat_colour(t: f64) -> RGBColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (STOPS.len() - 1) as f64;
    let idx = (scaled.floor() as usize).min(STOPS.len() - 2);
    let frac = scaled - idx as f64;
    let (r0, g0, b0) = STOPS[idx];
    let (r1, g1, b1) = STOPS[idx + 1];
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

/// Label for an index-space coordinate: the axis value of the cell it falls in.
fn axis_label(values: &[f64], coord: f64) -> String {
    if values.is_empty() || coord < 0.0 {
        return String::new();
    }
    let idx = (coord.floor() as usize).min(values.len() - 1);
    format!("{:.2}", values[idx])
}

fn draw_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    title: &str,
    grid: &PriceGrid,
    spots: &[f64],
    vols: &[f64],
    annotate: bool,
) -> Result<()> {
    let (n_rows, n_cols) = grid.shape();
    let (lo, hi) = (grid.min(), grid.max());
    let span = hi - lo;

    let mut chart = ChartBuilder::on(area)
        .margin(15)
        .caption(title, ("sans-serif", 24))
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..n_cols as f64, 0f64..n_rows as f64)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Spot Price")
        .y_desc("Volatility")
        .x_labels(n_cols.min(10))
        .y_labels(n_rows.min(10))
        .x_label_formatter(&|x| axis_label(spots, *x))
        .y_label_formatter(&|y| axis_label(vols, *y))
        .draw()?;

    chart.draw_series(grid.rows().enumerate().flat_map(|(i, row)| {
        row.iter().enumerate().map(move |(j, &p)| {
            let t = if span > 0.0 { (p - lo) / span } else { 0.5 };
            let (x, y) = (j as f64, i as f64);
            Rectangle::new([(x, y), (x + 1.0, y + 1.0)], heat_colour(t).filled())
        })
    }))?;

    if annotate {
        let style = ("sans-serif", 12)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        chart.draw_series(grid.rows().enumerate().flat_map(|(i, row)| {
            let style = style.clone();
            row.iter().enumerate().map(move |(j, &p)| {
                Text::new(
                    format!("{:.2}", p),
                    (j as f64 + 0.5, i as f64 + 0.5),
                    style.clone(),
                )
            })
        }))?;
    }

    Ok(())
}

/// Render the call and put heatmaps side by side into one SVG file.
///
/// Spot runs along x, volatility along y. Each panel is coloured over its
/// own price range.
pub fn render_heatmaps_svg(
    grids: &HeatmapGrids,
    path: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<()> {
    let path = path.as_ref();
    ensure!(
        options.width > 0 && options.height > 0,
        "image size must be non-zero, got {}x{}",
        options.width,
        options.height
    );

    {
        let root = SVGBackend::new(path, (options.width, options.height)).into_drawing_area();
        root.fill(&WHITE)?;
        let panels = root.split_evenly((1, 2));

        draw_panel(
            &panels[0],
            "Call Price Heatmap",
            &grids.call,
            &grids.spots,
            &grids.vols,
            options.annotate,
        )?;
        draw_panel(
            &panels[1],
            "Put Price Heatmap",
            &grids.put,
            &grids.spots,
            &grids.vols,
            options.annotate,
        )?;

        root.present()
            .with_context(|| format!("failed to write heatmap to {}", path.display()))?;
    }

    info!("Heatmaps saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_map_endpoints() {
        assert_eq!(heat_colour(0.0), RGBColor(49, 54, 149));
        assert_eq!(heat_colour(1.0), RGBColor(215, 48, 39));
        assert_eq!(heat_colour(f64::NAN), RGBColor(49, 54, 149));
        assert_eq!(heat_colour(2.0), heat_colour(1.0));
    }

    #[test]
    fn test_axis_label() {
        let spots = [80.0, 100.0, 120.0];
        assert_eq!(axis_label(&spots, 0.0), "80.00");
        assert_eq!(axis_label(&spots, 1.7), "100.00");
        assert_eq!(axis_label(&spots, 3.0), "120.00");
        assert_eq!(axis_label(&spots, -1.0), "");
    }
}
