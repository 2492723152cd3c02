use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use log::info;

use crate::grid::{HeatmapGrids, PriceGrid};
use crate::models::bs::OptionSide;

/// Display line for a single computed price, two decimals.
pub fn format_price(side: OptionSide, price: f64) -> String {
    format!("The {} option price is: {:.2}", side, price)
}

/// Write one grid as CSV: header `volatility,<spot_0>,<spot_1>,...`, then one
/// row per volatility with its prices.
pub fn write_grid_csv<W: Write>(
    grid: &PriceGrid,
    spots: &[f64],
    vols: &[f64],
    writer: W,
) -> Result<()> {
    ensure!(
        grid.shape() == (vols.len(), spots.len()),
        "grid shape {:?} does not match axes ({} vols, {} spots)",
        grid.shape(),
        vols.len(),
        spots.len()
    );

    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = Vec::with_capacity(spots.len() + 1);
    header.push("volatility".to_string());
    header.extend(spots.iter().map(|s| s.to_string()));
    wtr.write_record(&header)?;

    for (vol, row) in vols.iter().zip(grid.rows()) {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(vol.to_string());
        record.extend(row.iter().map(|p| p.to_string()));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write `call_prices.csv` and `put_prices.csv` into `dir`, creating it if
/// needed. Returns the two paths in (call, put) order.
pub fn write_heatmaps_csv(grids: &HeatmapGrids, dir: impl AsRef<Path>) -> Result<(PathBuf, PathBuf)> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let call_path = dir.join("call_prices.csv");
    let put_path = dir.join("put_prices.csv");

    for (grid, path) in [(&grids.call, &call_path), (&grids.put, &put_path)] {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        write_grid_csv(grid, &grids.spots, &grids.vols, file)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Wrote {} price grid to {}", grid.side(), path.display());
    }

    Ok((call_path, put_path))
}
