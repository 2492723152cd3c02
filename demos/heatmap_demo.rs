// demos/heatmap_demo.rs
// Evaluates a heatmap session and writes the call/put surfaces as an SVG
// image plus two CSV tables.
//
// Usage:
//     cargo run --example heatmap_demo -- [config.toml] [output_dir]
//
// Without a config file the standard 10x10 preset is used. Output goes to
// ./heatmap_output unless a directory is given. Set RUST_LOG=info to see the
// library's progress messages.

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use bs_heatmap::{
    default_configs, evaluate_session, format_price, render_heatmaps_svg, write_heatmaps_csv,
    HeatmapConfig, RenderOptions,
};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => HeatmapConfig::from_file(path)?,
        None => default_configs::standard(),
    };
    let out_dir = PathBuf::from(args.get(2).map(String::as_str).unwrap_or("heatmap_output"));

    println!("Heatmap session");
    println!("===============");
    println!(
        "S={:.2} K={:.2} T={:.2}y r={:.2}% σ={:.2}%",
        config.spot,
        config.strike,
        config.maturity,
        config.rate * 100.0,
        config.volatility * 100.0
    );
    println!(
        "Spot axis [{:.2}, {:.2}], vol axis [{:.2}, {:.2}], {} points per axis",
        config.spot_min, config.spot_max, config.vol_min, config.vol_max, config.resolution
    );

    let result = evaluate_session(&config)?;
    println!("\n{}", format_price(result.parameters.side, result.selected_price()));
    println!(
        "Call {:.2} | Put {:.2}",
        result.call_price, result.put_price
    );

    // Annotated cells become unreadable past ~20 points per axis
    let options = RenderOptions {
        annotate: config.resolution <= 20,
        ..RenderOptions::default()
    };

    std::fs::create_dir_all(&out_dir)?;
    let svg_path = out_dir.join("heatmaps.svg");
    render_heatmaps_svg(&result.grids, &svg_path, &options)?;
    let (call_csv, put_csv) = write_heatmaps_csv(&result.grids, &out_dir)?;

    println!("\nWrote:");
    println!("  {}", svg_path.display());
    println!("  {}", call_csv.display());
    println!("  {}", put_csv.display());

    Ok(())
}
