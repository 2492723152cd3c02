#![cfg(feature = "serde")]

use std::fs;
use std::path::PathBuf;

use bs_heatmap::{
    default_configs, evaluate_session, format_price, render_heatmaps_svg, write_heatmaps_csv,
    HeatmapConfig, OptionSide, RenderOptions,
};

/// Fresh scratch directory under the system temp dir, unique per test.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("bs_heatmap_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("failed to create scratch dir");
    dir
}

const FULL_CONFIG: &str = r#"
spot = 95.0
strike = 100.0
maturity = 0.5
rate = 0.03
volatility = 0.25
side = "put"
spot_min = 70.0
spot_max = 130.0
vol_min = 0.05
vol_max = 0.6
resolution = 7
parallel = true
"#;

#[test]
fn test_full_toml_config() {
    let config = HeatmapConfig::from_toml_str(FULL_CONFIG).expect("config should parse");
    assert_eq!(config.spot, 95.0);
    assert_eq!(config.side, OptionSide::Put);
    assert_eq!(config.resolution, 7);
    assert!(config.parallel);

    let result = evaluate_session(&config).unwrap();
    assert_eq!(result.selected_price(), result.put_price);
    assert_eq!(result.grids.shape(), (7, 7));
    assert_eq!(result.grids.spots.first(), Some(&70.0));
    assert_eq!(result.grids.spots.last(), Some(&130.0));
}

#[test]
fn test_empty_toml_is_default() {
    let config = HeatmapConfig::from_toml_str("").unwrap();
    assert_eq!(config, HeatmapConfig::default());
}

#[test]
fn test_bad_side_in_toml_rejected() {
    assert!(HeatmapConfig::from_toml_str("side = \"straddle\"").is_err());
}

#[test]
fn test_unknown_key_rejected() {
    assert!(HeatmapConfig::from_toml_str("dividend_yield = 0.02").is_err());
}

#[test]
fn test_out_of_domain_toml_rejected() {
    assert!(HeatmapConfig::from_toml_str("maturity = 0.0").is_err());
    assert!(HeatmapConfig::from_toml_str("vol_min = 0.0").is_err());
    assert!(HeatmapConfig::from_toml_str("resolution = 0").is_err());
}

#[test]
fn test_toml_round_trip() {
    let config = HeatmapConfig {
        side: OptionSide::Put,
        resolution: 12,
        ..default_configs::standard()
    };
    let text = config.to_toml_string().unwrap();
    assert_eq!(HeatmapConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_config_file_loading() {
    let dir = scratch_dir("config");
    let path = dir.join("heatmap.toml");
    fs::write(&path, FULL_CONFIG).unwrap();

    let config = HeatmapConfig::from_file(&path).unwrap();
    assert_eq!(config.strike, 100.0);

    assert!(HeatmapConfig::from_file(dir.join("missing.toml")).is_err());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_price_display_line() {
    let result = evaluate_session(&default_configs::coarse()).unwrap();
    assert_eq!(
        format_price(result.parameters.side, result.selected_price()),
        "The call option price is: 10.45"
    );
}

#[test]
fn test_csv_export_writes_both_sides() {
    let dir = scratch_dir("csv");
    let result = evaluate_session(&default_configs::coarse()).unwrap();
    let (call_path, put_path) = write_heatmaps_csv(&result.grids, &dir).unwrap();

    let call_csv = fs::read_to_string(&call_path).unwrap();
    let put_csv = fs::read_to_string(&put_path).unwrap();
    assert_eq!(call_csv.lines().count(), 6);
    assert_eq!(put_csv.lines().count(), 6);
    assert!(call_csv.starts_with("volatility,80,90,100,110,120"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_svg_render() {
    let dir = scratch_dir("svg");
    let path = dir.join("heatmap.svg");
    let result = evaluate_session(&default_configs::coarse()).unwrap();

    render_heatmaps_svg(&result.grids, &path, &RenderOptions::default()).unwrap();

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Call Price Heatmap"));
    assert!(svg.contains("Put Price Heatmap"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_zero_size_render_rejected() {
    let dir = scratch_dir("svg_zero");
    let result = evaluate_session(&default_configs::coarse()).unwrap();
    let options = RenderOptions {
        width: 0,
        ..RenderOptions::default()
    };
    assert!(render_heatmaps_svg(&result.grids, dir.join("x.svg"), &options).is_err());
    let _ = fs::remove_dir_all(&dir);
}
