//! # bs-heatmap: Black-Scholes Pricing and Sensitivity Heatmaps
//!
//! `bs-heatmap` prices European call and put options with the Black-Scholes
//! closed-form model and evaluates price surfaces over a spot × volatility
//! mesh for heatmap display.
//!
//! ## Core Features
//!
//! - **Point Pricing**: Closed-form Black-Scholes (no dividends) with strict input validation
//! - **Pluggable Normal CDF**: erfc-based Φ from `libm` by default, `statrs` as an alternative
//! - **Grid Evaluation**: Call and put surfaces indexed `[volatility][spot]`, optionally row-parallel
//! - **Outputs**: SVG heatmaps (plotters) and CSV price tables
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_heatmap::{evaluate_grid, price, OptionSide, ParameterRange};
//!
//! let call = price(100.0, 100.0, 1.0, 0.05, 0.2, OptionSide::Call)?;
//! assert!((call - 10.4506).abs() < 1e-4);
//!
//! let spots = ParameterRange::new(80.0, 120.0, 10)?;
//! let vols = ParameterRange::new(0.1, 0.5, 10)?;
//! let grids = evaluate_grid(&spots, &vols, 100.0, 1.0, 0.05)?;
//! assert_eq!(grids.call.shape(), (10, 10));
//! # Ok::<(), bs_heatmap::PricingError>(())
//! ```
//!
//! ## Input Policy
//!
//! Out-of-domain inputs (S, K, T or σ not finite and positive, non-finite r,
//! an unknown side string, malformed ranges) fail with
//! [`PricingError::InvalidParameter`] before any arithmetic. No NaN or
//! infinite sentinel is ever returned, and grid evaluation aborts on the
//! first failing cell.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod grid;
pub mod models;
pub mod output;
pub mod session;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{PricingError, PricingResult};

// Pricing function and its inputs
pub use models::bs::{price, price_by_name, BlackScholes, OptionParameters, OptionSide};
pub use models::normal::{ErfcNormalCdf, StatrsNormalCdf};
pub use models::traits::StandardNormalCdf;

// Grid evaluation
pub use grid::{evaluate_grid, GridEvaluator, HeatmapGrids, ParameterRange, PriceGrid};

// Session configuration and outputs
pub use output::{
    format_price, render_heatmaps_svg, write_grid_csv, write_heatmaps_csv, RenderOptions,
};
pub use session::{
    config::HeatmapConfig,
    pipeline::{evaluate_session, SessionResult},
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured heatmap sessions.
///
/// All presets use the same point option (S = K = 100, T = 1y, r = 5%,
/// σ = 20%) with spot in [80, 120] and volatility in [0.1, 0.5]. They differ
/// only in grid resolution and parallelism.
///
/// - [`coarse()`]: 5 points per axis
/// - [`standard()`]: 10 points per axis
/// - [`fine()`]: 50 points per axis, row-parallel
pub mod default_configs {
    use crate::session::config::HeatmapConfig;

    /// Quick 5×5 grid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bs_heatmap::default_configs;
    ///
    /// let config = default_configs::coarse();
    /// assert_eq!(config.resolution, 5);
    /// ```
    pub fn coarse() -> HeatmapConfig {
        HeatmapConfig::coarse()
    }

    /// 10×10 grid, the size shown on the interactive page.
    pub fn standard() -> HeatmapConfig {
        HeatmapConfig::standard()
    }

    /// Dense 50×50 grid evaluated on the rayon pool; suited to smooth SVG
    /// output without annotations.
    pub fn fine() -> HeatmapConfig {
        HeatmapConfig::fine()
    }
}
