use log::warn;

use crate::error::{require_positive, PricingResult};
use crate::grid::{GridEvaluator, ParameterRange};
use crate::models::bs::{OptionParameters, OptionSide};

/// Resolutions above this still work but produce very large SVGs.
const RESOLUTION_WARN_THRESHOLD: usize = 1000;

/// Everything needed for one pricing session: the point option plus the
/// heatmap axes.
///
/// Missing TOML keys fall back to the same defaults as [`Default`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct HeatmapConfig {
    /// Spot price of the underlying
    #[cfg_attr(feature = "serde", serde(default = "default_spot"))]
    pub spot: f64,

    #[cfg_attr(feature = "serde", serde(default = "default_strike"))]
    pub strike: f64,

    /// Time to maturity in years
    #[cfg_attr(feature = "serde", serde(default = "default_maturity"))]
    pub maturity: f64,

    /// Risk-free rate (decimal, e.g. 0.05 for 5%)
    #[cfg_attr(feature = "serde", serde(default = "default_rate"))]
    pub rate: f64,

    /// Volatility used for the point price (decimal)
    #[cfg_attr(feature = "serde", serde(default = "default_volatility"))]
    pub volatility: f64,

    /// Side shown for the point price; the heatmap always covers both sides
    #[cfg_attr(feature = "serde", serde(default = "default_side"))]
    pub side: OptionSide,

    #[cfg_attr(feature = "serde", serde(default = "default_spot_min"))]
    pub spot_min: f64,

    #[cfg_attr(feature = "serde", serde(default = "default_spot_max"))]
    pub spot_max: f64,

    #[cfg_attr(feature = "serde", serde(default = "default_vol_min"))]
    pub vol_min: f64,

    #[cfg_attr(feature = "serde", serde(default = "default_vol_max"))]
    pub vol_max: f64,

    /// Points per heatmap axis
    #[cfg_attr(feature = "serde", serde(default = "default_resolution"))]
    pub resolution: usize,

    /// Evaluate heatmap rows on the rayon pool
    #[cfg_attr(feature = "serde", serde(default))]
    pub parallel: bool,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            spot: default_spot(),
            strike: default_strike(),
            maturity: default_maturity(),
            rate: default_rate(),
            volatility: default_volatility(),
            side: default_side(),
            spot_min: default_spot_min(),
            spot_max: default_spot_max(),
            vol_min: default_vol_min(),
            vol_max: default_vol_max(),
            resolution: default_resolution(),
            parallel: false,
        }
    }
}

impl HeatmapConfig {
    /// 5×5 grid for quick looks and tests
    pub fn coarse() -> Self {
        Self {
            resolution: 5,
            ..Self::default()
        }
    }

    /// 10×10 grid, matching the interactive page
    pub fn standard() -> Self {
        Self::default()
    }

    /// 50×50 grid evaluated in parallel
    pub fn fine() -> Self {
        Self {
            resolution: 50,
            parallel: true,
            ..Self::default()
        }
    }

    /// Parse and validate a TOML document.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        use anyhow::Context;

        let config: Self = toml::from_str(s).context("failed to parse heatmap config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load, parse and validate a TOML config file.
    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        log::info!("Loaded heatmap config from {}", path.display());
        Ok(config)
    }

    #[cfg(feature = "serde")]
    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the point option and both axes. The axes are checked from their
    /// bounds alone; no range values are built.
    pub fn validate(&self) -> PricingResult<()> {
        self.option_parameters()?;
        ParameterRange::check_bounds(self.spot_min, self.spot_max, self.resolution)?;
        ParameterRange::check_bounds(self.vol_min, self.vol_max, self.resolution)?;
        require_positive("spot_min", self.spot_min)?;
        require_positive("vol_min", self.vol_min)?;
        if self.is_oversized() {
            warn!(
                "Heatmap resolution {} exceeds {} points per axis",
                self.resolution, RESOLUTION_WARN_THRESHOLD
            );
        }
        Ok(())
    }

    /// True when the resolution is large enough to warrant a warning.
    pub fn is_oversized(&self) -> bool {
        self.resolution > RESOLUTION_WARN_THRESHOLD
    }

    pub fn option_parameters(&self) -> PricingResult<OptionParameters> {
        OptionParameters::new(
            self.spot,
            self.strike,
            self.maturity,
            self.rate,
            self.volatility,
            self.side,
        )
    }

    pub fn spot_range(&self) -> PricingResult<ParameterRange> {
        ParameterRange::new(self.spot_min, self.spot_max, self.resolution)
    }

    pub fn vol_range(&self) -> PricingResult<ParameterRange> {
        ParameterRange::new(self.vol_min, self.vol_max, self.resolution)
    }

    pub fn evaluator(&self) -> GridEvaluator {
        GridEvaluator::new().parallel(self.parallel)
    }
}

fn default_spot() -> f64 {
    100.0
}

fn default_strike() -> f64 {
    100.0
}

fn default_maturity() -> f64 {
    1.0
}

fn default_rate() -> f64 {
    0.05
}

fn default_volatility() -> f64 {
    0.2
}

fn default_side() -> OptionSide {
    OptionSide::Call
}

fn default_spot_min() -> f64 {
    80.0
}

fn default_spot_max() -> f64 {
    120.0
}

fn default_vol_min() -> f64 {
    0.1
}

fn default_vol_max() -> f64 {
    0.5
}

fn default_resolution() -> usize {
    10
}
