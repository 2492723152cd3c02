use log::info;

use crate::error::PricingResult;
use crate::grid::HeatmapGrids;
use crate::models::bs::{BlackScholes, OptionParameters, OptionSide};
use crate::session::config::HeatmapConfig;

/// Point prices for the configured option plus both heatmap surfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionResult {
    pub parameters: OptionParameters,
    pub call_price: f64,
    pub put_price: f64,
    pub grids: HeatmapGrids,
}

impl SessionResult {
    /// Price on the side the config asked for.
    pub fn selected_price(&self) -> f64 {
        match self.parameters.side {
            OptionSide::Call => self.call_price,
            OptionSide::Put => self.put_price,
        }
    }
}

/// Price the configured option and evaluate the heatmap grids around it.
///
/// The config is validated once up front; each axis is then built exactly
/// once for the evaluator.
pub fn evaluate_session(config: &HeatmapConfig) -> PricingResult<SessionResult> {
    config.validate()?;
    let parameters = config.option_parameters()?;
    let (call_price, put_price) = BlackScholes::new().price_pair(&parameters)?;

    let grids = config.evaluator().evaluate(
        &config.spot_range()?,
        &config.vol_range()?,
        parameters.strike,
        parameters.maturity,
        parameters.rate,
    )?;

    info!(
        "Session priced: call={:.4}, put={:.4}, heatmap {}x{}",
        call_price,
        put_price,
        grids.vols.len(),
        grids.spots.len()
    );

    Ok(SessionResult {
        parameters,
        call_price,
        put_price,
        grids,
    })
}
