use log::debug;
use rayon::prelude::*;

use crate::error::{require_finite, require_positive, PricingResult};
use crate::grid::range::ParameterRange;
use crate::grid::types::{HeatmapGrids, PriceGrid};
use crate::models::bs::{BlackScholes, OptionParameters, OptionSide};
use crate::models::normal::ErfcNormalCdf;
use crate::models::traits::StandardNormalCdf;

type RowPrices = (Vec<f64>, Vec<f64>);

/// Evaluates call and put prices over every (volatility, spot) pair.
///
/// Cells are independent, so rows can be spread over the rayon pool; the
/// result is bit-identical to the sequential path. The first cell failure
/// aborts the whole grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridEvaluator<C = ErfcNormalCdf> {
    pricer: BlackScholes<C>,
    parallel: bool,
}

impl GridEvaluator<ErfcNormalCdf> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: StandardNormalCdf + Sync> GridEvaluator<C> {
    pub fn with_pricer(pricer: BlackScholes<C>) -> Self {
        Self {
            pricer,
            parallel: false,
        }
    }

    /// Enable or disable row-parallel evaluation.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Compute both price surfaces.
    ///
    /// Row `i` of each grid corresponds to `vols[i]`, column `j` to
    /// `spots[j]`, and `call[(i, j)]` equals
    /// `price(spots[j], strike, maturity, rate, vols[i], Call)` exactly.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if strike/maturity are not positive, the rate is not
    /// finite, or either range reaches zero or below. Nothing is computed in
    /// that case.
    pub fn evaluate(
        &self,
        spots: &ParameterRange,
        vols: &ParameterRange,
        strike: f64,
        maturity: f64,
        rate: f64,
    ) -> PricingResult<HeatmapGrids> {
        require_positive("strike", strike)?;
        require_positive("maturity", maturity)?;
        require_finite("rate", rate)?;
        require_positive("spot range minimum", spots.min())?;
        require_positive("volatility range minimum", vols.min())?;

        debug!(
            "Evaluating {}x{} heatmap grid (K={}, T={}, r={}, parallel={})",
            vols.len(),
            spots.len(),
            strike,
            maturity,
            rate,
            self.parallel
        );

        let template = OptionParameters {
            spot: spots.min(),
            strike,
            maturity,
            rate,
            volatility: vols.min(),
            side: OptionSide::Call,
        };

        let eval_row = |&vol: &f64| -> PricingResult<RowPrices> {
            let mut calls = Vec::with_capacity(spots.len());
            let mut puts = Vec::with_capacity(spots.len());
            for &spot in spots {
                let params = OptionParameters {
                    spot,
                    volatility: vol,
                    ..template
                };
                let (call, put) = self.pricer.price_pair(&params)?;
                calls.push(call);
                puts.push(put);
            }
            Ok((calls, puts))
        };

        let rows: Vec<RowPrices> = if self.parallel {
            vols.values()
                .par_iter()
                .map(eval_row)
                .collect::<PricingResult<_>>()?
        } else {
            vols.values()
                .iter()
                .map(eval_row)
                .collect::<PricingResult<_>>()?
        };

        let (call_rows, put_rows): (Vec<_>, Vec<_>) = rows.into_iter().unzip();
        let n_cols = spots.len();

        Ok(HeatmapGrids {
            call: PriceGrid::from_rows(OptionSide::Call, call_rows, n_cols),
            put: PriceGrid::from_rows(OptionSide::Put, put_rows, n_cols),
            spots: spots.values().to_vec(),
            vols: vols.values().to_vec(),
        })
    }
}

/// Evaluate both surfaces sequentially with the default pricer.
pub fn evaluate_grid(
    spots: &ParameterRange,
    vols: &ParameterRange,
    strike: f64,
    maturity: f64,
    rate: f64,
) -> PricingResult<HeatmapGrids> {
    GridEvaluator::new().evaluate(spots, vols, strike, maturity, rate)
}
