// Black-Scholes closed-form pricing for European options on a non-dividend
// paying underlying. Greeks, implied volatility and American exercise are
// deliberately out of scope; the grid engine only needs prices.

use std::fmt;
use std::str::FromStr;

use crate::error::{require_finite, require_positive, PricingError, PricingResult};
use crate::models::normal::ErfcNormalCdf;
use crate::models::traits::StandardNormalCdf;
use crate::models::utils::{discount_factor, log_moneyness};

/// Which payoff branch of the formula to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum OptionSide {
    Call,
    Put,
}

impl OptionSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionSide::Call => "call",
            OptionSide::Put => "put",
        }
    }
}

impl fmt::Display for OptionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionSide {
    type Err = PricingError;

    /// Accepts "call" or "put", case-insensitive. Anything else is rejected;
    /// there is no default branch.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionSide::Call),
            "put" => Ok(OptionSide::Put),
            _ => Err(PricingError::invalid_parameter(format!(
                "unknown option side '{}', expected \"call\" or \"put\"",
                s
            ))),
        }
    }
}

impl TryFrom<String> for OptionSide {
    type Error = PricingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OptionSide> for String {
    fn from(side: OptionSide) -> Self {
        side.as_str().to_string()
    }
}

/// Market and contract inputs for a single Black-Scholes evaluation.
///
/// Fields are public so callers can build variations with struct update
/// syntax; every pricing entry point re-validates before computing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionParameters {
    /// Spot price of the underlying (S > 0)
    pub spot: f64,
    /// Strike price (K > 0)
    pub strike: f64,
    /// Time to maturity in years (T > 0)
    pub maturity: f64,
    /// Continuously compounded risk-free rate, may be negative
    pub rate: f64,
    /// Annualised volatility (σ > 0)
    pub volatility: f64,
    pub side: OptionSide,
}

impl OptionParameters {
    /// Build a validated parameter set.
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        side: OptionSide,
    ) -> PricingResult<Self> {
        let params = Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
            side,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check the domain of the formula: σ·√T is a divisor and ln(S/K) needs
    /// both prices positive.
    pub fn validate(&self) -> PricingResult<()> {
        require_positive("spot", self.spot)?;
        require_positive("strike", self.strike)?;
        require_positive("maturity", self.maturity)?;
        require_positive("volatility", self.volatility)?;
        require_finite("rate", self.rate)?;
        Ok(())
    }

    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    pub fn with_side(self, side: OptionSide) -> Self {
        Self { side, ..self }
    }
}

/// Black-Scholes pricer, generic over the normal CDF it uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholes<C = ErfcNormalCdf> {
    cdf: C,
}

impl BlackScholes<ErfcNormalCdf> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: StandardNormalCdf> BlackScholes<C> {
    pub fn with_cdf(cdf: C) -> Self {
        Self { cdf }
    }

    /// Price of the option on the side selected by `params.side`.
    ///
    /// Inputs that are individually valid but overflow the formula (e.g. a
    /// discount factor e^(-rT) beyond f64 range) are rejected rather than
    /// returned as NaN or infinity.
    pub fn price(&self, params: &OptionParameters) -> PricingResult<f64> {
        params.validate()?;
        let (d1, d2) = d1_d2(params);
        let value = match params.side {
            OptionSide::Call => self.call_from(params, d1, d2),
            OptionSide::Put => self.put_from(params, d1, d2),
        };
        require_finite_price(params, params.side, value)
    }

    /// Call and put prices sharing one d1/d2 computation; `params.side` is
    /// ignored. Each value is bit-identical to the corresponding `price` call.
    pub fn price_pair(&self, params: &OptionParameters) -> PricingResult<(f64, f64)> {
        params.validate()?;
        let (d1, d2) = d1_d2(params);
        Ok((
            require_finite_price(params, OptionSide::Call, self.call_from(params, d1, d2))?,
            require_finite_price(params, OptionSide::Put, self.put_from(params, d1, d2))?,
        ))
    }

    #[inline]
    fn call_from(&self, p: &OptionParameters, d1: f64, d2: f64) -> f64 {
        p.spot * self.cdf.cdf(d1)
            - p.strike * discount_factor(p.rate, p.maturity) * self.cdf.cdf(d2)
    }

    #[inline]
    fn put_from(&self, p: &OptionParameters, d1: f64, d2: f64) -> f64 {
        p.strike * discount_factor(p.rate, p.maturity) * self.cdf.cdf(-d2)
            - p.spot * self.cdf.cdf(-d1)
    }
}

// d1 = ln(S/K)/(σ√T) + (r/σ)·√T + ½σ√T, algebraically the usual form but
// without σ², which overflows long before σ itself does.
#[inline]
fn d1_d2(p: &OptionParameters) -> (f64, f64) {
    let sqrt_t = p.maturity.sqrt();
    let vol_sqrt_t = p.volatility * sqrt_t;
    let d1 = log_moneyness(p.spot, p.strike) / vol_sqrt_t
        + (p.rate / p.volatility) * sqrt_t
        + 0.5 * vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

fn require_finite_price(p: &OptionParameters, side: OptionSide, value: f64) -> PricingResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::invalid_parameter(format!(
            "{} price is not representable for S={}, K={}, T={}, r={}, σ={} (got {})",
            side, p.spot, p.strike, p.maturity, p.rate, p.volatility, value
        )))
    }
}

/// Price a European option with the default erfc-based CDF.
///
/// Fails with [`PricingError::InvalidParameter`] when S, K, T or σ is not a
/// finite positive number, when r is not finite, or when the inputs overflow
/// the formula.
pub fn price(
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    side: OptionSide,
) -> PricingResult<f64> {
    let params = OptionParameters {
        spot,
        strike,
        maturity,
        rate,
        volatility,
        side,
    };
    BlackScholes::new().price(&params)
}

/// Same as [`price`] with the side given as `"call"` or `"put"`.
pub fn price_by_name(
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    side: &str,
) -> PricingResult<f64> {
    let side: OptionSide = side.parse()?;
    price(spot, strike, maturity, rate, volatility, side)
}
