pub mod bs;
pub mod normal;

/// Common traits used by the pricing models
pub mod traits {
    /// Standard normal cumulative distribution function Φ.
    ///
    /// Implementations must be accurate to at least 1e-10 absolute error for
    /// |x| < 10; near-the-money prices are sensitive to small errors in Φ(d1)
    /// and Φ(d2).
    pub trait StandardNormalCdf {
        fn cdf(&self, x: f64) -> f64;
    }
}

/// Utility functions shared by the pricing formulas
pub mod utils {
    /// Calculate log-moneyness of spot over strike: ln(S/K)
    pub fn log_moneyness(spot: f64, strike: f64) -> f64 {
        (spot / strike).ln()
    }

    /// Continuously compounded discount factor e^(-r·T)
    pub fn discount_factor(rate: f64, maturity: f64) -> f64 {
        (-rate * maturity).exp()
    }
}
