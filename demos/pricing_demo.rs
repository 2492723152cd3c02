// demos/pricing_demo.rs

//! Single-point Black-Scholes pricing
//!
//! Prices the default option (S = K = 100, T = 1y, r = 5%, σ = 20%) on both
//! sides, checks put-call parity, and shows how invalid inputs are reported.
//!
//! Usage:
//!     cargo run --example pricing_demo

use anyhow::Result;
use bs_heatmap::{format_price, price, price_by_name, OptionSide};

fn main() -> Result<()> {
    env_logger::init();

    println!("Black-Scholes Option Pricing Demo");
    println!("=================================");

    let (spot, strike, maturity, rate, volatility) = (100.0, 100.0, 1.0, 0.05, 0.2);

    println!("Spot price (S):        {:.2}", spot);
    println!("Strike price (K):      {:.2}", strike);
    println!("Time to maturity (T):  {:.2} years", maturity);
    println!("Risk-free rate (r):    {:.2}%", rate * 100.0);
    println!("Volatility (σ):        {:.2}%", volatility * 100.0);
    println!();

    let call = price(spot, strike, maturity, rate, volatility, OptionSide::Call)?;
    let put = price(spot, strike, maturity, rate, volatility, OptionSide::Put)?;

    println!("{}", format_price(OptionSide::Call, call));
    println!("{}", format_price(OptionSide::Put, put));

    let parity_gap = (call - put) - (spot - strike * (-rate * maturity).exp());
    println!("\nPut-call parity residual: {:.3e}", parity_gap);

    println!("\nVolatility ladder (call / put):");
    println!("{:<8} {:>10} {:>10}", "Vol", "Call", "Put");
    println!("{}", "-".repeat(30));
    for vol in [0.1, 0.2, 0.3, 0.4, 0.5] {
        let c = price(spot, strike, maturity, rate, vol, OptionSide::Call)?;
        let p = price(spot, strike, maturity, rate, vol, OptionSide::Put)?;
        println!("{:<8.2} {:>10.4} {:>10.4}", vol, c, p);
    }

    println!("\nInvalid inputs:");
    match price_by_name(spot, strike, maturity, rate, volatility, "straddle") {
        Ok(p) => println!("  unexpected price {:.4}", p),
        Err(e) => println!("  side \"straddle\": {}", e),
    }
    match price(spot, strike, 0.0, rate, volatility, OptionSide::Call) {
        Ok(p) => println!("  unexpected price {:.4}", p),
        Err(e) => println!("  T = 0: {}", e),
    }

    Ok(())
}
