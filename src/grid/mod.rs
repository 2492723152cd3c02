//! Sensitivity grid evaluation
//!
//! Builds the spot and volatility axes and evaluates call/put prices over
//! their cartesian product for heatmap display.

pub mod evaluator;
pub mod range;
pub mod types;

pub use evaluator::*;
pub use range::*;
pub use types::*;
