//! # Market Pricing
//!
//! Numeric building blocks for the marketdesk API:
//! - Black-Scholes-Merton pricing with analytical Greeks
//! - Standard normal distribution helpers
//! - Linear screening heuristics for valuation and listing-pop prediction
//!
//! ## Design Principles
//!
//! - **Total functions**: the pricer never fails; degenerate inputs map to a
//!   zero-valued quote so callers can treat it as a pure lookup.
//! - **Stateless**: no shared distribution object, no interior mutability,
//!   safe to call from any number of tasks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod black_scholes;
pub mod distributions;
pub mod screening;

pub use black_scholes::{quote, OptionKind, OptionQuote};
pub use distributions::{norm_cdf, norm_pdf};
pub use screening::{
    predict_listing_pop, value_by_multiples, MedianMultiples, Prediction, PredictionInputs,
    ValuationInputs, ValuationSummary,
};
