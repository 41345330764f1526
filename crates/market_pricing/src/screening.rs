//! Linear screening heuristics.
//!
//! Two deliberately small models used by the tools endpoints:
//! - a relative-valuation summary that averages reference prices over the
//!   multiples the caller enabled, and
//! - a listing-pop score combining profitability, subscription intensity and
//!   social sentiment into a clamped probability.
//!
//! Both are pure functions over their inputs with fixed reference tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Reference price the implied premium is measured against.
const BASE_PRICE: f64 = 90.0;

/// Premium headroom allowed per unit of projected growth.
const GROWTH_HEADROOM: f64 = 1.2;

/// Per-multiple reference prices used for the target-price average.
const PRICE_BY_MULTIPLE: [(&str, f64); 3] = [("evEbitda", 95.0), ("pe", 102.0), ("pb", 88.0)];

/// Relative-valuation request: which multiples to use and projected growth
/// in percent.
#[derive(Debug, Clone, Deserialize)]
pub struct ValuationInputs {
    /// Multiple name to enabled flag. Unrecognised names are ignored.
    pub multiples: BTreeMap<String, bool>,
    /// Projected growth, in percent.
    pub growth: f64,
}

/// Sector-median multiples reported alongside the valuation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MedianMultiples {
    /// Median EV/EBITDA.
    #[serde(rename = "evEbitda")]
    pub ev_ebitda: f64,
    /// Median price-to-earnings.
    pub pe: f64,
    /// Median price-to-book.
    pub pb: f64,
}

/// Result of a relative valuation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationSummary {
    /// Average of the reference prices over the enabled multiples, or `None`
    /// when no recognised multiple was enabled.
    pub target_price: Option<f64>,
    /// Whether the implied premium fits inside the growth headroom.
    pub premium_validated: bool,
    /// The fixed sector-median table.
    pub median_multiples: MedianMultiples,
    /// Nominal computation latency reported to the caller.
    pub latency_ms: u64,
}

/// Computes a target price from the enabled valuation multiples.
///
/// The implied premium is the target's upside over [`BASE_PRICE`], floored
/// at zero and expressed in percent; it validates when it does not exceed
/// `growth * 1.2`. A missing target counts as zero upside.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use market_pricing::{value_by_multiples, ValuationInputs};
///
/// let inputs = ValuationInputs {
///     multiples: BTreeMap::from([("pe".to_string(), true)]),
///     growth: 20.0,
/// };
/// let summary = value_by_multiples(&inputs);
/// assert_eq!(summary.target_price, Some(102.0));
/// ```
pub fn value_by_multiples(inputs: &ValuationInputs) -> ValuationSummary {
    let active: Vec<f64> = PRICE_BY_MULTIPLE
        .iter()
        .filter(|(name, _)| inputs.multiples.get(*name).copied().unwrap_or(false))
        .map(|&(_, price)| price)
        .collect();

    let target_price = if active.is_empty() {
        None
    } else {
        Some(active.iter().sum::<f64>() / active.len() as f64)
    };

    let implied_premium =
        ((target_price.unwrap_or(0.0) - BASE_PRICE) / BASE_PRICE).max(0.0) * 100.0;
    let premium_validated = implied_premium <= inputs.growth * GROWTH_HEADROOM;

    ValuationSummary {
        target_price,
        premium_validated,
        median_multiples: MedianMultiples {
            ev_ebitda: 12.4,
            pe: 18.7,
            pb: 3.1,
        },
        latency_ms: 5,
    }
}

/// Inputs for the listing-pop prediction.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PredictionInputs {
    /// Net profit margin, in percent.
    pub npm: f64,
    /// Oversubscription ratio.
    pub subscription: f64,
    /// Social sentiment score in `[0, 1]`.
    pub sentiment: f64,
}

/// Listing-pop probability with its driver breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Probability of a listing-day pop, clamped to `[0, 1]`.
    pub probability: f64,
    /// Human-readable contribution of each driver, in points.
    pub drivers: Vec<String>,
}

/// Scores the probability of a listing-day pop.
///
/// Weighted sum of normalised drivers: NPM at 35% (normalised by 20%),
/// subscription at 40% (normalised by 2x), sentiment at 25%, clamped to
/// `[0, 1]`.
pub fn predict_listing_pop(inputs: &PredictionInputs) -> Prediction {
    let npm_pts = inputs.npm / 20.0 * 35.0;
    let subscription_pts = inputs.subscription / 2.0 * 40.0;
    let sentiment_pts = inputs.sentiment * 25.0;

    let probability = ((npm_pts + subscription_pts + sentiment_pts) / 100.0).clamp(0.0, 1.0);

    Prediction {
        probability,
        drivers: vec![
            format!("NPM% contribution: {npm_pts:.1} pts"),
            format!("Subscription intensity: {subscription_pts:.1} pts"),
            format!("Social sentiment: {sentiment_pts:.1} pts"),
        ],
    }
}
