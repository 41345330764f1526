//! Black-Scholes-Merton pricing for European options.
//!
//! This module prices a European call or put and returns the standard
//! sensitivities in a single quote.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Scaling Conventions
//!
//! `rho` and `vega` are quoted per one percentage-point move in the rate and
//! volatility (divided by 100); `theta` is quoted per calendar day (divided
//! by 365). These are trading-desk conventions, not the raw derivatives.

use serde::{Deserialize, Serialize};

use crate::distributions::{norm_cdf, norm_pdf};

/// Days used to convert annual theta to per-day theta.
const DAYS_PER_YEAR: f64 = 365.0;

/// Option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// European call.
    Call,
    /// European put.
    Put,
}

impl OptionKind {
    /// Maps a free-form type label onto an option side.
    ///
    /// The label `"call"` (compared case-insensitively) selects a call;
    /// every other label, including unrecognised garbage, selects a put.
    /// This mirrors the upstream API contract, which never rejected a type
    /// label, so callers wanting strict validation must check the label
    /// themselves.
    ///
    /// # Examples
    /// ```
    /// use market_pricing::OptionKind;
    ///
    /// assert_eq!(OptionKind::from_label("call"), OptionKind::Call);
    /// assert_eq!(OptionKind::from_label("CALL"), OptionKind::Call);
    /// assert_eq!(OptionKind::from_label("put"), OptionKind::Put);
    /// assert_eq!(OptionKind::from_label("straddle"), OptionKind::Put);
    /// ```
    #[inline]
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("call") {
            OptionKind::Call
        } else {
            OptionKind::Put
        }
    }

    /// Returns true for the call side.
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionKind::Call)
    }
}

/// Theoretical price and first-order sensitivities of a European option.
///
/// A quote is a pure function of its inputs: no identity, no mutation after
/// creation, no dependency on prior calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionQuote {
    /// Theoretical option price.
    pub price: f64,
    /// Sensitivity to the spot price (∂V/∂S).
    pub delta: f64,
    /// Sensitivity of delta to the spot price (∂²V/∂S²).
    pub gamma: f64,
    /// Sensitivity to a one percentage-point volatility move.
    pub vega: f64,
    /// Price decay per calendar day.
    pub theta: f64,
    /// Sensitivity to a one percentage-point rate move.
    pub rho: f64,
}

impl OptionQuote {
    /// The all-zero quote returned for degenerate inputs.
    pub const ZERO: OptionQuote = OptionQuote {
        price: 0.0,
        delta: 0.0,
        gamma: 0.0,
        vega: 0.0,
        theta: 0.0,
        rho: 0.0,
    };
}

/// Prices a European option and its Greeks under Black-Scholes-Merton
/// dynamics with no dividend yield.
///
/// # Arguments
/// * `spot` - Current spot price (S)
/// * `strike` - Strike price (K)
/// * `expiry` - Time to expiry in years (T)
/// * `rate` - Risk-free rate as a decimal, may be negative (r)
/// * `volatility` - Volatility as a decimal (σ)
/// * `kind` - Call or put
///
/// # Degenerate inputs
///
/// If any of `expiry <= 0`, `volatility <= 0`, `spot <= 0` or `strike <= 0`
/// holds, the function returns [`OptionQuote::ZERO`] instead of evaluating
/// `ln` or dividing by a vanishing `σ√T`. The function is total: it never
/// panics and never returns an error.
///
/// # Examples
/// ```
/// use market_pricing::{quote, OptionKind};
///
/// let q = quote(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call);
/// assert!((q.price - 10.4506).abs() < 1e-4);
/// assert!((q.delta - 0.6368).abs() < 1e-4);
///
/// // Expired contract: everything collapses to zero.
/// let q = quote(100.0, 100.0, 0.0, 0.05, 0.2, OptionKind::Call);
/// assert_eq!(q, market_pricing::OptionQuote::ZERO);
/// ```
pub fn quote(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    kind: OptionKind,
) -> OptionQuote {
    if expiry <= 0.0 || volatility <= 0.0 || spot <= 0.0 || strike <= 0.0 {
        return OptionQuote::ZERO;
    }

    let sqrt_t = expiry.sqrt();
    let vol_sqrt_t = volatility * sqrt_t;

    // d1 = (ln(S/K) + (r + σ²/2)T) / (σ√T), d2 = d1 - σ√T
    let d1 = ((spot / strike).ln() + (rate + 0.5 * volatility * volatility) * expiry) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;

    let discount = (-rate * expiry).exp();
    let pdf_d1 = norm_pdf(d1);
    // Common decay term: -(S·φ(d₁)·σ)/(2√T)
    let decay = -(spot * pdf_d1 * volatility) / (2.0 * sqrt_t);

    let (price, delta, theta, rho) = if kind.is_call() {
        let n_d2 = norm_cdf(d2);
        (
            spot * norm_cdf(d1) - strike * discount * n_d2,
            norm_cdf(d1),
            (decay - rate * strike * discount * n_d2) / DAYS_PER_YEAR,
            strike * expiry * discount * n_d2 / 100.0,
        )
    } else {
        let n_neg_d2 = norm_cdf(-d2);
        (
            strike * discount * n_neg_d2 - spot * norm_cdf(-d1),
            -norm_cdf(-d1),
            (decay + rate * strike * discount * n_neg_d2) / DAYS_PER_YEAR,
            -strike * expiry * discount * n_neg_d2 / 100.0,
        )
    };

    OptionQuote {
        price,
        delta,
        gamma: pdf_d1 / (spot * vol_sqrt_t),
        vega: spot * pdf_d1 * sqrt_t / 100.0,
        theta,
        rho,
    }
}
