//! IPO listing types and the bundled sample table.
//!
//! # Examples
//!
//! ```
//! use market_core::listings::{find_ipo, sample_ipos};
//!
//! let ipos = sample_ipos();
//! let tata = find_ipo(&ipos, "tatatech").unwrap();
//! assert_eq!(tata.symbol, "TATATECH");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Listing lookup errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ListingError {
    /// No listing with the requested symbol.
    #[error("IPO not found")]
    UnknownSymbol {
        /// The symbol that was requested.
        symbol: String,
    },
}

/// Bidding window and listing date of an IPO.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IpoTimeline {
    /// Opening and closing dates of the bidding window (`YYYY-MM-DD`).
    pub bidding: Vec<String>,
    /// Listing date (`YYYY-MM-DD`).
    pub listing: String,
}

/// One IPO listing, including the detail fields served on the per-symbol
/// endpoint.
///
/// Field names serialise in camelCase to match the existing wire format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IpoListing {
    /// Ticker symbol.
    pub symbol: String,
    /// Company name.
    pub name: String,
    /// Sector label.
    pub sector: String,
    /// Listing date (`YYYY-MM-DD`).
    pub list_date: String,
    /// Issue price at allotment.
    pub issue_price: f64,
    /// Latest traded price.
    pub current_price: f64,
    /// Short company description.
    pub description: Option<String>,
    /// Issue registrar.
    pub registrar: Option<String>,
    /// Exchanges the listing trades on.
    pub exchanges: Option<Vec<String>>,
    /// Minimum lot size for retail bids.
    pub lot_size: Option<u32>,
    /// Oversubscription multiples per investor category.
    pub subscription: Option<BTreeMap<String, f64>>,
    /// Bidding and listing timeline.
    pub timeline: Option<IpoTimeline>,
}

/// Looks up a listing by symbol, case-insensitively.
///
/// # Errors
/// [`ListingError::UnknownSymbol`] when no listing matches.
pub fn find_ipo<'a>(
    listings: &'a [IpoListing],
    symbol: &str,
) -> Result<&'a IpoListing, ListingError> {
    listings
        .iter()
        .find(|ipo| ipo.symbol.eq_ignore_ascii_case(symbol))
        .ok_or_else(|| ListingError::UnknownSymbol {
            symbol: symbol.to_string(),
        })
}

fn subscription(entries: &[(&str, f64)]) -> Option<BTreeMap<String, f64>> {
    Some(
        entries
            .iter()
            .map(|&(category, multiple)| (category.to_string(), multiple))
            .collect(),
    )
}

/// The bundled IPO sample table.
///
/// Serves as the data source until a live NSE/BSE feed replaces it.
pub fn sample_ipos() -> Vec<IpoListing> {
    vec![
        IpoListing {
            symbol: "IDEAFO".to_string(),
            name: "IdeaForge".to_string(),
            sector: "Aerospace & Defence".to_string(),
            list_date: "2023-06-29".to_string(),
            issue_price: 672.0,
            current_price: 1360.0,
            description: Some(
                "Drone manufacturer serving defence and enterprise clients.".to_string(),
            ),
            registrar: Some("Link Intime".to_string()),
            exchanges: Some(vec!["NSE".to_string(), "BSE".to_string()]),
            lot_size: Some(22),
            subscription: subscription(&[("QIB", 80.6), ("NII", 62.6), ("RII", 85.2)]),
            timeline: Some(IpoTimeline {
                bidding: vec!["2023-06-26".to_string(), "2023-06-28".to_string()],
                listing: "2023-06-29".to_string(),
            }),
        },
        IpoListing {
            symbol: "TATATECH".to_string(),
            name: "Tata Technologies".to_string(),
            sector: "IT Services".to_string(),
            list_date: "2023-11-30".to_string(),
            issue_price: 500.0,
            current_price: 1210.0,
            description: Some(
                "Engineering and product development digital services company.".to_string(),
            ),
            registrar: Some("Link Intime".to_string()),
            exchanges: Some(vec!["NSE".to_string(), "BSE".to_string()]),
            lot_size: Some(30),
            subscription: subscription(&[("QIB", 203.4), ("NII", 62.1), ("RII", 16.5)]),
            timeline: Some(IpoTimeline {
                bidding: vec!["2023-11-22".to_string(), "2023-11-24".to_string()],
                listing: "2023-11-30".to_string(),
            }),
        },
        IpoListing {
            symbol: "EMS".to_string(),
            name: "EMS Ltd".to_string(),
            sector: "Utilities".to_string(),
            list_date: "2023-09-21".to_string(),
            issue_price: 211.0,
            current_price: 497.0,
            description: Some(
                "Water and waste water treatment solutions provider.".to_string(),
            ),
            registrar: Some("KFintech".to_string()),
            exchanges: Some(vec!["NSE".to_string(), "BSE".to_string()]),
            lot_size: Some(70),
            subscription: subscription(&[("QIB", 149.0), ("NII", 81.0), ("RII", 30.5)]),
            timeline: Some(IpoTimeline {
                bidding: vec!["2023-09-08".to_string(), "2023-09-12".to_string()],
                listing: "2023-09-21".to_string(),
            }),
        },
    ]
}
