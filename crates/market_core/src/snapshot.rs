//! Index and stock snapshot types with the bundled sample tables.

use serde::{Deserialize, Serialize};

/// Last traded level and daily change of an index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexSnapshot {
    /// Index name.
    pub name: String,
    /// Last traded level.
    pub last: f64,
    /// Daily change, in percent.
    pub chg: f64,
}

/// Headline figures for one stock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockQuote {
    /// Ticker symbol.
    pub symbol: String,
    /// Company name.
    pub name: String,
    /// Last traded price.
    pub price: f64,
    /// Trailing price-to-earnings ratio.
    pub pe: f64,
    /// Price-to-book ratio.
    pub pb: f64,
    /// Market capitalisation, human-formatted.
    pub mcap: String,
}

/// Combined market snapshot served on the snapshot endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketSnapshot {
    /// Index levels.
    pub indices: Vec<IndexSnapshot>,
    /// Stock quotes.
    pub stocks: Vec<StockQuote>,
}

/// The bundled index sample table.
pub fn sample_indices() -> Vec<IndexSnapshot> {
    let rows = [
        ("NIFTY 50", 23200.5, 0.62),
        ("NIFTY BANK", 49875.9, -0.18),
        ("SENSEX", 76980.3, 0.41),
        ("NIFTY IT", 36420.1, 0.25),
    ];
    rows.iter()
        .map(|&(name, last, chg)| IndexSnapshot {
            name: name.to_string(),
            last,
            chg,
        })
        .collect()
}

/// The bundled stock sample table.
pub fn sample_stocks() -> Vec<StockQuote> {
    let rows = [
        ("RELIANCE", "Reliance Industries", 2965.4, 27.3, 2.4, "20.4T"),
        ("TCS", "Tata Consultancy Services", 3942.1, 30.8, 15.4, "14.6T"),
        ("HDFCBANK", "HDFC Bank", 1542.3, 19.2, 2.8, "11.5T"),
        ("ICICIBANK", "ICICI Bank", 1178.6, 20.4, 3.4, "8.6T"),
        ("INFY", "Infosys", 1624.8, 24.7, 7.8, "6.8T"),
    ];
    rows.iter()
        .map(|&(symbol, name, price, pe, pb, mcap)| StockQuote {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price,
            pe,
            pb,
            mcap: mcap.to_string(),
        })
        .collect()
}
