//! # market_core: Data Model for the Marketdesk API
//!
//! Plain data types for the instruments the API serves, together with the
//! bundled sample tables used when no live feed is wired in:
//! - IPO listings with detail fields (`listings`)
//! - Index and stock snapshots (`snapshot`)
//!
//! All wire-facing types serialise with camelCase field names so the JSON
//! matches what frontends already consume. Dates stay as opaque `YYYY-MM-DD`
//! strings on the wire; nothing in this crate does date arithmetic.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod listings;
pub mod snapshot;

pub use listings::{find_ipo, sample_ipos, IpoListing, IpoTimeline, ListingError};
pub use snapshot::{sample_indices, sample_stocks, IndexSnapshot, MarketSnapshot, StockQuote};
