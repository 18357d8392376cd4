//! Steam storefront detail source.
//!
//! Fetches `https://store.steampowered.com/app/<id>?l=english` with the
//! age-gate cookies set and extracts:
//!
//! - name from `div.apphub_AppName`
//! - release date from `div.date`
//! - review score from `div.score` (digits only)
//! - price from the first matching [`PriceTier`]
//!
//! ## Price Tiers
//!
//! 1. **Metadata**: `meta[itemprop="price"]` plus `meta[itemprop="priceCurrency"]`
//! 2. **Minor units**: the first `data-price-final` attribute, in cents

mod dump;
mod error;
mod fetcher;
pub(crate) mod parser;
mod price;

pub use dump::{DEFAULT_DUMP_DIR, DUMP_TIMEOUT_SECS, DUMP_USER_AGENT, PageDumper};
pub use error::DumpError;
pub use fetcher::StorefrontFetcher;
pub use parser::{
    StorefrontParser, extract_name, extract_release_date, extract_review_score, parse_record,
};
pub use price::{MetadataPriceTier, MinorUnitsPriceTier, PriceExtractor, PriceTier};
