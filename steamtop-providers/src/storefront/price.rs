//! Price extraction tiers.
//!
//! Storefront pages expose the price through more than one mechanism
//! depending on the page variant. Each mechanism is a [`PriceTier`]; the
//! [`PriceExtractor`] tries them in order and keeps the first hit.

use scraper::Html;
use steamtop_core::{DEFAULT_CURRENCY, Price};
use tracing::trace;

use super::parser::select_first;

/// Amount metadata, e.g. `<meta itemprop="price" content="24,50">`.
const PRICE_META: &str = r#"meta[itemprop="price"]"#;

/// Currency metadata, e.g. `<meta itemprop="priceCurrency" content="EUR">`.
const CURRENCY_META: &str = r#"meta[itemprop="priceCurrency"]"#;

/// Attribute holding the final price in minor units.
const PRICE_FINAL_ATTR: &str = "data-price-final";

// ============================================================================
// Price Tier Trait
// ============================================================================

/// One way of reading a price from a storefront document.
pub trait PriceTier: Send + Sync {
    /// Short name used in traces.
    fn name(&self) -> &'static str;

    /// Returns a price if this tier's markup is present.
    fn extract(&self, doc: &Html) -> Option<Price>;
}

// ============================================================================
// Metadata Tier
// ============================================================================

/// Reads `itemprop="price"` / `itemprop="priceCurrency"` metadata.
///
/// Decimal commas become periods. A zero amount is free to play; an amount
/// that does not parse is kept as text next to the currency.
#[derive(Debug, Clone)]
pub struct MetadataPriceTier {
    default_currency: String,
}

impl MetadataPriceTier {
    /// Creates the tier with the currency used when none is declared.
    pub fn new(default_currency: impl Into<String>) -> Self {
        Self {
            default_currency: default_currency.into(),
        }
    }

    fn currency(&self, doc: &Html) -> String {
        select_first(doc, CURRENCY_META)
            .and_then(|el| el.value().attr("content"))
            .map(str::trim)
            .filter(|currency| !currency.is_empty())
            .unwrap_or(&self.default_currency)
            .to_string()
    }
}

impl Default for MetadataPriceTier {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

impl PriceTier for MetadataPriceTier {
    fn name(&self) -> &'static str {
        "metadata"
    }

    fn extract(&self, doc: &Html) -> Option<Price> {
        let raw = select_first(doc, PRICE_META)?.value().attr("content")?.trim();
        if raw.is_empty() {
            return None;
        }

        let normalized = raw.replace(',', ".");
        let currency = self.currency(doc);

        match normalized.parse::<f64>() {
            Ok(amount) if amount.is_finite() => Some(Price::amount(amount, currency)),
            _ => Some(Price::Unparsed {
                text: normalized,
                currency,
            }),
        }
    }
}

// ============================================================================
// Minor Units Tier
// ============================================================================

/// Reads the first `data-price-final` attribute (cents).
///
/// Only purely numeric values count.
#[derive(Debug, Clone)]
pub struct MinorUnitsPriceTier {
    currency: String,
}

impl MinorUnitsPriceTier {
    /// Creates the tier with the currency attached to every amount.
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }
}

impl Default for MinorUnitsPriceTier {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

impl PriceTier for MinorUnitsPriceTier {
    fn name(&self) -> &'static str {
        "minor_units"
    }

    fn extract(&self, doc: &Html) -> Option<Price> {
        let selector = format!("[{PRICE_FINAL_ATTR}]");
        let raw = select_first(doc, &selector)?.value().attr(PRICE_FINAL_ATTR)?;
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let units: u64 = raw.parse().ok()?;
        Some(Price::from_minor_units(units, self.currency.clone()))
    }
}

// ============================================================================
// Price Extractor
// ============================================================================

/// Ordered list of price tiers; the first tier with a result wins.
pub struct PriceExtractor {
    tiers: Vec<Box<dyn PriceTier>>,
}

impl PriceExtractor {
    /// Creates an extractor trying `tiers` in the given order.
    pub fn new(tiers: Vec<Box<dyn PriceTier>>) -> Self {
        Self { tiers }
    }

    /// Names of the tiers, in order.
    pub fn tier_names(&self) -> Vec<&'static str> {
        self.tiers.iter().map(|tier| tier.name()).collect()
    }

    /// Returns the first price any tier finds.
    pub fn extract(&self, doc: &Html) -> Option<Price> {
        self.tiers.iter().find_map(|tier| {
            let price = tier.extract(doc)?;
            trace!(tier = tier.name(), %price, "Price found");
            Some(price)
        })
    }
}

impl Default for PriceExtractor {
    fn default() -> Self {
        Self::new(vec![
            Box::new(MetadataPriceTier::default()),
            Box::new(MinorUnitsPriceTier::default()),
        ])
    }
}

impl std::fmt::Debug for PriceExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceExtractor")
            .field("tiers", &self.tier_names())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> Html {
        Html::parse_document(&format!("<html><head></head><body>{body}</body></html>"))
    }

    #[test]
    fn test_metadata_comma_decimal() {
        let html = doc(
            r#"<meta itemprop="price" content="24,50">
               <meta itemprop="priceCurrency" content="EUR">"#,
        );
        let price = MetadataPriceTier::default().extract(&html).unwrap();
        assert_eq!(price.to_string(), "24.50 EUR");
    }

    #[test]
    fn test_metadata_zero_is_free() {
        for amount in ["0", "0.00", "0,00"] {
            let html = doc(&format!(r#"<meta itemprop="price" content="{amount}">"#));
            let price = MetadataPriceTier::default().extract(&html).unwrap();
            assert!(price.is_free(), "amount={amount}");
        }
    }

    #[test]
    fn test_metadata_default_currency() {
        let html = doc(r#"<meta itemprop="price" content="59.99">"#);
        let price = MetadataPriceTier::default().extract(&html).unwrap();
        assert_eq!(price.to_string(), "59.99 EUR");

        let html = doc(
            r#"<meta itemprop="price" content="59.99">
               <meta itemprop="priceCurrency" content="">"#,
        );
        let price = MetadataPriceTier::new("USD").extract(&html).unwrap();
        assert_eq!(price.to_string(), "59.99 USD");
    }

    #[test]
    fn test_metadata_declared_currency_wins() {
        let html = doc(
            r#"<meta itemprop="price" content="19.99">
               <meta itemprop="priceCurrency" content="GBP">"#,
        );
        let price = MetadataPriceTier::default().extract(&html).unwrap();
        assert_eq!(price.to_string(), "19.99 GBP");
    }

    #[test]
    fn test_metadata_unparseable_kept_raw() {
        let html = doc(
            r#"<meta itemprop="price" content="1.234,56">
               <meta itemprop="priceCurrency" content="EUR">"#,
        );
        let price = MetadataPriceTier::default().extract(&html).unwrap();
        assert_eq!(price.to_string(), "1.234.56 EUR");
    }

    #[test]
    fn test_metadata_blank_content_is_absent() {
        let html = doc(r#"<meta itemprop="price" content="  ">"#);
        assert!(MetadataPriceTier::default().extract(&html).is_none());

        let html = doc(r#"<meta itemprop="price">"#);
        assert!(MetadataPriceTier::default().extract(&html).is_none());
    }

    #[test]
    fn test_minor_units() {
        let html = doc(r#"<div class="game_purchase_price" data-price-final="1499"></div>"#);
        let price = MinorUnitsPriceTier::default().extract(&html).unwrap();
        assert_eq!(price.to_string(), "14.99 EUR");
    }

    #[test]
    fn test_minor_units_zero_is_free() {
        let html = doc(r#"<div data-price-final="0"></div>"#);
        let price = MinorUnitsPriceTier::default().extract(&html).unwrap();
        assert_eq!(price.to_string(), "Free To Play");
    }

    #[test]
    fn test_minor_units_non_numeric_is_absent() {
        for raw in ["", "12.99", "-100", "abc"] {
            let html = doc(&format!(r#"<div data-price-final="{raw}"></div>"#));
            assert!(MinorUnitsPriceTier::default().extract(&html).is_none(), "raw={raw}");
        }
    }

    #[test]
    fn test_minor_units_only_first_element_counts() {
        let html = doc(r#"<div data-price-final="x"></div><div data-price-final="999"></div>"#);
        assert!(MinorUnitsPriceTier::default().extract(&html).is_none());
    }

    #[test]
    fn test_extractor_prefers_metadata() {
        let html = doc(
            r#"<meta itemprop="price" content="24,50">
               <div data-price-final="1999"></div>"#,
        );
        let price = PriceExtractor::default().extract(&html).unwrap();
        assert_eq!(price.to_string(), "24.50 EUR");
    }

    #[test]
    fn test_extractor_falls_back_to_minor_units() {
        let html = doc(r#"<div data-price-final="5999"></div>"#);
        let price = PriceExtractor::default().extract(&html).unwrap();
        assert_eq!(price.to_string(), "59.99 EUR");
    }

    #[test]
    fn test_extractor_nothing_found() {
        let html = doc("<p>No price here</p>");
        assert!(PriceExtractor::default().extract(&html).is_none());
    }

    #[test]
    fn test_tier_order() {
        assert_eq!(
            PriceExtractor::default().tier_names(),
            vec!["metadata", "minor_units"]
        );
    }
}
