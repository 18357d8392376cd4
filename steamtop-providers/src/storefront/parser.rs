//! Storefront page parsing.
//!
//! Every field is optional: a page missing a marker (age gate, region
//! block, delisted app) still yields a record with that field absent.

use scraper::{ElementRef, Html, Selector};
use steamtop_core::{AppId, GameFields, GameRecord};
use tracing::debug;

use super::price::PriceExtractor;

/// Title container.
const NAME_SELECTOR: &str = "div.apphub_AppName";

/// Release date container.
const DATE_SELECTOR: &str = "div.date";

/// Review score container.
const SCORE_SELECTOR: &str = "div.score";

// ============================================================================
// Helpers
// ============================================================================

/// Returns the first element matching `css`, or `None` for no match or an
/// invalid selector.
pub(crate) fn select_first<'a>(doc: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    doc.select(&selector).next()
}

/// Trimmed text content of the first element matching `css`.
fn first_text(doc: &Html, css: &str) -> Option<String> {
    select_first(doc, css).map(|el| el.text().collect::<String>().trim().to_string())
}

// ============================================================================
// Field Extractors
// ============================================================================

/// Title text.
pub fn extract_name(doc: &Html) -> Option<String> {
    first_text(doc, NAME_SELECTOR)
}

/// Release date, verbatim (e.g. `"9 Jul, 2013"`).
pub fn extract_release_date(doc: &Html) -> Option<String> {
    first_text(doc, DATE_SELECTOR)
}

/// Review score; present only when the text is made of digits.
pub fn extract_review_score(doc: &Html) -> Option<u32> {
    let text = first_text(doc, SCORE_SELECTOR)?;
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

// ============================================================================
// Parser
// ============================================================================

/// Turns a storefront page into a [`GameRecord`].
#[derive(Debug, Default)]
pub struct StorefrontParser {
    price: PriceExtractor,
}

impl StorefrontParser {
    /// Parses `html` as the page for `app_id`.
    pub fn parse(&self, html: &str, app_id: AppId) -> GameRecord {
        let doc = Html::parse_document(html);

        let fields = GameFields {
            name: extract_name(&doc),
            release_date: extract_release_date(&doc),
            price: self.price.extract(&doc),
            review_score: extract_review_score(&doc),
        };

        let record = GameRecord::new(app_id, fields);
        if record.is_empty() {
            debug!(%app_id, "No storefront fields found");
        }
        record
    }
}

/// Parses a storefront page with the default price tiers.
pub fn parse_record(html: &str, app_id: AppId) -> GameRecord {
    StorefrontParser::default().parse(html, app_id)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn app(raw: u32) -> AppId {
        AppId::new(raw).unwrap()
    }

    #[test]
    fn test_parse_full_page() {
        let html = r#"
            <html><head>
              <meta itemprop="price" content="24,50">
              <meta itemprop="priceCurrency" content="EUR">
            </head><body>
              <div class="apphub_AppName">  Hades </div>
              <div class="release_date"><div class="date">17 Sep, 2020</div></div>
              <div class="score high">93</div>
            </body></html>"#;

        let record = parse_record(html, app(1_145_360));
        assert_eq!(record.name(), Some("Hades"));
        assert_eq!(record.release_date(), Some("17 Sep, 2020"));
        assert_eq!(record.price().map(ToString::to_string).as_deref(), Some("24.50 EUR"));
        assert_eq!(record.review_score(), Some(93));
        assert_eq!(record.url(), "https://store.steampowered.com/app/1145360");
    }

    #[test]
    fn test_parse_empty_page() {
        let record = parse_record("<html><body></body></html>", app(10));
        assert!(record.is_empty());
        assert_eq!(record.url(), "https://store.steampowered.com/app/10");
    }

    #[test]
    fn test_score_must_be_digits() {
        for (text, expected) in [
            ("93", Some(93)),
            (" 88 ", Some(88)),
            ("", None),
            ("N/A", None),
            ("9.5", None),
            ("-1", None),
        ] {
            let doc = Html::parse_document(&format!(r#"<div class="score">{text}</div>"#));
            assert_eq!(extract_review_score(&doc), expected, "text={text:?}");
        }
    }

    #[test]
    fn test_first_match_wins() {
        let doc = Html::parse_document(
            r#"<div class="apphub_AppName">First</div><div class="apphub_AppName">Second</div>"#,
        );
        assert_eq!(extract_name(&doc).as_deref(), Some("First"));
    }

    #[test]
    fn test_nested_text_is_joined() {
        let doc = Html::parse_document(r#"<div class="date"><span>9 Jul,</span> 2013</div>"#);
        assert_eq!(extract_release_date(&doc).as_deref(), Some("9 Jul, 2013"));
    }

    #[test]
    fn test_invalid_selector_is_none() {
        let doc = Html::parse_document("<div></div>");
        assert!(select_first(&doc, "div[").is_none());
    }
}
