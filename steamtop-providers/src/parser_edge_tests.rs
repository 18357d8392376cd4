//! Parser edge case tests.
//!
//! Malformed, partial, and unusual storefront and top-list inputs.

#[cfg(test)]
mod storefront_parser_edge_tests {
    use crate::storefront::parse_record;
    use steamtop_core::AppId;

    fn app(raw: u32) -> AppId {
        AppId::new(raw).unwrap()
    }

    fn price_label(html: &str) -> Option<String> {
        parse_record(html, app(1)).price().map(ToString::to_string)
    }

    // ========================================================================
    // Markup Edge Cases
    // ========================================================================

    #[test]
    fn test_empty_document() {
        let record = parse_record("", app(1));
        assert!(record.is_empty());
    }

    #[test]
    fn test_non_html_body() {
        let record = parse_record(r#"{"success": false}"#, app(1));
        assert!(record.is_empty());
    }

    #[test]
    fn test_age_gate_page() {
        let html = r#"
            <html><body>
              <div class="agegate_birthday_desc">Please enter your birth date to continue:</div>
              <select id="ageYear"><option>1995</option></select>
            </body></html>"#;
        let record = parse_record(html, app(292_030));
        assert!(record.is_empty());
        assert_eq!(record.url(), "https://store.steampowered.com/app/292030");
    }

    #[test]
    fn test_unclosed_tags() {
        let html = r#"<div class="apphub_AppName">Portal 2</div><div class="date">18 Apr, 2011"#;
        let record = parse_record(html, app(620));
        assert_eq!(record.name(), Some("Portal 2"));
        assert_eq!(record.release_date(), Some("18 Apr, 2011"));
    }

    #[test]
    fn test_entities_decoded() {
        let html = r#"<div class="apphub_AppName">Oblivion&reg; Game of the Year Edition</div>"#;
        let record = parse_record(html, app(22_330));
        assert_eq!(record.name(), Some("Oblivion® Game of the Year Edition"));
    }

    #[test]
    fn test_empty_name_container_is_empty_string() {
        let html = r#"<div class="apphub_AppName">   </div>"#;
        let record = parse_record(html, app(1));
        assert_eq!(record.name(), Some(""));
    }

    #[test]
    fn test_class_list_match() {
        let html = r#"<div class="user_reviews_summary score positive">81</div>"#;
        assert_eq!(parse_record(html, app(1)).review_score(), Some(81));
    }

    #[test]
    fn test_span_with_class_is_not_a_match() {
        let html = r#"<span class="apphub_AppName">Not a div</span>"#;
        assert_eq!(parse_record(html, app(1)).name(), None);
    }

    // ========================================================================
    // Score Edge Cases
    // ========================================================================

    #[test]
    fn test_score_zero() {
        let html = r#"<div class="score">0</div>"#;
        assert_eq!(parse_record(html, app(1)).review_score(), Some(0));
    }

    #[test]
    fn test_score_overflow_is_absent() {
        let html = r#"<div class="score">99999999999999999999</div>"#;
        assert_eq!(parse_record(html, app(1)).review_score(), None);
    }

    #[test]
    fn test_score_with_percent_is_absent() {
        let html = r#"<div class="score">93%</div>"#;
        assert_eq!(parse_record(html, app(1)).review_score(), None);
    }

    // ========================================================================
    // Price Edge Cases
    // ========================================================================

    #[test]
    fn test_blank_meta_falls_through_to_minor_units() {
        let html = r#"<meta itemprop="price" content=""><div data-price-final="999"></div>"#;
        assert_eq!(price_label(html).as_deref(), Some("9.99 EUR"));
    }

    #[test]
    fn test_meta_currency_without_amount_is_ignored() {
        let html = r#"<meta itemprop="priceCurrency" content="USD"><div data-price-final="999"></div>"#;
        assert_eq!(price_label(html).as_deref(), Some("9.99 EUR"));
    }

    #[test]
    fn test_meta_amount_rounding() {
        let html = r#"<meta itemprop="price" content="14.999">"#;
        assert_eq!(price_label(html).as_deref(), Some("15.00 EUR"));
    }

    #[test]
    fn test_meta_integer_amount() {
        let html = r#"<meta itemprop="price" content="20">"#;
        assert_eq!(price_label(html).as_deref(), Some("20.00 EUR"));
    }

    #[test]
    fn test_meta_text_amount() {
        let html = r#"<meta itemprop="price" content="Free">
                      <meta itemprop="priceCurrency" content="USD">"#;
        assert_eq!(price_label(html).as_deref(), Some("Free USD"));
    }

    #[test]
    fn test_meta_non_finite_amount_kept_raw() {
        let html = r#"<meta itemprop="price" content="inf">"#;
        assert_eq!(price_label(html).as_deref(), Some("inf EUR"));
    }

    #[test]
    fn test_minor_units_small_amount() {
        let html = r#"<div data-price-final="5"></div>"#;
        assert_eq!(price_label(html).as_deref(), Some("0.05 EUR"));
    }

    #[test]
    fn test_no_price_anywhere() {
        let html = r#"<div class="game_area_comingsoon">Coming soon</div>"#;
        assert_eq!(price_label(html), None);
    }
}

#[cfg(test)]
mod steamspy_parser_edge_tests {
    use crate::steamspy::parse_top_ids;
    use steamtop_fetch::UpstreamError;

    #[test]
    fn test_empty_object() {
        assert!(parse_top_ids("{}", 100).unwrap().is_empty());
    }

    #[test]
    fn test_null_body() {
        let err = parse_top_ids("null", 10).unwrap_err();
        assert!(matches!(err, UpstreamError::InvalidResponse(_)));
    }

    #[test]
    fn test_zero_key_rejected() {
        let err = parse_top_ids(r#"{"0": {}}"#, 1).unwrap_err();
        assert!(matches!(err, UpstreamError::InvalidResponse(_)));
    }

    #[test]
    fn test_entry_values_are_not_inspected() {
        let ids = parse_top_ids(r#"{"730": null, "570": "x", "10": []}"#, 3).unwrap();
        let raw: Vec<u32> = ids.iter().map(|id| id.get()).collect();
        assert_eq!(raw, vec![730, 570, 10]);
    }

    #[test]
    fn test_hundred_entries_keep_order() {
        // Descending ids; a sorted map would reorder them.
        let body = format!(
            "{{{}}}",
            (1..=100)
                .rev()
                .map(|id| format!("\"{id}\": {{\"appid\": {id}}}"))
                .collect::<Vec<_>>()
                .join(", ")
        );
        let ids = parse_top_ids(&body, 100).unwrap();
        let raw: Vec<u32> = ids.iter().map(|id| id.get()).collect();
        assert_eq!(raw, (1..=100).rev().collect::<Vec<_>>());
    }
}
