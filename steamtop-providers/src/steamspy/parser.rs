//! SteamSpy top-list parsing.
//!
//! The endpoint answers with one JSON object keyed by app id, in ranking
//! order:
//!
//! ```json
//! { "730": { "appid": 730, "name": "Counter-Strike 2", ... }, "570": { ... } }
//! ```
//!
//! Only the keys matter; their order is the ranking.

use serde_json::{Map, Value};
use steamtop_core::AppId;
use steamtop_fetch::UpstreamError;

/// Returns the first `count` app ids of a top-list body, in ranking order.
///
/// # Errors
///
/// `UpstreamError::Json` if the body is not JSON, and
/// `UpstreamError::InvalidResponse` if it is not an object or a key is not
/// a positive app id.
pub fn parse_top_ids(body: &str, count: usize) -> Result<Vec<AppId>, UpstreamError> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Object(entries) = value else {
        return Err(UpstreamError::InvalidResponse(format!(
            "expected an object keyed by app id, got {}",
            kind(&value)
        )));
    };
    ranked_keys(&entries, count)
}

fn ranked_keys(entries: &Map<String, Value>, count: usize) -> Result<Vec<AppId>, UpstreamError> {
    entries
        .keys()
        .take(count)
        .map(|key| {
            key.parse::<AppId>()
                .map_err(|_| UpstreamError::InvalidResponse(format!("bad app id key {key:?}")))
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(ids: &[AppId]) -> Vec<u32> {
        ids.iter().map(|id| id.get()).collect()
    }

    #[test]
    fn test_keeps_ranking_order() {
        let body = r#"{"730": {"appid": 730}, "570": {"appid": 570}, "10": {"appid": 10}}"#;
        let ids = parse_top_ids(body, 100).unwrap();
        assert_eq!(raw(&ids), vec![730, 570, 10]);
    }

    #[test]
    fn test_takes_first_count() {
        let body = r#"{"730": {}, "570": {}, "10": {}, "440": {}}"#;
        assert_eq!(raw(&parse_top_ids(body, 2).unwrap()), vec![730, 570]);
        assert!(parse_top_ids(body, 0).unwrap().is_empty());
    }

    #[test]
    fn test_fewer_entries_than_requested() {
        let body = r#"{"730": {}}"#;
        assert_eq!(raw(&parse_top_ids(body, 10).unwrap()), vec![730]);
    }

    #[test]
    fn test_rejects_non_object() {
        let err = parse_top_ids("[730, 570]", 2).unwrap_err();
        assert!(matches!(err, UpstreamError::InvalidResponse(_)));
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_rejects_non_json() {
        let err = parse_top_ids("<html>maintenance</html>", 2).unwrap_err();
        assert!(matches!(err, UpstreamError::Json(_)));
    }

    #[test]
    fn test_rejects_bad_key() {
        let err = parse_top_ids(r#"{"730": {}, "abc": {}}"#, 2).unwrap_err();
        assert!(matches!(err, UpstreamError::InvalidResponse(_)));
    }

    #[test]
    fn test_bad_key_past_count_is_ignored() {
        let ids = parse_top_ids(r#"{"730": {}, "abc": {}}"#, 1).unwrap();
        assert_eq!(raw(&ids), vec![730]);
    }
}
