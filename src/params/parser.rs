use log::debug;

use super::map::{ParamValue, ParameterMap};
use crate::config::settings::KeyValueOrder;

/// Parse a location search string (`?a=1&b=2`, `a=1&b=2` or empty) into parameters.
///
/// Values are stored as raw substrings; nothing is trimmed or decoded.
pub fn parse_query(search: &str, order: KeyValueOrder) -> ParameterMap {
    let query = isolate_query(search);
    let params: ParameterMap = tokens(query).map(|token| split_token(token, order)).collect();
    debug!("Parsed {} parameter(s) from {:?}", params.len(), search);
    params
}

/// Only the segment between the first and second `?` counts as the query
fn isolate_query(search: &str) -> &str {
    match search.split_once('?') {
        Some((_, rest)) => rest.split_once('?').map_or(rest, |(query, _)| query),
        None => search,
    }
}

fn tokens(query: &str) -> impl Iterator<Item = &str> {
    query.split('&').filter(|token| !token.is_empty())
}

fn split_token(token: &str, order: KeyValueOrder) -> (&str, ParamValue) {
    let Some((raw_key, raw_value)) = token.split_once('=') else {
        return (token, ParamValue::Flag);
    };

    match order {
        KeyValueOrder::Conventional => (raw_key, ParamValue::text(raw_value)),
        KeyValueOrder::LegacySwapped => (second_segment(raw_value), ParamValue::text(raw_key)),
    }
}

/// `a=1=2` splits into `["a", "1", "2"]`; the historical reader only looked at `"1"`
fn second_segment(raw_value: &str) -> &str {
    raw_value.split_once('=').map_or(raw_value, |(segment, _)| segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> ParamValue {
        ParamValue::text(value)
    }

    #[test]
    fn test_empty_query_yields_empty_map() {
        assert!(parse_query("", KeyValueOrder::Conventional).is_empty());
        assert!(parse_query("?", KeyValueOrder::Conventional).is_empty());
        assert!(parse_query("?&&", KeyValueOrder::LegacySwapped).is_empty());
    }

    #[test]
    fn test_conventional_order() {
        let params = parse_query("a=1&b=2", KeyValueOrder::Conventional);

        let expected: ParameterMap = [("a", text("1")), ("b", text("2"))].into_iter().collect();
        assert_eq!(params, expected);
    }

    #[test]
    fn test_legacy_swapped_order() {
        let params = parse_query("a=1&b=2", KeyValueOrder::LegacySwapped);

        let expected: ParameterMap = [("1", text("a")), ("2", text("b"))].into_iter().collect();
        assert_eq!(params, expected);
    }

    #[test]
    fn test_token_without_equals_is_flag() {
        for order in [KeyValueOrder::Conventional, KeyValueOrder::LegacySwapped] {
            let params = parse_query("flag", order);
            assert_eq!(params.get("flag"), Some(&ParamValue::Flag));
            assert_eq!(params.len(), 1);
        }
    }

    #[test]
    fn test_leading_question_mark_is_stripped() {
        let params = parse_query("?sort_by=name&page=3", KeyValueOrder::Conventional);

        assert_eq!(params.get_text("sort_by"), Some("name"));
        assert_eq!(params.get_text("page"), Some("3"));
    }

    #[test]
    fn test_only_first_query_segment_is_used() {
        let params = parse_query("/docs?a=1?b=2", KeyValueOrder::Conventional);

        assert_eq!(params.get_text("a"), Some("1"));
        assert!(!params.contains_key("b"));
    }

    #[test]
    fn test_values_are_not_decoded() {
        let params = parse_query("q=hello%20world+again&n=%2F", KeyValueOrder::Conventional);

        assert_eq!(params.get_text("q"), Some("hello%20world+again"));
        assert_eq!(params.get_text("n"), Some("%2F"));
    }

    #[test]
    fn test_extra_equals_signs() {
        let conventional = parse_query("a=1=2", KeyValueOrder::Conventional);
        assert_eq!(conventional.get_text("a"), Some("1=2"));

        let legacy = parse_query("a=1=2", KeyValueOrder::LegacySwapped);
        assert_eq!(legacy.get_text("1"), Some("a"));
    }

    #[test]
    fn test_last_repeated_key_wins() {
        let params = parse_query("page=1&sort_by=date&page=4", KeyValueOrder::Conventional);

        assert_eq!(params.get_text("page"), Some("4"));
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["page", "sort_by"]);
    }

    #[test]
    fn test_malformed_tokens_degrade_to_entries() {
        let params = parse_query("=x&y=", KeyValueOrder::Conventional);

        assert_eq!(params.get_text(""), Some("x"));
        assert_eq!(params.get_text("y"), Some(""));
    }
}
