use std::borrow::Cow;

use super::map::{ParamValue, ParameterMap};
use crate::config::settings::{KeyValueOrder, SerializerSettings};

/// Serialize parameters into a query string without the leading `?`.
///
/// Flags are written as a bare key, so [`super::parse_query`] reads the
/// output back into the same map when encoding is off.
pub fn serialize_query(params: &ParameterMap, order: KeyValueOrder, settings: &SerializerSettings) -> String {
    params
        .iter()
        .map(|(key, value)| format_pair(key, value, order, settings.percent_encode))
        .collect::<Vec<_>>()
        .join("&")
}

fn format_pair(key: &str, value: &ParamValue, order: KeyValueOrder, percent_encode: bool) -> String {
    let key = encode_component(key, percent_encode);
    match value {
        ParamValue::Flag => key.into_owned(),
        ParamValue::Text(text) => {
            let text = encode_component(text, percent_encode);
            match order {
                KeyValueOrder::Conventional => format!("{}={}", key, text),
                KeyValueOrder::LegacySwapped => format!("{}={}", text, key),
            }
        }
    }
}

/// Form-style encoding: spaces become `+`
pub fn encode_component(raw: &str, percent_encode: bool) -> Cow<'_, str> {
    if percent_encode {
        Cow::Owned(urlencoding::encode(raw).replace("%20", "+"))
    } else {
        Cow::Borrowed(raw)
    }
}
