use log::warn;

/// How the two halves of a `a=b` token map onto key and value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyValueOrder {
    /// `a` is the key, `b` the value
    #[default]
    Conventional,
    /// `b` is the key, `a` the value
    LegacySwapped,
}

impl KeyValueOrder {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "conventional" => Some(Self::Conventional),
            "legacy-swapped" | "legacy_swapped" | "legacy" => Some(Self::LegacySwapped),
            _ => None,
        }
    }
}

/// What a page size change does with the other parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PerPageMode {
    /// Navigate to `?per_page=<n>` alone
    #[default]
    Replace,
    /// Keep current parameters, set `per_page` and drop `page`
    Merge,
}

impl PerPageMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "replace" => Some(Self::Replace),
            "merge" => Some(Self::Merge),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParserSettings {
    pub key_value_order: KeyValueOrder,
}

#[derive(Debug, Clone, Default)]
pub struct SerializerSettings {
    pub percent_encode: bool,
}

#[derive(Debug, Clone, Default)]
pub struct NavigationSettings {
    pub per_page_mode: PerPageMode,
}

pub const KEY_VALUE_ORDER_VAR: &str = "LISTING_NAV_KEY_VALUE_ORDER";
pub const PER_PAGE_MODE_VAR: &str = "LISTING_NAV_PER_PAGE_MODE";
pub const PERCENT_ENCODE_VAR: &str = "LISTING_NAV_PERCENT_ENCODE";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub parser: ParserSettings,
    pub serializer: SerializerSettings,
    pub navigation: NavigationSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `LISTING_NAV_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(raw) = lookup(KEY_VALUE_ORDER_VAR) {
            match KeyValueOrder::from_name(&raw) {
                Some(order) => config.parser.key_value_order = order,
                None => warn!("Ignoring {}={:?}: unknown key/value order", KEY_VALUE_ORDER_VAR, raw),
            }
        }

        if let Some(raw) = lookup(PER_PAGE_MODE_VAR) {
            match PerPageMode::from_name(&raw) {
                Some(mode) => config.navigation.per_page_mode = mode,
                None => warn!("Ignoring {}={:?}: unknown per-page mode", PER_PAGE_MODE_VAR, raw),
            }
        }

        if let Some(raw) = lookup(PERCENT_ENCODE_VAR) {
            match parse_flag(&raw) {
                Some(enabled) => config.serializer.percent_encode = enabled,
                None => warn!("Ignoring {}={:?}: expected a boolean", PERCENT_ENCODE_VAR, raw),
            }
        }

        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
