mod map;
mod parser;
mod serializer;

pub use map::{ParamValue, ParameterMap};
pub use parser::parse_query;
pub use serializer::{encode_component, serialize_query};

/// Page size selected on the listing
pub const PER_PAGE: &str = "per_page";
/// Column the listing is sorted by, `_desc` suffixed when descending
pub const SORT_BY: &str = "sort_by";
/// Current page of the listing
pub const PAGE: &str = "page";
