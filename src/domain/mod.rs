mod sort;

pub use sort::{DESC_SUFFIX, SortDirection, SortState};
