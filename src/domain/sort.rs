use crate::params::{ParameterMap, SORT_BY};

/// Suffix marking a descending `sort_by` value
pub const DESC_SUFFIX: &str = "_desc";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Column and direction decoded from a `sort_by` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    /// `name` is ascending on `name`, `name_desc` descending on `name`
    pub fn parse(value: &str) -> Option<Self> {
        let (column, direction) = match value.strip_suffix(DESC_SUFFIX) {
            Some(column) => (column, SortDirection::Descending),
            None => (value, SortDirection::Ascending),
        };

        if column.is_empty() {
            return None;
        }
        Some(Self::new(column, direction))
    }

    pub fn from_params(params: &ParameterMap) -> Option<Self> {
        params.get_text(SORT_BY).and_then(Self::parse)
    }

    pub fn to_param_value(&self) -> String {
        match self.direction {
            SortDirection::Ascending => self.column.clone(),
            SortDirection::Descending => format!("{}{}", self.column, DESC_SUFFIX),
        }
    }

    /// Whether a header for `column` shows ascending order
    pub fn is_ascending_on(&self, column: &str) -> bool {
        self.column == column && self.direction == SortDirection::Ascending
    }
}
