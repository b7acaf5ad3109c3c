use crate::domain::SortState;
use crate::params::ParameterMap;

/// A new value picked in the page size selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerPageEvent {
    pub value: String,
}

impl PerPageEvent {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

/// A click on a sortable column header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortEvent {
    /// Column identifier carried by the header
    pub element_key: String,
    /// Header currently shows ascending order
    pub is_ascending: bool,
}

impl SortEvent {
    pub fn new(element_key: impl Into<String>, is_ascending: bool) -> Self {
        Self {
            element_key: element_key.into(),
            is_ascending,
        }
    }

    /// The event a header for `column` fires given the current parameters
    pub fn for_column(column: &str, params: &ParameterMap) -> Self {
        let is_ascending = SortState::from_params(params).is_some_and(|state| state.is_ascending_on(column));
        Self::new(column, is_ascending)
    }
}
