use anyhow::Result;
use log::debug;

use super::events::{PerPageEvent, SortEvent};
use super::port::NavigationPort;
use crate::config::settings::{AppConfig, PerPageMode};
use crate::domain::DESC_SUFFIX;
use crate::errors::with_navigation_context;
use crate::params::{self, PAGE, PER_PAGE, ParameterMap, SORT_BY};

/// Turns listing controls into navigations.
///
/// Each handler re-reads the current query from the port, so nothing is
/// cached between events.
pub struct NavigationController<P: NavigationPort> {
    port: P,
    config: AppConfig,
}

impl<P: NavigationPort> NavigationController<P> {
    pub fn new(port: P, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    /// Parameters of the page we are on
    pub fn current_params(&self) -> ParameterMap {
        let search = self.port.read_current_query();
        params::parse_query(&search, self.config.parser.key_value_order)
    }

    /// Page size selector changed. Returns the navigation target.
    pub fn on_per_page_change(&mut self, event: &PerPageEvent) -> Result<String> {
        let target = match self.config.navigation.per_page_mode {
            PerPageMode::Replace => self.replace_with_per_page(&event.value),
            PerPageMode::Merge => {
                let mut params = self.current_params();
                params.insert_text(PER_PAGE, event.value.as_str());
                params.remove(PAGE);
                self.target_for(&params)
            }
        };

        debug!("Per page changed to {:?}", event.value);
        self.navigate(target)
    }

    /// Sortable column header clicked. Returns the navigation target.
    pub fn on_sort_click(&mut self, event: &SortEvent) -> Result<String> {
        let mut params = self.current_params();
        params.insert_text(SORT_BY, sort_value(event));
        params.remove(PAGE);

        debug!(
            "Sorting by {:?} (was ascending: {})",
            event.element_key, event.is_ascending
        );
        let target = self.target_for(&params);
        self.navigate(target)
    }

    fn replace_with_per_page(&self, value: &str) -> String {
        let value = params::encode_component(value, self.config.serializer.percent_encode);
        format!("?{}={}", PER_PAGE, value)
    }

    fn target_for(&self, params: &ParameterMap) -> String {
        let query = params::serialize_query(params, self.config.parser.key_value_order, &self.config.serializer);
        format!("?{}", query)
    }

    fn navigate(&mut self, target: String) -> Result<String> {
        with_navigation_context(self.port.navigate_to(&target), &target)?;
        Ok(target)
    }
}

/// Clicking an ascending column flips it to descending, anything else sorts ascending
fn sort_value(event: &SortEvent) -> String {
    if event.is_ascending {
        format!("{}{}", event.element_key, DESC_SUFFIX)
    } else {
        event.element_key.clone()
    }
}
