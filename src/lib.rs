pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod navigation;
pub mod output;
pub mod params;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use log::debug;
use std::io::Write;

use crate::config::settings::{AppConfig, KeyValueOrder, PerPageMode};
use crate::errors::with_output_context;
use crate::navigation::{MemoryLocation, NavigationController, PerPageEvent, SortEvent};

/// CGI variable holding the current query when none is passed explicitly
pub const QUERY_STRING_VAR: &str = "QUERY_STRING";

pub fn interpret() -> Cli {
    Cli::parse()
}

/// Environment configuration with command line flags applied on top
pub fn load_config(cli: &Cli) -> AppConfig {
    let mut config = AppConfig::from_env();
    if cli.legacy_swap {
        config.parser.key_value_order = KeyValueOrder::LegacySwapped;
    }
    if cli.encode {
        config.serializer.percent_encode = true;
    }
    config
}

pub fn handle_parse(config: &AppConfig, query: Option<&str>, json: bool) -> Result<()> {
    let search = current_query(query);
    let params = params::parse_query(&search, config.parser.key_value_order);
    print_line(&output::render_params(&params, json)?)
}

pub fn handle_per_page(config: AppConfig, value: &str, query: Option<&str>, merge: bool) -> Result<()> {
    let target = per_page_target(config, value, current_query(query), merge)?;
    print_line(&output::render_target(&target))
}

pub fn handle_sort(config: AppConfig, key: &str, query: Option<&str>, ascending: Option<bool>) -> Result<()> {
    let target = sort_target(config, key, current_query(query), ascending)?;
    print_line(&output::render_target(&target))
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

/// Target reached from `search` after picking page size `value`
pub fn per_page_target(mut config: AppConfig, value: &str, search: String, merge: bool) -> Result<String> {
    if merge {
        config.navigation.per_page_mode = PerPageMode::Merge;
    }
    let mut controller = NavigationController::new(MemoryLocation::new(search), config);
    controller.on_per_page_change(&PerPageEvent::new(value))
}

/// Target reached from `search` after clicking the `key` header.
///
/// Without an explicit `ascending` the header state is read from `sort_by`.
pub fn sort_target(config: AppConfig, key: &str, search: String, ascending: Option<bool>) -> Result<String> {
    let mut controller = NavigationController::new(MemoryLocation::new(search), config);
    let event = match ascending {
        Some(ascending) => SortEvent::new(key, ascending),
        None => SortEvent::for_column(key, &controller.current_params()),
    };
    controller.on_sort_click(&event)
}

fn current_query(query: Option<&str>) -> String {
    current_query_from(query, |name| std::env::var(name).ok())
}

/// Explicit query, else `$QUERY_STRING` through `lookup`, else empty
pub fn current_query_from<F>(query: Option<&str>, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match query {
        Some(query) => query.to_string(),
        None => {
            debug!("No query given, reading ${}", QUERY_STRING_VAR);
            lookup(QUERY_STRING_VAR).unwrap_or_default()
        }
    }
}

fn print_line(line: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    with_output_context(writeln!(stdout, "{}", line), "to stdout")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_environment_config() {
        let cli = Cli::try_parse_from(["listing-nav", "--legacy-swap", "--encode", "parse"]).unwrap();
        let config = load_config(&cli);

        assert_eq!(config.parser.key_value_order, KeyValueOrder::LegacySwapped);
        assert!(config.serializer.percent_encode);
    }

    #[test]
    fn test_query_falls_back_to_query_string_variable() {
        let lookup = |name: &str| (name == QUERY_STRING_VAR).then(|| "sort_by=date".to_string());

        assert_eq!(current_query_from(None, lookup), "sort_by=date");
        assert_eq!(current_query_from(Some("?page=2"), lookup), "?page=2");
        assert_eq!(current_query_from(None, |_| None), "");
    }

    #[test]
    fn test_sort_infers_ascending_state_from_query() {
        let target = sort_target(AppConfig::new(), "name", "?sort_by=name".to_string(), None).unwrap();
        assert_eq!(target, "?sort_by=name_desc");

        let target = sort_target(AppConfig::new(), "name", "?sort_by=name_desc".to_string(), None).unwrap();
        assert_eq!(target, "?sort_by=name");
    }

    #[test]
    fn test_sort_explicit_state_overrides_query() {
        let target = sort_target(AppConfig::new(), "name", "?sort_by=name&page=3".to_string(), Some(false)).unwrap();
        assert_eq!(target, "?sort_by=name");

        let target = sort_target(AppConfig::new(), "date", "".to_string(), Some(true)).unwrap();
        assert_eq!(target, "?sort_by=date_desc");
    }

    #[test]
    fn test_per_page_merge_flag() {
        let search = "?sort_by=date&page=4".to_string();

        assert_eq!(per_page_target(AppConfig::new(), "20", search.clone(), false).unwrap(), "?per_page=20");
        assert_eq!(
            per_page_target(AppConfig::new(), "20", search, true).unwrap(),
            "?sort_by=date&per_page=20"
        );
    }
}
