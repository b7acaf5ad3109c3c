use anyhow::Result;

use listing_nav::cli::{Cli, Command};
use listing_nav::{handle_completions, handle_parse, handle_per_page, handle_sort, interpret, load_config};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = load_config(cli);
    match &cli.command {
        Command::Parse { query, json } => handle_parse(&config, query.as_deref(), *json),
        Command::PerPage { value, query, merge } => handle_per_page(config, value, query.as_deref(), *merge),
        Command::Sort { key, query, ascending } => handle_sort(config, key, query.as_deref(), *ascending),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
