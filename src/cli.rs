use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "listing-nav", author, version, about = "Query string helper for sortable, paginated listings")]
pub struct Cli {
    /// Read and write `a=b` pairs with value and key swapped
    #[arg(long, global = true)]
    pub legacy_swap: bool,

    /// Percent-encode keys and values in navigation targets
    #[arg(long, global = true)]
    pub encode: bool,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Print the parameters of a query string
    Parse {
        /// Query string (defaults to $QUERY_STRING)
        query: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Navigate after the page size selector changed
    PerPage {
        /// Selected page size
        value: String,
        /// Current query string (defaults to $QUERY_STRING)
        #[arg(short, long)]
        query: Option<String>,
        /// Keep the other parameters instead of replacing them
        #[arg(long)]
        merge: bool,
    },
    /// Navigate after a column header was clicked
    Sort {
        /// Column key of the clicked header
        key: String,
        /// Current query string (defaults to $QUERY_STRING)
        #[arg(short, long)]
        query: Option<String>,
        /// Whether the header shows ascending order (inferred from the query when omitted)
        #[arg(long, value_name = "BOOL")]
        ascending: Option<bool>,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_with_global_flags() {
        let cli = Cli::try_parse_from(["listing-nav", "sort", "name", "--query", "?page=2", "--legacy-swap"]).unwrap();

        assert!(cli.legacy_swap);
        assert_eq!(
            cli.command,
            Command::Sort {
                key: "name".to_string(),
                query: Some("?page=2".to_string()),
                ascending: None,
            }
        );
    }

    #[test]
    fn test_sort_ascending_can_be_forced_either_way() {
        for (raw, expected) in [("true", Some(true)), ("false", Some(false))] {
            let cli = Cli::try_parse_from(["listing-nav", "sort", "name", "--ascending", raw]).unwrap();
            match cli.command {
                Command::Sort { ascending, .. } => assert_eq!(ascending, expected),
                other => panic!("unexpected command: {other:?}"),
            }
        }
    }

    #[test]
    fn test_per_page_merge() {
        let cli = Cli::try_parse_from(["listing-nav", "per-page", "50", "--merge"]).unwrap();

        assert_eq!(
            cli.command,
            Command::PerPage {
                value: "50".to_string(),
                query: None,
                merge: true,
            }
        );
    }
}
