use crate::config::StorageKind;

#[cfg(feature = "logging")]
use std::path::PathBuf;

use clap::{Parser, Subcommand};
#[cfg(feature = "logging")]
use flexi_logger::{LevelFilter as LogLevelFilter, LogSpecification};

#[derive(Parser, Debug)]
#[clap(name = "wanderlust", author, version, about)]
pub struct Args {
    /// Path or http(s) URL of the destinations document
    #[clap(short, long, display_order = 1)]
    source: Option<String>,

    /// Where the selected destination is handed over to the destination page
    #[clap(long, value_enum, display_order = 2)]
    storage: Option<StorageKind>,

    /// Path of the log file
    #[cfg(feature = "logging")]
    #[clap(long = "log-file", display_order = 3)]
    log_file_path: Option<PathBuf>,

    /// Log level
    #[cfg(feature = "logging")]
    #[clap(
        display_order = 4,
        long = "log-level",
        id = "LOG_LEVEL",
        default_value_t = LogLevelFilter::Info
    )]
    log_level_filter: LogLevelFilter,

    #[clap(subcommand)]
    command: Option<Command>,
}

impl Args {
    pub fn source(&self) -> &Option<String> {
        &self.source
    }

    pub fn storage(&self) -> Option<StorageKind> {
        self.storage
    }

    pub fn command(&self) -> &Option<Command> {
        &self.command
    }

    #[cfg(feature = "logging")]
    pub fn log_file_path(&self) -> &Option<PathBuf> {
        &self.log_file_path
    }

    #[cfg(feature = "logging")]
    pub fn log_specification(&self) -> LogSpecification {
        LogSpecification::builder()
            .default(self.log_level_filter)
            .finalize()
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Browse destinations
    #[clap(alias = "h", display_order = 1)]
    Home,

    /// Search destinations, starting with a query
    #[clap(alias = "s", display_order = 2)]
    Search { query: Option<String> },

    /// Show a destination
    #[clap(alias = "d", display_order = 3)]
    Destination {
        /// Name of the destination to show when none was selected
        #[clap(short, long)]
        name: Option<String>,
    },

    /// Fill in the contact form
    #[clap(alias = "c", display_order = 4)]
    Contact,
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_case::test_case;

    #[test_case(&["wanderlust"], None; "no command")]
    #[test_case(&["wanderlust", "h"], Some(Command::Home); "home alias")]
    #[test_case(&["wanderlust", "search", "paris"], Some(Command::Search { query: Some("paris".to_string()) }); "search with query")]
    #[test_case(&["wanderlust", "d", "--name", "Kyoto"], Some(Command::Destination { name: Some("Kyoto".to_string()) }); "destination by name")]
    #[test_case(&["wanderlust", "contact"], Some(Command::Contact); "contact")]
    fn test_commands(arguments: &[&str], expected: Option<Command>) {
        let args = Args::try_parse_from(arguments).unwrap();

        assert_eq!(args.command(), &expected);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "wanderlust",
            "--source",
            "https://example.com/api.json",
            "--storage",
            "file",
        ])
        .unwrap();

        assert_eq!(args.source(), &Some("https://example.com/api.json".to_string()));
        assert_eq!(args.storage(), Some(StorageKind::File));
    }
}
