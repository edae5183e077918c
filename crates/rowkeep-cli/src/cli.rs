//! CLI argument definitions for rowkeep.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use rowkeep_cli::form_args::parse_assignment;

#[derive(Parser)]
#[command(
    name = "rowkeep",
    version,
    about = "Keyed row upserts into a CSV table",
    long_about = "Save form submissions into a header-first CSV table.\n\n\
                  A submission whose key matches an existing row overwrites it;\n\
                  otherwise a new row is appended. The table can be kept sorted by key."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        default_value = "rowkeep.toml",
        global = true
    )]
    pub config: PathBuf,

    /// Table file to use instead of the configured one.
    #[arg(long = "table", value_name = "PATH", global = true)]
    pub table: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the table's columns and their roles.
    Schema,

    /// Save one row: update the row with the same key or append a new one.
    Submit(SubmitArgs),

    /// Show the stored row for a key.
    Show(ShowArgs),

    /// List every data row.
    List(ListArgs),

    /// Re-sort the table by key now.
    Sort,

    /// Remove every data row and keep the header.
    Clear,
}

#[derive(Parser)]
pub struct SubmitArgs {
    /// Key value. Date keys default to today.
    #[arg(long = "key", value_name = "VALUE")]
    pub key: Option<String>,

    /// Field value, repeatable.
    #[arg(
        short = 's',
        long = "set",
        value_name = "COLUMN=VALUE",
        value_parser = parse_assignment
    )]
    pub set: Vec<(String, String)>,

    /// Skip the re-sort after this write.
    #[arg(long = "no-sort")]
    pub no_sort: bool,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Key to look up, in any accepted spelling.
    #[arg(value_name = "KEY")]
    pub key: String,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Order rows by key without rewriting the table.
    #[arg(long = "sorted")]
    pub sorted: bool,

    /// Print rows as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn submit_collects_assignments() {
        let cli = Cli::try_parse_from([
            "rowkeep",
            "submit",
            "--key",
            "2025/01/10",
            "--set",
            "age=12",
            "-s",
            "note=",
            "--no-sort",
        ])
        .unwrap();
        let Command::Submit(args) = cli.command else {
            panic!("expected submit");
        };
        assert_eq!(args.key.as_deref(), Some("2025/01/10"));
        assert_eq!(
            args.set,
            vec![
                ("age".to_string(), "12".to_string()),
                ("note".to_string(), String::new())
            ]
        );
        assert!(args.no_sort);
        assert_eq!(cli.config, PathBuf::from("rowkeep.toml"));
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli =
            Cli::try_parse_from(["rowkeep", "list", "--table", "other.csv", "--json"]).unwrap();
        assert_eq!(cli.table, Some(PathBuf::from("other.csv")));
        assert!(matches!(cli.command, Command::List(ListArgs { json: true, .. })));
    }

    #[test]
    fn malformed_assignment_is_rejected() {
        assert!(Cli::try_parse_from(["rowkeep", "submit", "--set", "age"]).is_err());
    }
}
