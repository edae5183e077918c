//! rowkeep CLI.

use clap::{ColorChoice, Parser};
use rowkeep_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    SubmitOutcome, open_engine, run_clear, run_list, run_schema, run_show, run_sort, run_submit,
};
use crate::summary::{
    print_rejected, print_rows, print_rows_json, print_saved, print_schema, print_sort,
};

/// Field errors the user can fix and resubmit.
const EXIT_REJECTED: i32 = 2;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let mut engine = open_engine(&cli.config, cli.table.as_deref())?;
    let code = match &cli.command {
        Command::Schema => {
            print_schema(&run_schema(&engine));
            0
        }
        Command::Submit(args) => match run_submit(&mut engine, args)? {
            SubmitOutcome::Saved(result) => {
                print_saved(&result);
                0
            }
            SubmitOutcome::Rejected(error) => {
                eprintln!("Submission rejected:");
                print_rejected(&error);
                EXIT_REJECTED
            }
        },
        Command::Show(args) => match run_show(&engine, args)? {
            Some(row) => {
                print_rows(engine.schema(), std::slice::from_ref(&row));
                0
            }
            None => {
                eprintln!("No row with key '{}'.", args.key);
                1
            }
        },
        Command::List(args) => {
            let rows = run_list(&engine, args)?;
            if args.json {
                print_rows_json(&rows)?;
            } else {
                print_rows(engine.schema(), &rows);
            }
            0
        }
        Command::Sort => {
            print_sort(&run_sort(&mut engine)?);
            0
        }
        Command::Clear => {
            run_clear(&mut engine)?;
            println!("Cleared all rows.");
            0
        }
    };
    Ok(code)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
