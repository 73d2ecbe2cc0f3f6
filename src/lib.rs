//! xpandr - a text expansion trigger manager.
//!
//! Keeps a persistent mapping from short abbreviations to expansion text and
//! resolves an abbreviation on demand, for use from shell or keyboard
//! expander integrations.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod storage;

use clap::Parser;
use std::ffi::OsString;
use std::io;
use std::process;

// Re-export
pub use cli::{Command, Xpandr, HELP_ALIASES, SUBCOMMANDS, USAGE};
pub use commands::{apply, handle_command, run_operation, Operation};
pub use config::{config_path, resolve_config_path};
pub use error::{Result, XpandrError};
pub use storage::TriggerStore;

/// Print the usage banner to stderr and exit with status 2
pub fn usage() -> ! {
    eprint!("{}", USAGE);
    process::exit(2);
}

/// Run the xpandr CLI application
pub fn run_main() {
    if let Err(e) = logging::init_logging() {
        eprintln!("{}", e);
    }

    let raw: Vec<OsString> = std::env::args_os().collect();
    let first = match raw.get(1) {
        None => usage(),
        Some(first) => first,
    };
    if first.to_str().is_some_and(|f| HELP_ALIASES.contains(&f)) {
        usage();
    }

    let args = match Xpandr::try_parse_from(&raw) {
        Ok(args) => args,
        Err(err) => {
            if !first.to_str().is_some_and(|f| SUBCOMMANDS.contains(&f)) {
                eprintln!("Unknown command: {}\n", first.to_string_lossy());
            }
            tracing::debug!(error = %err, "argument parsing failed");
            usage()
        }
    };

    // Argument counts are checked before the config directory is touched
    let result = Operation::try_from(args.command).and_then(|operation| {
        let path = config_path()?;
        run_operation(&operation, &path, &mut io::stdout().lock())
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
