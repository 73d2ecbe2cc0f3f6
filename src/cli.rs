use clap::{Parser, Subcommand};
use std::ffi::OsString;

pub const USAGE: &str = "Usage:
  xpandr add SHORT EXPANSION...
  xpandr expand WORD
  xpandr list
  xpandr rm SHORT
  xpandr dump

Examples:
  xpandr add gc \"git commit\"
  xpandr expand gc
";

/// Arguments that ask for the usage banner instead of a command.
pub const HELP_ALIASES: [&str; 3] = ["-h", "--help", "help"];

/// Names accepted as the first argument.
pub const SUBCOMMANDS: [&str; 5] = ["add", "expand", "list", "rm", "dump"];

#[derive(Parser, Debug)]
#[command(
    name = "xpandr",
    about = "xpandr - a text expansion trigger manager",
    disable_help_flag = true,
    disable_help_subcommand = true
)]
pub struct Xpandr {
    #[command(subcommand)]
    pub command: Command,
}

// Positional counts are checked when the command runs, not by clap, so a
// wrong count is reported as `Error: usage: ...` with exit code 1. Values
// stay as raw OS strings so non UTF-8 words can still pass through `expand`.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add or replace a trigger
    #[command(disable_help_flag = true)]
    Add {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<OsString>,
    },
    /// Print the expansion of a word, or the word itself
    #[command(disable_help_flag = true)]
    Expand {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<OsString>,
    },
    /// List all triggers
    #[command(disable_help_flag = true)]
    List {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        args: Vec<OsString>,
    },
    /// Remove a trigger
    #[command(disable_help_flag = true)]
    Rm {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<OsString>,
    },
    /// Print all triggers as tab-separated lines
    #[command(disable_help_flag = true)]
    Dump {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        args: Vec<OsString>,
    },
}
