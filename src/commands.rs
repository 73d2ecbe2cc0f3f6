use crate::cli::Command;
use crate::error::{Result, XpandrError};
use crate::storage::TriggerStore;
use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// A validated command, ready to run against a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Add { short: String, expansion: String },
    Expand { word: OsString },
    List,
    Remove { short: OsString },
    Dump,
}

impl Operation {
    /// Whether the store has to be written back after applying this operation
    pub fn is_mutating(&self) -> bool {
        matches!(self, Operation::Add { .. } | Operation::Remove { .. })
    }
}

impl TryFrom<Command> for Operation {
    type Error = XpandrError;

    fn try_from(command: Command) -> Result<Self> {
        match command {
            Command::Add { args } => {
                if args.len() < 2 {
                    return Err(XpandrError::Usage("xpandr add SHORT EXPANSION..."));
                }
                // JSON strings are UTF-8; invalid bytes become U+FFFD
                let mut words = args.iter().map(|a| a.to_string_lossy().into_owned());
                let short = words.next().unwrap_or_default();
                let expansion = words.collect::<Vec<_>>().join(" ");
                Ok(Operation::Add { short, expansion })
            }
            Command::Expand { args } => {
                let word = single(args, "xpandr expand WORD")?;
                Ok(Operation::Expand { word })
            }
            Command::List { .. } => Ok(Operation::List),
            Command::Rm { args } => {
                let short = single(args, "xpandr rm SHORT")?;
                Ok(Operation::Remove { short })
            }
            Command::Dump { .. } => Ok(Operation::Dump),
        }
    }
}

fn single(args: Vec<OsString>, usage: &'static str) -> Result<OsString> {
    match <[OsString; 1]>::try_from(args) {
        Ok([value]) => Ok(value),
        Err(_) => Err(XpandrError::Usage(usage)),
    }
}

/// Validate, load the store at `store_path`, run, and persist if it changed.
pub fn handle_command(command: Command, store_path: &Path, out: &mut impl Write) -> Result<()> {
    let operation = Operation::try_from(command)?;
    run_operation(&operation, store_path, out)
}

/// Load the store at `store_path`, apply `operation`, and save mutations.
pub fn run_operation(operation: &Operation, store_path: &Path, out: &mut impl Write) -> Result<()> {
    debug!(?operation, path = %store_path.display(), "dispatching");

    let mut store = TriggerStore::load(store_path)?;
    apply(operation, &mut store, out)?;

    if operation.is_mutating() {
        store.save()?;
    }
    Ok(())
}

/// Run one operation against an in-memory store, writing any output to `out`.
pub fn apply(operation: &Operation, store: &mut TriggerStore, out: &mut impl Write) -> Result<()> {
    match operation {
        Operation::Add { short, expansion } => {
            if let Some(previous) = store.insert(short.clone(), expansion.clone()) {
                debug!(%short, %previous, "overwriting trigger");
            }
        }
        Operation::Expand { word } => match word.to_str() {
            Some(word) => write!(out, "{}", store.expand(word))?,
            // Not UTF-8, so it cannot be a stored key
            None => write_raw(out, word)?,
        },
        Operation::List => list(store, out)?,
        Operation::Remove { short } => match short.to_str() {
            Some(short) => {
                store.remove(short)?;
            }
            None => return Err(XpandrError::NotFound(short.to_string_lossy().into_owned())),
        },
        Operation::Dump => {
            for (short, expansion) in store.iter() {
                writeln!(out, "{}\t{}", short, expansion)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(unix)]
fn write_raw(out: &mut impl Write, word: &OsStr) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    out.write_all(word.as_bytes())
}

#[cfg(not(unix))]
fn write_raw(out: &mut impl Write, word: &OsStr) -> io::Result<()> {
    out.write_all(word.to_string_lossy().as_bytes())
}

fn list(store: &TriggerStore, out: &mut impl Write) -> Result<()> {
    if store.is_empty() {
        writeln!(out, "No triggers defined.")?;
        return Ok(());
    }

    for (short, expansion) in store.iter() {
        writeln!(out, "{:<15} -> {}", short, expansion)?;
    }
    Ok(())
}
