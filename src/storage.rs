use crate::error::{Result, XpandrError};
use crate::models::Triggers;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// The trigger mapping together with the file it was loaded from.
#[derive(Debug, Clone)]
pub struct TriggerStore {
    path: PathBuf,
    triggers: Triggers,
}

impl TriggerStore {
    /// Load the store at `path`; a missing file is an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let content = match fs::read(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no trigger file yet, starting empty");
                return Ok(Self {
                    path,
                    triggers: Triggers::new(),
                });
            }
            Err(err) => return Err(err.into()),
        };

        // A literal `null` is treated like an empty object
        let triggers: Option<Triggers> = serde_json::from_slice(&content)?;
        let triggers = triggers.unwrap_or_default();
        debug!(path = %path.display(), count = triggers.len(), "loaded triggers");

        Ok(Self { path, triggers })
    }

    /// Write the whole mapping back as pretty-printed JSON (mode 0644).
    ///
    /// The content goes to a temporary file next to the real store file and
    /// is then renamed over it, so readers never see a half-written file. A
    /// symlinked store is updated at its target and the link is kept.
    pub fn save(&self) -> Result<()> {
        let serialized = serde_json::to_string_pretty(&self.triggers)?;

        let target = self.write_target()?;

        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(serialized.as_bytes())?;
        tmp.flush()?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))?;
        }

        tmp.persist(&target).map_err(|e| e.error)?;
        debug!(path = %target.display(), count = self.triggers.len(), "saved triggers");

        Ok(())
    }

    /// The regular file a save should replace, following symlinks.
    fn write_target(&self) -> Result<PathBuf> {
        match fs::canonicalize(&self.path) {
            Ok(real) => Ok(real),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                // dangling link: create its target rather than replace the link
                match fs::read_link(&self.path) {
                    Ok(dest) => Ok(self
                        .path
                        .parent()
                        .map(|parent| parent.join(&dest))
                        .unwrap_or(dest)),
                    Err(_) => Ok(self.path.clone()),
                }
            }
            Err(err) => Err(err.into()),
        }
    }

    #[cfg(test)]
    pub(crate) fn triggers(&self) -> &Triggers {
        &self.triggers
    }

    #[cfg(test)]
    pub(crate) fn get(&self, short: &str) -> Option<&str> {
        self.triggers.get(short)
    }

    /// Expansion for `word`, or `word` itself when it is not a trigger
    pub fn expand<'a>(&'a self, word: &'a str) -> &'a str {
        self.triggers.get(word).unwrap_or(word)
    }

    /// Set or silently overwrite a trigger, returning the old expansion
    pub fn insert(&mut self, short: String, expansion: String) -> Option<String> {
        self.triggers.insert(short, expansion)
    }

    pub fn remove(&mut self, short: &str) -> Result<String> {
        self.triggers
            .remove(short)
            .ok_or_else(|| XpandrError::NotFound(short.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.triggers.iter()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}
