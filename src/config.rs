use crate::error::{Result, XpandrError};
use std::env;
use std::ffi::OsString;
use std::fs::DirBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const APP_DIR_NAME: &str = "xpandr";
pub const STORE_FILENAME: &str = "triggers.json";
pub const CONFIG_HOME_VAR: &str = "XDG_CONFIG_HOME";

/// Get the path to the trigger store, creating its directory if needed.
///
/// Uses `$XDG_CONFIG_HOME/xpandr/triggers.json`, falling back to
/// `$HOME/.config/xpandr/triggers.json` when the variable is unset or empty.
pub fn config_path() -> Result<PathBuf> {
    resolve_config_path(env::var_os(CONFIG_HOME_VAR), dirs::home_dir())
}

/// Resolve the store path from explicit inputs instead of the process environment.
pub fn resolve_config_path(
    xdg_config_home: Option<OsString>,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    let config_home = match xdg_config_home.filter(|v| !v.is_empty()) {
        Some(root) => PathBuf::from(root),
        None => home.ok_or(XpandrError::HomeDirNotFound)?.join(".config"),
    };

    let dir = config_home.join(APP_DIR_NAME);
    ensure_dir(&dir)?;

    Ok(dir.join(STORE_FILENAME))
}

/// Ensure the configuration directory exists (mode 0755 on unix)
pub fn ensure_dir(dir: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder.create(dir)?;
    debug!(dir = %dir.display(), "config directory ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn xdg_config_home_takes_precedence() {
        let xdg = tempdir().unwrap();
        let home = tempdir().unwrap();

        let path = resolve_config_path(
            Some(xdg.path().as_os_str().to_owned()),
            Some(home.path().to_path_buf()),
        )
        .unwrap();

        assert_eq!(path, xdg.path().join("xpandr").join("triggers.json"));
        assert!(xdg.path().join("xpandr").is_dir());
        assert!(!home.path().join(".config").exists());
    }

    #[test]
    fn empty_xdg_falls_back_to_home() {
        let home = tempdir().unwrap();

        let path =
            resolve_config_path(Some(OsString::new()), Some(home.path().to_path_buf())).unwrap();

        assert_eq!(
            path,
            home.path().join(".config").join("xpandr").join("triggers.json")
        );
        assert!(home.path().join(".config/xpandr").is_dir());
    }

    #[test]
    fn missing_home_is_an_error() {
        let err = resolve_config_path(None, None).unwrap_err();
        assert!(matches!(err, XpandrError::HomeDirNotFound));
    }

    #[cfg(unix)]
    #[test]
    fn directory_is_created_with_0755() {
        use std::os::unix::fs::PermissionsExt;

        let root = tempdir().unwrap();
        let dir = root.path().join("a").join("xpandr");
        ensure_dir(&dir).unwrap();

        let mode = std::fs::metadata(&dir).unwrap().permissions().mode() & 0o777;
        // umask can only clear bits
        assert_eq!(mode & !0o755, 0);
        assert_ne!(mode & 0o700, 0);
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let root = tempdir().unwrap();
        let dir = root.path().join("xpandr");
        ensure_dir(&dir).unwrap();
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }
}
