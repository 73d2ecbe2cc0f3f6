use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XpandrError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("no such abbreviation: {0}")]
    NotFound(String),
    #[error("could not determine the user's home directory")]
    HomeDirNotFound,
}

pub type Result<T> = std::result::Result<T, XpandrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_and_not_found_messages() {
        let usage = XpandrError::Usage("xpandr rm SHORT");
        assert_eq!(usage.to_string(), "usage: xpandr rm SHORT");

        let missing = XpandrError::NotFound("gc".to_string());
        assert_eq!(missing.to_string(), "no such abbreviation: gc");
    }

    #[test]
    fn io_errors_convert() {
        let err: XpandrError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, XpandrError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }
}
