use std::fmt::{Display, Formatter, Result as FmtResult};

/// Errors surfaced while loading and validating input files. All of these are
/// hard failures: a malformed roster or history log aborts the run rather
/// than producing a lineup from bad data.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Json(serde_json::Error),
    MalformedInput(String),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            LoadError::Io(err) => write!(f, "IO error: {}", err),
            LoadError::Json(err) => write!(f, "JSON error: {}", err),
            LoadError::MalformedInput(msg) => write!(f, "malformed input: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Json(err) => Some(err),
            LoadError::MalformedInput(_) => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Json(err)
    }
}

/// Helper type for loader results
pub type LoadResult<T> = Result<T, LoadError>;
