use std::fmt;

/// Errors raised at the fallible boundaries of the crate: untrusted pixel
/// grids, configuration values and files.
///
/// Dimension mismatches inside the numeric core are programmer errors and
/// panic instead.
#[derive(Debug)]
pub enum Error {
    InvalidShape(String),
    InvalidConfig(String),
    Io(std::io::Error),
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidShape(msg) => write!(f, "invalid shape: {msg}"),
            Error::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Error::Io(err) => write!(f, "io error: {err}"),
            Error::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}
