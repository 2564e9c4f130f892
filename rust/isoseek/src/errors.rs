use crate::serde::peaks_io::PeaksReadingError;
use std::fmt::Display;
use std::path::PathBuf;

/// Top-level error type for the isoseek library.
#[derive(Debug)]
pub enum IsoseekError {
    Io {
        source: std::io::Error,
        path: Option<PathBuf>,
    },
    PeaksReading(PeaksReadingError),
    Pattern(regex::Error),
}

impl Display for IsoseekError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub type Result<T> = std::result::Result<T, IsoseekError>;

impl From<PeaksReadingError> for IsoseekError {
    fn from(x: PeaksReadingError) -> Self {
        Self::PeaksReading(x)
    }
}

impl From<regex::Error> for IsoseekError {
    fn from(x: regex::Error) -> Self {
        Self::Pattern(x)
    }
}

impl From<std::io::Error> for IsoseekError {
    fn from(x: std::io::Error) -> Self {
        Self::Io {
            source: x,
            path: None,
        }
    }
}
