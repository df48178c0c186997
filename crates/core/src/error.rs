use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValdrError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Archive error in {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
    #[error("Malformed class file {entry} in {path}: {message}")]
    ClassFormat {
        path: PathBuf,
        entry: String,
        message: String,
    },
    #[error("Class file {entry} in {path} declares {declared}")]
    ClassNameMismatch {
        path: PathBuf,
        entry: String,
        declared: String,
    },
    #[error("Invalid exclusion pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Invalid options file {path}: {source}")]
    Options {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ValdrError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ValdrError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn archive(path: impl Into<PathBuf>, source: zip::result::ZipError) -> Self {
        ValdrError::Archive {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ValdrError>;
