//! Error types for initial-condition generation.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InitError {
    #[error("IO error on \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("cannot parse \"{}\" line {line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("\"{}\" has {found} data rows, expected {expected}", path.display())]
    MissingRows {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("wrong size for {what}: expected {expected}, found {found}")]
    ShapeMismatch {
        what: String,
        expected: usize,
        found: usize,
    },

    #[error("initial condition type \"{0}\" not defined")]
    UnknownScenario(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("scenario {scenario} writes the {field} field, which is disabled")]
    MissingCapability {
        scenario: &'static str,
        field: &'static str,
    },

    #[error("scenario {scenario} needs a {collaborator}")]
    MissingCollaborator {
        scenario: &'static str,
        collaborator: &'static str,
    },

    #[error("non-finite {field} in cell {cell:?}")]
    NonFinite { field: &'static str, cell: [usize; 3] },
}

impl InitError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        InitError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, InitError>;
