use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort loading definitions.
///
/// Variants never carry raw `.env` line contents so secrets stay out of
/// build logs.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed line {line} in .env: expected KEY=VALUE")]
    Parse { line: usize },

    /// Strict (dotenvy) syntax failure, `position` is the byte index in the
    /// offending line.
    #[error("invalid .env syntax at position {position}")]
    Syntax { position: usize },

    #[error("no macro definition at index {index}, only {len} defined")]
    Index { index: usize, len: usize },

    #[error("build environment has no {0} variable")]
    MissingVariable(String),

    /// Writing diagnostics or directives to the caller's sink failed.
    #[error("failed to write output")]
    Output(#[source] io::Error),

    #[error("failed to dump build environment")]
    Dump(#[from] serde_json::Error),
}

impl LoadError {
    pub(crate) fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LoadError::File {
            path: path.into(),
            source,
        }
    }
}
