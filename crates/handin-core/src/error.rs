//! Error taxonomy for a single workflow run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::transport::TransportError;

/// Anything that ends a run before the server's verdict is known.
///
/// Credential rejection and declined consent are not errors; they are
/// reported through [`crate::workflow::WorkflowOutcome`].
#[derive(Debug, Error)]
pub enum HandinError {
    #[error("invalid exercise: {0}.")]
    UnknownExercise(String),

    #[error("no file with this name '{file}' in folder {}.", .dir.display())]
    MissingFile { file: String, dir: PathBuf },

    #[error("read {}: {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("credential file {}: {source}", .path.display())]
    CredentialStore {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0} must not be empty")]
    EmptyCredential(&'static str),

    #[error("auID and upload code must not contain spaces")]
    CredentialWhitespace,

    #[error("console: {0}")]
    Console(#[source] io::Error),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl HandinError {
    /// True when the test server could not be reached at all.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, HandinError::Transport(e) if e.is_unreachable())
    }
}
