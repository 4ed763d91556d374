//! Cached credential pair persisted as a single line `<id> <code>`.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::HandinError;

/// Identifier/code pair authenticating the user to the test server.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub id: String,
    pub code: String,
}

impl Credential {
    /// Build a credential from user input; surrounding whitespace is dropped
    /// and both fields must be single non-empty tokens.
    pub fn new(id: &str, code: &str) -> Result<Self, HandinError> {
        let id = id.trim();
        let code = code.trim();
        if id.is_empty() {
            return Err(HandinError::EmptyCredential("auID"));
        }
        if code.is_empty() {
            return Err(HandinError::EmptyCredential("upload code"));
        }
        if id.contains(char::is_whitespace) || code.contains(char::is_whitespace) {
            return Err(HandinError::CredentialWhitespace);
        }
        Ok(Self {
            id: id.to_string(),
            code: code.to_string(),
        })
    }

    /// Parse the first line of a credential file. Anything short of two
    /// tokens counts as "no credential".
    pub fn parse_line(contents: &str) -> Option<Self> {
        let line = contents.lines().next()?;
        let mut tokens = line.split_whitespace();
        let id = tokens.next()?;
        let code = tokens.next()?;
        Some(Self {
            id: id.to_string(),
            code: code.to_string(),
        })
    }

    fn to_line(&self) -> String {
        format!("{} {}\n", self.id, self.code)
    }
}

// The code is a secret; keep it out of logs and panics.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("id", &self.id)
            .field("code", &"***")
            .finish()
    }
}

/// Credential file in the working directory (or wherever config points).
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cached credential. Missing, unreadable or malformed files all
    /// yield `None`.
    pub fn load(&self) -> Option<Credential> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "unreadable credential file: {}", e);
                return None;
            }
        };
        let credential = Credential::parse_line(&contents);
        if credential.is_none() {
            tracing::warn!(path = %self.path.display(), "ignoring malformed credential file");
        }
        credential
    }

    /// Replace the cached credential. The new line is written to a temp file
    /// beside the target and renamed over it, so readers see either the old
    /// record or the new one.
    pub fn save(&self, credential: &Credential) -> Result<(), HandinError> {
        let wrap = |source: io::Error| HandinError::CredentialStore {
            path: self.path.clone(),
            source,
        };
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(wrap)?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(wrap)?;
        tmp.write_all(credential.to_line().as_bytes()).map_err(wrap)?;
        tmp.flush().map_err(wrap)?;
        tmp.persist(&self.path).map_err(|e| wrap(e.error))?;
        tracing::info!(path = %self.path.display(), id = %credential.id, "saved credential");
        Ok(())
    }

    /// Delete the cached credential. Already absent is not an error.
    pub fn invalidate(&self) -> Result<(), HandinError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "deleted cached credential");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(HandinError::CredentialStore {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
