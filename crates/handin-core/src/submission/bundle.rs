//! Resolve an exercise's required files from the working directory.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::checksum;
use crate::error::HandinError;
use crate::exercises::ExerciseRequest;

/// One required source file, read in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File name on disk, e.g. `DieCup.java`.
    pub file_name: String,
    /// Upload field name: the lowercased stem, e.g. `diecup`.
    pub field: String,
    pub contents: String,
}

/// All files of one exercise, in table order.
#[derive(Debug, Clone)]
pub struct SourceBundle {
    pub dir: PathBuf,
    pub files: Vec<SourceFile>,
}

impl SourceBundle {
    /// Read every required `<stem><suffix>` from `dir`. Names must match
    /// exactly (case-sensitive, even on case-insensitive filesystems); the
    /// first missing file aborts.
    pub fn resolve(
        request: &ExerciseRequest,
        dir: &Path,
        suffix: &str,
    ) -> Result<Self, HandinError> {
        let present = list_file_names(dir)?;
        let mut files = Vec::with_capacity(request.files.len());
        for stem in &request.files {
            let file_name = format!("{}{}", stem, suffix);
            if !present.contains(&file_name) {
                return Err(HandinError::MissingFile {
                    file: file_name,
                    dir: dir.to_path_buf(),
                });
            }
            let path = dir.join(&file_name);
            let bytes = fs::read(&path).map_err(|source| HandinError::ReadSource {
                path: path.clone(),
                source,
            })?;
            let contents = match String::from_utf8(bytes) {
                Ok(s) => s,
                Err(e) => {
                    tracing::warn!(file = %file_name, "source is not valid UTF-8; replacing bad bytes");
                    String::from_utf8_lossy(e.as_bytes()).into_owned()
                }
            };
            tracing::debug!(
                file = %file_name,
                bytes = contents.len(),
                sha256 = %checksum::short_digest(contents.as_bytes()),
                "bundled source"
            );
            files.push(SourceFile {
                field: stem.to_lowercase(),
                file_name,
                contents,
            });
        }
        Ok(Self {
            dir: dir.to_path_buf(),
            files,
        })
    }
}

/// Presence report for one required file, used by dry runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatus {
    pub file_name: String,
    /// Size and SHA-256 hex digest when the file is present.
    pub found: Option<(u64, String)>,
}

/// Check every required file without stopping at the first missing one.
pub fn inspect(
    request: &ExerciseRequest,
    dir: &Path,
    suffix: &str,
) -> Result<Vec<FileStatus>, HandinError> {
    let present = list_file_names(dir)?;
    let mut report = Vec::with_capacity(request.files.len());
    for stem in &request.files {
        let file_name = format!("{}{}", stem, suffix);
        let found = if present.contains(&file_name) {
            let path = dir.join(&file_name);
            let bytes = fs::read(&path).map_err(|source| HandinError::ReadSource {
                path: path.clone(),
                source,
            })?;
            Some((bytes.len() as u64, checksum::sha256_hex(&bytes)))
        } else {
            None
        };
        report.push(FileStatus { file_name, found });
    }
    Ok(report)
}

/// Regular-file names directly inside `dir`.
fn list_file_names(dir: &Path) -> Result<HashSet<String>, HandinError> {
    let read_err = |source| HandinError::ReadSource {
        path: dir.to_path_buf(),
        source,
    };
    let mut names = HashSet::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if !entry.path().is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.insert(name.to_string());
        }
    }
    Ok(names)
}
