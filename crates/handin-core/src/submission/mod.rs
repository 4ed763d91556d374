//! Submission protocol: bundle sources, build the upload form, POST it.

mod bundle;

pub use bundle::{inspect, FileStatus, SourceBundle, SourceFile};

use std::path::Path;

use crate::credentials::Credential;
use crate::error::HandinError;
use crate::exercises::ExerciseRequest;
use crate::transport::{FormPayload, Transport};

/// An exercise whose files have all been read; ready to upload with any credential.
#[derive(Debug, Clone)]
pub struct Submission {
    request: ExerciseRequest,
    bundle: SourceBundle,
}

impl Submission {
    /// Resolve every required file. Fails before any network traffic if one is missing.
    pub fn prepare(
        request: &ExerciseRequest,
        dir: &Path,
        suffix: &str,
    ) -> Result<Self, HandinError> {
        let bundle = SourceBundle::resolve(request, dir, suffix)?;
        Ok(Self {
            request: request.clone(),
            bundle,
        })
    }

    /// Upload form: `h`, `auID`, `code`, then one field per file.
    pub fn payload(&self, credential: &Credential) -> FormPayload {
        let mut form = FormPayload::new()
            .with("h", self.request.upload_tag())
            .with("auID", credential.id.as_str())
            .with("code", credential.code.as_str());
        for file in &self.bundle.files {
            form.insert(file.field.as_str(), file.contents.as_str());
        }
        form
    }

    /// POST the upload and hand back the raw response text.
    pub fn send<T: Transport>(
        &self,
        transport: &mut T,
        upload_url: &str,
        credential: &Credential,
    ) -> Result<String, HandinError> {
        let payload = self.payload(credential);
        tracing::info!(
            exercise = %self.request.key,
            tag = %payload.get("h").unwrap_or_default(),
            files = self.bundle.files.len(),
            "uploading"
        );
        Ok(transport.post(upload_url, &payload)?)
    }
}

/// Resolve files and upload in one step.
pub fn submit<T: Transport>(
    request: &ExerciseRequest,
    credential: &Credential,
    dir: &Path,
    suffix: &str,
    transport: &mut T,
    upload_url: &str,
) -> Result<String, HandinError> {
    Submission::prepare(request, dir, suffix)?.send(transport, upload_url, credential)
}
