//! Submission workflow: credential → consent → upload, with bounded restart
//! when the server rejects the credential.
//!
//! States: `Init → HasCredential → ConsentChecked → Submitted`, ending in
//! [`WorkflowOutcome::Done`] or [`WorkflowOutcome::Aborted`]. A credential
//! rejection on upload deletes the cached credential and loops back to
//! `Init` as long as [`CredentialRetryPolicy`] allows.

mod policy;

pub use policy::{CredentialRetryPolicy, RetryDecision};

use std::path::{Path, PathBuf};

use crate::config::HandinConfig;
use crate::consent::{ConsentOutcome, ConsentProtocol};
use crate::credentials::{Credential, CredentialStore};
use crate::error::HandinError;
use crate::exercises::ExerciseRequest;
use crate::prompt::Prompter;
use crate::response::ResponseKind;
use crate::submission::Submission;
use crate::transport::Transport;

const CREDENTIAL_INTRO: &str = "\
It looks like you have not uploaded to the test server yet.
To continue we need your auID and upload code (found on Blackboard under My Grades).
Enter auID: ";
const CODE_QUESTION: &str = "Enter upload code: ";
const WRONG_CREDENTIAL: &str = "\nWrong auID or upload code.";

/// How a run ended. Errors that stop a run early are [`HandinError`]s instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// The upload endpoint answered; `accepted` is true for a success marker.
    Done { response: String, accepted: bool },
    Aborted(AbortReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    ConsentDeclined,
    /// Consent endpoint rejected the credential; it has been deleted.
    CredentialRejected,
    ConsentError(String),
    /// Upload endpoint kept rejecting credentials past the retry policy.
    RetriesExhausted,
}

#[derive(Debug)]
enum State {
    Init,
    HasCredential(Credential),
    ConsentChecked(Credential),
    Submitted(String),
}

impl State {
    fn name(&self) -> &'static str {
        match self {
            State::Init => "init",
            State::HasCredential(_) => "has-credential",
            State::ConsentChecked(_) => "consent-checked",
            State::Submitted(_) => "submitted",
        }
    }
}

pub struct Workflow<T, P> {
    consent: ConsentProtocol,
    store: CredentialStore,
    upload_url: String,
    work_dir: PathBuf,
    suffix: String,
    policy: CredentialRetryPolicy,
    transport: T,
    prompter: P,
}

impl<T: Transport, P: Prompter> Workflow<T, P> {
    pub fn from_config(cfg: &HandinConfig, work_dir: &Path, transport: T, prompter: P) -> Self {
        Self {
            consent: ConsentProtocol::new(cfg.consent_url.as_str(), cfg.affirmative.as_str()),
            store: CredentialStore::new(cfg.credential_path(work_dir)),
            upload_url: cfg.upload_url.clone(),
            work_dir: work_dir.to_path_buf(),
            suffix: cfg.source_suffix.clone(),
            policy: CredentialRetryPolicy::from(&cfg.retry_or_default()),
            transport,
            prompter,
        }
    }

    pub fn with_policy(mut self, policy: CredentialRetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn into_parts(self) -> (T, P) {
        (self.transport, self.prompter)
    }

    /// Run the workflow for one exercise. All required files are read before
    /// the first prompt or network call.
    pub fn run(&mut self, request: &ExerciseRequest) -> Result<WorkflowOutcome, HandinError> {
        let submission = Submission::prepare(request, &self.work_dir, &self.suffix)?;
        let mut rejections = 0u32;
        let mut state = State::Init;

        loop {
            tracing::debug!(exercise = %request.key, state = state.name(), "workflow step");
            state = match state {
                State::Init => State::HasCredential(self.acquire_credential()?),

                State::HasCredential(credential) => {
                    match self
                        .consent
                        .ensure(&mut self.transport, &mut self.prompter, &credential)?
                    {
                        ConsentOutcome::Accepted => State::ConsentChecked(credential),
                        ConsentOutcome::Declined => {
                            return Ok(WorkflowOutcome::Aborted(AbortReason::ConsentDeclined));
                        }
                        ConsentOutcome::Invalid => {
                            self.say(WRONG_CREDENTIAL)?;
                            self.store.invalidate()?;
                            return Ok(WorkflowOutcome::Aborted(AbortReason::CredentialRejected));
                        }
                        ConsentOutcome::OtherError(msg) => {
                            self.say(&format!("\n{}", msg))?;
                            return Ok(WorkflowOutcome::Aborted(AbortReason::ConsentError(msg)));
                        }
                    }
                }

                State::ConsentChecked(credential) => State::Submitted(submission.send(
                    &mut self.transport,
                    &self.upload_url,
                    &credential,
                )?),

                State::Submitted(response) => {
                    self.say(response.trim_end())?;
                    match ResponseKind::classify(&response) {
                        ResponseKind::InvalidCredential => {
                            self.store.invalidate()?;
                            rejections += 1;
                            match self.policy.decide(rejections) {
                                RetryDecision::Restart => {
                                    tracing::info!(
                                        exercise = %request.key,
                                        rejections,
                                        "credential rejected; starting over"
                                    );
                                    State::Init
                                }
                                RetryDecision::GiveUp => {
                                    tracing::warn!(
                                        exercise = %request.key,
                                        rejections,
                                        "credential rejected; giving up"
                                    );
                                    return Ok(WorkflowOutcome::Aborted(
                                        AbortReason::RetriesExhausted,
                                    ));
                                }
                            }
                        }
                        kind => {
                            let accepted = kind == ResponseKind::Success;
                            tracing::info!(exercise = %request.key, accepted, "upload finished");
                            return Ok(WorkflowOutcome::Done { response, accepted });
                        }
                    }
                }
            };
        }
    }

    /// Cached credential, or ask for one and persist it before continuing.
    fn acquire_credential(&mut self) -> Result<Credential, HandinError> {
        if let Some(credential) = self.store.load() {
            tracing::debug!(id = %credential.id, "using cached credential");
            return Ok(credential);
        }
        let id = self
            .prompter
            .ask(CREDENTIAL_INTRO)
            .map_err(HandinError::Console)?;
        let code = self
            .prompter
            .ask(CODE_QUESTION)
            .map_err(HandinError::Console)?;
        let credential = Credential::new(&id, &code)?;
        self.store.save(&credential)?;
        Ok(credential)
    }

    fn say(&mut self, message: &str) -> Result<(), HandinError> {
        self.prompter.say(message).map_err(HandinError::Console)
    }
}
