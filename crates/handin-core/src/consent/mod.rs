//! Consent handshake with the test server.
//!
//! Consent lives server-side. The first call sends only the auID; if the
//! server does not report consent on file, the notice is shown and, on an
//! affirmative answer, a second call with auID and code records it.

mod notice;

pub use notice::{consent_question, CONSENT_NOTICE};

use crate::credentials::Credential;
use crate::error::HandinError;
use crate::prompt::Prompter;
use crate::response::ResponseKind;
use crate::transport::{FormPayload, Transport};

/// Server's answer to a consent request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsentStatus {
    Accepted,
    NeedsConsent,
    Invalid,
    OtherError(String),
}

/// Result of the whole handshake, including the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsentOutcome {
    Accepted,
    Declined,
    Invalid,
    OtherError(String),
}

#[derive(Debug, Clone)]
pub struct ConsentProtocol {
    url: String,
    affirmative: String,
}

impl ConsentProtocol {
    pub fn new(url: impl Into<String>, affirmative: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            affirmative: affirmative.into(),
        }
    }

    /// Ask whether consent is on file for `id`. Any reply other than the
    /// consent marker means the user still has to be asked.
    pub fn check_consent<T: Transport>(
        &self,
        transport: &mut T,
        id: &str,
    ) -> Result<ConsentStatus, HandinError> {
        let form = FormPayload::new().with("auID", id);
        let text = transport.post(&self.url, &form)?;
        let status = match ResponseKind::classify(&text) {
            ResponseKind::ConsentOk => ConsentStatus::Accepted,
            _ => ConsentStatus::NeedsConsent,
        };
        tracing::debug!(id, ?status, "consent probe");
        Ok(status)
    }

    /// Record consent for `credential` and classify the server's reply.
    pub fn record_consent<T: Transport>(
        &self,
        transport: &mut T,
        credential: &Credential,
    ) -> Result<ConsentStatus, HandinError> {
        let form = FormPayload::new()
            .with("auID", credential.id.as_str())
            .with("code", credential.code.as_str());
        let text = transport.post(&self.url, &form)?;
        let status = match ResponseKind::classify(&text) {
            ResponseKind::ConsentOk => ConsentStatus::Accepted,
            ResponseKind::InvalidCredential => ConsentStatus::Invalid,
            _ => ConsentStatus::OtherError(text.trim_end().to_string()),
        };
        tracing::info!(id = %credential.id, ?status, "consent confirmation");
        Ok(status)
    }

    /// Full handshake: probe, and if needed show the notice, ask, and record.
    pub fn ensure<T: Transport, P: Prompter>(
        &self,
        transport: &mut T,
        prompter: &mut P,
        credential: &Credential,
    ) -> Result<ConsentOutcome, HandinError> {
        if self.check_consent(transport, &credential.id)? == ConsentStatus::Accepted {
            return Ok(ConsentOutcome::Accepted);
        }

        prompter.say("").map_err(HandinError::Console)?;
        prompter.say(CONSENT_NOTICE).map_err(HandinError::Console)?;
        let answer = prompter
            .ask(&consent_question(&self.affirmative))
            .map_err(HandinError::Console)?;
        if !self.is_affirmative(&answer) {
            tracing::info!(id = %credential.id, "consent declined");
            return Ok(ConsentOutcome::Declined);
        }

        let outcome = match self.record_consent(transport, credential)? {
            ConsentStatus::Accepted => {
                prompter.say("").map_err(HandinError::Console)?;
                ConsentOutcome::Accepted
            }
            ConsentStatus::Invalid => ConsentOutcome::Invalid,
            ConsentStatus::OtherError(msg) => ConsentOutcome::OtherError(msg),
            // The server never asks twice.
            ConsentStatus::NeedsConsent => ConsentOutcome::Declined,
        };
        Ok(outcome)
    }

    fn is_affirmative(&self, answer: &str) -> bool {
        answer.trim().to_lowercase() == self.affirmative.to_lowercase()
    }
}
