//! Classify the test server's textual replies by prefix.

/// Consent endpoint accepted the request.
pub const CONSENT_OK_PREFIX: &str = "GDPR success";
/// Credential was rejected (both endpoints).
pub const INVALID_PREFIX: &str = "Invalid";
/// Upload was graded.
pub const SUCCESS_PREFIX: &str = "Success";

/// Meaning of a raw response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    ConsentOk,
    InvalidCredential,
    Success,
    Other,
}

impl ResponseKind {
    pub fn classify(text: &str) -> Self {
        if text.starts_with(CONSENT_OK_PREFIX) {
            ResponseKind::ConsentOk
        } else if text.starts_with(INVALID_PREFIX) {
            ResponseKind::InvalidCredential
        } else if text.starts_with(SUCCESS_PREFIX) {
            ResponseKind::Success
        } else {
            ResponseKind::Other
        }
    }
}
