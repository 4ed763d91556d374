//! How often a rejected credential may restart the workflow.

use crate::config::RetryConfig;

/// Decision after the upload endpoint rejected the credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Start over from credential acquisition.
    Restart,
    /// Stop and report the rejection as final.
    GiveUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialRetryPolicy {
    /// Restarts allowed per run; ignored when `unbounded`.
    pub max_restarts: u32,
    /// Re-prompt for as long as the server keeps rejecting.
    pub unbounded: bool,
}

impl Default for CredentialRetryPolicy {
    fn default() -> Self {
        Self {
            max_restarts: 1,
            unbounded: false,
        }
    }
}

impl From<&RetryConfig> for CredentialRetryPolicy {
    fn from(cfg: &RetryConfig) -> Self {
        Self {
            max_restarts: cfg.max_credential_retries,
            unbounded: cfg.reprompt_forever,
        }
    }
}

impl CredentialRetryPolicy {
    /// `rejections` counts credential rejections so far in this run (1-based).
    pub fn decide(&self, rejections: u32) -> RetryDecision {
        if self.unbounded || rejections <= self.max_restarts {
            RetryDecision::Restart
        } else {
            RetryDecision::GiveUp
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_restarts_exactly_once() {
        let p = CredentialRetryPolicy::default();
        assert_eq!(p.decide(1), RetryDecision::Restart);
        assert_eq!(p.decide(2), RetryDecision::GiveUp);
    }

    #[test]
    fn zero_never_restarts() {
        let p = CredentialRetryPolicy {
            max_restarts: 0,
            unbounded: false,
        };
        assert_eq!(p.decide(1), RetryDecision::GiveUp);
    }

    #[test]
    fn unbounded_always_restarts() {
        let p = CredentialRetryPolicy {
            max_restarts: 0,
            unbounded: true,
        };
        assert_eq!(p.decide(1), RetryDecision::Restart);
        assert_eq!(p.decide(1000), RetryDecision::Restart);
    }

    #[test]
    fn from_config() {
        let cfg = RetryConfig {
            max_credential_retries: 3,
            reprompt_forever: false,
        };
        let p = CredentialRetryPolicy::from(&cfg);
        assert_eq!(p.decide(3), RetryDecision::Restart);
        assert_eq!(p.decide(4), RetryDecision::GiveUp);
    }
}
