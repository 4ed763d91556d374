//! Transport error type.

use thiserror::Error;

/// Failure of a single POST: the connection could not be made, the server
/// did not answer, or the body could not be read in full.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Curl reported an error (connect, send, receive, etc.).
    #[error("POST {url} failed: {source}")]
    Curl {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// Server answered with an HTTP error status.
    #[error("POST {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
}

impl TransportError {
    pub(crate) fn curl(url: &str, source: curl::Error) -> Self {
        TransportError::Curl {
            url: url.to_string(),
            source,
        }
    }

    /// True when nothing was received at all (connection or DNS failure).
    pub fn is_unreachable(&self) -> bool {
        match self {
            TransportError::Curl { source, .. } => {
                source.is_couldnt_connect()
                    || source.is_couldnt_resolve_host()
                    || source.is_couldnt_resolve_proxy()
                    || source.is_got_nothing()
            }
            TransportError::Http { .. } => false,
        }
    }
}
