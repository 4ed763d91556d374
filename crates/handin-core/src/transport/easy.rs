//! libcurl-backed transport.

use std::time::Duration;

use super::{FormPayload, Transport, TransportError};

const USER_AGENT: &str = concat!("handin/", env!("CARGO_PKG_VERSION"));

/// Blocking POST through a fresh curl `Easy` handle per request.
///
/// No overall timeout is set: a server that never answers blocks the caller.
#[derive(Debug, Clone, Default)]
pub struct CurlTransport {
    connect_timeout: Option<Duration>,
}

impl CurlTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_connect_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

impl Transport for CurlTransport {
    fn post(&mut self, url: &str, payload: &FormPayload) -> Result<String, TransportError> {
        let body = payload.encode();
        let err = |e: curl::Error| TransportError::curl(url, e);

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(err)?;
        easy.useragent(USER_AGENT).map_err(err)?;
        easy.post(true).map_err(err)?;
        easy.post_field_size(body.len() as u64).map_err(err)?;
        easy.post_fields_copy(body.as_bytes()).map_err(err)?;
        if let Some(t) = self.connect_timeout {
            easy.connect_timeout(t).map_err(err)?;
        }

        let mut list = curl::easy::List::new();
        list.append("Content-Type: application/x-www-form-urlencoded; charset=UTF-8")
            .map_err(err)?;
        // No 100-continue round trip; the server answers only after the full body.
        list.append("Expect:").map_err(err)?;
        easy.http_headers(list).map_err(err)?;

        tracing::debug!(url, fields = payload.len(), bytes = body.len(), "POST");

        let mut response: Vec<u8> = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    response.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(err)?;
            transfer.perform().map_err(err)?;
        }

        let code = easy.response_code().map_err(err)?;
        tracing::debug!(url, code, bytes = response.len(), "POST response");
        if code >= 400 {
            return Err(TransportError::Http {
                url: url.to_string(),
                code,
            });
        }

        Ok(String::from_utf8_lossy(&response).into_owned())
    }
}
