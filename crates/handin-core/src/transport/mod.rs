//! Blocking form-encoded HTTP POST.
//!
//! Uses the curl crate (libcurl `Easy` handle). One call is one request;
//! there are no retries at this layer.

mod easy;
mod error;
mod form;

pub use easy::CurlTransport;
pub use error::TransportError;
pub use form::FormPayload;

/// Sends a form payload and returns the full response body as text.
pub trait Transport {
    fn post(&mut self, url: &str, payload: &FormPayload) -> Result<String, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn post(&mut self, url: &str, payload: &FormPayload) -> Result<String, TransportError> {
        (**self).post(url, payload)
    }
}
