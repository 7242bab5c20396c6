//! Client layer: the authenticated HTTP core and the SMS builder on top of it.

use std::error::Error as StdError;

use crate::domain::ValidationError;

mod http;
mod sms;

pub use http::{Core, CoreBuilder, HttpResponse};
pub use sms::Sms;

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`Core`] and [`Sms`].
///
/// Validation errors are raised before any I/O. Nothing is retried.
pub enum K1ngError {
    /// The host URL could not be parsed.
    #[error("invalid host URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The draft is incomplete.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Only `GET` and `POST` are supported by [`Core::consume`].
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(reqwest::Method),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The server answered with a status other than 200.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be decoded as the expected JSON.
    #[error("decode error: {0}")]
    Decode(#[source] Box<dyn StdError + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_their_cause() {
        let err = K1ngError::from(ValidationError::EmptyDestination);
        assert_eq!(
            err.to_string(),
            "validation error: destination must not be empty"
        );

        let err = K1ngError::UnsupportedMethod(reqwest::Method::DELETE);
        assert_eq!(err.to_string(), "unsupported HTTP method: DELETE");

        let err = K1ngError::HttpStatus {
            status: 502,
            body: None,
        };
        assert_eq!(err.to_string(), "unexpected HTTP status: 502");
    }
}
