//! Error handling for the transport core.
//!
//! Every failure of a [`call`](crate::client::Client::call) maps to exactly
//! one [`BotError`] variant, so callers can tell a local build problem from
//! a network fault from a server-reported rejection without parsing message
//! text.

mod conversions;

/// Errors produced by the transport core.
///
/// The variants mirror the stages of a call: build the request, send it,
/// read the body, decode the envelope, unwrap the result. `Api` is the one
/// expected-at-runtime variant. It carries the server's own description of
/// why the call was rejected and should be treated as a normal outcome by
/// calling code.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    /// The HTTP request could not be constructed from the given inputs.
    #[error("unable to build request: {0}")]
    RequestBuild(String),

    /// Network-level failure while executing the request.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response body could not be fully read.
    #[error("unable to read response body: {0}")]
    ResponseRead(String),

    /// The response body was not a valid `{ok, result, description}`
    /// envelope. Indicates a protocol mismatch, not a business error.
    #[error("malformed response envelope: {0}")]
    EnvelopeDecode(String),

    /// The server answered with `ok: false`; the payload is the server's
    /// free-text description.
    #[error("API error: {0}")]
    Api(String),

    /// The envelope was valid but `result` did not match the shape the
    /// caller asked for.
    #[error("unexpected result shape: {0}")]
    ResultDecode(String),

    /// Client misconfiguration detected before any request was made.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl BotError {
    /// Whether this is a server-reported (`ok: false`) rejection.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// The server's description when this is an [`BotError::Api`] failure.
    pub fn api_description(&self) -> Option<&str> {
        match self {
            Self::Api(description) => Some(description),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_exposes_description() {
        let err = BotError::Api("bad request".to_string());
        assert!(err.is_api_error());
        assert_eq!(err.api_description(), Some("bad request"));
        assert_eq!(err.to_string(), "API error: bad request");
    }

    #[test]
    fn non_api_errors_have_no_description() {
        let err = BotError::Transport("connection refused".to_string());
        assert!(!err.is_api_error());
        assert_eq!(err.api_description(), None);
    }
}
