// src/github/error.rs
// =============================================================================
// The ways a profile lookup can fail.
//
// Three named kinds cover the failures we can classify (bad endpoint, bad
// status, bad body). Anything else, like a refused connection or a DNS
// failure, lands in Transport so it never gets mistaken for one of them.
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    /// The endpoint built from the username is not a valid URL
    #[error("invalid endpoint URL")]
    MalformedEndpoint,
    /// The server answered with a status other than 200
    #[error("invalid response from server")]
    UnacceptableResponse,
    /// Status was 200 but the body is not a complete profile
    #[error("invalid data in response body")]
    UndecodableBody,
    /// Any other failure, e.g. the host could not be reached
    #[error("unexpected error: {0}")]
    Transport(#[source] reqwest::Error),
}

impl RequestError {
    /// Short label used when logging the failure.
    pub fn kind(&self) -> &'static str {
        match self {
            RequestError::MalformedEndpoint => "malformed-endpoint",
            RequestError::UnacceptableResponse => "unacceptable-response",
            RequestError::UndecodableBody => "undecodable-body",
            RequestError::Transport(_) => "unexpected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(RequestError::MalformedEndpoint.kind(), "malformed-endpoint");
        assert_eq!(RequestError::UnacceptableResponse.kind(), "unacceptable-response");
        assert_eq!(RequestError::UndecodableBody.kind(), "undecodable-body");
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(RequestError::UnacceptableResponse.to_string(), "invalid response from server");
        assert_eq!(RequestError::UndecodableBody.to_string(), "invalid data in response body");
    }
}
