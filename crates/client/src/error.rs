//! Message posting errors.

use thiserror::Error;

/// Errors that can occur when posting a message to Slack.
#[derive(Debug, Error)]
pub enum PostMessageError {
    /// The request could not be sent or its body could not be read.
    #[error("Slack request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint URL could not be built from the base URL.
    #[error("invalid Slack endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    /// The request body could not be encoded.
    #[error("failed to encode message: {0}")]
    Encode(#[source] serde_json::Error),

    /// Slack answered with a non-200 status.
    #[error("Slack returned HTTP {status}")]
    Http {
        /// HTTP status code.
        status: u16,
    },

    /// Slack answered 200 but rejected the message (`"ok": false`).
    #[error("Slack API error: {}", error.as_deref().unwrap_or("unknown error"))]
    Slack {
        /// Error code reported by Slack, e.g. `channel_not_found`.
        error: Option<String>,
        /// Full response body.
        body: String,
    },

    /// The response body was not a valid API response.
    #[error("Slack response error: {0}")]
    Response(#[source] serde_json::Error),

    /// The response body exceeded the read limit.
    #[error("Slack response exceeded {limit} bytes")]
    ResponseTooLarge {
        /// Maximum number of bytes read.
        limit: usize,
    },
}

impl PostMessageError {
    /// HTTP status code, for HTTP-level failures.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status } => Some(*status),
            _ => None,
        }
    }
}
