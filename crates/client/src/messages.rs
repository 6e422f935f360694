//! Posting Block Kit messages.

use blockkit_core::Message;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use crate::client::{ApiClient, Endpoint};
use crate::error::PostMessageError;

/// Largest response body read from Slack, in bytes.
pub const MAX_RESPONSE_BYTES: usize = 32 * 1024;

/// Slack warns when the charset is left out.
const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Request body for `chat.postMessage`: the channel next to the message fields.
#[derive(Serialize)]
struct PostMessageRequest<'a> {
    channel: &'a str,
    #[serde(flatten)]
    message: &'a Message,
}

/// Response from `chat.postMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostMessageResponse {
    /// Whether Slack accepted the message.
    pub ok: bool,
    /// Channel the message was posted to.
    #[serde(default)]
    pub channel: Option<String>,
    /// Message timestamp, Slack's message identifier.
    #[serde(default)]
    pub ts: Option<String>,
    /// Error code when `ok` is false.
    #[serde(default)]
    pub error: Option<String>,
}

/// Posts Block Kit messages to channels.
#[derive(Debug, Clone)]
pub struct MessageClient {
    api: ApiClient,
}

impl MessageClient {
    /// Create a message client on top of an authenticated API client.
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// The underlying API client.
    #[must_use]
    pub const fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Post a message to a channel.
    ///
    /// # Errors
    ///
    /// - [`PostMessageError::Http`] if Slack answers with a non-200 status
    /// - [`PostMessageError::Slack`] if Slack answers `"ok": false`
    /// - [`PostMessageError::Request`] if the request cannot be sent
    /// - [`PostMessageError::Response`] or [`PostMessageError::ResponseTooLarge`]
    ///   if the response body cannot be read
    #[instrument(skip(self, message), fields(channel = %channel, blocks = message.blocks().len()))]
    pub async fn post(
        &self,
        message: &Message,
        channel: &str,
    ) -> Result<PostMessageResponse, PostMessageError> {
        let body = serde_json::to_vec(&PostMessageRequest { channel, message })
            .map_err(PostMessageError::Encode)?;

        let mut response = self
            .api
            .post(Endpoint::ChatPostMessage)?
            .header(CONTENT_TYPE, JSON_UTF8)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            error!(status = %status, "Slack returned an HTTP error posting message");
            return Err(PostMessageError::Http {
                status: status.as_u16(),
            });
        }

        let body = read_body(&mut response, MAX_RESPONSE_BYTES).await?;
        let result: PostMessageResponse =
            serde_json::from_slice(&body).map_err(PostMessageError::Response)?;

        if !result.ok {
            error!(error = ?result.error, "Slack API error posting message");
            return Err(PostMessageError::Slack {
                error: result.error,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        debug!(ts = ?result.ts, channel = ?result.channel, "Message posted to Slack");

        Ok(result)
    }
}

/// Collect a response body, failing once it grows past `limit` bytes.
async fn read_body(
    response: &mut reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, PostMessageError> {
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if body.len() + chunk.len() > limit {
            return Err(PostMessageError::ResponseTooLarge { limit });
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}
