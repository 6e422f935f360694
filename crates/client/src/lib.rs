//! Slack Web API client for Block Kit messages.
//!
//! This crate provides:
//! - [`ApiClient`] for authenticated requests against the Slack Web API
//! - [`MessageClient`] for posting [`Message`](blockkit_core::Message)s
//! - [`SlackConfig`] for loading credentials from the environment or a YAML file
//!
//! # Example
//!
//! ```rust,no_run
//! use blockkit_client::SlackConfig;
//! use blockkit_core::{Header, Message, Section};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SlackConfig::from_env()?;
//! let client = config.message_client()?;
//!
//! let message = Message::build([
//!     blockkit_core::Content::from(Header::plain("Deploy finished")),
//!     Section::mrkdwn("*api* is live").into(),
//! ])?;
//!
//! let response = client.post(&message, "C0123456789").await?;
//! println!("posted at {:?}", response.ts);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod client;
mod config;
mod error;
mod messages;

pub use client::{ApiClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, Endpoint};
pub use config::{ConfigError, SlackConfig};
pub use error::PostMessageError;
pub use messages::{MAX_RESPONSE_BYTES, MessageClient, PostMessageResponse};
