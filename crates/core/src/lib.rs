//! Block Kit core - flat tagged-union codec and message model.
//!
//! This crate provides the pieces shared by every Block Kit component:
//! - `client` - Authenticated Slack Web API client that posts messages
//! - `cli` - Command-line tool that builds and posts an example message
//!
//! # Architecture
//!
//! The core crate contains only types, traits and pure functions - no I/O, no
//! HTTP clients. Encoding, decoding and building never block and hold no shared
//! state, so every operation is safe to call from any thread.
//!
//! # Modules
//!
//! - [`codec`] - Shadow enums, tag resolution and the flat union codec
//! - [`types`] - Block Kit payload records and the unions built on the codec
//! - [`builder`] - Assembly of untagged content into tagged variant sequences
//!
//! # Example
//!
//! ```
//! use blockkit_core::{Content, Context, Header, Image, Message, Mrkdwn, Section};
//!
//! let message = Message::build([
//!     Content::from(Header::plain("Header")),
//!     Section::mrkdwn("Section").into(),
//!     Context::build([
//!         Content::from(Image::new("https://example.com", "Alt text")),
//!         Mrkdwn::from("User").into(),
//!     ])?
//!     .into(),
//! ])?;
//!
//! assert_eq!(message.blocks().len(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod builder;
pub mod codec;
pub mod types;

pub use builder::{BuildError, Content, FromContent, build};
pub use codec::{CodecError, FlatUnion, ShadowEnum, TAG_KEY, TagResolver, tag_of};
pub use types::*;
