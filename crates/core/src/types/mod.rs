//! Block Kit message model.
//!
//! Each union is declared with [`flat_union!`](crate::flat_union) and encodes as
//! a flat object tagged by its `type` key.

pub mod block;
pub mod element;
pub mod message;
pub mod text;

pub use block::{Block, BlockType, Context, Header, Section};
pub use element::{ContextElement, ContextElementType, Image};
pub use message::Message;
pub use text::{Mrkdwn, PlainText, Text, TextType};
