//! Message container.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Block;
use crate::codec::{self, CodecError};

/// A Block Kit message: an ordered sequence of blocks.
///
/// Serializes as `{"blocks": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    blocks: Vec<Block>,
}

/// Container shape read before the blocks are decoded one by one.
#[derive(Deserialize)]
struct RawMessage {
    blocks: Vec<Value>,
}

impl Message {
    /// Create a message from already tagged blocks.
    #[must_use]
    pub const fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// The blocks, in display order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Consume the message and return its blocks.
    #[must_use]
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    /// Encode the message as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Json`] if a payload fails to serialize.
    pub fn to_json(&self) -> Result<String, CodecError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a message from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Json`] for malformed JSON or a missing `blocks`
    /// array, and the typed codec error of the first block that fails.
    pub fn from_json(json: &str) -> Result<Self, CodecError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Decode a message from a parsed JSON value.
    ///
    /// # Errors
    ///
    /// Same as [`Message::from_json`].
    pub fn from_value(value: Value) -> Result<Self, CodecError> {
        let raw: RawMessage = serde_json::from_value(value)?;
        Ok(Self::new(codec::decode_all(raw.blocks)?))
    }
}

impl From<Vec<Block>> for Message {
    fn from(blocks: Vec<Block>) -> Self {
        Self::new(blocks)
    }
}

impl FromIterator<Block> for Message {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
