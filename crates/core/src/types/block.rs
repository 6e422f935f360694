//! Layout blocks.

use serde::{Deserialize, Serialize};

use super::{ContextElement, PlainText, Text};
use crate::flat_union;

/// Large bold text at the top of a message section.
///
/// The optional identifier is written under Block Kit's `block_id` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    text: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    block_id: Option<String>,
}

impl Header {
    /// Create a header from plain text.
    #[must_use]
    pub fn new(text: PlainText) -> Self {
        Self {
            text: Text::PlainText(text),
            block_id: None,
        }
    }

    /// Create a header from a bare string.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(PlainText::new(text))
    }

    /// Attach a block identifier.
    #[must_use]
    pub fn with_block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    /// The header text.
    #[must_use]
    pub const fn text(&self) -> &Text {
        &self.text
    }

    /// The block identifier, if set.
    #[must_use]
    pub fn block_id(&self) -> Option<&str> {
        self.block_id.as_deref()
    }
}

/// A block of text.
///
/// The optional identifier is written under Block Kit's `block_id` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    text: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    block_id: Option<String>,
}

impl Section {
    /// Create a section from any text object.
    #[must_use]
    pub const fn new(text: Text) -> Self {
        Self {
            text,
            block_id: None,
        }
    }

    /// Create a markdown section from a bare string.
    #[must_use]
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self::new(Text::mrkdwn(text))
    }

    /// Create a plain text section from a bare string.
    #[must_use]
    pub fn plain_text(text: impl Into<String>) -> Self {
        Self::new(Text::plain(text))
    }

    /// Attach a block identifier.
    #[must_use]
    pub fn with_block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    /// The section text.
    #[must_use]
    pub const fn text(&self) -> &Text {
        &self.text
    }

    /// The block identifier, if set.
    #[must_use]
    pub fn block_id(&self) -> Option<&str> {
        self.block_id.as_deref()
    }
}

/// Small secondary content: images and text, in order.
///
/// The optional identifier is written under Block Kit's `block_id` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    elements: Vec<ContextElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    block_id: Option<String>,
}

impl Context {
    /// Create a context block from already tagged elements.
    ///
    /// See also [`Context::build`] for untagged content.
    #[must_use]
    pub const fn new(elements: Vec<ContextElement>) -> Self {
        Self {
            elements,
            block_id: None,
        }
    }

    /// Attach a block identifier.
    #[must_use]
    pub fn with_block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    /// The elements, in display order.
    #[must_use]
    pub fn elements(&self) -> &[ContextElement] {
        &self.elements
    }

    /// The block identifier, if set.
    #[must_use]
    pub fn block_id(&self) -> Option<&str> {
        self.block_id.as_deref()
    }
}

flat_union! {
    /// A layout block of a message.
    pub enum Block / BlockType {
        Header(Header) = "header",
        Section(Section) = "section",
        Context(Context) = "context",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::codec::{CodecError, ShadowEnum, decode};
    use crate::types::{Image, Mrkdwn};

    #[test]
    fn test_header_encoding() {
        let block = Block::from(Header::plain("Header"));
        assert_eq!(
            serde_json::to_string(&block).expect("serialize"),
            r#"{"type":"header","text":{"type":"plain_text","text":"Header"}}"#
        );
    }

    #[test]
    fn test_block_id_round_trip() {
        let block = Block::from(Section::mrkdwn("Section").with_block_id("intro"));
        let value = serde_json::to_value(&block).expect("serialize");
        assert_eq!(
            value,
            json!({"type": "section", "text": {"type": "mrkdwn", "text": "Section"}, "block_id": "intro"})
        );
        let back: Block = decode(value).expect("decode");
        assert_eq!(back, block);
    }

    #[test]
    fn test_nested_unions_round_trip() {
        let block = Block::Context(Context::new(vec![
            Image::new("https://example.com", "Alt text").into(),
            Mrkdwn::new("User").with_verbatim(true).into(),
            PlainText::new(":wave:").with_emoji(true).into(),
        ]));
        let json = serde_json::to_string(&block).expect("serialize");
        let back: Block = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, block);
    }

    #[test]
    fn test_section_constructors() {
        assert_eq!(
            Section::mrkdwn("x"),
            Section::new(Text::Mrkdwn(Mrkdwn::new("x")))
        );
        assert_eq!(
            Section::plain_text("x"),
            Section::new(Text::PlainText(PlainText::new("x")))
        );
        assert_eq!(Header::plain("x"), Header::new(PlainText::from("x")));
    }

    #[test]
    fn test_nested_unknown_tag_is_payload_mismatch() {
        let err = decode::<Block>(json!({
            "type": "section",
            "text": {"type": "rich_text", "text": "x"}
        }))
        .unwrap_err();
        match err {
            CodecError::PayloadSchemaMismatch { union, tag, source } => {
                assert_eq!(union, "Block");
                assert_eq!(tag, "section");
                assert!(source.to_string().contains("unknown variant `rich_text`"));
            }
            other => panic!("expected PayloadSchemaMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_header_accepts_mrkdwn_on_decode() {
        let block: Block = decode(json!({"type": "header", "text": {"type": "mrkdwn", "text": "x"}}))
            .expect("decode");
        match block {
            Block::Header(header) => assert_eq!(header.text(), &Text::mrkdwn("x")),
            other => panic!("expected header, got {other:?}"),
        }
    }
}
