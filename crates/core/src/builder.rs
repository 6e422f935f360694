//! Assembly of untagged content into tagged variant sequences.
//!
//! Callers hand over payloads as [`Content`], in order. [`build`] matches each
//! item against the cases of the target union and wraps it, failing on the
//! first item the union has no case for.

use thiserror::Error;

use crate::codec::FlatUnion;
use crate::types::{
    Block, Context, ContextElement, Header, Image, Message, Mrkdwn, PlainText, Section, Text,
};

/// Any payload that some union of the message model can hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Header block payload.
    Header(Header),
    /// Section block payload.
    Section(Section),
    /// Context block payload.
    Context(Context),
    /// Plain text payload.
    PlainText(PlainText),
    /// Markdown text payload.
    Mrkdwn(Mrkdwn),
    /// Image element payload.
    Image(Image),
}

impl Content {
    /// Name of the payload type, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Header(_) => "Header",
            Self::Section(_) => "Section",
            Self::Context(_) => "Context",
            Self::PlainText(_) => "PlainText",
            Self::Mrkdwn(_) => "Mrkdwn",
            Self::Image(_) => "Image",
        }
    }
}

macro_rules! content_from {
    ($($case:ident),+ $(,)?) => {
        $(
            impl From<$case> for Content {
                fn from(payload: $case) -> Self {
                    Self::$case(payload)
                }
            }
        )+
    };
}

content_from!(Header, Section, Context, PlainText, Mrkdwn, Image);

/// Errors produced while building a variant sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// An item's payload type is not a case of the target union.
    #[error("{content} at position {position} is not a case of {union}")]
    UnresolvedBuilderContent {
        /// Union being built.
        union: &'static str,
        /// Payload type of the rejected item.
        content: &'static str,
        /// Index of the rejected item.
        position: usize,
    },
}

/// A union that can be built from untagged [`Content`].
pub trait FromContent: FlatUnion {
    /// Wrap `content` in the case holding its payload type.
    ///
    /// # Errors
    ///
    /// Hands `content` back when the union has no such case.
    fn from_content(content: Content) -> Result<Self, Content>;
}

impl FromContent for Block {
    fn from_content(content: Content) -> Result<Self, Content> {
        match content {
            Content::Header(header) => Ok(Self::Header(header)),
            Content::Section(section) => Ok(Self::Section(section)),
            Content::Context(context) => Ok(Self::Context(context)),
            other => Err(other),
        }
    }
}

impl FromContent for ContextElement {
    fn from_content(content: Content) -> Result<Self, Content> {
        match content {
            Content::PlainText(text) => Ok(Self::PlainText(text)),
            Content::Mrkdwn(text) => Ok(Self::Mrkdwn(text)),
            Content::Image(image) => Ok(Self::Image(image)),
            other => Err(other),
        }
    }
}

impl FromContent for Text {
    fn from_content(content: Content) -> Result<Self, Content> {
        match content {
            Content::PlainText(text) => Ok(Self::PlainText(text)),
            Content::Mrkdwn(text) => Ok(Self::Mrkdwn(text)),
            other => Err(other),
        }
    }
}

/// Build an ordered sequence of `U` from heterogeneous content.
///
/// Output order matches input order.
///
/// # Errors
///
/// Returns [`BuildError::UnresolvedBuilderContent`] for the first item whose
/// payload type is not a case of `U`.
pub fn build<U, I>(items: I) -> Result<Vec<U>, BuildError>
where
    U: FromContent,
    I: IntoIterator,
    I::Item: Into<Content>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(position, item)| {
            U::from_content(item.into()).map_err(|content| BuildError::UnresolvedBuilderContent {
                union: U::NAME,
                content: content.kind(),
                position,
            })
        })
        .collect()
}

impl Message {
    /// Build a message from header, section and context payloads.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if an item is not a block payload.
    pub fn build<I>(items: I) -> Result<Self, BuildError>
    where
        I: IntoIterator,
        I::Item: Into<Content>,
    {
        build(items).map(Self::new)
    }
}

impl Context {
    /// Build a context block from text and image payloads.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if an item is not a context element payload.
    pub fn build<I>(items: I) -> Result<Self, BuildError>
    where
        I: IntoIterator,
        I::Item: Into<Content>,
    {
        build(items).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_preserves_order() {
        let blocks: Vec<Block> = build([
            Content::from(Section::mrkdwn("b")),
            Header::plain("a").into(),
            Section::plain_text("c").into(),
        ])
        .expect("build");
        assert_eq!(
            blocks,
            vec![
                Block::Section(Section::mrkdwn("b")),
                Block::Header(Header::plain("a")),
                Block::Section(Section::plain_text("c")),
            ]
        );
    }

    #[test]
    fn test_build_from_single_payload_type() {
        let elements: Vec<ContextElement> =
            build([Mrkdwn::from("a"), Mrkdwn::from("b")]).expect("build");
        assert_eq!(elements.len(), 2);
    }

    #[test]
    fn test_bare_string_equals_construct_then_wrap() {
        let built = Context::build([Mrkdwn::from("User")]).expect("build");
        let explicit = Context::new(vec![ContextElement::Mrkdwn(Mrkdwn::new("User"))]);
        assert_eq!(built, explicit);
    }

    #[test]
    fn test_unresolved_content_is_an_error() {
        let err = Message::build([
            Content::from(Header::plain("a")),
            Image::new("https://example.com", "alt").into(),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            BuildError::UnresolvedBuilderContent {
                union: "Block",
                content: "Image",
                position: 1,
            }
        );
        assert_eq!(err.to_string(), "Image at position 1 is not a case of Block");
    }

    #[test]
    fn test_text_rejects_image() {
        let err = build::<Text, _>([Content::from(Image::new("u", "a"))]).unwrap_err();
        assert!(matches!(
            err,
            BuildError::UnresolvedBuilderContent { union: "Text", .. }
        ));
    }

    #[test]
    fn test_context_rejects_blocks() {
        let err = Context::build([Content::from(Section::mrkdwn("x"))]).unwrap_err();
        assert!(matches!(
            err,
            BuildError::UnresolvedBuilderContent {
                union: "ContextElement",
                content: "Section",
                position: 0,
            }
        ));
    }

    #[test]
    fn test_empty_build() {
        assert_eq!(Message::build(Vec::<Content>::new()), Ok(Message::default()));
    }
}
