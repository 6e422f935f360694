//! Text objects.

use serde::{Deserialize, Serialize};

use crate::flat_union;

/// Plain text, optionally with emoji shortcodes converted.
///
/// `emoji` is kept exactly as decoded so a round trip reproduces the input.
/// When absent, Slack converts emoji; see [`PlainText::converts_emoji`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlainText {
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    emoji: Option<bool>,
}

impl PlainText {
    /// Create plain text with no explicit `emoji` flag.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emoji: None,
        }
    }

    /// Set the `emoji` flag explicitly.
    #[must_use]
    pub const fn with_emoji(mut self, emoji: bool) -> Self {
        self.emoji = Some(emoji);
        self
    }

    /// The text content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The `emoji` flag as written on the wire, if any.
    #[must_use]
    pub const fn emoji(&self) -> Option<bool> {
        self.emoji
    }

    /// Whether emoji shortcodes are converted. Defaults to `true`.
    #[must_use]
    pub fn converts_emoji(&self) -> bool {
        self.emoji.unwrap_or(true)
    }
}

impl From<&str> for PlainText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for PlainText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Text formatted with Slack's markdown dialect.
///
/// When `verbatim` is absent, Slack auto-links URLs and mentions; see
/// [`Mrkdwn::is_verbatim`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mrkdwn {
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    verbatim: Option<bool>,
}

impl Mrkdwn {
    /// Create markdown text with no explicit `verbatim` flag.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            verbatim: None,
        }
    }

    /// Set the `verbatim` flag explicitly.
    #[must_use]
    pub const fn with_verbatim(mut self, verbatim: bool) -> Self {
        self.verbatim = Some(verbatim);
        self
    }

    /// The markdown source.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The `verbatim` flag as written on the wire, if any.
    #[must_use]
    pub const fn verbatim(&self) -> Option<bool> {
        self.verbatim
    }

    /// Whether the text is posted without auto-linking. Defaults to `false`.
    #[must_use]
    pub fn is_verbatim(&self) -> bool {
        self.verbatim.unwrap_or(false)
    }
}

impl From<&str> for Mrkdwn {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Mrkdwn {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

flat_union! {
    /// A text object, used by header and section blocks.
    pub enum Text / TextType {
        /// Unformatted text.
        PlainText(PlainText) = "plain_text",
        /// Markdown text.
        Mrkdwn(Mrkdwn) = "mrkdwn",
    }
}

impl Text {
    /// Shorthand for `Text::PlainText(PlainText::new(text))`.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText(PlainText::new(text))
    }

    /// Shorthand for `Text::Mrkdwn(Mrkdwn::new(text))`.
    #[must_use]
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self::Mrkdwn(Mrkdwn::new(text))
    }

    /// The text content, whatever its formatting.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::PlainText(text) => text.text(),
            Self::Mrkdwn(text) => text.text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::codec::{CodecError, ShadowEnum, decode, tag_of};

    #[test]
    fn test_plain_text_emoji_defaults_to_true() {
        let text: PlainText =
            serde_json::from_value(json!({"type": "plain_text", "text": "x"})).expect("decode");
        assert_eq!(text.emoji(), None);
        assert!(text.converts_emoji());
        assert!(!PlainText::new("x").with_emoji(false).converts_emoji());
    }

    #[test]
    fn test_mrkdwn_verbatim_defaults_to_false() {
        let text: Mrkdwn =
            serde_json::from_value(json!({"type": "mrkdwn", "text": "x"})).expect("decode");
        assert_eq!(text.verbatim(), None);
        assert!(!text.is_verbatim());
        assert!(Mrkdwn::new("x").with_verbatim(true).is_verbatim());
    }

    #[test]
    fn test_absent_flags_are_not_written() {
        let json = serde_json::to_string(&Text::plain("Header")).expect("serialize");
        assert_eq!(json, r#"{"type":"plain_text","text":"Header"}"#);
    }

    #[test]
    fn test_explicit_flags_round_trip() {
        for text in [
            Text::PlainText(PlainText::new("a").with_emoji(false)),
            Text::PlainText(PlainText::new("b").with_emoji(true)),
            Text::Mrkdwn(Mrkdwn::new("*c*").with_verbatim(true)),
            Text::mrkdwn("d"),
        ] {
            let json = serde_json::to_string(&text).expect("serialize");
            let back: Text = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(back, text);
        }
    }

    #[test]
    fn test_emoji_wire_value_is_kept() {
        let text: Text = decode(json!({"type": "plain_text", "text": "x", "emoji": true}))
            .expect("decode");
        assert_eq!(
            serde_json::to_value(&text).expect("serialize"),
            json!({"type": "plain_text", "text": "x", "emoji": true})
        );
    }

    #[test]
    fn test_bare_string_matches_explicit_construction() {
        assert_eq!(PlainText::from("x"), PlainText::new("x"));
        assert_eq!(Mrkdwn::from("x".to_string()), Mrkdwn::new("x"));
        assert_eq!(Text::from(Mrkdwn::from("x")), Text::mrkdwn("x"));
    }

    #[test]
    fn test_tags() {
        assert_eq!(tag_of(&Text::plain("x")), "PlainText");
        assert_eq!(tag_of(&Text::mrkdwn("x")), "Mrkdwn");
        assert_eq!(TextType::WIRE_NAMES, &["plain_text", "mrkdwn"]);
        assert_eq!(TextType::from_wire("mrkdwn"), Some(TextType::Mrkdwn));
        assert_eq!(TextType::from_identifier("PlainText"), Some(TextType::PlainText));
        assert_eq!(TextType::PlainText.to_string(), "plain_text");
    }

    #[test]
    fn test_unknown_text_type() {
        let err = decode::<Text>(json!({"type": "rich_text", "text": "x"})).unwrap_err();
        assert!(matches!(err, CodecError::UnknownVariantTag { union: "Text", .. }));
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Text::plain("a").as_str(), "a");
        assert_eq!(Text::mrkdwn("*b*").as_str(), "*b*");
    }
}
