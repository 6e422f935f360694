//! Codec errors.

use serde::de;
use thiserror::Error;

use super::TAG_KEY;

/// Errors produced while encoding or decoding a flat union.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The object has no tag key.
    #[error("missing `type` key while decoding {union}")]
    MissingVariantTag {
        /// Union being decoded.
        union: &'static str,
    },

    /// The tag value is not registered for the union.
    #[error("unknown {union} tag `{tag}`, expected one of {expected:?}")]
    UnknownVariantTag {
        /// Union being decoded.
        union: &'static str,
        /// Tag value found in the input.
        tag: String,
        /// Wire strings the union accepts.
        expected: &'static [&'static str],
    },

    /// The tag was recognized but the payload fields did not decode.
    #[error("invalid `{tag}` payload for {union}: {source}")]
    PayloadSchemaMismatch {
        /// Union being decoded.
        union: &'static str,
        /// Wire tag of the selected case.
        tag: &'static str,
        /// Structural error from the payload decoder.
        #[source]
        source: serde_json::Error,
    },

    /// The input is not a JSON object.
    #[error("expected a JSON object for {union}, found {found}")]
    ExpectedObject {
        /// Union being decoded.
        union: &'static str,
        /// JSON type actually found.
        found: &'static str,
    },

    /// A payload cannot be merged with the tag field.
    #[error("`{tag}` payload of {union} {reason}")]
    InvalidPayloadShape {
        /// Union being encoded.
        union: &'static str,
        /// Wire tag of the encoded case.
        tag: &'static str,
        /// What is wrong with the payload.
        reason: &'static str,
    },

    /// A payload failed to serialize.
    #[error("failed to encode `{tag}` payload of {union}: {source}")]
    Encode {
        /// Union being encoded.
        union: &'static str,
        /// Wire tag of the encoded case.
        tag: &'static str,
        /// Underlying serializer error.
        #[source]
        source: serde_json::Error,
    },

    /// Malformed JSON, or a container around the unions has the wrong shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodecError {
    /// Convert into a deserializer error, keeping serde's own wording for
    /// missing fields and unknown variants.
    pub(crate) fn into_de_error<E: de::Error>(self) -> E {
        match self {
            Self::MissingVariantTag { .. } => E::missing_field(TAG_KEY),
            Self::UnknownVariantTag { tag, expected, .. } => E::unknown_variant(&tag, expected),
            other => E::custom(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tag_display() {
        let err = CodecError::MissingVariantTag { union: "Block" };
        assert_eq!(err.to_string(), "missing `type` key while decoding Block");
    }

    #[test]
    fn test_unknown_tag_display_lists_expected() {
        let err = CodecError::UnknownVariantTag {
            union: "Text",
            tag: "rich_text".to_string(),
            expected: &["plain_text", "mrkdwn"],
        };
        assert_eq!(
            err.to_string(),
            r#"unknown Text tag `rich_text`, expected one of ["plain_text", "mrkdwn"]"#
        );
    }

    #[test]
    fn test_into_de_error_uses_serde_wording() {
        let err: serde_json::Error = CodecError::UnknownVariantTag {
            union: "Text",
            tag: "rich_text".to_string(),
            expected: &["plain_text", "mrkdwn"],
        }
        .into_de_error();
        assert_eq!(
            err.to_string(),
            "unknown variant `rich_text`, expected `plain_text` or `mrkdwn`"
        );

        let err: serde_json::Error = CodecError::MissingVariantTag { union: "Block" }.into_de_error();
        assert_eq!(err.to_string(), "missing field `type`");
    }
}
