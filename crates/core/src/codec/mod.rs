//! Flat tagged-union codec.
//!
//! A flat union is serialized as a single JSON object holding the tag key next
//! to the selected payload's own fields:
//!
//! ```json
//! {"type": "image", "alt_text": "Alt text", "image_url": "https://example.com"}
//! ```
//!
//! Unions are declared with [`flat_union!`](crate::flat_union), which generates
//! the enum, its [`ShadowEnum`], the [`TagResolver`] and [`FlatUnion`] impls, and
//! `Serialize`/`Deserialize` impls that route through [`serialize`] and
//! [`deserialize`].
//!
//! Decoding reads the tag first and hands the whole object to the payload
//! decoder, so payload records must tolerate the extra tag key (the serde
//! default) and must never declare a field named `type` themselves.

mod error;
mod macros;
mod tag;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{self, SerializeMap, Serializer};
use serde_json::{Map, Value};

pub use error::CodecError;
pub use tag::{ShadowEnum, TagResolver, tag_of, wire_names_are_unique};

/// Key holding the variant tag in every flattened object.
pub const TAG_KEY: &str = "type";

/// A closed sum type whose payloads are flattened next to the tag key.
pub trait FlatUnion: TagResolver + Sized {
    /// Union name used in diagnostics.
    const NAME: &'static str;

    /// Serialize the selected payload on its own, without the tag.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the payload cannot be represented.
    fn payload_to_value(&self) -> Result<Value, serde_json::Error>;

    /// Decode `object` as the payload of the case shadowed by `tag`.
    ///
    /// `object` still contains the tag key.
    ///
    /// # Errors
    ///
    /// Returns the structural error if the payload fields do not match.
    fn payload_from_value(tag: Self::Tag, object: Value) -> Result<Self, serde_json::Error>;
}

/// Encode a union value into a flat JSON object, tag key first.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if the payload fails to serialize, or
/// [`CodecError::InvalidPayloadShape`] if it is not an object or emits the tag
/// key itself.
pub fn encode<U: FlatUnion>(value: &U) -> Result<Map<String, Value>, CodecError> {
    let tag = value.tag();
    let fields = payload_fields(value, tag)?;

    let mut object = Map::with_capacity(fields.len() + 1);
    object.insert(TAG_KEY.to_owned(), Value::String(tag.wire_name().to_owned()));
    object.extend(fields);
    Ok(object)
}

/// Decode a flat JSON object into a union value.
///
/// # Errors
///
/// - [`CodecError::ExpectedObject`] if `value` is not an object
/// - [`CodecError::MissingVariantTag`] if the tag key is absent
/// - [`CodecError::UnknownVariantTag`] if the tag is not a registered wire string
/// - [`CodecError::PayloadSchemaMismatch`] if the remaining fields do not decode
pub fn decode<U: FlatUnion>(value: Value) -> Result<U, CodecError> {
    let object = match value {
        Value::Object(object) => object,
        other => {
            return Err(CodecError::ExpectedObject {
                union: U::NAME,
                found: json_kind(&other),
            });
        }
    };

    let tag = match object.get(TAG_KEY) {
        None => return Err(CodecError::MissingVariantTag { union: U::NAME }),
        Some(Value::String(wire)) => U::Tag::from_wire(wire),
        Some(_) => None,
    };

    let Some(tag) = tag else {
        let found = object
            .get(TAG_KEY)
            .map(|tag| tag.as_str().map_or_else(|| tag.to_string(), str::to_owned))
            .unwrap_or_default();
        return Err(CodecError::UnknownVariantTag {
            union: U::NAME,
            tag: found,
            expected: U::Tag::WIRE_NAMES,
        });
    };

    U::payload_from_value(tag, Value::Object(object)).map_err(|source| {
        CodecError::PayloadSchemaMismatch {
            union: U::NAME,
            tag: tag.wire_name(),
            source,
        }
    })
}

/// Decode a JSON string holding a single flat union object.
///
/// # Errors
///
/// Returns [`CodecError::Json`] for malformed JSON, otherwise the errors of
/// [`decode`].
pub fn decode_str<U: FlatUnion>(json: &str) -> Result<U, CodecError> {
    decode(serde_json::from_str(json)?)
}

/// Decode every object of a sequence, stopping at the first failure.
///
/// # Errors
///
/// Returns the first error produced by [`decode`].
pub fn decode_all<U: FlatUnion>(values: Vec<Value>) -> Result<Vec<U>, CodecError> {
    values.into_iter().map(decode).collect()
}

/// `Serialize` body shared by every flat union.
///
/// # Errors
///
/// Returns the serializer's error, wrapping any [`CodecError`] from encoding
/// the payload.
pub fn serialize<U, S>(value: &U, serializer: S) -> Result<S::Ok, S::Error>
where
    U: FlatUnion,
    S: Serializer,
{
    let tag = value.tag();
    let fields = payload_fields(value, tag).map_err(<S::Error as ser::Error>::custom)?;

    let mut map = serializer.serialize_map(Some(fields.len() + 1))?;
    map.serialize_entry(TAG_KEY, tag.wire_name())?;
    for (key, field) in &fields {
        map.serialize_entry(key, field)?;
    }
    map.end()
}

/// `Deserialize` body shared by every flat union.
///
/// # Errors
///
/// Returns the deserializer's error. Missing and unknown tags are reported
/// through `missing_field` and `unknown_variant` on [`serde::de::Error`].
pub fn deserialize<'de, U, D>(deserializer: D) -> Result<U, D::Error>
where
    U: FlatUnion,
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    decode(value).map_err(CodecError::into_de_error)
}

/// Serialize the payload and check it can be flattened next to the tag.
fn payload_fields<U: FlatUnion>(value: &U, tag: U::Tag) -> Result<Map<String, Value>, CodecError> {
    let payload = value
        .payload_to_value()
        .map_err(|source| CodecError::Encode {
            union: U::NAME,
            tag: tag.wire_name(),
            source,
        })?;

    match payload {
        Value::Object(fields) if fields.contains_key(TAG_KEY) => {
            Err(CodecError::InvalidPayloadShape {
                union: U::NAME,
                tag: tag.wire_name(),
                reason: "emits the tag key",
            })
        }
        Value::Object(fields) => Ok(fields),
        _ => Err(CodecError::InvalidPayloadShape {
            union: U::NAME,
            tag: tag.wire_name(),
            reason: "is not a JSON object",
        }),
    }
}

/// Name of a JSON value's type, for diagnostics.
const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
