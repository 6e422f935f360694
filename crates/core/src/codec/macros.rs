//! Declaration macro for flat unions.

/// Declare a flat union and its shadow enumeration.
///
/// Each case names its payload type and its wire tag. The macro generates:
/// - the union enum (`Debug`, `Clone`, `PartialEq`, `Eq`)
/// - the shadow enum, implementing [`ShadowEnum`](crate::codec::ShadowEnum)
///   and `Display` (as the wire tag)
/// - [`TagResolver`](crate::codec::TagResolver) and
///   [`FlatUnion`](crate::codec::FlatUnion) for the union
/// - `Serialize`/`Deserialize` through the flat codec
/// - `From<Payload>` for every case
///
/// Wire tags must be distinct within a union; a duplicate is a compile error.
/// Payload types must be distinct within a union and serialize to JSON objects
/// without a `type` key.
///
/// ```compile_fail
/// # use blockkit_core::flat_union;
/// # #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// # pub struct A { a: Option<i64> }
/// # #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// # pub struct B { b: Option<i64> }
/// flat_union! {
///     enum Dup / DupType {
///         A(A) = "same",
///         B(B) = "same",
///     }
/// }
/// ```
///
/// # Example
///
/// ```rust
/// # use blockkit_core::flat_union;
/// # use serde::{Deserialize, Serialize};
/// #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// pub struct Word {
///     pub string: String,
/// }
///
/// #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// pub struct Count {
///     #[serde(rename = "int")]
///     pub count: i64,
/// }
///
/// flat_union! {
///     /// A word or a count.
///     pub enum Token / TokenType {
///         Word(Word) = "string",
///         Count(Count) = "int",
///     }
/// }
///
/// let json = serde_json::to_string(&Token::from(Count { count: 3 })).unwrap();
/// assert_eq!(json, r#"{"type":"int","int":3}"#);
/// ```
#[macro_export]
macro_rules! flat_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $union:ident / $shadow:ident {
            $(
                $(#[$case_meta:meta])*
                $case:ident($payload:ty) = $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        $vis enum $union {
            $(
                $(#[$case_meta])*
                $case($payload),
            )+
        }

        #[doc = concat!("Wire tags of [`", stringify!($union), "`].")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $shadow {
            $(
                #[doc = concat!("Tag `", $wire, "`.")]
                $case,
            )+
        }

        impl $crate::codec::ShadowEnum for $shadow {
            const MEMBERS: &'static [Self] = &[$(Self::$case),+];
            const WIRE_NAMES: &'static [&'static str] = &[$($wire),+];

            fn identifier(self) -> &'static str {
                match self {
                    $(Self::$case => stringify!($case),)+
                }
            }

            fn wire_name(self) -> &'static str {
                match self {
                    $(Self::$case => $wire,)+
                }
            }
        }

        const _: () = ::core::assert!(
            $crate::codec::wire_names_are_unique(
                <$shadow as $crate::codec::ShadowEnum>::WIRE_NAMES
            ),
            "flat union wire tags must be unique"
        );

        impl ::core::fmt::Display for $shadow {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::codec::ShadowEnum::wire_name(*self))
            }
        }

        impl $crate::codec::TagResolver for $union {
            type Tag = $shadow;

            fn tag(&self) -> $shadow {
                match self {
                    $(Self::$case(_) => $shadow::$case,)+
                }
            }
        }

        impl $crate::codec::FlatUnion for $union {
            const NAME: &'static str = stringify!($union);

            fn payload_to_value(
                &self,
            ) -> ::core::result::Result<::serde_json::Value, ::serde_json::Error> {
                match self {
                    $(Self::$case(payload) => ::serde_json::to_value(payload),)+
                }
            }

            fn payload_from_value(
                tag: $shadow,
                object: ::serde_json::Value,
            ) -> ::core::result::Result<Self, ::serde_json::Error> {
                match tag {
                    $($shadow::$case => ::serde_json::from_value(object).map(Self::$case),)+
                }
            }
        }

        impl ::serde::Serialize for $union {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                $crate::codec::serialize(self, serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $union {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                $crate::codec::deserialize(deserializer)
            }
        }

        $(
            impl ::core::convert::From<$payload> for $union {
                fn from(payload: $payload) -> Self {
                    Self::$case(payload)
                }
            }
        )+
    };
}
