//! Variant tag resolution and shadow enumerations.
//!
//! Every flat union has a companion [`ShadowEnum`] listing its legal tags. The
//! union itself implements [`TagResolver`] with one match arm per case, so the
//! compiler checks that every case maps to a member.

use core::fmt;

/// A closed enumeration mirroring the cases of a flat union.
///
/// Each member carries the identifier of the union case it shadows and the
/// wire string written under the tag key. Both must be unique among members.
pub trait ShadowEnum: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Every member, in declaration order.
    const MEMBERS: &'static [Self];

    /// Wire strings of every member, in declaration order.
    const WIRE_NAMES: &'static [&'static str];

    /// Identifier of the union case this member shadows (e.g. `PlainText`).
    fn identifier(self) -> &'static str;

    /// Value written under the tag key (e.g. `plain_text`).
    fn wire_name(self) -> &'static str;

    /// Look up a member by its wire string.
    ///
    /// This is the decode dispatch key.
    #[must_use]
    fn from_wire(wire: &str) -> Option<Self> {
        Self::MEMBERS
            .iter()
            .copied()
            .find(|member| member.wire_name() == wire)
    }

    /// Look up a member by the identifier of the case it shadows.
    #[must_use]
    fn from_identifier(identifier: &str) -> Option<Self> {
        Self::MEMBERS
            .iter()
            .copied()
            .find(|member| member.identifier() == identifier)
    }
}

/// Resolves which case of a union an instance represents.
pub trait TagResolver {
    /// Shadow enumeration of the union's cases.
    type Tag: ShadowEnum;

    /// The shadow member for this instance's case.
    fn tag(&self) -> Self::Tag;
}

/// Whether every wire string in `names` is distinct.
///
/// Evaluated at compile time by [`flat_union!`](crate::flat_union), so a union
/// declaring the same tag twice fails to build.
#[must_use]
#[allow(clippy::indexing_slicing)]
pub const fn wire_names_are_unique(names: &[&str]) -> bool {
    let mut i = 0;
    while i < names.len() {
        let mut j = i + 1;
        while j < names.len() {
            if bytes_eq(names[i].as_bytes(), names[j].as_bytes()) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

#[allow(clippy::indexing_slicing)]
const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Stable identifier of the case `value` represents.
///
/// The identifier depends only on the case, never on the payload contents.
#[must_use]
pub fn tag_of<T: TagResolver>(value: &T) -> &'static str {
    value.tag().identifier()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_unique() {
        assert!(wire_names_are_unique(&[]));
        assert!(wire_names_are_unique(&["plain_text", "mrkdwn", "image"]));
        assert!(wire_names_are_unique(&["image", "images", "imag"]));
        assert!(!wire_names_are_unique(&["same", "same"]));
        assert!(!wire_names_are_unique(&["a", "b", "c", "b"]));
    }

    #[test]
    fn test_duplicate_check_runs_in_const_context() {
        const DUPLICATED: bool = wire_names_are_unique(&["header", "section", "header"]);
        assert!(!DUPLICATED);
    }
}
