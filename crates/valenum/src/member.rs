use serde::{Deserialize, Serialize};
use std::{
    borrow::Cow,
    cmp::Ordering,
    fmt::{self, Display},
    hash::{Hash, Hasher},
    sync::OnceLock,
};

///
/// Member
///
/// The named comparable payload every enumeration entry embeds: an
/// immutable value, a display name, and the per-instance resolution
/// cache. Equality and ordering delegate to the value and ignore both
/// the name and object identity, so an ad-hoc instance compares equal
/// to the declared entry carrying the same value.
///
/// The resolution cache stores the resolved canonical *position*;
/// positions are stable because every registry derives the same order
/// from the same declarations. It is only written on a successful
/// resolution and is skipped by serde.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Member<V> {
    value: V,
    name: Cow<'static, str>,

    #[serde(skip)]
    resolved: OnceLock<usize>,
}

impl<V> Member<V> {
    ///
    /// CONSTRUCTORS
    ///

    /// Construct a member with a static display name.
    ///
    /// No canonicality validation happens here; whether the value is part
    /// of a declared set is resolved lazily against the registry.
    #[must_use]
    pub const fn new(value: V, name: &'static str) -> Self {
        Self {
            value,
            name: Cow::Borrowed(name),
            resolved: OnceLock::new(),
        }
    }

    /// Construct a member with an owned display name.
    #[must_use]
    pub fn with_name(value: V, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            value,
            name: name.into(),
            resolved: OnceLock::new(),
        }
    }

    ///
    /// METHODS
    ///

    /// The underlying value.
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// The display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) const fn resolution_cache(&self) -> &OnceLock<usize> {
        &self.resolved
    }
}

impl<V: Ord> Member<V> {
    /// Total order against another member.
    ///
    /// An absent counterpart compares as less than any present value, so
    /// a member is always greater than nothing.
    #[must_use]
    pub fn compare(&self, other: Option<&Self>) -> Ordering {
        match other {
            Some(other) => self.value.cmp(&other.value),
            None => Ordering::Greater,
        }
    }

    /// Total order against a raw value.
    #[must_use]
    pub fn compare_value(&self, value: &V) -> Ordering {
        self.value.cmp(value)
    }

    /// Structural equality against a raw value.
    #[must_use]
    pub fn eq_value(&self, value: &V) -> bool {
        self.value == *value
    }
}

impl<V: Ord> PartialEq for Member<V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: Ord> Eq for Member<V> {}

impl<V: Ord> PartialOrd for Member<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord> Ord for Member<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

// Hash must agree with Eq: the name does not participate.
impl<V: Ord + Hash> Hash for Member<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<V> Display for Member<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

///
/// TESTS
///
