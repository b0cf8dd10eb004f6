use crate::{enumerated::Enumerated, error::Error, registry::Ordered};
use std::any::type_name;

///
/// Lookup services over a cached canonical table.
///
/// Positions are zero-based over the ascending order. Strict access
/// (`at`) reports the offending index; everything else answers with
/// `Option` or `bool`. Value searches ride the sort order; identity
/// searches walk the table and match by pointer, never by value.
///

impl<U: Enumerated> Ordered<U> {
    ///
    /// COUNT
    ///

    /// Number of canonical entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the enumeration declares no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    ///
    /// POSITIONAL ACCESS
    ///

    /// Entry at `position`, if in bounds.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&'static U> {
        self.0.get(position).copied()
    }

    /// Entry at `position`, or an error naming the violated bounds.
    pub fn at(&self, position: usize) -> Result<&'static U, Error> {
        self.get(position).ok_or_else(|| Error::OutOfRange {
            type_name: type_name::<U>(),
            index: position,
            len: self.len(),
        })
    }

    /// Whether `position` indexes a canonical entry.
    #[must_use]
    pub fn in_bounds(&self, position: usize) -> bool {
        position < self.len()
    }

    /// Smallest-valued entry.
    #[must_use]
    pub fn first(&self) -> Option<&'static U> {
        self.get(0)
    }

    /// Largest-valued entry.
    #[must_use]
    pub fn last(&self) -> Option<&'static U> {
        self.0.last().copied()
    }

    ///
    /// CONTAINMENT & SEARCH
    ///

    /// Whether any canonical entry carries this instance's value.
    #[must_use]
    pub fn contains(&self, instance: &U) -> bool {
        self.contains_value(instance.value())
    }

    /// Whether any canonical entry carries `value`.
    #[must_use]
    pub fn contains_value(&self, value: &U::Value) -> bool {
        self.find_by_value(value).is_some()
    }

    /// First entry, in ascending order, satisfying `predicate`.
    #[must_use]
    pub fn find(&self, mut predicate: impl FnMut(&U) -> bool) -> Option<&'static U> {
        self.0.iter().copied().find(|entry| predicate(entry))
    }

    /// First entry carrying `value`. Among aliases this is the earliest
    /// declared one.
    #[must_use]
    pub fn find_by_value(&self, value: &U::Value) -> Option<&'static U> {
        let position = self.0.partition_point(|entry| entry.value() < value);

        self.get(position).filter(|entry| entry.eq_value(value))
    }

    /// Position of this instance's canonical match: its own position
    /// when declared (an alias keeps its slot, not its sibling's),
    /// otherwise the first value match. Absent only when the value is
    /// outside the canonical set.
    #[must_use]
    pub fn position_of(&self, instance: &U) -> Option<usize> {
        self.resolution_position(instance)
    }

    /// Canonical counterpart of `instance`: itself when declared,
    /// otherwise the first value match.
    #[must_use]
    pub fn resolve(&self, instance: &U) -> Option<&'static U> {
        let position = self.resolution_position(instance)?;

        self.get(position)
    }

    ///
    /// PROJECTIONS
    ///

    /// All entries, ascending by value.
    pub fn iter(&self) -> impl Iterator<Item = &'static U> + '_ {
        self.0.iter().copied()
    }

    /// Display names, in ascending value order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter().map(Enumerated::name)
    }

    ///
    /// INTERNAL
    ///

    pub(crate) fn identity_position(&self, instance: &U) -> Option<usize> {
        self.0.iter().position(|entry| std::ptr::eq(*entry, instance))
    }

    pub(crate) fn resolution_position(&self, instance: &U) -> Option<usize> {
        if let Some(position) = self.identity_position(instance) {
            return Some(position);
        }

        let position = self
            .0
            .partition_point(|entry| entry.value() < instance.value());

        (self.get(position)?.eq_value(instance.value())).then_some(position)
    }
}

///
/// TESTS
///
