use crate::{enumerated::Enumerated, registry::Ordered};

///
/// Window construction.
///
/// A window never contains its origin. From a declared entry it is cut
/// by position, so an alias sees its equal-valued later sibling when
/// ascending and its earlier one when descending. From any other
/// instance it is cut by strict value bounds, so equal-valued entries
/// fall outside the window in both directions.
///

impl<U: Enumerated> Ordered<U> {
    /// Entries after `instance`, ascending.
    #[must_use]
    pub fn ascend_from(&self, instance: &U) -> Ascending<U> {
        let start = match self.identity_position(instance) {
            Some(position) => position + 1,
            None => self
                .0
                .partition_point(|entry| entry.value() <= instance.value()),
        };

        Ascending {
            table: self.clone(),
            next: start,
        }
    }

    /// Entries before `instance`, descending.
    #[must_use]
    pub fn descend_from(&self, instance: &U) -> Descending<U> {
        let end = match self.identity_position(instance) {
            Some(position) => position,
            None => self
                .0
                .partition_point(|entry| entry.value() < instance.value()),
        };

        Descending {
            table: self.clone(),
            remaining: end,
        }
    }
}

///
/// Ascending
///
/// Walks the canonical table upward from a fixed start. Holds its own
/// table handle, so it stays valid however long the caller keeps it.
///

pub struct Ascending<U: Enumerated> {
    table: Ordered<U>,
    next: usize,
}

impl<U: Enumerated> Iterator for Ascending<U> {
    type Item = &'static U;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.table.get(self.next)?;
        self.next += 1;

        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.table.len().saturating_sub(self.next);

        (remaining, Some(remaining))
    }
}

impl<U: Enumerated> ExactSizeIterator for Ascending<U> {}

///
/// Descending
///
/// Walks the canonical table downward toward the smallest value.
///

pub struct Descending<U: Enumerated> {
    table: Ordered<U>,
    remaining: usize,
}

impl<U: Enumerated> Iterator for Descending<U> {
    type Item = &'static U;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        self.table.get(self.remaining)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<U: Enumerated> ExactSizeIterator for Descending<U> {}

///
/// TESTS
///
