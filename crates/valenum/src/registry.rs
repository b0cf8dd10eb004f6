use crate::enumerated::Enumerated;
use derive_more::Deref;
use std::{
    any::{Any, TypeId},
    collections::HashMap,
    sync::{Arc, LazyLock, RwLock},
};

///
/// GLOBAL is lazily initiated; discovery happens on the first query
/// for each concrete enumeration type and is never evicted
///

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// The process-wide registry.
#[must_use]
pub fn global() -> &'static Registry {
    &GLOBAL
}

///
/// Registry
///
/// Type-keyed cache of canonical tables. Populated at most once per
/// concrete enumeration type; later queries hand out the same shared
/// table. Independent instances can be constructed when a test scope
/// needs isolation from the process-wide cache.
///

#[derive(Default)]
pub struct Registry {
    tables: RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache-or-discover the ordered canonical table for `U`.
    ///
    /// The first query collects `U::declared()`, stable-sorts it
    /// ascending by value (ties keep declaration order) and stores the
    /// table; every later query returns a handle to the same table.
    /// Zero declared entries yield an empty table, not an error.
    pub fn ordered<U: Enumerated>(&self) -> Ordered<U> {
        let key = TypeId::of::<U>();

        {
            let tables = self.tables.read().expect("registry lock poisoned");
            if let Some(table) = tables.get(&key) {
                return downcast::<U>(table.as_ref());
            }
        }

        // Discovery runs outside the lock; racing first queries produce
        // the same table and the first insert wins.
        let discovered = discover::<U>();

        let mut tables = self.tables.write().expect("registry lock poisoned");
        let table = tables.entry(key).or_insert_with(|| Box::new(discovered));

        downcast::<U>(table.as_ref())
    }
}

fn discover<U: Enumerated>() -> Ordered<U> {
    let mut entries: Vec<&'static U> = U::declared().to_vec();

    // Stable sort: aliases (equal values) keep declaration order.
    entries.sort_by(|a, b| a.value().cmp(b.value()));

    Ordered(Arc::from(entries))
}

fn downcast<U: Enumerated>(table: &(dyn Any + Send + Sync)) -> Ordered<U> {
    table
        .downcast_ref::<Ordered<U>>()
        .expect("registry table keyed by TypeId must hold its entry type")
        .clone()
}

///
/// Ordered
///
/// Shared handle over one type's cached canonical table: entries sorted
/// ascending by value, aliases in declaration order. Cloning is cheap
/// and every clone views the same table; callers treat it as read-only.
///

#[derive(Debug, Deref)]
pub struct Ordered<U: 'static>(pub(crate) Arc<[&'static U]>);

impl<U> Clone for Ordered<U> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

///
/// TESTS
///
