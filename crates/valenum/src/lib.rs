//! Ordered, registry-backed value enumerations.
//!
//! A concrete enumeration type declares a fixed set of named singleton
//! entries whose underlying value may be any immutable comparable type,
//! not just an integer. The registry discovers each type's declared
//! entries once, sorts them ascending by value (stable, so aliases keep
//! declaration order) and caches the table for the life of the process;
//! every lookup, window and comparison reads from that shared table.
//!
//! ## Crate layout
//! - `member`: the named comparable payload every entry embeds.
//! - `enumerated`: the declaration/query trait concrete types implement.
//! - `registry`: per-type discovery and the process-wide cache.
//! - `lookup`: count, containment, search, and positional services.
//! - `iter`: ascending/descending window iterators.
//! - `error`: the strict-access error surface.
//!
//! The [`members!`] macro covers the common case of const-constructible
//! entries; enumerations with per-entry behavior or runtime-built values
//! implement [`Enumerated`] by hand.

mod enumerated;
mod error;
mod iter;
mod lookup;
mod macros;
mod member;
mod registry;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use enumerated::Enumerated;
pub use error::Error;
pub use iter::{Ascending, Descending};
pub use member::Member;
pub use registry::{Ordered, Registry, global};

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or iterator shells are re-exported here.
///

pub mod prelude {
    pub use crate::{Enumerated, Member, Ordered, Registry, global};
}
