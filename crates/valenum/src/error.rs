use thiserror::Error as ThisError;

///
/// Error
///
/// Strict-access failures. Optional lookups return `Option` instead and
/// malformed declarations are unrepresentable at the type level, so the
/// surface stays small.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error("index {index} out of bounds for {type_name} ({len} canonical entries)")]
    OutOfRange {
        type_name: &'static str,
        index: usize,
        len: usize,
    },
}

///
/// TESTS
///
