//!
//! Error kinds shared by both stores
//!
use thiserror::Error;

/// Failure of a container or cursor operation.
///
/// Every variant is a precondition violation detected synchronously at the
/// point of misuse. A failing call leaves the container exactly as it was:
/// no element removed, no link altered, no buffer reallocated.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `pop_front`/`pop_back` on an empty container.
    #[error("collection is empty")]
    EmptyCollection,
    /// Dereference or step past a valid bound, or removal of the
    /// one-past-end position.
    #[error("position out of range")]
    OutOfRange,
    /// The position was issued by a different container instance.
    #[error("position belongs to a different container")]
    ForeignPosition,
    /// The position refers to an element that has been removed since the
    /// position was taken.
    #[error("position refers to a removed element")]
    StalePosition,
}

pub type Result<T> = std::result::Result<T, Error>;
