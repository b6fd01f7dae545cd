//!
//! dualseq: ordered sequence containers with interchangeable backing stores
//!
//! One generic container, [`Sequence`], over two backing stores:
//!
//! * [`ArraySeq`]: contiguous buffer with doubling growth.
//!   Amortized O(1) push_back, O(n) positional insert/remove.
//! * [`LinkedSeq`]: sentinel-terminated doubly linked chain.
//!   O(1) positional insert/remove, O(n) traversal.
//!
//! Both expose the same bidirectional cursor contract, so client code is
//! written once and the store is chosen by access pattern.
//!
pub mod error;
pub mod sequence;
pub mod utils;

pub use error::{Error, Result};
pub use sequence::cursor::{Cursor, CursorMut, Position};
pub use sequence::{ArraySeq, ArrayStore, LinkedSeq, LinkedStore, Sequence, Store};
