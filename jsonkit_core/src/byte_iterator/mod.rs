//! Byte-level reading of JSON text: a peekable buffered iterator and the grammar helpers built on it.

mod basics;
mod iterator;

pub use basics::*;
pub use iterator::*;
