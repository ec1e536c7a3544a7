//! Reading, writing and navigating JSON.
//!
//! - [`json`]: the `JsonValue` tree, the reader, the `WriteJson` writer and the path resolver
//! - [`byte_iterator`]: the buffered byte cursor and grammar helpers the reader is built on
//! - [`error`]: the `JsonError` kinds at the root of every error this crate returns

extern crate self as jsonkit_core;

pub mod byte_iterator;
pub mod error;
pub mod json;

pub use anyhow;
pub use error::JsonError;
