//! Storage layer
//!
//! Handles reading and writing the catalog file.
//!
//! The file is a snapshot of the in-memory catalog and is rewritten in full
//! after every successful mutation.

pub mod error;
pub mod persistence;

pub use error::{StorageError, StorageResult};
pub use persistence::{decode_books, encode_books, JsonPersistence};
