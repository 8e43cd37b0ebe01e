//! shelf Core Library
//!
//! This crate provides the core functionality for shelf, a single-user
//! catalog of personal books with borrow/return tracking.
//!
//! # Architecture
//!
//! - **Catalog**: in-memory source of truth, insertion ordered
//! - **JSON file**: snapshot of the catalog, rewritten after every change
//!
//! # Quick Start
//!
//! ```text
//! let config = Config::load()?;
//! let mut catalog = Catalog::open(&config);
//!
//! // Add a book
//! catalog.add_book("Dune", "Frank Herbert", 1965, "0441172717")?;
//!
//! // Query books
//! println!("{}", catalog.search_books("dune", SearchField::Title));
//! ```
//!
//! # Modules
//!
//! - `catalog`: Catalog manager (main entry point)
//! - `models`: Book record, lending status, search fields
//! - `listing`: Numbered listing reports
//! - `storage`: JSON file persistence
//! - `config`: Application configuration
//! - `error`: Catalog and record errors

pub mod catalog;
pub mod config;
pub mod error;
pub mod listing;
pub mod models;
pub mod storage;

pub use catalog::Catalog;
pub use config::Config;
pub use error::{CatalogError, CatalogResult, RecordError};
pub use listing::{format_line, BookListing};
pub use models::{Book, BookStatus, SearchField};
pub use storage::{JsonPersistence, StorageError};
