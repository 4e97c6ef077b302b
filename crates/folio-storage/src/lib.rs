//! Storage abstraction for the Folio documentation pipeline.
//!
//! This crate provides a [`Storage`] trait that separates corpus access from
//! the menu and document logic built on top of it:
//!
//! - **Unit testing** without touching the real filesystem
//! - **Clean separation** between navigation logic and I/O operations
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Storage`] trait with `list()`, `read()`, and `exists()` methods
//! - [`FsStorage`] implementation rooted at a data directory
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use folio_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new(PathBuf::from("data"));
//! for file in storage.list("docs")? {
//!     let text = storage.read(&format!("docs/{file}"))?;
//! }
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{MARKDOWN_EXTENSION, Storage, StorageError, StorageErrorKind};
