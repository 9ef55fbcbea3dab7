//! datafile-store: a minimal on-disk blob store.
//!
//! Persists opaque byte payloads under a caller-supplied identifier,
//! optionally namespaced into a single-level folder, beneath a fixed
//! root directory (`<base>/DataFileManager`). Directories are created
//! lazily on write; reads and deletes against missing entries are
//! defined no-ops.
//!
//! The store deliberately never returns an error: every failure
//! degrades to `None` (or a silent no-op for deletes), and diagnostic
//! detail goes to the [`log`] facade instead. See [`DataFileStore`]
//! for the full contract.
//!
//! # Example
//!
//! ```rust
//! use datafile_store::{Bytes, DataFileStore};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let store = DataFileStore::new(dir.path());
//!
//! let path = store.write(b"hello", "greeting", None).unwrap();
//! assert!(path.ends_with("DataFileManager/greeting"));
//! assert_eq!(store.read("greeting", None).unwrap(), Bytes::from_static(b"hello"));
//!
//! store.delete("greeting", None);
//! assert!(store.read("greeting", None).is_none());
//! ```

pub use bytes::Bytes;

mod error;
mod store;

pub use error::StoreError;
pub use store::DataFileStore;
