//! Error types for store operations.
//!
//! The public API never surfaces these directly: failures degrade to
//! `None` (or a silent no-op for deletes) at the boundary. These errors
//! carry the detail that ends up in the diagnostic log line.

use std::io;
use std::path::PathBuf;

/// Errors raised by the fallible interior of [`crate::DataFileStore`].
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// An entry id was empty. No filesystem access is attempted for an
    /// empty id.
    #[error("entry id must not be empty")]
    EmptyId,

    /// A directory in the resolution chain could not be provisioned.
    #[error("couldn't create directory {path}: {error}")]
    CreateDir {
        path: PathBuf,
        #[source]
        error: io::Error,
    },

    /// The entry's bytes could not be written.
    #[error("couldn't write entry '{id}' at {path}: {error}")]
    WriteEntry {
        id: String,
        path: PathBuf,
        #[source]
        error: io::Error,
    },

    /// An external source file could not be read for import.
    #[error("couldn't read source file {path}: {error}")]
    ReadSource {
        path: PathBuf,
        #[source]
        error: io::Error,
    },
}
