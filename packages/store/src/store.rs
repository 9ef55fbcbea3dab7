//! The on-disk blob store.
//!
//! Maps a logical `(folder, id)` key to a file path under a fixed root
//! directory and performs write/read/locate/delete/list operations
//! against that path. Directories are provisioned lazily on write.
//!
//! Every public operation follows the same failure policy: anything
//! that goes wrong degrades to `None` (or a silent no-op for deletes),
//! with the detail reported through the `log` facade rather than the
//! return value.

use std::fs;
use std::path::{Path, PathBuf};

use bytes::Bytes;

use crate::error::StoreError;

/// Directory component that namespaces this store under its base
/// directory. Every path the store touches lives beneath it.
const STORE_DIR_NAME: &str = "DataFileManager";

/// A blob store rooted at `<base>/DataFileManager`.
///
/// The base directory is injected at construction so callers (and
/// tests) can redirect storage anywhere; [`DataFileStore::in_user_documents`]
/// derives it from the platform documents directory.
///
/// The store holds no state beyond the root path and no file handles
/// across calls. It is single-process, best-effort: writes are not
/// atomic and concurrent writers to the same key race with last-write-wins.
pub struct DataFileStore {
    root: PathBuf,
}

impl DataFileStore {
    /// Creates a store rooted at `<base>/DataFileManager`. Nothing is
    /// touched on disk until the first write.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        DataFileStore {
            root: base.into().join(STORE_DIR_NAME),
        }
    }

    /// Creates a store under the platform user documents directory, or
    /// `None` when the platform has no such directory.
    pub fn in_user_documents() -> Option<Self> {
        dirs::document_dir().map(DataFileStore::new)
    }

    /// The root directory entries resolve under. May not exist yet.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn root_dir(&self, create_if_needed: bool) -> Result<&Path, StoreError> {
        if create_if_needed {
            fs::create_dir_all(&self.root).map_err(|error| StoreError::CreateDir {
                path: self.root.clone(),
                error,
            })?;
        }
        Ok(&self.root)
    }

    fn folder_dir(&self, folder: &str, create_if_needed: bool) -> Result<PathBuf, StoreError> {
        let dir = self.root_dir(create_if_needed)?.join(folder);
        if create_if_needed {
            fs::create_dir_all(&dir).map_err(|error| StoreError::CreateDir {
                path: dir.clone(),
                error,
            })?;
        }
        Ok(dir)
    }

    /// Resolves `(folder, id)` to the entry's path.
    ///
    /// An empty `id` never resolves and an empty folder name is
    /// treated as no folder. With `create_if_needed`, a provisioning
    /// failure anywhere in the chain aborts resolution rather than
    /// being skipped.
    fn entry_path(
        &self,
        id: &str,
        folder: Option<&str>,
        create_if_needed: bool,
    ) -> Result<PathBuf, StoreError> {
        if id.is_empty() {
            return Err(StoreError::EmptyId);
        }
        match folder.filter(|f| !f.is_empty()) {
            Some(folder) => Ok(self.folder_dir(folder, create_if_needed)?.join(id)),
            None => Ok(self.root_dir(create_if_needed)?.join(id)),
        }
    }

    /// Writes `data` under `(folder, id)`, fully overwriting any prior
    /// contents, and returns the path written to.
    ///
    /// Returns `None` when `id` is empty, a directory could not be
    /// provisioned, or the write itself failed. The write is not
    /// atomic; a crash mid-write may leave a partial file behind.
    pub fn write(&self, data: &[u8], id: &str, folder: Option<&str>) -> Option<PathBuf> {
        match self.try_write(data, id, folder) {
            Ok(path) => Some(path),
            Err(error) => {
                log::warn!("write failed: {}", error);
                None
            }
        }
    }

    fn try_write(
        &self,
        data: &[u8],
        id: &str,
        folder: Option<&str>,
    ) -> Result<PathBuf, StoreError> {
        let path = self.entry_path(id, folder, true)?;
        log::debug!("Writing {}...", path.display());
        fs::write(&path, data).map_err(|error| StoreError::WriteEntry {
            id: id.to_string(),
            path: path.clone(),
            error,
        })?;
        Ok(path)
    }

    /// Copies the file at `source` into the store under `(folder, id)`
    /// and returns the destination path.
    ///
    /// Returns `None` without writing anything when the source could
    /// not be read, and `None` when the write fails. With
    /// `remove_source`, the source file is removed after a successful
    /// write; removal is best-effort and a failure there is logged
    /// without affecting the returned path.
    pub fn import_file(
        &self,
        source: &Path,
        id: &str,
        folder: Option<&str>,
        remove_source: bool,
    ) -> Option<PathBuf> {
        let data = match fs::read(source) {
            Ok(data) => data,
            Err(error) => {
                let error = StoreError::ReadSource {
                    path: source.to_path_buf(),
                    error,
                };
                log::warn!("import failed: {}", error);
                return None;
            }
        };
        let dest = self.write(&data, id, folder)?;
        if remove_source {
            if let Err(error) = fs::remove_file(source) {
                log::warn!(
                    "couldn't remove imported source {}: {}",
                    source.display(),
                    error
                );
            }
        }
        Some(dest)
    }

    /// Reads the entry at `(folder, id)`.
    ///
    /// Returns `None` when the entry does not exist or cannot be read.
    /// No directory is created on the way.
    pub fn read(&self, id: &str, folder: Option<&str>) -> Option<Bytes> {
        let path = self.entry_path(id, folder, false).ok()?;
        log::debug!("Reading {}...", path.display());
        fs::read(&path).ok().map(Bytes::from)
    }

    /// Returns the path of the entry at `(folder, id)` when it exists
    /// and is readable, without returning its contents.
    ///
    /// The file is opened to verify accessibility; a path that exists
    /// but cannot be opened (or is not a regular file) yields `None`.
    pub fn locate(&self, id: &str, folder: Option<&str>) -> Option<PathBuf> {
        let path = self.entry_path(id, folder, false).ok()?;
        let readable = fs::File::open(&path)
            .and_then(|file| file.metadata())
            .map(|meta| meta.is_file())
            .unwrap_or(false);
        readable.then_some(path)
    }

    /// Removes the entry at `(folder, id)`.
    ///
    /// A missing entry, or an empty `id`, is a silent no-op. A failed
    /// removal is logged, never surfaced.
    pub fn delete(&self, id: &str, folder: Option<&str>) {
        let Ok(path) = self.entry_path(id, folder, false) else {
            return;
        };
        if !path.exists() {
            return;
        }
        if let Err(error) = fs::remove_file(&path) {
            log::warn!(
                "couldn't delete entry '{}' at {}: {}",
                id,
                path.display(),
                error
            );
        }
    }

    /// Recursively removes `folder` and every entry beneath it.
    ///
    /// A missing folder is a silent no-op. An empty folder name is
    /// ignored; use [`DataFileStore::delete_all`] to drop the whole
    /// store.
    pub fn delete_folder(&self, folder: &str) {
        if folder.is_empty() {
            return;
        }
        Self::remove_tree(&self.root.join(folder));
    }

    /// Recursively removes the store root and everything beneath it:
    /// every folder and the no-folder namespace at once.
    ///
    /// A missing root is a silent no-op.
    pub fn delete_all(&self) {
        Self::remove_tree(&self.root);
    }

    fn remove_tree(dir: &Path) {
        if !dir.exists() {
            return;
        }
        if let Err(error) = fs::remove_dir_all(dir) {
            log::warn!("couldn't delete directory {}: {}", dir.display(), error);
        }
    }

    /// Lists the entry ids that are immediate children of `folder`, or
    /// of the no-folder namespace when `folder` is `None`.
    ///
    /// Ids come back in whatever order the directory enumeration
    /// yields them; no sorting is applied and callers must not depend
    /// on the order. Folder directories are skipped, so a root-level
    /// listing reports only no-folder entries. Returns `None` when the
    /// directory does not exist or cannot be read.
    pub fn list(&self, folder: Option<&str>) -> Option<Vec<String>> {
        let dir = match folder.filter(|f| !f.is_empty()) {
            Some(folder) => self.root.join(folder),
            None => self.root.clone(),
        };
        let entries = fs::read_dir(&dir).ok()?;
        let mut ids = Vec::new();
        for entry in entries.filter_map(Result::ok) {
            let is_file = entry
                .file_type()
                .map(|file_type| file_type.is_file())
                .unwrap_or(false);
            if is_file {
                ids.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Some(ids)
    }
}
