// File: src/persistence.rs
use crate::error::{PromptError, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// A named-blob store. Names are flat keys such as `prompts.md`.
pub trait BlobStore {
    fn list_names(&self) -> Result<Vec<String>>;

    /// Content of a blob, or `None` if no blob has that name.
    fn get(&self, name: &str) -> Result<Option<Vec<u8>>>;

    /// Saves a blob to a local file, replacing the file if present.
    fn download_to(&self, name: &str, path: &Path) -> Result<()>;

    /// Stores the content of a local file under `name`.
    fn upload_from(&self, path: &Path, name: &str) -> Result<()>;
}

/// Writes `bytes` to `path` through a temporary file in the same directory,
/// so readers never observe a half-written file.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        writer.write_all(bytes)?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// A bucket kept as a directory on the local filesystem:
/// `<root>/<bucket>/<blob name>`.
pub struct LocalBlobStore {
    dir: PathBuf,
}

impl LocalBlobStore {
    pub fn new(root: &Path, bucket: &str) -> Self {
        Self { dir: root.join(bucket) }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn blob_path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl BlobStore for LocalBlobStore {
    fn list_names(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(vec![]);
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    fn get(&self, name: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.blob_path(name)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn download_to(&self, name: &str, path: &Path) -> Result<()> {
        let bytes = self
            .get(name)?
            .ok_or_else(|| PromptError::MissingBlob(name.to_string()))?;
        write_atomic(path, &bytes)?;
        debug!(blob = name, path = %path.display(), bytes = bytes.len(), "blob downloaded");
        Ok(())
    }

    fn upload_from(&self, path: &Path, name: &str) -> Result<()> {
        let bytes = fs::read(path)?;
        write_atomic(&self.blob_path(name), &bytes)?;
        debug!(blob = name, bytes = bytes.len(), "blob uploaded");
        Ok(())
    }
}

/// Reads a blob as UTF-8 text if it is listed in the store, otherwise
/// returns an empty string.
pub fn read_text_or_empty(store: &dyn BlobStore, name: &str) -> Result<String> {
    if !store.list_names()?.iter().any(|n| n == name) {
        return Ok(String::new());
    }
    let bytes = store
        .get(name)?
        .ok_or_else(|| PromptError::MissingBlob(name.to_string()))?;
    String::from_utf8(bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}

/// Downloads a blob into `cache_dir` and returns the local path.
/// With `refresh` unset an existing cached copy is reused as-is.
pub fn fetch_cached(
    store: &dyn BlobStore,
    name: &str,
    cache_dir: &Path,
    refresh: bool,
) -> Result<PathBuf> {
    let path = cache_dir.join(name);
    if !refresh && path.exists() {
        debug!(blob = name, "using cached copy");
        return Ok(path);
    }
    fs::create_dir_all(cache_dir)?;
    store.download_to(name, &path)?;
    info!(blob = name, path = %path.display(), "fetched");
    Ok(path)
}

/// Reads a local file to a string.
pub fn read_local(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_store_round_trips_blobs() {
        let root = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(root.path(), "bucket");
        assert!(store.list_names().unwrap().is_empty());
        assert!(store.get("prompts.md").unwrap().is_none());

        let local = root.path().join("upload.md");
        fs::write(&local, "hello").unwrap();
        store.upload_from(&local, "prompts.md").unwrap();

        assert_eq!(store.list_names().unwrap(), vec!["prompts.md".to_string()]);
        assert_eq!(store.get("prompts.md").unwrap().unwrap(), b"hello");
    }

    #[test]
    fn missing_blob_download_fails() {
        let root = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(root.path(), "bucket");
        let err = store.download_to("all.csv", &root.path().join("x")).unwrap_err();
        assert!(matches!(err, PromptError::MissingBlob(ref n) if n == "all.csv"));
    }

    #[test]
    fn absent_document_reads_as_empty() {
        let root = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(root.path(), "bucket");
        assert_eq!(read_text_or_empty(&store, "prompts.md").unwrap(), "");
    }

    #[test]
    fn cached_copy_is_reused_unless_refreshed() {
        let root = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(root.path(), "bucket");
        let cache = root.path().join("downloads");
        write_atomic(&store.dir().join("kotus_all.json"), b"[1]").unwrap();

        let path = fetch_cached(&store, "kotus_all.json", &cache, false).unwrap();
        assert_eq!(read_local(&path).unwrap(), "[1]");

        write_atomic(&store.dir().join("kotus_all.json"), b"[2]").unwrap();
        fetch_cached(&store, "kotus_all.json", &cache, false).unwrap();
        assert_eq!(read_local(&path).unwrap(), "[1]");

        fetch_cached(&store, "kotus_all.json", &cache, true).unwrap();
        assert_eq!(read_local(&path).unwrap(), "[2]");
    }
}
