//! Re-readable access to the files of a beatmap set.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::PathBuf;

/// Source of set file contents.
///
/// Every call to [`SetStorage::open`] returns an independent reader, so a
/// file can be read more than once.
pub trait SetStorage: Sync {
    /// Opens a new reader over the file, or `None` when it cannot be read.
    fn open(&self, name: &str) -> Option<Box<dyn Read + '_>>;
}

/// Files on disk below a set directory.
#[derive(Debug, Clone)]
pub struct DirectoryStorage {
    root: PathBuf,
}

impl DirectoryStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SetStorage for DirectoryStorage {
    fn open(&self, name: &str) -> Option<Box<dyn Read + '_>> {
        match File::open(self.root.join(name)) {
            Ok(file) => Some(Box::new(BufReader::new(file))),
            Err(e) => {
                log::warn!("STORAGE: cannot open {:?}: {}", name, e);
                None
            }
        }
    }
}

/// Files held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.files.insert(name.into(), bytes.into());
    }
}

impl SetStorage for MemoryStorage {
    fn open(&self, name: &str) -> Option<Box<dyn Read + '_>> {
        self.files
            .get(name)
            .map(|bytes| Box::new(Cursor::new(bytes.as_slice())) as Box<dyn Read + '_>)
    }
}

/// Reads a whole file. Missing, unreadable and empty files all yield `None`.
///
/// The reader is dropped before returning on every path.
pub fn read_fully<S: SetStorage + ?Sized>(storage: &S, name: &str) -> Option<Vec<u8>> {
    let mut reader = storage.open(name)?;
    let mut buffer = Vec::new();

    if let Err(e) = reader.read_to_end(&mut buffer) {
        log::warn!("STORAGE: failed reading {:?}: {}", name, e);
        return None;
    }

    if buffer.is_empty() { None } else { Some(buffer) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_reads_twice() {
        let mut storage = MemoryStorage::new();
        storage.insert("a.osu", "content");

        assert_eq!(read_fully(&storage, "a.osu"), Some(b"content".to_vec()));
        assert_eq!(read_fully(&storage, "a.osu"), Some(b"content".to_vec()));
        assert_eq!(read_fully(&storage, "missing"), None);
    }

    #[test]
    fn test_empty_file_has_no_data() {
        let mut storage = MemoryStorage::new();
        storage.insert("empty", Vec::new());
        assert_eq!(read_fully(&storage, "empty"), None);
    }

    #[test]
    fn test_directory_storage() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("sb")).unwrap();
        std::fs::write(dir.path().join("sb").join("a.txt"), b"hello").unwrap();

        let storage = DirectoryStorage::new(dir.path());
        assert_eq!(read_fully(&storage, "sb/a.txt"), Some(b"hello".to_vec()));
        assert_eq!(read_fully(&storage, "nope.txt"), None);
    }
}
