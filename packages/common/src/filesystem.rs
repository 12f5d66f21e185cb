use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File system abstraction so pipeline code can be tested without a real
/// output directory
pub trait FileSystem {
    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;

    /// Read an entire file as UTF-8
    fn read_to_string(&self, path: &Path) -> Result<String, std::io::Error>;

    /// Write a file, replacing any previous contents
    fn write(&self, path: &Path, contents: &str) -> Result<(), std::io::Error>;

    /// Create a directory and all of its parents if missing
    fn ensure_dir(&self, path: &Path) -> Result<(), std::io::Error>;
}

/// Real file system implementation
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> Result<String, std::io::Error> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), std::io::Error> {
        std::fs::write(path, contents)
    }

    fn ensure_dir(&self, path: &Path) -> Result<(), std::io::Error> {
        std::fs::create_dir_all(path)
    }
}

/// In-memory file system for testing
pub struct MockFileSystem {
    files: RefCell<HashMap<PathBuf, String>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: RefCell::new(HashMap::new()),
        }
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files
            .borrow_mut()
            .insert(path.into(), contents.into());
    }

    pub fn file_contents(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    pub fn file_count(&self) -> usize {
        self.files.borrow().len()
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, std::io::Error> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, format!("{:?} not found", path))
        })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), std::io::Error> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn ensure_dir(&self, _path: &Path) -> Result<(), std::io::Error> {
        // Directories are implicit in the mock
        Ok(())
    }
}
