//! In-memory file system implementation

use crate::error::{VfsError, VfsResult};
use crate::VirtualFileSystem;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// An in-memory file system implementation.
///
/// Files are stored in a `BTreeMap`; directories are tracked explicitly and
/// created implicitly for every ancestor of a written file, so directory
/// probes behave like a real file system. Suitable for tests and scenarios
/// where disk access is not desired.
///
/// # Example
/// ```
/// use solbuild_vfs::{MemoryFileSystem, VirtualFileSystem};
/// use std::path::Path;
///
/// let fs = MemoryFileSystem::new();
/// fs.write_file(Path::new("/project/contracts/Token.sol"), b"contract").unwrap();
/// assert!(fs.is_dir(Path::new("/project/contracts")));
/// ```
#[derive(Debug, Clone)]
pub struct MemoryFileSystem {
    inner: Arc<RwLock<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    files: BTreeMap<String, Vec<u8>>,
    dirs: BTreeSet<String>,
}

impl MemoryFileSystem {
    /// Create a new empty memory file system.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryState::default())),
        }
    }

    /// Create a new memory file system pre-populated with files.
    ///
    /// Ancestor directories of every file are created implicitly.
    ///
    /// # Arguments
    /// * `files` - Iterator of (path, content) tuples
    pub fn with_files<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<u8>)>,
        S: AsRef<str>,
    {
        let fs = Self::new();
        for (path, content) in files {
            // Population is infallible for the memory backend
            let _ = fs.write_file(Path::new(path.as_ref()), &content);
        }
        fs
    }

    /// Create a directory and all of its ancestors.
    pub fn create_dir_all(&self, path: &Path) -> VfsResult<()> {
        let normalized = normalize_path(path);
        let mut state = self.inner.write().map_err(|_| VfsError::Custom {
            message: String::from("Lock poisoned"),
        })?;
        insert_dir_with_ancestors(&mut state.dirs, &normalized);
        Ok(())
    }
}

/// Normalize a path string for internal storage.
/// Uses forward slashes consistently for cross-platform compatibility.
fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn insert_dir_with_ancestors(dirs: &mut BTreeSet<String>, normalized: &str) {
    let mut current = normalized.trim_end_matches('/');
    loop {
        if current.is_empty() {
            break;
        }
        dirs.insert(current.to_string());
        match current.rfind('/') {
            Some(0) => {
                dirs.insert("/".to_string());
                break;
            }
            Some(idx) => current = &current[..idx],
            None => break,
        }
    }
}

impl Default for MemoryFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualFileSystem for MemoryFileSystem {
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>> {
        let normalized = normalize_path(path);
        let state = self.inner.read().map_err(|_| VfsError::Custom {
            message: String::from("Lock poisoned"),
        })?;

        state
            .files
            .get(&normalized)
            .cloned()
            .ok_or_else(|| VfsError::NotFound {
                path: normalized.clone(),
            })
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> VfsResult<()> {
        let normalized = normalize_path(path);
        let mut state = self.inner.write().map_err(|_| VfsError::Custom {
            message: String::from("Lock poisoned"),
        })?;
        if let Some(idx) = normalized.rfind('/') {
            let parent = normalized[..idx].to_string();
            insert_dir_with_ancestors(&mut state.dirs, &parent);
        }
        state.files.insert(normalized, content.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let normalized = normalize_path(path);
        let state = match self.inner.read() {
            Ok(guard) => guard,
            Err(_) => return false,
        };
        state.files.contains_key(&normalized) || state.dirs.contains(normalized.trim_end_matches('/'))
    }

    fn is_file(&self, path: &Path) -> bool {
        let normalized = normalize_path(path);
        let state = match self.inner.read() {
            Ok(guard) => guard,
            Err(_) => return false,
        };
        state.files.contains_key(&normalized)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let normalized = normalize_path(path);
        let state = match self.inner.read() {
            Ok(guard) => guard,
            Err(_) => return false,
        };
        state.dirs.contains(normalized.trim_end_matches('/'))
    }
}
