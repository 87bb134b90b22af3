//! Native file system implementation

use crate::error::{VfsError, VfsResult};
use crate::VirtualFileSystem;
use std::path::Path;

/// A native OS file system implementation.
///
/// This wraps `std::fs` operations and provides the `VirtualFileSystem`
/// interface for local file access.
///
/// # Example
/// ```
/// use solbuild_vfs::{NativeFileSystem, VirtualFileSystem};
/// use std::path::Path;
///
/// let fs = NativeFileSystem::new();
/// assert!(!fs.is_file(Path::new("/nonexistent/solbuild.json")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NativeFileSystem;

impl NativeFileSystem {
    /// Create a new native file system.
    pub fn new() -> Self {
        Self
    }
}

impl VirtualFileSystem for NativeFileSystem {
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => VfsError::NotFound {
                path: path.to_string_lossy().to_string(),
            },
            std::io::ErrorKind::PermissionDenied => VfsError::PermissionDenied {
                path: path.to_string_lossy().to_string(),
            },
            _ => e.into(),
        })
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> VfsResult<()> {
        std::fs::write(path, content).map_err(|e| e.into())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("solbuild_vfs_{}_{}", name, std::process::id()))
    }

    #[test]
    fn test_native_exists() {
        let fs = NativeFileSystem::new();
        let temp_file = temp_path("exists");

        let _ = std::fs::remove_file(&temp_file);
        assert!(!fs.exists(&temp_file));

        {
            let mut file = std::fs::File::create(&temp_file).unwrap();
            file.write_all(b"test").unwrap();
        }

        assert!(fs.exists(&temp_file));

        std::fs::remove_file(&temp_file).unwrap();
    }

    #[test]
    fn test_native_read_write() {
        let fs = NativeFileSystem::new();
        let temp_file = temp_path("rw");

        let _ = std::fs::remove_file(&temp_file);

        fs.write_file(&temp_file, b"{\"plugins\":[]}").unwrap();

        let content = fs.read_file(&temp_file).unwrap();
        assert_eq!(content, b"{\"plugins\":[]}");

        std::fs::remove_file(&temp_file).unwrap();
    }

    #[test]
    fn test_native_is_file_and_dir() {
        let fs = NativeFileSystem::new();
        let temp_file_path = temp_path("type_file");
        let temp_dir_path = temp_path("type_dir");

        let _ = std::fs::remove_file(&temp_file_path);
        let _ = std::fs::remove_dir(&temp_dir_path);

        {
            let mut file = std::fs::File::create(&temp_file_path).unwrap();
            file.write_all(b"test").unwrap();
        }
        std::fs::create_dir(&temp_dir_path).unwrap();

        assert!(fs.is_file(&temp_file_path));
        assert!(!fs.is_dir(&temp_file_path));

        assert!(!fs.is_file(&temp_dir_path));
        assert!(fs.is_dir(&temp_dir_path));

        std::fs::remove_file(&temp_file_path).unwrap();
        std::fs::remove_dir(&temp_dir_path).unwrap();
    }

    #[test]
    fn test_native_read_nonexistent() {
        let fs = NativeFileSystem::new();
        let temp_file = temp_path("nonexistent");

        let _ = std::fs::remove_file(&temp_file);

        let result = fs.read_file(&temp_file);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), VfsError::NotFound { .. }));
    }
}
