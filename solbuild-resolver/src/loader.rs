//! Config file loading
//!
//! Reads the project declaration file through the VFS and deserializes it
//! into the raw model. Loading is the only I/O the resolver family does.

use crate::error::LoadError;
use crate::raw::RawBuildConfig;
use solbuild_vfs::VirtualFileSystem;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Loads raw build configurations from a virtual file system
pub struct ConfigLoader {
    vfs: Arc<dyn VirtualFileSystem>,
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader").finish_non_exhaustive()
    }
}

impl ConfigLoader {
    /// Create a loader over the given file system
    pub fn new(vfs: Arc<dyn VirtualFileSystem>) -> Self {
        Self { vfs }
    }

    /// Load and deserialize a project declaration file
    ///
    /// # Arguments
    /// * `path` - Path to the declaration file (conventionally `solbuild.json`)
    pub fn load(&self, path: &Path) -> Result<RawBuildConfig, LoadError> {
        let display_path = path.to_string_lossy().to_string();

        if !self.vfs.exists(path) {
            return Err(LoadError::NotFound { path: display_path });
        }

        let bytes = self.vfs.read_file(path).map_err(|e| LoadError::Read {
            path: display_path.clone(),
            reason: e.to_string(),
        })?;

        let raw: RawBuildConfig =
            serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
                path: display_path.clone(),
                source,
            })?;

        debug!(target: "solbuild::loader", path = %display_path, "loaded project declaration");
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solbuild_vfs::MemoryFileSystem;

    fn loader_with(path: &str, content: &[u8]) -> ConfigLoader {
        let fs = MemoryFileSystem::with_files([(path, content.to_vec())]);
        ConfigLoader::new(Arc::new(fs))
    }

    #[test]
    fn test_load_declaration() {
        let loader = loader_with(
            "/project/solbuild.json",
            br#"{ "solidity": "0.8.9", "plugins": ["compiler"] }"#,
        );

        let raw = loader.load(Path::new("/project/solbuild.json")).unwrap();
        assert_eq!(raw.declared_version(), Some("0.8.9"));
        assert_eq!(raw.plugins.as_deref(), Some(&["compiler".to_string()][..]));
    }

    #[test]
    fn test_missing_file() {
        let loader = ConfigLoader::new(Arc::new(MemoryFileSystem::new()));

        let result = loader.load(Path::new("/project/solbuild.json"));
        assert!(matches!(result, Err(LoadError::NotFound { .. })));
    }

    #[test]
    fn test_malformed_json() {
        let loader = loader_with("/project/solbuild.json", b"{ not json");

        let result = loader.load(Path::new("/project/solbuild.json"));
        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }
}
