//! Path normalization against the project root
//!
//! Pure path-string computation: no filesystem I/O happens here. Existence
//! probing is a separate concern and goes through the VFS.

use crate::error::ResolveError;
use std::path::{Component, Path, PathBuf};

/// Collapse `.` and `..` components lexically, without touching the disk.
///
/// Leading `..` components on an already-rooted path pop silently; callers
/// that care about root escapes must check containment afterwards, which is
/// what [`resolve_under_root`] does.
pub fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => out.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

/// Resolve a declared path against the project root.
///
/// Relative declarations are joined onto `root`; absolute declarations are
/// taken as-is. The result is normalized and must stay inside `root`,
/// otherwise resolution fails with `PathEscapesRoot`.
///
/// # Arguments
/// * `root` - Absolute, normalized project root
/// * `declared` - The path string as written in the configuration
pub fn resolve_under_root(root: &Path, declared: &str) -> Result<PathBuf, ResolveError> {
    let declared_path = Path::new(declared);
    let joined = if declared_path.is_absolute() {
        declared_path.to_path_buf()
    } else {
        root.join(declared_path)
    };

    let normalized = lexical_normalize(&joined);
    if !normalized.starts_with(root) {
        return Err(ResolveError::PathEscapesRoot {
            path: declared.to_string(),
            root: root.to_string_lossy().to_string(),
        });
    }

    Ok(normalized)
}
