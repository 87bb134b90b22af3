//! VFS Error Types

use std::fmt;

/// Result type for VFS operations
pub type VfsResult<T> = Result<T, VfsError>;

/// Error type for VFS operations
///
/// Only the failures the backends actually produce: missing paths,
/// permission problems, and underlying IO faults.
#[derive(Debug, Clone, PartialEq)]
pub enum VfsError {
    /// File or directory not found
    NotFound { path: String },

    /// Permission denied
    PermissionDenied { path: String },

    /// IO error
    Io { message: String },

    /// Custom error message
    Custom { message: String },
}

impl fmt::Display for VfsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VfsError::NotFound { path } => write!(f, "no such file or directory: {}", path),
            VfsError::PermissionDenied { path } => write!(f, "permission denied: {}", path),
            VfsError::Io { message } => write!(f, "file system error: {}", message),
            VfsError::Custom { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for VfsError {}

impl From<std::io::Error> for VfsError {
    fn from(err: std::io::Error) -> Self {
        VfsError::Io {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let not_found = VfsError::NotFound {
            path: "/project/solbuild.json".to_string(),
        };
        assert_eq!(
            not_found.to_string(),
            "no such file or directory: /project/solbuild.json"
        );

        let denied = VfsError::PermissionDenied {
            path: "/project".to_string(),
        };
        assert_eq!(denied.to_string(), "permission denied: /project");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk fell off");
        let err = VfsError::from(io);
        assert!(matches!(err, VfsError::Io { ref message } if message.contains("disk fell off")));
    }
}
