//! Solbuild Virtual File System
//!
//! A virtual file system abstraction with multiple backend implementations,
//! so configuration loading and directory probing stay testable without
//! touching the real disk.
//!
//! # Usage
//! ```rust,ignore
//! use solbuild_vfs::{VirtualFileSystem, MemoryFileSystem};
//! use std::path::Path;
//!
//! let fs = MemoryFileSystem::new();
//! fs.write_file(Path::new("/project/solbuild.json"), b"{}").unwrap();
//! let content = fs.read_file(Path::new("/project/solbuild.json")).unwrap();
//! ```

mod error;
mod memory;
mod native;
mod r#trait;

pub use error::{VfsError, VfsResult};
pub use memory::MemoryFileSystem;
pub use native::NativeFileSystem;
pub use r#trait::VirtualFileSystem;
