//! Error types for configuration resolution

use thiserror::Error;

/// Main resolution error type
///
/// All variants are detected synchronously during resolution or planning and
/// propagate immediately; no partial configuration is ever returned.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("compiler version is required but was not declared")]
    MissingCompilerVersion,

    #[error("invalid compiler version '{input}': expected an exact major.minor.patch release")]
    InvalidVersionFormat { input: String },

    #[error("invalid optimizer settings: {message}")]
    InvalidOptimizerSettings { message: String },

    #[error("path '{path}' escapes the project root '{root}'")]
    PathEscapesRoot { path: String, root: String },

    #[error("unknown plugin: '{name}'")]
    UnknownPlugin { name: String },

    #[error("plugin error [{name}]: {source}")]
    Plugin {
        name: String,
        #[source]
        source: PluginError,
    },
}

/// Error type for loading the raw configuration from disk
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("config file not found: {path}")]
    NotFound { path: String },

    #[error("cannot read config file '{path}': {reason}")]
    Read { path: String, reason: String },

    #[error("cannot parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Error type for plugin activation hooks
#[derive(Error, Debug)]
pub enum PluginError {
    #[error("requires plugin '{required}' to be activated first")]
    MissingDependency { required: String },

    #[error("activation failed: {0}")]
    Failed(String),
}
