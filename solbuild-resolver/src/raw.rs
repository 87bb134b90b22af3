//! Raw configuration model
//!
//! Mirrors the declarative project file as written by the user, before any
//! validation or defaulting. Every field is optional here; the resolver is
//! the only place where requiredness and defaults are decided.

use serde::Deserialize;

/// The raw project declaration, as deserialized from `solbuild.json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawBuildConfig {
    /// Compiler declaration: either a bare version string or a full block
    pub solidity: Option<RawSolidity>,
    /// Project path overrides
    pub paths: Option<RawPaths>,
    /// Plugin identifiers, in activation order
    pub plugins: Option<Vec<String>>,
}

impl RawBuildConfig {
    /// Create an empty declaration
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserialize from an in-memory JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Set the compiler version (shorthand form)
    pub fn solidity_version(mut self, version: impl Into<String>) -> Self {
        match self.solidity {
            Some(RawSolidity::Full(ref mut full)) => full.version = Some(version.into()),
            _ => self.solidity = Some(RawSolidity::Version(version.into())),
        }
        self
    }

    /// Set the optimizer settings
    pub fn optimizer(mut self, enabled: bool, runs: Option<i64>) -> Self {
        let optimizer = RawOptimizer {
            enabled: Some(enabled),
            runs,
        };
        let version = self.declared_version().map(|v| v.to_string());
        self.solidity = Some(RawSolidity::Full(RawSolcConfig {
            version,
            settings: Some(RawSolcSettings {
                optimizer: Some(optimizer),
            }),
        }));
        self
    }

    /// Set the sources directory
    pub fn sources(mut self, path: impl Into<String>) -> Self {
        self.paths.get_or_insert_with(RawPaths::default).sources = Some(path.into());
        self
    }

    /// Append a plugin identifier
    pub fn plugin(mut self, name: impl Into<String>) -> Self {
        self.plugins.get_or_insert_with(Vec::new).push(name.into());
        self
    }

    /// The declared compiler version, if any
    pub fn declared_version(&self) -> Option<&str> {
        match &self.solidity {
            Some(RawSolidity::Version(v)) => Some(v),
            Some(RawSolidity::Full(full)) => full.version.as_deref(),
            None => None,
        }
    }

    /// The declared optimizer block, if any
    pub fn declared_optimizer(&self) -> Option<&RawOptimizer> {
        match &self.solidity {
            Some(RawSolidity::Full(full)) => full
                .settings
                .as_ref()
                .and_then(|s| s.optimizer.as_ref()),
            _ => None,
        }
    }
}

/// Compiler declaration: `"solidity": "0.8.9"` or the full settings block
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawSolidity {
    /// Shorthand: just the version string
    Version(String),
    /// Full form with settings
    Full(RawSolcConfig),
}

/// Full compiler configuration block
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSolcConfig {
    pub version: Option<String>,
    pub settings: Option<RawSolcSettings>,
}

/// Compiler settings block
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSolcSettings {
    pub optimizer: Option<RawOptimizer>,
}

/// Raw optimizer declaration
///
/// `runs` is kept as a signed integer so that non-positive declarations
/// survive deserialization and can be rejected with a precise error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawOptimizer {
    pub enabled: Option<bool>,
    pub runs: Option<i64>,
}

/// Raw path overrides, relative to the project root unless absolute
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawPaths {
    pub sources: Option<String>,
    pub artifacts: Option<String>,
    pub cache: Option<String>,
}
