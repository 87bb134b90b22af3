//! Compiler version validation

use crate::error::ResolveError;
use semver::Version;

/// Parse a declared compiler version.
///
/// Only exact `major.minor.patch` releases are accepted. Range syntax,
/// aliases like `latest`, pre-release tags, and build metadata are all
/// rejected: the toolchain pins one concrete compiler release per build.
pub fn parse_compiler_version(input: &str) -> Result<Version, ResolveError> {
    let trimmed = input.trim();
    let version = Version::parse(trimmed).map_err(|_| ResolveError::InvalidVersionFormat {
        input: input.to_string(),
    })?;

    if !version.pre.is_empty() || !version.build.is_empty() {
        return Err(ResolveError::InvalidVersionFormat {
            input: input.to_string(),
        });
    }

    Ok(version)
}
