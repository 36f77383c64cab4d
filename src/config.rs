//! Installer configuration.

use std::path::PathBuf;

use crate::layout;

/// Release host used when no override is given.
pub const DEFAULT_HOST: &str = "https://github.com";

/// GitHub `owner/repo` publishing the EnvSafe releases.
pub const DEFAULT_REPO: &str = "Ifiboys/rust-envsafe-cli";

/// Version of this package; release tags are `v<version>`.
pub const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything the installer needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct InstallConfig {
    /// Scheme and host of the release server, without a trailing slash.
    pub host: String,
    /// Repository path on the release server (e.g. `"Ifiboys/rust-envsafe-cli"`).
    pub repo: String,
    /// Release version without the `v` prefix.
    pub version: String,
    /// Directory the binary is written to.
    pub bin_dir: PathBuf,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            repo: DEFAULT_REPO.into(),
            version: PACKAGE_VERSION.into(),
            bin_dir: layout::default_bin_dir(),
        }
    }
}

impl InstallConfig {
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = repo.into().trim_matches('/').to_string();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        self.version = version.strip_prefix('v').unwrap_or(&version).to_string();
        self
    }

    pub fn with_bin_dir(mut self, bin_dir: impl Into<PathBuf>) -> Self {
        self.bin_dir = bin_dir.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = InstallConfig::default();
        assert_eq!(config.host, "https://github.com");
        assert_eq!(config.repo, "Ifiboys/rust-envsafe-cli");
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
        assert!(config.bin_dir.ends_with("bin"));
    }

    #[test]
    fn test_builders_normalize() {
        let config = InstallConfig::default()
            .with_host("http://127.0.0.1:8080/")
            .with_repo("/acme/tool/")
            .with_version("v1.2.3")
            .with_bin_dir("/tmp/x");
        assert_eq!(config.host, "http://127.0.0.1:8080");
        assert_eq!(config.repo, "acme/tool");
        assert_eq!(config.version, "1.2.3");
        assert_eq!(config.bin_dir, PathBuf::from("/tmp/x"));
    }

    #[test]
    fn test_version_without_prefix_kept() {
        let config = InstallConfig::default().with_version("0.4.0");
        assert_eq!(config.version, "0.4.0");
    }
}
