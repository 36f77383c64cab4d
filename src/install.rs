//! Installer flow: resolve -> download -> mark executable.

use std::path::{Path, PathBuf};

use colored::Colorize;
use tracing::info;

use crate::config::InstallConfig;
use crate::download;
use crate::error::{InstallError, Result};
use crate::layout;
use crate::platform::{Os, Target};
use crate::release;

/// Outcome of a successful install.
#[derive(Debug, Clone)]
pub struct Installed {
    pub path: PathBuf,
    pub url: String,
    pub bytes: u64,
    pub target: Target,
}

/// Resolve the host names into a target, then install.
///
/// An unsupported pair fails before any network traffic.
pub async fn run(config: &InstallConfig, os_name: &str, arch_name: &str) -> Result<Installed> {
    let target = Target::resolve(os_name, arch_name)?;
    install(config, target).await
}

/// Download the artifact for `target` into `config.bin_dir`.
pub async fn install(config: &InstallConfig, target: Target) -> Result<Installed> {
    let url = release::download_url(config, target);
    let path = layout::binary_path(&config.bin_dir, target.os);

    println!("{} Installing EnvSafe CLI...", "→".cyan());
    println!("  platform: {}", target.to_string().cyan());
    println!("  version:  {}", config.version.cyan());
    println!();

    tokio::fs::create_dir_all(&config.bin_dir)
        .await
        .map_err(|e| InstallError::io(&config.bin_dir, e))?;

    println!("{} Downloading from {}...", "→".cyan(), config.host);
    println!("  {}", url.dimmed());

    let client = download::build_client()?;
    let bytes = download::download_to_file(&client, &url, &path).await?;

    if target.os != Os::Windows {
        make_executable(&path).await?;
    }

    info!(path = %path.display(), bytes, "installed envsafe binary");

    println!("{} Installed {}", "✓".green(), path.display());
    println!();
    println!("Usage:");
    println!("  {}", "envsafe --help".cyan());
    println!("  {}", "envsafe login".cyan());
    println!("  {}", "envsafe pull --dev".cyan());
    println!();

    Ok(Installed {
        path,
        url,
        bytes,
        target,
    })
}

#[cfg(unix)]
async fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let perms = std::fs::Permissions::from_mode(0o755);
    tokio::fs::set_permissions(path, perms)
        .await
        .map_err(|e| InstallError::io(path, e))
}

// Non-unix hosts have no mode bits to set.
#[cfg(not(unix))]
async fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_unsupported_platform_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let bin_dir = dir.path().join("bin");
        // Unroutable host: reaching the network would fail differently
        let config = InstallConfig::default()
            .with_host("http://127.0.0.1:1")
            .with_bin_dir(&bin_dir);

        let err = run(&config, "sunos", "sparc").await.unwrap_err();
        assert!(matches!(err, InstallError::UnsupportedPlatform { .. }));
        assert!(!bin_dir.exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_make_executable_sets_755() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("envsafe-bin");
        std::fs::write(&path, b"#!/bin/sh\n").unwrap();
        make_executable(&path).await.unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
