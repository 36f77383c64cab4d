//! Release artifact naming.

use crate::config::InstallConfig;
use crate::platform::Target;

/// Build the artifact file name for a target (e.g. `"envsafe-linux-x86_64"`).
pub fn artifact_name(target: Target) -> String {
    format!(
        "envsafe-{}-{}{}",
        target.os,
        target.arch,
        target.os.exe_suffix()
    )
}

/// Build the download URL of the artifact for `target` at the configured version.
pub fn download_url(config: &InstallConfig, target: Target) -> String {
    format!(
        "{}/{}/releases/download/v{}/{}",
        config.host,
        config.repo,
        config.version,
        artifact_name(target)
    )
}
