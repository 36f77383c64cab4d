//! On-disk layout shared by the installer and the launcher.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::platform::Os;

/// Stem of the installed binary. Distinct from the `envsafe` launcher so the
/// two never overwrite each other when they share a directory.
pub const BINARY_STEM: &str = "envsafe-bin";

/// Name of the directory the binary is installed into.
pub const BIN_DIR_NAME: &str = "bin";

/// Override for the install directory, read by both programs.
pub const BIN_DIR_ENV: &str = "ENVSAFE_BIN_DIR";

/// `envsafe-bin.exe` on Windows, `envsafe-bin` elsewhere.
pub fn binary_file_name(os: Os) -> String {
    format!("{}{}", BINARY_STEM, os.exe_suffix())
}

pub fn binary_path(bin_dir: &Path, os: Os) -> PathBuf {
    bin_dir.join(binary_file_name(os))
}

/// Install directory from an `ENVSAFE_BIN_DIR` value. Unset or empty means
/// [`default_bin_dir`], matching the installer's clap `env` handling.
pub fn resolve_bin_dir(value: Option<OsString>) -> PathBuf {
    value
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(default_bin_dir)
}

/// `bin/` next to the running executable, or `bin/` in the working directory
/// when the executable path cannot be determined.
pub fn default_bin_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(BIN_DIR_NAME)
}
