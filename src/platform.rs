//! Platform detection for OS and architecture.

use std::fmt;

use crate::error::{InstallError, Result};

/// Operating systems with published release artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    MacOs,
    Linux,
    Windows,
}

impl Os {
    /// Canonical identifier used in artifact names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Os::MacOs => "macos",
            Os::Linux => "linux",
            Os::Windows => "windows",
        }
    }

    /// Accepts Rust (`macos`) and Node-style (`darwin`, `win32`) names.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "macos" | "darwin" => Some(Os::MacOs),
            "linux" => Some(Os::Linux),
            "windows" | "win32" => Some(Os::Windows),
            _ => None,
        }
    }

    /// Suffix appended to executables on this OS.
    pub fn exe_suffix(&self) -> &'static str {
        match self {
            Os::Windows => ".exe",
            _ => "",
        }
    }

    /// The running host's OS, if artifacts are published for it.
    pub fn current() -> Option<Self> {
        Self::parse(std::env::consts::OS)
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CPU architectures with published release artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X86_64,
    Aarch64,
}

impl Arch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::X86_64 => "x86_64",
            Arch::Aarch64 => "aarch64",
        }
    }

    /// Accepts Rust (`x86_64`, `aarch64`) and Node-style (`x64`, `arm64`) names.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "x86_64" | "x64" | "amd64" => Some(Arch::X86_64),
            "aarch64" | "arm64" => Some(Arch::Aarch64),
            _ => None,
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A supported `(os, arch)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub os: Os,
    pub arch: Arch,
}

impl Target {
    /// Resolve host names into a supported target.
    ///
    /// Fails with [`InstallError::UnsupportedPlatform`] when either name is
    /// unknown or the pair has no artifact (Windows on arm64).
    pub fn resolve(os_name: &str, arch_name: &str) -> Result<Self> {
        let unsupported = || InstallError::UnsupportedPlatform {
            os: os_name.to_string(),
            arch: arch_name.to_string(),
        };

        let os = Os::parse(os_name).ok_or_else(unsupported)?;
        let arch = Arch::parse(arch_name).ok_or_else(unsupported)?;

        match (os, arch) {
            (Os::Windows, Arch::Aarch64) => Err(unsupported()),
            _ => Ok(Self { os, arch }),
        }
    }

    /// Detect the target of the running host.
    pub fn detect() -> Result<Self> {
        Self::resolve(std::env::consts::OS, std::env::consts::ARCH)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}
