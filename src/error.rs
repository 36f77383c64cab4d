//! Error types for envsafe-shim

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while installing the EnvSafe binary
#[derive(Debug, Error)]
pub enum InstallError {
    /// Host OS/architecture pair has no published artifact
    #[error(
        "Unsupported platform: {os}-{arch} (supported: macOS (x64, arm64), Linux (x64, arm64), Windows (x64))"
    )]
    UnsupportedPlatform { os: String, arch: String },

    /// Release server answered 404
    #[error("Binary not found for this platform: {url}")]
    NotFound { url: String },

    /// Any other non-success status
    #[error("Download failed with status {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// Connection failure or interrupted body stream
    #[error("Download error for {url}: {reason}")]
    Network { url: String, reason: String },

    /// The redirect target redirected again
    #[error("Too many redirects while downloading {url}")]
    RedirectLimit { url: String },

    /// A 301/302 without a usable `Location` header
    #[error("Redirect from {url} has no valid Location header")]
    MissingLocation { url: String },

    /// Local filesystem failure
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl InstallError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InstallError::Io {
            path: path.into(),
            source,
        }
    }

    /// Follow-up instructions to print alongside the error, if any.
    pub fn guidance(&self) -> &'static [&'static str] {
        match self {
            InstallError::NotFound { .. } => &[
                "1. Install with Cargo: cargo install envsafe-cli",
                "2. Build from source",
                "3. Wait for the binaries to be published",
            ],
            InstallError::Network { .. } => &["cargo install envsafe-cli"],
            _ => &[],
        }
    }
}

/// Result type alias for installer operations
pub type Result<T> = std::result::Result<T, InstallError>;
