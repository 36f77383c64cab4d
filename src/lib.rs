//! # envsafe-shim
//!
//! Installer and launcher for the prebuilt EnvSafe CLI.
//!
//! ## Overview
//!
//! EnvSafe ships as one prebuilt executable per platform, published as
//! GitHub release assets named `envsafe-<os>-<arch>[.exe]`. This crate provides
//! the two pieces that sit in front of it:
//!
//! - **`envsafe-install`**: detects the host target, downloads the matching
//!   asset for this package's version into `bin/`, and marks it executable.
//! - **`envsafe`**: forwards its arguments and stdio to the installed binary
//!   and exits with the binary's exit code.
//!
//! ## Example
//!
//! ```no_run
//! use envsafe_shim::{install, InstallConfig, Target};
//!
//! # async fn example() -> envsafe_shim::Result<()> {
//! let config = InstallConfig::default();
//! let installed = install::install(&config, Target::detect()?).await?;
//! println!("installed {} bytes at {}", installed.bytes, installed.path.display());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod download;
pub mod error;
pub mod install;
pub mod launcher;
pub mod layout;
pub mod platform;
pub mod release;

pub use config::InstallConfig;
pub use error::{InstallError, Result};
pub use install::Installed;
pub use platform::{Arch, Os, Target};
