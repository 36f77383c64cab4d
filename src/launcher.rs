//! Launcher: run the installed binary with inherited stdio.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

/// Run `binary` with `args`, wait for it, and return the exit code to relay.
///
/// Spawn failures (missing binary, no execute permission) are returned as the
/// raw OS error.
pub fn launch<I, S>(binary: &Path, args: I) -> std::io::Result<i32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    debug!(binary = %binary.display(), "launching");

    let status = Command::new(binary)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    let code = exit_code(status);
    debug!(code, "child exited");
    Ok(code)
}

/// The child's exit code, or `128 + signal` when it was killed by a signal.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
