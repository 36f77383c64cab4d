//! `envsafe`: forwards argv and stdio to the installed EnvSafe binary.
//!
//! Defines no flags of its own. The binary is looked up in `$ENVSAFE_BIN_DIR`
//! when set and non-empty, otherwise in `bin/` next to this executable.

use colored::Colorize;
use envsafe_shim::{launcher, layout, Os};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let Some(os) = Os::current() else {
        eprintln!(
            "{} unsupported platform: {}",
            "[envsafe]".red().bold(),
            std::env::consts::OS
        );
        std::process::exit(1);
    };
    let bin_dir = layout::resolve_bin_dir(std::env::var_os(layout::BIN_DIR_ENV));
    let binary = layout::binary_path(&bin_dir, os);

    match launcher::launch(&binary, std::env::args_os().skip(1)) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {e}", "[envsafe]".red().bold());
            std::process::exit(1);
        }
    }
}
