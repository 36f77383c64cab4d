//! `envsafe-install`: downloads the EnvSafe binary for this host.

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use envsafe_shim::config::{InstallConfig, DEFAULT_HOST, DEFAULT_REPO};
use envsafe_shim::{install, layout, InstallError};

#[derive(Parser)]
#[command(
    name = "envsafe-install",
    about = "Download the prebuilt EnvSafe CLI for this platform",
    version
)]
struct Cli {
    /// Release server scheme and host
    #[arg(long, env = "ENVSAFE_DOWNLOAD_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Repository (`owner/name`) publishing the releases
    #[arg(long, env = "ENVSAFE_REPO", default_value = DEFAULT_REPO)]
    repo: String,

    /// Directory to install into (default: `bin/` next to this executable)
    #[arg(long, env = layout::BIN_DIR_ENV)]
    bin_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .without_time()
        .init();

    let mut config = InstallConfig::default()
        .with_host(cli.host)
        .with_repo(cli.repo);
    if let Some(dir) = cli.bin_dir {
        config = config.with_bin_dir(dir);
    }

    if let Err(e) = install::run(&config, std::env::consts::OS, std::env::consts::ARCH).await {
        report(&e);
        std::process::exit(1);
    }
}

fn report(e: &InstallError) {
    eprintln!("{} {e}", "✗".red().bold());

    let guidance = e.guidance();
    if guidance.is_empty() {
        return;
    }
    eprintln!();
    match e {
        InstallError::NotFound { .. } => eprintln!("Solutions:"),
        _ => eprintln!("Alternative:"),
    }
    for line in guidance {
        eprintln!("  {}", line.cyan());
    }
}
