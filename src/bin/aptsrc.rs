//! aptsrc - interactive TUI for fetching APT source packages.

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

fn print_usage() {
    eprintln!("Usage: aptsrc [OPTIONS]");
    eprintln!();
    eprintln!("Interactive terminal UI for searching APT packages and");
    eprintln!("batch-downloading their source archives.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <PATH>     Config file (default: ~/.config/aptsrc/config.toml)");
    eprintln!("  -h, --help          Show this help");
    eprintln!();
    eprintln!("Set RUST_LOG=debug and redirect stderr to a file for operator logs.");
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let mut config_path: Option<PathBuf> = None;

    let args: Vec<String> = env::args().skip(1).collect();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                if i < args.len() {
                    config_path = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: --config requires a value");
                    return ExitCode::FAILURE;
                }
            }
            "-h" | "--help" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            other => {
                eprintln!("Error: unknown argument '{other}'");
                print_usage();
                return ExitCode::FAILURE;
            }
        }
        i += 1;
    }

    let path = config_path.unwrap_or_else(aptsrc::AppConfig::default_path);
    let config = match aptsrc::AppConfig::load_or_create(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
    };
    log::info!("loaded config from {}", path.display());

    #[cfg(feature = "tui")]
    {
        match aptsrc::tui::run(config).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        }
    }
    #[cfg(not(feature = "tui"))]
    {
        let _ = config;
        eprintln!("TUI support not compiled in");
        ExitCode::FAILURE
    }
}
