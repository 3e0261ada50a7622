mod error;
mod sort;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::error::{report, Exit};
use crate::sort::{sort_file, Context};
use nanpsort_config::AppConfig;

/// Print a `NAME<TAB>NUMBER` list ordered by North American phone number.
///
/// The input file is the only required argument. Every flag is optional and
/// leaves plain text output and abort-on-malformed-line in place when omitted.
#[derive(Debug, Parser)]
#[command(name = "nanpsort", version, about)]
struct Cli {
    /// File of names and numbers, one name, a tab and a number per line
    file: PathBuf,
    /// TOML file setting `malformed_lines` and `[output] format`
    #[arg(long)]
    config: Option<PathBuf>,
    /// Emit a JSON array instead of text lines
    #[arg(long)]
    json: bool,
    /// Log dropped records and print every error cause
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err, verbose);
            Exit::classify(&err).into()
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        file,
        config: config_path,
        json,
        verbose: _,
    } = cli;

    let app_config = AppConfig::load(config_path.as_deref()).with_context(|| "load config")?;
    match &config_path {
        Some(path) => debug!(path = %path.display(), config = ?app_config, "config loaded"),
        None => debug!("no config file, using defaults"),
    }

    let ctx = Context {
        config: &app_config,
        json,
    };
    sort_file(&ctx, &file)
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
