use anyhow::{Context, Result};
use armsort::{run_demo, DemoOptions};
use clap::{ArgAction, Parser};
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the `-v` log level.
const LOG_ENV: &str = "ARMSORT_LOG";

/// armsort — quicksort demo for ARM cross-compilation.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Print only the original and sorted array lines
    #[arg(long)]
    no_banner: bool,

    /// Increase diagnostic output on stderr (-v info, -vv debug)
    #[arg(long, short, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn default_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(cli.default_filter()));

    // Stdout carries the report; diagnostics must stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let options = DemoOptions {
        banner: !cli.no_banner,
        ..DemoOptions::default()
    };

    tracing::info!(size = options.data.len(), "armsort: running quicksort demo");

    let stdout = io::stdout();
    let report = run_demo(&options, &mut stdout.lock()).context("demo run failed")?;

    tracing::info!(
        min = report.sorted.first().copied(),
        max = report.sorted.last().copied(),
        "armsort: demo complete"
    );
    Ok(())
}
