//! CLI entrypoint for the bee self-check harness.

use std::path::PathBuf;

use bee_harness::suites::{core_bench_registry, core_test_registry};
use bee_harness::{HarnessConfig, Session, SuiteReport};
use clap::{Parser, ValueEnum};

/// Run the built-in bee test and bench suites.
#[derive(Debug, Parser)]
#[command(name = "bee-harness")]
#[command(about = "Minimal test and benchmark harness for bee")]
struct Cli {
    /// What to run.
    #[arg(value_enum)]
    mode: Mode,
    /// Pad failure and bench lines up to this column (clamped to 255).
    #[arg(long)]
    align: Option<usize>,
    /// Write a JSONL structured log to this path.
    #[arg(long)]
    log: Option<PathBuf>,
    /// Write a run report here (`.json` gives JSON, anything else markdown).
    #[arg(long)]
    report: Option<PathBuf>,
    /// Run each bench callable once more with output visible.
    #[arg(long)]
    echo_once: bool,
    /// Skip the `RUNNING ...` banners.
    #[arg(long)]
    no_banner: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Test,
    Bench,
    All,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = HarnessConfig::from_env()?;
    if let Some(column) = cli.align {
        config = config.with_align_column(column);
    }
    if let Some(path) = cli.log {
        config = config.with_log_path(path);
    }
    if cli.echo_once {
        config = config.with_bench_echo_once(true);
    }
    if cli.no_banner {
        config = config.with_banner(false);
    }

    let mut session = Session::open(config)?;
    let mut report = SuiteReport::new("bee self-check");

    if matches!(cli.mode, Mode::Test | Mode::All) {
        let summary = core_test_registry().run(&mut session);
        report = report.with_tests(summary);
    }

    if matches!(cli.mode, Mode::Bench | Mode::All) {
        if cli.mode == Mode::All {
            session.output.line("");
        }
        let results = core_bench_registry().run(&mut session);
        report = report.with_benches(results);
    }

    session.flush()?;

    if let Some(path) = &cli.report {
        report.write_to(path)?;
        eprintln!("Report written to {}", path.display());
    }

    if !report.succeeded() {
        std::process::exit(1);
    }
    Ok(())
}
