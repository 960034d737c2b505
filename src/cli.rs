use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

mod terminal;

use anyhow::Context;
use clap::ArgAction;
use shirushi_trace::{
    CheckOutcome, Config, TraceReport,
    render::{JsonReport, write_report},
};
use tracing::instrument;

use self::terminal::Colorize;

/// Configuration file picked up from the working directory when `--config`
/// is not given.
const DEFAULT_CONFIG_FILE: &str = "shirushi.toml";

/// Check that every `@shirushi` reference in code points at a Doc-ID declared
/// in the documentation
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Source directory scanned for `@shirushi` references [default: src]
    #[arg(long, value_name = "DIR")]
    src_dir: Option<PathBuf>,

    /// Documentation directory scanned for `Doc-ID` declarations [default:
    /// docs]
    #[arg(long, value_name = "DIR")]
    docs_dir: Option<PathBuf>,

    /// Also write the report as JSON to this file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// CI mode: exit with status 1 if any reference is orphaned
    ///
    /// Doc-IDs without a code reference only produce a warning.
    #[arg(long)]
    check: bool,

    /// Configuration file [default: shirushi.toml, if present]
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        Self::setup_logging(self.verbose);

        let config = self.resolve_config()?;
        let report = shirushi_trace::trace(&config);

        {
            let mut stdout = io::stdout().lock();
            write_report(&report, &mut stdout).context("failed to write report")?;
            stdout.flush()?;
        }

        if let Some(path) = &self.output {
            Self::export_json(&report, path)?;
            println!("\nJSON report written to {}", path.display());
        }

        if self.check {
            Ok(Self::verdict(report.check()))
        } else {
            Ok(ExitCode::SUCCESS)
        }
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout carries the report
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }

    /// Load the configuration file and apply command-line overrides.
    #[instrument(level = "debug", skip(self))]
    fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Config::load(path)?
                } else {
                    tracing::debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
                    Config::default()
                }
            }
        };

        if let Some(dir) = &self.src_dir {
            config.set_src_dir(dir.clone());
        }
        if let Some(dir) = &self.docs_dir {
            config.set_docs_dir(dir.clone());
        }

        tracing::debug!(?config, "Resolved configuration");
        Ok(config)
    }

    fn export_json(report: &TraceReport, path: &Path) -> anyhow::Result<()> {
        let json = JsonReport::new(report)
            .to_string_pretty()
            .context("failed to render json output")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write JSON report to {}", path.display()))
    }

    fn verdict(outcome: CheckOutcome) -> ExitCode {
        match outcome {
            CheckOutcome::Failed { orphaned } => println!(
                "\n{}",
                format!("✗ {orphaned} orphaned reference(s) found").error()
            ),
            CheckOutcome::Warned { unimplemented } => println!(
                "\n{}",
                format!("⚠ {unimplemented} Doc-ID(s) have no code reference").warning()
            ),
            CheckOutcome::Passed => {}
        }

        if outcome.is_failure() {
            return ExitCode::FAILURE;
        }

        println!("\n{}", "✓ Check complete".success());
        ExitCode::SUCCESS
    }
}
