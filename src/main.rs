mod cli;

use cli::Args;
use license_report::adapters::outbound::console::StderrProgressReporter;
use license_report::adapters::outbound::filesystem::{
    ManifestResolver, ReportDestination, SpdxTagClassifier,
};
use license_report::application::dto::{ReportRequest, RunContext};
use license_report::application::factories::WriterFactory;
use license_report::application::use_cases::GenerateReportUseCase;
use license_report::config::{
    discover_config, load_config_from_path, Settings, CONFIG_FILENAME,
};
use license_report::report_generation::domain::ReportRow;
use license_report::shared::error::{ConfigError, ExitCode};
use license_report::shared::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use std::process;
use tracing::debug;

fn main() {
    let args = Args::parse_args();
    init_logging(args.verbose, args.quiet);

    let exit_code = match run(args) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            print_error(&e);
            exit_code_for(&e)
        }
    };

    process::exit(exit_code.as_i32());
}

fn run(args: Args) -> Result<()> {
    // Load and merge configuration before touching any collaborator
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };
    if config.is_some() && args.config.is_none() && !args.quiet {
        eprintln!("📄 Auto-discovered config file: {}", CONFIG_FILENAME);
    }
    let settings = Settings::resolve(args.overrides(), config)?;
    debug!(?settings, "Resolved settings");

    // Create adapters (Dependency Injection)
    let classifier = SpdxTagClassifier::new(settings.confidence_threshold)?;
    let resolver = ManifestResolver::new(settings.manifest.clone(), settings.git_remotes.clone());
    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let use_case = GenerateReportUseCase::new(classifier, resolver, progress_reporter);

    let destination = ReportDestination::from_output(args.output);
    let mut writer = WriterFactory::create(settings.format, destination.open()?, &ReportRow::HEADER);

    if !args.quiet {
        eprintln!(
            "{} ({})",
            WriterFactory::progress_message(settings.format),
            destination.describe()
        );
    }

    let request = ReportRequest::new(args.packages, settings.ignore_patterns);
    let summary = use_case.execute(&RunContext::new(), &request, &mut writer)?;
    debug!(
        rows = summary.rows_written,
        diagnostics = summary.diagnostics.len(),
        "Report finished"
    );

    Ok(())
}

/// Initialize tracing/logging based on CLI flags.
fn init_logging(verbose: u8, quiet: bool) {
    use std::io::IsTerminal;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .without_time(),
        )
        .with(filter)
        .try_init();
}

/// Invalid invocations exit with 2, every other failure with 1
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    if error.downcast_ref::<ConfigError>().is_some() {
        ExitCode::InvalidArguments
    } else {
        ExitCode::ReportFailed
    }
}

fn print_error(error: &anyhow::Error) {
    eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
    eprintln!("{}", error);

    // Display error chain
    for cause in error.chain().skip(1) {
        eprintln!("\n{} {}", "Caused by:".yellow(), cause);
    }

    eprintln!();
}
