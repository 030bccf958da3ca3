//! CLI entrypoint for uigen-status
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::IsTerminal;
use tokio::io::AsyncBufRead;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use uigen_application::{
    StatusNotifier, TrackToolStatusError, TrackToolStatusOutput, TrackToolStatusUseCase,
};
use uigen_domain::{Severity, ToolDisplayFormatter};
use uigen_infrastructure::{ConfigLoader, FileConfig, JsonlInvocationSource};
use uigen_presentation::{
    Cli, ConsoleFormatter, JsonFormatter, OutputFormat, ReportMode, StatusFormatter,
    StatusReporter,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Status lines own stdout; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    block_on_and_detach(run(cli))
}

/// Drive `future` on a fresh runtime and tear the runtime down without
/// joining its blocking pool.
///
/// A stdin read parked on the blocking pool cannot be interrupted, so
/// waiting for it would keep the process alive after Ctrl-C until the
/// writer sends another line or closes the pipe.
fn block_on_and_detach<F>(future: F) -> Result<()>
where
    F: Future<Output = Result<()>>,
{
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let result = runtime.block_on(future);
    runtime.shutdown_background();
    result
}

async fn run(cli: Cli) -> Result<()> {
    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    report_config_issues(&config)?;

    let max_filename_length = cli
        .max_filename_length
        .unwrap_or(config.display.max_filename_length);
    let output = cli
        .output
        .or_else(|| config.output.format.map(OutputFormat::from))
        .unwrap_or(OutputFormat::Text);
    let color = !cli.no_color && config.output.color && std::io::stdout().is_terminal();

    info!(
        "Starting uigen-status (output {:?}, max filename length {})",
        output, max_filename_length
    );

    // === Dependency Injection ===
    let formatter: Box<dyn StatusFormatter> = match output {
        OutputFormat::Text => Box::new(ConsoleFormatter::new(color)),
        OutputFormat::Json => Box::new(JsonFormatter),
    };
    let mode = if cli.final_only {
        ReportMode::FinalOnly
    } else {
        ReportMode::Live
    };
    let reporter = StatusReporter::new(formatter, mode).with_summary(!cli.quiet);

    let token = CancellationToken::new();
    let ctrl_c_token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c_token.cancel();
        }
    });

    let use_case = TrackToolStatusUseCase::new(ToolDisplayFormatter::new(max_filename_length))
        .with_cancellation(token);

    let result = match &cli.input {
        Some(path) => {
            let source = JsonlInvocationSource::from_path(path)
                .await
                .with_context(|| format!("Failed to open {}", path.display()))?;
            track(source.with_strict(cli.strict), &use_case, &reporter).await
        }
        None => {
            let source = JsonlInvocationSource::stdin();
            track(source.with_strict(cli.strict), &use_case, &reporter).await
        }
    };

    finish(result)
}

async fn track<R>(
    mut source: JsonlInvocationSource<R>,
    use_case: &TrackToolStatusUseCase,
    notifier: &dyn StatusNotifier,
) -> Result<TrackToolStatusOutput, TrackToolStatusError>
where
    R: AsyncBufRead + Unpin + Send,
{
    let output = use_case.execute(&mut source, notifier).await?;
    if source.skipped() > 0 {
        warn!(
            "{} line(s) were not valid tool invocations and were skipped",
            source.skipped()
        );
    }
    Ok(output)
}

/// Map the tracking result to the process outcome. Interruption is a clean exit.
fn finish(result: Result<TrackToolStatusOutput, TrackToolStatusError>) -> Result<()> {
    match result {
        Ok(output) => {
            info!("Done: {} records read", output.records_read);
            Ok(())
        }
        Err(e) if e.is_cancelled() => {
            info!("Interrupted");
            Ok(())
        }
        Err(e) => Err(e).context("Failed to read tool invocations"),
    }
}

/// Log every config issue; refuse to run when any of them is an error.
fn report_config_issues(config: &FileConfig) -> Result<()> {
    let mut errors = 0usize;
    for issue in config.validate() {
        match issue.severity {
            Severity::Error => {
                error!("Config error: {}", issue.message);
                errors += 1;
            }
            Severity::Warning => warn!("Config warning: {}", issue.message),
        }
    }
    if errors > 0 {
        bail!("Invalid configuration ({} error(s))", errors);
    }
    Ok(())
}
