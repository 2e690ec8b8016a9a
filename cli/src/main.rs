//! CLI entrypoint for Nexus
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use nexus_application::{NoProgress, OrchestrationService, ProgressNotifier};
use nexus_domain::{
    AnalysisTemplate, OrchestrationRequest, OrchestrationResult, OutputFormat, RequestContext,
};
use nexus_infrastructure::{ConfigLoader, EnvCredentialSource, FileConfig, RegistryBuilder};
use nexus_presentation::{
    Cli, Command, ConsoleFormatter, OutputFormatter, ProgressReporter, SimpleProgress,
};
use serde_json::Value;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting Nexus");

    if matches!(cli.command, Command::ShowConfig) {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(());
    }

    let config = load_config(&cli)?;
    ConsoleFormatter::set_color(config.output.color);

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let credentials = EnvCredentialSource::new();
    let registry = RegistryBuilder::new(&credentials)
        .with_config(&config.connectors)
        .build();
    let service = OrchestrationService::new(Arc::new(registry));

    let progress = progress_mode(cli.quiet, format, std::io::stderr().is_terminal());

    match cli.command {
        Command::Ask {
            prompt,
            mode,
            context,
        } => {
            let context = context.as_deref().map(parse_context).transpose()?;
            let request = OrchestrationRequest::parse(&prompt, Some(&mode), context)?;
            let result = run_request(&service, request, progress).await?;
            print_result(&result, format);
        }
        Command::Health => {
            let report = service.health();
            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", ConsoleFormatter::format_health(&report));
            }
        }
        Command::Info => {
            let info = service.info();
            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                print!("{}", ConsoleFormatter::format_info(&info));
            }
        }
        Command::AnalyzeSip { input } => {
            let log = read_input(&input)?;
            let request = AnalysisTemplate::sip_log_request(&log)?;
            let result = run_request(&service, request, progress).await?;
            print_result(&result, format);
        }
        Command::PredictFailure { input } => {
            let data = read_json(&input)?;
            let request = AnalysisTemplate::device_failure_request(&data)?;
            let result = run_request(&service, request, progress).await?;
            print_result(&result, format);
        }
        Command::AutoCorrect { input } => {
            let data = read_json(&input)?;
            let request = AnalysisTemplate::auto_correction_request(&data)?;
            let result = run_request(&service, request, progress).await?;
            print_result(&result, format);
        }
        Command::ShowConfig => {}
    }

    Ok(())
}

/// How dispatch progress is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProgressMode {
    Silent,
    Bar,
    Lines,
}

/// Quiet runs and JSON output stay silent; a non-terminal stderr gets plain lines
fn progress_mode(quiet: bool, format: OutputFormat, interactive: bool) -> ProgressMode {
    if quiet || format == OutputFormat::Json {
        ProgressMode::Silent
    } else if interactive {
        ProgressMode::Bar
    } else {
        ProgressMode::Lines
    }
}

async fn run_request(
    service: &OrchestrationService,
    request: OrchestrationRequest,
    mode: ProgressMode,
) -> Result<OrchestrationResult> {
    let bar;
    let progress: &dyn ProgressNotifier = match mode {
        ProgressMode::Silent => &NoProgress,
        ProgressMode::Bar => {
            bar = ProgressReporter::new();
            &bar
        }
        ProgressMode::Lines => &SimpleProgress,
    };
    Ok(service.submit_with_progress(request, progress).await?)
}

/// Initialize logging based on verbosity level, `RUST_LOG` taking precedence
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }

    let config = ConfigLoader::load(cli.config.as_deref())
        .map_err(|e| anyhow!("failed to load configuration: {}", e))?;

    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    Ok(config)
}

fn parse_context(raw: &str) -> Result<RequestContext> {
    match serde_json::from_str::<Value>(raw).context("--context must be valid JSON")? {
        Value::Object(map) => Ok(map),
        _ => Err(anyhow!("--context must be a JSON object")),
    }
}

/// Read a file, or stdin when `input` is `-`
fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        std::io::read_to_string(std::io::stdin()).context("failed to read stdin")
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read {}", input))
    }
}

fn read_json(input: &str) -> Result<Value> {
    let raw = read_input(input)?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not valid JSON", input))
}

fn print_result(result: &OrchestrationResult, format: OutputFormat) {
    println!("{}", ConsoleFormatter.render(result, format));
}
