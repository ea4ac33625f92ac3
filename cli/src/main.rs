//! CLI entrypoint for exam-paper
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use paper_application::{
    GeneratePaperInput, GeneratePaperUseCase, NoProgress, ProgressNotifier,
};
use paper_domain::PaperFormat;
use paper_infrastructure::{
    ConfigLoader, FileConfig, JsonlGenerationLogger, open_source, renderer_for,
};
use paper_presentation::{
    Cli, ConsoleFormatter, OutputConfig, OutputFormatter, ProgressReporter, SimpleProgress,
};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting exam-paper");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    let file_config = apply_cli_quotas(&cli, file_config);
    for issue in file_config.check()? {
        warn!("{}", issue.message);
    }

    let output = OutputConfig {
        format: cli
            .output
            .map(Into::into)
            .or(file_config.output.format)
            .unwrap_or_default(),
        color: file_config.output.color && !cli.no_color,
        show_progress: !cli.quiet,
    };
    if !output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let use_case = build_use_case(&cli, &file_config)?;
    let input = build_input(&cli, &file_config)?;

    let progress: Box<dyn ProgressNotifier> = if !output.wants_progress() {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let report = if cli.dry_run {
        let prepared = use_case.prepare(input, progress.as_ref())?;
        ConsoleFormatter.format_as(output.format, &prepared, None)
    } else {
        let result = use_case.execute_with_progress(input, progress.as_ref())?;
        ConsoleFormatter.format_as(output.format, &result.prepared, Some(&result.rendered))
    };

    println!("{}", report);

    Ok(())
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let Some(file_name) = path.file_name() else {
        bail!("Invalid log file path: {}", path.display());
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Could not create log directory {}", dir.display()))?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn build_use_case(cli: &Cli, config: &FileConfig) -> Result<GeneratePaperUseCase> {
    let Some(bank) = cli.bank.as_ref().or(config.bank.path.as_ref()) else {
        bail!("No question bank given. Pass a bank file or set `path` under [bank] in the config.");
    };

    let mut options = config.bank.source_options();
    if let Some(sheet) = &cli.sheet {
        options.sheet = Some(sheet.clone());
    }
    if cli.skip_invalid_rows {
        options.skip_invalid_rows = true;
    }
    let source = open_source(bank, config.bank.parse_format().0, options)?;

    let format = cli
        .format
        .map(PaperFormat::from)
        .unwrap_or_else(|| config.paper.parse_format().0);
    let out = cli
        .out
        .clone()
        .unwrap_or_else(|| config.paper.output_path(format));
    let renderer = renderer_for(format, out, config.paper.layout.clone());

    let mut use_case = GeneratePaperUseCase::new(source, renderer);

    let log_path = cli
        .generation_log
        .as_ref()
        .or(config.log.generation_log.as_ref());
    if let Some(path) = log_path
        && let Some(logger) = JsonlGenerationLogger::new(path)
    {
        info!("Generation log: {}", logger.path().display());
        use_case = use_case.with_logger(Arc::new(logger));
    }

    Ok(use_case)
}

/// Drop the configured quotas when `-q` replaces them, so they are not validated
fn apply_cli_quotas(cli: &Cli, config: FileConfig) -> FileConfig {
    if cli.quotas.is_empty() {
        config
    } else {
        FileConfig {
            quotas: Vec::new(),
            ..config
        }
    }
}

fn build_input(cli: &Cli, config: &FileConfig) -> Result<GeneratePaperInput> {
    // Quotas given on the command line replace the configured ones
    let input = if cli.quotas.is_empty() {
        GeneratePaperInput::parse(config.quota_pairs())?
    } else {
        GeneratePaperInput::parse(cli.quota_pairs())?
    };
    if input.quotas.is_empty() {
        warn!("No quotas given; use -q CATEGORY=COUNT or [[quotas]] in the config");
    }

    let mut params = config.generation_params();
    if let Some(title) = &cli.title {
        params = params.with_title(title.clone());
    }
    if cli.seed.is_some() {
        params = params.with_seed(cli.seed);
    }
    if cli.no_filter {
        params = params.without_filter();
    } else if let Some(category) = cli.filter_category {
        params.filter.enabled = true;
        params.filter.exclude_low_priority_for = category;
    }

    Ok(input.with_params(params))
}
