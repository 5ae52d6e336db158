//! CLI entrypoint for autoreply
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use autoreply_application::{
    ActivityLogger, DispatchNotifier, MessageStore, NoActivityLogger, NoDispatchProgress,
    ReplyDispatcher, Session,
};
use autoreply_domain::{BusinessConfig, Message, MessageId};
use autoreply_infrastructure::{
    ConfigLoader, FileConfig, JsonlActivityLogger, SimulatedAuthProvider, build_generator,
    sample_messages,
};
use autoreply_presentation::{
    Cli, Command, ConsoleFormatter, DashboardRepl, OutputConfig, OutputFormat, ProgressReporter,
    ReplConfig, build_filter,
};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(());
    }

    // === Load Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| file_config.logging.file.as_ref().map(PathBuf::from));
    let _log_guard = init_logging(cli.verbose, log_file.as_deref())?;

    info!("Starting autoreply");

    let issues = file_config.validate();
    for issue in issues.iter().filter(|i| !i.is_error()) {
        warn!("{}", issue);
    }
    let errors: Vec<_> = issues.iter().filter(|i| i.is_error()).collect();
    if !errors.is_empty() {
        for issue in &errors {
            eprintln!("Configuration error: {}", issue);
        }
        bail!("Invalid configuration ({} error(s))", errors.len());
    }

    let output_config = OutputConfig {
        format: file_config.output.format.clone(),
        color: file_config.output.color,
    };
    if !output_config.color {
        colored::control::set_override(false);
    }
    let format = cli.output.unwrap_or_else(|| output_config.parse_format());

    // === Dependency Injection ===
    let business = file_config.to_business_config();
    let activity_logger = open_activity_logger(&cli, &file_config);

    let seeds: Vec<Message> = sample_messages()
        .into_iter()
        .filter(|m| business.has_category(m.category()))
        .collect();
    let store = Arc::new(MessageStore::with_messages(
        business.categories.clone(),
        seeds,
    )?);

    let auth = Arc::new(SimulatedAuthProvider::new(file_config.auth.delay()));
    let session = Arc::new(Session::new(auth).with_activity_logger(activity_logger.clone()));

    let (kind, _) = file_config.generator.parse_kind();
    info!("Using {} reply generator", kind.as_str());
    let generator = build_generator(kind, &business, file_config.generator.delay());

    let mut dispatcher = ReplyDispatcher::new(store, generator, business.ai.clone())
        .with_activity_logger(activity_logger);

    let Some(command) = cli.command.clone() else {
        // Dashboard mode
        if let (Some(email), Some(password)) = (&cli.email, &cli.password)
            && let Err(e) = session.login(email, password).await
        {
            eprintln!("Login failed: {}", e);
        }

        let repl_config = ReplConfig {
            show_progress: file_config.repl.show_progress && !cli.quiet,
            history_file: file_config.repl.history_file.clone(),
            prompt: file_config.repl.prompt.clone(),
        };
        let repl = DashboardRepl::new(session, Arc::new(dispatcher), business)
            .with_config(repl_config);
        repl.run().await?;
        return Ok(());
    };

    // One-shot mode: Ctrl-C aborts in-flight generation
    let cancellation = CancellationToken::new();
    let ctrl_c_token = cancellation.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c_token.cancel();
        }
    });
    dispatcher = dispatcher.with_cancellation_token(cancellation);

    let (Some(email), Some(password)) = (&cli.email, &cli.password) else {
        bail!("--email and --password are required to run a command");
    };
    session
        .login(email, password)
        .await
        .map_err(|e| anyhow!("Login failed: {}", e))?;

    let show_progress = !cli.quiet && format == OutputFormat::Text;
    run_command(command, &dispatcher, &business, format, show_progress).await
}

async fn run_command(
    command: Command,
    dispatcher: &ReplyDispatcher,
    business: &BusinessConfig,
    format: OutputFormat,
    show_progress: bool,
) -> Result<()> {
    let store = dispatcher.store();
    let notifier: Box<dyn DispatchNotifier> = if show_progress {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(NoDispatchProgress)
    };

    match command {
        Command::List(args) => {
            let filter = build_filter(&args.status, &args.category, &args.range)?;
            let messages = store.list(&filter);
            let output = match format {
                OutputFormat::Text => ConsoleFormatter::format_message_list(&messages, store.counts()),
                OutputFormat::Json => ConsoleFormatter::format_json(&messages),
            };
            println!("{}", output);
        }
        Command::Show { id } => {
            let id = MessageId::new(id);
            let message = store
                .get(id)
                .ok_or_else(|| anyhow!("Message {} not found", id))?;
            print_message(&message, format);
        }
        Command::Reply { id: Some(id), .. } => {
            let message = dispatcher
                .generate_and_apply_with_progress(MessageId::new(id), notifier.as_ref())
                .await?;
            print_message(&message, format);
        }
        Command::Reply { all: true, .. } => {
            let outcomes = dispatcher.generate_all_pending(notifier.as_ref()).await;
            let output = match format {
                OutputFormat::Text => ConsoleFormatter::format_dispatch_summary(&outcomes),
                OutputFormat::Json => {
                    ConsoleFormatter::format_json(&ConsoleFormatter::outcomes_json(&outcomes))
                }
            };
            println!("{}", output);

            let failed = outcomes.iter().filter(|(_, r)| r.is_err()).count();
            if failed > 0 {
                bail!("{} of {} replies failed", failed, outcomes.len());
            }
        }
        Command::Reply { .. } => bail!("Specify a message id or --all"),
        Command::Settings => {
            let output = match format {
                OutputFormat::Text => ConsoleFormatter::format_settings(business),
                OutputFormat::Json => ConsoleFormatter::format_json(business),
            };
            println!("{}", output);
        }
    }

    Ok(())
}

fn print_message(message: &Message, format: OutputFormat) {
    let output = match format {
        OutputFormat::Text => ConsoleFormatter::format_message_detail(message),
        OutputFormat::Json => ConsoleFormatter::format_json(message),
    };
    println!("{}", output);
}

/// Initialize logging based on verbosity level.
///
/// With a log file, records go through a non-blocking writer whose guard must
/// stay alive until exit.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
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

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn open_activity_logger(cli: &Cli, file_config: &FileConfig) -> Arc<dyn ActivityLogger> {
    let path = cli
        .activity_log
        .clone()
        .or_else(|| file_config.logging.activity_log.as_ref().map(PathBuf::from));

    match path.and_then(JsonlActivityLogger::open) {
        Some(logger) => {
            info!("Activity log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoActivityLogger),
    }
}
