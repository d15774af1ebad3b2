use std::path::Path;
use tracing_appender::rolling::daily;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::cli::Cli;

/// Filter directive applied when `RUST_LOG` is not set.
fn default_directive(level: &str) -> String {
    format!("chopper={level},nlradio={level}")
}

/// Initialize the tracing subscriber.
///
/// Console output always goes to stderr. With `--log-to-file`, daily rolling
/// text and JSON files are written to `--log-dir` as well.
pub fn init_logging(args: &Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(&args.log_level)))?;

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(env_filter.clone());

    let registry = tracing_subscriber::registry();

    if args.log_to_file {
        std::fs::create_dir_all(Path::new(&args.log_dir))?;

        let file_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_names(true)
            .with_ansi(false)
            .with_writer(daily(&args.log_dir, "chopper.log"))
            .with_filter(env_filter.clone());

        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_thread_names(true)
            .with_writer(daily(&args.log_dir, "chopper.json"))
            .with_filter(env_filter);

        registry
            .with(console_layer)
            .with(file_layer)
            .with(json_layer)
            .try_init()?;
    } else {
        registry.with(console_layer).try_init()?;
    }

    tracing::debug!("Logging initialized with level: {}", args.log_level);
    if args.log_to_file {
        tracing::info!("Log files will be written to: {}", args.log_dir);
    }

    Ok(())
}
