//! Matryoshka - wallpaper prompt builder CLI.

mod cli;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use matryoshka::compose;
use matryoshka::config::{self, Config};
use matryoshka::context::{ImageOutcome, ServiceContext};
use matryoshka::error::Error;
use matryoshka::options::PromptOptions;

use crate::cli::Cli;

/// Machine-readable summary printed with `--json`.
#[derive(Serialize)]
struct Report<'a> {
    options: &'a PromptOptions,
    prompt: &'a str,
    image: Option<&'a PathBuf>,
    message: Option<&'a str>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "matryoshka=debug" } else { "matryoshka=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<(), Error> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path)?;
    tracing::debug!(path = %config_path.display(), "config loaded");

    // Compose
    let options = cli.prompt_options(config.prompt.clone());
    let prompt = compose(&options);

    // Generate
    let render_config = cli.render_config(config.render_config());
    let backend_name = cli.backend.clone().or_else(|| config.backend_name());
    let ctx = ServiceContext::from_backend_name(backend_name.as_deref(), cli.seed);
    let outcome = ctx.generate(&prompt, &render_config);

    if cli.json {
        let report = Report {
            options: &options,
            prompt: &prompt,
            image: outcome.path(),
            message: outcome.message(),
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| Error::Encode(format!("Failed to encode report: {e}")))?;
        println!("{json}");
        return Ok(());
    }

    println!("{prompt}");
    match &outcome {
        ImageOutcome::Generated { path } => eprintln!("Saved: {}", path.display()),
        ImageOutcome::NotConfigured | ImageOutcome::Failed { .. } => {
            eprintln!("{}", outcome.message().unwrap_or_default());
        }
    }

    Ok(())
}
