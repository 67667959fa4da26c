mod cli;

use recodarr::arr::RadarrClient;
use recodarr::config::{self, Overrides};
use recodarr::queue::{Outcome, TranscoderClient};
use recodarr::triage::{RunSummary, TriageOptions, TriagePipeline};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "recodarr=debug,reqwest=debug".to_string()
        } else {
            "recodarr=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            api_key,
            url,
            movies,
            transcoder_url,
            transcoder_token,
            dry_run,
        } => {
            let overrides = Overrides {
                catalog_url: url,
                catalog_api_key: api_key,
                queue_url: transcoder_url,
                queue_token: transcoder_token,
                count: movies,
                dry_run,
            };

            // Submissions are strictly sequential, one thread is enough
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            rt.block_on(run_triage(cli.config.as_deref(), overrides))
        }
        Commands::Validate { file } => {
            let path = file.or(cli.config);
            validate_config(path.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn run_triage(config_path: Option<&Path>, overrides: Overrides) -> Result<ExitCode> {
    let mut config = config::load_config_or_default(config_path)?;
    config.apply(overrides);
    config.validate().context("Invalid configuration")?;

    let catalog = RadarrClient::new(&config.catalog);
    let queue = TranscoderClient::new(&config.queue);
    let options = TriageOptions::from(&config.triage);

    tracing::info!(
        "Triage from {} to {} (count: {}, dry run: {})",
        config.catalog.url,
        queue.endpoint(),
        options.count,
        options.dry_run
    );

    let mut summary = TriagePipeline::new(&catalog, &queue, options)
        .run()
        .await
        .context("Triage run failed")?;

    // Report what was already submitted before surfacing a fatal error
    print_summary(&summary);

    if let Some(err) = summary.aborted.take() {
        return Err(anyhow::Error::new(err).context("Triage run aborted"));
    }

    if summary.has_failures() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn print_summary(summary: &RunSummary) {
    println!("Number of filtered movies: {}", summary.candidate_count);

    for report in &summary.reports {
        println!();
        println!("Title: {}", report.title);
        println!("Path: {}", report.library_path);
        println!("Codec: {}", report.video_codec);
        println!("Size: {}", report.size());
        println!("Full Path: {}", report.file_path);

        let outcome = &report.result.outcome;
        match outcome {
            Outcome::Scheduled {
                destination_path, ..
            } if !destination_path.is_empty() => {
                println!("Result: {} ({})", outcome.label(), destination_path)
            }
            Outcome::Scheduled { .. } => println!("Result: {}", outcome.label()),
            Outcome::Failed { error, .. } => println!("Result: {}: {}", outcome.label(), error),
            Outcome::Skipped => println!("Result: {} [DRY RUN]", outcome.label()),
            Outcome::Unknown { .. } => println!(
                "Result: {}: transcoder neither added nor rejected the movie",
                outcome.label()
            ),
        }
    }

    println!();
    if summary.dry_run {
        println!(
            "[DRY RUN] Would add {} of {} movies",
            summary.reports.len(),
            summary.candidate_count
        );
    } else {
        println!(
            "Scheduled: {}, failed: {}",
            summary.scheduled(),
            summary.failed()
        );
    }
    if summary.aborted.is_some() {
        println!("Run aborted after {} movies", summary.reports.len());
    }
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => println!("Validating config: {:?}", p),
        None => println!("No config file specified, checking default locations"),
    }

    let config = config::load_config_or_default(path)?;
    config.validate()?;

    println!("✓ Configuration is valid");
    println!("  Radarr: {}", config.catalog.url);
    println!("  Transcoder: {}", config.queue.job_endpoint());
    println!("  Timeout: {}s", config.queue.timeout_secs);
    println!("  Movies per run: {}", config.triage.count);
    println!("  Dry run: {}", config.triage.dry_run);

    Ok(())
}
