//! Campaign Analyzer — synthetic marketing-campaign performance report.
//!
//! Generates per-channel campaign counters, derives CTR, conversion rate and
//! ROI, and prints them with the best and worst channel by ROI.

mod render;

use anyhow::Context;
use campaign_core::config::{AppConfig, OutputFormat};
use campaign_reporting::{CampaignAnalyzer, CampaignDataSource};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "campaign-analyzer")]
#[command(about = "Digital marketing campaign performance analyzer")]
#[command(version)]
struct Cli {
    /// Random seed for data generation (overrides config)
    #[arg(long, env = "CAMPAIGN_ANALYZER__SEED")]
    seed: Option<u64>,

    /// Number of analysis runs; the random stream advances between runs
    #[arg(long, default_value_t = 1)]
    runs: usize,

    /// Output format: table or json (overrides config)
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, default_value_t = false)]
    json_logs: bool,
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "campaign_analyzer=info,campaign_reporting=info".into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load_from(Some(path.as_path()))
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(AppConfig::load().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using defaults");
            AppConfig::default()
        })),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let mut config = load_config(cli.config.as_ref())?;

    // Apply CLI overrides
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    let source = CampaignDataSource::from_seed(config.generator.clone(), config.seed)
        .context("invalid generator configuration")?;

    info!(
        seed = config.seed,
        channels = source.config().channels.len(),
        runs = cli.runs,
        format = %config.output.format,
        "Configuration loaded"
    );

    let mut analyzer = CampaignAnalyzer::new(source);
    let reports = analyzer
        .run_many(cli.runs)
        .context("campaign analysis failed")?;

    match config.output.format {
        OutputFormat::Json => {
            println!("{}", render::render_json(&reports)?);
        }
        OutputFormat::Table => {
            println!("{}", render::TITLE);
            println!();
            for report in &reports {
                if reports.len() > 1 {
                    println!("Run {}", report.run);
                }
                println!("{}", render::render_table(report, &config.output));
                println!("{}", render::render_summary(report.extremes.as_ref()));
                println!();
            }
        }
    }

    Ok(())
}
