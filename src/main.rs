//! `disaster-risk` — assess disaster risk for a location and browse guidance.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Initialise logging (`RUST_LOG`, `--verbose`).
//! 3. Load config ([`config::load_config`]) and freeze the score tables.
//! 4. Run the subcommand: assess, list hotspots, or print reference content.
//! 5. Exit `0`, or `1` when a result reaches the `fail_on` level.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use disaster_risk::assessor::RiskAssessor;
use disaster_risk::batch::{assess_all, load_requests, reaches_level};
use disaster_risk::cli::{BatchArgs, Cli, Command, PredictArgs, ReportFormat};
use disaster_risk::config::{load_config, Config};
use disaster_risk::models::{DisasterCategory, PredictionResult};
use disaster_risk::predict::{fail_level, validate_request};
use disaster_risk::report::terminal;
use disaster_risk::tables::{hotspots, knowledge, RiskTables};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd, cli.config.as_deref())?;
    let tables = config.risk_tables()?;
    let assessor = RiskAssessor::new(&tables);

    let failed = match cli.command {
        Command::Predict(ref args) => predict(&cli, args, &config, &assessor).await?,
        Command::Batch(ref args) => batch(&cli, args, &config, &assessor)?,
        Command::Hotspots { category, report } => {
            let categories: Vec<DisasterCategory> = match category {
                Some(c) => vec![c.into()],
                None => DisasterCategory::ALL
                    .into_iter()
                    .filter(|c| !hotspots::for_category(*c).is_empty())
                    .collect(),
            };
            show_hotspots(&categories, report, cli.quiet)?;
            false
        }
        Command::Learn { category } => {
            show_articles(category.map(Into::into), &tables, cli.verbose)?;
            false
        }
        Command::Faq => {
            terminal::render_faq(knowledge::faq(), cli.quiet)?;
            false
        }
        Command::Locations { ref country } => {
            terminal::render_locations(country.as_deref())?;
            false
        }
    };

    if failed {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "disaster_risk=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn predict(cli: &Cli, args: &PredictArgs, config: &Config, assessor: &RiskAssessor<'_>) -> Result<bool> {
    validate_request(&args.country, &args.region, args.strict)?;

    let delay = Duration::from_millis(args.delay_ms.unwrap_or(config.assessment.delay_ms));
    if args.report == ReportFormat::Terminal && !cli.quiet && !delay.is_zero() {
        simulate_analysis(delay).await?;
    }

    let result = assessor.compute_risk(args.category.into(), &args.country, &args.region);
    info!(score = result.risk_score, level = %result.risk_level, "prediction ready");

    match args.report {
        ReportFormat::Terminal => terminal::render_prediction(&result, cli.verbose, cli.quiet)?,
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    let threshold = fail_level(args.fail_on.map(Into::into), config);
    Ok(reaches_level(std::slice::from_ref(&result), threshold))
}

fn batch(cli: &Cli, args: &BatchArgs, config: &Config, assessor: &RiskAssessor<'_>) -> Result<bool> {
    let requests = load_requests(&args.file)?;
    if !cli.quiet && args.report == ReportFormat::Terminal {
        eprintln!(
            "  {} {} requests from {}",
            "→".cyan(),
            requests.len(),
            args.file.display()
        );
    }

    let results: Vec<PredictionResult> = assess_all(assessor, &requests);

    match args.report {
        ReportFormat::Terminal => terminal::render_batch(&results, cli.verbose, cli.quiet)?,
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
    }

    let threshold = fail_level(args.fail_on.map(Into::into), config);
    Ok(reaches_level(&results, threshold))
}

/// Stand-in for model latency; purely presentational.
async fn simulate_analysis(delay: Duration) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message("Analyzing...");
    pb.enable_steady_tick(Duration::from_millis(80));
    debug!(?delay, "simulating analysis");
    tokio::time::sleep(delay).await;
    pb.finish_and_clear();
    Ok(())
}

fn show_hotspots(categories: &[DisasterCategory], report: ReportFormat, quiet: bool) -> Result<()> {
    match report {
        ReportFormat::Terminal => {
            terminal::render_hotspot_listing(categories, quiet)?;
        }
        ReportFormat::Json => {
            let listing: std::collections::BTreeMap<DisasterCategory, Vec<&hotspots::Hotspot>> = categories
                .iter()
                .map(|c| (*c, hotspots::ranked(*c)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
    }
    Ok(())
}

fn show_articles(category: Option<DisasterCategory>, tables: &RiskTables, verbose: bool) -> Result<()> {
    match category {
        Some(c) => terminal::render_article(knowledge::article(c), tables, verbose)?,
        None => {
            for article in knowledge::articles() {
                terminal::render_article(article, tables, verbose)?;
            }
        }
    }
    Ok(())
}
