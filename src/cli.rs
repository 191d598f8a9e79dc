use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::{DisasterCategory, RiskLevel};

#[derive(Parser, Debug)]
#[command(
    name = "disaster-risk",
    about = "Assess disaster risk for a location and browse preparedness guidance",
    version
)]
pub struct Cli {
    /// Config file [default: ./.disaster-risk/config.toml, fallback ~/.config/disaster-risk/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Show debug logging and extra detail
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print summary lines
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Predict risk for a disaster type at a location
    Predict(PredictArgs),

    /// Predict risk for every request in a JSON file
    Batch(BatchArgs),

    /// List high-risk places from the risk map
    Hotspots {
        /// Disaster type (all mapped types when omitted)
        category: Option<CategoryArg>,

        #[arg(long, default_value = "terminal", value_name = "FORMAT")]
        report: ReportFormat,
    },

    /// Read about a disaster type: causes, effects and preparation
    Learn {
        /// Disaster type (all types when omitted)
        category: Option<CategoryArg>,
    },

    /// Frequently asked questions
    Faq,

    /// List countries and regions available for selection
    Locations {
        /// Only list regions of this country
        country: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Disaster type
    pub category: CategoryArg,

    /// Country name
    pub country: String,

    /// State or region name (matched exactly against curated scores)
    pub region: String,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Reject locations that are not in the selection lists
    #[arg(long)]
    pub strict: bool,

    /// Simulated analysis delay in milliseconds [default: from config, 1500]
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Exit with status 1 if the result reaches this level
    #[arg(long, value_name = "LEVEL")]
    pub fail_on: Option<LevelArg>,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// JSON file holding an array of {"category", "country", "region"} objects
    pub file: PathBuf,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Exit with status 1 if any result reaches this level
    #[arg(long, value_name = "LEVEL")]
    pub fail_on: Option<LevelArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum CategoryArg {
    Earthquake,
    Flood,
    Wildfire,
    Tsunami,
    Cyclone,
}

impl From<CategoryArg> for DisasterCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Earthquake => DisasterCategory::Earthquake,
            CategoryArg::Flood => DisasterCategory::Flood,
            CategoryArg::Wildfire => DisasterCategory::Wildfire,
            CategoryArg::Tsunami => DisasterCategory::Tsunami,
            CategoryArg::Cyclone => DisasterCategory::Cyclone,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum LevelArg {
    Low,
    Moderate,
    High,
    Extreme,
}

impl From<LevelArg> for RiskLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Low => RiskLevel::Low,
            LevelArg::Moderate => RiskLevel::Moderate,
            LevelArg::High => RiskLevel::High,
            LevelArg::Extreme => RiskLevel::Extreme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_predict() {
        let cli = Cli::parse_from([
            "disaster-risk",
            "predict",
            "earthquake",
            "United States",
            "California",
            "--report",
            "json",
            "--delay-ms",
            "0",
        ]);
        match cli.command {
            Command::Predict(args) => {
                assert_eq!(DisasterCategory::from(args.category), DisasterCategory::Earthquake);
                assert_eq!(args.country, "United States");
                assert_eq!(args.region, "California");
                assert_eq!(args.report, ReportFormat::Json);
                assert_eq!(args.delay_ms, Some(0));
                assert!(!args.strict);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["disaster-risk", "faq", "--quiet", "--config", "x.toml"]);
        assert!(cli.quiet);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let res = Cli::try_parse_from(["disaster-risk", "predict", "volcano", "Italy", "Sicily"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_missing_region_rejected() {
        let res = Cli::try_parse_from(["disaster-risk", "predict", "flood", "India"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_fail_on_level() {
        let cli = Cli::parse_from(["disaster-risk", "batch", "reqs.json", "--fail-on", "high"]);
        match cli.command {
            Command::Batch(args) => {
                assert_eq!(args.fail_on.map(RiskLevel::from), Some(RiskLevel::High));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
