use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use super::{config::AppConfig, run_fetch, run_grid, run_segments, AppError};

/// command line tool aggregating vehicle trip trajectories, routed through
/// OpenRouteService, into road segment frequencies and density grids
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TrajaggCliArguments {
    /// TOML file overriding the default configuration
    #[arg(short, long, global = true)]
    pub config: Option<String>,
    /// select the operation to run
    #[command(subcommand)]
    pub op: TrajaggOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum TrajaggOperation {
    /// fetches the route of every trip into the route cache, in rate-limited
    /// batches. requires an OpenRouteService api key.
    Fetch,
    /// fetches routes, then writes how many trips of each vehicle type use
    /// each road segment to segments.csv
    Segments,
    /// bins cached route points into per-vehicle density grids written to
    /// grid.csv. makes no routing service calls.
    Grid {
        /// rows and columns of each grid, overriding the configured size
        #[arg(short, long)]
        grid_size: Option<usize>,
    },
}

impl TrajaggCliArguments {
    pub fn run(&self) -> Result<(), AppError> {
        log::info!(
            "trajagg {} started at {}",
            self.op,
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        let config = AppConfig::load(self.config.as_deref())?;
        self.op.run(&config)
    }
}

impl TrajaggOperation {
    pub fn run(&self, config: &AppConfig) -> Result<(), AppError> {
        match self {
            TrajaggOperation::Fetch => {
                let (_, report) = run_fetch(config)?;
                if report.summary.failed > 0 {
                    log::warn!(
                        "{} trips could not be routed and will be missing from outputs",
                        report.summary.failed
                    );
                }
                Ok(())
            }
            TrajaggOperation::Segments => run_segments(config),
            TrajaggOperation::Grid { grid_size } => run_grid(config, *grid_size),
        }
    }
}

impl std::fmt::Display for TrajaggOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrajaggOperation::Fetch => write!(f, "fetch"),
            TrajaggOperation::Segments => write!(f, "segments"),
            TrajaggOperation::Grid { .. } => write!(f, "grid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TrajaggCliArguments, TrajaggOperation};
    use clap::Parser;

    #[test]
    fn test_parse_grid_with_override() {
        let args = TrajaggCliArguments::try_parse_from([
            "trajagg",
            "grid",
            "--grid-size",
            "32",
            "--config",
            "phnom_penh.toml",
        ])
        .expect("should parse");
        assert_eq!(args.config.as_deref(), Some("phnom_penh.toml"));
        match args.op {
            TrajaggOperation::Grid { grid_size } => assert_eq!(grid_size, Some(32)),
            other => panic!("expected grid, found {other}"),
        }
    }

    #[test]
    fn test_parse_fetch() {
        let args = TrajaggCliArguments::try_parse_from(["trajagg", "fetch"]).expect("should parse");
        assert!(args.config.is_none());
        assert!(matches!(args.op, TrajaggOperation::Fetch));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        TrajaggCliArguments::command().debug_assert();
    }
}
