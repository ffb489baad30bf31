//! CLI argument definitions using clap
//!
//! Commands:
//! - neodb inspect (--pdes <designation> | --name <name>) [--verbose]
//! - neodb query [criteria...] [--limit N] [--outfile <path>]

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgGroup, Args, Parser, Subcommand};

use crate::planner::Criteria;

/// neodb - Explore near-Earth objects and their close approaches
#[derive(Parser, Debug)]
#[command(name = "neodb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// NEO CSV file (overrides config)
    #[arg(long, global = true)]
    pub neofile: Option<PathBuf>,

    /// Close-approach JSON file (overrides config)
    #[arg(long, global = true)]
    pub cadfile: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error, off (overrides config)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inspect a single NEO by primary designation or by name
    Inspect(InspectArgs),

    /// Query close approaches matching a set of criteria
    Query(QueryArgs),
}

#[derive(Args, Debug, Clone)]
#[command(group(ArgGroup::new("target").required(true).args(["pdes", "name"])))]
pub struct InspectArgs {
    /// Primary designation of the NEO to inspect (e.g. '433')
    #[arg(short, long)]
    pub pdes: Option<String>,

    /// IAU name of the NEO to inspect (e.g. 'Eros')
    #[arg(short, long)]
    pub name: Option<String>,

    /// Additionally print all known close approaches of this NEO
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Only approaches on this date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Only approaches on or after this date (YYYY-MM-DD)
    #[arg(short, long)]
    pub start_date: Option<NaiveDate>,

    /// Only approaches on or before this date (YYYY-MM-DD)
    #[arg(short, long)]
    pub end_date: Option<NaiveDate>,

    /// Minimum approach distance (au)
    #[arg(long)]
    pub min_distance: Option<f64>,

    /// Maximum approach distance (au)
    #[arg(long)]
    pub max_distance: Option<f64>,

    /// Minimum approach velocity (km/s)
    #[arg(long)]
    pub min_velocity: Option<f64>,

    /// Maximum approach velocity (km/s)
    #[arg(long)]
    pub max_velocity: Option<f64>,

    /// Minimum NEO diameter (km)
    #[arg(long)]
    pub min_diameter: Option<f64>,

    /// Maximum NEO diameter (km)
    #[arg(long)]
    pub max_diameter: Option<f64>,

    /// Only approaches of potentially hazardous NEOs
    #[arg(long, conflicts_with = "not_hazardous")]
    pub hazardous: bool,

    /// Only approaches of NEOs that are not potentially hazardous
    #[arg(long)]
    pub not_hazardous: bool,

    /// Maximum number of results (0 means no limit)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Write results to this .csv or .json file instead of stdout
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,
}

impl QueryArgs {
    /// Tri-state hazard requirement
    pub fn hazard(&self) -> Option<bool> {
        match (self.hazardous, self.not_hazardous) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }

    /// Criteria for the filter builder
    pub fn criteria(&self) -> Criteria {
        Criteria {
            date: self.date,
            start_date: self.start_date,
            end_date: self.end_date,
            distance_min: self.min_distance,
            distance_max: self.max_distance,
            velocity_min: self.min_velocity,
            velocity_max: self.max_velocity,
            diameter_min: self.min_diameter,
            diameter_max: self.max_diameter,
            hazardous: self.hazard(),
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_query_flags_map_to_criteria() {
        let cli = Cli::try_parse_from([
            "neodb",
            "query",
            "--start-date",
            "2020-01-01",
            "--max-distance",
            "0.1",
            "--not-hazardous",
            "--limit",
            "5",
        ])
        .unwrap();

        let Command::Query(args) = cli.command else {
            panic!("expected query command");
        };
        let criteria = args.criteria();
        assert_eq!(criteria.start_date, NaiveDate::from_ymd_opt(2020, 1, 1));
        assert_eq!(criteria.distance_max, Some(0.1));
        assert_eq!(criteria.hazardous, Some(false));
        assert_eq!(args.limit, Some(5));
    }

    #[test]
    fn test_hazard_flags_conflict() {
        let result = Cli::try_parse_from(["neodb", "query", "--hazardous", "--not-hazardous"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_inspect_requires_target() {
        assert!(Cli::try_parse_from(["neodb", "inspect"]).is_err());
        assert!(Cli::try_parse_from(["neodb", "inspect", "--pdes", "433", "--name", "Eros"]).is_err());

        let cli = Cli::try_parse_from(["neodb", "inspect", "--name", "Eros", "-v"]).unwrap();
        let Command::Inspect(args) = cli.command else {
            panic!("expected inspect command");
        };
        assert_eq!(args.name.as_deref(), Some("Eros"));
        assert!(args.verbose);
    }

    #[test]
    fn test_global_file_overrides() {
        let cli = Cli::try_parse_from([
            "neodb",
            "query",
            "--neofile",
            "a.csv",
            "--cadfile",
            "b.json",
        ])
        .unwrap();
        assert_eq!(cli.neofile, Some(PathBuf::from("a.csv")));
        assert_eq!(cli.cadfile, Some(PathBuf::from("b.json")));
    }
}
