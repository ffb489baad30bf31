//! CLI command implementations
//!
//! Each command loads both source files, builds the database once, then
//! answers from memory. Commands write user-facing text to a caller-supplied
//! writer so they can run against a buffer in tests.

use std::io::{self, Write};
use std::path::Path;

use crate::database::NeoDatabase;
use crate::executor::limit;
use crate::loader::{load_approaches, load_neos, LoadError};
use crate::observability::{init_logging, log_event_with_fields, Event};
use crate::planner::FilterBuilder;
use crate::writer::write_results;

use super::args::{Cli, Command, InspectArgs, QueryArgs};
use super::config::Config;
use super::errors::CliResult;
use super::io::{write_line, write_lines};

/// Message printed when an inspect lookup finds nothing
pub const NO_MATCH_MESSAGE: &str = "No matching NEOs exist in the database.";

/// Parses arguments from the process and runs the chosen command.
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}

/// Runs a parsed command line, printing to stdout.
pub fn run_command(cli: Cli) -> CliResult<()> {
    let config = Config::resolve(&cli)?;

    if let Err(e) = init_logging(&config.log_level) {
        eprintln!("{}", e);
    }
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("neo_path", &config.neo_path.display().to_string()),
            ("cad_path", &config.cad_path.display().to_string()),
            ("log_level", &config.log_level),
        ],
    );

    let db = open_database(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::Inspect(args) => {
            inspect(&db, args, &mut out)?;
        }
        Command::Query(args) => {
            query(&db, args, &mut out)?;
        }
    }
    Ok(())
}

/// Loads both collections named by `config` and links them.
pub fn open_database(config: &Config) -> CliResult<NeoDatabase> {
    let neos = load_logged(&config.neo_path, Event::NeosLoaded, |p| load_neos(p))?;
    let approaches = load_logged(&config.cad_path, Event::ApproachesLoaded, |p| {
        load_approaches(p)
    })?;
    Ok(NeoDatabase::new(neos, approaches))
}

fn load_logged<T>(
    path: &Path,
    event: Event,
    load: impl FnOnce(&Path) -> Result<Vec<T>, LoadError>,
) -> CliResult<Vec<T>> {
    let path_str = path.display().to_string();
    match load(path) {
        Ok(records) => {
            log_event_with_fields(
                event,
                &[("path", &path_str), ("records", &records.len().to_string())],
            );
            Ok(records)
        }
        Err(e) => {
            log_event_with_fields(
                Event::LoadFailed,
                &[("path", &path_str), ("error", &e.to_string())],
            );
            Err(e.into())
        }
    }
}

/// Prints one NEO, and with `verbose` each of its approaches.
///
/// Returns whether a NEO was found. A miss is not an error.
pub fn inspect<W: Write>(db: &NeoDatabase, args: &InspectArgs, out: &mut W) -> CliResult<bool> {
    let (key, found) = match (&args.pdes, &args.name) {
        (Some(pdes), _) => (("pdes", pdes.as_str()), db.get_neo_by_designation(pdes)),
        (None, Some(name)) => (("name", name.as_str()), db.get_neo_by_name(name)),
        (None, None) => (("pdes", ""), None),
    };

    let Some(neo) = found else {
        log_event_with_fields(Event::LookupMiss, &[key]);
        write_line(out, NO_MATCH_MESSAGE)?;
        return Ok(false);
    };

    log_event_with_fields(Event::LookupHit, &[key, ("designation", neo.designation())]);
    write_line(out, neo)?;

    if args.verbose {
        let lines = db
            .approaches_of(neo)
            .map(|ca| format!("- {}", db.linked(ca)));
        write_lines(out, lines)?;
    }
    out.flush()?;
    Ok(true)
}

/// Runs a query and prints or saves the results.
///
/// Returns the number of results emitted. Conflicting criteria print the
/// conflict and emit nothing.
pub fn query<W: Write>(db: &NeoDatabase, args: &QueryArgs, out: &mut W) -> CliResult<usize> {
    let spec = FilterBuilder::build(&args.criteria());
    log_event_with_fields(Event::QueryPlanned, &[("filter", &spec.to_string())]);

    if let Some(conflict) = spec.conflict() {
        let message = conflict.message();
        log_event_with_fields(Event::QueryRejected, &[("reason", &message)]);
        write_line(out, format!("Conflicting criteria: {}", message))?;
        return Ok(0);
    }

    let results = limit(db.query(&spec), args.limit);
    let emitted = match &args.outfile {
        Some(path) => write_results(results, path)?,
        None => write_lines(out, results)?,
    };
    Ok(emitted)
}
