#![deny(clippy::all)]

use clap::{App, AppSettings, Arg};

use lazy_static::lazy_static;
use thiserror::Error;
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

use std::collections::HashMap;
use std::ffi::OsString;

use coordinates::ParseCoordinatesError;

pub mod lattice;
mod operations;

type Error = anyhow::Error;
type Actor = Box<dyn (Fn(&[&str]) -> Result<String, Error>) + Send + Sync + 'static>;

macro_rules! register {
    ($map:ident, $($name:ident),* $(,)?) => {
        $($map.insert(stringify!($name), Box::new(operations::$name) as Actor);)*
    };
}

lazy_static! {
    static ref OPERATIONS: HashMap<&'static str, Actor> = {
        let mut s: HashMap<&'static str, Actor> = HashMap::new();
        register!(
            s, distance, angle, direction, step, back, clamp, inside, snap, horizontal, vertical,
            neighbors, floor, translate,
        );
        s
    };
}

/// Names of every registered operation, sorted.
pub fn operation_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = OPERATIONS.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Run a named operation against its textual arguments and render the result.
pub fn evaluate(operation: &str, args: &[&str]) -> Result<String, Error> {
    let actor = OPERATIONS
        .get(operation)
        .ok_or_else(|| CyanError::OperationNotFound(operation.to_string()))?;

    debug!(operation, ?args, "evaluating");
    actor(args)
}

pub fn run() -> Result<(), Error> {
    match run_from(std::env::args_os()) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => match e.downcast::<clap::Error>() {
            Ok(usage) => usage.exit(),
            Err(e) => Err(e),
        },
    }
}

/// Parse a full command line, program name first, and evaluate it.
///
/// Leading hyphens are allowed so negative coordinates such as `-3,4`
/// are read as values; only `-v` is a flag.
pub fn run_from<I, T>(args: I) -> Result<String, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let names = operation_names();
    let matches = App::new("CyanLib")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Evaluate integer grid coordinate operations")
        .setting(AppSettings::TrailingVarArg)
        .setting(AppSettings::AllowLeadingHyphen)
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Increase logging verbosity"),
        )
        .arg(
            Arg::with_name("operation")
                .value_name("OPERATION")
                .required(true)
                .takes_value(true)
                .possible_values(&names),
        )
        .arg(
            Arg::with_name("args")
                .value_name("ARGS")
                .required(false)
                .multiple(true)
                .allow_hyphen_values(true),
        )
        .get_matches_from_safe(args)?;

    init_logging(matches.occurrences_of("verbose"));

    let operation = matches.value_of("operation").unwrap_or_default();
    let args: Vec<&str> = matches
        .values_of("args")
        .map(|values| values.collect())
        .unwrap_or_default();

    info!(operation, "dispatching");
    evaluate(operation, &args)
}

/// Install a stderr subscriber. `RUST_LOG` is honoured, and each `-v`
/// raises the default level from warn.
fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Debug, Error)]
pub enum CyanError {
    #[error("No operation named {0}")]
    OperationNotFound(String),

    #[error("{operation} takes {expected} arguments, got {found}")]
    WrongArgumentCount {
        operation: &'static str,
        expected: String,
        found: usize,
    },

    #[error("Arguments mix dimensions: {0:?}")]
    MismatchedDimensions(Vec<usize>),

    #[error("Only 2 and 3 dimensional values are supported, got {0}")]
    UnsupportedDimension(usize),

    #[error(transparent)]
    Parse(#[from] ParseCoordinatesError),
}
