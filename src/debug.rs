//! Debug facilities.
use itertools::Itertools;
use nom::error::{VerboseError, VerboseErrorKind};
use std::{
    fmt::{self, Debug},
    io::{self, Write},
    time::Duration,
};

use crate::{
    graph::{Candidate, GraphError},
    parser::ParseError,
};

// Error types and From<...> implementations

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum ValidationError {
    #[error("Clique size must be positive, got {0}")]
    InvalidCliqueSize(i64),
    #[error("Number of workers must be positive, got {0}")]
    InvalidWorkerCount(i64),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum WorkerError {
    #[error("Could not start the worker pool: {0}")]
    PoolCreation(String),
    #[error("Worker {worker} failed: {reason}")]
    Failed { worker: usize, reason: String },
    #[error("Only {finished} of {expected} workers reported back before the result channel closed")]
    Disconnected { finished: usize, expected: usize },
    #[error("Enumeration was cancelled")]
    Cancelled,
    #[error("Workers did not finish within {0:?}")]
    TimedOut(Duration),
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    Validation(ValidationError),
    #[error("Graph error: {0}")]
    GraphError(GraphError),
    #[error("Parallel enumeration error: {0}")]
    WorkerError(WorkerError),
    #[error("Error while parsing input file: {0:?}")]
    ParseError(Vec<VerboseErrorKind>),
    #[error("Error while reading or writing a file: {0}")]
    IoError(io::Error),
}

impl From<ValidationError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(ve: ValidationError) -> Self {
        Self::Validation(ve)
    }
}

impl From<GraphError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(ge: GraphError) -> Self {
        Self::GraphError(ge)
    }
}

impl From<WorkerError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(we: WorkerError) -> Self {
        Self::WorkerError(we)
    }
}

#[cfg(not(tarpaulin_include))]
fn handle_nom_verbose_error<E: Debug>(
    should_print: bool,
    verbose: VerboseError<E>,
) -> Vec<VerboseErrorKind> {
    verbose
        .errors
        .into_iter()
        .map(|(msg, kind)| {
            if should_print {
                eprintln!("{:?}", msg);
            }
            kind
        })
        .collect()
}

impl<'a> From<nom::Err<ParseError<'a>>> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(pe: nom::Err<ParseError<'a>>) -> Self {
        match pe {
            nom::Err::Error(verbose) | nom::Err::Failure(verbose) => {
                Self::ParseError(handle_nom_verbose_error(true, verbose))
            }
            nom::Err::Incomplete(_) => unreachable!(),
        }
    }
}

impl From<io::Error> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(ie: io::Error) -> Self {
        Self::IoError(ie)
    }
}

// Output of results

pub fn write_verification(writer: &mut impl Write, is_clique: bool) -> Result<(), Error> {
    writeln!(writer, "{}", is_clique)?;
    writer.flush().map_err(Error::from)
}

/// One clique per line, vertices separated by single spaces.
pub fn write_cliques(writer: &mut impl Write, cliques: &[Candidate]) -> Result<(), Error> {
    for clique in cliques {
        writeln!(writer, "{}", clique.iter().join(" "))?;
    }
    writer.flush().map_err(Error::from)
}

#[cfg(not(tarpaulin_include))]
pub fn print_verification(is_clique: bool) -> Result<(), Error> {
    write_verification(&mut io::stdout().lock(), is_clique)
}

#[cfg(not(tarpaulin_include))]
pub fn print_cliques(cliques: &[Candidate]) -> Result<(), Error> {
    write_cliques(&mut io::stdout().lock(), cliques)
}

// Custom formatter for debug printing

#[cfg(not(tarpaulin_include))]
pub fn opt_fmt<T: fmt::Debug>(option: &Option<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match option {
        Some(val) => val.fmt(f),
        None => write!(f, "None"),
    }
}

// Debug macros that allow to time single expressions

#[macro_export]
macro_rules! time {
    ($i:ident, $ret:ident, $exp:expr) => {
        let before = std::time::Instant::now();
        let $ret = $exp;
        let $i = before.elapsed();
    };
}

#[macro_export]
macro_rules! parse_single_line {
    ($ret:ident, $exp:expr) => {
        let (res, $ret) = $exp?;
        eof::<crate::parser::Input<'_>, crate::parser::ParseError<'_>>(res)?;
    };
}
