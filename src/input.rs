//! Command line interface and loading of the input files.
use clap::{Parser, Subcommand};
use std::{fs::File, io::BufReader, path::PathBuf, time::Duration};

use crate::{
    graph::AdjacencyMatrix,
    misc::{clique_size, worker_count, Mode, Settings},
    parser::{parse_integer_list, parse_matrix_input},
    statistics::{Statistics, StatisticsLevel},
    Error,
};

/// Enumerates the cliques of a fixed size in a graph
/// given as adjacency matrix.
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
pub struct Args {
    #[clap(subcommand)]
    command: Command,

    /// Accept adjacency matrices that are not symmetric.
    #[clap(long, global = true)]
    allow_asymmetric: bool,

    /// Statistics level: 0 = none, 1 = basic, 2 = with per worker data.
    #[clap(long, global = true, default_value_t = 0)]
    statistics: u64,

    /// File the statistics are written to.
    #[clap(
        long,
        global = true,
        parse(from_os_str),
        default_value = "statistics.txt"
    )]
    statistics_file: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether the vertices listed in a file form a clique.
    Verify {
        /// Adjacency matrix, one row per line.
        #[clap(parse(from_os_str))]
        graph_file: PathBuf,
        /// Whitespace separated vertex indices.
        #[clap(parse(from_os_str))]
        vertices_file: PathBuf,
    },
    /// Enumerate all cliques of size K on a single thread.
    #[clap(allow_negative_numbers = true)]
    Serial {
        #[clap(parse(from_os_str))]
        graph_file: PathBuf,
        /// Size of the cliques.
        k: i64,
        /// Accepted for symmetry with the parallel mode, but ignored.
        p: Option<i64>,
    },
    /// Enumerate all cliques of size K with P workers.
    #[clap(allow_negative_numbers = true)]
    Parallel {
        #[clap(parse(from_os_str))]
        graph_file: PathBuf,
        /// Size of the cliques.
        k: i64,
        /// Number of workers.
        p: i64,
        /// Give up after this many seconds.
        #[clap(long)]
        timeout: Option<u64>,
    },
}

impl Command {
    fn graph_file(&self) -> &PathBuf {
        match self {
            Self::Verify { graph_file, .. }
            | Self::Serial { graph_file, .. }
            | Self::Parallel { graph_file, .. } => graph_file,
        }
    }
}

#[cfg(not(tarpaulin_include))]
pub fn read_input() -> Result<(AdjacencyMatrix, Mode, Option<Statistics>, Settings), Error> {
    load_input(Args::parse())
}

/// Validates numeric arguments before any file is touched.
pub fn load_input(args: Args) -> Result<(AdjacencyMatrix, Mode, Option<Statistics>, Settings), Error> {
    let mut settings = Settings {
        allow_asymmetric: args.allow_asymmetric,
        ..Default::default()
    };

    let mut mode = match &args.command {
        Command::Verify { .. } => Mode::Verify(Vec::new()),
        Command::Serial { k, .. } => Mode::Serial(clique_size(*k)?),
        Command::Parallel { k, p, timeout, .. } => {
            settings.timeout = timeout.map(Duration::from_secs);
            Mode::Parallel {
                clique_size: clique_size(*k)?,
                workers: worker_count(*p)?,
            }
        }
    };

    let graph = parse_matrix_input(BufReader::new(File::open(args.command.graph_file())?))?;
    if !settings.allow_asymmetric {
        graph.check_symmetric()?;
    }

    if let Command::Verify { vertices_file, .. } = &args.command {
        let raw = parse_integer_list(File::open(vertices_file)?)?;
        mode = Mode::Verify(graph.to_vertices(&raw)?);
    }

    let statistics = match StatisticsLevel::from(args.statistics) {
        StatisticsLevel::None => None,
        level => Some(Statistics::new(
            level,
            args.statistics_file,
            mode.name(),
            graph.size(),
            graph.number_edges(),
        )),
    };

    Ok((graph, mode, statistics, settings))
}
