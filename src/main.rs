#![warn(rust_2018_idioms)]
//#![deny(warnings, missing_docs)]

//! Exhaustive search for all cliques of a
//! fixed size in graphs given as adjacency
//! matrices, either serially or with a fixed
//! number of workers on static partitions.

mod clique;
use clique::{enumerate_parallel_with, enumerate_serial, verify_clique, ParallelSettings};

mod combinatoric;
use combinatoric::binomial;

mod debug;
pub use debug::Error;
use debug::{print_cliques, print_verification};

mod graph;
use graph::AdjacencyMatrix;

mod input;
use input::read_input;

mod misc;
use misc::{do_if_some, Mode, Settings};

mod parser;

mod statistics;
use statistics::Statistics;

#[cfg(not(tarpaulin_include))]
fn search_cliques(
    graph: &AdjacencyMatrix,
    mode: Mode,
    settings: &Settings,
    statistics: &mut Option<Statistics>,
) -> Result<(), Error> {
    match mode {
        Mode::Verify(vertices) => {
            let is_clique = verify_clique(graph, &vertices)?;
            do_if_some(statistics, |st| st.log_verification(is_clique));
            print_verification(is_clique)?;
        }
        Mode::Serial(clique_size) => {
            time!(enumeration_time, cliques, enumerate_serial(graph, clique_size)?);
            do_if_some(statistics, |st| {
                st.log_enumeration(
                    clique_size,
                    binomial(graph.size(), clique_size),
                    cliques.len(),
                    enumeration_time,
                )
            });
            print_cliques(&cliques)?;
        }
        Mode::Parallel {
            clique_size,
            workers,
        } => {
            let parallel_settings = ParallelSettings {
                workers,
                timeout: settings.timeout,
                cancel: None,
            };
            time!(
                enumeration_time,
                outcome,
                enumerate_parallel_with(graph, clique_size, &parallel_settings)?
            );
            do_if_some(statistics, |st| {
                st.log_phases(outcome.generation_time, outcome.aggregation_time);
                st.log_enumeration(
                    clique_size,
                    Some(outcome.number_of_candidates),
                    outcome.cliques.len(),
                    enumeration_time,
                );
                st.log_workers(&outcome.reports);
            });
            print_cliques(&outcome.cliques)?;
        }
    }

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn run() -> Result<(), Error> {
    // Read the graph and the mode from the command line and files ...
    let (graph, mode, mut statistics, settings) = read_input()?;
    do_if_some(&mut statistics, Statistics::log_input_done);

    // ... search or verify the cliques and print them ...
    search_cliques(&graph, mode, &settings, &mut statistics)?;

    // ... and finally dump the statistics if requested.
    if let Some(mut statistics) = statistics {
        statistics.log_end();
        statistics.save_statistics()?;
        eprintln!("Statistics written.");
    }

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
}
