//! Statistics about different parts of the program.

use custom_debug_derive::Debug;
use std::{
    fs::File,
    io::Write,
    path::PathBuf,
    time::{Duration, Instant},
};

use crate::debug::opt_fmt;
use crate::{clique::WorkerReport, Error};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StatisticsLevel {
    None,
    Basic,
    Full,
}

impl From<u64> for StatisticsLevel {
    #[cfg(not(tarpaulin_include))]
    fn from(level: u64) -> Self {
        match level {
            0 => Self::None,
            1 => Self::Basic,
            _ => Self::Full,
        }
    }
}

#[derive(Debug)]
pub struct WorkerStatistics {
    pub worker: usize,
    pub first_candidate: usize,
    pub number_of_candidates: usize,
    pub verified: usize,
    pub matches: usize,
    pub elapsed: Duration,
}

impl From<&WorkerReport> for WorkerStatistics {
    fn from(report: &WorkerReport) -> Self {
        WorkerStatistics {
            worker: report.worker,
            first_candidate: report.range.start,
            number_of_candidates: report.range.len(),
            verified: report.verified,
            matches: report.matches,
            elapsed: report.elapsed,
        }
    }
}

#[derive(Debug)]
pub struct Statistics {
    // Meta information
    #[debug(skip)]
    level: StatisticsLevel,
    #[debug(skip)]
    out_file: PathBuf,
    mode: &'static str,
    // Timings
    #[debug(skip)]
    start_time: Instant,
    #[debug(with = "opt_fmt")]
    input_done_time: Option<Duration>,
    #[debug(with = "opt_fmt")]
    generation_time: Option<Duration>,
    #[debug(with = "opt_fmt")]
    aggregation_time: Option<Duration>,
    #[debug(with = "opt_fmt")]
    enumeration_time: Option<Duration>,
    #[debug(with = "opt_fmt")]
    end_time: Option<Duration>,
    // Graph statistics
    graph_size: usize,
    number_of_edges: usize,
    #[debug(with = "opt_fmt")]
    clique_size: Option<usize>,
    #[debug(with = "opt_fmt")]
    number_of_workers: Option<usize>,
    #[debug(with = "opt_fmt")]
    number_of_candidates: Option<usize>,
    #[debug(with = "opt_fmt")]
    number_of_cliques: Option<usize>,
    #[debug(with = "opt_fmt")]
    is_clique: Option<bool>,
    #[debug(with = "opt_fmt")]
    slowest_worker_time: Option<Duration>,
    worker_statistics: Vec<WorkerStatistics>,
}

impl Statistics {
    pub fn new(
        level: StatisticsLevel,
        out_file: PathBuf,
        mode: &'static str,
        graph_size: usize,
        number_of_edges: usize,
    ) -> Self {
        debug_assert!(level != StatisticsLevel::None);

        Statistics {
            level,
            out_file,
            mode,
            start_time: Instant::now(),
            input_done_time: None,
            generation_time: None,
            aggregation_time: None,
            enumeration_time: None,
            end_time: None,
            graph_size,
            number_of_edges,
            clique_size: None,
            number_of_workers: None,
            number_of_candidates: None,
            number_of_cliques: None,
            is_clique: None,
            slowest_worker_time: None,
            worker_statistics: Vec::new(),
        }
    }

    #[cfg(not(tarpaulin_include))]
    pub fn log_input_done(&mut self) {
        self.input_done_time = Some(self.start_time.elapsed());
    }

    #[cfg(not(tarpaulin_include))]
    pub fn log_end(&mut self) {
        self.end_time = Some(self.start_time.elapsed());
    }

    #[cfg(not(tarpaulin_include))]
    pub fn log_verification(&mut self, is_clique: bool) {
        self.is_clique = Some(is_clique);
    }

    pub fn log_enumeration(
        &mut self,
        clique_size: usize,
        number_of_candidates: Option<usize>,
        number_of_cliques: usize,
        enumeration_time: Duration,
    ) {
        self.clique_size = Some(clique_size);
        self.number_of_candidates = number_of_candidates;
        self.number_of_cliques = Some(number_of_cliques);
        self.enumeration_time = Some(enumeration_time);
    }

    pub fn log_phases(&mut self, generation_time: Duration, aggregation_time: Duration) {
        self.generation_time = Some(generation_time);
        self.aggregation_time = Some(aggregation_time);
    }

    /// Per worker data is only kept on the full level.
    pub fn log_workers(&mut self, reports: &[WorkerReport]) {
        self.number_of_workers = Some(reports.len());
        self.slowest_worker_time = reports.iter().map(|report| report.elapsed).max();

        if self.level == StatisticsLevel::Full {
            self.worker_statistics
                .extend(reports.iter().map(WorkerStatistics::from));
        }
    }

    #[cfg(not(tarpaulin_include))]
    pub fn save_statistics(&self) -> Result<(), Error> {
        let mut statistics_file = File::create(&self.out_file)?;
        write!(statistics_file, "Raw Statistics: {:#?}", self).map_err(Error::from)
    }
}
