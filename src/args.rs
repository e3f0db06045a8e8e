use clap::{Parser, Subcommand};

use std::path::PathBuf;
use crate::{Branching, SortKey};
use crate::solver::SolverParameters;

#[derive(Parser)]
#[clap(name="Seamless", version, author, about)]
pub struct Args {
    /// Verbosity of the logs written on stderr (-v info, -vv debug, -vvv trace)
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decides the satisfiability of a DIMACS file and prints a satisfying assignment, if any
    Solve(SolveArgs),
    /// Prints the size of the formula in a DIMACS file
    Info {
        /// The input file
        #[clap(value_parser)]
        file: PathBuf,
    },
    /// Summarizes every DIMACS file of a folder
    List {
        /// The folder containing the problems
        #[clap(value_parser)]
        folder: PathBuf,
        /// Column used to sort the problems
        #[clap(short, long, value_enum, default_value_t=SortKey::Name)]
        sort: SortKey,
    },
    /// Solves a small built-in formula
    Example,
}

#[derive(clap::Args)]
pub struct SolveArgs {
    /// The input file. Files ending with .xz are decompressed on the fly
    #[clap(value_parser)]
    file: PathBuf,
    /// Stops the search after timeout seconds
    #[clap(short, long = "time-limit", default_value_t=5000)]
    timeout: u64,
    /// Variable selection heuristic
    #[clap(short, long, value_enum, default_value_t=Branching::MostFrequent)]
    branching: Branching,
    /// Collect stats during the search
    #[clap(long, action)]
    statistics: bool,
}

impl Args {

    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    /// Maximum level of the logs, as a directive for the tracing filter
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl SolveArgs {

    pub fn new(file: PathBuf, timeout: u64, branching: Branching, statistics: bool) -> Self {
        Self { file, timeout, branching, statistics }
    }

    pub fn file(&self) -> &PathBuf {
        &self.file
    }

    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    pub fn branching(&self) -> Branching {
        self.branching
    }

    pub fn statistics(&self) -> bool {
        self.statistics
    }

    pub fn solver_param(&self) -> SolverParameters {
        SolverParameters::new(self.timeout, self.branching, self.statistics)
    }
}
