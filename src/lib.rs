//Seamless
//Copyright (C) 2024 The Seamless developers
//
//This program is free software: you can redistribute it and/or modify
//it under the terms of the GNU Affero General Public License as published by
//the Free Software Foundation, either version 3 of the License, or
//(at your option) any later version.
//
//This program is distributed in the hope that it will be useful,
//but WITHOUT ANY WARRANTY; without even the implied warranty of
//MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//GNU Affero General Public License for more details.
//
//You should have received a copy of the GNU Affero General Public License
//along with this program.  If not, see <http://www.gnu.org/licenses/>.

pub mod args;
pub mod branching;
pub mod common;
pub mod core;
pub mod error;
pub mod interrupt;
pub mod observer;
pub mod parsers;
pub mod propagator;
pub mod solver;
pub mod statistics;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use args::SolveArgs;
use branching::heuristic_from;
use parsers::dimacs::{formula_from_file, header_from_file};
use statistics::Statistics;

pub use common::*;
pub use crate::core::assignment::{Assignment, Value};
pub use crate::core::clause::Clause;
pub use crate::core::formula::Formula;
pub use crate::core::literal::{Literal, Variable};
pub use error::{Error, Result};
pub use interrupt::{CancellationToken, Interrupt, Never};
pub use solver::{solve, Solver, SolverParameters};

use peak_alloc::PeakAlloc;
#[global_allocator]
pub static PEAK_ALLOC: PeakAlloc = PeakAlloc;

/// Solves the formula with the given parameters. The search stops once the time limit of
/// the parameters is reached.
pub fn run(formula: &Formula, parameters: SolverParameters) -> SolveResult {
    tracing::info!("solving with the {} heuristic and a time limit of {}s", parameters.branching(), parameters.timeout());
    let token = parameters.cancellation_token();
    let heuristic = heuristic_from(parameters.branching());
    if parameters.statistics() {
        let mut statistics = Statistics::<true>::default();
        let result = Solver::new(heuristic, &mut statistics).solve(formula, &token);
        statistics.print();
        result
    } else {
        Solver::new(heuristic, Statistics::<false>::default()).solve(formula, &token)
    }
}

pub fn solve_file(args: &SolveArgs) -> Result<SolveResult> {
    let formula = formula_from_file(args.file())?;
    println!("Solving formula with {} variables and {} clauses...\n", formula.number_variables(), formula.number_clauses());
    let result = run(&formula, args.solver_param());
    print_result(&result);
    Ok(result)
}

/// Prints the verdict and, if any, the assignment as one `x<id> = <value>` line per variable
pub fn print_result(result: &SolveResult) {
    println!("{}", result);
    if let Some(assignment) = result.assignment() {
        print!("{}", assignment);
    }
}

/// Returns the formula `(1 ∨ ¬2) ∧ (2 ∨ 3) ∧ (¬1 ∨ ¬3)`
pub fn example_formula() -> Formula {
    Formula::from_dimacs(3, &[vec![1, -2], vec![2, 3], vec![-1, -3]])
}

pub fn example() -> SolveResult {
    let formula = example_formula();
    println!("Example formula:\n{}\n", formula);
    let result = solve(&formula, &Never);
    print_result(&result);
    result
}

/// Size of the formula stored in a DIMACS file
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaInfo {
    pub name: String,
    pub number_variables: usize,
    pub number_clauses: usize,
    pub average_clause_size: f64,
    pub min_clause_size: usize,
    pub max_clause_size: usize,
}

impl FormulaInfo {
    pub fn new(name: String, formula: &Formula) -> Self {
        let sizes = formula.iter().map(|c| c.len()).collect::<Vec<usize>>();
        let average_clause_size = if sizes.is_empty() { 0.0 } else { sizes.iter().sum::<usize>() as f64 / sizes.len() as f64 };
        Self {
            name,
            number_variables: formula.number_variables(),
            number_clauses: formula.number_clauses(),
            average_clause_size,
            min_clause_size: sizes.iter().copied().min().unwrap_or(0),
            max_clause_size: sizes.iter().copied().max().unwrap_or(0),
        }
    }
}

impl fmt::Display for FormulaInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "DIMACS CNF File: {}", self.name)?;
        writeln!(f, "Variables: {}", self.number_variables)?;
        writeln!(f, "Clauses: {}", self.number_clauses)?;
        writeln!(f, "Average clause size: {:.2}", self.average_clause_size)?;
        writeln!(f, "Minimum clause size: {}", self.min_clause_size)?;
        write!(f, "Maximum clause size: {}", self.max_clause_size)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
}

pub fn info(file: &Path) -> Result<FormulaInfo> {
    let formula = formula_from_file(file)?;
    let info = FormulaInfo::new(file_name(file), &formula);
    println!("{}", info);
    Ok(info)
}

/// A line of the `list` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub name: String,
    /// Size of the file, in bytes
    pub size: u64,
    pub number_variables: usize,
    pub number_clauses: usize,
}

impl ListEntry {
    /// Size of the file in kilobytes, rounded up
    pub fn size_kb(&self) -> u64 {
        self.size.div_ceil(1024)
    }
}

/// Reads, in parallel, the problem line of every DIMACS file (`*.cnf*`) of the folder.
/// Files that can not be read are reported and skipped.
pub fn list_entries(folder: &Path, sort: SortKey) -> Result<Vec<ListEntry>> {
    if !folder.is_dir() {
        return Err(Error::NotADirectory(folder.to_path_buf()));
    }
    let mut files: Vec<(PathBuf, u64)> = vec![];
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        let metadata = entry.metadata()?;
        if metadata.is_file() && entry.file_name().to_string_lossy().contains(".cnf") {
            files.push((entry.path(), metadata.len()));
        }
    }
    tracing::debug!("found {} DIMACS files in {}", files.len(), folder.display());

    let mut entries = files.par_iter().filter_map(|(path, size)| {
        match header_from_file(path) {
            Ok(header) => Some(ListEntry {
                name: file_name(path),
                size: *size,
                number_variables: header.number_variables,
                number_clauses: header.number_clauses,
            }),
            Err(e) => {
                tracing::warn!("skipping {}: {}", path.display(), e);
                println!("Error reading {}: {}", file_name(path), e);
                None
            },
        }
    }).collect::<Vec<ListEntry>>();

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    match sort {
        SortKey::Name => {},
        SortKey::Size => entries.sort_by_key(|e| e.size),
        SortKey::Variables => entries.sort_by_key(|e| e.number_variables),
        SortKey::Clauses => entries.sort_by_key(|e| e.number_clauses),
    }
    Ok(entries)
}

/// Formats an integer with a comma every three digits
pub fn with_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Renders the entries of the `list` command as a table
pub fn list_table(entries: &[ListEntry]) -> String {
    let max_variables = entries.iter().map(|e| e.number_variables).max().unwrap_or(0);
    let max_clauses = entries.iter().map(|e| e.number_clauses).max().unwrap_or(0);
    let variable_width = 10.max(with_thousands(max_variables as u64).len());
    let clause_width = 8.max(with_thousands(max_clauses as u64).len());

    let mut table = format!("{:>vw$}  {:>cw$}  {:>13}  Filename\n", "Variables", "Clauses", "Size (KB)", vw = variable_width, cw = clause_width);
    table.push_str(&"-".repeat(variable_width + clause_width + 13 + 40 + 6));
    table.push('\n');
    for entry in entries {
        table.push_str(&format!("{:>vw$}  {:>cw$}  {:>10} KB  {}\n",
            with_thousands(entry.number_variables as u64),
            with_thousands(entry.number_clauses as u64),
            with_thousands(entry.size_kb()),
            entry.name,
            vw = variable_width,
            cw = clause_width));
    }
    table
}

pub fn list(folder: &Path, sort: SortKey) -> Result<Vec<ListEntry>> {
    let entries = list_entries(folder, sort)?;
    println!("Found {} DIMACS files in {}\n", entries.len(), folder.display());
    print!("{}", list_table(&entries));
    Ok(entries)
}
