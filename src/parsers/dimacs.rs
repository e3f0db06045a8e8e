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

//! This module provides the reader of the problems given to the solver. Only the CNF
//! flavour of the DIMACS format is supported.
//! An example of valid file is given next
//!
//! c This line is a comment
//! c We define a problem with 3 variables and 3 clauses
//! p cnf 3 3
//! c Each clause is a list of signed literals terminated by 0
//! 1 -2 0
//! 2 3 0
//! -1 -3 0
//!
//! The following rules are enforced by the reader
//!     1. There is exactly one problem line, made of exactly four tokens `p cnf <variables> <clauses>`.
//!        It must appear before the first clause.
//!     2. Every literal references a variable between 1 and the declared number of variables.
//!        Tokens following the terminating 0 of a line are ignored and a line without 0 still
//!        forms a clause.
//!     3. The number of clause lines equals the declared number of clauses. Duplicated clauses
//!        are counted before they are merged in the formula.
//!     4. A line starting with `%` ends the problem, as in the SATLIB benchmarks.
//!
//! Files whose name ends with `.xz` are decompressed on the fly.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use xz2::read::XzDecoder;

use crate::core::clause::Clause;
use crate::core::formula::Formula;
use crate::error::{Error, Result};

/// Size of a problem, as declared by its problem line
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Header {
    pub number_variables: usize,
    pub number_clauses: usize,
}

/// Kind of a line of a DIMACS file
enum Line<'a> {
    /// Comment or blank line
    Skip,
    Problem(&'a str),
    Clause(&'a str),
    End,
}

fn classify(line: &str) -> Line<'_> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('c') {
        Line::Skip
    } else if line.starts_with('%') {
        Line::End
    } else if line.starts_with('p') {
        Line::Problem(line)
    } else {
        Line::Clause(line)
    }
}

fn parse_header(line: &str) -> Result<Header> {
    let tokens = line.split_whitespace().collect::<Vec<&str>>();
    if tokens.len() != 4 || tokens[0] != "p" || tokens[1] != "cnf" {
        return Err(Error::InvalidProblemLine(line.to_string()));
    }
    let number_variables = tokens[2].parse::<usize>().map_err(|_| Error::InvalidProblemLine(line.to_string()))?;
    let number_clauses = tokens[3].parse::<usize>().map_err(|_| Error::InvalidProblemLine(line.to_string()))?;
    Ok(Header { number_variables, number_clauses })
}

/// Parses the literals of a clause line, up to the first 0
fn parse_clause(line: &str, line_number: usize, header: &Header) -> Result<Vec<isize>> {
    let mut literals = vec![];
    for token in line.split_whitespace() {
        let literal = token.parse::<isize>().map_err(|_| Error::InvalidLiteral { line: line_number, token: token.to_string() })?;
        if literal == 0 {
            break;
        }
        let variable = literal.unsigned_abs();
        if variable > header.number_variables {
            return Err(Error::VariableOutOfRange { line: line_number, variable, declared: header.number_variables });
        }
        literals.push(literal);
    }
    Ok(literals)
}

/// Opens the file, decompressing it if its name ends with `.xz`
fn open(filepath: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(filepath)?;
    let compressed = filepath.file_name().is_some_and(|name| name.to_string_lossy().ends_with(".xz"));
    if compressed {
        Ok(Box::new(BufReader::new(XzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Reads a formula from a DIMACS file
pub fn formula_from_file(filepath: &Path) -> Result<Formula> {
    formula_from_reader(open(filepath)?)
}

/// Reads a formula from a DIMACS string
pub fn formula_from_str(input: &str) -> Result<Formula> {
    formula_from_reader(input.as_bytes())
}

pub fn formula_from_reader<R: BufRead>(reader: R) -> Result<Formula> {
    let mut header: Option<Header> = None;
    let mut clauses: Vec<Clause> = vec![];
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        match classify(&line) {
            Line::Skip => continue,
            Line::End => break,
            Line::Problem(problem) => {
                if header.is_some() {
                    return Err(Error::DuplicateProblemLine(line_number));
                }
                let h = parse_header(problem)?;
                clauses.reserve(h.number_clauses.min(1 << 16));
                header = Some(h);
            },
            Line::Clause(clause) => {
                let h = header.as_ref().ok_or(Error::MissingProblemLine)?;
                let literals = parse_clause(clause, line_number, h)?;
                if !literals.is_empty() {
                    clauses.push(Clause::from_dimacs(&literals));
                }
            },
        }
    }
    let header = header.ok_or(Error::MissingProblemLine)?;
    if clauses.len() != header.number_clauses {
        return Err(Error::ClauseCountMismatch { expected: header.number_clauses, found: clauses.len() });
    }
    Ok(Formula::new(header.number_variables, clauses))
}

/// Reads the problem line of a DIMACS file, without parsing its clauses
pub fn header_from_file(filepath: &Path) -> Result<Header> {
    header_from_reader(open(filepath)?)
}

pub fn header_from_reader<R: BufRead>(reader: R) -> Result<Header> {
    for line in reader.lines() {
        let line = line?;
        match classify(&line) {
            Line::Skip => continue,
            Line::Problem(problem) => return parse_header(problem),
            Line::Clause(_) | Line::End => break,
        }
    }
    Err(Error::MissingProblemLine)
}
