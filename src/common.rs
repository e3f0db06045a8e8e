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
use clap::ValueEnum;
use std::fmt;

use crate::core::assignment::Assignment;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Default)]
pub enum Branching {
    /// Variable with the most occurrences in the remaining clauses
    #[default]
    MostFrequent,
    /// Smallest variable still appearing in the remaining clauses
    FirstVariable,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Default)]
pub enum SortKey {
    #[default]
    Name,
    /// File size on disk
    Size,
    /// Declared number of variables
    Variables,
    /// Declared number of clauses
    Clauses,
}

impl fmt::Display for Branching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branching::MostFrequent => write!(f, "most-frequent"),
            Branching::FirstVariable => write!(f, "first-variable"),
        }
    }
}

/// Outcome of a search. If the formula is satisfiable, the assignment found by the solver
/// is given. It contains a value for every variable fixed on the successful branch; the
/// other variables can take any value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult {
    Satisfiable(Assignment),
    Unsatisfiable,
    /// The search was interrupted before reaching a verdict
    Unknown,
}

impl SolveResult {

    pub fn is_satisfiable(&self) -> bool {
        matches!(self, SolveResult::Satisfiable(_))
    }

    pub fn is_unsatisfiable(&self) -> bool {
        matches!(self, SolveResult::Unsatisfiable)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, SolveResult::Unknown)
    }

    /// Returns the satisfying assignment, if any
    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            SolveResult::Satisfiable(assignment) => Some(assignment),
            _ => None,
        }
    }
}

impl fmt::Display for SolveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveResult::Satisfiable(_) => write!(f, "SATISFIABLE"),
            SolveResult::Unsatisfiable => write!(f, "UNSATISFIABLE"),
            SolveResult::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
