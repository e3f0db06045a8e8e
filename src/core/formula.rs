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

//! A formula in conjunctive normal form: a number of variables and a set of clauses.
//! Formulas are never modified in place. Fixing a variable (see [`Formula::simplify`])
//! derives a new formula which shares its untouched clauses with the original one.
//!
//! The clauses are kept sorted and without duplicates. This canonical representation
//! makes equality a set equality and makes every derived formula independent of the
//! order in which the clauses were produced.

use std::fmt;

use super::assignment::Assignment;
use super::clause::Clause;
use super::literal::{Literal, Variable};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Formula {
    /// Number of variables of the problem. Valid variables are 1..=number_variables
    number_variables: usize,
    /// Canonical (sorted, deduplicated) set of clauses
    clauses: Vec<Clause>,
}

impl Formula {

    pub fn new<I: IntoIterator<Item = Clause>>(number_variables: usize, clauses: I) -> Self {
        let mut clauses = clauses.into_iter().collect::<Vec<Clause>>();
        clauses.sort_unstable();
        clauses.dedup();
        Self {
            number_variables,
            clauses,
        }
    }

    /// Creates a formula from clauses given as signed DIMACS literals
    pub fn from_dimacs(number_variables: usize, clauses: &[Vec<isize>]) -> Self {
        Self::new(number_variables, clauses.iter().map(|c| Clause::from_dimacs(c)))
    }

    pub fn number_variables(&self) -> usize {
        self.number_variables
    }

    pub fn number_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Returns true iff the formula has no clause (it is then trivially satisfiable)
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Returns true iff the formula contains the empty clause (it is then unsatisfiable)
    pub fn has_empty_clause(&self) -> bool {
        // The empty clause is the smallest clause in the canonical order
        self.clauses.first().is_some_and(|c| c.is_empty())
    }

    /// Returns the literal of the first unit clause of the formula, if any
    pub fn unit_literal(&self) -> Option<Literal> {
        self.clauses.iter().find_map(|c| c.unit_literal())
    }

    pub fn contains(&self, clause: &Clause) -> bool {
        self.clauses.binary_search(clause).is_ok()
    }

    /// Returns the formula obtained by fixing the variable to the given value.
    ///     - The clauses having a literal satisfied by the value are removed
    ///     - The literals on the variable are removed from the other clauses
    /// A clause left without literals is kept as an empty clause, which signals that no
    /// assignment extending this one can satisfy the formula.
    pub fn simplify(&self, variable: Variable, value: bool) -> Formula {
        Formula::new(self.number_variables, self.clauses.iter().filter_map(|c| c.assign(variable, value)))
    }

    /// Returns true iff every clause has a literal satisfied by the assignment
    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        self.clauses.iter().all(|c| c.is_satisfied_by(assignment))
    }

    /// Returns an iterator on the clauses of the formula
    pub fn iter(&self) -> impl Iterator<Item = &Clause> + '_ {
        self.clauses.iter()
    }
}

// Writes a formula as C1 ∧ C2 ∧ ... ∧ Cn. The empty formula is written as an empty string.
impl fmt::Display for Formula {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.clauses.iter().map(|c| format!("{}", c)).collect::<Vec<String>>().join(" ∧ "))
    }
}
