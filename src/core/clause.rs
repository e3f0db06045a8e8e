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

//! Representation of a clause in Seamless. A clause is a set of literals, stored as a
//! sorted slice without duplicates so that two clauses with the same literals are equal
//! (and hash identically) regardless of the order in which the literals were given.
//! The slice is shared between the formulas derived during the search, since a clause is
//! never modified once built.

use std::fmt;
use std::sync::Arc;

use super::assignment::Assignment;
use super::literal::{Literal, Variable};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause {
    literals: Arc<[Literal]>,
}

impl Clause {

    pub fn new<I: IntoIterator<Item = Literal>>(literals: I) -> Self {
        let mut literals = literals.into_iter().collect::<Vec<Literal>>();
        literals.sort_unstable();
        literals.dedup();
        Self {
            literals: literals.into(),
        }
    }

    /// Returns the clause with the given signed DIMACS literals
    pub fn from_dimacs(literals: &[isize]) -> Self {
        Self::new(literals.iter().copied().map(Literal::from_dimacs))
    }

    /// Returns true iff the clause has no literal. An empty clause can not be satisfied.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Returns true iff the clause has exactly one literal
    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    /// Returns the literal of a unit clause
    pub fn unit_literal(&self) -> Option<Literal> {
        if self.is_unit() {
            Some(self.literals[0])
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn contains(&self, literal: Literal) -> bool {
        self.literals.binary_search(&literal).is_ok()
    }

    /// Returns true iff at least one literal of the clause is satisfied by the assignment
    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        self.literals.iter().any(|l| assignment.satisfies(*l))
    }

    /// Returns the clause obtained by fixing the variable to the given value. `None` means
    /// that the clause is satisfied. Otherwise the literals on the variable are removed (the
    /// result may be empty). If the variable does not appear in the clause, the literals are
    /// shared with the returned clause.
    pub fn assign(&self, variable: Variable, value: bool) -> Option<Clause> {
        let mut on_variable = false;
        for literal in self.literals.iter().filter(|l| l.variable() == variable) {
            if literal.is_satisfied_by(value) {
                return None;
            }
            on_variable = true;
        }
        if !on_variable {
            return Some(self.clone());
        }
        let remaining = self.literals.iter().copied().filter(|l| l.variable() != variable).collect::<Vec<Literal>>();
        Some(Clause { literals: remaining.into() })
    }

    /// Returns an iterator on the literals of the clause, in increasing order
    pub fn iter(&self) -> impl Iterator<Item = Literal> + '_ {
        self.literals.iter().copied()
    }

    /// Returns an iterator on the variables represented by the literals of the clause
    pub fn iter_variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.literals.iter().map(|l| l.variable())
    }
}

// Writes a clause as (l1 ∨ l2 ∨ ... ∨ ln)
impl fmt::Display for Clause {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.literals.iter().map(|l| format!("{}", l)).collect::<Vec<String>>().join(" ∨ "))
    }
}
