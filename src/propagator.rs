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

//! This module gives the implementation of the propagator used during the search.
//! It is called on every frame popped from the search stack, before any branching
//! decision, and reduces the frame's formula as follows:
//!     - While the formula has a unit clause, the literal of that clause is set to true and
//!       the formula is simplified accordingly. The interrupt is polled before each step.
//!     - Then, every pure literal of the reduced formula (a literal whose negation does not
//!       appear in any clause) is set to true and the formula is simplified.
//! Any empty clause produced along the way ends the propagation with a conflict.

use rustc_hash::FxHashSet;

use crate::core::assignment::Assignment;
use crate::core::formula::Formula;
use crate::core::literal::Literal;
use crate::interrupt::Interrupt;
use crate::observer::SearchObserver;

/// Reason for which the propagation stopped before reaching a fix point
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Halt {
    /// The formula contains an empty clause
    Conflict,
    /// The interrupt fired during the propagation
    Interrupted,
}

pub type PropagationResult = Result<(), Halt>;

#[derive(Default)]
pub struct Propagator {
    occurring: FxHashSet<Literal>,
}

impl Propagator {

    pub fn new() -> Self {
        Self::default()
    }

    /// Propagates the unit clauses and the pure literals of the formula. The assignment is
    /// extended with the value of every fixed variable.
    pub fn propagate<I, O>(&mut self, formula: &mut Formula, assignment: &mut Assignment, interrupt: &I, observer: &mut O) -> PropagationResult
        where I: Interrupt + ?Sized,
              O: SearchObserver
    {
        loop {
            if formula.has_empty_clause() {
                return Err(Halt::Conflict);
            }
            if interrupt.is_interrupted() {
                return Err(Halt::Interrupted);
            }
            match formula.unit_literal() {
                None => break,
                Some(literal) => {
                    observer.on_propagation(literal);
                    Self::fix(literal, formula, assignment);
                },
            }
        }

        for literal in self.find_pure_literals(formula) {
            observer.on_pure_literal(literal);
            Self::fix(literal, formula, assignment);
            if formula.has_empty_clause() {
                return Err(Halt::Conflict);
            }
        }
        Ok(())
    }

    /// Sets the literal to true and simplifies the formula
    fn fix(literal: Literal, formula: &mut Formula, assignment: &mut Assignment) {
        let value = literal.is_positive();
        assignment.set(literal.variable(), value);
        *formula = formula.simplify(literal.variable(), value);
    }

    /// Returns the pure literals of the formula, in increasing order
    pub fn find_pure_literals(&mut self, formula: &Formula) -> Vec<Literal> {
        self.occurring.clear();
        for clause in formula.iter() {
            self.occurring.extend(clause.iter());
        }
        let mut pure = self.occurring.iter().copied().filter(|l| !self.occurring.contains(&l.negate())).collect::<Vec<Literal>>();
        pure.sort_unstable();
        pure
    }
}

/// Returns every literal that occurs in the formula while its negation does not
pub fn find_pure_literals(formula: &Formula) -> Vec<Literal> {
    Propagator::new().find_pure_literals(formula)
}
