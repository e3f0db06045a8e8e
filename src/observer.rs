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

//! Hooks called by the solver at well-defined points of the search. The solver does not
//! report anything by itself; progress reporting, statistics and logging are implemented
//! as observers.

use crate::common::SolveResult;
use crate::core::formula::Formula;
use crate::core::literal::{Literal, Variable};

pub trait SearchObserver {
    /// The search starts on the formula
    fn on_start(&mut self, _formula: &Formula) {}
    /// A unit clause forced the literal to true
    fn on_propagation(&mut self, _literal: Literal) {}
    /// A pure literal was set to true
    fn on_pure_literal(&mut self, _literal: Literal) {}
    /// The solver branches on the variable. `depth` is the size of the frame stack before
    /// the two branches are pushed.
    fn on_decision(&mut self, _variable: Variable, _depth: usize) {}
    /// A frame reached an empty clause and was discarded
    fn on_conflict(&mut self, _depth: usize) {}
    /// The search is over
    fn on_termination(&mut self, _result: &SolveResult) {}
}

impl SearchObserver for () {}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_start(&mut self, formula: &Formula) {
        (**self).on_start(formula);
    }

    fn on_propagation(&mut self, literal: Literal) {
        (**self).on_propagation(literal);
    }

    fn on_pure_literal(&mut self, literal: Literal) {
        (**self).on_pure_literal(literal);
    }

    fn on_decision(&mut self, variable: Variable, depth: usize) {
        (**self).on_decision(variable, depth);
    }

    fn on_conflict(&mut self, depth: usize) {
        (**self).on_conflict(depth);
    }

    fn on_termination(&mut self, result: &SolveResult) {
        (**self).on_termination(result);
    }
}
