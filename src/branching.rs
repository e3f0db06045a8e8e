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

//! This module provides the branching heuristics of the solver. A heuristic is asked, at
//! each branching node, to select a variable of the (already reduced) formula. It must
//! return None iff the formula has no clause left.

use rustc_hash::FxHashMap;
use crate::common::Branching;
use crate::core::formula::Formula;
use crate::core::literal::Variable;

pub trait BranchingDecision {
    fn branch_on(&mut self, formula: &Formula) -> Option<Variable>;
}

impl<B: BranchingDecision + ?Sized> BranchingDecision for Box<B> {
    fn branch_on(&mut self, formula: &Formula) -> Option<Variable> {
        (**self).branch_on(formula)
    }
}

/// Returns the heuristic selected on the command line
pub fn heuristic_from(branching: Branching) -> Box<dyn BranchingDecision> {
    match branching {
        Branching::MostFrequent => Box::<MostFrequent>::default(),
        Branching::FirstVariable => Box::<FirstVariable>::default(),
    }
}

/// This heuristic selects the variable with the most occurrences (both polarities) in the
/// clauses of the formula. In case of tie, it selects the variable with the smallest identifier.
#[derive(Default)]
pub struct MostFrequent {
    occurrences: FxHashMap<Variable, usize>,
}

impl BranchingDecision for MostFrequent {
    fn branch_on(&mut self, formula: &Formula) -> Option<Variable> {
        self.occurrences.clear();
        for clause in formula.iter() {
            for variable in clause.iter_variables() {
                *self.occurrences.entry(variable).or_insert(0) += 1;
            }
        }
        let mut selected: Option<Variable> = None;
        let mut best_score = 0;
        for (variable, score) in self.occurrences.iter().map(|(v, s)| (*v, *s)) {
            let better = match selected {
                None => true,
                Some(best) => score > best_score || (score == best_score && variable < best),
            };
            if better {
                selected = Some(variable);
                best_score = score;
            }
        }
        selected
    }
}

/// Selects the smallest variable appearing in the formula
#[derive(Default)]
pub struct FirstVariable {}

impl BranchingDecision for FirstVariable {
    fn branch_on(&mut self, formula: &Formula) -> Option<Variable> {
        formula.iter().flat_map(|c| c.iter_variables()).min()
    }
}
