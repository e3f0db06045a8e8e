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

use std::fmt;
use std::time::{Duration, Instant};

use crate::PEAK_ALLOC;
use crate::common::SolveResult;
use crate::core::formula::Formula;
use crate::core::literal::{Literal, Variable};
use crate::observer::SearchObserver;

/// Implements a bunch of statistics that are collected during the search. Nothing is
/// collected if `B` is false.
#[derive(Default)]
pub struct Statistics<const B: bool> {
    number_decisions: usize,
    number_propagations: usize,
    number_pure_literals: usize,
    number_conflicts: usize,
    max_depth: usize,
    start: Option<Instant>,
    elapsed: Duration,
    peak_memory: f32,
    outcome: Option<String>,
}

impl<const B: bool> Statistics<B> {

    pub fn number_decisions(&self) -> usize {
        self.number_decisions
    }

    pub fn number_propagations(&self) -> usize {
        self.number_propagations
    }

    pub fn number_pure_literals(&self) -> usize {
        self.number_pure_literals
    }

    pub fn number_conflicts(&self) -> usize {
        self.number_conflicts
    }

    /// Largest size reached by the frame stack
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn print(&self) {
        if B {
            println!("{}", self);
        }
    }
}

impl<const B: bool> SearchObserver for Statistics<B> {

    fn on_start(&mut self, formula: &Formula) {
        if B {
            tracing::debug!("search started on {} variables and {} clauses", formula.number_variables(), formula.number_clauses());
            self.start = Some(Instant::now());
        }
    }

    fn on_propagation(&mut self, _literal: Literal) {
        if B {
            self.number_propagations += 1;
        }
    }

    fn on_pure_literal(&mut self, _literal: Literal) {
        if B {
            self.number_pure_literals += 1;
        }
    }

    fn on_decision(&mut self, variable: Variable, depth: usize) {
        if B {
            tracing::trace!("branching on {} at depth {}", variable, depth);
            self.number_decisions += 1;
            // Both branches are pushed on the stack
            self.max_depth = self.max_depth.max(depth + 2);
        }
    }

    fn on_conflict(&mut self, _depth: usize) {
        if B {
            self.number_conflicts += 1;
        }
    }

    fn on_termination(&mut self, result: &SolveResult) {
        if B {
            if let Some(start) = self.start {
                self.elapsed = start.elapsed();
            }
            self.peak_memory = PEAK_ALLOC.peak_usage_as_mb();
            self.outcome = Some(format!("{}", result));
            tracing::info!("{}", self);
        }
    }
}

impl<const B: bool> fmt::Display for Statistics<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if B {
            write!(f,
                "{} | decisions {} | propagations {} | pure literals {} | conflicts {} | max depth {} | {:.3}s | peak memory {:.1} MB",
                self.outcome.as_deref().unwrap_or("RUNNING"),
                self.number_decisions,
                self.number_propagations,
                self.number_pure_literals,
                self.number_conflicts,
                self.max_depth,
                self.elapsed.as_secs_f64(),
                self.peak_memory)
        } else {
            write!(f, "")
        }
    }
}

#[cfg(test)]
mod test_statistics {
    use super::*;
    use crate::core::assignment::Assignment;

    #[test]
    fn quiet_statistics_collect_nothing() {
        let mut stat = Statistics::<false>::default();
        stat.on_decision(Variable(1), 0);
        stat.on_conflict(1);
        stat.on_propagation(Literal::from_dimacs(2));
        stat.on_termination(&SolveResult::Unsatisfiable);
        assert_eq!(0, stat.number_decisions());
        assert_eq!(0, stat.number_conflicts());
        assert_eq!(0, stat.number_propagations());
        assert_eq!(Duration::ZERO, stat.elapsed());
        assert_eq!("", format!("{}", stat));
    }

    #[test]
    fn counts_events() {
        let mut stat = Statistics::<true>::default();
        stat.on_start(&Formula::from_dimacs(2, &[vec![1, 2]]));
        stat.on_decision(Variable(1), 0);
        stat.on_decision(Variable(2), 1);
        stat.on_propagation(Literal::from_dimacs(2));
        stat.on_pure_literal(Literal::from_dimacs(-1));
        stat.on_conflict(2);
        stat.on_termination(&SolveResult::Satisfiable(Assignment::new(2)));
        assert_eq!(2, stat.number_decisions());
        assert_eq!(1, stat.number_propagations());
        assert_eq!(1, stat.number_pure_literals());
        assert_eq!(1, stat.number_conflicts());
        assert_eq!(3, stat.max_depth());
        assert!(stat.elapsed() < Duration::from_secs(60));
        assert!(format!("{}", stat).starts_with("SATISFIABLE | decisions 2"));
    }
}
