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
use std::time::Duration;

use crate::branching::{BranchingDecision, MostFrequent};
use crate::common::*;
use crate::core::assignment::Assignment;
use crate::core::formula::Formula;
use crate::interrupt::{CancellationToken, Interrupt};
use crate::observer::SearchObserver;
use crate::propagator::{Halt, Propagator};

/// A node of the search: a reduced formula and the partial assignment that produced it.
/// Each frame owns its formula and its assignment, so popping a frame restores exactly the
/// state in which the corresponding branch was created.
struct Frame {
    formula: Formula,
    assignment: Assignment,
}

/// This structure represents the DPLL solver of Seamless. The search is driven by an explicit
/// stack of frames instead of recursive calls, so that its depth is only bounded by the
/// available memory. Each frame popped from the stack goes through the following steps:
///     1. The interrupt is polled. If it fired, the search stops with an unknown outcome.
///     2. Unit propagation and pure literal elimination reduce the formula (see the
///        propagator). A conflict discards the frame.
///     3. If no clause remains, the frame's assignment satisfies the input formula.
///     4. Otherwise the heuristic selects a variable, and two frames are pushed: first the one
///        setting the variable to false, then the one setting it to true. The true branch is
///        thus explored first.
/// The formula is unsatisfiable once the stack is empty.
///
/// The stack and the frames are local to each call to `solve`; the solver only owns the
/// branching heuristic, the propagator's buffers and the observer notified during the search.
pub struct Solver<B: BranchingDecision, O: SearchObserver = ()> {
    /// Heuristics that decide on which variable to branch next
    branching_heuristic: B,
    /// Runs unit propagation and pure literal elimination on each frame
    propagator: Propagator,
    /// Notified of the propagations, decisions, conflicts and of the termination
    observer: O,
}

impl Default for Solver<MostFrequent, ()> {
    fn default() -> Self {
        Self::new(MostFrequent::default(), ())
    }
}

impl<B: BranchingDecision, O: SearchObserver> Solver<B, O> {

    pub fn new(branching_heuristic: B, observer: O) -> Self {
        Self {
            branching_heuristic,
            propagator: Propagator::new(),
            observer,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Decides the satisfiability of the formula. The interrupt is polled before each frame
    /// and before each unit propagation; once it fires, `SolveResult::Unknown` is returned.
    pub fn solve<I: Interrupt + ?Sized>(&mut self, formula: &Formula, interrupt: &I) -> SolveResult {
        self.observer.on_start(formula);
        let result = self.search(formula, interrupt);
        self.observer.on_termination(&result);
        result
    }

    fn search<I: Interrupt + ?Sized>(&mut self, formula: &Formula, interrupt: &I) -> SolveResult {
        let mut stack = vec![Frame {
            formula: formula.clone(),
            assignment: Assignment::default(),
        }];

        while let Some(mut frame) = stack.pop() {
            if interrupt.is_interrupted() {
                return SolveResult::Unknown;
            }
            match self.propagator.propagate(&mut frame.formula, &mut frame.assignment, interrupt, &mut self.observer) {
                Err(Halt::Interrupted) => return SolveResult::Unknown,
                Err(Halt::Conflict) => {
                    self.observer.on_conflict(stack.len());
                    continue;
                },
                Ok(()) => {},
            }
            if frame.formula.is_empty() {
                return SolveResult::Satisfiable(frame.assignment);
            }

            // Only a formula without clauses has no variable to branch on
            let Some(variable) = self.branching_heuristic.branch_on(&frame.formula) else {
                panic!("No branching variable in a formula with {} clauses", frame.formula.number_clauses());
            };
            self.observer.on_decision(variable, stack.len());

            let mut negative = frame.assignment.clone();
            negative.set(variable, false);
            stack.push(Frame {
                formula: frame.formula.simplify(variable, false),
                assignment: negative,
            });

            let mut positive = frame.assignment;
            positive.set(variable, true);
            stack.push(Frame {
                formula: frame.formula.simplify(variable, true),
                assignment: positive,
            });
        }
        SolveResult::Unsatisfiable
    }
}

/// Decides the satisfiability of the formula with the default heuristic, polling the
/// interrupt during the search.
pub fn solve<I: Interrupt + ?Sized>(formula: &Formula, interrupt: &I) -> SolveResult {
    Solver::default().solve(formula, interrupt)
}

/// Parameters of a solving run, as given on the command line
#[derive(Debug, Clone, Copy)]
pub struct SolverParameters {
    /// Time limit for the search, in seconds
    timeout: u64,
    /// Heuristic used to select the branching variable
    branching: Branching,
    /// Collect and print statistics on the search
    statistics: bool,
}

impl Default for SolverParameters {
    fn default() -> Self {
        Self {
            timeout: u64::MAX,
            branching: Branching::MostFrequent,
            statistics: false,
        }
    }
}

impl SolverParameters {

    pub fn new(timeout: u64, branching: Branching, statistics: bool) -> Self {
        Self {
            timeout,
            branching,
            statistics,
        }
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

    /// Returns a cancellation token firing when the time limit is reached
    pub fn cancellation_token(&self) -> CancellationToken {
        CancellationToken::with_timeout(Duration::from_secs(self.timeout))
    }
}

#[cfg(test)]
mod test_solver {
    use super::*;
    use crate::branching::FirstVariable;
    use crate::core::literal::{Literal, Variable};
    use crate::interrupt::Never;
    use crate::statistics::Statistics;
    use std::cell::Cell;

    fn pigeonhole(pigeons: usize, holes: usize) -> Formula {
        let var = |p: usize, h: usize| (p * holes + h + 1) as isize;
        let mut clauses = vec![];
        for p in 0..pigeons {
            clauses.push((0..holes).map(|h| var(p, h)).collect::<Vec<isize>>());
        }
        for h in 0..holes {
            for p1 in 0..pigeons {
                for p2 in (p1 + 1)..pigeons {
                    clauses.push(vec![-var(p1, h), -var(p2, h)]);
                }
            }
        }
        Formula::from_dimacs(pigeons * holes, &clauses)
    }

    #[test]
    fn two_units_are_satisfiable() {
        let f = Formula::from_dimacs(2, &[vec![1], vec![2]]);
        let result = solve(&f, &Never);
        assert!(result.is_satisfiable());
        let a = result.assignment().unwrap();
        assert_eq!(Some(true), a.get(Variable(1)));
        assert_eq!(Some(true), a.get(Variable(2)));
        assert_eq!(2, a.len());
    }

    #[test]
    fn contradicting_units_are_unsatisfiable() {
        let f = Formula::from_dimacs(1, &[vec![1], vec![-1]]);
        let result = solve(&f, &Never);
        assert_eq!(SolveResult::Unsatisfiable, result);
        assert!(result.assignment().is_none());
    }

    #[test]
    fn empty_formula_is_satisfiable() {
        let f = Formula::new(0, vec![]);
        let result = solve(&f, &Never);
        assert!(result.is_satisfiable());
        assert!(result.assignment().unwrap().is_empty());
    }

    #[test]
    fn formula_with_empty_clause_is_unsatisfiable() {
        let f = Formula::new(2, vec![crate::core::clause::Clause::new(vec![]), crate::core::clause::Clause::from_dimacs(&[1, 2])]);
        assert_eq!(SolveResult::Unsatisfiable, solve(&f, &Never));
    }

    #[test]
    fn three_clauses_witness_satisfies_formula() {
        let f = Formula::from_dimacs(3, &[vec![1, -2], vec![2, 3], vec![-1, -3]]);
        let result = solve(&f, &Never);
        assert!(f.is_satisfied_by(result.assignment().unwrap()));
    }

    #[test]
    fn formula_with_pure_literals() {
        let f = Formula::from_dimacs(3, &[vec![1, 2], vec![1, -3], vec![2, 3]]);
        let result = solve(&f, &Never);
        assert!(f.is_satisfied_by(result.assignment().unwrap()));
    }

    #[test]
    fn backtracking_formula_witness() {
        let f = Formula::from_dimacs(3, &[vec![1, 2], vec![-1, 3], vec![-2, -3], vec![1, -3]]);
        let result = solve(&f, &Never);
        assert!(f.is_satisfied_by(result.assignment().unwrap()));
    }

    #[test]
    fn true_branch_conflict_backtracks_to_false_branch() {
        let f = Formula::from_dimacs(4, &[vec![-1, 2], vec![-1, -2], vec![1, 3], vec![1, -3, 4]]);
        let mut stat = Statistics::<true>::default();
        let result = Solver::new(MostFrequent::default(), &mut stat).solve(&f, &Never);
        let a = result.assignment().unwrap();
        assert!(f.is_satisfied_by(a));
        assert_eq!(Some(false), a.get(Variable(1)));
        assert_eq!(1, stat.number_decisions());
        assert_eq!(1, stat.number_conflicts());
    }

    #[test]
    fn true_branch_is_explored_first() {
        let f = Formula::from_dimacs(2, &[vec![1, 2], vec![-1, -2]]);
        let result = solve(&f, &Never);
        let a = result.assignment().unwrap();
        assert_eq!(Some(true), a.get(Variable(1)));
        assert_eq!(Some(false), a.get(Variable(2)));
    }

    #[test]
    fn untouched_variables_are_absent() {
        let f = Formula::from_dimacs(5, &[vec![1]]);
        let result = solve(&f, &Never);
        let a = result.assignment().unwrap();
        assert_eq!(Some(true), a.get(Variable(1)));
        assert_eq!(None, a.get(Variable(3)));
        assert_eq!(1, a.len());
    }

    #[test]
    fn huge_declared_variable_count() {
        for number_variables in [100_000_000_000, usize::MAX] {
            let f = Formula::from_dimacs(number_variables, &[vec![1]]);
            let result = solve(&f, &Never);
            let a = result.assignment().unwrap();
            assert_eq!(Some(true), a.get(Variable(1)));
            assert_eq!(1, a.len());
        }
    }

    #[test]
    #[should_panic]
    fn heuristic_without_variable_on_non_empty_formula() {
        struct Nothing;
        impl BranchingDecision for Nothing {
            fn branch_on(&mut self, _formula: &Formula) -> Option<Variable> {
                None
            }
        }
        Solver::new(Nothing, ()).solve(&Formula::from_dimacs(2, &[vec![1, 2], vec![-1, -2]]), &Never);
    }

    #[test]
    fn pigeonhole_is_unsatisfiable() {
        let mut stat = Statistics::<true>::default();
        let result = Solver::new(MostFrequent::default(), &mut stat).solve(&pigeonhole(4, 3), &Never);
        assert_eq!(SolveResult::Unsatisfiable, result);
        assert!(stat.number_conflicts() > 1);
        assert!(stat.max_depth() > 2);
        let result = Solver::new(FirstVariable::default(), ()).solve(&pigeonhole(4, 3), &Never);
        assert_eq!(SolveResult::Unsatisfiable, result);
    }

    #[test]
    fn pigeonhole_with_enough_holes_is_satisfiable() {
        let f = pigeonhole(3, 3);
        let result = solve(&f, &Never);
        assert!(f.is_satisfied_by(result.assignment().unwrap()));
    }

    #[test]
    fn cancelled_token_gives_unknown() {
        let token = CancellationToken::new();
        token.cancel();
        assert_eq!(SolveResult::Unknown, solve(&Formula::from_dimacs(1, &[vec![1]]), &token));
        assert_eq!(SolveResult::Unknown, solve(&Formula::new(0, vec![]), &token));
        assert_eq!(SolveResult::Unknown, solve(&pigeonhole(5, 4), &token));
    }

    #[test]
    fn expired_deadline_gives_unknown() {
        let parameters = SolverParameters::new(0, Branching::MostFrequent, false);
        assert_eq!(SolveResult::Unknown, solve(&pigeonhole(4, 3), &parameters.cancellation_token()));
    }

    #[test]
    fn interrupt_during_search_gives_unknown() {
        let polls = Cell::new(0);
        let interrupt = || {
            polls.set(polls.get() + 1);
            polls.get() > 5
        };
        assert_eq!(SolveResult::Unknown, solve(&pigeonhole(5, 4), &interrupt));
        assert_eq!(6, polls.get());
    }

    #[test]
    fn observer_is_notified() {
        #[derive(Default)]
        struct Recorder {
            started: bool,
            decisions: Vec<(Variable, usize)>,
            propagations: Vec<Literal>,
            result: Option<SolveResult>,
        }
        impl SearchObserver for Recorder {
            fn on_start(&mut self, _formula: &Formula) {
                self.started = true;
            }
            fn on_decision(&mut self, variable: Variable, depth: usize) {
                self.decisions.push((variable, depth));
            }
            fn on_propagation(&mut self, literal: Literal) {
                self.propagations.push(literal);
            }
            fn on_termination(&mut self, result: &SolveResult) {
                self.result = Some(result.clone());
            }
        }
        let f = Formula::from_dimacs(2, &[vec![1, 2], vec![-1, -2]]);
        let mut solver = Solver::new(MostFrequent::default(), Recorder::default());
        let result = solver.solve(&f, &Never);
        assert!(solver.observer().started);
        let recorder = solver.into_observer();
        assert!(recorder.started);
        assert_eq!(vec![(Variable(1), 0)], recorder.decisions);
        assert_eq!(vec![Literal::from_dimacs(-2)], recorder.propagations);
        assert_eq!(Some(result), recorder.result);
    }

    #[test]
    fn solver_is_reusable() {
        let mut solver = Solver::default();
        assert!(solver.solve(&Formula::from_dimacs(1, &[vec![1], vec![-1]]), &Never).is_unsatisfiable());
        assert!(solver.solve(&Formula::from_dimacs(1, &[vec![-1]]), &Never).is_satisfiable());
    }

    #[test]
    fn default_parameters() {
        let parameters = SolverParameters::default();
        assert_eq!(u64::MAX, parameters.timeout());
        assert_eq!(Branching::MostFrequent, parameters.branching());
        assert!(!parameters.statistics());
        assert!(!parameters.cancellation_token().is_cancelled());
    }
}
