use proptest::prelude::*;
use seamless::propagator::find_pure_literals;
use seamless::{Assignment, Clause, Formula, Never, Variable};

const MAX_VARIABLES: usize = 8;

fn clauses() -> impl Strategy<Value = Vec<Vec<isize>>> {
    let literal = (1..=MAX_VARIABLES as isize, any::<bool>()).prop_map(|(v, negated)| if negated { -v } else { v });
    prop::collection::vec(prop::collection::vec(literal, 1..4), 0..24)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn models_satisfy_every_clause(clauses in clauses()) {
        let formula = Formula::from_dimacs(MAX_VARIABLES, &clauses);
        if let Some(assignment) = seamless::solve(&formula, &Never).assignment() {
            for clause in clauses.iter() {
                prop_assert!(clause.iter().any(|&l| assignment.get(Variable(l.unsigned_abs())) == Some(l > 0)));
            }
        }
    }

    #[test]
    fn pure_literals_never_falsify_a_clause(clauses in clauses()) {
        let mut formula = Formula::from_dimacs(MAX_VARIABLES, &clauses);
        let pure = find_pure_literals(&formula);
        for literal in pure.iter().copied() {
            prop_assert!(!pure.contains(&literal.negate()));
            formula = formula.simplify(literal.variable(), literal.is_positive());
            prop_assert!(!formula.has_empty_clause());
        }
        for literal in pure {
            prop_assert!(formula.iter().all(|c| !c.contains(literal) && !c.contains(literal.negate())));
        }
    }

    #[test]
    fn satisfied_clauses_stay_removed(clauses in clauses(), first in 1..=MAX_VARIABLES, second in 1..=MAX_VARIABLES, v1 in any::<bool>(), v2 in any::<bool>()) {
        let formula = Formula::from_dimacs(MAX_VARIABLES, &clauses);
        let mut assignment = Assignment::new(MAX_VARIABLES);
        assignment.set(Variable(first), v1);
        let once = formula.simplify(Variable(first), v1);
        let twice = once.simplify(Variable(second), v2);
        for clause in formula.iter().filter(|c| c.is_satisfied_by(&assignment)) {
            prop_assert!(!once.contains(clause));
            prop_assert!(!twice.contains(clause));
        }
        prop_assert!(once.iter().all(|c| c.iter_variables().all(|v| v != Variable(first))));
        prop_assert!(twice.iter().all(|c| c.iter_variables().all(|v| v != Variable(first) && v != Variable(second))));
    }

    #[test]
    fn clause_order_does_not_matter(clauses in clauses()) {
        let mut reversed = clauses.clone();
        reversed.reverse();
        for clause in reversed.iter_mut() {
            clause.reverse();
        }
        prop_assert_eq!(Formula::from_dimacs(MAX_VARIABLES, &clauses), Formula::from_dimacs(MAX_VARIABLES, &reversed));
        let formula = Formula::from_dimacs(MAX_VARIABLES, &clauses);
        prop_assert!(formula.number_clauses() <= clauses.len());
        for clause in clauses.iter() {
            prop_assert!(formula.contains(&Clause::from_dimacs(clause)));
        }
    }
}
