//! Compares the verdict of the solver with an exhaustive enumeration of the assignments
//! on random formulas of at most 12 variables.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seamless::branching::{FirstVariable, MostFrequent};
use seamless::{Formula, Never, SolveResult, Solver};

fn random_clauses(rng: &mut StdRng, number_variables: usize) -> Vec<Vec<isize>> {
    if number_variables == 0 {
        return vec![];
    }
    let number_clauses = rng.random_range(0..=4 * number_variables + 4);
    (0..number_clauses).map(|_| {
        let size = rng.random_range(1..=4);
        (0..size).map(|_| {
            let variable = rng.random_range(1..=number_variables) as isize;
            if rng.random_bool(0.5) { -variable } else { variable }
        }).collect()
    }).collect()
}

fn brute_force(number_variables: usize, clauses: &[Vec<isize>]) -> bool {
    (0..1u64 << number_variables).any(|bits| {
        clauses.iter().all(|clause| clause.iter().any(|&literal| {
            let value = (bits >> (literal.unsigned_abs() - 1)) & 1 == 1;
            value == (literal > 0)
        }))
    })
}

fn check_against_enumeration(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..150 {
        let number_variables = rng.random_range(0..=12);
        let clauses = random_clauses(&mut rng, number_variables);
        let formula = Formula::from_dimacs(number_variables, &clauses);
        let expected = brute_force(number_variables, &clauses);

        let results = [
            Solver::new(MostFrequent::default(), ()).solve(&formula, &Never),
            Solver::new(FirstVariable::default(), ()).solve(&formula, &Never),
        ];
        for result in results {
            match result {
                SolveResult::Satisfiable(assignment) => {
                    assert!(expected, "solver found a model of an unsatisfiable formula {}", formula);
                    assert!(formula.is_satisfied_by(&assignment), "invalid model for {}", formula);
                },
                SolveResult::Unsatisfiable => assert!(!expected, "solver missed a model of {}", formula),
                SolveResult::Unknown => panic!("search interrupted without interrupt"),
            }
        }
    }
}

#[test]
fn differential_seed_0() {
    check_against_enumeration(0);
}

#[test]
fn differential_seed_1() {
    check_against_enumeration(1);
}

#[test]
fn differential_seed_2() {
    check_against_enumeration(2);
}

#[test]
fn differential_seed_3() {
    check_against_enumeration(0x5eed);
}
