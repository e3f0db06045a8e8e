//! An implementation of a literal in Seamless. That is, a variable and a
//! polarity. This is represented by a signed integer, following the DIMACS
//! convention: `3` asserts the variable 3 and `-3` negates it.

use std::cmp::Ordering;
use std::fmt;

/// Identifier of a propositional variable. Variables are numbered from 1, as in
/// the DIMACS format.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Variable(pub usize);

impl Variable {
    /// Returns the identifier of the variable
    pub fn id(&self) -> usize {
        self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Literal(isize);

// Literals are ordered by variable, the positive literal first
impl Ord for Literal {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.0.unsigned_abs(), self.0 < 0).cmp(&(other.0.unsigned_abs(), other.0 < 0))
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Literal {

    /// Returns the literal on the given variable. If `negated` is true, the literal
    /// is satisfied when the variable is false.
    pub fn new(variable: Variable, negated: bool) -> Self {
        debug_assert!(variable.0 > 0, "Variables are numbered from 1");
        if negated {
            Literal(-(variable.0 as isize))
        } else {
            Literal(variable.0 as isize)
        }
    }

    /// Returns the literal represented by a signed DIMACS integer
    pub fn from_dimacs(value: isize) -> Self {
        assert!(value != 0, "Variables in clauses can not be 0");
        Literal(value)
    }

    /// Returns the signed DIMACS integer representing the literal
    pub fn to_dimacs(&self) -> isize {
        self.0
    }

    /// Returns true iff the literal has a positive polarity
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Returns true iff the literal has a negative polarity
    pub fn is_negated(&self) -> bool {
        self.0 < 0
    }

    /// Returns the variable represented by the literal
    pub fn variable(&self) -> Variable {
        Variable(self.0.unsigned_abs())
    }

    /// Returns the opposite of the current literal. That is, a literal representing the same
    /// variable but with opposite polarity
    pub fn negate(&self) -> Literal {
        Literal(-self.0)
    }

    /// Returns true iff the literal evaluates to true when its variable takes the given value
    pub fn is_satisfied_by(&self, value: bool) -> bool {
        self.is_positive() == value
    }
}

impl fmt::Display for Literal {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negated() {
            write!(f, "¬{}", self.0.unsigned_abs())
        } else {
            write!(f, "{}", self.0)
        }
    }
}
