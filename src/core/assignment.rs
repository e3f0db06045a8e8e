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

//! Partial assignments built during the search. Each variable is in one of three
//! states: true, false or not yet decided.

use std::fmt;
use super::literal::{Literal, Variable};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Value {
    True,
    False,
    #[default]
    Unassigned,
}

impl Value {
    pub fn is_assigned(&self) -> bool {
        !matches!(self, Value::Unassigned)
    }

    /// Returns the boolean value, if the variable is assigned
    pub fn to_bool(self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            Value::Unassigned => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        if value { Value::True } else { Value::False }
    }
}

/// A mapping from variables to values. The vector is indexed by the variable identifier
/// (index 0 is never used). Cloning an assignment yields an independent snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    values: Vec<Value>,
    number_assigned: usize,
}

impl Assignment {

    /// Creates an assignment in which the variables `1..=number_variables` are unassigned
    pub fn new(number_variables: usize) -> Self {
        Self {
            values: vec![Value::Unassigned; number_variables + 1],
            number_assigned: 0,
        }
    }

    /// Sets the value of the variable
    pub fn set(&mut self, variable: Variable, value: bool) {
        if variable.0 >= self.values.len() {
            self.values.resize(variable.0 + 1, Value::Unassigned);
        }
        if !self.values[variable.0].is_assigned() {
            self.number_assigned += 1;
        }
        self.values[variable.0] = Value::from(value);
    }

    /// Returns the state of the variable
    pub fn value(&self, variable: Variable) -> Value {
        self.values.get(variable.0).copied().unwrap_or_default()
    }

    /// Returns the value of the variable, or None if it is not assigned
    pub fn get(&self, variable: Variable) -> Option<bool> {
        self.value(variable).to_bool()
    }

    /// Returns true iff the literal evaluates to true under this assignment
    pub fn satisfies(&self, literal: Literal) -> bool {
        match self.get(literal.variable()) {
            Some(value) => literal.is_satisfied_by(value),
            None => false,
        }
    }

    /// Returns the number of assigned variables
    pub fn len(&self) -> usize {
        self.number_assigned
    }

    pub fn is_empty(&self) -> bool {
        self.number_assigned == 0
    }

    /// Iterates over the assigned variables, by increasing identifier
    pub fn iter(&self) -> impl Iterator<Item = (Variable, bool)> + '_ {
        self.values.iter().enumerate().filter_map(|(id, value)| value.to_bool().map(|v| (Variable(id), v)))
    }
}

// Writes one `x<id> = <value>` line per assigned variable
impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (variable, value) in self.iter() {
            writeln!(f, "{} = {}", variable, value)?;
        }
        Ok(())
    }
}
