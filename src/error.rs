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

//! Errors raised while reading problems and running the commands. The search itself
//! never fails: a conflict prunes a branch and a cancellation is reported as an
//! `Unknown` outcome.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The `p cnf <variables> <clauses>` line is malformed.
    #[error("Invalid problem line format: `{0}`")]
    InvalidProblemLine(String),

    /// The input has no problem line.
    #[error("No problem line found in DIMACS file")]
    MissingProblemLine,

    /// The input has more than one problem line.
    #[error("Line {0}: duplicate problem line")]
    DuplicateProblemLine(usize),

    /// A clause line contains a token that is not an integer.
    #[error("Line {line}: invalid literal `{token}`")]
    InvalidLiteral { line: usize, token: String },

    /// A clause line references a variable larger than the declared variable count.
    #[error("Line {line}: variable {variable} exceeds the {declared} declared variables")]
    VariableOutOfRange { line: usize, variable: usize, declared: usize },

    /// The number of clauses does not match the problem line.
    #[error("Expected {expected} clauses but found {found}")]
    ClauseCountMismatch { expected: usize, found: usize },

    /// The `list` command was given something else than a folder.
    #[error("Folder not found: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
