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

//! Cooperative cancellation of the search. The solver polls an [`Interrupt`] before each
//! frame and before each unit propagation step, and stops with an `Unknown` outcome as
//! soon as it reports true. Nothing is ever pushed to the solver.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

pub trait Interrupt {
    fn is_interrupted(&self) -> bool;
}

/// Never interrupts the search
#[derive(Debug, Default, Clone, Copy)]
pub struct Never;

impl Interrupt for Never {
    fn is_interrupted(&self) -> bool {
        false
    }
}

impl<F: Fn() -> bool> Interrupt for F {
    fn is_interrupted(&self) -> bool {
        self()
    }
}

/// A cancellation flag, shared between its clones, with an optional deadline. The token
/// is fired either when `cancel` is called on any of its clones or when the deadline is
/// reached.
#[derive(Debug, Default, Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancellationToken {

    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a token that fires `timeout` after its creation. A timeout too large to be
    /// represented never fires.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Instant::now().checked_add(timeout),
        }
    }

    /// Returns a token that fires at the given instant
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Some(deadline),
        }
    }

    /// Fires the token. The search polling this token (or any of its clones) stops at its
    /// next check.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true iff the token has been cancelled or its deadline has passed
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed) || self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

impl Interrupt for CancellationToken {
    fn is_interrupted(&self) -> bool {
        self.is_cancelled()
    }
}
