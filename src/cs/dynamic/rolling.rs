//! Two-slot window over the most recent subproblem results.
//!
//! Many one-dimensional recurrences only look back one or two steps, so the
//! full table can be replaced by this window. `curr` is the result of the last
//! completed subproblem and `prev` the one before it.

/// The two most recently completed subproblem results of a rolling DP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingPair<T> {
    prev: T,
    curr: T,
}

impl<T: Copy> RollingPair<T> {
    /// Creates a window seeded with the two base cases.
    pub fn new(prev: T, curr: T) -> Self {
        Self { prev, curr }
    }

    /// Result of the subproblem completed before the latest one.
    pub fn prev(&self) -> T {
        self.prev
    }

    /// Result of the latest completed subproblem.
    pub fn curr(&self) -> T {
        self.curr
    }

    /// Pushes `next` as the newest result, dropping the oldest.
    pub fn advance(&mut self, next: T) {
        self.prev = self.curr;
        self.curr = next;
    }

    /// Computes the next result from the window and pushes it.
    pub fn step<F>(&mut self, f: F) -> T
    where
        F: FnOnce(T, T) -> T,
    {
        let next = f(self.prev, self.curr);
        self.advance(next);
        next
    }
}
