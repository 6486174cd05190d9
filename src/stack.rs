//! Bounded dynamic-array stack.
//!
//! `BoundedStack` is the container the walker keeps its live path in. It is a
//! plain LIFO over one contiguous buffer, but its capacity is managed
//! explicitly instead of being left to `Vec`'s doubling strategy:
//!
//! ```text
//! push:  4·len ≥ 3·cap            ──▶ cap += 10, then append
//! pop:   4·(len-1) ≤ cap ∧ cap ≥ 20 ──▶ cap -= 10, then remove
//! ```
//!
//! Both thresholds are inclusive and evaluated with integer arithmetic. Growth
//! looks at the size *before* the insertion; shrink looks at the size that
//! will exist *after* the removal, but is applied before the slot is dropped.
//! Keeping that ordering stable matters: flipping it makes a stack sitting on
//! a boundary reallocate on every push/pop pair.
//!
//! ## Invariants
//!
//! - `capacity() >= 10` and `capacity() % 10 == 0` at all times.
//! - `len() <= capacity()`.
//! - A resize copies every live element into the new buffer in order; it never
//!   drops a live element.

use std::fmt;

/// Capacity of a freshly created (or cleared) stack.
pub const INITIAL_CAPACITY: usize = 10;

/// Amount by which a single grow/shrink step changes the capacity.
pub const CAPACITY_STEP: usize = 10;

/// Smallest capacity from which a shrink is allowed.
const SHRINK_FLOOR: usize = INITIAL_CAPACITY + CAPACITY_STEP;

/// Errors raised by [`BoundedStack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    /// `pop` or `peek` on a stack with no elements.
    #[error("stack is empty")]
    Empty,
}

/// LIFO stack over a buffer that grows and shrinks in steps of ten.
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BoundedStack<T> {
    /// Create an empty stack with capacity 10.
    pub fn new() -> Self {
        BoundedStack { items: Vec::with_capacity(INITIAL_CAPACITY), capacity: INITIAL_CAPACITY }
    }

    /// Push `element` as the new top.
    ///
    /// If the stack is at or above 75% occupancy the capacity grows by one
    /// step first. At most one step is taken per call.
    pub fn push(&mut self, element: T) {
        if 4 * self.items.len() >= 3 * self.capacity {
            self.reallocate(self.capacity + CAPACITY_STEP);
        }
        self.items.push(element);
    }

    /// Remove and return the top element.
    ///
    /// If the remaining occupancy will be at or below 25% and the capacity is
    /// at least 20, the buffer shrinks by one step before the element is
    /// removed.
    pub fn pop(&mut self) -> Result<T, StackError> {
        let len = self.items.len();
        if len == 0 {
            return Err(StackError::Empty);
        }

        if 4 * (len - 1) <= self.capacity && self.capacity >= SHRINK_FLOOR {
            self.reallocate(self.capacity - CAPACITY_STEP);
        }

        self.items.pop().ok_or(StackError::Empty)
    }

    /// Borrow the top element without removing it.
    pub fn peek(&self) -> Result<&T, StackError> {
        self.items.last().ok_or(StackError::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Logical capacity (always a multiple of ten, never below ten).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every element and return to the creation state (capacity 10).
    pub fn clear(&mut self) {
        self.items = Vec::with_capacity(INITIAL_CAPACITY);
        self.capacity = INITIAL_CAPACITY;
    }

    /// Iterate from bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Move the live elements into a fresh buffer of `new_capacity` slots.
    fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= INITIAL_CAPACITY);
        debug_assert!(self.items.len() <= new_capacity);

        let mut next = Vec::with_capacity(new_capacity);
        next.append(&mut self.items);
        self.items = next;
        self.capacity = new_capacity;
    }
}

/// Renders top to bottom: `Stack: 3, 2, 1.` (or `Empty stack.`).
impl<T: fmt::Display> fmt::Display for BoundedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return f.write_str("Empty stack.");
        }

        f.write_str("Stack: ")?;
        for (idx, item) in self.items.iter().rev().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str(".")
    }
}
