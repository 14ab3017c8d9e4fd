//! Stack - Generic LIFO Container
//!
//! TigerStyle: Explicit errors for empty access, no partial mutation on
//! failure, count checked before and after every change.
//!
//! The nullable notion is `Option<T>`: `push` accepts anything that converts
//! into `Option<T>`, so a plain value always goes in and `None` is refused.
//!
//! ```
//! use testninja::fundamentals::{Stack, StackError};
//!
//! let mut stack: Stack<&str> = Stack::new();
//! stack.push("a").unwrap();
//! stack.push("b").unwrap();
//!
//! assert_eq!(stack.peek(), Ok(&"b"));
//! assert_eq!(stack.pop(), Ok("b"));
//! assert_eq!(stack.count(), 1);
//! assert_eq!(stack.push(None::<&str>), Err(StackError::InvalidArgument));
//! ```

/// A last-in-first-out sequence. The top is the last element of `items`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty stack with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Number of items currently held.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// True when the stack holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Push an item onto the top.
    ///
    /// # Errors
    /// Returns `StackError::InvalidArgument` for `None`; the stack is unchanged.
    pub fn push(&mut self, item: impl Into<Option<T>>) -> StackResult<()> {
        let item = item.into().ok_or(StackError::InvalidArgument)?;
        let count_before = self.items.len();

        self.items.push(item);

        // Postcondition
        assert_eq!(
            self.items.len(),
            count_before + 1,
            "push must grow the stack by one"
        );
        Ok(())
    }

    /// Remove and return the top item.
    ///
    /// # Errors
    /// Returns `StackError::InvalidState` when the stack is empty.
    pub fn pop(&mut self) -> StackResult<T> {
        let count_before = self.items.len();
        let item = self.items.pop().ok_or(StackError::InvalidState)?;

        // Postcondition
        assert_eq!(
            self.items.len() + 1,
            count_before,
            "pop must shrink the stack by one"
        );
        Ok(item)
    }

    /// Borrow the top item without removing it.
    ///
    /// # Errors
    /// Returns `StackError::InvalidState` when the stack is empty.
    pub fn peek(&self) -> StackResult<&T> {
        self.items.last().ok_or(StackError::InvalidState)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Stack operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    #[error("invalid argument: cannot push None onto a stack")]
    InvalidArgument,

    #[error("invalid state: stack is empty")]
    InvalidState,
}

/// Result type for stack operations.
pub type StackResult<T> = Result<T, StackError>;

// =============================================================================
// Tests
// =============================================================================
