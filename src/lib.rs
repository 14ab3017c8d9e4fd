//! TestNinja - Unit Testing Exercises
//!
//! Small units written to be tested: a generic LIFO stack and a handful of
//! exercises, plus services whose collaborators sit behind traits so they can
//! be replaced by recording, fault-injecting fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 TestNinja                    │
//! ├─────────────────────────────────────────────┤
//! │  fundamentals   │ stack, fizzbuzz, math,    │
//! │                 │ demerit, error logger,    │
//! │                 │ reservation               │
//! │  mocking        │ services + seam traits    │
//! ├─────────────────────────────────────────────┤
//! │  dst            │ seeded fault injection    │
//! │  config         │ env + .env settings       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use testninja::{Stack, StackError};
//!
//! let mut stack: Stack<String> = Stack::new();
//! assert_eq!(stack.pop(), Err(StackError::InvalidState));
//!
//! stack.push("a".to_string()).unwrap();
//! assert_eq!(stack.count(), 1);
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod constants;
pub mod dst;
pub mod fundamentals;
pub mod mocking;

pub use config::{ConfigError, Settings};
pub use fundamentals::{Stack, StackError, StackResult};
