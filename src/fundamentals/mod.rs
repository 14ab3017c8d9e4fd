//! Fundamentals
//!
//! Self-contained units with no collaborators: the LIFO stack and the small
//! exercises around it. Everything here is synchronous.

pub mod demerit;
pub mod error_logger;
pub mod fizzbuzz;
pub mod math;
pub mod reservation;
pub mod stack;

pub use demerit::{calculate_demerit_points, DemeritError};
pub use error_logger::{ErrorLoggedHandler, ErrorLogger, ErrorLoggerError};
pub use fizzbuzz::FizzBuzz;
pub use reservation::{Reservation, User, UserId};
pub use stack::{Stack, StackError, StackResult};
