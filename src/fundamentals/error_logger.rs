//! Error Logger
//!
//! Records the last error and notifies registered handlers with a fresh
//! error id every time something is logged.

use uuid::Uuid;

/// Handler invoked with the id of every logged error.
pub type ErrorLoggedHandler = Box<dyn FnMut(Uuid) + Send>;

/// Logs errors and notifies subscribers.
#[derive(Default)]
pub struct ErrorLogger {
    last_error: Option<String>,
    handlers: Vec<ErrorLoggedHandler>,
}

impl ErrorLogger {
    /// Create a logger with no handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent error logged, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Register a handler called with the id of each logged error.
    pub fn on_error_logged(&mut self, handler: impl FnMut(Uuid) + Send + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Log an error and notify handlers.
    ///
    /// # Errors
    /// Returns `ErrorLoggerError::BlankError` for an empty or whitespace-only
    /// message. Nothing is recorded and no handler runs.
    pub fn log(&mut self, error: &str) -> Result<Uuid, ErrorLoggerError> {
        if error.trim().is_empty() {
            return Err(ErrorLoggerError::BlankError);
        }

        self.last_error = Some(error.to_string());

        let error_id = Uuid::new_v4();
        tracing::error!(error_id = %error_id, "{}", error);

        for handler in &mut self.handlers {
            handler(error_id);
        }

        Ok(error_id)
    }
}

impl std::fmt::Debug for ErrorLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorLogger")
            .field("last_error", &self.last_error)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

/// Error logger errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorLoggerError {
    #[error("error message cannot be empty or whitespace")]
    BlankError,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use test_case::test_case;

    #[test]
    fn test_log_sets_last_error() {
        let mut logger = ErrorLogger::new();

        logger.log("a").unwrap();

        assert_eq!(logger.last_error(), Some("a"));
    }

    #[test_case("" ; "empty")]
    #[test_case(" " ; "space")]
    #[test_case("\t\n" ; "other whitespace")]
    fn test_log_blank_error_is_rejected(error: &str) {
        let mut logger = ErrorLogger::new();

        assert_eq!(logger.log(error), Err(ErrorLoggerError::BlankError));
        assert_eq!(logger.last_error(), None);
    }

    #[test]
    fn test_log_notifies_handler_with_error_id() {
        let mut logger = ErrorLogger::new();
        let seen = Arc::new(Mutex::new(None));
        let seen_clone = Arc::clone(&seen);
        logger.on_error_logged(move |id| {
            *seen_clone.lock().unwrap() = Some(id);
        });

        let error_id = logger.log("a").unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(*seen, Some(error_id));
        assert_ne!(error_id, Uuid::nil());
    }

    #[test]
    fn test_blank_error_does_not_notify() {
        let mut logger = ErrorLogger::new();
        let calls = Arc::new(Mutex::new(0));
        let calls_clone = Arc::clone(&calls);
        logger.on_error_logged(move |_| {
            *calls_clone.lock().unwrap() += 1;
        });

        let _ = logger.log(" ");

        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_each_log_gets_fresh_id() {
        let mut logger = ErrorLogger::new();

        let first = logger.log("a").unwrap();
        let second = logger.log("b").unwrap();

        assert_ne!(first, second);
        assert_eq!(logger.last_error(), Some("b"));
    }
}
