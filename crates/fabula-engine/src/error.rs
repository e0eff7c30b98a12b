//! Error types for the engine.

use thiserror::Error;

use crate::execution::Status;

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while driving a run.
///
/// These are caller precondition violations, never story-content problems:
/// a malformed story is rejected by the parser before execution, and a
/// missing variable resolves to the empty string rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A resume operation was called in a status that does not accept it,
    /// including any resume of a terminated run. The run's cursor and
    /// variable store are left untouched.
    #[error("cannot {operation} while {status}")]
    InvalidState {
        /// The operation that was attempted.
        operation: &'static str,
        /// The status the run was in.
        status: Status,
    },
}
