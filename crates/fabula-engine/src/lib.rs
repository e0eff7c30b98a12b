//! Execution engine for Fabula stories.
//!
//! The engine is a pure state machine: it owns one run's cursor and variable
//! store, borrows the [`fabula_core::Story`] read-only, and emits display
//! side effects through an injected [`Surface`]. It never blocks and never
//! performs I/O of its own. When a story needs user interaction the engine
//! suspends by returning to the caller with an explicit pending status, and
//! the caller resumes it once the input or keypress is available — so a
//! terminal loop, a GUI, and a test harness can all drive the same engine.

/// Error types for the engine.
pub mod error;
/// The execution state machine.
pub mod execution;
/// The display surface the engine emits side effects to.
pub mod surface;

/// Re-export error types.
pub use error::{EngineError, EngineResult};
/// Re-export the state machine types.
pub use execution::{Execution, Status};
/// Re-export surface types.
pub use surface::{Surface, SurfaceEvent, Transcript};
