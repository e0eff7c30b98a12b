//! Core types for Fabula: instructions, stories, and the variable store.
//!
//! This crate defines the data model that `.story` files parse into. It is
//! independent of the parser — you can construct a [`Story`] programmatically
//! or deserialize one from JSON.

/// Instruction and text-segment types.
pub mod instruction;
/// The variable store accumulated during a run.
pub mod store;
/// The immutable instruction sequence of a parsed story.
pub mod story;

/// Re-export instruction types.
pub use instruction::{Instruction, Segment};
/// Re-export the variable store.
pub use store::VariableStore;
/// Re-export the story type.
pub use story::Story;
